//! Agents: identified owners of a component store.

use crate::component::{Component, Components};
use crate::id::{AgentId, ModelId};
use crate::position::Position;

/// A simulated entity: an identifier, the model it belongs to, and the
/// components attached to it.
///
/// Agents own their components exclusively. Environments take agents by
/// value when registering them and hand them back on removal.
///
/// # Examples
///
/// ```
/// use ecagent_core::{Agent, ModelId, Position};
///
/// let mut a = Agent::new("wolf", ModelId(1));
/// a.add_component(Position::new(3, 0, 0));
/// assert_eq!(a.get::<Position>().map(|p| p.x), Some(3));
/// ```
#[derive(Debug)]
pub struct Agent {
    id: AgentId,
    model: ModelId,
    components: Components,
}

impl Agent {
    /// Create an agent with no components.
    pub fn new(id: impl Into<AgentId>, model: ModelId) -> Self {
        Self {
            id: id.into(),
            model,
            components: Components::new(),
        }
    }

    /// The agent's identifier.
    pub fn id(&self) -> &AgentId {
        &self.id
    }

    /// The model this agent belongs to.
    pub fn model(&self) -> ModelId {
        self.model
    }

    /// Reassign the owning model. Components are left untouched.
    pub fn set_model(&mut self, model: ModelId) {
        self.model = model;
    }

    /// Attach a component, returning the previous value of the same type.
    pub fn add_component<T: Component>(&mut self, component: T) -> Option<T> {
        self.components.insert(component)
    }

    /// Detach the component of type `T`.
    pub fn remove_component<T: Component>(&mut self) -> Option<T> {
        self.components.remove::<T>()
    }

    /// Look up a component by type.
    pub fn get<T: Component>(&self) -> Option<&T> {
        self.components.get::<T>()
    }

    /// Look up a component by type for mutation.
    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components.get_mut::<T>()
    }

    /// Whether a component of type `T` is attached.
    pub fn has<T: Component>(&self) -> bool {
        self.components.contains::<T>()
    }

    /// Shorthand for `get::<Position>()`.
    pub fn position(&self) -> Option<&Position> {
        self.get::<Position>()
    }

    /// The full component store.
    pub fn components(&self) -> &Components {
        &self.components
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Hunger(u8);
    impl Component for Hunger {}

    #[test]
    fn new_agent_is_bare() {
        let a = Agent::new("a", ModelId(7));
        assert_eq!(a.id().as_str(), "a");
        assert_eq!(a.model(), ModelId(7));
        assert!(a.components().is_empty());
        assert!(a.position().is_none());
    }

    #[test]
    fn component_lifecycle() {
        let mut a = Agent::new("a", ModelId(1));
        a.add_component(Hunger(3));
        assert!(a.has::<Hunger>());
        a.get_mut::<Hunger>().unwrap().0 += 1;
        assert_eq!(a.remove_component::<Hunger>(), Some(Hunger(4)));
        assert!(!a.has::<Hunger>());
    }

    #[test]
    fn set_model_keeps_components() {
        let mut a = Agent::new("a", ModelId(1));
        a.add_component(Position::new(1, 2, 0));
        a.set_model(ModelId(2));
        assert_eq!(a.model(), ModelId(2));
        assert_eq!(a.position(), Some(&Position::new(1, 2, 0)));
    }
}
