//! Typed component storage.
//!
//! Every [`Agent`](crate::Agent) owns a [`Components`] store mapping a
//! component type to at most one value of that type. Lookups, inserts and
//! removals are keyed by [`TypeId`] and run in O(1).

use indexmap::IndexMap;
use std::any::{type_name, Any, TypeId};
use std::fmt;

/// Marker trait for data that can be attached to an agent.
///
/// Implement it for plain data types; the store handles keying and
/// downcasting.
///
/// ```
/// use ecagent_core::{Component, Components};
///
/// #[derive(Debug, PartialEq)]
/// struct Energy(f32);
/// impl Component for Energy {}
///
/// let mut store = Components::new();
/// store.insert(Energy(3.0));
/// assert_eq!(store.get::<Energy>(), Some(&Energy(3.0)));
/// ```
pub trait Component: Any + fmt::Debug {}

/// Per-agent component store, one value per component type.
///
/// Iteration order is insertion order of the component types still
/// present; removal preserves the relative order of the rest.
#[derive(Default)]
pub struct Components {
    slots: IndexMap<TypeId, Box<dyn Component>>,
}

impl Components {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `component`, replacing and returning any previous value of
    /// the same type.
    pub fn insert<T: Component>(&mut self, component: T) -> Option<T> {
        self.slots
            .insert(TypeId::of::<T>(), Box::new(component))
            .and_then(downcast_box)
    }

    /// Detach and return the component of type `T`, if present.
    pub fn remove<T: Component>(&mut self) -> Option<T> {
        self.slots
            .shift_remove(&TypeId::of::<T>())
            .and_then(downcast_box)
    }

    /// Shared access to the component of type `T`.
    pub fn get<T: Component>(&self) -> Option<&T> {
        let slot: &dyn Any = &**self.slots.get(&TypeId::of::<T>())?;
        slot.downcast_ref::<T>()
    }

    /// Exclusive access to the component of type `T`.
    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        let slot: &mut dyn Any = &mut **self.slots.get_mut(&TypeId::of::<T>())?;
        slot.downcast_mut::<T>()
    }

    /// Whether a component of type `T` is attached.
    pub fn contains<T: Component>(&self) -> bool {
        self.slots.contains_key(&TypeId::of::<T>())
    }

    /// Number of attached components.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no components are attached.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.values()).finish()
    }
}

fn downcast_box<T: Component>(slot: Box<dyn Component>) -> Option<T> {
    let slot: Box<dyn Any> = slot;
    match slot.downcast::<T>() {
        Ok(value) => Some(*value),
        Err(_) => {
            // Slots are keyed by the stored value's TypeId.
            tracing::error!(component = type_name::<T>(), "component slot type mismatch");
            None
        }
    }
}
