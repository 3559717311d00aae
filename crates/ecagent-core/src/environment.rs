//! The base environment: a model-owned registry of agents.

use crate::agent::Agent;
use crate::id::{AgentId, ModelId};
use indexmap::IndexMap;

/// Identifier given to environments constructed without an explicit one.
pub const DEFAULT_ENVIRONMENT_ID: &str = "ENVIRONMENT";

/// Registry of the agents living in a simulation environment.
///
/// Agents are keyed by [`AgentId`] with O(1) insert, lookup and removal.
/// Iteration follows registry order, which is insertion order until the
/// first removal; removal swaps the last agent into the vacated slot.
#[derive(Debug)]
pub struct Environment {
    id: String,
    model: ModelId,
    agents: IndexMap<AgentId, Agent>,
}

impl Environment {
    /// Create an empty environment with the default identifier.
    pub fn new(model: ModelId) -> Self {
        Self::with_id(model, DEFAULT_ENVIRONMENT_ID)
    }

    /// Create an empty environment with an explicit identifier.
    pub fn with_id(model: ModelId, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            model,
            agents: IndexMap::new(),
        }
    }

    /// The environment's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The model that owns this environment.
    pub fn model(&self) -> ModelId {
        self.model
    }

    /// Reassign the owning model. Registered agents are not touched.
    pub fn set_model(&mut self, model: ModelId) {
        self.model = model;
    }

    /// Register `agent`.
    ///
    /// Returns `Err(agent)` unchanged if an agent with the same identifier
    /// is already registered.
    pub fn add_agent(&mut self, agent: Agent) -> Result<(), Agent> {
        if self.agents.contains_key(agent.id()) {
            return Err(agent);
        }
        tracing::trace!(environment = %self.id, agent = %agent.id(), "agent registered");
        self.agents.insert(agent.id().clone(), agent);
        Ok(())
    }

    /// Deregister and return the agent with identifier `id`.
    ///
    /// Removing an unknown identifier is a no-op returning `None`.
    pub fn remove_agent(&mut self, id: &AgentId) -> Option<Agent> {
        let agent = self.agents.swap_remove(id)?;
        tracing::trace!(environment = %self.id, agent = %id, "agent deregistered");
        Some(agent)
    }

    /// Look up a registered agent.
    pub fn agent(&self, id: &AgentId) -> Option<&Agent> {
        self.agents.get(id)
    }

    /// Look up a registered agent for mutation.
    pub fn agent_mut(&mut self, id: &AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id)
    }

    /// Whether an agent with identifier `id` is registered.
    pub fn contains_agent(&self, id: &AgentId) -> bool {
        self.agents.contains_key(id)
    }

    /// Registered agents in registry order.
    pub fn agents(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.values()
    }

    /// Number of registered agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether no agents are registered.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
