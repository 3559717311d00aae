//! Test fixtures and helpers for ECAgent development.
//!
//! Provides a fixed [`TEST_MODEL`] handle, a couple of plain components for
//! exercising cell generators and component round trips, and small helpers
//! for building agents and comparing query results.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use ecagent_core::{Agent, Component, ModelId};

/// Model handle used by fixtures. Real code allocates with
/// [`ModelId::next`].
pub const TEST_MODEL: ModelId = ModelId(0);

/// Per-cell resource amount, for cell generator tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grass(pub u32);

impl Component for Grass {}

/// Free-form label component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label(pub String);

impl Component for Label {}

/// A bare agent owned by [`TEST_MODEL`].
pub fn agent(id: &str) -> Agent {
    Agent::new(id, TEST_MODEL)
}

/// `n` bare agents named `agent_0 .. agent_{n-1}`.
pub fn agents(n: usize) -> Vec<Agent> {
    (0..n).map(|i| agent(&format!("agent_{i}"))).collect()
}

/// Identifiers of a query result, for order-sensitive assertions.
pub fn ids(agents: &[&Agent]) -> Vec<String> {
    agents.iter().map(|a| a.id().to_string()).collect()
}
