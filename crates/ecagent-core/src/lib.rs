//! Core types for the ECAgent simulation framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! entity-component primitives that every environment builds on: agent and
//! model identifiers, the typed component store, the [`Agent`] itself, the
//! [`Position`] component, and the base [`Environment`] agent registry.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod component;
pub mod environment;
pub mod id;
pub mod position;

pub use agent::Agent;
pub use component::{Component, Components};
pub use environment::{Environment, DEFAULT_ENVIRONMENT_ID};
pub use id::{AgentId, Coord, ModelId};
pub use position::Position;
