//! ECAgent: entity-component agent simulation on discrete lattices.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the ECAgent sub-crates. For most users, adding `ecagent` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ecagent::prelude::*;
//!
//! #[derive(Debug)]
//! struct Grass(u32);
//! impl Component for Grass {}
//!
//! let model = ModelId::next();
//! let mut world = GridWorld::new([8, 8], model).unwrap();
//! world.add_cell_component(|cell| {
//!     cell.add_component(Grass(5));
//! });
//!
//! world.add_agent(Agent::new("sheep", model), [3, 4]).unwrap();
//! assert_eq!(world.agents_at(&[3, 4]).len(), 1);
//!
//! let cell = world.cell(&[3, 4]).unwrap();
//! assert_eq!(cell.get::<Grass>().map(|g| g.0), Some(5));
//!
//! let sheep = world.remove_agent(&"sheep".into()).unwrap();
//! assert!(sheep.position().is_none());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ecagent-core` | IDs, components, agents, base environment |
//! | [`space`] | `ecagent-space` | Lattice environments, extents, config |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: IDs, components, agents and the base environment
/// (`ecagent-core`).
pub use ecagent_core as types;

/// Lattice environments and their configuration (`ecagent-space`).
pub use ecagent_space as space;

/// Commonly used types, importable with `use ecagent::prelude::*`.
pub mod prelude {
    pub use ecagent_core::{
        Agent, AgentId, Component, Components, Coord, Environment, ModelId, Position,
    };
    pub use ecagent_space::{
        AddAgentError, CubeWorld, Extents, GridWorld, Lattice, LatticeConfig, LatticeError,
        LineWorld, PlacementError,
    };
}
