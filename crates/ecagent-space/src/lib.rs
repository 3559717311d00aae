//! Discrete lattice environments for ECAgent simulations.
//!
//! A [`Lattice`] is an [`Environment`](ecagent_core::Environment) laid out
//! on 1, 2 or 3 axes. It owns one static cell agent per coordinate and
//! places dynamic agents at bounds-checked coordinates by attaching a
//! [`Position`](ecagent_core::Position) component to them.
//!
//! # Backends
//!
//! - [`LineWorld`]: 1 axis (`width`)
//! - [`GridWorld`]: 2 axes (`width`, `height`)
//! - [`CubeWorld`]: 3 axes (`width`, `height`, `depth`)
//!
//! All three are the same generic [`Lattice`] with a different axis count.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod extents;
pub mod lattice;

pub use config::LatticeConfig;
pub use error::{AddAgentError, LatticeError, PlacementError};
pub use extents::Extents;
pub use lattice::{CubeWorld, GridWorld, Lattice, LineWorld};
