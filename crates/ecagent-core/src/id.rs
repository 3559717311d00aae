//! Strongly-typed identifiers and the [`Coord`] type alias.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies an agent within an environment's registry.
///
/// Identifiers are caller-chosen strings. Lattice cells use the reserved
/// `CELL_<index>` form produced by [`AgentId::cell`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(String);

impl AgentId {
    /// Create an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier of the static cell stored at linear index `index`.
    ///
    /// Derived from the index rather than the coordinate so that cell
    /// identifiers never depend on the addressing function.
    pub fn cell(index: usize) -> Self {
        Self(format!("CELL_{index}"))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AgentId {
    fn from(v: &str) -> Self {
        Self(v.to_owned())
    }
}

impl From<String> for AgentId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

/// Counter for unique [`ModelId`] allocation.
static MODEL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Handle to the simulation model that owns an agent or environment.
///
/// The model itself (scheduler, clock, systems) lives outside this crate;
/// agents and environments only record which model they belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub u64);

impl ModelId {
    /// Allocate a fresh, process-unique model handle.
    pub fn next() -> Self {
        Self(MODEL_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ModelId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A coordinate on a `D`-axis lattice.
///
/// Axes are ordered `x`, `y`, `z`. Values are signed so that negative
/// out-of-range coordinates can be expressed and rejected.
pub type Coord<const D: usize> = [i32; D];
