//! Error types for lattice construction and agent placement.

use ecagent_core::{Agent, AgentId};
use std::error::Error;
use std::fmt;

/// Errors arising from lattice construction or configuration validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// An extent is below 1.
    InvalidExtent {
        /// Axis index (0 = x).
        axis: usize,
        /// The offending extent.
        value: u32,
    },
    /// An extent does not fit the signed coordinate range.
    DimensionTooLarge {
        /// Axis index (0 = x).
        axis: usize,
        /// The offending extent.
        value: u32,
        /// Largest accepted extent.
        max: u32,
    },
    /// The product of the extents overflows `usize`.
    TooManyCells {
        /// The requested extents.
        extents: Vec<u32>,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent { axis, value } => {
                write!(f, "extent {value} on axis {axis} must be at least 1")
            }
            Self::DimensionTooLarge { axis, value, max } => {
                write!(f, "extent {value} on axis {axis} exceeds maximum {max}")
            }
            Self::TooManyCells { extents } => {
                write!(f, "lattice with extents {extents:?} has too many cells")
            }
        }
    }
}

impl Error for LatticeError {}

/// Reasons an agent could not be placed on a lattice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// A coordinate axis is outside the lattice extents.
    OutOfBounds {
        /// The rejected coordinate.
        coord: Vec<i32>,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// An agent with the same identifier is already registered.
    DuplicateAgent {
        /// The clashing identifier.
        id: AgentId,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord:?} out of bounds: {bounds}")
            }
            Self::DuplicateAgent { id } => write!(f, "agent '{id}' is already registered"),
        }
    }
}

impl Error for PlacementError {}

/// A rejected [`Lattice::add_agent`](crate::Lattice::add_agent) call.
///
/// Carries the agent back to the caller exactly as it was passed in, so a
/// placement can be retried with a corrected coordinate.
#[derive(Debug)]
pub struct AddAgentError {
    reason: PlacementError,
    agent: Agent,
}

impl AddAgentError {
    pub(crate) fn new(reason: PlacementError, agent: Agent) -> Self {
        Self { reason, agent }
    }

    /// Why the placement was rejected.
    pub fn reason(&self) -> &PlacementError {
        &self.reason
    }

    /// The rejected agent.
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Recover the rejected agent.
    pub fn into_agent(self) -> Agent {
        self.agent
    }

    /// Split into the rejection reason and the agent.
    pub fn into_parts(self) -> (PlacementError, Agent) {
        (self.reason, self.agent)
    }
}

impl fmt::Display for AddAgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot add agent '{}': {}", self.agent.id(), self.reason)
    }
}

impl Error for AddAgentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.reason)
    }
}
