//! Lattice configuration and validation.
//!
//! [`LatticeConfig`] is the builder input for constructing a [`Lattice`]
//! from external data. [`validate()`](LatticeConfig::validate) checks the
//! extents without allocating any cells.

use crate::error::LatticeError;
use crate::extents::Extents;
use crate::lattice::Lattice;
use ecagent_core::{ModelId, DEFAULT_ENVIRONMENT_ID};

/// Declarative description of a lattice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatticeConfig<const D: usize> {
    /// Per-axis sizes (`width`, `height`, `depth`).
    pub extents: [u32; D],
    /// Environment identifier. Default: `"ENVIRONMENT"`.
    pub id: String,
}

impl<const D: usize> LatticeConfig<D> {
    /// Config with the given extents and the default identifier.
    pub fn new(extents: [u32; D]) -> Self {
        Self {
            extents,
            id: DEFAULT_ENVIRONMENT_ID.to_owned(),
        }
    }

    /// Replace the environment identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Check structural invariants without building the lattice.
    pub fn validate(&self) -> Result<(), LatticeError> {
        Extents::new(self.extents).map(|_| ())
    }

    /// Build the lattice described by this config, owned by `model`.
    pub fn build(self, model: ModelId) -> Result<Lattice<D>, LatticeError> {
        Lattice::from_config(self, model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_id_is_environment() {
        let config = LatticeConfig::new([4]);
        assert_eq!(config.id, "ENVIRONMENT");
        config.validate().unwrap();
    }

    #[test]
    fn validate_rejects_zero_extent() {
        let config = LatticeConfig::new([4, 0, 2]);
        assert_eq!(
            config.validate(),
            Err(LatticeError::InvalidExtent { axis: 1, value: 0 })
        );
    }

    #[test]
    fn build_uses_config_id() {
        let lattice = LatticeConfig::new([2, 2])
            .with_id("meadow")
            .build(ModelId(3))
            .unwrap();
        assert_eq!(lattice.id(), "meadow");
        assert_eq!(lattice.model(), ModelId(3));
        assert_eq!(lattice.dimensions(), [2, 2]);
    }
}
