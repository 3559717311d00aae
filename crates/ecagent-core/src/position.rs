//! The position component attached to lattice cells and placed agents.

use crate::component::Component;
use crate::id::Coord;

/// Discrete location of an agent on a 1-, 2- or 3-axis lattice.
///
/// Unused trailing axes are zero, so a 1D position is `{x, 0, 0}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// First axis.
    pub x: i32,
    /// Second axis, 0 on 1D lattices.
    pub y: i32,
    /// Third axis, 0 on 1D and 2D lattices.
    pub z: i32,
}

impl Component for Position {}

impl Position {
    /// Create a position from explicit axis values.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Build a position from a `D`-axis coordinate, zero-filling the
    /// remaining axes. Axes beyond the third are ignored.
    pub fn from_coord<const D: usize>(coord: &Coord<D>) -> Self {
        let axis = |i: usize| coord.get(i).copied().unwrap_or(0);
        Self::new(axis(0), axis(1), axis(2))
    }

    /// The first `D` axes as a coordinate.
    pub fn to_coord<const D: usize>(&self) -> Coord<D> {
        let axes = [self.x, self.y, self.z];
        std::array::from_fn(|i| axes.get(i).copied().unwrap_or(0))
    }

    /// Whether this position sits at `coord`.
    pub fn is_at<const D: usize>(&self, coord: &Coord<D>) -> bool {
        *self == Self::from_coord(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_coord_zero_fills() {
        assert_eq!(Position::from_coord(&[4]), Position::new(4, 0, 0));
        assert_eq!(Position::from_coord(&[4, 2]), Position::new(4, 2, 0));
        assert_eq!(Position::from_coord(&[4, 2, 1]), Position::new(4, 2, 1));
    }

    #[test]
    fn to_coord_truncates() {
        let p = Position::new(1, 2, 3);
        assert_eq!(p.to_coord::<1>(), [1]);
        assert_eq!(p.to_coord::<2>(), [1, 2]);
        assert_eq!(p.to_coord::<3>(), [1, 2, 3]);
    }

    #[test]
    fn is_at_compares_all_axes() {
        let p = Position::new(2, 1, 0);
        assert!(p.is_at(&[2, 1]));
        assert!(!p.is_at(&[2, 0]));
        assert!(!p.is_at(&[2]));
        assert!(Position::new(2, 0, 0).is_at(&[2]));
    }
}
