//! Validated lattice extents and linear addressing.
//!
//! Cells are stored in a dense arena. A coordinate maps to its arena index
//! with the x axis varying fastest:
//!
//! ```text
//! addr(x)       = x
//! addr(x, y)    = x + width * y
//! addr(x, y, z) = x + width * (y + height * z)
//! ```
//!
//! The same formula is used when the arena is built and when it is looked
//! up, so [`Extents::coord_of`] and [`Extents::linear_address`] are inverse
//! bijections between in-range coordinates and `0..cell_count()`.

use crate::error::LatticeError;
use ecagent_core::Coord;

/// Per-axis sizes of a `D`-axis lattice, each at least 1.
///
/// # Examples
///
/// ```
/// use ecagent_space::Extents;
///
/// let e = Extents::new([4, 3, 2]).unwrap();
/// assert_eq!(e.cell_count(), 24);
/// assert_eq!(e.linear_address(&[1, 2, 1]), Some(1 + 4 * (2 + 3 * 1)));
/// assert_eq!(e.coord_of(21), Some([1, 2, 1]));
/// assert_eq!(e.linear_address(&[4, 0, 0]), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extents<const D: usize> {
    sizes: [u32; D],
    cell_count: usize,
}

impl<const D: usize> Extents<D> {
    /// Largest accepted extent: coordinates are `i32`.
    pub const MAX_EXTENT: u32 = i32::MAX as u32;

    /// Validate `sizes` and precompute the cell count.
    pub fn new(sizes: [u32; D]) -> Result<Self, LatticeError> {
        const { assert!(matches!(D, 1..=3), "lattices have 1, 2 or 3 axes") };

        for (axis, &value) in sizes.iter().enumerate() {
            if value < 1 {
                return Err(LatticeError::InvalidExtent { axis, value });
            }
            if value > Self::MAX_EXTENT {
                return Err(LatticeError::DimensionTooLarge {
                    axis,
                    value,
                    max: Self::MAX_EXTENT,
                });
            }
        }
        let cell_count = sizes
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n as usize))
            .ok_or_else(|| LatticeError::TooManyCells {
                extents: sizes.to_vec(),
            })?;
        Ok(Self { sizes, cell_count })
    }

    /// The per-axis sizes.
    pub fn sizes(&self) -> [u32; D] {
        self.sizes
    }

    /// Product of all extents.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Whether every axis of `coord` is in `[0, extent)`.
    pub fn contains(&self, coord: &Coord<D>) -> bool {
        coord
            .iter()
            .zip(self.sizes.iter())
            .all(|(&c, &n)| c >= 0 && (c as u32) < n)
    }

    /// Arena index of `coord`, or `None` if any axis is out of range.
    pub fn linear_address(&self, coord: &Coord<D>) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        // Horner form of x + e0 * (y + e1 * z).
        Some(
            coord
                .iter()
                .zip(self.sizes.iter())
                .rev()
                .fold(0usize, |addr, (&c, &n)| addr * n as usize + c as usize),
        )
    }

    /// Coordinate stored at arena index `index`, or `None` past the end.
    pub fn coord_of(&self, index: usize) -> Option<Coord<D>> {
        (index < self.cell_count).then(|| self.unrank(index))
    }

    /// All coordinates in arena order.
    pub fn coords(&self) -> impl Iterator<Item = Coord<D>> + '_ {
        (0..self.cell_count).map(|i| self.unrank(i))
    }

    /// Human-readable valid range, e.g. `[0, 4) x [0, 3)`.
    pub fn describe_bounds(&self) -> String {
        self.sizes
            .iter()
            .map(|n| format!("[0, {n})"))
            .collect::<Vec<_>>()
            .join(" x ")
    }

    /// Inverse of [`linear_address`](Self::linear_address) for
    /// `index < cell_count`.
    pub(crate) fn unrank(&self, mut index: usize) -> Coord<D> {
        let mut coord = [0i32; D];
        for (c, &n) in coord.iter_mut().zip(self.sizes.iter()) {
            let n = n as usize;
            *c = (index % n) as i32;
            index /= n;
        }
        coord
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_extent_rejected_on_any_axis() {
        assert_eq!(
            Extents::new([0]),
            Err(LatticeError::InvalidExtent { axis: 0, value: 0 })
        );
        assert_eq!(
            Extents::new([3, 0]),
            Err(LatticeError::InvalidExtent { axis: 1, value: 0 })
        );
        assert_eq!(
            Extents::new([3, 2, 0]),
            Err(LatticeError::InvalidExtent { axis: 2, value: 0 })
        );
    }

    #[test]
    fn extent_above_i32_max_rejected() {
        let result = Extents::new([i32::MAX as u32 + 1]);
        assert!(matches!(
            result,
            Err(LatticeError::DimensionTooLarge { axis: 0, .. })
        ));
        assert!(Extents::new([i32::MAX as u32]).is_ok());
    }

    #[test]
    fn overflowing_cell_count_rejected() {
        let max = i32::MAX as u32;
        assert!(matches!(
            Extents::new([max, max, max]),
            Err(LatticeError::TooManyCells { .. })
        ));
    }

    #[test]
    fn addressing_2d_matches_row_major_x_fastest() {
        let e = Extents::new([3, 2]).unwrap();
        let coords: Vec<_> = e.coords().collect();
        assert_eq!(
            coords,
            vec![[0, 0], [1, 0], [2, 0], [0, 1], [1, 1], [2, 1]]
        );
        assert_eq!(e.linear_address(&[2, 1]), Some(5));
    }

    #[test]
    fn addressing_3d_uses_height_for_z_stride() {
        // width=2, height=3, depth=4: z stride is width*height = 6.
        let e = Extents::new([2, 3, 4]).unwrap();
        assert_eq!(e.linear_address(&[0, 0, 1]), Some(6));
        assert_eq!(e.linear_address(&[1, 2, 3]), Some(1 + 2 * (2 + 3 * 3)));
        assert_eq!(e.coord_of(23), Some([1, 2, 3]));
        assert_eq!(e.coord_of(24), None);
    }

    #[test]
    fn out_of_range_has_no_address() {
        let e = Extents::new([4, 4]).unwrap();
        assert_eq!(e.linear_address(&[-1, 0]), None);
        assert_eq!(e.linear_address(&[0, 4]), None);
        assert!(!e.contains(&[4, 0]));
    }

    #[test]
    fn describe_bounds_lists_axes() {
        let e = Extents::new([4, 3]).unwrap();
        assert_eq!(e.describe_bounds(), "[0, 4) x [0, 3)");
    }

    proptest! {
        #[test]
        fn address_round_trips_3d(
            w in 1u32..8,
            h in 1u32..8,
            d in 1u32..8,
            x in 0i32..8,
            y in 0i32..8,
            z in 0i32..8,
        ) {
            let e = Extents::new([w, h, d]).unwrap();
            let coord = [x % w as i32, y % h as i32, z % d as i32];
            let addr = e.linear_address(&coord).unwrap();
            prop_assert!(addr < e.cell_count());
            prop_assert_eq!(e.coord_of(addr), Some(coord));
        }

        #[test]
        fn addresses_form_a_bijection(w in 1u32..6, h in 1u32..6) {
            let e = Extents::new([w, h]).unwrap();
            for (i, coord) in e.coords().enumerate() {
                prop_assert_eq!(e.linear_address(&coord), Some(i));
            }
            prop_assert_eq!(e.coords().count(), (w * h) as usize);
        }

        #[test]
        fn out_of_range_never_addresses(
            w in 1u32..10,
            x in -20i32..20,
        ) {
            let e = Extents::new([w]).unwrap();
            let inside = x >= 0 && x < w as i32;
            prop_assert_eq!(e.linear_address(&[x]).is_some(), inside);
        }
    }
}
