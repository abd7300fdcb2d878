#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Spatial contracts shared across the Warren simulation core.
//!
//! This crate defines the coordinate arithmetic, the bounded region that
//! anchors every map, and the generic [`Grid`] storage that the authoritative
//! world builds on. The world crate layers actor placement on top of these
//! types; adapters use [`Grid::stringify`] as their sole read path for
//! display.

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod grid;

pub use grid::Grid;

/// Immutable integer point on the 2-D map.
///
/// `y` grows downward so that textual map rows read top-to-bottom, matching
/// the legend format consumed by [`Grid::parse`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    x: i32,
    y: i32,
}

impl Coord {
    /// Creates a new coordinate from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal component of the coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical component of the coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Neighboring coordinate one step toward decreasing `x`.
    #[must_use]
    pub const fn left(&self) -> Self {
        Self::new(self.x - 1, self.y)
    }

    /// Neighboring coordinate one step toward increasing `x`.
    #[must_use]
    pub const fn right(&self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    /// Neighboring coordinate one step toward decreasing `y`.
    #[must_use]
    pub const fn up(&self) -> Self {
        Self::new(self.x, self.y - 1)
    }

    /// Neighboring coordinate one step toward increasing `y`.
    #[must_use]
    pub const fn down(&self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    /// Euclidean length of the coordinate treated as a vector.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        f64::from(self.x).hypot(f64::from(self.y))
    }

    /// Computes the Manhattan distance between two coordinates.
    #[must_use]
    pub const fn manhattan_distance(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Computes the Chebyshev distance between two coordinates.
    #[must_use]
    pub fn chebyshev_distance(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl std::ops::Add for Coord {
    type Output = Coord;

    fn add(self, other: Coord) -> Coord {
        Coord::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Coord {
    type Output = Coord;

    fn sub(self, other: Coord) -> Coord {
        Coord::new(self.x - other.x, self.y - other.y)
    }
}

/// Axis-aligned rectangle covering the half-open range `[origin, origin + size)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    origin: Coord,
    size: Coord,
}

impl Rect {
    /// Constructs a rectangle from an origin corner and size.
    ///
    /// Negative size components are clamped to zero so the half-open range
    /// stays well-formed.
    #[must_use]
    pub fn from_origin_and_size(origin: Coord, size: Coord) -> Self {
        Self {
            origin,
            size: Coord::new(size.x().max(0), size.y().max(0)),
        }
    }

    /// Constructs a rectangle anchored at the zero coordinate.
    #[must_use]
    pub fn from_zero(size: Coord) -> Self {
        Self::from_origin_and_size(Coord::new(0, 0), size)
    }

    /// Upper-left corner that anchors the rectangle.
    #[must_use]
    pub const fn top_left(&self) -> Coord {
        self.origin
    }

    /// Dimensions of the rectangle.
    #[must_use]
    pub const fn size(&self) -> Coord {
        self.size
    }

    /// Open lower-right corner, `origin + size`; itself always out of bounds.
    #[must_use]
    pub fn bottom_right(&self) -> Coord {
        self.origin + self.size
    }

    /// Reports whether the coordinate falls inside the half-open range.
    #[must_use]
    pub fn in_bounds(&self, c: Coord) -> bool {
        if c.x() < self.origin.x() || c.y() < self.origin.y() {
            return false;
        }
        let br = self.bottom_right();
        c.x() < br.x() && c.y() < br.y()
    }

    /// Number of cells covered by the rectangle.
    #[must_use]
    pub const fn area(&self) -> i64 {
        self.size.x() as i64 * self.size.y() as i64
    }

    /// Returns the successor of `c` in row-major order, left-to-right then
    /// top-to-bottom.
    ///
    /// `Ok(None)` marks the end of the traversal once `c` is the last cell;
    /// that terminal is not an error. Passing a coordinate outside the
    /// rectangle fails with [`GridError::OutOfBounds`].
    pub fn next(&self, c: Coord) -> Result<Option<Coord>, GridError> {
        if !self.in_bounds(c) {
            return Err(GridError::OutOfBounds);
        }
        let br = self.bottom_right();
        if c.x() + 1 < br.x() {
            return Ok(Some(c.right()));
        }
        if c.y() + 1 < br.y() {
            return Ok(Some(Coord::new(self.origin.x(), c.y() + 1)));
        }
        Ok(None)
    }
}

/// Failures surfaced by region and grid operations.
///
/// Construction failures never partially apply; bounds failures are expected
/// and recoverable, typically answered with "try another target".
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The coordinate lies outside the grid's bounded region.
    #[error("coordinate out of bounds")]
    OutOfBounds,
    /// The provided cell storage does not match the requested dimensions.
    #[error("expected {expected} cells, got {actual}")]
    SizeMismatch {
        /// Cell count implied by the requested width and height.
        expected: usize,
        /// Cell count actually supplied by the caller.
        actual: usize,
    },
    /// The legend text contained no usable rows.
    #[error("legend has no rows")]
    NoRows,
    /// The legend rows differ in length after trimming.
    #[error("legend rows have unequal lengths")]
    UnequalRowLengths,
    /// A glyph in the legend text is not covered by the mapping function.
    #[error("glyph '{0}' is not defined by the legend")]
    UnknownGlyph(char),
    /// A render callback produced an empty string for a cell.
    #[error("renderer produced an empty glyph")]
    BlankGlyph,
}

#[cfg(test)]
mod tests {
    use super::{Coord, GridError, Rect};
    use serde::{de::DeserializeOwned, Serialize};

    #[test]
    fn coordinate_arithmetic_is_componentwise() {
        let a = Coord::new(3, -2);
        let b = Coord::new(-1, 5);
        assert_eq!(a + b, Coord::new(2, 3));
        assert_eq!(a - b, Coord::new(4, -7));
    }

    #[test]
    fn unit_steps_follow_screen_orientation() {
        let c = Coord::new(4, 4);
        assert_eq!(c.left(), Coord::new(3, 4));
        assert_eq!(c.right(), Coord::new(5, 4));
        assert_eq!(c.up(), Coord::new(4, 3));
        assert_eq!(c.down(), Coord::new(4, 5));
    }

    #[test]
    fn distances_match_expectation() {
        let origin = Coord::new(1, 1);
        let destination = Coord::new(4, 3);
        assert_eq!(origin.manhattan_distance(destination), 5);
        assert_eq!(destination.manhattan_distance(origin), 5);
        assert_eq!(origin.chebyshev_distance(destination), 3);
        assert_eq!(destination.chebyshev_distance(origin), 3);
    }

    #[test]
    fn magnitude_is_euclidean() {
        assert!((Coord::new(3, 4).magnitude() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bounds_are_half_open() {
        let rect = Rect::from_origin_and_size(Coord::new(1, 1), Coord::new(2, 3));
        assert!(rect.in_bounds(Coord::new(1, 1)));
        assert!(rect.in_bounds(Coord::new(2, 3)));
        assert!(!rect.in_bounds(Coord::new(3, 1)));
        assert!(!rect.in_bounds(Coord::new(1, 4)));
        assert!(!rect.in_bounds(Coord::new(0, 1)));
        assert!(!rect.in_bounds(rect.bottom_right()));
    }

    #[test]
    fn negative_sizes_clamp_to_empty() {
        let rect = Rect::from_zero(Coord::new(-3, 5));
        assert_eq!(rect.area(), 0);
        assert!(!rect.in_bounds(Coord::new(0, 0)));
    }

    #[test]
    fn next_walks_the_region_in_row_major_order() {
        let rect = Rect::from_zero(Coord::new(2, 2));
        let mut visited = vec![rect.top_left()];
        while let Some(c) = rect
            .next(*visited.last().expect("non-empty"))
            .expect("in bounds")
        {
            visited.push(c);
        }
        assert_eq!(
            visited,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
            ]
        );
    }

    #[test]
    fn next_rejects_out_of_bounds_start() {
        let rect = Rect::from_zero(Coord::new(2, 2));
        assert_eq!(rect.next(Coord::new(2, 0)), Err(GridError::OutOfBounds));
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn coord_round_trips_through_bincode() {
        assert_round_trip(&Coord::new(-7, 12));
    }

    #[test]
    fn rect_round_trips_through_bincode() {
        let rect = Rect::from_origin_and_size(Coord::new(2, 3), Coord::new(5, 7));
        assert_round_trip(&rect);
    }
}
