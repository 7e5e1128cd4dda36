//! Axis Aligned Bounding Box on the pixel grid.

use crate::math::{Int, Point, Vector, DIM};
use crate::shape::Facing;

/// A pixel-aligned Axis-Aligned Bounding Box (AABB).
///
/// The box covers the half-open ranges `[mins.x, maxs.x) × [mins.y, maxs.y)`: `mins` is the
/// top-left pixel included in the box and `maxs` is the first pixel past its bottom-right
/// corner. Two boxes sharing an edge therefore touch without intersecting.
///
/// # Example
///
/// ```rust
/// use portalslice2d::bounding_volume::Aabb;
/// use portalslice2d::math::Point;
///
/// let aabb = Aabb::with_size(Point::new(88, 0), 24, 16);
/// assert_eq!(aabb.maxs, Point::new(112, 16));
/// assert_eq!(aabb.area(), 24 * 16);
///
/// let right = Aabb::with_size(Point::new(112, 0), 8, 16);
/// assert!(!aabb.intersects(&right));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Aabb {
    /// The top-left pixel of the box (inclusive).
    pub mins: Point,
    /// The pixel just past the bottom-right corner of the box (exclusive).
    pub maxs: Point,
}

impl Aabb {
    /// Creates a new AABB from its two corners.
    #[inline]
    pub fn new(mins: Point, maxs: Point) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its top-left pixel and its size.
    #[inline]
    pub fn with_size(mins: Point, width: Int, height: Int) -> Aabb {
        Aabb::new(mins, mins + Vector::new(width, height))
    }

    /// Creates an invalid AABB with inverted bounds, the neutral element of [`Aabb::merge`].
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Point::new(Int::MAX, Int::MAX),
            Point::new(Int::MIN, Int::MIN),
        )
    }

    /// Creates the smallest AABB containing both corner points, in any order.
    #[inline]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.inf(&b), a.sup(&b))
    }

    /// The width of this box.
    #[inline]
    pub fn width(&self) -> Int {
        self.maxs.x - self.mins.x
    }

    /// The height of this box.
    #[inline]
    pub fn height(&self) -> Int {
        self.maxs.y - self.mins.y
    }

    /// The number of pixels covered by this box.
    #[inline]
    pub fn area(&self) -> i64 {
        i64::from(self.width()) * i64::from(self.height())
    }

    /// Does this box cover no pixel at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mins.x >= self.maxs.x || self.mins.y >= self.maxs.y
    }

    /// The half-open range covered by this box along `axis`.
    #[inline]
    pub fn interval(&self, axis: usize) -> (Int, Int) {
        (self.mins[axis], self.maxs[axis])
    }

    /// Coordinate of the given edge of this box.
    ///
    /// For `Left`/`Up` this is the first covered column/row, for `Right`/`Down` the first
    /// column/row past the box.
    #[inline]
    pub fn edge(&self, side: Facing) -> Int {
        match side {
            Facing::Left => self.mins.x,
            Facing::Right => self.maxs.x,
            Facing::Up => self.mins.y,
            Facing::Down => self.maxs.y,
        }
    }

    /// Returns this box translated by `translation`.
    #[inline]
    pub fn translated(mut self, translation: &Vector) -> Self {
        self.mins += translation;
        self.maxs += translation;
        self
    }

    /// Enlarges this box so it also contains `other`.
    #[inline]
    pub fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    /// The smallest box containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        let mut result = *self;
        result.merge(other);
        result
    }

    /// Do `self` and `other` share at least one pixel?
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        (0..DIM).all(|i| self.mins[i] < other.maxs[i] && other.mins[i] < self.maxs[i])
    }

    /// Computes the intersection of this box and another one.
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let result = Aabb {
            mins: self.mins.sup(&other.mins),
            maxs: self.maxs.inf(&other.maxs),
        };

        if result.is_empty() {
            None
        } else {
            Some(result)
        }
    }

    /// Does `self` fully contain `other`?
    #[inline]
    pub fn contains(&self, other: &Aabb) -> bool {
        (0..DIM).all(|i| self.mins[i] <= other.mins[i] && other.maxs[i] <= self.maxs[i])
    }

    /// Is `other` resting against the `side` edge of `self` from the outside?
    ///
    /// The two boxes must not intersect, must touch along that edge, and must overlap
    /// along the edge's direction.
    pub fn is_flush_against(&self, other: &Aabb, side: Facing) -> bool {
        let axis = side.axis();
        let across = 1 - axis;
        let overlaps_across =
            self.mins[across] < other.maxs[across] && other.mins[across] < self.maxs[across];

        overlaps_across && other.edge(side.opposite()) == self.edge(side)
    }
}
