use crate::math::{Int, Vector};

/// The result of a line-splitting operation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SplitResult<T> {
    /// The split operation yield two results: one lying on the negative side of the line
    /// and the second lying on the positive side of the line.
    Pair(T, T),
    /// The shape being split is fully contained in the negative side of the line.
    Negative,
    /// The shape being split is fully contained in the positive side of the line.
    Positive,
}

/// Shapes that can be split by an axis-aligned line.
pub trait CanonicalSplit: Sized {
    /// Splits this shape along the given canonical axis.
    ///
    /// The splitting line is orthogonal to the `axis`-th coordinate axis and passes through
    /// the coordinate `bias` along it. The line must strictly cross the shape for a
    /// [`SplitResult::Pair`] to be produced; a shape merely touching the line lies entirely on
    /// one side of it.
    fn canonical_split(&self, axis: usize, bias: Int) -> SplitResult<Self>;
}

/// The outcome of slicing a piece in place.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slice<T> {
    /// The part that was cut off.
    pub far: T,
    /// How much the top-left pixel of the part kept in place moved.
    ///
    /// Pieces keep world-space boxes, so this is only informative: the kept piece's
    /// `world_position()` already includes it.
    pub offset: Vector,
}
