use crate::math::Int;
use crate::query::{CanonicalSplit, Slice, SplitResult};
use crate::shape::{CutFlags, Facing, SlicedCollider};

fn bounding_sides(axis: usize) -> (Facing, Facing) {
    if axis == 0 {
        (Facing::Left, Facing::Right)
    } else {
        (Facing::Up, Facing::Down)
    }
}

impl CanonicalSplit for SlicedCollider {
    /// Splits this piece along the given canonical axis.
    ///
    /// Both halves inherit every attribute of this piece, including its cut flags, and the
    /// edge they now share is flagged as cut on both of them.
    fn canonical_split(&self, axis: usize, bias: Int) -> SplitResult<Self> {
        match self.aabb.canonical_split(axis, bias) {
            SplitResult::Pair(negative_aabb, positive_aabb) => {
                let (min_side, max_side) = bounding_sides(axis);

                let mut negative = *self;
                negative.aabb = negative_aabb;
                negative.cut |= CutFlags::from_side(max_side);

                let mut positive = *self;
                positive.aabb = positive_aabb;
                positive.cut |= CutFlags::from_side(min_side);

                SplitResult::Pair(negative, positive)
            }
            SplitResult::Negative => SplitResult::Negative,
            SplitResult::Positive => SplitResult::Positive,
        }
    }
}

impl SlicedCollider {
    /// Cuts this piece along the horizontal line `y = line`.
    ///
    /// The part lying towards `far_side` (`Up` or `Down`) is cut off and returned, while
    /// `self` shrinks to the remaining part. Returns `None`, leaving `self` untouched, if the
    /// line does not strictly cross this piece.
    pub fn slice_horizontally(&mut self, line: Int, far_side: Facing) -> Option<Slice<Self>> {
        debug_assert!(far_side.is_horizontal());
        self.slice(line, far_side)
    }

    /// Cuts this piece along the vertical line `x = line`.
    ///
    /// The part lying towards `far_side` (`Left` or `Right`) is cut off and returned, while
    /// `self` shrinks to the remaining part. Returns `None`, leaving `self` untouched, if the
    /// line does not strictly cross this piece.
    pub fn slice_vertically(&mut self, line: Int, far_side: Facing) -> Option<Slice<Self>> {
        debug_assert!(!far_side.is_horizontal());
        self.slice(line, far_side)
    }

    /// Cuts this piece along the line orthogonal to `far_side` at coordinate `line`.
    pub fn slice(&mut self, line: Int, far_side: Facing) -> Option<Slice<Self>> {
        let SplitResult::Pair(negative, positive) = self.canonical_split(far_side.axis(), line)
        else {
            return None;
        };

        let (kept, far) = if far_side.sign() > 0 {
            (negative, positive)
        } else {
            (positive, negative)
        };

        let offset = kept.aabb.mins - self.aabb.mins;
        *self = kept;
        Some(Slice { far, offset })
    }
}
