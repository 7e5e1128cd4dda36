use crate::bounding_volume::Aabb;
use crate::math::Int;
use crate::query::{CanonicalSplit, SplitResult};

impl CanonicalSplit for Aabb {
    /// Splits this AABB along the given canonical axis.
    ///
    /// # Result
    /// Returns the result of the split. The first AABB returned is the piece lying on the
    /// negative side of the splitting line, covering `[mins, bias)` along `axis`. The second
    /// AABB returned is the piece lying on the positive side, covering `[bias, maxs)`.
    fn canonical_split(&self, axis: usize, bias: Int) -> SplitResult<Self> {
        if self.mins[axis] >= bias {
            SplitResult::Positive
        } else if self.maxs[axis] <= bias {
            SplitResult::Negative
        } else {
            let mut left = *self;
            let mut right = *self;
            left.maxs[axis] = bias;
            right.mins[axis] = bias;
            SplitResult::Pair(left, right)
        }
    }
}
