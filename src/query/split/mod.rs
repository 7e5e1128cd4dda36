pub use self::split::{CanonicalSplit, Slice, SplitResult};

mod split;
mod split_aabb;
mod split_sliced_collider;
