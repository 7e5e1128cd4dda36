//! Non-persistent geometric queries.
//!
//! The only query needed by sliced solids is splitting a box along an axis-aligned line,
//! provided by [`CanonicalSplit`] for plain boxes and sliced pieces alike.

pub use self::split::{CanonicalSplit, Slice, SplitResult};

mod split;
