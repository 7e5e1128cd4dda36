//! Various unsorted geometrical and logical operators.

pub use self::hashset::HashSet;
pub use self::sign::sign;

pub mod hashset;
mod sign;
