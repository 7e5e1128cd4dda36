//! The hash-set used to track per-frame actor bookkeeping.

/// A hash-set with the default `hashbrown` hasher.
pub type HashSet<K> = hashbrown::HashSet<K>;
