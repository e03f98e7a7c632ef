use fxhash::FxBuildHasher;

/// Insertion-ordered set: generating sets are semantically unordered, but a
/// stable iteration order keeps graph construction reproducible.
pub type IndexSet<K> = indexmap::IndexSet<K, FxBuildHasher>;
