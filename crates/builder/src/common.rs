use fxhash::FxBuildHasher;

pub(crate) type IndexSet<K> = indexmap::IndexSet<K, FxBuildHasher>;
