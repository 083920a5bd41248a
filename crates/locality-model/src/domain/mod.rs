mod storage;
pub use storage::StorageType;

mod constants;
pub use constants::{EXECUTOR_TAG, HDFS_CACHE_TAG, STORAGE_TYPE_TAG};

/// Host name (or opaque host identifier) of a machine a task may run on.
///
/// Real host names never contain underscores, which is what keeps the tag prefixes unambiguous.
pub type Host = String;
