//! Tag prefixes of the location wire token.
//!
//! Every tag ends with an underscore, so none of them can be the start of a real host name.
//! Matching is exact and case-sensitive.

/// Marks a host holding a distributed-filesystem in-memory cached copy of the block.
///
/// This is the only tag that may wrap another one (`hdfs_cache_storage_type_...`).
pub const HDFS_CACHE_TAG: &str = "hdfs_cache_";

/// Marks a specific executor on a host: `executor_<host>_<executor id>`.
pub const EXECUTOR_TAG: &str = "executor_";

/// Marks a host annotated with its storage medium: `storage_type_<host>_<storage type>`.
pub const STORAGE_TYPE_TAG: &str = "storage_type_";
