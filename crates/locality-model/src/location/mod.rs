mod codec;
pub use codec::{decode, encode, parse_storage_type};

mod hints;
pub use hints::{decode_all, decode_lenient, encode_all, hosts};

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    domain::{Host, StorageType},
    error::{LocationError, LocationResult},
};

const HOST_WITH_UNDERSCORE: &str = "host must not contain '_'";

/// Where a unit of work should preferentially run.
///
/// A closed set of shapes. Each value crosses string-only API layers as a single token
/// (see [`encode`] / [`decode`]); serde uses the same token, so a location embedded in JSON
/// is just a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TaskLocation {
    /// Any executor on `host`.
    Host { host: Host },
    /// A specific executor on `host`; other executors on the same host are the fallback.
    ExecutorCache { host: Host, executor_id: String },
    /// `host` holds an in-memory cached copy of the input block.
    HdfsCache { host: Host },
    /// Like [`TaskLocation::Host`], with the storage medium backing the host.
    HostWithStorage {
        host: Host,
        storage_type: StorageType,
    },
    /// Like [`TaskLocation::HdfsCache`], with the storage medium backing the cache.
    HdfsCacheWithStorage {
        host: Host,
        storage_type: StorageType,
    },
}

impl TaskLocation {
    /// Prefer any executor on `host`.
    pub fn host(host: impl Into<String>) -> Self {
        Self::Host { host: host.into() }
    }

    /// Prefer the executor `executor_id` running on `host`.
    pub fn executor(host: impl Into<String>, executor_id: impl Into<String>) -> Self {
        Self::ExecutorCache {
            host: host.into(),
            executor_id: executor_id.into(),
        }
    }

    /// Prefer `host` because it caches the input block in memory.
    pub fn hdfs_cache(host: impl Into<String>) -> Self {
        Self::HdfsCache { host: host.into() }
    }

    /// Prefer `host`, recording the storage medium that backs it.
    pub fn host_with_storage(host: impl Into<String>, storage_type: StorageType) -> Self {
        Self::HostWithStorage {
            host: host.into(),
            storage_type,
        }
    }

    /// Prefer `host` for its in-memory cached copy, recording the backing storage medium.
    pub fn hdfs_cache_with_storage(host: impl Into<String>, storage_type: StorageType) -> Self {
        Self::HdfsCacheWithStorage {
            host: host.into(),
            storage_type,
        }
    }

    /// Host name carried by every variant.
    pub fn host_name(&self) -> &str {
        match self {
            TaskLocation::Host { host }
            | TaskLocation::ExecutorCache { host, .. }
            | TaskLocation::HdfsCache { host }
            | TaskLocation::HostWithStorage { host, .. }
            | TaskLocation::HdfsCacheWithStorage { host, .. } => host,
        }
    }

    /// Executor id, only for [`TaskLocation::ExecutorCache`].
    pub fn executor_id(&self) -> Option<&str> {
        match self {
            TaskLocation::ExecutorCache { executor_id, .. } => Some(executor_id),
            _ => None,
        }
    }

    /// Storage medium, only for the `*WithStorage` variants.
    pub fn storage_type(&self) -> Option<StorageType> {
        match self {
            TaskLocation::HostWithStorage { storage_type, .. }
            | TaskLocation::HdfsCacheWithStorage { storage_type, .. } => Some(*storage_type),
            _ => None,
        }
    }

    /// Checks that the host survives an [`encode`] / [`decode`] round trip.
    ///
    /// Constructors accept any string; values built from untrusted parts should pass here
    /// before they are encoded. Every tag ends with `_`, so an underscore-free host can never
    /// be mistaken for a tag. An empty host is accepted.
    pub fn validate(&self) -> LocationResult<()> {
        let host = self.host_name();
        if host.contains('_') {
            return Err(LocationError::malformed(host, HOST_WITH_UNDERSCORE));
        }
        Ok(())
    }

    /// Returns `true` for both in-memory cache variants.
    pub fn is_hdfs_cached(&self) -> bool {
        matches!(
            self,
            TaskLocation::HdfsCache { .. } | TaskLocation::HdfsCacheWithStorage { .. }
        )
    }

    /// Returns the variant name as a static string.
    pub fn kind(&self) -> &'static str {
        match self {
            TaskLocation::Host { .. } => "host",
            TaskLocation::ExecutorCache { .. } => "executor",
            TaskLocation::HdfsCache { .. } => "hdfsCache",
            TaskLocation::HostWithStorage { .. } => "hostWithStorage",
            TaskLocation::HdfsCacheWithStorage { .. } => "hdfsCacheWithStorage",
        }
    }
}

impl fmt::Display for TaskLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

impl FromStr for TaskLocation {
    type Err = LocationError;
    fn from_str(s: &str) -> LocationResult<Self> {
        decode(s)
    }
}

impl TryFrom<&str> for TaskLocation {
    type Error = LocationError;
    fn try_from(s: &str) -> LocationResult<Self> {
        decode(s)
    }
}

impl TryFrom<String> for TaskLocation {
    type Error = LocationError;
    fn try_from(s: String) -> LocationResult<Self> {
        decode(&s)
    }
}

impl From<TaskLocation> for String {
    fn from(loc: TaskLocation) -> Self {
        encode(&loc)
    }
}
