//! String token codec for [`TaskLocation`].
//!
//! Grammar:
//! ```text
//! location  := hdfs_form | direct_form
//! hdfs_form := "hdfs_cache_" ( "storage_type_" host "_" storage | host )
//! direct    := "executor_" host "_" executor_id
//!            | "storage_type_" host "_" storage
//!            | host
//! ```
//! The HDFS cache tag is checked first because it is the only one allowed to wrap another tag.
//! Tagged payloads split on the *first* underscore, so executor ids and storage names may
//! contain underscores while the host segment may not.

use std::str::FromStr;

use crate::{
    domain::{EXECUTOR_TAG, HDFS_CACHE_TAG, STORAGE_TYPE_TAG, StorageType},
    error::{LocationError, LocationResult},
    location::TaskLocation,
};

const MISSING_STORAGE_TYPE: &str = "missing storage type";
const ILLEGAL_EXECUTOR_FORMAT: &str = "illegal executor location format";

/// Encodes a location into its wire token. Total and deterministic; inverse of [`decode`].
pub fn encode(loc: &TaskLocation) -> String {
    match loc {
        TaskLocation::Host { host } => host.clone(),
        TaskLocation::ExecutorCache { host, executor_id } => {
            format!("{EXECUTOR_TAG}{host}_{executor_id}")
        }
        TaskLocation::HdfsCache { host } => format!("{HDFS_CACHE_TAG}{host}"),
        TaskLocation::HostWithStorage { host, storage_type } => {
            format!("{STORAGE_TYPE_TAG}{host}_{storage_type}")
        }
        TaskLocation::HdfsCacheWithStorage { host, storage_type } => {
            format!("{HDFS_CACHE_TAG}{STORAGE_TYPE_TAG}{host}_{storage_type}")
        }
    }
}

/// Decodes a wire token.
///
/// Untagged input is never rejected: it becomes [`TaskLocation::Host`] verbatim.
/// A token that claims a tag but lacks the `_` separator fails with
/// [`LocationError::Malformed`]; an unrecognized storage name fails with
/// [`LocationError::UnknownStorageType`].
pub fn decode(token: &str) -> LocationResult<TaskLocation> {
    if let Some(rest) = token.strip_prefix(HDFS_CACHE_TAG) {
        return match rest.strip_prefix(STORAGE_TYPE_TAG) {
            Some(tagged) => {
                let (host, storage_type) = split_storage(token, tagged)?;
                Ok(TaskLocation::HdfsCacheWithStorage { host, storage_type })
            }
            None => Ok(TaskLocation::HdfsCache {
                host: rest.to_string(),
            }),
        };
    }

    if let Some(rest) = token.strip_prefix(EXECUTOR_TAG) {
        let (host, executor_id) = rest
            .split_once('_')
            .ok_or_else(|| LocationError::malformed(token, ILLEGAL_EXECUTOR_FORMAT))?;
        return Ok(TaskLocation::executor(host, executor_id));
    }

    if let Some(rest) = token.strip_prefix(STORAGE_TYPE_TAG) {
        let (host, storage_type) = split_storage(token, rest)?;
        return Ok(TaskLocation::HostWithStorage { host, storage_type });
    }

    Ok(TaskLocation::host(token))
}

/// Looks up a storage type by its canonical name.
pub fn parse_storage_type(name: &str) -> LocationResult<StorageType> {
    StorageType::from_str(name)
}

fn split_storage(token: &str, payload: &str) -> LocationResult<(String, StorageType)> {
    let (host, name) = payload
        .split_once('_')
        .ok_or_else(|| LocationError::malformed(token, MISSING_STORAGE_TYPE))?;
    Ok((host.to_string(), parse_storage_type(name)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<TaskLocation> {
        vec![
            TaskLocation::host("node-1.example.com"),
            TaskLocation::executor("node-1", "42"),
            TaskLocation::executor("node-1", "exec_7_b"),
            TaskLocation::hdfs_cache("node-2"),
            TaskLocation::host_with_storage("node-3", StorageType::Ssd),
            TaskLocation::host_with_storage("node-3", StorageType::RamDisk),
            TaskLocation::hdfs_cache_with_storage("node-4", StorageType::Disk),
            TaskLocation::hdfs_cache_with_storage("node-4", StorageType::RamDisk),
        ]
    }

    #[test]
    fn encode_produces_tagged_tokens() {
        assert_eq!(encode(&TaskLocation::host("myhost")), "myhost");
        assert_eq!(encode(&TaskLocation::executor("h1", "3")), "executor_h1_3");
        assert_eq!(encode(&TaskLocation::hdfs_cache("h1")), "hdfs_cache_h1");
        assert_eq!(
            encode(&TaskLocation::host_with_storage("h1", StorageType::Archive)),
            "storage_type_h1_ARCHIVE"
        );
        assert_eq!(
            encode(&TaskLocation::hdfs_cache_with_storage("h1", StorageType::Ssd)),
            "hdfs_cache_storage_type_h1_SSD"
        );
    }

    #[test]
    fn decode_inverts_encode() {
        for loc in samples() {
            let token = encode(&loc);
            assert_eq!(decode(&token).unwrap(), loc, "round trip failed for {token:?}");
        }
    }

    #[test]
    fn plain_host_falls_through() {
        assert_eq!(decode("myhost").unwrap(), TaskLocation::host("myhost"));
        assert_eq!(decode("10.0.0.7").unwrap(), TaskLocation::host("10.0.0.7"));
        assert_eq!(
            decode("Node-1.Example.COM").unwrap(),
            TaskLocation::host("Node-1.Example.COM")
        );
    }

    #[test]
    fn underscore_free_strings_are_hosts() {
        for s in ["a", "executor", "hdfs", "storage", "HDFS-CACHE-h1", " spaced "] {
            assert_eq!(decode(s).unwrap(), TaskLocation::host(s));
        }
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(
            decode("EXECUTOR_h1_2").unwrap(),
            TaskLocation::host("EXECUTOR_h1_2")
        );
        assert_eq!(
            decode("Hdfs_cache_h1").unwrap(),
            TaskLocation::host("Hdfs_cache_h1")
        );
    }

    #[test]
    fn hdfs_tag_wrapping_storage_tag_wins() {
        assert_eq!(
            decode("hdfs_cache_storage_type_h1_DISK").unwrap(),
            TaskLocation::hdfs_cache_with_storage("h1", StorageType::Disk)
        );
    }

    #[test]
    fn hdfs_cache_keeps_rest_verbatim() {
        assert_eq!(
            decode("hdfs_cache_h1").unwrap(),
            TaskLocation::hdfs_cache("h1")
        );
        assert_eq!(
            decode("hdfs_cache_executor_h1_2").unwrap(),
            TaskLocation::hdfs_cache("executor_h1_2")
        );
    }

    #[test]
    fn bare_hdfs_tag_yields_empty_host() {
        assert_eq!(decode("hdfs_cache_").unwrap(), TaskLocation::hdfs_cache(""));
    }

    #[test]
    fn executor_id_keeps_underscores() {
        assert_eq!(
            decode("executor_h1_exec_7").unwrap(),
            TaskLocation::executor("h1", "exec_7")
        );
        assert_eq!(
            decode("executor_h1_").unwrap(),
            TaskLocation::executor("h1", "")
        );
    }

    #[test]
    fn executor_without_separator_is_malformed() {
        for token in ["executor_onlyhost", "executor_"] {
            match decode(token) {
                Err(LocationError::Malformed { token: t, reason }) => {
                    assert_eq!(t, token);
                    assert_eq!(reason, ILLEGAL_EXECUTOR_FORMAT);
                }
                other => panic!("expected malformed error for {token:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn storage_without_separator_is_malformed() {
        for token in [
            "storage_type_h1",
            "storage_type_",
            "hdfs_cache_storage_type_h1",
            "hdfs_cache_storage_type_",
        ] {
            match decode(token) {
                Err(LocationError::Malformed { reason, .. }) => {
                    assert_eq!(reason, MISSING_STORAGE_TYPE)
                }
                other => panic!("expected malformed error for {token:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn unknown_storage_type_propagates() {
        assert_eq!(
            decode("storage_type_h1_NOPE").unwrap_err(),
            LocationError::UnknownStorageType("NOPE".to_string())
        );
        assert_eq!(
            decode("hdfs_cache_storage_type_h1_disk").unwrap_err(),
            LocationError::UnknownStorageType("disk".to_string())
        );
    }

    #[test]
    fn storage_name_with_underscore_splits_on_first() {
        assert_eq!(
            decode("storage_type_h1_RAM_DISK").unwrap(),
            TaskLocation::host_with_storage("h1", StorageType::RamDisk)
        );
    }

    #[test]
    fn parse_storage_type_delegates() {
        assert_eq!(parse_storage_type("NVDIMM").unwrap(), StorageType::Nvdimm);
        assert!(parse_storage_type("nvdimm").is_err());
    }

    #[test]
    fn malformed_error_message_names_token() {
        let msg = decode("executor_onlyhost").unwrap_err().to_string();
        assert!(msg.contains("executor_onlyhost"), "{msg}");
        assert!(msg.contains(ILLEGAL_EXECUTOR_FORMAT), "{msg}");
    }
}
