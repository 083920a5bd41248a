use serde::Serialize;

use locality_model::{StorageType, TaskLocation};

/// One decoded hint as printed by `locality decode`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedHint<'a> {
    pub token: String,
    pub kind: &'static str,
    pub host: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executor_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<StorageType>,
}

impl<'a> From<&'a TaskLocation> for DecodedHint<'a> {
    fn from(loc: &'a TaskLocation) -> Self {
        Self {
            token: loc.to_string(),
            kind: loc.kind(),
            host: loc.host_name(),
            executor_id: loc.executor_id(),
            storage_type: loc.storage_type(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn executor_hint_shape() {
        let loc = TaskLocation::executor("h1", "exec_7");
        let json = serde_json::to_string(&DecodedHint::from(&loc)).unwrap();
        assert_eq!(
            json,
            r#"{"token":"executor_h1_exec_7","kind":"executor","host":"h1","executorId":"exec_7"}"#
        );
    }

    #[test]
    fn storage_hint_shape() {
        let loc = TaskLocation::hdfs_cache_with_storage("h1", StorageType::Disk);
        let json = serde_json::to_string(&DecodedHint::from(&loc)).unwrap();
        assert_eq!(
            json,
            r#"{"token":"hdfs_cache_storage_type_h1_DISK","kind":"hdfsCacheWithStorage","host":"h1","storageType":"DISK"}"#
        );
    }
}
