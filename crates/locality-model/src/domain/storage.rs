use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{LocationError, LocationResult};

/// Physical medium backing a host's copy of a data block.
///
/// Names follow the distributed filesystem's own storage policy names and are matched exactly:
/// `RAM_DISK`, `SSD`, `DISK`, `ARCHIVE`, `PROVIDED`, `NVDIMM`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageType {
    /// Memory-backed volume.
    RamDisk,
    /// Solid state drive.
    Ssd,
    /// Spinning disk.
    Disk,
    /// High-density, low-throughput archival storage.
    Archive,
    /// Storage provided by an external system.
    Provided,
    /// Non-volatile memory module.
    Nvdimm,
}

impl StorageType {
    /// All storage types in declaration order.
    pub const ALL: [StorageType; 6] = [
        StorageType::RamDisk,
        StorageType::Ssd,
        StorageType::Disk,
        StorageType::Archive,
        StorageType::Provided,
        StorageType::Nvdimm,
    ];

    /// Returns the canonical name as a static string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StorageType::RamDisk => "RAM_DISK",
            StorageType::Ssd => "SSD",
            StorageType::Disk => "DISK",
            StorageType::Archive => "ARCHIVE",
            StorageType::Provided => "PROVIDED",
            StorageType::Nvdimm => "NVDIMM",
        }
    }

    /// Memory-class media whose contents do not outlive the node.
    pub const fn is_transient(&self) -> bool {
        matches!(self, StorageType::RamDisk | StorageType::Nvdimm)
    }
}

impl FromStr for StorageType {
    type Err = LocationError;
    fn from_str(s: &str) -> LocationResult<Self> {
        StorageType::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| LocationError::UnknownStorageType(s.to_string()))
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
