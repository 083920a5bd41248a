mod domain;
pub use domain::{EXECUTOR_TAG, HDFS_CACHE_TAG, STORAGE_TYPE_TAG};
pub use domain::{Host, StorageType};

mod error;
pub use error::{LocationError, LocationResult};

mod location;
pub use location::TaskLocation;
pub use location::{decode, encode, parse_storage_type};
pub use location::{decode_all, decode_lenient, encode_all, hosts};
