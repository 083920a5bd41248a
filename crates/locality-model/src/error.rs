use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("malformed task location {token:?}: {reason}")]
    Malformed { token: String, reason: &'static str },

    #[error("unknown storage type: {0}")]
    UnknownStorageType(String),
}

impl LocationError {
    pub(crate) fn malformed(token: &str, reason: &'static str) -> Self {
        Self::Malformed {
            token: token.to_string(),
            reason,
        }
    }
}

pub type LocationResult<T> = Result<T, LocationError>;
