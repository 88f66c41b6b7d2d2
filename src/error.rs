//! Client error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Nothing in the client is fatal. Storage parse failures degrade to defaults
//! (and purge the offending record), network and API failures surface as an
//! error toast, and validation failures surface as a warning toast. No call
//! site retries automatically.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::state::toast::ToastKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("malformed stored record {key}: {reason}")]
    StorageParse { key: String, reason: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("api error: {0}")]
    Api(String),

    #[error("{0}")]
    Validation(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Toast kind and user-facing text for this failure.
    #[must_use]
    pub fn toast(&self) -> (ToastKind, String) {
        match self {
            Self::StorageParse { .. } => (ToastKind::Info, "Saved data was reset".to_owned()),
            Self::Network(_) => (ToastKind::Error, "An error occurred. Please try again.".to_owned()),
            Self::Api(msg) => (ToastKind::Error, msg.clone()),
            Self::Validation(msg) => (ToastKind::Warning, msg.clone()),
        }
    }
}
