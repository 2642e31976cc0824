use serde::{Deserialize, Serialize};

/// Errors returned by message codec operations.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum MessageError {
    #[error("decode error: {0}")]
    Decode(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error("payload is not valid utf-8: {0}")]
    PayloadNotText(String),
}
