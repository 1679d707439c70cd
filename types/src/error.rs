//! Top-level error type shared across crates.
//!
//! The validation predicates themselves never raise errors (every path ends
//! in a verdict); this type covers fallible construction and parsing.

use thiserror::Error;

/// Common error type for the Agora settlement core.
#[derive(Debug, Error)]
pub enum AgoraError {
    #[error("asset name is {len} bytes, maximum is {max}")]
    InvalidAssetName { len: usize, max: usize },

    #[error("invalid script address: {0}")]
    InvalidAddress(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("{0}")]
    Other(String),
}
