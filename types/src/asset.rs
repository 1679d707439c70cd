//! Asset identifiers: policy ids, asset names, and their pairing.
//!
//! An asset class is identified by the hash of the policy that governs its
//! issuance plus a name chosen under that policy. Two assets are the same
//! class only when both halves match exactly.

use crate::error::AgoraError;
use crate::hash::hex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 32-byte content-addressed identifier of a deployed policy script.
///
/// Derived by hashing the policy's code together with its instantiation
/// parameter (see `agora-crypto`), so equal logic with equal parameters
/// always yields the same id.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PolicyId([u8; 32]);

impl PolicyId {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PolicyId({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

/// Maximum length of an asset name in bytes.
pub const MAX_ASSET_NAME_LEN: usize = 32;

/// The name of an asset class under a policy. At most 32 bytes; may be empty
/// (an empty name is conventional for single-asset policies such as an
/// authority NFT).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetName(Vec<u8>);

impl AssetName {
    /// Create an asset name, rejecting names longer than [`MAX_ASSET_NAME_LEN`].
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, AgoraError> {
        let bytes = bytes.into();
        if bytes.len() > MAX_ASSET_NAME_LEN {
            return Err(AgoraError::InvalidAssetName {
                len: bytes.len(),
                max: MAX_ASSET_NAME_LEN,
            });
        }
        Ok(Self(bytes))
    }

    /// The empty asset name.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetName({})", self)
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_empty() && self.0.iter().all(|b| b.is_ascii_graphic()) {
            write!(f, "{}", String::from_utf8_lossy(&self.0))
        } else {
            write!(f, "0x{}", hex::encode(&self.0))
        }
    }
}

/// A fully-qualified asset class: governing policy plus name.
///
/// Equality is exact on both fields. There is no partial or prefix matching
/// anywhere in the core; this is what makes the aggregation rule auditable.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetId {
    pub policy: PolicyId,
    pub name: AssetName,
}

impl AssetId {
    pub fn new(policy: PolicyId, name: AssetName) -> Self {
        Self { policy, name }
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId({:?}, {})", self.policy, self.name)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.policy, self.name)
    }
}
