//! Opaque script payloads: datums and redeemers.
//!
//! The settlement core treats both as raw bytes. A datum travels with the
//! locked output (placeholder for future proposal metadata); a redeemer is
//! supplied by the spender. Neither is decoded here — hardened deployments
//! constrain their structure through `agora_policy::inspect`.

use serde::{Deserialize, Serialize};

/// Opaque payload attached to a script-locked output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datum(Vec<u8>);

impl Datum {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Opaque payload supplied by the party spending a script output or minting
/// under a policy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redeemer(Vec<u8>);

impl Redeemer {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
