//! Script address type with `agr_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An Agora script address, always prefixed with `agr_`.
///
/// Derived from a policy id via Blake2b checksum + base32 encoding
/// (see `agora-crypto`). Outputs locked at a script address can only be
/// consumed under that script's authorization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptAddress(String);

impl ScriptAddress {
    /// The standard prefix for all Agora script addresses.
    pub const PREFIX: &'static str = "agr_";

    /// Create a new script address from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `agr_`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "address must start with agr_");
        Self(s)
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this address is well-formed.
    ///
    /// Checks prefix and non-empty body only; checksum verification lives in
    /// `agora-crypto`.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for ScriptAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ScriptAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
