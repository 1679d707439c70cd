//! Content-addressed policy-identifier derivation.
//!
//! A deployed policy instance is identified by hashing its code together with
//! its instantiation parameter. The id serves both as the currency symbol of
//! tokens minted under the policy and as the input to script-address
//! derivation.
//!
//! The authority-NFT bootstrap is two-phase: the NFT's id is derived from the
//! issuance policy's code plus an explicit external parameter, and the result
//! is then handed to the treasury policy as an ordinary pre-existing asset id.
//! Nothing is ever derived from itself.

use crate::hash::blake2b_256_multi;
use agora_types::{AssetId, AssetName, PolicyId};

/// Domain-separation tag; bump the suffix if the derivation scheme changes.
const DERIVE_TAG: &[u8] = b"agora-policy-v1";

/// Derive the stable identifier of a policy instance from its code and its
/// instantiation parameter.
///
/// The code is length-prefixed so that `(code, parameter)` pairs cannot
/// collide across the boundary between the two fields.
pub fn derive_policy_id(policy_code: &[u8], parameter: &[u8]) -> PolicyId {
    let code_len = (policy_code.len() as u64).to_le_bytes();
    PolicyId::new(blake2b_256_multi(&[
        DERIVE_TAG,
        &code_len,
        policy_code,
        parameter,
    ]))
}

/// Derive the full asset id of a token minted under a parameterized policy.
pub fn derive_authority_asset(policy_code: &[u8], parameter: &[u8], name: AssetName) -> AssetId {
    AssetId::new(derive_policy_id(policy_code, parameter), name)
}
