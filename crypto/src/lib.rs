//! Cryptographic primitives for the Agora settlement core.
//!
//! - **Blake2b** for hashing
//! - Content-addressed policy-identifier derivation (policy code + parameter)
//! - Script address derivation with `agr_` prefix and base32 encoding
//!
//! Everything here is deterministic: equal inputs always produce equal
//! identifiers, which is what lets a policy's id double as the currency
//! symbol of the tokens it governs.

pub mod address;
pub mod derive;
pub mod hash;

pub use address::{decode_script_address, derive_script_address, validate_script_address};
pub use derive::{derive_authority_asset, derive_policy_id};
pub use hash::{blake2b_256, blake2b_256_multi};
