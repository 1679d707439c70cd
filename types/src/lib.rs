//! Fundamental types for the Agora settlement core.
//!
//! This crate defines the data model shared across every other crate in the
//! workspace: asset identifiers, value bundles, transaction inputs and
//! outputs, the script context handed to validators, opaque script payloads,
//! script addresses, and governance parameters.

pub mod address;
pub mod asset;
pub mod context;
pub mod error;
pub mod hash;
pub mod params;
pub mod payload;
pub mod value;

pub use address::ScriptAddress;
pub use asset::{AssetId, AssetName, PolicyId};
pub use context::{OutputRef, ScriptContext, TxInput, TxOut};
pub use error::AgoraError;
pub use hash::{KeyHash, TxHash};
pub use params::{GovernanceParams, DEFAULT_VOTE_QUORUM};
pub use payload::{Datum, Redeemer};
pub use value::Value;
