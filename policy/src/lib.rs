//! Validation core for the Agora treasury.
//!
//! Two independent, composable predicates:
//! - [`TreasuryPolicy`]: authorizes a treasury spend iff the aggregate
//!   vote-token quantity consumed by the transaction strictly exceeds the
//!   quorum.
//! - [`IssuancePolicy`]: authorizes minting/burning of the governed token iff
//!   the authority NFT is present among the consumed inputs.
//!
//! Both are pure, synchronous, and deny-by-default: no code path errors or
//! panics, malformed data contributes zero, and every denial carries a stable
//! reason string the host surfaces to the submitting party.

pub mod aggregate;
pub mod inspect;
pub mod issuance;
pub mod treasury;
pub mod verdict;

pub use aggregate::sum_asset;
pub use inspect::{OpaquePayloads, ProposalInspector};
pub use issuance::{IssuancePolicy, REASON_AUTHORITY_ABSENT};
pub use treasury::{TreasuryPolicy, REASON_NOT_ENOUGH_VOTES};
pub use verdict::Verdict;
