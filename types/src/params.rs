//! Governance parameters for deployed policy instances.
//!
//! The reference deployment uses a single quorum of 5, but the threshold is
//! carried as data so multiple instances can run with different values and
//! boundary cases stay testable.

use serde::{Deserialize, Serialize};

/// The reference quorum: minimum aggregate vote-token quantity a disbursement
/// must strictly exceed.
pub const DEFAULT_VOTE_QUORUM: u128 = 5;

/// Parameters fixed at policy instantiation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceParams {
    /// Spends are authorized only when aggregate vote-token quantity is
    /// strictly greater than this value.
    pub vote_quorum: u128,
}

impl GovernanceParams {
    pub fn new(vote_quorum: u128) -> Self {
        Self { vote_quorum }
    }
}

impl Default for GovernanceParams {
    fn default() -> Self {
        Self {
            vote_quorum: DEFAULT_VOTE_QUORUM,
        }
    }
}
