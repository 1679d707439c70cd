//! Issuance authorization for the governed voting token.

use crate::aggregate::sum_asset;
use crate::verdict::Verdict;
use agora_types::{AssetId, Redeemer, ScriptContext};
use serde::{Deserialize, Serialize};

/// Denial reason surfaced when the authority NFT is absent from the
/// transaction's inputs. Stable literal; hosts and tooling key on it.
pub const REASON_AUTHORITY_ABSENT: &str = "The DAO's NFT is not present.";

/// Authorizes minting and burning of the governed voting token.
///
/// Issuance is approved iff any positive quantity of the authority NFT is
/// consumed by the transaction. How much is minted or burned, and to whom,
/// is deliberately unconstrained: holding the NFT is the sole gate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuancePolicy {
    /// The uniquely-held token whose presence authorizes issuance.
    authority_token: AssetId,
}

impl IssuancePolicy {
    pub fn new(authority_token: AssetId) -> Self {
        Self { authority_token }
    }

    pub fn authority_token(&self) -> &AssetId {
        &self.authority_token
    }

    /// Evaluate a candidate mint/burn.
    ///
    /// The redeemer is structurally accepted without inspection, matching the
    /// reference behavior. Never errors and never panics: unresolved inputs
    /// contribute zero presence.
    pub fn evaluate(&self, _redeemer: &Redeemer, ctx: &ScriptContext) -> Verdict {
        let presence = sum_asset(ctx.input_values(), &self.authority_token);
        if presence > 0 {
            tracing::debug!(presence, "issuance authorized");
            Verdict::Approved
        } else {
            tracing::warn!(reason = REASON_AUTHORITY_ABSENT, "issuance denied");
            Verdict::denied(REASON_AUTHORITY_ABSENT)
        }
    }
}
