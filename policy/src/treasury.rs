//! Treasury spend authorization.

use crate::aggregate::sum_asset;
use crate::inspect::{OpaquePayloads, ProposalInspector};
use crate::verdict::Verdict;
use agora_types::{AssetId, Datum, GovernanceParams, Redeemer, ScriptContext};
use serde::{Deserialize, Serialize};

/// Denial reason surfaced when the consumed vote weight does not clear the
/// quorum. Stable literal; hosts and tooling key on it.
pub const REASON_NOT_ENOUGH_VOTES: &str = "Not enough votes";

/// Authorizes spending from the treasury script.
///
/// A spend is approved iff the aggregate quantity of `vote_token` consumed by
/// the transaction is strictly greater than `quorum`. Exactly-at-quorum is
/// denied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasuryPolicy {
    /// The voting token whose consumed quantity is tallied.
    vote_token: AssetId,
    /// The threshold the tally must strictly exceed.
    quorum: u128,
}

impl TreasuryPolicy {
    pub fn new(vote_token: AssetId, quorum: u128) -> Self {
        Self { vote_token, quorum }
    }

    /// Instantiate with the quorum carried by `params`.
    pub fn from_params(vote_token: AssetId, params: &GovernanceParams) -> Self {
        Self::new(vote_token, params.vote_quorum)
    }

    pub fn vote_token(&self) -> &AssetId {
        &self.vote_token
    }

    pub fn quorum(&self) -> u128 {
        self.quorum
    }

    /// Evaluate a candidate spend with the reference (permissive) payload
    /// inspector.
    pub fn evaluate(&self, datum: &Datum, redeemer: &Redeemer, ctx: &ScriptContext) -> Verdict {
        self.evaluate_with(&OpaquePayloads, datum, redeemer, ctx)
    }

    /// Evaluate a candidate spend, delegating datum/redeemer checks to
    /// `inspector`.
    ///
    /// Never errors and never panics: unresolved inputs contribute zero votes
    /// and ambiguity collapses to a denial.
    pub fn evaluate_with<I: ProposalInspector>(
        &self,
        inspector: &I,
        datum: &Datum,
        redeemer: &Redeemer,
        ctx: &ScriptContext,
    ) -> Verdict {
        let payload_verdict = inspector.inspect(datum, redeemer);
        if let Some(reason) = payload_verdict.reason() {
            tracing::warn!(reason, "treasury spend denied by payload inspector");
            return payload_verdict;
        }

        let votes = sum_asset(ctx.input_values(), &self.vote_token);
        if votes > self.quorum {
            tracing::debug!(votes, quorum = self.quorum, "treasury spend authorized");
            Verdict::Approved
        } else {
            tracing::warn!(
                votes,
                quorum = self.quorum,
                reason = REASON_NOT_ENOUGH_VOTES,
                "treasury spend denied"
            );
            Verdict::denied(REASON_NOT_ENOUGH_VOTES)
        }
    }
}
