//! Pluggable datum/redeemer inspection.
//!
//! The reference deployment leaves both payloads fully unconstrained: a
//! proposal's structure is a placeholder upstream, so the default inspector
//! approves anything structurally present. Hardened deployments implement
//! [`ProposalInspector`] to constrain proposal content without touching the
//! quorum or aggregation logic.

use crate::verdict::Verdict;
use agora_types::{Datum, Redeemer};

/// Inspects the opaque payloads accompanying a treasury spend.
pub trait ProposalInspector {
    fn inspect(&self, datum: &Datum, redeemer: &Redeemer) -> Verdict;
}

/// The reference inspector: any datum and redeemer pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpaquePayloads;

impl ProposalInspector for OpaquePayloads {
    fn inspect(&self, _datum: &Datum, _redeemer: &Redeemer) -> Verdict {
        Verdict::Approved
    }
}
