//! Transaction inputs, outputs, and the script context handed to validators.

use crate::address::ScriptAddress;
use crate::hash::{KeyHash, TxHash};
use crate::payload::{Datum, Redeemer};
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Reference to a specific output of a previously confirmed transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutputRef {
    /// Hash of the transaction that created the output.
    pub tx: TxHash,
    /// Index of the output within that transaction.
    pub index: u32,
}

impl OutputRef {
    pub fn new(tx: TxHash, index: u32) -> Self {
        Self { tx, index }
    }
}

/// A transaction output: who owns it, what it carries, and its datum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    /// The script (or wallet) address the output is locked at.
    pub address: ScriptAddress,
    /// The assets carried by this output.
    pub value: Value,
    /// Opaque payload attached at lock time, if any.
    pub datum: Option<Datum>,
}

impl TxOut {
    pub fn new(address: ScriptAddress, value: Value) -> Self {
        Self {
            address,
            value,
            datum: None,
        }
    }

    pub fn with_datum(address: ScriptAddress, value: Value, datum: Datum) -> Self {
        Self {
            address,
            value,
            datum: Some(datum),
        }
    }
}

/// A transaction input: an output reference plus that output's resolved
/// content at the time it is consumed.
///
/// `resolved` is `None` when the host could not materialize the consumed
/// output. The core never treats that as an error; an unresolved input
/// simply contributes nothing to any aggregation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    pub out_ref: OutputRef,
    pub resolved: Option<TxOut>,
}

impl TxInput {
    pub fn new(out_ref: OutputRef, resolved: TxOut) -> Self {
        Self {
            out_ref,
            resolved: Some(resolved),
        }
    }

    /// An input whose consumed output could not be resolved.
    pub fn unresolved(out_ref: OutputRef) -> Self {
        Self {
            out_ref,
            resolved: None,
        }
    }

    /// The value carried by the consumed output, if resolved.
    pub fn value(&self) -> Option<&Value> {
        self.resolved.as_ref().map(|out| &out.value)
    }
}

/// Everything a validator sees about the transaction under evaluation.
///
/// The settlement predicates read only `inputs`; outputs, mint, signatories,
/// and the redeemer are host metadata carried for completeness and for
/// hardened policy variants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptContext {
    /// The set of inputs being consumed.
    pub inputs: Vec<TxInput>,
    /// The outputs being created.
    pub outputs: Vec<TxOut>,
    /// Net quantity minted (or burned) per asset class by this transaction.
    pub mint: Value,
    /// Hashes of the keys that signed the transaction.
    pub signatories: Vec<KeyHash>,
    /// The redeemer supplied by the submitting party.
    pub redeemer: Redeemer,
}

impl ScriptContext {
    /// A context consuming `inputs` with no outputs, mint, or metadata.
    pub fn from_inputs(inputs: Vec<TxInput>) -> Self {
        Self {
            inputs,
            outputs: Vec::new(),
            mint: Value::new(),
            signatories: Vec::new(),
            redeemer: Redeemer::default(),
        }
    }

    /// Iterate over the value bundles of all resolved inputs.
    ///
    /// Unresolved inputs are skipped, which is exactly the "malformed data
    /// contributes zero" rule the validators rely on.
    pub fn input_values(&self) -> impl Iterator<Item = &Value> {
        self.inputs.iter().filter_map(|input| input.value())
    }
}
