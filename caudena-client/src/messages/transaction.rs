use serde::{Deserialize, Serialize};

use super::{TokenTransferMessage, TransactionEntryMessage};

/// Message structure of a transaction with its analytics annotations.
///
/// Field presence depends on the currency family: UTXO chains carry inputs and
/// outputs, EVM chains carry gas data and token transfers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionMessage {
    /// Hash of the transaction
    pub hash: String,

    /// Whether the transaction is confirmed
    #[serde(default)]
    pub status: bool,

    /// Ticker of the blockchain the transaction belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Time of the transaction, as a unix timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,

    /// Height of the block including the transaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,

    /// Number of confirmations of the including block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmations: Option<u64>,

    /// Total amount transferred, in the native currency unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// Total amount transferred, in US dollars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_usd: Option<f64>,

    /// Fee paid, in the native currency unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,

    /// Fee paid, in US dollars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_usd: Option<f64>,

    /// Gas limit of the transaction (EVM currencies only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<f64>,

    /// Gas consumed by the transaction (EVM currencies only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<f64>,

    /// Gas price of the transaction, in wei (EVM currencies only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<f64>,

    /// Inputs of the transaction
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<TransactionEntryMessage>,

    /// Outputs of the transaction
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<TransactionEntryMessage>,

    /// Token transfers carried by the transaction (EVM currencies only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<TokenTransferMessage>,
}

impl TransactionMessage {
    /// Whether the transaction carries gas data worth reporting.
    pub fn has_gas_data(&self) -> bool {
        self.gas.is_some_and(|gas| gas > 0.0)
    }
}
