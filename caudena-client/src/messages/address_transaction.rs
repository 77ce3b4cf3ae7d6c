use serde::{Deserialize, Serialize};

/// Message structure of a list item of the transactions of an address.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddressTransactionMessage {
    /// Hash of the transaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Time of the transaction, as a unix timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,

    /// Direction of the transaction relative to the address, `in` or `out`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,

    /// Total received by the address, in the native currency unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_in: Option<f64>,

    /// Total received by the address, in US dollars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_in_usd: Option<f64>,

    /// Total sent by the address, in the native currency unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_out: Option<f64>,

    /// Total sent by the address, in US dollars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_out_usd: Option<f64>,

    /// Fee paid, in the native currency unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,

    /// Fee paid, in US dollars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_usd: Option<f64>,

    /// Number of confirmations of the including block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmations: Option<u64>,
}

impl AddressTransactionMessage {
    /// Whether the transaction sends funds out of the address.
    pub fn is_outgoing(&self) -> bool {
        self.direction.as_deref() == Some("out")
    }

    /// Amount moved in the direction of the transaction, in the native currency unit.
    pub fn amount(&self) -> Option<f64> {
        if self.is_outgoing() {
            self.total_out
        } else {
            self.total_in
        }
    }

    /// Amount moved in the direction of the transaction, in US dollars.
    pub fn amount_usd(&self) -> Option<f64> {
        if self.is_outgoing() {
            self.total_out_usd
        } else {
            self.total_in_usd
        }
    }
}
