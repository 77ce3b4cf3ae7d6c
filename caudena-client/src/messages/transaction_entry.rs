use serde::{Deserialize, Serialize};

/// Risk score below which a contract entry is reported as suspicious.
///
/// Scores range from 0 (high risk) to 10 (trusted) and are computed server
/// side.
pub const SUSPICIOUS_SCORE_THRESHOLD: f64 = 4.0;

/// Message structure of an input or output of a transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionEntryMessage {
    /// Address of the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Amount transferred, in the native currency unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// Amount transferred, in US dollars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_usd: Option<f64>,

    /// Risk score of the address, from 0 (high risk) to 10 (trusted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Name of the entity the address resolves to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the address is a smart contract
    #[serde(default)]
    pub contract: bool,
}

impl TransactionEntryMessage {
    /// Whether the entry is a contract with a risk score below
    /// [SUSPICIOUS_SCORE_THRESHOLD].
    pub fn is_suspicious_contract(&self) -> bool {
        self.contract && self.score.is_some_and(|score| score < SUSPICIOUS_SCORE_THRESHOLD)
    }
}
