use serde::{Deserialize, Serialize};

use super::EntityMessage;

/// Message structure of the statistics of an address.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressStatsMessage {
    /// Address the statistics are about
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Ticker of the blockchain the address belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockchain: Option<String>,

    /// Balance of the address, in the native currency unit
    #[serde(default)]
    pub balance: BalanceMessage,

    /// Balance of the address, in US dollars
    #[serde(default)]
    pub balance_usd: BalanceMessage,

    /// Numbers of transfers of the address
    #[serde(default)]
    pub trx_count: TransferCountMessage,

    /// Entity the address resolves to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityMessage>,

    /// Risk score of the address, from 0 (high risk) to 10 (trusted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Time of the first activity of the address, as a unix timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_seen: Option<i64>,

    /// Time of the latest activity of the address, as a unix timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<i64>,
}

/// Message structure of the balance of an address, in one unit.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct BalanceMessage {
    /// Current balance
    #[serde(default)]
    pub balance: f64,

    /// Total amount ever received
    #[serde(default)]
    pub total_in: f64,

    /// Total amount ever sent
    #[serde(default)]
    pub total_out: f64,
}

/// Message structure of the transfer counters of an address.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransferCountMessage {
    /// Number of incoming transfers
    #[serde(rename = "in", default)]
    pub incoming: u64,

    /// Number of outgoing transfers
    #[serde(rename = "out", default)]
    pub outgoing: u64,
}
