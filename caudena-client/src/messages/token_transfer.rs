use serde::{Deserialize, Serialize};

use super::EntityMessage;

/// Message structure of a token transfer carried by an EVM transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenTransferMessage {
    /// Description of the transferred token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<TokenInfoMessage>,

    /// Quantity of tokens transferred
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Value of the transfer, in US dollars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd: Option<f64>,

    /// Sending party of the transfer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<TokenPartyMessage>,

    /// Receiving party of the transfer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<TokenPartyMessage>,
}

/// Message structure describing a token.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenInfoMessage {
    /// Ticker symbol of the token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    /// Name of the token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the token is marked as a scam
    #[serde(default)]
    pub scam: bool,

    /// Whether the token is marked as spam
    #[serde(default)]
    pub spam: bool,
}

impl TokenInfoMessage {
    /// Whether the token is marked as a scam or as spam.
    pub fn is_flagged(&self) -> bool {
        self.scam || self.spam
    }
}

/// Message structure of a party of a token transfer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenPartyMessage {
    /// Address of the party
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Risk score of the address, from 0 (high risk) to 10 (trusted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Entity the address resolves to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT_JSON: &str = r#"{
        "token": {
            "symbol": "USDT",
            "name": "Tether USD",
            "scam": false,
            "spam": false
        },
        "value": 2500.0,
        "usd": 2500.75,
        "sender": {
            "address": "0x28c6c06298d514db089934071355e5743bf21d60",
            "score": 8.1,
            "entity": {
                "name": "Binance",
                "category": "Exchange"
            }
        },
        "receiver": {
            "address": "0x21a31ee1afc51d94c2efccaa2092ad1028285549",
            "score": 5.4
        }
    }"#;

    fn golden_message_current() -> TokenTransferMessage {
        TokenTransferMessage {
            token: Some(TokenInfoMessage {
                symbol: Some("USDT".to_string()),
                name: Some("Tether USD".to_string()),
                scam: false,
                spam: false,
            }),
            value: Some(2500.0),
            usd: Some(2500.75),
            sender: Some(TokenPartyMessage {
                address: Some("0x28c6c06298d514db089934071355e5743bf21d60".to_string()),
                score: Some(8.1),
                entity: Some(EntityMessage {
                    name: Some("Binance".to_string()),
                    category: Some("Exchange".to_string()),
                }),
            }),
            receiver: Some(TokenPartyMessage {
                address: Some("0x21a31ee1afc51d94c2efccaa2092ad1028285549".to_string()),
                score: Some(5.4),
                entity: None,
            }),
        }
    }

    #[test]
    fn test_current_json_deserialized_into_current_message() {
        let json = CURRENT_JSON;
        let message: TokenTransferMessage = serde_json::from_str(json).unwrap();

        assert_eq!(golden_message_current(), message);
    }

    #[test]
    fn scam_or_spam_tokens_are_flagged() {
        let scam = TokenInfoMessage {
            scam: true,
            ..TokenInfoMessage::default()
        };
        let spam = TokenInfoMessage {
            spam: true,
            ..TokenInfoMessage::default()
        };

        assert!(scam.is_flagged());
        assert!(spam.is_flagged());
        assert!(!TokenInfoMessage::default().is_flagged());
    }
}
