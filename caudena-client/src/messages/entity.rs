use serde::{Deserialize, Serialize};

/// Message structure of a resolved entity.
///
/// Entity resolution is computed server side, linking an address to the real
/// world actor it belongs to (exchange, mixer, scam, ...).
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityMessage {
    /// Name of the entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Category of the entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
