use serde::{Deserialize, Serialize};

use super::PaginationMessage;

/// Message structure wrapping every payload returned by the Prism API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    /// Whether the query succeeded
    #[serde(default)]
    pub status: bool,

    /// Payload of the response, absent when the query failed or nothing matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Pagination data, present on list responses only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMessage>,
}

impl<T> ResponseEnvelope<T> {
    /// Extract the payload, discarding it when the envelope reports a failure.
    pub fn into_data(self) -> Option<T> {
        if self.status { self.data } else { None }
    }
}
