use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Message structure of an error raised by the Prism API.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiErrorMessage {
    /// error message
    #[serde(default)]
    pub message: String,
}

impl ApiErrorMessage {
    /// `ApiErrorMessage` factory
    pub fn new<M: Into<String>>(message: M) -> ApiErrorMessage {
        ApiErrorMessage {
            message: message.into(),
        }
    }
}

impl Display for ApiErrorMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_message_payload() {
        let error: ApiErrorMessage =
            serde_json::from_str(r#"{"message": "invalid address"}"#).unwrap();

        assert_eq!(ApiErrorMessage::new("invalid address"), error);
    }

    #[test]
    fn missing_message_defaults_to_empty() {
        let error: ApiErrorMessage = serde_json::from_str("{}").unwrap();

        assert_eq!(ApiErrorMessage::default(), error);
    }
}
