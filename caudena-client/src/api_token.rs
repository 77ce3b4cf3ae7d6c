//! Signing of the tokens that authenticate requests to the Prism API.
//!
//! The API authenticates callers with a short lived HS256 JWT carrying the API
//! key identifier, signed with the secret distributed by Caudena. The secret is
//! distributed base64-encoded and must be decoded before signing.

use anyhow::Context;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::CaudenaResult;

/// Token validity duration in seconds
const TOKEN_VALIDITY_DURATION: i64 = 300;

/// Credentials identifying a caller of the Prism API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    /// API key identifier, carried in the token claims as `kid`
    pub key_id: String,

    /// Base64-encoded signing secret
    pub secret: String,
}

impl ApiCredentials {
    /// `ApiCredentials` factory
    pub fn new(key_id: &str, secret: &str) -> Self {
        Self {
            key_id: key_id.to_string(),
            secret: secret.to_string(),
        }
    }
}

/// Claims of a Prism API token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiTokenClaims {
    /// API key identifier of the caller
    pub kid: String,

    /// Expiration of the token, as a unix timestamp
    pub exp: i64,
}

/// Signer of the short lived tokens expected by the Prism API.
pub struct ApiTokenSigner {
    key_id: String,
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for ApiTokenSigner {
    // Manual implementation because [EncodingKey] does not implement [std::fmt::Debug]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiTokenSigner")
            .field("key_id", &self.key_id)
            .finish_non_exhaustive()
    }
}

impl ApiTokenSigner {
    /// Constructs a new `ApiTokenSigner` from the given credentials.
    ///
    /// Fails if the secret of the credentials is not valid base64.
    pub fn new(credentials: ApiCredentials) -> CaudenaResult<Self> {
        let secret = STANDARD
            .decode(&credentials.secret)
            .with_context(|| "Invalid base64-encoded API secret")?;

        Ok(Self {
            key_id: credentials.key_id,
            encoding_key: EncodingKey::from_secret(&secret),
        })
    }

    /// Sign a fresh token.
    pub fn sign(&self) -> CaudenaResult<String> {
        let claims = ApiTokenClaims {
            kid: self.key_id.clone(),
            exp: (Utc::now() + TimeDelta::seconds(TOKEN_VALIDITY_DURATION)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .with_context(|| "Could not sign an API token")
    }
}
