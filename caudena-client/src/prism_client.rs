//! Mechanisms to exchange data with the Prism API.
//!
//! The [PrismClient] trait abstracts how the communication with the Prism API
//! is done.
//! The clients that need to communicate only need to define their request using the
//! [PrismRequest] enum.
//!
//! An implementation using HTTP is available: [PrismHTTPClient].

use std::time::Duration;

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Response, StatusCode, Url};
use slog::{Logger, debug};
use thiserror::Error;

use crate::api_token::ApiTokenSigner;
use crate::entities::{Currency, TransactionListFilter};
use crate::messages::ApiErrorMessage;
use crate::{CaudenaError, CaudenaResult};

/// Error tied with the Prism client
#[derive(Error, Debug)]
pub enum PrismClientError {
    /// Error raised when querying the Prism API returned a 5XX error.
    #[error("Internal error of the Prism API")]
    RemoteServerTechnical(#[source] CaudenaError),

    /// Error raised when querying the Prism API returned a 4XX error.
    #[error("Invalid request to the Prism API")]
    RemoteServerLogical(#[source] CaudenaError),

    /// Error raised when the Prism API rejected the credentials of the caller.
    #[error("Invalid or expired API credentials")]
    Unauthorized(#[source] CaudenaError),

    /// HTTP subsystem error
    #[error("HTTP subsystem error")]
    SubsystemError(#[source] CaudenaError),
}

/// What can be read from a [PrismClient].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PrismRequest {
    /// Get a specific [transaction][crate::Transaction] with its analytics annotations
    GetTransaction {
        /// Blockchain of the transaction
        currency: Currency,
        /// Hash of the transaction to retrieve
        hash: String,
    },

    /// Get the [statistics][crate::AddressStats] of an address
    GetAddressStats {
        /// Blockchain of the address
        currency: Currency,
        /// Address to retrieve the statistics of
        address: String,
    },

    /// Lists the [transactions][crate::AddressTransaction] of an address
    ListAddressTransactions {
        /// Blockchain of the address
        currency: Currency,
        /// Address to list the transactions of
        address: String,
        /// Page and sorting of the listing
        filter: TransactionListFilter,
    },
}

impl PrismRequest {
    /// Get the request route relative to the API root endpoint.
    pub fn route(&self) -> String {
        match self {
            PrismRequest::GetTransaction { currency, hash } => {
                format!("v2/{currency}/transaction/{hash}")
            }
            PrismRequest::GetAddressStats { currency, address } => {
                format!("v2/{currency}/address/stats/{address}")
            }
            PrismRequest::ListAddressTransactions {
                currency, address, ..
            } => {
                format!("v2/{currency}/address/transactions/{address}")
            }
        }
    }

    /// Get the request body to send to the API.
    pub fn get_body(&self) -> Option<String> {
        match self {
            PrismRequest::ListAddressTransactions { filter, .. } => {
                serde_json::to_string(filter).ok()
            }
            _ => None,
        }
    }
}

/// API that defines a client for the Prism API
#[async_trait]
pub trait PrismClient: Sync + Send {
    /// Get the content back from the Prism API
    async fn get_content(&self, request: PrismRequest) -> Result<String, PrismClientError>;

    /// Post information to the Prism API
    async fn post_content(&self, request: PrismRequest) -> Result<String, PrismClientError>;
}

/// Responsible for HTTP transport and request signing.
pub struct PrismHTTPClient {
    http_client: reqwest::Client,
    endpoint: Url,
    token_signer: ApiTokenSigner,
    timeout_duration: Option<Duration>,
    logger: Logger,
}

impl PrismHTTPClient {
    /// Constructs a new `PrismHTTPClient`
    pub fn new(
        endpoint: Url,
        token_signer: ApiTokenSigner,
        timeout_duration: Option<Duration>,
        logger: Logger,
    ) -> CaudenaResult<Self> {
        let http_client = reqwest::ClientBuilder::new()
            .user_agent("caudena-client")
            .build()
            .with_context(|| "Building http client for Prism client failed")?;

        // Trailing slash is significant because url::join
        // (https://docs.rs/url/latest/url/struct.Url.html#method.join) will remove
        // the 'path' part of the url if it doesn't end with a trailing slash.
        let endpoint = if endpoint.as_str().ends_with('/') {
            endpoint
        } else {
            let mut url = endpoint.clone();
            url.set_path(&format!("{}/", endpoint.path()));
            url
        };

        Ok(Self {
            http_client,
            endpoint,
            token_signer,
            timeout_duration,
            logger,
        })
    }

    /// Sign a fresh authorization header value, so that every request stays
    /// within the token validity window.
    fn sign_bearer_token(&self) -> Result<String, PrismClientError> {
        self.token_signer.sign().map_err(PrismClientError::SubsystemError)
    }

    async fn get(&self, url: Url) -> Result<Response, PrismClientError> {
        debug!(self.logger, "GET url='{url}'.");
        let request_builder = self
            .http_client
            .get(url.clone())
            .bearer_auth(self.sign_bearer_token()?)
            .header(ACCEPT, "application/json");
        let request_builder = if let Some(duration) = self.timeout_duration {
            request_builder.timeout(duration)
        } else {
            request_builder
        };

        let response = request_builder.send().await.map_err(|e| {
            PrismClientError::SubsystemError(anyhow!(e).context(format!(
                "Cannot perform a GET against the Prism API HTTP server (url='{url}')"
            )))
        })?;

        match response.status() {
            StatusCode::OK => Ok(response),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(Self::unauthorized_error(response).await)
            }
            StatusCode::NOT_FOUND => Err(Self::not_found_error(url)),
            status_code if status_code.is_client_error() => {
                Err(Self::remote_logical_error(response).await)
            }
            _ => Err(Self::remote_technical_error(response).await),
        }
    }

    async fn post(&self, url: Url, json: &str) -> Result<Response, PrismClientError> {
        debug!(self.logger, "POST url='{url}'"; "json" => json);
        let request_builder = self
            .http_client
            .post(url.to_owned())
            .body(json.to_owned())
            .bearer_auth(self.sign_bearer_token()?)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");
        let request_builder = if let Some(duration) = self.timeout_duration {
            request_builder.timeout(duration)
        } else {
            request_builder
        };

        let response = request_builder.send().await.map_err(|e| {
            PrismClientError::SubsystemError(
                anyhow!(e).context(format!("Error while POSTing data '{json}' to URL='{url}'.")),
            )
        })?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(response),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(Self::unauthorized_error(response).await)
            }
            StatusCode::NOT_FOUND => Err(Self::not_found_error(url)),
            status_code if status_code.is_client_error() => {
                Err(Self::remote_logical_error(response).await)
            }
            _ => Err(Self::remote_technical_error(response).await),
        }
    }

    fn get_url_for_route(&self, endpoint: &str) -> Result<Url, PrismClientError> {
        self.endpoint
            .join(endpoint)
            .with_context(|| {
                format!(
                    "Invalid url when joining given endpoint, '{endpoint}', to Prism API url '{}'",
                    self.endpoint
                )
            })
            .map_err(PrismClientError::SubsystemError)
    }

    fn not_found_error(url: Url) -> PrismClientError {
        PrismClientError::RemoteServerLogical(anyhow!("Url='{url}' not found"))
    }

    async fn unauthorized_error(response: Response) -> PrismClientError {
        let api_error = Self::read_error_message(response).await;

        PrismClientError::Unauthorized(anyhow!("{api_error}"))
    }

    async fn remote_logical_error(response: Response) -> PrismClientError {
        let api_error = Self::read_error_message(response).await;

        PrismClientError::RemoteServerLogical(anyhow!("{api_error}"))
    }

    async fn remote_technical_error(response: Response) -> PrismClientError {
        let api_error = Self::read_error_message(response).await;

        PrismClientError::RemoteServerTechnical(anyhow!("{api_error}"))
    }

    /// Read the error payload of a response, falling back to its raw body when
    /// it does not follow the documented error shape.
    async fn read_error_message(response: Response) -> ApiErrorMessage {
        let status_code = response.status();

        match response.text().await {
            Ok(body) => match serde_json::from_str::<ApiErrorMessage>(&body) {
                Ok(api_error) if !api_error.message.is_empty() => api_error,
                _ if !body.is_empty() => ApiErrorMessage::new(body),
                _ => ApiErrorMessage::new(format!("Unhandled error {status_code}")),
            },
            Err(_) => ApiErrorMessage::new(format!("Unhandled error {status_code}")),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
impl PrismClient for PrismHTTPClient {
    async fn get_content(&self, request: PrismRequest) -> Result<String, PrismClientError> {
        let response = self.get(self.get_url_for_route(&request.route())?).await?;
        let content = format!("{response:?}");

        response.text().await.map_err(|e| {
            PrismClientError::SubsystemError(anyhow!(e).context(format!(
                "Could not find a JSON body in the response '{content}'."
            )))
        })
    }

    async fn post_content(&self, request: PrismRequest) -> Result<String, PrismClientError> {
        let response = self
            .post(
                self.get_url_for_route(&request.route())?,
                &request.get_body().unwrap_or_default(),
            )
            .await?;

        response.text().await.map_err(|e| {
            PrismClientError::SubsystemError(
                anyhow!(e).context("Could not find a text body in the response."),
            )
        })
    }
}
