use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, anyhow};
use reqwest::Url;
use slog::{Logger, o};

use crate::CaudenaResult;
use crate::address_client::AddressClient;
use crate::api_token::{ApiCredentials, ApiTokenSigner};
use crate::prism_client::{PrismClient, PrismHTTPClient};
use crate::transaction_client::TransactionClient;

/// Default endpoint of the Prism API.
pub const DEFAULT_PRISM_API_ENDPOINT: &str = "https://prism-api.caudena.com";

/// Timeout of the requests sent to the Prism API, in milliseconds.
const HTTP_REQUEST_TIMEOUT_DURATION: u64 = 30000;

/// Structure that aggregates the available clients for each family of Prism API queries.
///
/// Use the [ClientBuilder] to instantiate it easily.
#[derive(Clone)]
pub struct Client {
    transaction_client: Arc<TransactionClient>,
    address_client: Arc<AddressClient>,
}

impl std::fmt::Debug for Client {
    // Manual implementation because the inner clients hold `dyn PrismClient` trait
    // objects, which do not implement [std::fmt::Debug]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

impl Client {
    /// Get the client that retrieves transactions with their analytics annotations.
    pub fn transaction(&self) -> Arc<TransactionClient> {
        self.transaction_client.clone()
    }

    /// Get the client that retrieves address analytics.
    pub fn address(&self) -> Arc<AddressClient> {
        self.address_client.clone()
    }
}

/// Builder that can be used to create a [Client] easily or with custom dependencies.
pub struct ClientBuilder {
    endpoint: Option<String>,
    credentials: ApiCredentials,
    prism_client: Option<Arc<dyn PrismClient>>,
    logger: Option<Logger>,
    timeout_duration: Option<Duration>,
}

impl std::fmt::Debug for ClientBuilder {
    // Manual implementation because the `dyn PrismClient` trait object and the
    // logger do not implement [std::fmt::Debug]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("endpoint", &self.endpoint)
            .field("timeout_duration", &self.timeout_duration)
            .finish_non_exhaustive()
    }
}

impl ClientBuilder {
    /// Constructs a new `ClientBuilder` that fetches data from the Prism API at the given
    /// endpoint, authenticated with the given credentials.
    pub fn endpoint(endpoint: &str, credentials: ApiCredentials) -> ClientBuilder {
        Self {
            endpoint: Some(endpoint.to_string()),
            credentials,
            prism_client: None,
            logger: None,
            timeout_duration: Some(Duration::from_millis(HTTP_REQUEST_TIMEOUT_DURATION)),
        }
    }

    /// Constructs a new `ClientBuilder` without any endpoint set.
    ///
    /// Use [ClientBuilder::endpoint] if you don't need to set a custom [PrismClient] to
    /// request data from the Prism API.
    pub fn new(credentials: ApiCredentials) -> ClientBuilder {
        Self {
            endpoint: None,
            credentials,
            prism_client: None,
            logger: None,
            timeout_duration: Some(Duration::from_millis(HTTP_REQUEST_TIMEOUT_DURATION)),
        }
    }

    /// Set the [PrismClient] that the [Client] will use to query the Prism API.
    pub fn with_prism_client(mut self, prism_client: Arc<dyn PrismClient>) -> ClientBuilder {
        self.prism_client = Some(prism_client);
        self
    }

    /// Set the [Logger] to use.
    pub fn with_logger(mut self, logger: Logger) -> ClientBuilder {
        self.logger = Some(logger);
        self
    }

    /// Set the timeout of the requests sent to the Prism API, `None` disabling it.
    ///
    /// Defaults to 30 seconds.
    pub fn with_request_timeout(mut self, timeout_duration: Option<Duration>) -> ClientBuilder {
        self.timeout_duration = timeout_duration;
        self
    }

    /// Returns a `Client` configured with the dependencies provided to this `ClientBuilder`.
    ///
    /// If no custom [PrismClient] was set, a [PrismHTTPClient] will be created targeting
    /// the given endpoint, signing its requests with the given credentials.
    pub fn build(self) -> CaudenaResult<Client> {
        let logger = self
            .logger
            .clone()
            .unwrap_or_else(|| Logger::root(slog::Discard, o!()));

        let prism_client = match self.prism_client {
            None => {
                let endpoint = self.endpoint.ok_or(anyhow!(
                    "No Prism API endpoint set: \
                    an endpoint is required when no custom Prism client is set"
                ))?;
                let endpoint_url = Url::parse(&endpoint)
                    .with_context(|| format!("Invalid Prism API endpoint '{endpoint}'"))?;
                let token_signer = ApiTokenSigner::new(self.credentials)?;

                Arc::new(PrismHTTPClient::new(
                    endpoint_url,
                    token_signer,
                    self.timeout_duration,
                    logger.clone(),
                )?) as Arc<dyn PrismClient>
            }
            Some(client) => client,
        };

        let transaction_client = Arc::new(TransactionClient::new(prism_client.clone()));
        let address_client = Arc::new(AddressClient::new(prism_client));

        Ok(Client {
            transaction_client,
            address_client,
        })
    }
}

#[cfg(test)]
mod tests {
    use base64::{Engine as _, engine::general_purpose::STANDARD};

    use super::*;

    fn test_credentials() -> ApiCredentials {
        ApiCredentials::new("test-key-id", &STANDARD.encode(b"test-secret"))
    }

    #[test]
    fn building_a_client_fails_without_an_endpoint_nor_a_custom_prism_client() {
        let error = ClientBuilder::new(test_credentials()).build().unwrap_err();

        assert!(
            error.to_string().contains("No Prism API endpoint set"),
            "unexpected error message: {error}"
        );
    }

    #[test]
    fn building_a_client_fails_with_an_invalid_endpoint() {
        ClientBuilder::endpoint("not an url", test_credentials())
            .build()
            .expect_err("building a client with an unparsable endpoint should fail");
    }

    #[test]
    fn building_a_client_fails_with_an_undecodable_secret() {
        let credentials = ApiCredentials::new("test-key-id", "this is not base64 !");

        ClientBuilder::endpoint(DEFAULT_PRISM_API_ENDPOINT, credentials)
            .build()
            .expect_err("building a client with an undecodable secret should fail");
    }

    #[test]
    fn building_a_client_from_a_valid_endpoint_and_credentials_works() {
        ClientBuilder::endpoint(DEFAULT_PRISM_API_ENDPOINT, test_credentials())
            .build()
            .expect("building a client with valid dependencies should work");
    }
}
