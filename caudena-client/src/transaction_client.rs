//! A client to retrieve transactions with their analytics annotations from the Prism API.
//!
//! In order to do so it defines a [TransactionClient] which exposes the following features:
//!  - [get][TransactionClient::get]: get an annotated transaction from its hash
//!
//! # Get a transaction
//!
//! To get a transaction using the [ClientBuilder][crate::client::ClientBuilder].
//!
//! ```no_run
//! # async fn run() -> caudena_client::CaudenaResult<()> {
//! use caudena_client::{ApiCredentials, ClientBuilder, entities::Currency};
//!
//! let credentials = ApiCredentials::new("YOUR_KEY_ID", "YOUR_BASE64_ENCODED_SECRET");
//! let client = ClientBuilder::endpoint("YOUR_PRISM_API_ENDPOINT", credentials).build()?;
//! let transaction = client.transaction().get(Currency::Btc, "TRANSACTION_HASH").await?.unwrap();
//!
//! println!(
//!     "Transaction hash={}, amount={:?}, fee={:?}",
//!     transaction.hash, transaction.amount, transaction.fee
//! );
//! #    Ok(())
//! # }
//! ```

use std::sync::Arc;

use anyhow::Context;

use crate::entities::Currency;
use crate::messages::ResponseEnvelope;
use crate::prism_client::{PrismClient, PrismClientError, PrismRequest};
use crate::{CaudenaResult, Transaction};

/// HTTP client for the transaction endpoints of the Prism API
pub struct TransactionClient {
    prism_client: Arc<dyn PrismClient>,
}

impl TransactionClient {
    /// Constructs a new `TransactionClient`.
    pub fn new(prism_client: Arc<dyn PrismClient>) -> Self {
        Self { prism_client }
    }

    /// Get the annotated transaction of the given hash.
    ///
    /// Returns `None` when the Prism API does not know the transaction.
    pub async fn get(&self, currency: Currency, hash: &str) -> CaudenaResult<Option<Transaction>> {
        match self
            .prism_client
            .get_content(PrismRequest::GetTransaction {
                currency,
                hash: hash.to_string(),
            })
            .await
        {
            Ok(content) => {
                let envelope: ResponseEnvelope<Transaction> = serde_json::from_str(&content)
                    .with_context(|| "Transaction client can not deserialize a transaction")?;

                Ok(envelope.into_data())
            }
            Err(PrismClientError::RemoteServerLogical(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
