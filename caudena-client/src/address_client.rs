//! A client to retrieve address analytics from the Prism API.
//!
//! In order to do so it defines an [AddressClient] which exposes the following features:
//!  - [get_stats][AddressClient::get_stats]: get the statistics of an address
//!  - [list_transactions][AddressClient::list_transactions]: list the transactions of an
//!    address, page by page
//!
//! # Get the statistics of an address
//!
//! To get the statistics of an address using the [ClientBuilder][crate::client::ClientBuilder].
//!
//! ```no_run
//! # async fn run() -> caudena_client::CaudenaResult<()> {
//! use caudena_client::{ApiCredentials, ClientBuilder, entities::Currency};
//!
//! let credentials = ApiCredentials::new("YOUR_KEY_ID", "YOUR_BASE64_ENCODED_SECRET");
//! let client = ClientBuilder::endpoint("YOUR_PRISM_API_ENDPOINT", credentials).build()?;
//! let stats = client.address().get_stats(Currency::Btc, "ADDRESS").await?.unwrap();
//!
//! println!("Address balance={}, score={:?}", stats.balance.balance, stats.score);
//! #    Ok(())
//! # }
//! ```
//!
//! # List the transactions of an address
//!
//! ```no_run
//! # async fn run() -> caudena_client::CaudenaResult<()> {
//! use caudena_client::{ApiCredentials, ClientBuilder, entities::{Currency, TransactionListFilter}};
//!
//! let credentials = ApiCredentials::new("YOUR_KEY_ID", "YOUR_BASE64_ENCODED_SECRET");
//! let client = ClientBuilder::endpoint("YOUR_PRISM_API_ENDPOINT", credentials).build()?;
//! let page = client
//!     .address()
//!     .list_transactions(Currency::Btc, "ADDRESS", TransactionListFilter::default())
//!     .await?
//!     .unwrap();
//!
//! println!("Found {} transactions", page.pagination.total_entries);
//! #    Ok(())
//! # }
//! ```

use std::sync::Arc;

use anyhow::Context;

use crate::entities::{Currency, TransactionListFilter};
use crate::messages::ResponseEnvelope;
use crate::prism_client::{PrismClient, PrismClientError, PrismRequest};
use crate::{AddressStats, AddressTransaction, CaudenaResult, Pagination};

/// One page of the transactions of an address, with the pagination data of the listing.
#[derive(Clone, Debug, PartialEq)]
pub struct AddressTransactionsPage {
    /// Transactions of the page
    pub transactions: Vec<AddressTransaction>,

    /// Pagination data of the listing
    pub pagination: Pagination,
}

/// HTTP client for the address endpoints of the Prism API
pub struct AddressClient {
    prism_client: Arc<dyn PrismClient>,
}

impl AddressClient {
    /// Constructs a new `AddressClient`.
    pub fn new(prism_client: Arc<dyn PrismClient>) -> Self {
        Self { prism_client }
    }

    /// Get the statistics of the given address.
    ///
    /// Returns `None` when the Prism API does not know the address.
    pub async fn get_stats(
        &self,
        currency: Currency,
        address: &str,
    ) -> CaudenaResult<Option<AddressStats>> {
        match self
            .prism_client
            .get_content(PrismRequest::GetAddressStats {
                currency,
                address: address.to_string(),
            })
            .await
        {
            Ok(content) => {
                let envelope: ResponseEnvelope<AddressStats> = serde_json::from_str(&content)
                    .with_context(|| "Address client can not deserialize address statistics")?;

                Ok(envelope.into_data())
            }
            Err(PrismClientError::RemoteServerLogical(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List one page of the transactions of the given address, most recent first by default.
    ///
    /// Returns `None` when the Prism API does not know the address.
    pub async fn list_transactions(
        &self,
        currency: Currency,
        address: &str,
        filter: TransactionListFilter,
    ) -> CaudenaResult<Option<AddressTransactionsPage>> {
        match self
            .prism_client
            .post_content(PrismRequest::ListAddressTransactions {
                currency,
                address: address.to_string(),
                filter,
            })
            .await
        {
            Ok(content) => {
                let envelope: ResponseEnvelope<Vec<AddressTransaction>> =
                    serde_json::from_str(&content).with_context(|| {
                        "Address client can not deserialize a transactions listing"
                    })?;
                if !envelope.status {
                    return Ok(None);
                }

                Ok(Some(AddressTransactionsPage {
                    transactions: envelope.data.unwrap_or_default(),
                    pagination: envelope.pagination.unwrap_or_default(),
                }))
            }
            Err(PrismClientError::RemoteServerLogical(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
