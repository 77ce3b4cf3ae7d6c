//! Messages module
//! This module aims at providing shared structures for the Prism API responses.

mod address_stats;
mod address_transaction;
mod api_error;
mod entity;
mod envelope;
mod pagination;
mod token_transfer;
mod transaction;
mod transaction_entry;

pub use address_stats::{AddressStatsMessage, BalanceMessage, TransferCountMessage};
pub use address_transaction::AddressTransactionMessage;
pub use api_error::ApiErrorMessage;
pub use entity::EntityMessage;
pub use envelope::ResponseEnvelope;
pub use pagination::PaginationMessage;
pub use token_transfer::{TokenInfoMessage, TokenPartyMessage, TokenTransferMessage};
pub use transaction::TransactionMessage;
pub use transaction_entry::{SUSPICIOUS_SCORE_THRESHOLD, TransactionEntryMessage};
