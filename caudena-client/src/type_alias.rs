/// Caudena result type, an alias of [anyhow::Result]
pub type CaudenaResult<T> = anyhow::Result<T>;

/// Caudena error type, an alias of [anyhow::Error]
pub type CaudenaError = anyhow::Error;

/// A blockchain transaction with its analytics annotations.
///
pub use crate::messages::TransactionMessage as Transaction;

/// An input or output of a [Transaction].
///
pub use crate::messages::TransactionEntryMessage as TransactionEntry;

/// A token transfer carried by a [Transaction].
///
pub use crate::messages::TokenTransferMessage as TokenTransfer;

/// Statistics of a blockchain address.
///
pub use crate::messages::AddressStatsMessage as AddressStats;

/// List item of the transactions of an address.
///
pub use crate::messages::AddressTransactionMessage as AddressTransaction;

/// Pagination data of a list response.
///
pub use crate::messages::PaginationMessage as Pagination;
