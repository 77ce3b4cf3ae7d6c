//! Entities module
//!
//! This module provides the domain types shared by the client requests.

mod currency;
mod transaction_filter;

pub use currency::Currency;
pub use transaction_filter::{SortOrder, TransactionListFilter, TransactionSortField};
