#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod address_client;
pub mod api_token;
mod client;
pub mod entities;
pub mod messages;
pub mod prism_client;
mod transaction_client;
mod type_alias;

pub use address_client::{AddressClient, AddressTransactionsPage};
pub use api_token::ApiCredentials;
pub use client::*;
pub use transaction_client::TransactionClient;
pub use type_alias::*;

#[cfg(test)]
pub(crate) mod test_tools {
    use slog::Drain;
    use std::sync::Arc;

    pub fn logger_for_tests() -> slog::Logger {
        let decorator = slog_term::PlainDecorator::new(slog_term::TestStdoutWriter);
        let drain = slog_term::CompactFormat::new(decorator).build().fuse();
        let drain = slog_async::Async::new(drain).build().fuse();
        slog::Logger::root(Arc::new(drain), slog::o!())
    }
}
