//! Command module
//! This module holds the subcommands that can be used from the CLI.

pub mod address;
pub mod transaction;

use clap::Parser;

use caudena_client::entities::Currency;
use caudena_client::{ApiCredentials, CaudenaResult, ClientBuilder, DEFAULT_PRISM_API_ENDPOINT};

use crate::configuration::{ConfigError, ConfigParameters};

/// CLI args shared across all commands
#[derive(Parser, Debug, Clone, Copy)]
pub struct SharedArgs {
    /// Enable JSON output.
    #[clap(long)]
    pub json: bool,
}

pub(crate) fn client_builder(params: &ConfigParameters) -> CaudenaResult<ClientBuilder> {
    let credentials = ApiCredentials::new(&params.require("kid")?, &params.require("secret")?);
    let builder = ClientBuilder::endpoint(
        &params.get_or("endpoint", DEFAULT_PRISM_API_ENDPOINT),
        credentials,
    );

    Ok(builder)
}

pub(crate) fn currency_parameter(params: &ConfigParameters) -> Result<Currency, ConfigError> {
    let default_currency = Currency::default().to_string();
    let raw = params.get_or("currency", &default_currency);

    raw.parse().map_err(|_| {
        ConfigError::Conversion(format!(
            "Could not parse currency: '{raw}'. Supported currencies: {}.",
            Currency::list()
                .iter()
                .map(|currency| currency.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })
}
