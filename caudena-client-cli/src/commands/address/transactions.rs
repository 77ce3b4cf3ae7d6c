use std::collections::HashMap;

use anyhow::{Context, anyhow};
use clap::Parser;
use cli_table::{Cell, Table};

use caudena_client::entities::{Currency, SortOrder, TransactionListFilter, TransactionSortField};
use caudena_client::{AddressTransactionsPage, CaudenaResult};

use crate::configuration::{ConfigError, ConfigSource};
use crate::utils::{self, NOT_AVAILABLE};
use crate::{
    CommandContext,
    commands::{SharedArgs, client_builder, currency_parameter},
};

const HASH_PREVIEW_LENGTH: usize = 20;

/// Clap command to list the transactions of a given address
#[derive(Parser, Debug, Clone)]
pub struct AddressTransactionsCommand {
    #[clap(flatten)]
    shared_args: SharedArgs,

    /// Address to list the transactions of.
    address: String,

    /// Blockchain of the address.
    #[clap(long)]
    currency: Option<Currency>,

    /// Page to retrieve, starting at 1.
    #[clap(long, default_value_t = 1)]
    page: u64,

    /// Field the transactions are sorted by.
    #[clap(long, default_value_t)]
    sort_by: TransactionSortField,

    /// Sort order of the transactions.
    #[clap(long, default_value_t)]
    sort_order: SortOrder,
}

impl AddressTransactionsCommand {
    /// Is JSON output enabled
    pub fn is_json_output_enabled(&self) -> bool {
        self.shared_args.json
    }

    fn filter(&self) -> TransactionListFilter {
        TransactionListFilter {
            page: self.page,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
        }
    }

    /// Address Transactions command
    pub async fn execute(&self, context: CommandContext) -> CaudenaResult<()> {
        let params = context.config_parameters()?.add_source(self)?;
        let currency = currency_parameter(&params)?;
        let client = client_builder(&params)?
            .with_logger(context.logger().clone())
            .build()?;

        let page = client
            .address()
            .list_transactions(currency, &self.address, self.filter())
            .await
            .with_context(|| {
                format!("Can not list the transactions of address: '{}'", self.address)
            })?
            .ok_or_else(|| anyhow!("Address not found: '{}'", self.address))?;

        if self.is_json_output_enabled() {
            println!(
                "{}",
                serde_json::json!({
                    "transactions": page.transactions,
                    "pagination": page.pagination,
                })
            );
        } else {
            println!("{}", transactions_report(&page)?);
        }

        Ok(())
    }
}

impl ConfigSource for AddressTransactionsCommand {
    fn collect(&self) -> Result<HashMap<String, String>, ConfigError> {
        let mut map = HashMap::new();

        if let Some(currency) = self.currency {
            map.insert("currency".to_string(), currency.to_string());
        }

        Ok(map)
    }
}

/// Build the console listing of one page of transactions.
fn transactions_report(page: &AddressTransactionsPage) -> CaudenaResult<String> {
    let table = page
        .transactions
        .iter()
        .map(|transaction| {
            vec![
                utils::truncate(
                    transaction.hash.as_deref().unwrap_or(NOT_AVAILABLE),
                    HASH_PREVIEW_LENGTH,
                )
                .cell(),
                utils::format_timestamp(transaction.time).cell(),
                transaction.direction.as_deref().unwrap_or(NOT_AVAILABLE).cell(),
                utils::format_amount(transaction.amount().unwrap_or_default()).cell(),
                utils::format_usd(transaction.amount_usd().unwrap_or_default()).cell(),
                utils::format_amount(transaction.fee.unwrap_or_default()).cell(),
                utils::format_count(transaction.confirmations.unwrap_or_default()).cell(),
            ]
        })
        .collect::<Vec<_>>()
        .table()
        .title(vec![
            "Hash".cell(),
            "Time".cell(),
            "Direction".cell(),
            "Amount".cell(),
            "Amount (USD)".cell(),
            "Fee".cell(),
            "Confirmations".cell(),
        ]);

    let footer = match (page.pagination.page, page.pagination.total_pages) {
        (Some(page_number), Some(total_pages)) => format!(
            "Page {page_number} of {total_pages} - {} transactions in total",
            utils::format_count(page.pagination.total_entries)
        ),
        _ => format!(
            "{} transactions in total",
            utils::format_count(page.pagination.total_entries)
        ),
    };

    Ok(format!(
        "{}\n{footer}",
        table.display()?.to_string().trim_end()
    ))
}
