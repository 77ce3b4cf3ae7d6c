use std::collections::HashMap;

use anyhow::{Context, anyhow};
use clap::Parser;
use cli_table::{Cell, Table};

use caudena_client::entities::{Currency, TransactionListFilter};
use caudena_client::{AddressStats, AddressTransaction, AddressTransactionsPage, CaudenaResult};

use crate::configuration::{ConfigError, ConfigSource};
use crate::utils::{self, NOT_AVAILABLE};
use crate::{
    CommandContext,
    commands::{SharedArgs, client_builder, currency_parameter},
};

const TRANSACTION_PREVIEW_LENGTH: usize = 5;
const HASH_PREVIEW_LENGTH: usize = 20;

/// Clap command to show the statistics of a given address
#[derive(Parser, Debug, Clone)]
pub struct AddressShowCommand {
    #[clap(flatten)]
    shared_args: SharedArgs,

    /// Address to show.
    address: String,

    /// Blockchain of the address.
    #[clap(long)]
    currency: Option<Currency>,
}

impl AddressShowCommand {
    /// Is JSON output enabled
    pub fn is_json_output_enabled(&self) -> bool {
        self.shared_args.json
    }

    /// Address Show command
    pub async fn execute(&self, context: CommandContext) -> CaudenaResult<()> {
        let params = context.config_parameters()?.add_source(self)?;
        let currency = currency_parameter(&params)?;
        let client = client_builder(&params)?
            .with_logger(context.logger().clone())
            .build()?;

        let stats = client
            .address()
            .get_stats(currency, &self.address)
            .await
            .with_context(|| format!("Can not get the statistics of address: '{}'", self.address))?
            .ok_or_else(|| anyhow!("Address not found: '{}'", self.address))?;
        let latest_page = client
            .address()
            .list_transactions(currency, &self.address, TransactionListFilter::default())
            .await
            .with_context(|| {
                format!("Can not list the transactions of address: '{}'", self.address)
            })?;

        if self.is_json_output_enabled() {
            let latest_transactions = latest_page
                .as_ref()
                .map(|page| {
                    page.transactions
                        .iter()
                        .take(TRANSACTION_PREVIEW_LENGTH)
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default();
            println!(
                "{}",
                serde_json::json!({
                    "stats": stats,
                    "latest_transactions": latest_transactions,
                    "total_transactions": latest_page
                        .as_ref()
                        .map(|page| page.pagination.total_entries)
                        .unwrap_or_default(),
                })
            );
        } else {
            println!("{}", address_report(&stats, latest_page.as_ref())?);
        }

        Ok(())
    }
}

impl ConfigSource for AddressShowCommand {
    fn collect(&self) -> Result<HashMap<String, String>, ConfigError> {
        let mut map = HashMap::new();

        if let Some(currency) = self.currency {
            map.insert("currency".to_string(), currency.to_string());
        }

        Ok(map)
    }
}

/// Build the full console report of an address.
fn address_report(
    stats: &AddressStats,
    latest_page: Option<&AddressTransactionsPage>,
) -> CaudenaResult<String> {
    Ok(format!(
        "{}\n{}",
        stats_section(stats)?,
        transactions_section(latest_page)
    ))
}

fn stats_section(stats: &AddressStats) -> CaudenaResult<String> {
    let native_balance = match stats.blockchain.as_deref() {
        Some(blockchain) => format!(
            "{} {}",
            utils::format_balance(stats.balance.balance),
            blockchain.to_uppercase()
        ),
        None => utils::format_balance(stats.balance.balance),
    };
    let mut rows = vec![
        vec![
            "Address".cell(),
            stats.address.as_deref().unwrap_or(NOT_AVAILABLE).cell(),
        ],
        vec!["Balance".cell(), native_balance.cell()],
        vec![
            "Total In".cell(),
            utils::format_balance(stats.balance.total_in).cell(),
        ],
        vec![
            "Total Out".cell(),
            utils::format_balance(stats.balance.total_out).cell(),
        ],
        vec![
            "Balance (USD)".cell(),
            utils::format_usd(stats.balance_usd.balance).cell(),
        ],
        vec![
            "Total In (USD)".cell(),
            utils::format_usd(stats.balance_usd.total_in).cell(),
        ],
        vec![
            "Total Out (USD)".cell(),
            utils::format_usd(stats.balance_usd.total_out).cell(),
        ],
        vec![
            "Incoming Transfers".cell(),
            utils::format_count(stats.trx_count.incoming).cell(),
        ],
        vec![
            "Outgoing Transfers".cell(),
            utils::format_count(stats.trx_count.outgoing).cell(),
        ],
    ];

    if let Some(entity) = &stats.entity {
        rows.push(vec![
            "Entity".cell(),
            entity.name.as_deref().unwrap_or(NOT_AVAILABLE).cell(),
        ]);
        rows.push(vec![
            "Entity Category".cell(),
            entity.category.as_deref().unwrap_or(NOT_AVAILABLE).cell(),
        ]);
    }
    rows.push(vec![
        "Score".cell(),
        utils::format_score_out_of_ten(stats.score).cell(),
    ]);
    rows.push(vec![
        "First Seen".cell(),
        utils::format_timestamp(stats.first_seen).cell(),
    ]);
    rows.push(vec![
        "Last Seen".cell(),
        utils::format_timestamp(stats.last_seen).cell(),
    ]);

    Ok(rows.table().display()?.to_string().trim_end().to_string())
}

fn transactions_section(latest_page: Option<&AddressTransactionsPage>) -> String {
    let Some(page) = latest_page.filter(|page| !page.transactions.is_empty()) else {
        return "No transactions found".to_string();
    };

    let mut lines = vec![
        format!("Latest transactions (first {TRANSACTION_PREVIEW_LENGTH}):"),
        format!(
            "Total transactions: {}",
            utils::format_count(page.pagination.total_entries)
        ),
    ];
    for (index, transaction) in page
        .transactions
        .iter()
        .take(TRANSACTION_PREVIEW_LENGTH)
        .enumerate()
    {
        lines.push(String::new());
        lines.push(format!("--- Transaction {} ---", index + 1));
        lines.push(transaction_summary(transaction));
    }

    lines.join("\n")
}

fn transaction_summary(transaction: &AddressTransaction) -> String {
    [
        format!(
            "Hash: {}",
            utils::truncate(
                transaction.hash.as_deref().unwrap_or(NOT_AVAILABLE),
                HASH_PREVIEW_LENGTH
            )
        ),
        format!("Time: {}", utils::format_timestamp(transaction.time)),
        format!(
            "Direction: {}",
            transaction.direction.as_deref().unwrap_or(NOT_AVAILABLE)
        ),
        format!(
            "Amount: {}",
            utils::format_amount(transaction.amount().unwrap_or_default())
        ),
        format!(
            "Amount (USD): {}",
            utils::format_usd(transaction.amount_usd().unwrap_or_default())
        ),
        format!(
            "Fee: {} ({})",
            utils::format_amount(transaction.fee.unwrap_or_default()),
            utils::format_usd(transaction.fee_usd.unwrap_or_default())
        ),
        format!(
            "Confirmations: {}",
            utils::format_count(transaction.confirmations.unwrap_or_default())
        ),
    ]
    .join("\n")
}
