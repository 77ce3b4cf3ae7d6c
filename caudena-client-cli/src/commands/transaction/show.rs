use std::collections::HashMap;

use anyhow::{Context, anyhow};
use clap::Parser;
use cli_table::{Cell, Table};

use caudena_client::entities::Currency;
use caudena_client::messages::TokenPartyMessage;
use caudena_client::{CaudenaResult, TokenTransfer, Transaction, TransactionEntry};

use crate::configuration::{ConfigError, ConfigSource};
use crate::utils::{self, NOT_AVAILABLE, UNIDENTIFIED_ENTITY};
use crate::{
    CommandContext,
    commands::{SharedArgs, client_builder, currency_parameter},
};

const ENTRY_PREVIEW_LENGTH: usize = 3;
const TOKEN_PREVIEW_LENGTH: usize = 5;
const ADDRESS_PREVIEW_LENGTH: usize = 20;

/// Clap command to show a given transaction
#[derive(Parser, Debug, Clone)]
pub struct TransactionShowCommand {
    #[clap(flatten)]
    shared_args: SharedArgs,

    /// Hash of the transaction to show.
    hash: String,

    /// Blockchain of the transaction.
    #[clap(long)]
    currency: Option<Currency>,
}

impl TransactionShowCommand {
    /// Is JSON output enabled
    pub fn is_json_output_enabled(&self) -> bool {
        self.shared_args.json
    }

    /// Transaction Show command
    pub async fn execute(&self, context: CommandContext) -> CaudenaResult<()> {
        let params = context.config_parameters()?.add_source(self)?;
        let currency = currency_parameter(&params)?;
        let client = client_builder(&params)?
            .with_logger(context.logger().clone())
            .build()?;

        let transaction = client
            .transaction()
            .get(currency, &self.hash)
            .await
            .with_context(|| format!("Can not get the transaction of hash: '{}'", self.hash))?
            .ok_or_else(|| anyhow!("Transaction not found for hash: '{}'", self.hash))?;

        if self.is_json_output_enabled() {
            println!("{}", serde_json::to_string(&transaction)?);
        } else {
            println!("{}", transaction_report(&transaction)?);
        }

        Ok(())
    }
}

impl ConfigSource for TransactionShowCommand {
    fn collect(&self) -> Result<HashMap<String, String>, ConfigError> {
        let mut map = HashMap::new();

        if let Some(currency) = self.currency {
            map.insert("currency".to_string(), currency.to_string());
        }

        Ok(map)
    }
}

/// Build the full console report of a transaction.
fn transaction_report(transaction: &Transaction) -> CaudenaResult<String> {
    let mut sections = vec![overview_section(transaction)?];

    if !transaction.inputs.is_empty() {
        sections.push(entries_section("Inputs", &transaction.inputs)?);
    }
    if !transaction.outputs.is_empty() {
        sections.push(entries_section("Outputs", &transaction.outputs)?);
    }
    if !transaction.tokens.is_empty() {
        sections.push(tokens_section(&transaction.tokens)?);
    }
    sections.push(contract_analysis_section(transaction));

    Ok(sections.join("\n"))
}

fn overview_section(transaction: &Transaction) -> CaudenaResult<String> {
    let mut rows = vec![
        vec!["Hash".cell(), transaction.hash.clone().cell()],
        vec![
            "Status".cell(),
            if transaction.status {
                "Confirmed"
            } else {
                "Pending"
            }
            .cell(),
        ],
        vec![
            "Currency".cell(),
            transaction
                .currency
                .as_deref()
                .map(str::to_uppercase)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
                .cell(),
        ],
        vec![
            "Time".cell(),
            utils::format_timestamp(transaction.time).cell(),
        ],
        vec![
            "Block Height".cell(),
            transaction
                .height
                .map(|height| height.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
                .cell(),
        ],
        vec![
            "Confirmations".cell(),
            utils::format_count(transaction.confirmations.unwrap_or_default()).cell(),
        ],
        vec![
            "Amount".cell(),
            utils::format_optional_amount(transaction.amount).cell(),
        ],
        vec![
            "Amount (USD)".cell(),
            utils::format_usd(transaction.amount_usd.unwrap_or_default()).cell(),
        ],
        vec![
            "Fee".cell(),
            utils::format_optional_amount(transaction.fee).cell(),
        ],
        vec![
            "Fee (USD)".cell(),
            utils::format_usd(transaction.fee_usd.unwrap_or_default()).cell(),
        ],
    ];

    if transaction.has_gas_data() {
        rows.push(vec![
            "Gas".cell(),
            utils::format_optional_amount(transaction.gas).cell(),
        ]);
        rows.push(vec![
            "Gas Used".cell(),
            utils::format_optional_amount(transaction.gas_used).cell(),
        ]);
        rows.push(vec![
            "Gas Price".cell(),
            utils::format_optional_amount(transaction.gas_price).cell(),
        ]);
    }

    Ok(rows.table().display()?.to_string().trim_end().to_string())
}

fn entries_section(title: &str, entries: &[TransactionEntry]) -> CaudenaResult<String> {
    let table = entries
        .iter()
        .take(ENTRY_PREVIEW_LENGTH)
        .enumerate()
        .map(|(index, entry)| {
            vec![
                (index + 1).cell(),
                utils::truncate(
                    entry.address.as_deref().unwrap_or(NOT_AVAILABLE),
                    ADDRESS_PREVIEW_LENGTH,
                )
                .cell(),
                utils::format_optional_amount(entry.amount).cell(),
                utils::format_usd(entry.amount_usd.unwrap_or_default()).cell(),
                utils::format_optional_score(entry.score).cell(),
                entry.name.as_deref().unwrap_or(UNIDENTIFIED_ENTITY).cell(),
            ]
        })
        .collect::<Vec<_>>()
        .table()
        .title(vec![
            "#".cell(),
            "Address".cell(),
            "Amount".cell(),
            "Amount (USD)".cell(),
            "Score".cell(),
            "Entity".cell(),
        ]);

    let mut section = format!(
        "{title} ({}):\n{}",
        entries.len(),
        table.display()?.to_string().trim_end()
    );
    if entries.len() > ENTRY_PREVIEW_LENGTH {
        section.push_str(&format!(
            "\n... and {} more {}",
            entries.len() - ENTRY_PREVIEW_LENGTH,
            title.to_lowercase()
        ));
    }

    Ok(section)
}

fn tokens_section(tokens: &[TokenTransfer]) -> CaudenaResult<String> {
    let table = tokens
        .iter()
        .take(TOKEN_PREVIEW_LENGTH)
        .map(|token| {
            let info = token.token.as_ref();

            vec![
                info.and_then(|info| info.symbol.as_deref())
                    .unwrap_or(NOT_AVAILABLE)
                    .cell(),
                info.and_then(|info| info.name.as_deref())
                    .unwrap_or(NOT_AVAILABLE)
                    .cell(),
                utils::format_optional_amount(token.value).cell(),
                utils::format_usd(token.usd.unwrap_or_default()).cell(),
                token_party_label(token.sender.as_ref()).cell(),
                token_party_label(token.receiver.as_ref()).cell(),
                if info.is_some_and(|info| info.is_flagged()) {
                    "SCAM/SPAM!"
                } else {
                    ""
                }
                .cell(),
            ]
        })
        .collect::<Vec<_>>()
        .table()
        .title(vec![
            "Token".cell(),
            "Name".cell(),
            "Value".cell(),
            "Value (USD)".cell(),
            "From".cell(),
            "To".cell(),
            "Warning".cell(),
        ]);

    let mut section = format!(
        "Token Transfers ({}):\n{}",
        tokens.len(),
        table.display()?.to_string().trim_end()
    );
    if tokens.len() > TOKEN_PREVIEW_LENGTH {
        section.push_str(&format!(
            "\n... and {} more token transfers",
            tokens.len() - TOKEN_PREVIEW_LENGTH
        ));
    }

    Ok(section)
}

fn token_party_label(party: Option<&TokenPartyMessage>) -> String {
    let Some(party) = party else {
        return NOT_AVAILABLE.to_string();
    };
    let Some(address) = party.address.as_deref() else {
        return NOT_AVAILABLE.to_string();
    };

    format!(
        "{} (Score: {}, {})",
        utils::truncate(address, ADDRESS_PREVIEW_LENGTH),
        utils::format_optional_score(party.score),
        party
            .entity
            .as_ref()
            .and_then(|entity| entity.name.as_deref())
            .unwrap_or(UNIDENTIFIED_ENTITY),
    )
}

fn contract_analysis_section(transaction: &Transaction) -> String {
    let mut lines = vec!["Contract analysis:".to_string()];
    let mut suspicious_found = false;

    for (role, entries) in [
        ("input", &transaction.inputs),
        ("output", &transaction.outputs),
    ] {
        for entry in entries.iter().filter(|entry| entry.is_suspicious_contract()) {
            lines.push(format!(
                "  Suspicious contract ({role}): {}",
                entry.address.as_deref().unwrap_or(NOT_AVAILABLE)
            ));
            lines.push(format!(
                "    Score: {} | Entity: {}",
                utils::format_score_out_of_ten(entry.score),
                entry.name.as_deref().unwrap_or(UNIDENTIFIED_ENTITY)
            ));
            suspicious_found = true;
        }
    }

    if !suspicious_found {
        lines.push("  No suspicious contract detected".to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use httpmock::{Method::GET, MockServer};
    use slog::Logger;

    use caudena_client::messages::TokenInfoMessage;

    use super::*;

    fn entry(address: &str, score: Option<f64>, contract: bool) -> TransactionEntry {
        TransactionEntry {
            address: Some(address.to_string()),
            amount: Some(0.5),
            amount_usd: Some(32500.0),
            score,
            name: None,
            contract,
        }
    }

    fn utxo_transaction() -> Transaction {
        Transaction {
            hash: "a-hash".to_string(),
            status: true,
            currency: Some("btc".to_string()),
            time: Some(1718868300),
            height: Some(847503),
            confirmations: Some(12),
            amount: Some(1.2345),
            amount_usd: Some(80123.45),
            fee: Some(0.000215),
            fee_usd: Some(13.9),
            gas: None,
            gas_used: None,
            gas_price: None,
            inputs: vec![
                entry("input-address-1-aaaaaaaaaaaaaaaa", Some(8.7), false),
                entry("input-address-2", Some(7.0), false),
                entry("input-address-3", None, false),
                entry("input-address-4", Some(6.2), false),
                entry("input-address-5", Some(5.5), false),
            ],
            outputs: vec![entry("output-address-1", Some(9.1), false)],
            tokens: vec![],
        }
    }

    fn test_context(server_url: &str) -> CommandContext {
        let config_builder = config::Config::builder()
            .set_override("endpoint", server_url)
            .unwrap()
            .set_override("kid", "test-key-id")
            .unwrap()
            .set_override("secret", "dGVzdC1zZWNyZXQ=")
            .unwrap();

        CommandContext::new(config_builder, Logger::root(slog::Discard, slog::o!()))
    }

    #[test]
    fn report_previews_only_the_first_inputs() {
        let report = transaction_report(&utxo_transaction()).unwrap();

        assert!(report.contains("Inputs (5):"), "report was:\n{report}");
        assert!(
            report.contains("input-address-1-aaaa..."),
            "report was:\n{report}"
        );
        assert!(report.contains("... and 2 more inputs"), "report was:\n{report}");
        assert!(!report.contains("input-address-4"), "report was:\n{report}");
    }

    #[test]
    fn report_renders_the_overview_fields() {
        let report = transaction_report(&utxo_transaction()).unwrap();

        assert!(report.contains("Confirmed"), "report was:\n{report}");
        assert!(report.contains("BTC"), "report was:\n{report}");
        assert!(report.contains("2024-06-20 07:25:00 UTC"), "report was:\n{report}");
        assert!(report.contains("$80,123.45"), "report was:\n{report}");
    }

    #[test]
    fn report_skips_gas_rows_for_utxo_transactions() {
        let report = transaction_report(&utxo_transaction()).unwrap();

        assert!(!report.contains("Gas Price"), "report was:\n{report}");
    }

    #[test]
    fn report_renders_gas_rows_for_evm_transactions() {
        let transaction = Transaction {
            gas: Some(90000.0),
            gas_used: Some(48311.0),
            gas_price: Some(21645000000.0),
            ..utxo_transaction()
        };

        let report = transaction_report(&transaction).unwrap();

        assert!(report.contains("Gas Price"), "report was:\n{report}");
        assert!(report.contains("21,645,000,000"), "report was:\n{report}");
    }

    #[test]
    fn report_warns_about_flagged_tokens() {
        let transaction = Transaction {
            tokens: vec![TokenTransfer {
                token: Some(TokenInfoMessage {
                    symbol: Some("FAKE".to_string()),
                    name: Some("Fake Token".to_string()),
                    scam: true,
                    spam: false,
                }),
                value: Some(1000.0),
                usd: Some(0.0),
                sender: Some(TokenPartyMessage {
                    address: Some("0xsender-address-aaaaaaaaaaaaaaaa".to_string()),
                    score: Some(2.1),
                    entity: None,
                }),
                receiver: None,
            }],
            ..utxo_transaction()
        };

        let report = transaction_report(&transaction).unwrap();

        assert!(report.contains("Token Transfers (1):"), "report was:\n{report}");
        assert!(report.contains("SCAM/SPAM!"), "report was:\n{report}");
        assert!(
            report.contains("0xsender-address-aaa... (Score: 2.1, Unidentified)"),
            "report was:\n{report}"
        );
    }

    #[test]
    fn report_flags_suspicious_contracts() {
        let mut suspicious = entry("0xsuspicious-contract", Some(2.1), true);
        suspicious.name = Some("Suspicious Swapper".to_string());
        let transaction = Transaction {
            inputs: vec![suspicious],
            outputs: vec![entry("0xsafe-contract", Some(8.0), true)],
            ..utxo_transaction()
        };

        let report = transaction_report(&transaction).unwrap();

        assert!(
            report.contains("Suspicious contract (input): 0xsuspicious-contract"),
            "report was:\n{report}"
        );
        assert!(
            report.contains("Score: 2.1/10 | Entity: Suspicious Swapper"),
            "report was:\n{report}"
        );
        assert!(
            !report.contains("Suspicious contract (output)"),
            "report was:\n{report}"
        );
    }

    #[test]
    fn contract_analysis_section_renders_a_fixed_report() {
        let mut suspicious = entry("0xsuspicious-contract", Some(2.1), true);
        suspicious.name = Some("Suspicious Swapper".to_string());
        let transaction = Transaction {
            inputs: vec![suspicious],
            outputs: vec![],
            ..utxo_transaction()
        };

        assert_eq!(
            [
                "Contract analysis:",
                "  Suspicious contract (input): 0xsuspicious-contract",
                "    Score: 2.1/10 | Entity: Suspicious Swapper",
            ]
            .join("\n"),
            contract_analysis_section(&transaction)
        );
    }

    #[test]
    fn report_mentions_when_no_suspicious_contract_was_detected() {
        let report = transaction_report(&utxo_transaction()).unwrap();

        assert!(
            report.contains("No suspicious contract detected"),
            "report was:\n{report}"
        );
    }

    #[tokio::test]
    async fn show_command_fetches_the_transaction_from_the_configured_endpoint() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/v2/btc/transaction/a-hash");
            then.status(200).json_body(serde_json::json!({
                "status": true,
                "data": {"hash": "a-hash", "status": true, "currency": "btc"}
            }));
        });
        let command = TransactionShowCommand {
            shared_args: SharedArgs { json: true },
            hash: "a-hash".to_string(),
            currency: Some(Currency::Btc),
        };

        command
            .execute(test_context(&server.url("")))
            .await
            .expect("the command should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn show_command_fails_when_the_transaction_is_unknown() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(404);
        });
        let command = TransactionShowCommand {
            shared_args: SharedArgs { json: true },
            hash: "missing-hash".to_string(),
            currency: Some(Currency::Btc),
        };

        let error = command
            .execute(test_context(&server.url("")))
            .await
            .expect_err("the command should fail when nothing is found");

        assert!(
            error
                .to_string()
                .contains("Transaction not found for hash: 'missing-hash'"),
            "unexpected error message: {error}"
        );
    }
}
