//! Commands for the transaction lookups
mod show;

pub use show::*;

use clap::Subcommand;

use caudena_client::CaudenaResult;

use crate::CommandContext;

/// Transaction lookups (alias: tx)
#[derive(Subcommand, Debug, Clone)]
#[command(about = "Transaction lookups (alias: tx)")]
pub enum TransactionCommands {
    /// Show the details and risk annotations of a transaction
    #[clap(arg_required_else_help = true)]
    Show(TransactionShowCommand),
}

impl TransactionCommands {
    /// Execute transaction command
    pub async fn execute(&self, context: CommandContext) -> CaudenaResult<()> {
        match self {
            Self::Show(cmd) => cmd.execute(context).await,
        }
    }
}
