//! Commands for the address lookups
mod show;
mod transactions;

pub use show::*;
pub use transactions::*;

use clap::Subcommand;

use caudena_client::CaudenaResult;

use crate::CommandContext;

/// Address lookups (alias: addr)
#[derive(Subcommand, Debug, Clone)]
#[command(about = "Address lookups (alias: addr)")]
pub enum AddressCommands {
    /// Show the statistics and latest transactions of an address
    #[clap(arg_required_else_help = true)]
    Show(AddressShowCommand),

    /// List the transactions of an address, page by page
    #[clap(arg_required_else_help = true)]
    Transactions(AddressTransactionsCommand),
}

impl AddressCommands {
    /// Execute address command
    pub async fn execute(&self, context: CommandContext) -> CaudenaResult<()> {
        match self {
            Self::Show(cmd) => cmd.execute(context).await,
            Self::Transactions(cmd) => cmd.execute(context).await,
        }
    }
}
