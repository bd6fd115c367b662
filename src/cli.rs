use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "tmc",
    version,
    about = "Submit TestMyCode exercises and manage saved accounts."
)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Save credentials and make them the current account
    Login {
        /// Server address, e.g. https://tmc.mooc.fi
        #[arg(long, short = 's')]
        server: Option<String>,
        /// Username on that server
        #[arg(long, short = 'u')]
        username: Option<String>,
        /// Password (prompted when omitted)
        #[arg(long, short = 'p')]
        password: Option<String>,
        /// Organization slug to pin
        #[arg(long, short = 'o')]
        organization: Option<String>,
    },
    /// Switch to a previously saved account
    Use {
        /// Username of the saved account
        #[arg(long, short = 'u')]
        username: String,
        /// Server address of the saved account
        #[arg(long, short = 's')]
        server: String,
    },
    /// Pin an organization on the current account
    Organization {
        /// Organization slug (prompted when omitted)
        #[arg(long, short = 'o')]
        organization: Option<String>,
    },
    /// List saved accounts, most recent first
    Accounts,
    /// Forget all saved credentials
    Logout,
    /// Print a shell completion script
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Build the clap `Command` (used for shell completions).
pub fn build_command() -> clap::Command {
    Cli::command()
}
