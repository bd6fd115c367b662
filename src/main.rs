mod cli;
mod commands;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    use std::io::IsTerminal;

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("TMC_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Login { server, username, password, organization } => {
            commands::login::cmd_login(server, username, password, organization);
        }
        Commands::Use { username, server } => commands::use_cmd::cmd_use(&username, &server),
        Commands::Organization { organization } => {
            commands::organization::cmd_organization(organization);
        }
        Commands::Accounts => commands::accounts::cmd_accounts(),
        Commands::Logout => commands::logout::cmd_logout(),
        Commands::Completions { shell } => commands::completions::cmd_completions(shell),
    }
}
