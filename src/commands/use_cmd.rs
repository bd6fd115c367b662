use crate::ui::{die, print_ok};
use tmc_cli::config::SettingsIo;

pub fn cmd_use(username: &str, server: &str) {
    let io = SettingsIo::with_defaults();
    let mut list = io
        .load()
        .unwrap_or_else(|| die("No saved accounts. Run: tmc login", 2));

    let label = match list.find(Some(username), Some(server)) {
        Some(acc) => acc.label(),
        None => die(
            &format!("Account '{username}@{server}' not found. Run: tmc accounts"),
            2,
        ),
    };
    if !io.save(&list) {
        die(&format!("Failed to save {}", io.accounts_file().display()), 1);
    }
    print_ok(&format!("Now using {label}"));
}
