use crate::ui::{die, print_ok};
use tmc_cli::config::SettingsIo;

pub fn cmd_logout() {
    let io = SettingsIo::with_defaults();
    if !io.delete() {
        die(&format!("Failed to remove {}", io.accounts_file().display()), 1);
    }
    print_ok("Saved credentials removed.");
}
