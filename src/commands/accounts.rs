use crate::ui::{Style, paint, print_info};
use tmc_cli::config::SettingsIo;

pub fn cmd_accounts() {
    let io = SettingsIo::with_defaults();
    let list = io.load().unwrap_or_default();

    if list.is_empty() {
        print_info("No saved accounts. Run: tmc login");
        print_info(&format!("Accounts file: {}", io.accounts_file().display()));
        return;
    }

    println!(
        "\n{}",
        paint(Style::Bold, &format!("Saved accounts  ({} total)", list.count()))
    );
    for (i, acc) in list.iter().enumerate() {
        let tag = if i == 0 {
            format!("  {}", paint(Style::Success, "[current]"))
        } else {
            String::new()
        };
        let org = match acc.organization.as_deref() {
            Some(slug) => slug.to_string(),
            None => paint(Style::Dim, "(none)"),
        };
        println!(
            "\n  {}  {}{}\n    organization : {}",
            paint(Style::Bold, &acc.username),
            paint(Style::Dim, &acc.server_address),
            tag,
            org
        );
    }
    println!();
}
