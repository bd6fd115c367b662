use crate::commands::organization::normalize_slug;
use crate::ui::{die, print_ok, prompt_label};
use dialoguer::{Input, Password};
use tmc_cli::config::SettingsIo;
use tmc_cli::models::Account;

pub const DEFAULT_SERVER: &str = "https://tmc.mooc.fi";
pub const CORRUPT_HINT: &str = "Fix the file by hand or run: tmc logout";

pub fn cmd_login(
    server: Option<String>,
    username: Option<String>,
    password: Option<String>,
    organization: Option<String>,
) {
    let server = server.unwrap_or_else(|| prompt("Server address", Some(DEFAULT_SERVER)));
    let username = username.unwrap_or_else(|| prompt("Username", None));
    if server.trim().is_empty() || username.trim().is_empty() {
        die("Server address and username must not be empty.", 2);
    }
    let password = password.unwrap_or_else(|| {
        Password::new()
            .with_prompt(prompt_label("Password"))
            .interact()
            .unwrap_or_else(|_| die("\nAborted.", 2))
    });

    let io = SettingsIo::with_defaults();
    let mut list = match io.try_load() {
        Ok(list) => list.unwrap_or_default(),
        Err(e) => die(&format!("{e}\n  {CORRUPT_HINT}"), 1),
    };
    let mut account = Account::new(server.trim(), username.trim(), password);
    account.organization = match organization {
        Some(slug) => Some(normalize_slug(&slug)),
        // Keep the pinned organization of a returning account.
        None => list
            .find(Some(account.username.as_str()), Some(account.server_address.as_str()))
            .and_then(|a| a.organization.clone()),
    };
    let label = account.label();
    tracing::info!("remembering account {label}");
    list.add_or_update(account);

    if !io.save(&list) {
        die(&format!("Failed to save {}", io.accounts_file().display()), 1);
    }
    print_ok(&format!("Logged in as {label}"));
}

fn prompt(label: &str, default: Option<&str>) -> String {
    let mut input = Input::<String>::new().with_prompt(prompt_label(label));
    if let Some(d) = default {
        input = input.default(d.to_string());
    }
    input.interact_text().unwrap_or_else(|_| die("\nAborted.", 2))
}
