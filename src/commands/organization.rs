use crate::commands::login::CORRUPT_HINT;
use crate::ui::{die, print_ok, prompt_label};
use dialoguer::Input;
use tmc_cli::config::SettingsIo;

/// Slugs are matched trimmed and lowercase.
pub fn normalize_slug(slug: &str) -> String {
    slug.trim().to_lowercase()
}

pub fn cmd_organization(organization: Option<String>) {
    let io = SettingsIo::with_defaults();
    let mut list = match io.try_load() {
        Ok(Some(list)) => list,
        Ok(None) => die("Not logged in. Run: tmc login", 2),
        Err(e) => die(&format!("{e}\n  {CORRUPT_HINT}"), 1),
    };
    let mut account = list
        .find(None, None)
        .cloned()
        .unwrap_or_else(|| die("Not logged in. Run: tmc login", 2));

    let slug = organization.unwrap_or_else(|| {
        Input::<String>::new()
            .with_prompt(prompt_label("Choose an organization by writing its slug"))
            .interact_text()
            .unwrap_or_else(|_| die("\nAborted.", 2))
    });
    let slug = normalize_slug(&slug);
    if slug.is_empty() {
        die("Organization slug must not be empty.", 2);
    }

    account.organization = Some(slug.clone());
    let label = account.label();
    list.add_or_update(account);
    if !io.save(&list) {
        die(&format!("Failed to save {}", io.accounts_file().display()), 1);
    }
    print_ok(&format!("Organization '{slug}' pinned for {label}"));
}
