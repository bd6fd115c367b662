//! Saved-account storage for the `tmc` command-line client.
//!
//! [`accounts::AccountList`] keeps credentials ordered by recency and
//! [`config::SettingsIo`] persists it as `accounts.json` in the user's
//! config directory.

pub mod accounts;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod models;
