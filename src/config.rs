use crate::accounts::AccountList;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::SettingsError;
use crate::models::Account;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = "tmc-cli";
pub const ACCOUNTS_FILE: &str = "accounts.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) { Platform::Windows } else { Platform::Unix }
    }
}

/// Config directory for the given platform and environment. Does no I/O.
///
/// Windows gets `<home>/tmc-cli`; everything else follows XDG, falling back
/// to `<home>/.config/tmc-cli` when `XDG_CONFIG_HOME` is unset or empty.
pub fn config_dir_for(platform: Platform, xdg_config_home: Option<&str>, home: &Path) -> PathBuf {
    let base = match platform {
        Platform::Windows => home.to_path_buf(),
        Platform::Unix => match xdg_config_home {
            Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
            _ => home.join(".config"),
        },
    };
    base.join(CONFIG_DIR)
}

pub fn dirs_home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

pub fn default_config_dir() -> PathBuf {
    let xdg = std::env::var("XDG_CONFIG_HOME").ok();
    config_dir_for(Platform::current(), xdg.as_deref(), &dirs_home())
}

#[derive(Debug, Clone, Default)]
pub struct IoConfig {
    /// Replaces the resolved base directory; `tmc-cli/` is still appended.
    pub root_override: Option<PathBuf>,
}

/// Reads and writes the accounts file.
///
/// Expected failures (missing or corrupt file, I/O errors) never reach the
/// caller as errors: they are reported to the injected [`Diagnostics`] and
/// surface as `None` or `false`.
pub struct SettingsIo<D: Diagnostics = TracingDiagnostics> {
    config: IoConfig,
    diagnostics: D,
}

impl SettingsIo<TracingDiagnostics> {
    pub fn with_defaults() -> Self {
        Self::new(IoConfig::default(), TracingDiagnostics)
    }
}

impl<D: Diagnostics> SettingsIo<D> {
    pub fn new(config: IoConfig, diagnostics: D) -> Self {
        Self { config, diagnostics }
    }

    pub fn config_dir(&self) -> PathBuf {
        match &self.config.root_override {
            Some(root) => root.join(CONFIG_DIR),
            None => default_config_dir(),
        }
    }

    pub fn accounts_file(&self) -> PathBuf {
        self.config_dir().join(ACCOUNTS_FILE)
    }

    /// Load saved accounts. `None` when the file is missing or unreadable.
    ///
    /// A successfully parsed file is written back immediately, so every
    /// load leaves the file in the current on-disk format.
    pub fn load(&self) -> Option<AccountList> {
        match self.try_load() {
            Ok(list) => list,
            Err(e) => {
                self.report_load_error(&e);
                None
            }
        }
    }

    /// Like [`load`](Self::load), but keeps a missing file (`Ok(None)`)
    /// apart from one that cannot be read or parsed (`Err`). Errors are
    /// returned, not reported.
    pub fn try_load(&self) -> Result<Option<AccountList>, SettingsError> {
        let path = self.accounts_file();
        if !path.exists() {
            self.diagnostics
                .debug(&format!("no accounts file at {}", path.display()));
            return Ok(None);
        }
        let list = read_accounts(&path)?;
        self.save(&list);
        Ok(Some(list))
    }

    /// Write `list` to the accounts file, creating the config dir if needed.
    pub fn save(&self, list: &AccountList) -> bool {
        match self.try_save(list) {
            Ok(path) => {
                self.diagnostics.debug(&format!(
                    "saved {} account(s) to {}",
                    list.count(),
                    path.display()
                ));
                true
            }
            Err(e) => {
                self.diagnostics.error(&e.to_string());
                false
            }
        }
    }

    /// Remove the accounts file. A file that is already gone counts as success.
    pub fn delete(&self) -> bool {
        let path = self.accounts_file();
        match std::fs::remove_file(&path) {
            Ok(()) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => true,
            Err(source) => {
                self.diagnostics
                    .error(&SettingsError::Remove { path, source }.to_string());
                false
            }
        }
    }

    /// Add `account` as the most recent entry of the saved list and persist it.
    ///
    /// Refuses to write over a file that exists but cannot be loaded.
    pub fn remember(&self, account: Account) -> bool {
        let mut list = match self.try_load() {
            Ok(list) => list.unwrap_or_default(),
            Err(e) => {
                self.report_load_error(&e);
                return false;
            }
        };
        list.add_or_update(account);
        self.save(&list)
    }

    fn report_load_error(&self, e: &SettingsError) {
        match e {
            SettingsError::Parse { .. } => self
                .diagnostics
                .warn(&format!("{e}; leaving the file in place")),
            _ => self.diagnostics.error(&e.to_string()),
        }
    }

    fn try_save(&self, list: &AccountList) -> Result<PathBuf, SettingsError> {
        let dir = self.config_dir();
        std::fs::create_dir_all(&dir).map_err(|source| SettingsError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        let path = dir.join(ACCOUNTS_FILE);
        let content = serde_json::to_string_pretty(list)? + "\n";
        std::fs::write(&path, content).map_err(|source| SettingsError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

fn read_accounts(path: &Path) -> Result<AccountList, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
