use serde::{Deserialize, Serialize};

/// One saved account: the credentials used against a single TMC server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub server_address: String,
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

/// Identity of an account. Two entries are the same account iff both
/// fields match exactly (case-sensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountKey<'a> {
    pub username: &'a str,
    pub server_address: &'a str,
}

impl Account {
    pub fn new(
        server_address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            server_address: server_address.into(),
            username: username.into(),
            password: password.into(),
            organization: None,
        }
    }

    pub fn with_organization(mut self, slug: impl Into<String>) -> Self {
        self.organization = Some(slug.into());
        self
    }

    pub fn key(&self) -> AccountKey<'_> {
        AccountKey {
            username: &self.username,
            server_address: &self.server_address,
        }
    }

    pub fn is_same_account(&self, other: &Account) -> bool {
        self.key() == other.key()
    }

    /// `username@server`, used in user-facing messages.
    pub fn label(&self) -> String {
        format!("{}@{}", self.username, self.server_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_account_ignores_password_and_organization() {
        let a = Account::new("https://tmc.mooc.fi", "alice", "one");
        let b = Account::new("https://tmc.mooc.fi", "alice", "two").with_organization("hy");
        assert!(a.is_same_account(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn key_comparison_is_case_sensitive() {
        let a = Account::new("https://tmc.mooc.fi", "alice", "pw");
        let b = Account::new("https://tmc.mooc.fi", "Alice", "pw");
        assert!(!a.is_same_account(&b));
    }

    #[test]
    fn serializes_with_camel_case_fields_and_omits_missing_organization() {
        let json = serde_json::to_value(Account::new("srv", "bob", "pw")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"serverAddress": "srv", "username": "bob", "password": "pw"})
        );
    }

    #[test]
    fn null_organization_reads_as_none() {
        let acc: Account = serde_json::from_str(
            r#"{"serverAddress":"srv","username":"bob","password":"pw","organization":null}"#,
        )
        .unwrap();
        assert_eq!(acc.organization, None);
    }
}
