use crate::models::Account;
use serde::{Deserialize, Serialize};

/// Saved accounts ordered by recency: index 0 is the most recently used.
///
/// Holds at most one entry per `(username, server_address)`. Lists are
/// expected to stay small, so lookups are a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountList {
    accounts: Vec<Account>,
}

impl AccountList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `account` at the front, dropping any older entry for the same key.
    pub fn add_or_update(&mut self, account: Account) {
        self.accounts.retain(|a| !a.is_same_account(&account));
        self.accounts.insert(0, account);
    }

    /// Look up an account.
    ///
    /// With neither argument, returns the most recent entry without reordering.
    /// With both, returns the matching entry after moving it to the front.
    /// Any other combination finds nothing.
    pub fn find(&mut self, username: Option<&str>, server: Option<&str>) -> Option<&Account> {
        match (username, server) {
            (None, None) => self.accounts.first(),
            (Some(username), Some(server)) => {
                let idx = self
                    .accounts
                    .iter()
                    .position(|a| a.username == username && a.server_address == server)?;
                let account = self.accounts.remove(idx);
                self.accounts.insert(0, account);
                self.accounts.first()
            }
            _ => None,
        }
    }

    pub fn count(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acc(server: &str, user: &str, pass: &str) -> Account {
        Account::new(server, user, pass)
    }

    #[test]
    fn new_list_is_empty() {
        let mut list = AccountList::new();
        assert_eq!(list.count(), 0);
        assert!(list.find(None, None).is_none());
    }

    #[test]
    fn first_add_becomes_most_recent() {
        let mut list = AccountList::new();
        list.add_or_update(acc("x", "a", "1"));
        assert_eq!(list.count(), 1);
        assert_eq!(list.find(None, None), Some(&acc("x", "a", "1")));
    }

    #[test]
    fn distinct_accounts_each_increase_count_and_stay_reachable() {
        let mut list = AccountList::new();
        list.add_or_update(acc("testserver", "testuser", "testpassword"));
        list.add_or_update(acc("1", "2", "e"));
        list.add_or_update(acc(":", "-", "D"));
        assert_eq!(list.count(), 3);
        assert_eq!(list.find(Some("testuser"), Some("testserver")).unwrap().password, "testpassword");
        assert_eq!(list.find(Some("2"), Some("1")).unwrap().password, "e");
        assert_eq!(list.find(Some("-"), Some(":")).unwrap().password, "D");
        assert_eq!(list.count(), 3);
    }

    #[test]
    fn readding_same_key_replaces_and_promotes() {
        let mut list = AccountList::new();
        list.add_or_update(acc("x", "a", "old"));
        list.add_or_update(acc("y", "b", "pw"));
        list.add_or_update(acc("x", "a", "new"));

        assert_eq!(list.count(), 2);
        let servers: Vec<_> = list.iter().map(|a| a.server_address.as_str()).collect();
        assert_eq!(servers, ["x", "y"]);
        assert_eq!(list.find(None, None).unwrap().password, "new");
    }

    #[test]
    fn most_recent_lookup_does_not_reorder() {
        let mut list = AccountList::new();
        list.add_or_update(acc("1", "2", "e"));
        list.add_or_update(acc(":", "-", "D"));
        let before = list.clone();
        assert_eq!(list.find(None, None).unwrap().username, "-");
        assert_eq!(list, before);
    }

    #[test]
    fn keyed_lookup_promotes_to_front() {
        let mut list = AccountList::new();
        list.add_or_update(acc("s1", "e1", "p"));
        list.add_or_update(acc("s2", "e2", "p"));
        list.add_or_update(acc("s3", "e3", "p"));

        assert_eq!(list.find(Some("e1"), Some("s1")).unwrap().username, "e1");
        assert_eq!(list.find(None, None).unwrap().username, "e1");
        let order: Vec<_> = list.iter().map(|a| a.username.as_str()).collect();
        assert_eq!(order, ["e1", "e3", "e2"]);
        assert_eq!(list.count(), 3);
    }

    #[test]
    fn unknown_key_leaves_list_untouched() {
        let mut list = AccountList::new();
        list.add_or_update(acc("s1", "e1", "p"));
        list.add_or_update(acc("s2", "e2", "p"));
        let before = list.clone();

        assert!(list.find(Some("e1"), Some("s2")).is_none());
        assert!(list.find(Some("E1"), Some("s1")).is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn partial_key_finds_nothing() {
        let mut list = AccountList::new();
        list.add_or_update(acc("s1", "e1", "p"));
        list.add_or_update(acc("s2", "e2", "p"));
        let before = list.clone();

        assert!(list.find(Some("e1"), None).is_none());
        assert!(list.find(None, Some("s1")).is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn serializes_as_plain_array_in_recency_order() {
        let mut list = AccountList::new();
        list.add_or_update(acc("x", "a", "1"));
        list.add_or_update(acc("y", "b", "2"));
        let json = serde_json::to_value(&list).unwrap();
        let arr = json.as_array().expect("array");
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["username"], "b");
        assert_eq!(arr[1]["username"], "a");
    }
}
