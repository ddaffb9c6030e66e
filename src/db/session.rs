// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory account store with session-storage semantics.
//!
//! Records live for the lifetime of the process and are keyed by the
//! user's identity. Values are stored as serialized JSON documents, so a
//! round-trip through this store exercises the same serialization path a
//! browser session-storage adapter would.

use dashmap::DashMap;

use crate::db::AccountStore;
use crate::error::{AppError, Result};
use crate::models::Account;

/// Process-lifetime account store backed by a concurrent map of JSON
/// documents.
#[derive(Debug, Default)]
pub struct SessionStore {
    records: DashMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw document, bypassing serialization. Lets tests seed
    /// corrupted records.
    pub fn put_raw(&self, user_id: &str, raw: &str) {
        self.records.insert(user_id.to_string(), raw.to_string());
    }
}

impl AccountStore for SessionStore {
    fn get(&self, user_id: &str) -> Result<Option<Account>> {
        let Some(raw) = self.records.get(user_id) else {
            return Ok(None);
        };

        match serde_json::from_str(raw.value()) {
            Ok(account) => Ok(Some(account)),
            Err(e) => {
                // A record that fails to parse is treated as absent; the
                // caller re-initializes a fresh account.
                tracing::warn!(user = %user_id, error = %e, "Corrupted account record, ignoring");
                Ok(None)
            }
        }
    }

    fn put(&self, user_id: &str, account: &Account) -> Result<()> {
        let raw = serde_json::to_string(account)
            .map_err(|e| AppError::Storage(format!("Failed to serialize account: {}", e)))?;
        self.records.insert(user_id.to_string(), raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthUser;

    fn account() -> Account {
        Account::new(
            &AuthUser {
                id: "uid-1".to_string(),
                display_name: "Test Testesen".to_string(),
                email: "test@example.com".to_string(),
                phone: None,
            },
            "12345678",
        )
    }

    #[test]
    fn test_get_missing_record() {
        let store = SessionStore::new();
        assert!(store.get("uid-1").unwrap().is_none());
    }

    #[test]
    fn test_put_then_get_round_trips() {
        let store = SessionStore::new();
        let account = account();

        store.put("uid-1", &account).unwrap();
        let loaded = store.get("uid-1").unwrap().expect("record should exist");

        assert_eq!(loaded, account);
    }

    #[test]
    fn test_corrupted_record_reads_as_none() {
        let store = SessionStore::new();
        store.put_raw("uid-1", "{not valid json");

        assert!(store.get("uid-1").unwrap().is_none());
    }
}
