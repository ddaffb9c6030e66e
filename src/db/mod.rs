//! Persistence layer (per-tab session store).

pub mod session;

pub use session::SessionStore;

use crate::error::Result;
use crate::models::Account;

/// Whole-record account storage, one JSON document per user identity.
///
/// This is the seam towards the embedding environment's storage; the
/// engine only ever reads or replaces a complete record.
pub trait AccountStore: Send + Sync {
    /// Fetch the account for `user_id`. A missing or unreadable record is
    /// `None`.
    fn get(&self, user_id: &str) -> Result<Option<Account>>;

    /// Store (create or replace) the account for `user_id`.
    fn put(&self, user_id: &str, account: &Account) -> Result<()>;
}
