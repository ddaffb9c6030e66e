//! Per-identity account record, the single persisted document per user.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::models::{PaymentCard, Receipt, Reservation, Ride};

/// Everything stored for one user identity.
///
/// Persisted as one JSON document with whole-record read/replace
/// semantics. Collection fields default so records written by older
/// revisions still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque identity key from the auth provider (also the document key)
    pub user_id: String,
    /// Display name from the provider, editable on the profile page
    pub display_name: String,
    /// Email address
    pub email: String,
    /// Phone number; a fallback is filled in when the provider has none
    pub phone: String,
    /// Signed balance in minor units; rides debit it
    #[serde(default)]
    pub balance: i64,
    /// Payment cards, most recent first
    #[serde(default)]
    pub cards: Vec<PaymentCard>,
    /// Active rental; at most one at a time
    #[serde(default)]
    pub current_ride: Option<Ride>,
    /// Future reservations, most recent first
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    /// Completed ride receipts, most recent first
    #[serde(default)]
    pub history: Vec<Receipt>,
}

impl Account {
    /// Fresh account for a first sign-in.
    pub fn new(user: &AuthUser, fallback_phone: &str) -> Self {
        Self {
            user_id: user.id.clone(),
            display_name: user.display_name.clone(),
            email: user.email.clone(),
            phone: user
                .phone
                .clone()
                .unwrap_or_else(|| fallback_phone.to_string()),
            balance: 0,
            cards: Vec::new(),
            current_ride: None,
            reservations: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn has_active_ride(&self) -> bool {
        self.current_ride.is_some()
    }

    pub fn reservation(&self, id: Uuid) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    pub fn reservation_mut(&mut self, id: Uuid) -> Option<&mut Reservation> {
        self.reservations.iter_mut().find(|r| r.id == id)
    }

    /// Remove and return the reservation with `id`, if present.
    pub fn take_reservation(&mut self, id: Uuid) -> Option<Reservation> {
        let index = self.reservations.iter().position(|r| r.id == id)?;
        Some(self.reservations.remove(index))
    }
}
