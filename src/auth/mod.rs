// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Identity provider seam.
//!
//! Sign-in itself happens in the embedding environment (popup flow with a
//! third-party provider); the engine only needs to know who is currently
//! signed in. `StaticAuthProvider` is the in-crate implementation used by
//! tests and demos.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{AppError, Result};

/// Profile of the signed-in user as reported by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    /// Opaque stable identity key
    pub id: String,
    pub display_name: String,
    pub email: String,
    /// Not every provider shares a phone number
    pub phone: Option<String>,
}

/// Identity provider interface.
pub trait AuthProvider: Send + Sync {
    /// The signed-in user, or `None` when signed out.
    fn current_user(&self) -> Option<AuthUser>;

    /// Run the provider's sign-in flow.
    fn sign_in(&self) -> Result<AuthUser>;

    /// Sign the current user out.
    fn sign_out(&self);
}

/// Provider with a fixed user, toggled signed-in/out. For tests and demos.
#[derive(Debug)]
pub struct StaticAuthProvider {
    user: AuthUser,
    signed_in: AtomicBool,
}

impl StaticAuthProvider {
    /// Create signed out; call `sign_in` to establish the session.
    pub fn new(user: AuthUser) -> Self {
        Self {
            user,
            signed_in: AtomicBool::new(false),
        }
    }

    /// Create already signed in.
    pub fn signed_in(user: AuthUser) -> Self {
        Self {
            user,
            signed_in: AtomicBool::new(true),
        }
    }
}

impl AuthProvider for StaticAuthProvider {
    fn current_user(&self) -> Option<AuthUser> {
        if self.signed_in.load(Ordering::SeqCst) {
            Some(self.user.clone())
        } else {
            None
        }
    }

    fn sign_in(&self) -> Result<AuthUser> {
        self.signed_in.store(true, Ordering::SeqCst);
        tracing::info!(user = %self.user.id, "Signed in");
        Ok(self.user.clone())
    }

    fn sign_out(&self) {
        self.signed_in.store(false, Ordering::SeqCst);
        tracing::info!(user = %self.user.id, "Signed out");
    }
}

/// Resolve the current user or fail with the sign-in guard error.
pub fn require_user(auth: &dyn AuthProvider) -> Result<AuthUser> {
    auth.current_user().ok_or(AppError::NotSignedIn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AuthUser {
        AuthUser {
            id: "uid-1".to_string(),
            display_name: "Test Testesen".to_string(),
            email: "test@example.com".to_string(),
            phone: None,
        }
    }

    #[test]
    fn test_sign_in_out_cycle() {
        let provider = StaticAuthProvider::new(user());
        assert!(provider.current_user().is_none());

        provider.sign_in().unwrap();
        assert_eq!(provider.current_user().unwrap().id, "uid-1");

        provider.sign_out();
        assert!(provider.current_user().is_none());
    }

    #[test]
    fn test_require_user_guards_signed_out() {
        let provider = StaticAuthProvider::new(user());
        let err = require_user(&provider).unwrap_err();
        assert!(matches!(err, AppError::NotSignedIn));
    }
}
