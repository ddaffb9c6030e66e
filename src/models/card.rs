// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Stored payment cards and their rendering snapshots.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, Result};

/// Payment card stored on the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentCard {
    /// Name on the card
    pub holder_name: String,
    /// Full card number (digits only)
    pub number: String,
    /// Expiry month (1-12)
    pub expire_month: u32,
    /// Expiry year, two or four digits as entered
    pub expire_year: u32,
    /// Security code
    pub cvv: String,
    /// Card scheme, picked by the user
    pub kind: CardKind,
}

impl PaymentCard {
    /// Last four digits of the card number.
    pub fn last4(&self) -> &str {
        let len = self.number.len();
        &self.number[len.saturating_sub(4)..]
    }

    /// Expiry display, e.g. "5/24".
    pub fn expiry_display(&self) -> String {
        format!("{}/{}", self.expire_month, self.expire_year)
    }

    /// Snapshot for rendering; the full number never leaves the account.
    pub fn snapshot(&self) -> CardSnapshot {
        CardSnapshot {
            last4: self.last4().to_string(),
            masked: format!("**** **** **** {}", self.last4()),
            expiry: self.expiry_display(),
            kind: self.kind,
        }
    }
}

/// Card scheme options offered by the add-card form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Visa,
    Mastercard,
    Other,
}

/// Form input for adding a card.
#[derive(Debug, Clone, Validate, Deserialize)]
pub struct CardInput {
    #[validate(length(min = 1, message = "card holder name is required"))]
    pub holder_name: String,
    #[validate(custom(function = validate_card_number))]
    pub number: String,
    #[validate(range(min = 1, max = 12, message = "expiry month must be 1-12"))]
    pub expire_month: u32,
    #[validate(range(min = 1, message = "expiry year is required"))]
    pub expire_year: u32,
    #[validate(custom(function = validate_cvv))]
    pub cvv: String,
    pub kind: CardKind,
}

impl CardInput {
    /// Validate the form and convert into a stored card.
    pub fn into_card(self) -> Result<PaymentCard> {
        self.validate()
            .map_err(|e| AppError::Validation(flatten_validation_errors(&e)))?;

        Ok(PaymentCard {
            holder_name: self.holder_name,
            number: self.number,
            expire_month: self.expire_month,
            expire_year: self.expire_year,
            cvv: self.cvv,
            kind: self.kind,
        })
    }
}

fn validate_card_number(number: &str) -> std::result::Result<(), validator::ValidationError> {
    let digits_only = number.chars().all(|c| c.is_ascii_digit());
    if !digits_only || !(12..=19).contains(&number.len()) {
        return Err(validator::ValidationError::new("card_number")
            .with_message("card number must be 12-19 digits".into()));
    }
    Ok(())
}

fn validate_cvv(cvv: &str) -> std::result::Result<(), validator::ValidationError> {
    let digits_only = cvv.chars().all(|c| c.is_ascii_digit());
    if !digits_only || !(3..=4).contains(&cvv.len()) {
        return Err(
            validator::ValidationError::new("cvv").with_message("cvv must be 3-4 digits".into())
        );
    }
    Ok(())
}

/// Collapse field errors into one user-facing message.
fn flatten_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid {}", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

/// Masked card for rendering in card lists and the top-up dialog.
#[derive(Debug, Clone, Serialize)]
pub struct CardSnapshot {
    pub last4: String,
    pub masked: String,
    pub expiry: String,
    pub kind: CardKind,
}
