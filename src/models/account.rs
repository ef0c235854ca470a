//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: the persisted row, also the wire representation
//! - `NewAccount`: request body for creating accounts
//! - `AccountUpdate`: request body for replacing an account's mutable fields
//! - `MessageResponse`: plain confirmation payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Column limit for `first_name` and `last_name`.
pub const MAX_NAME_LEN: usize = 50;

/// Represents an account record from the `account` table.
///
/// Serialized with camelCase keys:
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "firstName": "Ann",
///   "lastName": "Lee",
///   "number": 1000042,
///   "balance": 0,
///   "createdAt": "2025-12-20T10:00:00Z",
///   "updatedAt": "2025-12-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Server-generated, never reused
    pub id: Uuid,

    pub first_name: String,

    pub last_name: Option<String>,

    /// Account number, drawn from `account_number_seq`
    pub number: i64,

    /// Balance in minor units (cents). Never negative.
    pub balance: i64,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Request body for `POST /account`.
///
/// `firstName` is required and must contain a non-whitespace character;
/// `lastName` may be omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub first_name: String,

    #[serde(default)]
    pub last_name: Option<String>,
}

impl NewAccount {
    pub fn new(first_name: impl Into<String>, last_name: Option<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_names(&self.first_name, self.last_name.as_deref())
    }
}

/// Request body for `PUT /account/{id}`.
///
/// Every mutable field is replaced; there is no partial patch. Fields the
/// server owns (`id`, `number`, `createdAt`, `updatedAt`) are ignored if a
/// client sends a full account back. Account numbers are only ever assigned
/// by `account_number_seq`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    pub first_name: String,

    #[serde(default)]
    pub last_name: Option<String>,

    pub balance: i64,
}

impl AccountUpdate {
    pub fn validate(&self) -> AppResult<()> {
        validate_names(&self.first_name, self.last_name.as_deref())?;
        if self.balance < 0 {
            return Err(AppError::Validation(
                "balance must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<Account> for AccountUpdate {
    fn from(account: Account) -> Self {
        Self {
            first_name: account.first_name,
            last_name: account.last_name,
            balance: account.balance,
        }
    }
}

/// Confirmation payload, e.g. `{"message": "deletion is successful!"}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

fn validate_names(first_name: &str, last_name: Option<&str>) -> AppResult<()> {
    if first_name.trim().is_empty() {
        return Err(AppError::Validation("firstName is required".to_string()));
    }
    if first_name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::Validation(format!(
            "firstName must be at most {MAX_NAME_LEN} characters"
        )));
    }
    if last_name.is_some_and(|name| name.chars().count() > MAX_NAME_LEN) {
        return Err(AppError::Validation(format!(
            "lastName must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}
