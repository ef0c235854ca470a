//! Account management HTTP handlers.
//!
//! This module implements the account API endpoints:
//! - GET /account - List all accounts
//! - POST /account - Create a new account
//! - GET /account/{id} - Get account by ID
//! - PUT /account/{id} - Replace an account's mutable fields
//! - DELETE /account/{id} - Delete an account
//!
//! Path ids and bodies are taken as `Result<_, Rejection>` so that a
//! malformed request becomes an `AppError::Validation` (400 with the usual
//! JSON error body) before the store is ever called.

use crate::{
    error::AppError,
    models::account::{Account, AccountUpdate, MessageResponse, NewAccount},
    state::AppState,
};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use uuid::Uuid;

/// Returned by a successful delete.
pub const DELETION_MESSAGE: &str = "deletion is successful!";

/// Create a new account.
///
/// # Request Body
///
/// ```json
/// { "firstName": "Ann", "lastName": "Lee" }
/// ```
///
/// # Response
///
/// - **201 Created**: the inserted account, `balance` 0
/// - **400**: body missing, not JSON, or `firstName` blank; nothing inserted
pub async fn create_account(
    State(state): State<AppState>,
    payload: Result<Json<NewAccount>, JsonRejection>,
) -> Result<(StatusCode, Json<Account>), AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let account = state.store.create(request).await?;
    tracing::info!(id = %account.id, "Account created");

    Ok((StatusCode::CREATED, Json(account)))
}

/// List all accounts.
///
/// Returns `200 OK` with a (possibly empty) array.
pub async fn list_accounts(State(state): State<AppState>) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = state.store.list().await?;
    Ok(Json(accounts))
}

/// Get a specific account by ID.
///
/// # Response
///
/// - **200 OK**: the account
/// - **400**: `id` is not a UUID
/// - **404**: no such account
pub async fn get_account(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Account>, AppError> {
    let Path(id) = id?;
    let account = state.store.get(id).await?;
    Ok(Json(account))
}

/// Replace the mutable fields of an account.
///
/// The id always comes from the path. The body may be a full account as
/// returned by `GET`; `id`, `createdAt` and `updatedAt` in it are ignored.
///
/// # Request Body
///
/// ```json
/// { "firstName": "Ann", "lastName": "Lee", "number": 1000001, "balance": 2500 }
/// ```
///
/// # Response
///
/// - **200 OK**: the account as stored after the update
/// - **400**: bad id, bad body, or a constraint violation
/// - **404**: no such account
pub async fn update_account(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<AccountUpdate>, JsonRejection>,
) -> Result<Json<Account>, AppError> {
    let Path(id) = id?;
    let Json(update) = payload?;
    update.validate()?;

    let account = state.store.update(id, update).await?;
    Ok(Json(account))
}

/// Delete an account.
///
/// # Response
///
/// - **200 OK**: `{"message": "deletion is successful!"}`
/// - **400**: `id` is not a UUID
/// - **404**: no such account
pub async fn delete_account(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = id?;
    state.store.delete(id).await?;
    tracing::info!(%id, "Account deleted");

    Ok(Json(MessageResponse {
        message: DELETION_MESSAGE.to_string(),
    }))
}
