//! Bank Account API
//!
//! A REST service for managing bank account records backed by PostgreSQL:
//! create, fetch, list, update and delete accounts over JSON/HTTP.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Format**: JSON requests/responses, camelCase keys
//!
//! The library exposes its components so the router can be driven in tests
//! with any [`AccountStore`] implementation.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{AppError, AppResult, StorageError};
pub use models::account::{Account, AccountUpdate, NewAccount};
pub use services::account_store::{AccountStore, PgAccountStore};
pub use state::AppState;
