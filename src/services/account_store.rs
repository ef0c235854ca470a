//! Account store - durable CRUD over the `account` table.
//!
//! This module owns:
//! - The `AccountStore` trait the HTTP layer depends on
//! - `PgAccountStore`, its PostgreSQL implementation
//! - Translation of missing rows into `AppError::AccountNotFound`
//!
//! Failures are never logged and swallowed here; every error is returned to
//! the caller.

use std::{future::Future, time::Duration};

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::{AppError, AppResult, StorageError},
    models::account::{Account, AccountUpdate, NewAccount},
};

/// Full column list, used by every query that returns accounts.
const ACCOUNT_COLUMNS: &str = "id, first_name, last_name, number, balance, created_at, updated_at";

/// Storage operations for accounts.
///
/// Handlers hold an `Arc<dyn AccountStore>`, so implementations must be
/// shareable across concurrently running requests.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account with a fresh id and account number and a zero
    /// balance.
    ///
    /// # Errors
    ///
    /// - `Validation`: `first_name` is blank
    /// - `Storage`: the insert could not complete
    async fn create(&self, account: NewAccount) -> AppResult<Account>;

    /// Fetch a single account.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound`: no row matches `id`
    /// - `Storage`: any other read failure
    async fn get(&self, id: Uuid) -> AppResult<Account>;

    /// Fetch every account. No ordering is guaranteed; an empty table yields
    /// an empty vector.
    async fn list(&self) -> AppResult<Vec<Account>>;

    /// Replace the names and balance of the account `id` and refresh
    /// `updated_at`. `id`, `number` and `created_at` never change.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound`: no row matches `id`; nothing is written
    /// - `Storage`: any other write failure, including constraint violations
    async fn update(&self, id: Uuid, update: AccountUpdate) -> AppResult<Account>;

    /// Hard-delete the account `id`.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound`: no row matches `id`
    /// - `Storage`: the statement could not execute
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Check that the backing database is reachable.
    async fn ping(&self) -> AppResult<()>;
}

/// PostgreSQL-backed [`AccountStore`].
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    pool: DbPool,
    query_timeout: Option<Duration>,
}

impl PgAccountStore {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            query_timeout: None,
        }
    }

    /// Report deadline failures as `StorageError::Timeout(timeout)`.
    ///
    /// The deadline itself is enforced by the pool (see [`db::create_pool`]):
    /// PostgreSQL aborts and rolls back any statement exceeding
    /// `statement_timeout`, and waiting for a connection is bounded by the
    /// pool's acquire timeout. Pass the same value given to the pool.
    ///
    /// [`db::create_pool`]: crate::db::create_pool
    pub fn with_query_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.query_timeout = timeout;
        self
    }

    async fn run<T, F>(&self, query: F) -> AppResult<T>
    where
        F: Future<Output = Result<T, sqlx::Error>> + Send,
    {
        query.await.map_err(|err| -> AppError {
            match self.query_timeout {
                Some(limit) if is_timeout(&err) => StorageError::Timeout(limit).into(),
                _ => err.into(),
            }
        })
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create(&self, account: NewAccount) -> AppResult<Account> {
        account.validate()?;

        let sql = format!(
            "INSERT INTO account (id, first_name, last_name, balance)
             VALUES ($1, $2, $3, 0)
             RETURNING {ACCOUNT_COLUMNS}"
        );
        let created = self
            .run(
                sqlx::query_as::<_, Account>(&sql)
                    .bind(Uuid::new_v4())
                    .bind(account.first_name)
                    .bind(account.last_name)
                    .fetch_one(&self.pool),
            )
            .await?;

        tracing::debug!(id = %created.id, number = created.number, "Account created");
        Ok(created)
    }

    async fn get(&self, id: Uuid) -> AppResult<Account> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM account WHERE id = $1");
        self.run(
            sqlx::query_as::<_, Account>(&sql)
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await?
        .ok_or(AppError::AccountNotFound(id))
    }

    async fn list(&self) -> AppResult<Vec<Account>> {
        let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM account");
        let accounts = self
            .run(sqlx::query_as::<_, Account>(&sql).fetch_all(&self.pool))
            .await?;

        tracing::debug!("Found {} accounts", accounts.len());
        Ok(accounts)
    }

    async fn update(&self, id: Uuid, update: AccountUpdate) -> AppResult<Account> {
        // RETURNING yields no row when nothing matched, which doubles as the
        // zero-rows-affected check.
        let sql = format!(
            "UPDATE account
             SET first_name = $1,
                 last_name = $2,
                 balance = $3,
                 updated_at = NOW()
             WHERE id = $4
             RETURNING {ACCOUNT_COLUMNS}"
        );
        let updated = self
            .run(
                sqlx::query_as::<_, Account>(&sql)
                    .bind(update.first_name)
                    .bind(update.last_name)
                    .bind(update.balance)
                    .bind(id)
                    .fetch_optional(&self.pool),
            )
            .await?
            .ok_or(AppError::AccountNotFound(id))?;

        tracing::debug!(%id, "Account updated");
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let deleted = self
            .run(
                sqlx::query("DELETE FROM account WHERE id = $1")
                    .bind(id)
                    .execute(&self.pool),
            )
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(AppError::AccountNotFound(id));
        }

        tracing::debug!(%id, "Account deleted");
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        self.run(sqlx::query("SELECT 1").execute(&self.pool))
            .await
            .map(|_| ())
    }
}

/// Pool acquire timeouts and `statement_timeout` cancellations (SQLSTATE
/// 57014, `query_canceled`).
fn is_timeout(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::PoolTimedOut => true,
        sqlx::Error::Database(db) => db.code().as_deref() == Some("57014"),
        _ => false,
    }
}
