//! Database connection pool and schema bootstrap.
//!
//! This module provides utilities for:
//! - Creating and managing a PostgreSQL connection pool
//! - Creating the `account` table on startup if it does not exist yet

use std::{str::FromStr, time::Duration};

use sqlx::{
    Pool, Postgres,
    postgres::{PgConnectOptions, PgPoolOptions},
};

/// Type alias for PostgreSQL connection pool.
pub type DbPool = Pool<Postgres>;

/// Statements run by [`init_schema`], in order. Each one is idempotent.
const SCHEMA: [&str; 3] = [
    // gen_random_uuid() lives in pgcrypto on PostgreSQL < 13
    r#"CREATE EXTENSION IF NOT EXISTS "pgcrypto""#,
    "CREATE SEQUENCE IF NOT EXISTS account_number_seq START WITH 1000000",
    r#"
    CREATE TABLE IF NOT EXISTS account (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        first_name VARCHAR(50) NOT NULL,
        last_name VARCHAR(50),
        number BIGINT NOT NULL UNIQUE DEFAULT nextval('account_number_seq'),
        balance BIGINT NOT NULL DEFAULT 0 CHECK (balance >= 0),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

/// Create a new PostgreSQL connection pool.
///
/// The pool is shared by every request; its concurrency safety is delegated
/// to sqlx.
///
/// With a `query_timeout`, every connection is opened with that
/// `statement_timeout`, so PostgreSQL itself cancels (and rolls back) a
/// statement that runs too long, and waiting for a free connection gives up
/// after the same duration.
///
/// # Errors
///
/// Returns an error if the connection string is invalid, the server is
/// unreachable or authentication fails.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
    query_timeout: Option<Duration>,
) -> Result<DbPool, sqlx::Error> {
    let mut connect_options = PgConnectOptions::from_str(database_url)?;
    let mut pool_options = PgPoolOptions::new().max_connections(max_connections);

    if let Some(limit) = query_timeout {
        connect_options = connect_options.options([(
            "statement_timeout",
            format!("{}ms", limit.as_millis()),
        )]);
        pool_options = pool_options.acquire_timeout(limit);
    }

    pool_options.connect_with(connect_options).await
}

/// Ensure the `account` table (and the sequence backing account numbers)
/// exists.
///
/// Safe to run on every process start.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::info!("Account table created or already exists");
    Ok(())
}
