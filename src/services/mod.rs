//! Persistence services.
//!
//! Services own the SQL and turn database outcomes into application errors,
//! keeping HTTP handlers free of queries.

pub mod account_store;
