//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Extracts the path id and JSON body, rejecting malformed input with 400
//! 2. Calls exactly one `AccountStore` operation
//! 3. Returns the result as JSON with the matching status code

/// Account CRUD endpoints
pub mod accounts;
/// Liveness endpoint
pub mod health;
