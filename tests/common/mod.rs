#![allow(dead_code)]
//! Common test utilities: an in-memory account store and request helpers
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use bank_account_api::{
    Account, AccountStore, AccountUpdate, AppError, AppResult, AppState, NewAccount, routes,
};
use chrono::Utc;
use serde_json::Value;
use tower::util::ServiceExt;
use uuid::Uuid;

/// `AccountStore` kept in a `Vec`, mirroring the table's behaviour closely
/// enough for dispatcher tests. Counts every call so tests can assert the
/// store was never reached.
#[derive(Default)]
pub struct InMemoryStore {
    rows: Mutex<Vec<Account>>,
    next_number: AtomicI64,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_number: AtomicI64::new(1_000_000),
            ..Default::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Make every subsequent call fail as if the database were unreachable.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn enter(&self) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut.into());
        }
        Ok(())
    }
}

#[async_trait]
impl AccountStore for InMemoryStore {
    async fn create(&self, account: NewAccount) -> AppResult<Account> {
        self.enter()?;
        account.validate()?;

        let now = Utc::now();
        let created = Account {
            id: Uuid::new_v4(),
            first_name: account.first_name,
            last_name: account.last_name,
            number: self.next_number.fetch_add(1, Ordering::SeqCst),
            balance: 0,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn get(&self, id: Uuid) -> AppResult<Account> {
        self.enter()?;
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(AppError::AccountNotFound(id))
    }

    async fn list(&self) -> AppResult<Vec<Account>> {
        self.enter()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn update(&self, id: Uuid, update: AccountUpdate) -> AppResult<Account> {
        self.enter()?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AppError::AccountNotFound(id))?;
        row.first_name = update.first_name;
        row.last_name = update.last_name;
        row.balance = update.balance;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.enter()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| a.id != id);
        if rows.len() == before {
            return Err(AppError::AccountNotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        self.enter()
    }
}

/// Build the real router on top of the given store.
pub fn app(store: Arc<InMemoryStore>) -> Router {
    routes::router(AppState::new(store))
}

/// Send one request and return the status plus the decoded JSON body
/// (`Value::Null` when the body is empty or not JSON).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
