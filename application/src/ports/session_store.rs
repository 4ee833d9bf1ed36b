//! Session store port
//!
//! Defines the interface for durable session persistence. The engine
//! treats the store as providing at-least-once write semantics for a
//! finished or aborted session and performs no locking of its own;
//! replay is read-only and assumes no concurrent writer.

use async_trait::async_trait;
use roundtable_domain::{Session, SessionSummary};
use thiserror::Error;

/// Errors raised by session persistence
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("session not found: {0}")]
    NotFound(String),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage encoding error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Durable store for finished and aborted sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a session snapshot, returning its stored identifier
    async fn save(&self, session: &Session) -> Result<String, StoreError>;

    /// Summaries of all stored sessions, newest first
    async fn list(&self) -> Result<Vec<SessionSummary>, StoreError>;

    /// Load a stored session by identifier
    async fn load(&self, id: &str) -> Result<Session, StoreError>;
}
