//! Application layer for roundtable
//!
//! This crate contains the discussion engine's use cases and port
//! definitions. It depends only on the domain layer.
//!
//! The two use cases are [`RunDiscussionUseCase`], which drives one
//! discussion from topic to terminal session, and
//! [`ReplaySessionUseCase`], which plays a stored session back against a
//! presentation sink.

pub mod config;
pub mod ports;
pub mod retry;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    generation::{GenerationError, GenerationGateway},
    session_store::{SessionStore, StoreError},
    sink::{DiscussionSink, NoSink, ReplayControl, ReplayPacer},
};
pub use retry::RetryPolicy;
pub use use_cases::replay::ReplaySessionUseCase;
pub use use_cases::run_discussion::{DiscussionError, DiscussionReport, RunDiscussionUseCase};
