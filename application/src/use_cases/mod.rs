//! Use cases - the operations the application exposes

pub mod replay;
pub mod run_discussion;
