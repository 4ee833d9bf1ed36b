//! Convergence-round primitives
//!
//! The Convergence round runs a bounded draft/feedback/revise loop. This
//! module holds the panelist position types and the parsing of free-form
//! AGREE/DISAGREE replies.

pub mod position;

pub use position::{PanelistPosition, Stance, parse_stance};
