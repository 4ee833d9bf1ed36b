//! Application-level configuration
//!
//! Controls runtime behavior of the discussion engine: the retry
//! schedule around generation calls and the bound on the Convergence
//! refinement loop.

use crate::retry::RetryPolicy;

/// Engine behavior configuration
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Retry schedule applied to every generation call
    pub retry: RetryPolicy,
    /// Maximum draft/feedback iterations in the Convergence round
    pub max_refinement_rounds: usize,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            max_refinement_rounds: 3,
        }
    }
}

impl BehaviorConfig {
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_max_refinement_rounds(mut self, rounds: usize) -> Self {
        self.max_refinement_rounds = rounds;
        self
    }
}
