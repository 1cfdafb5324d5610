//! Random failure injection for the in-memory backend.

use std::fmt;

use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Decides, per request, whether the backend should pretend to be down.
///
/// Each call to [FailureInjector::should_fail] is an independent draw with
/// the configured probability, so every request has the same chance of
/// failing regardless of what happened before it.
///
/// A probability of `0.0` never fails and `1.0` always fails, which is how
/// tests get deterministic behavior without touching the random source. For
/// reproducible sequences at in-between probabilities, construct the
/// injector with [FailureInjector::from_seed].
pub struct FailureInjector {
    probability: f64,
    rng: SmallRng,
}

impl FailureInjector {
    /// Create an injector that fails with `probability`, clamped to
    /// `[0.0, 1.0]`.
    pub fn new(probability: f64) -> Self {
        Self::with_rng(probability, SmallRng::from_entropy())
    }

    /// Create an injector with a seeded random source.
    ///
    /// Two injectors built from the same probability and seed produce the
    /// same sequence of answers.
    pub fn from_seed(probability: f64, seed: u64) -> Self {
        Self::with_rng(probability, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(probability: f64, rng: SmallRng) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
            rng,
        }
    }

    /// Roll the dice for one request.
    pub fn should_fail(&mut self) -> bool {
        self.rng.gen_bool(self.probability)
    }

    /// The configured failure probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl fmt::Debug for FailureInjector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailureInjector")
            .field("probability", &self.probability)
            .finish_non_exhaustive()
    }
}
