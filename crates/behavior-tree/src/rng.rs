//! Process-wide random source.
//!
//! [`RandomSelector`](crate::RandomSelector) and any caller-defined leaf that
//! needs randomness draw from the same generator. It starts from OS entropy;
//! call [`reseed`] once at startup to make a run reproducible.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;

static RNG: OnceLock<Mutex<StdRng>> = OnceLock::new();

fn lock() -> MutexGuard<'static, StdRng> {
    RNG.get_or_init(|| Mutex::new(StdRng::from_entropy()))
        .lock()
        // The generator holds no invariant a panicking user could break.
        .unwrap_or_else(PoisonError::into_inner)
}

/// Replaces the process-wide generator with one seeded from `seed`.
pub fn reseed(seed: u64) {
    *lock() = StdRng::seed_from_u64(seed);
    tracing::debug!(seed, "behavior tree rng reseeded");
}

/// Runs `f` with exclusive access to the process-wide generator.
pub fn with_rng<R>(f: impl FnOnce(&mut StdRng) -> R) -> R {
    f(&mut lock())
}
