//! Shared randomness source.
//!
//! # Responsibilities
//! - Own a pseudo-random generator that many threads can draw from
//! - Provide the process-wide instance, seeded once from the clock
//! - Allow fixed seeds so tests can replay a sequence
//!
//! # Design Decisions
//! - `StdRng` behind a `Mutex`; draws are short and never block on I/O
//! - Handles are cheap clones of one `Arc`, so policies can own one
//! - Not cryptographically strong, only statistically fair

use std::sync::{Arc, Mutex, MutexGuard, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// A cloneable handle to a thread-safe generator.
#[derive(Debug, Clone)]
pub struct SharedRng {
    inner: Arc<Mutex<StdRng>>,
}

impl SharedRng {
    /// Create a generator with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    /// Create a generator seeded from the current wall-clock time.
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::seeded(seed)
    }

    /// The process-wide generator. Seeded on first use, never reseeded.
    pub fn global() -> Self {
        static GLOBAL: OnceLock<SharedRng> = OnceLock::new();
        GLOBAL.get_or_init(SharedRng::from_time).clone()
    }

    /// Fair coin flip.
    pub fn coin_flip(&self) -> bool {
        self.lock().gen_bool(0.5)
    }

    /// A uniformly random permutation of `0..n`.
    pub fn permutation(&self, n: usize) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..n).collect();
        perm.shuffle(&mut *self.lock());
        perm
    }

    fn lock(&self) -> MutexGuard<'_, StdRng> {
        // A panic mid-draw cannot leave StdRng in an invalid state.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self::global()
    }
}
