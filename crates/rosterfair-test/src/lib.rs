//! Shared test fixtures for rosterfair crates.
//!
//! This crate provides sample inputs and pure functions for testing.
//! It depends only on `rosterfair-core`, never on the solver it is used to
//! test.
//!
//! - [`generators`] - Randomized availability patterns
//! - [`fixtures`] - Fixed scenarios and named randomized cases
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! rosterfair-test = { workspace = true }
//! ```
//!
//! Every generator takes an explicit RNG. Use [`seeded_rng`] so failures
//! reproduce:
//!
//! ```
//! use rosterfair_test::{generators, seeded_rng};
//!
//! let mut rng = seeded_rng(42);
//! let days = generators::uniform_availability(&mut rng, 5, 20, 0.7);
//! assert_eq!(days.len(), 20);
//! ```

pub mod fixtures;
pub mod generators;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Returns a deterministic RNG for the given seed.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
