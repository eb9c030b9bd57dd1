//! Pseudo-random source for sampling.
//!
//! A fast non-cryptographic generator, seeded from the OS. Passwords drawn
//! from it are fine for convenience use; anything security-sensitive should
//! pass a cryptographically secure `Rng` to the sampler instead.

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Construct the production sampling source.
pub fn sampler() -> SmallRng {
    SmallRng::from_os_rng()
}

/// Source description for the panel's entropy line.
pub fn source_name() -> &'static str {
    "SmallRng (non-cryptographic)"
}
