//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in the pipeline flows through this module. A fixed seed
//! produces a bit-identical sample stream across runs and platforms; an
//! absent seed falls back to OS entropy and is explicitly non-reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Internal state used when a caller passes seed 0, which would otherwise
/// collapse the expanded 64-bit state to all zeros.
const ZERO_SEED_REPLACEMENT: u32 = 0x9e37_79b9;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization. Seed 0 is remapped
/// to a fixed non-zero value so the generator never starts from a
/// degenerate state.
///
/// # Arguments
/// * `seed` - A 32-bit seed value
///
/// # Returns
/// A deterministically initialized PCG32 generator
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed = if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed };
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a 32-bit seed from a string label.
///
/// Uses BLAKE3 and truncates to the first 4 bytes (little-endian), so the
/// same label always maps to the same generator.
///
/// # Arguments
/// * `label` - An arbitrary seed string
///
/// # Returns
/// A derived u32 seed
pub fn derive_seed(label: &str) -> u32 {
    let hash = blake3::hash(label.as_bytes());
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().expect("hash has 32 bytes");
    u32::from_le_bytes(bytes)
}

/// Draws a fresh seed from OS entropy for unseeded requests.
///
/// # Returns
/// A non-deterministic u32 seed
pub fn entropy_seed() -> u32 {
    rand::thread_rng().gen()
}
