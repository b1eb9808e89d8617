//! noisepad - deterministic padding noise generation
//!
//! This crate generates fixed-length noise buffers that are inaudible (very
//! low RMS level) yet never pure silence, for use as padding in audio
//! pipelines that must not contain flat-zero runs. The defining constraint
//! is that the first and last sample of a buffer are exactly zero without
//! any window or fade: the linear trend through the raw endpoints is
//! removed instead of shaping amplitude at the edges.
//!
//! # Pipeline
//!
//! Generation runs strictly in order:
//!
//! 1. **Seeded RNG** - PCG32 seeded from a number, a string label, or OS
//!    entropy when no seed is given.
//! 2. **Distribution sampling** - standard-normal (polar Box-Muller) or
//!    symmetric uniform samples.
//! 3. **Endpoint detrending** - the affine ramp through the first and last
//!    raw samples is subtracted, pinning both endpoints to zero.
//! 4. **Loudness normalization** - optional DC removal, RMS scaling to a
//!    target dBFS level, and a peak clip-safety rescale.
//! 5. **PCM/WAV encoding** - 16-bit PCM, raw or in a mono RIFF/WAVE
//!    container.
//!
//! # Determinism
//!
//! Given the same seed and request, output is byte-identical across runs
//! and platforms. The crate uses PCG32 for all random number generation,
//! with string seeds derived via BLAKE3 hashing. Nothing is cached between
//! calls; each call constructs its own generator, so concurrent calls
//! share no state.
//!
//! # Example
//!
//! ```ignore
//! use noisepad::{generate, NoiseRequest};
//!
//! let request = NoiseRequest::new(48000, 4800)
//!     .with_target_level_dbfs(-80.0)
//!     .with_seed("segment-gap");
//! let result = generate(&request)?;
//!
//! // Write to file
//! std::fs::write("padding.wav", &result.to_wav().wav_data)?;
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point for noise generation
//! - [`request`] - Request data model with serde support
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`sampler`] - Gaussian and uniform distribution sampling
//! - [`detrend`] - Endpoint detrending and edge softening
//! - [`normalize`] - RMS loudness normalization and clip safety
//! - [`wav`] - Deterministic PCM/WAV encoder
//! - [`verify`] - Structured pass/fail self-test of the pipeline contract

pub mod detrend;
pub mod error;
pub mod generate;
pub mod normalize;
pub mod request;
pub mod rng;
pub mod sampler;
pub mod verify;
pub mod wav;

// Re-export main types at crate root
pub use error::{NoiseError, NoiseResult};
pub use generate::{generate, GenerateResult};
pub use request::{NoiseRequest, Seed};
pub use sampler::Distribution;
pub use wav::{encode, WavResult};
