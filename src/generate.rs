//! Main entry point for padding noise generation.
//!
//! Runs the full pipeline for one request: seeded RNG, distribution
//! sampling, endpoint detrending, loudness normalization, clip safety.
//! Each call builds its own generator, so concurrent calls share no state
//! and determinism is re-derived from the seed instead of cached.

use crate::detrend::{remove_linear_trend, soften_edges};
use crate::error::{NoiseError, NoiseResult};
use crate::normalize::{amplitude_to_db, limit_peak, normalize_rms, remove_dc, rms};
use crate::request::NoiseRequest;
use crate::rng::{create_rng, entropy_seed};
use crate::sampler::Sampler;
use crate::wav::{self, WavResult};

/// Result of one generation call.
#[derive(Debug)]
pub struct GenerateResult {
    /// The generated sample buffer, length exactly `sample_count`.
    pub samples: Vec<f64>,
    /// Sample rate in Hz, carried through to the encoder.
    pub sample_rate: u32,
    /// Target level the buffer was normalized to, in dBFS.
    pub target_level_dbfs: f64,
    /// The resolved 32-bit seed that was actually used. For unseeded
    /// requests this is the entropy draw, so the run can be reproduced.
    pub seed: u32,
}

impl GenerateResult {
    /// Encodes the buffer as a mono 16-bit WAV file.
    pub fn to_wav(&self) -> WavResult {
        WavResult::from_mono(&self.samples, self.sample_rate)
    }

    /// Encodes the buffer as raw little-endian int16 PCM bytes.
    pub fn to_pcm16(&self) -> Vec<u8> {
        wav::encode(&self.samples, self.sample_rate, false)
    }

    /// Measured RMS level of the buffer in dBFS. Silence measures -inf.
    pub fn rms_dbfs(&self) -> f64 {
        amplitude_to_db(rms(&self.samples))
    }

    /// Suggested file stem encoding rate, length and target level, e.g.
    /// `noise_16000hz_100smp_-60dbfs`. Informational only; callers own the
    /// actual naming.
    pub fn file_stem(&self) -> String {
        format!(
            "noise_{}hz_{}smp_{}dbfs",
            self.sample_rate,
            self.samples.len(),
            self.target_level_dbfs
        )
    }
}

/// Generates a padding noise buffer from a request.
///
/// # Arguments
/// * `request` - The generation parameters
///
/// # Returns
/// The generated buffer and metadata, or a validation error. Validation
/// happens before any buffer work, so no partial output is ever produced.
pub fn generate(request: &NoiseRequest) -> NoiseResult<GenerateResult> {
    validate(request)?;

    let seed = match &request.seed {
        Some(seed) => seed.resolve(),
        None => entropy_seed(),
    };

    let mut rng = create_rng(seed);
    let mut sampler = Sampler::new(request.distribution);
    let mut samples = sampler.fill(&mut rng, request.sample_count);

    if request.zero_endpoints {
        remove_linear_trend(&mut samples);
        if request.soften_edges {
            soften_edges(&mut samples);
        }
    }

    if request.remove_dc {
        remove_dc(&mut samples);
    }
    normalize_rms(&mut samples, request.target_level_dbfs);
    limit_peak(&mut samples);

    // Scaling preserves exact zeros, but the endpoints are re-asserted so
    // no later stage can leave rounding residue on them.
    if request.zero_endpoints {
        let n = samples.len();
        if n > 0 {
            samples[0] = 0.0;
            samples[n - 1] = 0.0;
        }
    }

    Ok(GenerateResult {
        samples,
        sample_rate: request.sample_rate,
        target_level_dbfs: request.target_level_dbfs,
        seed,
    })
}

fn validate(request: &NoiseRequest) -> NoiseResult<()> {
    if request.sample_rate == 0 {
        return Err(NoiseError::InvalidSampleRate {
            rate: request.sample_rate,
        });
    }
    if !request.target_level_dbfs.is_finite() || request.target_level_dbfs > 0.0 {
        return Err(NoiseError::invalid_param(
            "target_level_dbfs",
            format!(
                "must be finite and <= 0 dBFS, got {}",
                request.target_level_dbfs
            ),
        ));
    }
    Ok(())
}
