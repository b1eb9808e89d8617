//! Request data model for padding noise generation.
//!
//! A [`NoiseRequest`] describes one generation call. Requests deserialize
//! from JSON payloads with forgiving defaults, so a caller only has to
//! supply `sample_rate` and `sample_count`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::sampler::Distribution;

/// Seed specification - can be a number or an arbitrary string label.
///
/// String seeds are reduced to a 32-bit integer before the generator is
/// constructed, see [`Seed::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    /// Numeric seed, used directly.
    Number(u32),
    /// Text seed, hashed down to 32 bits.
    Text(String),
}

impl Seed {
    /// Resolves the seed to the normalized 32-bit value used to build the
    /// generator.
    pub fn resolve(&self) -> u32 {
        match self {
            Seed::Number(n) => *n,
            Seed::Text(s) => crate::rng::derive_seed(s),
        }
    }
}

impl From<u32> for Seed {
    fn from(n: u32) -> Self {
        Seed::Number(n)
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Seed::Text(s.to_string())
    }
}

/// Parameters for one padding noise generation call.
///
/// A request is consumed once per call; buffers are re-derived from the
/// seed each time rather than cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseRequest {
    /// Sample rate in Hz. Must be non-zero.
    pub sample_rate: u32,
    /// Exact number of output samples. Negative or non-finite values in a
    /// JSON payload are treated as zero, not rejected.
    #[serde(default, deserialize_with = "deserialize_sample_count")]
    pub sample_count: usize,
    /// Source distribution for the raw noise.
    #[serde(default)]
    pub distribution: Distribution,
    /// Target RMS level in dBFS. Must be finite and <= 0.
    #[serde(default = "default_target_level_dbfs")]
    pub target_level_dbfs: f64,
    /// Force the first and last sample to exactly zero by removing the
    /// linear trend through them.
    #[serde(default = "default_true")]
    pub zero_endpoints: bool,
    /// Subtract the buffer mean before normalization.
    #[serde(default = "default_true")]
    pub remove_dc: bool,
    /// Damp the second and second-to-last samples after detrending, as an
    /// extra transient-reduction heuristic.
    #[serde(default)]
    pub soften_edges: bool,
    /// Optional seed. When absent the generator is seeded from OS entropy
    /// and the output is not reproducible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<Seed>,
}

fn default_target_level_dbfs() -> f64 {
    -80.0
}

fn default_true() -> bool {
    true
}

/// Accepts any JSON number for the sample count, clamping negative and
/// non-finite values to zero so a degenerate count degrades to an empty
/// buffer instead of a deserialization error.
fn deserialize_sample_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value <= 0.0 {
        Ok(0)
    } else {
        Ok(value as usize)
    }
}

impl NoiseRequest {
    /// Creates a request with the given rate and length and default
    /// settings everywhere else.
    pub fn new(sample_rate: u32, sample_count: usize) -> Self {
        Self {
            sample_rate,
            sample_count,
            distribution: Distribution::default(),
            target_level_dbfs: default_target_level_dbfs(),
            zero_endpoints: true,
            remove_dc: true,
            soften_edges: false,
            seed: None,
        }
    }

    /// Sets the source distribution.
    pub fn with_distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Sets the target RMS level in dBFS.
    pub fn with_target_level_dbfs(mut self, level: f64) -> Self {
        self.target_level_dbfs = level;
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Disables the zero-endpoint constraint.
    pub fn without_zero_endpoints(mut self) -> Self {
        self.zero_endpoints = false;
        self
    }

    /// Disables DC removal.
    pub fn without_dc_removal(mut self) -> Self {
        self.remove_dc = false;
        self
    }

    /// Enables edge softening.
    pub fn with_soft_edges(mut self) -> Self {
        self.soften_edges = true;
        self
    }
}
