//! Distribution sampling on top of the uniform generator.
//!
//! Converts uniform [0,1) draws into either standard-normal samples or
//! symmetric uniform [-1,1) samples.
//!
//! The gaussian path uses the polar Box-Muller (Marsaglia) transform and
//! caches the second output of each transform as a spare: two consecutive
//! `sample` calls consume one transform, in order. The trigonometric
//! Box-Muller variant is not bit-compatible with this one, so determinism
//! guarantees hold only within this implementation.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Source distribution for raw noise samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    /// Standard normal samples via polar Box-Muller.
    #[default]
    Gaussian,
    /// Uniform samples in [-1, 1).
    Uniform,
}

/// Stateful sampler for one generation call.
///
/// Holds the gaussian spare, so a sampler must not be shared between
/// buffers if reproducibility matters.
#[derive(Debug)]
pub enum Sampler {
    /// Gaussian sampler with its cached spare output.
    Gaussian {
        /// Second polar transform output, consumed on the next call.
        spare: Option<f64>,
    },
    /// Stateless uniform sampler.
    Uniform,
}

impl Sampler {
    /// Creates a sampler for the given distribution.
    pub fn new(distribution: Distribution) -> Self {
        match distribution {
            Distribution::Gaussian => Sampler::Gaussian { spare: None },
            Distribution::Uniform => Sampler::Uniform,
        }
    }

    /// Draws one sample, consuming uniform draws from `rng` as needed.
    pub fn sample(&mut self, rng: &mut Pcg32) -> f64 {
        match self {
            Sampler::Gaussian { spare } => {
                if let Some(value) = spare.take() {
                    return value;
                }
                let (first, second) = polar_gaussian_pair(rng);
                *spare = Some(second);
                first
            }
            Sampler::Uniform => 2.0 * rng.gen::<f64>() - 1.0,
        }
    }

    /// Fills a fresh buffer of `len` samples.
    pub fn fill(&mut self, rng: &mut Pcg32, len: usize) -> Vec<f64> {
        (0..len).map(|_| self.sample(rng)).collect()
    }
}

/// Draws one pair of independent standard-normal values.
///
/// Rejects candidate pairs whose squared radius falls outside (0, 1); the
/// acceptance probability per attempt is pi/4, so the loop terminates
/// quickly for any non-degenerate generator.
fn polar_gaussian_pair(rng: &mut Pcg32) -> (f64, f64) {
    loop {
        let u = 2.0 * rng.gen::<f64>() - 1.0;
        let v = 2.0 * rng.gen::<f64>() - 1.0;
        let s = u * u + v * v;
        if s > 0.0 && s < 1.0 {
            let m = (-2.0 * s.ln() / s).sqrt();
            return (u * m, v * m);
        }
    }
}
