//! Structured self-test for the generation pipeline.
//!
//! Runs the pipeline's contract properties against live output and reports
//! each as a named pass/fail result with a message. Failures are data for
//! the caller to surface, never panics, so the self-test is safe to run
//! inside a hosting service.

use serde::{Deserialize, Serialize};

use crate::generate::generate;
use crate::request::NoiseRequest;
use crate::sampler::Distribution;

/// Outcome of a single self-test check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Check identifier, e.g. "endpoints/zero".
    pub name: String,
    /// Whether the property held.
    pub passed: bool,
    /// Human-readable detail, populated on failure and on pass.
    pub message: String,
}

impl CheckResult {
    fn pass(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            message: message.into(),
        }
    }

    fn fail(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            message: message.into(),
        }
    }

    fn from_condition(name: &'static str, passed: bool, message: impl Into<String>) -> Self {
        if passed {
            Self::pass(name, message)
        } else {
            Self::fail(name, message)
        }
    }
}

/// Returns true when every check in the slice passed.
pub fn all_passed(results: &[CheckResult]) -> bool {
    results.iter().all(|r| r.passed)
}

/// Runs the full self-test suite.
pub fn run_self_test() -> Vec<CheckResult> {
    vec![
        check_endpoints(),
        check_length(),
        check_determinism(),
        check_loudness(),
        check_no_clip(),
        check_encoding_sizes(),
        check_degenerate_lengths(),
    ]
}

fn check_endpoints() -> CheckResult {
    const NAME: &str = "endpoints/zero";
    let request = NoiseRequest::new(48000, 1000).with_seed(11);
    match generate(&request) {
        Ok(result) => {
            let first = result.samples[0];
            let last = result.samples[999];
            CheckResult::from_condition(
                NAME,
                first == 0.0 && last == 0.0,
                format!("first={first}, last={last}"),
            )
        }
        Err(e) => CheckResult::fail(NAME, e.to_string()),
    }
}

fn check_length() -> CheckResult {
    const NAME: &str = "buffer/length";
    for n in [0usize, 1, 2, 100, 4801] {
        match generate(&NoiseRequest::new(48000, n).with_seed(11)) {
            Ok(result) if result.samples.len() == n => {}
            Ok(result) => {
                return CheckResult::fail(
                    NAME,
                    format!("requested {n} samples, got {}", result.samples.len()),
                );
            }
            Err(e) => return CheckResult::fail(NAME, e.to_string()),
        }
    }
    CheckResult::pass(NAME, "output length matches request exactly")
}

fn check_determinism() -> CheckResult {
    const NAME: &str = "seed/determinism";
    let request = NoiseRequest::new(48000, 200).with_seed(11);
    let other = NoiseRequest::new(48000, 200).with_seed(12);
    match (generate(&request), generate(&request), generate(&other)) {
        (Ok(a), Ok(b), Ok(c)) => {
            if a.samples != b.samples {
                CheckResult::fail(NAME, "same seed produced different buffers")
            } else if a.samples == c.samples {
                CheckResult::fail(NAME, "different seeds produced identical buffers")
            } else {
                CheckResult::pass(NAME, "same seed repeats, different seed diverges")
            }
        }
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => CheckResult::fail(NAME, e.to_string()),
    }
}

fn check_loudness() -> CheckResult {
    const NAME: &str = "loudness/rms";
    let request = NoiseRequest::new(48000, 48000)
        .with_target_level_dbfs(-70.0)
        .with_seed(11);
    match generate(&request) {
        Ok(result) => {
            let measured = result.rms_dbfs();
            CheckResult::from_condition(
                NAME,
                (measured + 70.0).abs() < 0.5,
                format!("target -70 dBFS, measured {measured:.3} dBFS"),
            )
        }
        Err(e) => CheckResult::fail(NAME, e.to_string()),
    }
}

fn check_no_clip() -> CheckResult {
    const NAME: &str = "clip/peak";
    for seed in 0..8u32 {
        let request = NoiseRequest::new(48000, 1024)
            .with_target_level_dbfs(0.0)
            .with_seed(seed);
        match generate(&request) {
            Ok(result) => {
                let peak = result
                    .samples
                    .iter()
                    .map(|s| s.abs())
                    .fold(0.0_f64, f64::max);
                if peak > 1.0 + 1e-6 {
                    return CheckResult::fail(NAME, format!("seed {seed} peaked at {peak}"));
                }
            }
            Err(e) => return CheckResult::fail(NAME, e.to_string()),
        }
    }
    CheckResult::pass(NAME, "peak stays within full scale at 0 dBFS target")
}

fn check_encoding_sizes() -> CheckResult {
    const NAME: &str = "encode/sizes";
    let request = NoiseRequest::new(16000, 100)
        .with_distribution(Distribution::Uniform)
        .with_target_level_dbfs(-60.0)
        .with_seed(7);
    match generate(&request) {
        Ok(result) => {
            let raw = result.to_pcm16();
            let wav = result.to_wav();
            let header_ok = wav.wav_data.len() == 244
                && &wav.wav_data[0..4] == b"RIFF"
                && &wav.wav_data[8..12] == b"WAVE";
            CheckResult::from_condition(
                NAME,
                raw.len() == 200 && header_ok,
                format!("raw={} bytes, wav={} bytes", raw.len(), wav.wav_data.len()),
            )
        }
        Err(e) => CheckResult::fail(NAME, e.to_string()),
    }
}

fn check_degenerate_lengths() -> CheckResult {
    const NAME: &str = "buffer/degenerate";
    let empty = generate(&NoiseRequest::new(48000, 0).with_seed(11));
    let single = generate(&NoiseRequest::new(48000, 1).with_seed(11));
    match (empty, single) {
        (Ok(empty), Ok(single)) => {
            let empty_ok = empty.samples.is_empty() && empty.to_pcm16().is_empty();
            let single_ok = single.samples == [0.0];
            CheckResult::from_condition(
                NAME,
                empty_ok && single_ok,
                "N=0 yields empty output, N=1 yields a single zero",
            )
        }
        (Err(e), _) | (_, Err(e)) => CheckResult::fail(NAME, e.to_string()),
    }
}
