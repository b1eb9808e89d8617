//! Loudness normalization.
//!
//! Scales a buffer so its RMS amplitude matches a target level in dBFS,
//! with optional DC removal first and a peak-limiting safety net after.
//! Degenerate buffers (zero or non-finite RMS) normalize to silence rather
//! than propagating Inf/NaN gains.

/// Converts a dBFS level to linear amplitude.
pub fn db_to_amplitude(dbfs: f64) -> f64 {
    10f64.powf(dbfs / 20.0)
}

/// Converts a linear amplitude to dBFS. Zero amplitude maps to -inf.
pub fn amplitude_to_db(amplitude: f64) -> f64 {
    20.0 * amplitude.log10()
}

/// Root-mean-square amplitude of the buffer. Empty buffers measure 0.
pub fn rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mean_square = samples.iter().map(|s| s * s).sum::<f64>() / samples.len() as f64;
    mean_square.sqrt()
}

/// Subtracts the arithmetic mean from every sample.
pub fn remove_dc(samples: &mut [f64]) {
    if samples.is_empty() {
        return;
    }
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    for sample in samples.iter_mut() {
        *sample -= mean;
    }
}

/// Scales the buffer so its RMS matches `target_dbfs`.
///
/// If the measured RMS is zero or non-finite there is no meaningful gain;
/// the buffer is written to all-zero silence instead.
pub fn normalize_rms(samples: &mut [f64], target_dbfs: f64) {
    let measured = rms(samples);
    if measured <= 0.0 || !measured.is_finite() {
        samples.fill(0.0);
        return;
    }

    let gain = db_to_amplitude(target_dbfs) / measured;
    for sample in samples.iter_mut() {
        *sample *= gain;
    }
}

/// Rescales the buffer by 1/peak if any sample exceeds full scale.
///
/// Safety net after RMS scaling; for targets at or below 0 dBFS it rarely
/// triggers.
pub fn limit_peak(samples: &mut [f64]) {
    let peak = samples.iter().map(|s| s.abs()).fold(0.0_f64, f64::max);
    if peak > 1.0 {
        let scale = 1.0 / peak;
        for sample in samples.iter_mut() {
            *sample *= scale;
        }
    }
}
