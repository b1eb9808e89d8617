//! Endpoint detrending.
//!
//! Removes the unique linear ramp through a buffer's first and last raw
//! samples so that both endpoints land on exactly zero, without windowing
//! or fading the rest of the buffer.

/// Damping applied to the samples adjacent to the endpoints by
/// [`soften_edges`].
const EDGE_DAMPING: f64 = 0.7;

/// Subtracts the affine ramp through `samples[0]` and `samples[N-1]` from
/// every sample, then writes exact zeros into both endpoints.
///
/// The explicit endpoint assignment guards against rounding drift in the
/// subtraction; the invariant is `samples[0] == 0.0 && samples[N-1] == 0.0`
/// exactly, not merely to within epsilon.
///
/// A single-sample buffer is forced to zero; an empty buffer is left as a
/// valid empty result.
pub fn remove_linear_trend(samples: &mut [f64]) {
    let n = samples.len();
    if n == 0 {
        return;
    }
    if n == 1 {
        samples[0] = 0.0;
        return;
    }

    let first = samples[0];
    let last = samples[n - 1];
    let step = (last - first) / (n - 1) as f64;
    for (i, sample) in samples.iter_mut().enumerate() {
        *sample -= first + step * i as f64;
    }

    samples[0] = 0.0;
    samples[n - 1] = 0.0;
}

/// Damps the second and second-to-last samples by a fixed factor.
///
/// Transient-reduction heuristic applied after detrending; buffers shorter
/// than 4 samples are left untouched. Does not affect the zero endpoints.
pub fn soften_edges(samples: &mut [f64]) {
    let n = samples.len();
    if n < 4 {
        return;
    }
    samples[1] *= EDGE_DAMPING;
    samples[n - 2] *= EDGE_DAMPING;
}
