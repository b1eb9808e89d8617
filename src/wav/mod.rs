//! Deterministic PCM/WAV encoder.
//!
//! Converts float buffers to 16-bit PCM, optionally wrapped in a canonical
//! 44-byte mono RIFF/WAVE header. Output contains no timestamps or variable
//! metadata, so the BLAKE3 hash of the PCM data can stand in for a golden
//! buffer in determinism checks.

mod format;
mod pcm;
mod result;
mod writer;

#[cfg(test)]
mod tests;

// Re-export public API
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{samples_to_pcm16, write_wav, write_wav_to_vec};

/// Encodes a float buffer as PCM bytes.
///
/// With `wrap_in_container` set, the PCM data is wrapped in a mono 16-bit
/// WAV container (`44 + 2N` bytes); otherwise only the raw little-endian
/// int16 sample bytes are emitted (`2N` bytes).
pub fn encode(samples: &[f64], sample_rate: u32, wrap_in_container: bool) -> Vec<u8> {
    let pcm = samples_to_pcm16(samples);
    if wrap_in_container {
        write_wav_to_vec(&WavFormat::mono(sample_rate), &pcm)
    } else {
        pcm
    }
}
