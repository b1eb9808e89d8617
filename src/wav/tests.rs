//! Tests for the WAV encoder module.

use super::format::WavFormat;
use super::pcm::{compute_pcm_hash, extract_pcm_data};
use super::result::WavResult;
use super::writer::{samples_to_pcm16, write_wav, write_wav_to_vec};
use super::encode;

// =========================================================================
// WavFormat tests
// =========================================================================

#[test]
fn test_wav_format_mono() {
    let format = WavFormat::mono(44100);
    assert_eq!(format.channels, 1);
    assert_eq!(format.sample_rate, 44100);
    assert_eq!(format.bits_per_sample, 16);
}

#[test]
fn test_wav_format_derived_fields() {
    let format = WavFormat::mono(44100);
    assert_eq!(format.bytes_per_sample(), 2);
    assert_eq!(format.block_align(), 2);
    // 44100 samples/sec * 1 channel * 2 bytes/sample
    assert_eq!(format.byte_rate(), 88200);
}

#[test]
fn test_wav_format_various_sample_rates() {
    for &rate in &[8000, 11025, 16000, 22050, 44100, 48000, 96000] {
        let format = WavFormat::mono(rate);
        assert_eq!(format.sample_rate, rate);
        assert_eq!(format.byte_rate(), rate * 2);
    }
}

// =========================================================================
// PCM conversion tests
// =========================================================================

#[test]
fn test_samples_to_pcm16_normal_range() {
    let samples = vec![0.0, 0.5, -0.5];
    let pcm = samples_to_pcm16(&samples);

    assert_eq!(pcm.len(), 6); // 3 samples * 2 bytes

    assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 0);
    // 0.5 * 32767 = 16383.5, truncated toward zero
    assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), 16383);
    assert_eq!(i16::from_le_bytes([pcm[4], pcm[5]]), -16383);
}

#[test]
fn test_samples_to_pcm16_truncates_toward_zero() {
    let samples = vec![0.0001, -0.0001, 0.9999, -0.9999];
    let pcm = samples_to_pcm16(&samples);

    // 0.0001 * 32767 = 3.2767 -> 3
    assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 3);
    assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), -3);
    // 0.9999 * 32767 = 32763.72 -> 32763, not 32764
    assert_eq!(i16::from_le_bytes([pcm[4], pcm[5]]), 32763);
    assert_eq!(i16::from_le_bytes([pcm[6], pcm[7]]), -32763);
}

#[test]
fn test_samples_to_pcm16_boundary_values() {
    let samples = vec![1.0, -1.0];
    let pcm = samples_to_pcm16(&samples);

    assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 32767);
    // -1.0 * 32767 = -32767, not i16::MIN
    assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), -32767);
}

#[test]
fn test_samples_to_pcm16_clipping() {
    let samples = vec![1.5, -1.5, 100.0, -100.0, f64::INFINITY, f64::NEG_INFINITY];
    let pcm = samples_to_pcm16(&samples);

    for i in 0..3 {
        let positive = i16::from_le_bytes([pcm[i * 4], pcm[i * 4 + 1]]);
        let negative = i16::from_le_bytes([pcm[i * 4 + 2], pcm[i * 4 + 3]]);
        assert_eq!(positive, 32767, "sample {} should clip to 32767", i * 2);
        assert_eq!(negative, -32767, "sample {} should clip to -32767", i * 2 + 1);
    }
}

#[test]
fn test_samples_to_pcm16_nan_becomes_zero() {
    // NaN survives the clamp, then `as i16` maps it to 0.
    let pcm = samples_to_pcm16(&[f64::NAN]);
    assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 0);
}

#[test]
fn test_raw_pcm_size_law() {
    for n in [0usize, 1, 2, 100, 4801] {
        let samples = vec![0.25; n];
        assert_eq!(samples_to_pcm16(&samples).len(), n * 2);
    }
}

// =========================================================================
// WAV header correctness tests
// =========================================================================

#[test]
fn test_wav_header_riff_magic() {
    let wav = encode(&[0.0; 10], 44100, true);

    assert_eq!(&wav[0..4], b"RIFF", "RIFF magic number");
    assert_eq!(&wav[8..12], b"WAVE", "WAVE format identifier");
}

#[test]
fn test_wav_header_fmt_chunk() {
    let wav = encode(&[0.0; 10], 44100, true);

    assert_eq!(&wav[12..16], b"fmt ");

    let fmt_size = u32::from_le_bytes([wav[16], wav[17], wav[18], wav[19]]);
    assert_eq!(fmt_size, 16);

    let audio_format = u16::from_le_bytes([wav[20], wav[21]]);
    assert_eq!(audio_format, 1);

    let channels = u16::from_le_bytes([wav[22], wav[23]]);
    assert_eq!(channels, 1);

    let sample_rate = u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]);
    assert_eq!(sample_rate, 44100);

    let byte_rate = u32::from_le_bytes([wav[28], wav[29], wav[30], wav[31]]);
    assert_eq!(byte_rate, 88200);

    let block_align = u16::from_le_bytes([wav[32], wav[33]]);
    assert_eq!(block_align, 2);

    let bits_per_sample = u16::from_le_bytes([wav[34], wav[35]]);
    assert_eq!(bits_per_sample, 16);
}

#[test]
fn test_wav_header_data_chunk_and_sizes() {
    let wav = encode(&[0.0; 100], 44100, true);

    assert_eq!(&wav[36..40], b"data");

    let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
    assert_eq!(data_size, 200); // 100 samples * 2 bytes

    let chunk_size = u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]);
    assert_eq!(chunk_size, 36 + 200);

    assert_eq!(wav.len(), 244); // 44 header + 200 data
}

#[test]
fn test_encode_raw_mode() {
    let samples = vec![0.1; 50];
    let raw = encode(&samples, 16000, false);

    assert_eq!(raw.len(), 100);
    assert_eq!(raw, samples_to_pcm16(&samples));
}

// =========================================================================
// Determinism tests
// =========================================================================

#[test]
fn test_wav_determinism() {
    let samples = vec![0.5, -0.5, 0.0, 0.25, -0.25];
    let wav1 = encode(&samples, 44100, true);
    let wav2 = encode(&samples, 44100, true);

    assert_eq!(wav1, wav2, "WAV output should be deterministic");
}

#[test]
fn test_pcm_hash_determinism() {
    let samples = vec![0.5, -0.5, 0.3, -0.3, 0.0];

    let result1 = WavResult::from_mono(&samples, 44100);
    let result2 = WavResult::from_mono(&samples, 44100);

    assert_eq!(result1.pcm_hash, result2.pcm_hash);
    assert_eq!(result1.pcm_hash.len(), 64); // BLAKE3 produces 64 hex chars
}

#[test]
fn test_pcm_hash_different_for_different_samples() {
    let result1 = WavResult::from_mono(&[0.5, -0.5, 0.3], 44100);
    let result2 = WavResult::from_mono(&[0.5, -0.5, 0.31], 44100);

    assert_ne!(result1.pcm_hash, result2.pcm_hash);
}

#[test]
fn test_compute_pcm_hash_matches_result_hash() {
    let samples = vec![0.5, -0.5, 0.3, -0.3, 0.0];
    let result = WavResult::from_mono(&samples, 44100);

    let hash_from_wav = compute_pcm_hash(&result.wav_data).expect("should compute hash");
    assert_eq!(hash_from_wav, result.pcm_hash);
}

// =========================================================================
// Edge case tests
// =========================================================================

#[test]
fn test_empty_audio() {
    let wav = encode(&[], 44100, true);

    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(&wav[8..12], b"WAVE");

    let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
    assert_eq!(data_size, 0);

    assert_eq!(wav.len(), 44); // Header only
}

#[test]
fn test_empty_audio_raw() {
    assert!(encode(&[], 44100, false).is_empty());
}

#[test]
fn test_single_sample() {
    let wav = encode(&[0.5], 44100, true);

    let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
    assert_eq!(data_size, 2);

    let sample_value = i16::from_le_bytes([wav[44], wav[45]]);
    assert_eq!(sample_value, 16383); // 0.5 * 32767 truncated
}

#[test]
fn test_long_buffer() {
    // 10 seconds at 44100Hz
    let num_samples = 441_000;
    let samples: Vec<f64> = (0..num_samples).map(|i| (i as f64 * 0.001).sin()).collect();
    let wav = encode(&samples, 44100, true);

    let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
    assert_eq!(data_size, 882_000);
    assert_eq!(wav.len(), 882_044);
}

// =========================================================================
// WavResult tests
// =========================================================================

#[test]
fn test_wav_result_fields() {
    let samples = vec![0.5, -0.5, 0.3, -0.3];
    let result = WavResult::from_mono(&samples, 44100);

    assert_eq!(result.sample_rate, 44100);
    assert_eq!(result.num_samples, 4);
    assert_eq!(result.pcm_hash.len(), 64);
    assert_eq!(result.wav_data.len(), 44 + 8);
}

#[test]
fn test_wav_result_duration_seconds() {
    let result = WavResult::from_mono(&vec![0.0; 44100], 44100);
    assert!((result.duration_seconds() - 1.0).abs() < 0.0001);

    let result_half = WavResult::from_mono(&vec![0.0; 22050], 44100);
    assert!((result_half.duration_seconds() - 0.5).abs() < 0.0001);
}

// =========================================================================
// Extract PCM data tests
// =========================================================================

#[test]
fn test_extract_pcm_data() {
    let wav = encode(&[0.5; 100], 44100, true);

    let pcm = extract_pcm_data(&wav).expect("should extract PCM");
    assert_eq!(pcm.len(), 200);
}

#[test]
fn test_extract_pcm_data_invalid_too_short() {
    let short_data = vec![0u8; 30];
    assert!(extract_pcm_data(&short_data).is_none());
}

#[test]
fn test_extract_pcm_data_invalid_no_riff() {
    let mut invalid = vec![0u8; 100];
    invalid[0..4].copy_from_slice(b"XXXX");
    assert!(extract_pcm_data(&invalid).is_none());
}

#[test]
fn test_extract_pcm_data_invalid_no_wave() {
    let mut invalid = vec![0u8; 100];
    invalid[0..4].copy_from_slice(b"RIFF");
    invalid[8..12].copy_from_slice(b"XXXX");
    assert!(extract_pcm_data(&invalid).is_none());
}

// =========================================================================
// write_wav function tests
// =========================================================================

#[test]
fn test_write_wav_to_writer() {
    let format = WavFormat::mono(44100);
    let pcm = samples_to_pcm16(&[0.5, -0.5]);

    let mut buffer = Vec::new();
    write_wav(&mut buffer, &format, &pcm).expect("should write successfully");

    assert_eq!(&buffer[0..4], b"RIFF");
    assert_eq!(buffer.len(), 44 + 4);
}

#[test]
fn test_write_wav_to_vec_matches_write_wav() {
    let format = WavFormat::mono(16000);
    let pcm = samples_to_pcm16(&[0.3; 10]);

    let wav_vec = write_wav_to_vec(&format, &pcm);

    let mut wav_writer = Vec::new();
    write_wav(&mut wav_writer, &format, &pcm).expect("should write");

    assert_eq!(wav_vec, wav_writer);
}
