use phrasecheck::application::ports::{TranscodeError, Transcoder};
use phrasecheck::domain::WaveformFormat;
use phrasecheck::infrastructure::audio::{FfmpegTranscoder, check_ffmpeg_binary};

fn build_wav(sample_rate: u32, channels: u16, samples: &[i16]) -> Vec<u8> {
    let data_size = (samples.len() * 2) as u32;
    let block_align = channels * 2;
    let byte_rate = sample_rate * block_align as u32;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_size).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&channels.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }
    wav
}

fn ffmpeg_available() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[tokio::test]
async fn given_stereo_wav_when_transcoding_then_writes_mono_pcm_at_target_rate() {
    if !ffmpeg_available() {
        return;
    }

    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("input.wav");
    let output = dir.path().join("waveform.wav");
    std::fs::write(&input, build_wav(22_050, 2, &vec![0i16; 4410])).unwrap();

    let transcoder = FfmpegTranscoder::new("ffmpeg", WaveformFormat::new(44_100));
    transcoder.transcode(&input, &output).await.unwrap();

    let wav = std::fs::read(&output).unwrap();
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(read_u16(&wav, 20), 1, "PCM format");
    assert_eq!(read_u16(&wav, 22), 1, "mono");
    assert_eq!(read_u32(&wav, 24), 44_100);
    assert_eq!(read_u16(&wav, 34), 16, "16-bit samples");
}

#[tokio::test]
async fn given_existing_output_when_transcoding_then_output_is_overwritten() {
    if !ffmpeg_available() {
        return;
    }

    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("input.wav");
    let output = dir.path().join("waveform.wav");
    std::fs::write(&input, build_wav(16_000, 1, &vec![0i16; 1600])).unwrap();
    std::fs::write(&output, b"stale").unwrap();

    let transcoder = FfmpegTranscoder::new("ffmpeg", WaveformFormat::default());
    transcoder.transcode(&input, &output).await.unwrap();

    let wav = std::fs::read(&output).unwrap();
    assert_eq!(&wav[0..4], b"RIFF");
}

#[tokio::test]
async fn given_corrupted_input_when_transcoding_then_returns_failed() {
    if !ffmpeg_available() {
        return;
    }

    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("garbage.bin");
    std::fs::write(&input, vec![0xFFu8; 128]).unwrap();

    let transcoder = FfmpegTranscoder::new("ffmpeg", WaveformFormat::default());
    let result = transcoder
        .transcode(&input, &dir.path().join("waveform.wav"))
        .await;

    assert!(matches!(result, Err(TranscodeError::Failed(_))));
}

#[tokio::test]
async fn given_missing_input_when_transcoding_then_returns_input_missing() {
    let dir = tempfile::TempDir::new().unwrap();

    let transcoder = FfmpegTranscoder::new("ffmpeg", WaveformFormat::default());
    let result = transcoder
        .transcode(
            &dir.path().join("does-not-exist.mp4"),
            &dir.path().join("waveform.wav"),
        )
        .await;

    assert!(matches!(result, Err(TranscodeError::InputMissing(_))));
}

#[tokio::test]
async fn given_missing_binary_when_transcoding_then_returns_unavailable() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("input.wav");
    std::fs::write(&input, build_wav(16_000, 1, &[0i16; 16])).unwrap();

    let transcoder =
        FfmpegTranscoder::new("definitely-not-ffmpeg-binary", WaveformFormat::default());
    let result = transcoder
        .transcode(&input, &dir.path().join("waveform.wav"))
        .await;

    assert!(matches!(result, Err(TranscodeError::Unavailable(_))));
}

#[tokio::test]
async fn given_missing_binary_when_checking_then_returns_unavailable() {
    let result = check_ffmpeg_binary("definitely-not-ffmpeg-binary").await;
    assert!(matches!(result, Err(TranscodeError::Unavailable(_))));
}

#[tokio::test]
async fn given_ffmpeg_in_path_when_checking_binary_then_returns_ok() {
    if !ffmpeg_available() {
        return;
    }

    assert!(check_ffmpeg_binary("ffmpeg").await.is_ok());
}

#[test]
fn given_configured_rate_when_reading_format_then_reports_it() {
    let transcoder = FfmpegTranscoder::new("ffmpeg", WaveformFormat::new(16_000));
    assert_eq!(transcoder.format().sample_rate_hz, 16_000);
}
