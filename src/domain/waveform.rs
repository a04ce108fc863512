pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 44_100;

/// Target format for extracted audio: mono, signed 16-bit little-endian PCM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveformFormat {
    pub sample_rate_hz: u32,
}

impl WaveformFormat {
    pub const CHANNELS: u8 = 1;
    pub const CODEC: &'static str = "pcm_s16le";
    pub const RECOGNIZER_ENCODING: &'static str = "LINEAR16";

    pub fn new(sample_rate_hz: u32) -> Self {
        Self { sample_rate_hz }
    }
}

impl Default for WaveformFormat {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE_HZ)
    }
}
