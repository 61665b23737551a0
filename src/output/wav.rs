//! Easy interface for saving quantized audio as an uncompressed WAV file.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

/// Write mono 16-bit integer frames as an uncompressed PCM WAV file.
///
/// The file is fully written and finalized before this returns.
pub fn write_wav(path: &Path, sample_rate: u32, frames: &[i16]) -> Result<(), hound::Error> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for &frame in frames {
        writer.write_sample(frame)?;
    }
    writer.finalize()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn frames_survive_the_container() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frames.wav");
        let frames = [0, 4000, -4000, i16::MAX, i16::MIN];
        write_wav(&path, 44100, &frames).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let read: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(read, frames);
    }
}
