//! This namespace contains all the parts converting from chord data to wave data.

pub mod oscillator;

use std::path::{Path, PathBuf};

use log::debug;
use snafu::Snafu;

use crate::output;
use crate::wave::AudioBuffer;

use self::oscillator::Oscillator;

/// Samples per second of the generated audio signal.
pub const SAMPLE_RATE: u32 = 44100;

/// Amplitude scale applied to the unit-range signal when quantizing.
pub const OUTPUT_AMPLITUDE: f64 = 8000.0;

/// File the generated audio is saved to when the caller does not name one.
pub const DEFAULT_OUTPUT: &str = "my_chord.wav";

/// Ways in which generating a chord sequence can fail.
///
/// All validation happens before any synthesis or I/O, an invalid call
/// never leaves a partial file behind.
#[derive(Debug, Snafu)]
pub enum SynthError {
    #[snafu(display("expected a duration for each of the {} chords, got {}", chords, given))]
    DurationCount { chords: usize, given: usize },
    #[snafu(display("expected a weighting for each of the {} chords, got {}", chords, given))]
    WeightCount { chords: usize, given: usize },
    #[snafu(display(
        "chord {} has {} notes, but its weighting has {} entries",
        chord,
        notes,
        given
    ))]
    WeightLength {
        chord: usize,
        notes: usize,
        given: usize,
    },
    #[snafu(display("could not save the generated audio: {}", source))]
    Save { source: hound::Error },
}

/// Compute the sine wave of a chord sequence.
///
/// Every chord is a group of frequencies sounding simultaneously. Chords
/// default to one second each when no `durations` are given, and to a
/// uniform weighting of `1/n` per note when no `weights` are given. A
/// weighting of `None` for an individual chord also means uniform.
pub fn render(
    chords: &[Vec<f64>],
    durations: Option<&[f64]>,
    weights: Option<&[Option<Vec<f64>>]>,
) -> Result<AudioBuffer, SynthError> {
    validate(chords, durations, weights)?;

    // Durations are truncated toward zero when discretized, a chord is
    // never longer than the wall-clock time the caller asked for.
    let sample_counts: Vec<usize> = match durations {
        Some(durations) => durations
            .iter()
            .map(|duration| (f64::from(SAMPLE_RATE) * duration) as usize)
            .collect(),
        None => vec![SAMPLE_RATE as usize; chords.len()],
    };

    let mut buffer = AudioBuffer::new(sample_counts.iter().sum());
    let mut offset = 0;
    for (i, (notes, &sample_count)) in chords.iter().zip(&sample_counts).enumerate() {
        let weighting = weights.and_then(|weights| weights[i].as_deref());
        let mut voices: Vec<(Oscillator, f64)> = notes
            .iter()
            .enumerate()
            .map(|(j, &frequency)| {
                let weight = weighting.map_or(1.0 / notes.len() as f64, |weighting| weighting[j]);
                (Oscillator::new(f64::from(SAMPLE_RATE), frequency), weight)
            })
            .collect();

        for sample in buffer.samples_mut()[offset..offset + sample_count].iter_mut() {
            *sample = voices
                .iter_mut()
                .map(|(osc, weight)| *weight * osc.next_sample())
                .sum();
        }
        offset += sample_count;
    }
    debug!("sine wave has been computed");
    Ok(buffer)
}

/// Render a chord sequence and save it as a mono 16-bit WAV file.
///
/// Saves to [`DEFAULT_OUTPUT`] in the working directory when no `filename`
/// is given. Returns the path the audio was saved to.
pub fn generate(
    chords: &[Vec<f64>],
    durations: Option<&[f64]>,
    weights: Option<&[Option<Vec<f64>>]>,
    filename: Option<&Path>,
) -> Result<PathBuf, SynthError> {
    let buffer = render(chords, durations, weights)?;
    let frames = buffer.quantize(OUTPUT_AMPLITUDE / 2.0);
    let path = filename.map_or_else(|| PathBuf::from(DEFAULT_OUTPUT), Path::to_path_buf);
    output::wav::write_wav(&path, SAMPLE_RATE, &frames)
        .map_err(|source| SynthError::Save { source })?;
    debug!("save to {} complete", path.display());
    Ok(path)
}

fn validate(
    chords: &[Vec<f64>],
    durations: Option<&[f64]>,
    weights: Option<&[Option<Vec<f64>>]>,
) -> Result<(), SynthError> {
    if let Some(durations) = durations {
        if durations.len() != chords.len() {
            return Err(SynthError::DurationCount {
                chords: chords.len(),
                given: durations.len(),
            });
        }
    }
    if let Some(weights) = weights {
        if weights.len() != chords.len() {
            return Err(SynthError::WeightCount {
                chords: chords.len(),
                given: weights.len(),
            });
        }
        for (i, (notes, weighting)) in chords.iter().zip(weights).enumerate() {
            if let Some(weighting) = weighting {
                if weighting.len() != notes.len() {
                    return Err(SynthError::WeightLength {
                        chord: i,
                        notes: notes.len(),
                        given: weighting.len(),
                    });
                }
            }
        }
    }
    Ok(())
}
