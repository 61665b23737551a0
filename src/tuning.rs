// chordgen -- a chord-to-waveform generator
// Copyright (C) 2026  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use log::warn;

use crate::note::{Note, NoteError};

/// Defines a tuning by assigning a frequency to a certain note.
/// This defines the frequencies of all other notes at a standard tuning of 12 half-tones per octave.
///
/// # Examples
///
/// ```
/// use chordgen::note::*;
/// use chordgen::tuning::*;
/// assert_eq!(Tuning::default().frequency(Note::from_key(37)), 220.0);
/// assert_eq!(Tuning::default().frequency(Note::from_key(61)), 880.0);
/// ```
pub struct Tuning {
    pub reference_note: Note,
    pub reference_frequency: f64,
}

impl Tuning {
    /// Return the frequency of a note relative to this tuning.
    pub fn frequency(&self, other: Note) -> f64 {
        let semitones = other.key() - self.reference_note.key();
        let octaves = semitones as f64 / 12.0;
        self.reference_frequency * 2.0f64.powf(octaves)
    }

    /// Resolve a note name to its frequency relative to this tuning.
    ///
    /// An empty name is not an error, it resolves to `None` so that callers
    /// can treat "no note" explicitly. Anything else that is not a valid
    /// note name fails with [`NoteError::InvalidFormat`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chordgen::tuning::*;
    /// assert_eq!(Tuning::default().resolve("A4"), Ok(Some(440.0)));
    /// assert_eq!(Tuning::default().resolve(""), Ok(None));
    /// assert!(Tuning::default().resolve("H4").is_err());
    /// ```
    pub fn resolve(&self, name: &str) -> Result<Option<f64>, NoteError> {
        if name.is_empty() {
            warn!("no note name given, resolving to nothing");
            return Ok(None);
        }
        let note = Note::parse(name)?;
        Ok(Some(self.frequency(note)))
    }
}

/// Default concert tuning, where A4 (key 49) corresponds to 440 Hz.
impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            reference_note: Note::from_key(49),
            reference_frequency: 440.0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn concert_pitch() {
        let freq = Tuning::default().resolve("A4").unwrap().unwrap();
        assert!((freq - 440.0).abs() < EPSILON);
    }

    #[test]
    fn octave_doubles() {
        let tuning = Tuning::default();
        let a4 = tuning.resolve("A4").unwrap().unwrap();
        let a5 = tuning.resolve("A5").unwrap().unwrap();
        assert!((a5 - 2.0 * a4).abs() < EPSILON);
    }

    #[test]
    fn semitone_ratio() {
        let tuning = Tuning::default();
        let c4 = tuning.resolve("C4").unwrap().unwrap();
        let c_sharp_4 = tuning.resolve("C#4").unwrap().unwrap();
        assert!((c_sharp_4 / c4 - 2.0f64.powf(1.0 / 12.0)).abs() < EPSILON);
    }

    #[test]
    fn lowest_key() {
        // A0 is the leftmost key of the piano.
        let a0 = Tuning::default().resolve("A0").unwrap().unwrap();
        assert!((a0 - 27.5).abs() < EPSILON);
    }

    #[test]
    fn missing_name_resolves_to_nothing() {
        assert_eq!(Tuning::default().resolve(""), Ok(None));
    }

    #[test]
    fn invalid_name_is_an_error() {
        assert!(Tuning::default().resolve("H4").is_err());
    }
}
