// chordgen -- a chord-to-waveform generator
// Copyright (C) 2026  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `chordc` - pronounced *chord-c*, is the compiler for chord progressions to wav files.

use std::io;
use std::path::PathBuf;

use simple_logger;
use structopt::StructOpt;

use chordgen::synth;
use chordgen::tuning::Tuning;

#[derive(Debug, StructOpt)]
#[structopt(name = "chordc", about = "Compiling chords into music")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// The chords to play, each a comma-separated group of note names (e.g. "A4,C#5,E5").
    #[structopt(required = true)]
    chords: Vec<String>,

    /// Seconds each chord should sound, one value per chord. Every chord
    /// lasts one second if not given.
    #[structopt(short, long, use_delimiter = true)]
    durations: Option<Vec<f64>>,

    /// Note weightings, one occurrence per chord, each a comma-separated
    /// list with one weight per note. Pass "-" to keep a chord uniform.
    #[structopt(short, long, number_of_values = 1)]
    weights: Vec<String>,

    /// Output file. Defaults to my_chord.wav in the working directory.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level).unwrap();

    let tuning = Tuning::default();
    let mut chords = Vec::new();
    for group in &opt.chords {
        let mut notes = Vec::new();
        for name in group.split(',') {
            // Empty names resolve to nothing and are simply left out of the chord.
            if let Some(frequency) = tuning
                .resolve(name.trim())
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?
            {
                notes.push(frequency);
            }
        }
        chords.push(notes);
    }

    let weights = if opt.weights.is_empty() {
        None
    } else {
        let parsed: Result<Vec<Option<Vec<f64>>>, io::Error> = opt
            .weights
            .iter()
            .map(|group| {
                if group == "-" {
                    Ok(None)
                } else {
                    group
                        .split(',')
                        .map(|weight| {
                            weight.trim().parse::<f64>().map_err(|e| {
                                io::Error::new(io::ErrorKind::InvalidInput, e)
                            })
                        })
                        .collect::<Result<Vec<f64>, io::Error>>()
                        .map(Some)
                }
            })
            .collect();
        Some(parsed?)
    };

    synth::generate(
        &chords,
        opt.durations.as_deref(),
        weights.as_deref(),
        opt.output.as_deref(),
    )
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    Ok(())
}
