use brew_algos::cli::DistanceArgs;
use brew_types::BrewError;
use clap::{value_parser, Parser};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    ops::ControlFlow,
    path::PathBuf,
};

/// Compute the Brew edit distance between pairs of strings.
#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(author, about, disable_version_flag(true))]
pub struct Cli {
    /// The string to transform.
    #[clap(default_value = "foo")]
    pub source: String,

    /// The string to transform into.
    #[clap(default_value = "fou")]
    pub target: String,

    /// A .txt file where each two consecutive lines form a pair.
    /// Overrides the positional strings.
    #[clap(short, long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub input: Option<PathBuf>,

    #[clap(flatten)]
    pub distance: DistanceArgs,

    /// Also print the run-length encoded edits.
    #[clap(long)]
    pub cigar: bool,

    /// Print one JSON object per pair.
    #[clap(long)]
    pub json: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("could not read input: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Brew(#[from] BrewError),
    #[error("could not serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

impl Cli {
    /// Call the given function for each pair in the input.
    /// The first error, from reading or from `run_pair`, stops the loop.
    pub fn process_input_pairs(
        &self,
        mut run_pair: impl FnMut(&str, &str) -> Result<ControlFlow<()>, InputError>,
    ) -> Result<(), InputError> {
        let Some(input) = &self.input else {
            run_pair(&self.source, &self.target)?;
            return Ok(());
        };
        let f = BufReader::new(File::open(input)?);
        for (a, b) in f.split(b'\n').tuples() {
            let (a, b) = (a?, b?);
            let a = decode_line(&a, "source")?;
            let b = decode_line(&b, "target")?;
            if let ControlFlow::Break(()) = run_pair(a, b)? {
                break;
            }
        }
        Ok(())
    }
}

fn decode_line<'a>(line: &'a [u8], which: &'static str) -> Result<&'a str, InputError> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    std::str::from_utf8(line).map_err(|_| BrewError::InvalidInput { which }.into())
}
