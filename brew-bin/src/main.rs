use brew_algos::Output;
use brew_bin::cli::Cli;
use brew_types::Text;
use clap::Parser;
use log::{info, warn};
use serde::Serialize;
use std::{ops::ControlFlow, process::ExitCode, time::Instant};

#[derive(Serialize)]
struct Record<'a> {
    source: &'a str,
    target: &'a str,
    result: &'a Output,
    #[serde(skip_serializing_if = "Option::is_none")]
    cigar: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();

    if !args.distance.cost.match_is_minimal() && !args.distance.strict {
        warn!("match weight is not the smallest; consider --strict for exact edit labels");
    }
    let dp = args.distance.make_aligner();
    let start = Instant::now();
    let mut pairs = 0;

    if args.input.is_none() && !args.json {
        println!(
            "Brew-Distance: determining results for '{}' vs. '{}':",
            args.source, args.target
        );
    }

    let result = args.process_input_pairs(|a, b| {
        let (x, y): (Text, Text) = (a.chars().collect(), b.chars().collect());
        let path = dp.edit_path(&x, &y);
        let cigar = args.cigar.then(|| path.cigar().to_string());
        let output = Output::project(path, args.distance.output);
        pairs += 1;

        if args.json {
            let record = Record {
                source: a,
                target: b,
                result: &output,
                cigar,
            };
            println!("{}", serde_json::to_string(&record)?);
        } else {
            match cigar {
                Some(cigar) => println!("{output}\t{cigar}"),
                None => println!("{output}"),
            }
        }
        Ok(ControlFlow::Continue(()))
    });

    info!("{pairs} pairs in {:.3?}", start.elapsed());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn cli_test() {
        <brew_bin::cli::Cli as clap::CommandFactory>::command().debug_assert();
    }
}
