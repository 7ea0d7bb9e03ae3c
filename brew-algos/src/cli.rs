use crate::{BrewDp, OutputMode, Tagging};
use brew_types::{BrewError, CostModel};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[clap(next_help_heading = "Distance")]
pub struct DistanceArgs {
    /// Which part of the result to report: distance, edits, or both.
    #[clap(short, long, default_value = "both", value_parser = parse_mode)]
    pub output: OutputMode,

    /// Weights `match,ins,del,subst`.
    #[clap(short, long, default_value = "0,1,1,1", value_parser = parse_cost, allow_hyphen_values = true)]
    pub cost: CostModel,

    /// Label every edit by the step taken, instead of reporting any step
    /// that adds no cost as a MATCH.
    #[clap(long)]
    pub strict: bool,
}

fn parse_mode(s: &str) -> Result<OutputMode, BrewError> {
    s.parse()
}

fn parse_cost(s: &str) -> Result<CostModel, BrewError> {
    s.parse()
}

impl DistanceArgs {
    pub fn tagging(&self) -> Tagging {
        if self.strict {
            Tagging::Strict
        } else {
            Tagging::Compat
        }
    }

    pub fn make_aligner(&self) -> BrewDp {
        BrewDp::new(self.cost, self.tagging())
    }
}
