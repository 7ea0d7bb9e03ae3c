//! The Brew edit distance: a weighted Levenshtein distance that also reports
//! the edits on a minimal path.
//!
//! ```
//! use brew_algos::{distance, Output, OutputMode};
//! use brew_types::{CostModel, Tag::*};
//!
//! let out = distance("foo", "fou", OutputMode::Both, &CostModel::default());
//! assert_eq!(out, Output::Both(1., vec![Match, Match, Subst]));
//! ```

use brew_types::*;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub mod cli;
pub mod nw;

pub use nw::{BrewDp, EditPath, Tagging};

#[cfg(test)]
mod tests;

/// Which part of the result to return.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Distance,
    Edits,
    #[default]
    Both,
}

impl FromStr for OutputMode {
    type Err = BrewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "distance" => OutputMode::Distance,
            "edits" => OutputMode::Edits,
            "both" => OutputMode::Both,
            _ => return Err(BrewError::InvalidOutputMode(s.to_string())),
        })
    }
}

/// The result of [`distance`], projected according to the [`OutputMode`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    Distance(Cost),
    Edits(Vec<Tag>),
    Both(Cost, Vec<Tag>),
}

impl Output {
    pub fn project(path: EditPath, mode: OutputMode) -> Self {
        match mode {
            OutputMode::Distance => Output::Distance(path.cost),
            OutputMode::Edits => Output::Edits(path.operations),
            OutputMode::Both => Output::Both(path.cost, path.operations),
        }
    }

    pub fn cost(&self) -> Option<Cost> {
        match self {
            Output::Distance(c) | Output::Both(c, _) => Some(*c),
            Output::Edits(_) => None,
        }
    }

    pub fn edits(&self) -> Option<&[Tag]> {
        match self {
            Output::Edits(e) | Output::Both(_, e) => Some(e),
            Output::Distance(_) => None,
        }
    }
}

impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Distance(c) => write!(f, "{c}"),
            Output::Edits(e) => f.write_str(&tags_to_string(e)),
            Output::Both(c, e) => write!(f, "({c}, {})", tags_to_string(e)),
        }
    }
}

/// Brew edit distance between `source` and `target`, comparing characters.
pub fn distance(source: &str, target: &str, mode: OutputMode, cm: &CostModel) -> Output {
    distance_with(source, target, mode, cm, Tagging::Compat)
}

/// As [`distance`], with an explicit choice of how edits are labelled.
pub fn distance_with(
    source: &str,
    target: &str,
    mode: OutputMode,
    cm: &CostModel,
    tagging: Tagging,
) -> Output {
    let a: Text = source.chars().collect();
    let b: Text = target.chars().collect();
    let path = BrewDp::new(*cm, tagging).edit_path(&a, &b);
    Output::project(path, mode)
}

/// Validate raw arguments and compute the distance.
///
/// The inputs must be UTF-8 text, `mode` one of `distance`, `edits`, `both`,
/// and `cost` four comma separated real numbers (`None` means `0,1,1,1`).
pub fn distance_bytes(
    source: &[u8],
    target: &[u8],
    mode: &str,
    cost: Option<&str>,
) -> Result<Output, BrewError> {
    let a = decode(source, "source")?;
    let b = decode(target, "target")?;
    let mode: OutputMode = mode.parse()?;
    let cm = match cost {
        Some(cost) => cost.parse()?,
        None => CostModel::default(),
    };
    let path = BrewDp::new(cm, Tagging::Compat).edit_path(&a, &b);
    Ok(Output::project(path, mode))
}
