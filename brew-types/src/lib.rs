//! Shared types for the Brew edit distance: costs, positions, edit tags,
//! the cost model, and the run-length encoded edit string.

pub mod cigar;
pub mod cost_model;
pub mod error;

// Re-export types for convenience of `use brew_types::*;`.
pub use cigar::*;
pub use cost_model::*;
pub use error::*;

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Costs are arbitrary real weights.
pub type Cost = f64;

/// A text to compare, decoded to Unicode scalar values.
pub type Text = Vec<char>;

/// Index into a text.
pub type I = usize;

/// A position `(i, j)` in the DP table: `i` characters of the source against
/// `j` characters of the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pos(pub I, pub I);

impl Pos {
    pub fn root() -> Self {
        Pos(0, 0)
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// A single edit step on the minimal path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tag {
    Match,
    Ins,
    Del,
    Subst,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Match => "MATCH",
            Tag::Ins => "INS",
            Tag::Del => "DEL",
            Tag::Subst => "SUBST",
        }
    }

    /// The `(di, dj)` step this edit takes through the table, assuming the
    /// tag was assigned by the candidate that produced it.
    pub fn delta(&self) -> Pos {
        match self {
            Tag::Match | Tag::Subst => Pos(1, 1),
            Tag::Ins => Pos(0, 1),
            Tag::Del => Pos(1, 0),
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "MATCH" => Tag::Match,
            "INS" => Tag::Ins,
            "DEL" => Tag::Del,
            "SUBST" => Tag::Subst,
            _ => return Err(format!("Unknown edit tag {s:?}")),
        })
    }
}

/// Decode raw bytes into a `Text`, comparing by code point rather than byte.
pub fn decode(bytes: &[u8], which: &'static str) -> Result<Text, BrewError> {
    std::str::from_utf8(bytes)
        .map(|s| s.chars().collect())
        .map_err(|_| BrewError::InvalidInput { which })
}

/// Render a list of tags the way the demonstration prints them.
pub fn tags_to_string(tags: &[Tag]) -> String {
    let inner: Vec<&str> = tags.iter().map(Tag::as_str).collect();
    format!("[{}]", inner.join(", "))
}
