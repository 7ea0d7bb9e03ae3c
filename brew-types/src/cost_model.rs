//! This module contains the four-weight `CostModel` and its validation.

use crate::{BrewError, Cost, CostViolation};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Weights for the four edit operations.
///
/// The tie-breaking rule of the engine assumes `matching` is strictly smaller
/// than the other three weights. This is not enforced; see
/// [`CostModel::match_is_minimal`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// Cost of aligning two equal characters.
    pub matching: Cost,
    /// Cost of inserting a character of the target.
    pub ins: Cost,
    /// Cost of deleting a character of the source.
    pub del: Cost,
    /// Cost of replacing a character by a different one.
    pub sub: Cost,
}

impl Default for CostModel {
    fn default() -> Self {
        Self::unit()
    }
}

impl CostModel {
    /// Build a cost model. Zero and negative weights are accepted; only
    /// NaN and infinities are rejected.
    ///
    /// This is stricter than the Python Brew-Distance package, whose
    /// `numbers.Real` check lets `nan` and `inf` through. A NaN weight makes
    /// every comparison in the table false, so the result would depend on
    /// candidate order alone.
    pub fn new(matching: Cost, ins: Cost, del: Cost, sub: Cost) -> Result<Self, BrewError> {
        Self {
            matching,
            ins,
            del,
            sub,
        }
        .validate()
    }

    /// Match 0, everything else 1.
    pub fn unit() -> Self {
        Self {
            matching: 0.,
            ins: 1.,
            del: 1.,
            sub: 1.,
        }
    }

    /// Returns the model unchanged when all four weights are real numbers.
    pub fn validate(self) -> Result<Self, BrewError> {
        for (index, w) in self.weights().into_iter().enumerate() {
            if !w.is_finite() {
                return Err(CostViolation::NotReal { index }.into());
            }
        }
        Ok(self)
    }

    /// The weights in `(match, ins, del, subst)` order.
    pub fn weights(&self) -> [Cost; 4] {
        [self.matching, self.ins, self.del, self.sub]
    }

    /// The same model with insertion and deletion weights swapped.
    pub fn mirrored(&self) -> Self {
        Self {
            ins: self.del,
            del: self.ins,
            ..*self
        }
    }

    /// Whether the match weight is strictly below the other three, which is
    /// what makes the default tagging reliable.
    pub fn match_is_minimal(&self) -> bool {
        self.matching < self.ins && self.matching < self.del && self.matching < self.sub
    }

    /// Cost of the diagonal step between `x` and `y`.
    #[inline]
    pub fn sub_cost(&self, x: char, y: char) -> Cost {
        if x == y {
            self.matching
        } else {
            self.sub
        }
    }
}

impl TryFrom<&[Cost]> for CostModel {
    type Error = BrewError;

    fn try_from(weights: &[Cost]) -> Result<Self, Self::Error> {
        match *weights {
            [matching, ins, del, sub] => Self::new(matching, ins, del, sub),
            _ => Err(CostViolation::Arity(weights.len()).into()),
        }
    }
}

/// Parses `m,i,d,s`, optionally wrapped in parentheses.
impl FromStr for CostModel {
    type Err = BrewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(s);
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(CostViolation::Arity(parts.len()).into());
        }
        let mut weights = [0.; 4];
        for (index, (w, part)) in weights.iter_mut().zip(&parts).enumerate() {
            *w = part.parse().map_err(|_| CostViolation::NotANumber {
                index,
                value: part.to_string(),
            })?;
        }
        Self::try_from(&weights[..])
    }
}
