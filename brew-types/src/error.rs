use thiserror::Error;

/// What is wrong with a candidate set of weights.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CostViolation {
    /// The cost model needs exactly four weights.
    #[error("expected 4 weights (match, ins, del, subst), got {0}")]
    Arity(usize),
    /// The element could not be read as a number.
    #[error("weight {index} is not a number: {value:?}")]
    NotANumber { index: usize, value: String },
    /// NaN and infinities are not real numbers.
    #[error("weight {index} is not a real number")]
    NotReal { index: usize },
}

/// Errors raised while validating arguments at the public boundary.
/// The distance computation itself never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrewError {
    #[error("Brew-Distance: non-string input supplied ({which} is not valid UTF-8 text).")]
    InvalidInput { which: &'static str },
    #[error("Brew-Distance: invalid output parameter supplied ({0:?}).")]
    InvalidOutputMode(String),
    #[error("Brew-Distance: invalid cost parameter supplied ({0}).")]
    InvalidCost(#[from] CostViolation),
}
