#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
/// Represents a single failed validation rule.
///
/// Variants are declared in priority order: when several rules fail, the
/// first one in this list is the reason reported to the caller.
pub enum ValidationError {
    /// The expression is empty or contains only whitespace.
    #[error("Expression is empty.")]
    Empty,
    /// The expression does not start and end with a digit.
    #[error("Expression is invalid.")]
    InvalidBoundary,
    /// Two or more non-digit characters appear next to each other.
    ///
    /// Only digit-ness is inspected, so whitespace next to an operator or two
    /// consecutive spaces trigger this error as well.
    #[error("Expression contains adjacent operators.")]
    AdjacentOperators,
    /// A character other than a digit, `+ - * /` or whitespace was found.
    #[error("Expression contains invalid characters.")]
    InvalidCharacters,
}

impl ValidationError {
    /// All rules, highest priority first.
    pub const ALL: [Self; 4] = [Self::Empty,
                                Self::InvalidBoundary,
                                Self::AdjacentOperators,
                                Self::InvalidCharacters];
}
