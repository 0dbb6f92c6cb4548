#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while evaluating an expression.
///
/// New failure kinds are added as new variants; callers should match on the
/// variant and fall back to [`EvaluationError::is_client_error`] for anything
/// they do not handle explicitly.
#[non_exhaustive]
pub enum EvaluationError {
    /// The right-hand side of a `/` was exactly zero.
    #[error("Invalid calculation due to division by zero")]
    DivisionByZero,
    /// An operand could not be read as a decimal number.
    #[error("Operand '{literal}' is not a valid number")]
    MalformedNumber {
        /// The operand text as it appeared in the expression.
        literal: String,
    },
    /// An operator has no operand on one of its sides.
    #[error("Operator at offset {offset} is missing an operand")]
    MissingOperand {
        /// Byte offset of the operator in the expression.
        offset: usize,
    },
    /// The expression contains nothing to evaluate.
    #[error("Expression contains no operands")]
    EmptyExpression,
}

impl EvaluationError {
    /// Returns `true` if the error was caused by the caller's arithmetic and
    /// should be reported back as a client error.
    ///
    /// Every other variant means malformed input reached the evaluator, which
    /// validation is supposed to prevent.
    ///
    /// # Example
    /// ```
    /// use calcify::error::EvaluationError;
    ///
    /// assert!(EvaluationError::DivisionByZero.is_client_error());
    /// assert!(!EvaluationError::EmptyExpression.is_client_error());
    /// ```
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }
}
