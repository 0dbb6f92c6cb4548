use crate::{calculator::validator::ValidationOutcome, error::EvaluationError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// Represents every way a validate-then-evaluate request can fail.
///
/// The `Display` output of the first two variants is the message returned to
/// the client.
pub enum CalculatorError {
    /// The expression was rejected before evaluation.
    #[error("Invalid expression: {0}")]
    Invalid(ValidationOutcome),
    /// The expression was valid but could not be evaluated.
    #[error("Failed to evaluate the expression : {0}")]
    Evaluation(#[from] EvaluationError),
    /// A collaborator failed for a reason unrelated to the input.
    #[error("Internal fault: {0}")]
    Fault(String),
}

impl CalculatorError {
    /// Returns `true` if the error should be reported as a client error.
    ///
    /// # Example
    /// ```
    /// use calcify::error::{CalculatorError, EvaluationError};
    ///
    /// assert!(CalculatorError::from(EvaluationError::DivisionByZero).is_client_error());
    /// assert!(!CalculatorError::Fault("disk on fire".into()).is_client_error());
    /// ```
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        match self {
            Self::Invalid(_) => true,
            Self::Evaluation(error) => error.is_client_error(),
            Self::Fault(_) => false,
        }
    }
}
