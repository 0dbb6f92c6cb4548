use tracing::{error, info, info_span, warn};

use crate::{
    calculator::{evaluator::core::evaluate, validator::ValidationOutcome},
    error::CalculatorError,
    util::num::format_value,
};

/// Checks an expression before it is evaluated.
pub trait Validate {
    /// Validates `expression`.
    ///
    /// # Errors
    /// Returns an error only if validation itself could not be carried out.
    /// A rejected expression is an `Ok` outcome with failures.
    fn validate(&self, expression: &str) -> Result<ValidationOutcome, CalculatorError>;
}

/// Computes the value of an expression that passed validation.
pub trait Evaluate {
    /// Evaluates `expression`.
    ///
    /// # Errors
    /// Returns `CalculatorError::Evaluation` for arithmetic failures and any
    /// other variant for faults unrelated to the input.
    fn evaluate(&self, expression: &str) -> Result<f64, CalculatorError>;
}

/// The character-scan validator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpressionValidator;

impl Validate for ExpressionValidator {
    fn validate(&self, expression: &str) -> Result<ValidationOutcome, CalculatorError> {
        Ok(crate::calculator::validator::validate(expression))
    }
}

/// The two-pass precedence evaluator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpressionEvaluator;

impl Evaluate for ExpressionEvaluator {
    fn evaluate(&self, expression: &str) -> Result<f64, CalculatorError> {
        Ok(evaluate(expression)?)
    }
}

/// What a request produced, ready to be rendered by a transport.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The expression evaluated to this value.
    Ok(f64),
    /// The input was at fault; the message explains why.
    BadRequest(String),
    /// Something went wrong that the caller cannot fix.
    InternalError,
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "{}", format_value(*value)),
            Self::BadRequest(message) => write!(f, "{message}"),
            Self::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Handles calculation requests.
///
/// A `Calculator` validates every expression first and evaluates it only if
/// it is valid. It holds no state besides its two collaborators and can be
/// shared between threads when they can.
#[derive(Debug, Default, Clone)]
pub struct Calculator<V = ExpressionValidator, E = ExpressionEvaluator> {
    validator: V,
    evaluator: E,
}

impl Calculator {
    /// Creates a calculator with the default validator and evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self { validator: ExpressionValidator,
               evaluator: ExpressionEvaluator, }
    }
}

impl<V: Validate, E: Evaluate> Calculator<V, E> {
    /// Creates a calculator from custom collaborators.
    pub const fn with(validator: V, evaluator: E) -> Self {
        Self { validator,
               evaluator }
    }

    /// Validates, then evaluates `expression`.
    ///
    /// # Errors
    /// - `CalculatorError::Invalid` if validation rejected the expression; the
    ///   evaluator is not called.
    /// - Whatever the validator or evaluator returned otherwise.
    ///
    /// # Example
    /// ```
    /// use calcify::calculator::service::Calculator;
    ///
    /// let calculator = Calculator::new();
    /// assert_eq!(calculator.calculate("2+3*2").unwrap(), 8.0);
    /// assert!(calculator.calculate("2++3").is_err());
    /// ```
    pub fn calculate(&self, expression: &str) -> Result<f64, CalculatorError> {
        let outcome = self.validator.validate(expression)?;
        if !outcome.is_valid() {
            return Err(CalculatorError::Invalid(outcome));
        }

        self.evaluator.evaluate(expression)
    }

    /// Runs a request end to end and maps the outcome to a [`Response`].
    ///
    /// Client errors become [`Response::BadRequest`] with a message of the form
    /// `Invalid expression: ...` or `Failed to evaluate the expression : ...`.
    /// Faults of either collaborator, and evaluation errors that only
    /// malformed input can cause, become [`Response::InternalError`].
    ///
    /// # Example
    /// ```
    /// use calcify::calculator::service::{Calculator, Response};
    ///
    /// let calculator = Calculator::new();
    /// assert_eq!(calculator.handle("10/2*3"), Response::Ok(15.0));
    /// assert_eq!(calculator.handle("1/0"),
    ///            Response::BadRequest("Failed to evaluate the expression : \
    ///                                  Invalid calculation due to division by zero".into()));
    /// ```
    pub fn handle(&self, expression: &str) -> Response {
        let span = info_span!("calculate", expression);
        let _guard = span.enter();

        match self.calculate(expression) {
            Ok(value) => {
                info!(value, "expression evaluated");
                Response::Ok(value)
            },
            Err(err @ CalculatorError::Invalid(_)) => {
                info!(reason = %err, "expression rejected");
                Response::BadRequest(err.to_string())
            },
            Err(err) if err.is_client_error() => {
                warn!(reason = %err, "evaluation failed");
                Response::BadRequest(err.to_string())
            },
            Err(err) => {
                error!(error = %err, "internal fault while calculating");
                Response::InternalError
            },
        }
    }
}
