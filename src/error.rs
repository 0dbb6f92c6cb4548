/// Validation errors.
///
/// One variant per structural rule an expression must satisfy before any
/// arithmetic is attempted. These are always caused by the caller's input.
pub mod validation_error;
/// Evaluation errors.
///
/// Contains all errors that can be raised while reducing an expression to its
/// value. Only division by zero is a designed failure; the other variants
/// describe input that should have been rejected by validation.
pub mod evaluation_error;
/// Errors of the combined validate-then-evaluate pipeline.
pub mod calculator_error;

pub use calculator_error::CalculatorError;
pub use evaluation_error::EvaluationError;
pub use validation_error::ValidationError;
