/// Numeric parsing and formatting helpers.
///
/// This module turns operand text into `f64` values and renders results the
/// same way regardless of locale. Every conversion that can fail returns a
/// `Result` carrying an [`EvaluationError`](crate::error::EvaluationError).
pub mod num;
