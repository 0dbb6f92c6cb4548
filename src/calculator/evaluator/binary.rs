use crate::{calculator::evaluator::core::EvalResult, error::EvaluationError, term::Operator};

/// Applies an arithmetic operator to two operands.
///
/// Plain IEEE-754 semantics apply; overflow to infinity is not an error. Only
/// a divisor that compares equal to zero (which includes `-0.0`) is rejected.
///
/// # Errors
/// Returns `EvaluationError::DivisionByZero` when `op` is [`Operator::Div`]
/// and `right` is zero.
///
/// # Example
/// ```
/// use calcify::{calculator::evaluator::binary::apply, error::EvaluationError, term::Operator};
///
/// assert_eq!(apply(Operator::Sub, 10.0, 4.0).unwrap(), 6.0);
/// assert_eq!(apply(Operator::Div, 5.0, 2.0).unwrap(), 2.5);
/// assert_eq!(apply(Operator::Div, 1.0, 0.0).unwrap_err(),
///            EvaluationError::DivisionByZero);
/// ```
pub fn apply(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Sub => Ok(left - right),
        Operator::Mul => Ok(left * right),
        Operator::Div => {
            if right == 0.0 {
                return Err(EvaluationError::DivisionByZero);
            }
            Ok(left / right)
        },
    }
}
