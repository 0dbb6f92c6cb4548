use crate::{calculator::evaluator::core::EvalResult, error::EvaluationError};

/// Parses an operand as an `f64`.
///
/// Surrounding whitespace is ignored. Anything else that is not a plain
/// decimal number is rejected, including interior whitespace, signs, and the
/// special spellings `inf` and `NaN` that `str::parse` would otherwise
/// accept.
///
/// ## Errors
/// Returns `EvaluationError::MalformedNumber` if the text is not a decimal
/// number.
///
/// ## Example
/// ```
/// use calcify::{error::EvaluationError, util::num::parse_operand};
///
/// assert_eq!(parse_operand("12").unwrap(), 12.0);
/// assert_eq!(parse_operand(" 7 ").unwrap(), 7.0);
///
/// let err = parse_operand("1 2").unwrap_err();
/// assert!(matches!(err, EvaluationError::MalformedNumber { .. }));
/// ```
pub fn parse_operand(text: &str) -> EvalResult<f64> {
    let trimmed = text.trim();
    let decimal = !trimmed.is_empty()
                  && trimmed.bytes().all(|b| b.is_ascii_digit() || b == b'.')
                  && trimmed.bytes().any(|b| b.is_ascii_digit());

    if !decimal {
        return Err(EvaluationError::MalformedNumber { literal: text.to_string() });
    }

    trimmed.parse()
           .map_err(|_| EvaluationError::MalformedNumber { literal: text.to_string() })
}

/// Renders a value with the shortest representation that parses back to the
/// same `f64`.
///
/// Integral values print without a fractional part. Non-finite values are
/// spelled `Infinity`, `-Infinity` and `NaN`.
///
/// ## Example
/// ```
/// use calcify::util::num::format_value;
///
/// assert_eq!(format_value(8.0), "8");
/// assert_eq!(format_value(5.5), "5.5");
/// assert_eq!(format_value(-1.0), "-1");
/// assert_eq!(format_value(f64::INFINITY), "Infinity");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string();
    }
    format!("{value}")
}
