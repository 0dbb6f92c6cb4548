//! # calcify
//!
//! calcify validates and evaluates flat arithmetic expressions written in
//! Rust. An expression is a sequence of non-negative decimal numbers joined by
//! `+`, `-`, `*` and `/`; multiplication and division bind tighter than
//! addition and subtraction, and operators of the same tier apply left to
//! right. Parentheses, unary minus and exponents are not supported.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Validation, tokenization, evaluation and request handling.
///
/// This module holds the whole pipeline: the validator decides whether an
/// expression may be evaluated, the lexer splits it into terms, the evaluator
/// reduces those terms to a number, and the service ties the steps together
/// for a caller.
///
/// # Responsibilities
/// - Rejects malformed expressions with a deterministic reason.
/// - Evaluates valid expressions with two precedence tiers.
/// - Separates client errors from internal faults.
pub mod calculator;
/// Error types for validation and evaluation.
///
/// Validation and evaluation failures are two separate taxonomies. Both are
/// returned as data, never raised as panics.
///
/// # Responsibilities
/// - Defines one error enum per phase with fixed user-facing messages.
/// - Classifies evaluation errors as client errors or internal faults.
pub mod error;
/// Operators, operands and the flat term sequence.
///
/// These types describe what the lexer produces and what the evaluator
/// collapses. Operands keep their source text until their value is needed.
pub mod term;
/// Numeric parsing and formatting helpers.
pub mod util;

pub use crate::{
    calculator::{
        evaluator::core::{EvalResult, evaluate},
        service::{Calculator, Response},
        validator::{ValidationOutcome, validate},
    },
    error::{CalculatorError, EvaluationError, ValidationError},
};

/// Validates an expression and, if it is valid, evaluates it.
///
/// This is the shortest path from a string to a number. Use
/// [`Calculator::handle`] instead when the outcome has to be mapped to a
/// client response.
///
/// # Errors
/// Returns `CalculatorError::Invalid` with every failed rule if the expression
/// is malformed, or `CalculatorError::Evaluation` if evaluation fails.
///
/// # Examples
/// ```
/// use calcify::{CalculatorError, EvaluationError, calculate};
///
/// assert_eq!(calculate("2+3*2").unwrap(), 8.0);
///
/// let err = calculate("5/0").unwrap_err();
/// assert_eq!(err, CalculatorError::Evaluation(EvaluationError::DivisionByZero));
///
/// let err = calculate("2++3").unwrap_err();
/// assert_eq!(err.to_string(),
///            "Invalid expression: Expression contains adjacent operators.");
/// ```
pub fn calculate(expression: &str) -> Result<f64, CalculatorError> {
    Calculator::new().calculate(expression)
}
