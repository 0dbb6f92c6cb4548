use crate::{
    calculator::{evaluator::binary::apply, lexer::tokenize},
    error::EvaluationError,
    term::{Operand, Term, Tier},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Evaluates an arithmetic expression.
///
/// The expression is split into operands and operators, then reduced in two
/// left-to-right passes: first every `*` and `/`, then every `+` and `-`.
/// Each operator is collapsed together with its two neighbours into a single
/// value, so `10-5-2` is `3` and `10/2*3` is `15`.
///
/// # Precondition
/// `expression` must have passed
/// [`validate`](crate::calculator::validator::validate). Out-of-contract input
/// does not panic, but yields one of the error variants for which
/// [`EvaluationError::is_client_error`] is `false`.
///
/// # Errors
/// - `DivisionByZero` if any `/` has a zero right-hand side. Evaluation stops
///   at the first one.
/// - `MalformedNumber`, `MissingOperand` or `EmptyExpression` for input that
///   violates the precondition.
///
/// # Example
/// ```
/// use calcify::{calculator::evaluator::core::evaluate, error::EvaluationError};
///
/// assert_eq!(evaluate("100-25*3+50/2").unwrap(), 50.0);
/// assert_eq!(evaluate("4+5/2-1").unwrap(), 5.5);
/// assert_eq!(evaluate("1/0").unwrap_err(), EvaluationError::DivisionByZero);
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    let mut terms = tokenize(expression)?;

    for tier in Tier::ORDER {
        collapse(&mut terms, tier)?;
    }

    match terms.as_slice() {
        [Term::Operand(operand)] => operand.value(),
        [] => Err(EvaluationError::EmptyExpression),
        rest => Err(first_dangling_operator(rest)),
    }
}

/// Collapses every operator of `tier`, left to right.
///
/// An operator at index `i` replaces the window `[i - 1, i, i + 1]` with the
/// computed value. The scan then resumes at `i`, which now holds the term that
/// followed the window.
fn collapse(terms: &mut Vec<Term<'_>>, tier: Tier) -> EvalResult<()> {
    let mut i = 0;

    while i < terms.len() {
        let Term::Operator { op, offset } = terms[i] else {
            i += 1;
            continue;
        };
        if op.tier() != tier {
            i += 1;
            continue;
        }

        let missing = || EvaluationError::MissingOperand { offset };
        let left = i.checked_sub(1)
                    .and_then(|j| terms[j].as_operand())
                    .ok_or_else(missing)?
                    .value()?;
        let right = terms.get(i + 1)
                         .and_then(Term::as_operand)
                         .ok_or_else(missing)?
                         .value()?;

        let value = apply(op, left, right)?;
        tracing::trace!(%op, left, right, value, "collapsed");

        terms[i - 1] = Term::Operand(Operand::Value(value));
        terms.drain(i..=i + 1);
    }

    Ok(())
}

/// Picks the error to report when more than one term survives both passes.
fn first_dangling_operator(terms: &[Term<'_>]) -> EvaluationError {
    terms.iter()
         .find_map(|term| match term {
             Term::Operator { offset, .. } => {
                 Some(EvaluationError::MissingOperand { offset: *offset })
             },
             Term::Operand(_) => None,
         })
         .unwrap_or(EvaluationError::EmptyExpression)
}
