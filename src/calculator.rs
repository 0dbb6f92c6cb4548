/// The evaluator module reduces a validated expression to its value.
///
/// The evaluator tokenizes the expression and collapses it in two
/// left-to-right passes, one per precedence tier. It assumes its input has
/// passed validation and reports typed errors instead of panicking when it
/// has not.
///
/// # Responsibilities
/// - Applies `*` and `/` before `+` and `-`, left to right within a tier.
/// - Parses operand text only when a collapse consumes it.
/// - Reports division by zero as a typed, client-facing error.
pub mod evaluator;
/// The lexer module splits an expression into operands and operators.
///
/// Every operator character becomes its own token; every maximal run of
/// other characters becomes an operand token that borrows the source text.
/// The lexer never fails on validated input.
pub mod lexer;
/// Request handling on top of validation and evaluation.
///
/// This module wires a validator and an evaluator together behind two small
/// traits, maps the outcome to a [`service::Response`] and logs each request.
///
/// # Responsibilities
/// - Calls the validator first and the evaluator only for valid input.
/// - Distinguishes client errors from internal faults.
/// - Emits one tracing span per request.
pub mod service;
/// The validator module checks the structure of an expression.
///
/// Four independent character-level rules are evaluated on every call. The
/// failures are reported in a fixed priority order so that the surfaced
/// reason is deterministic.
pub mod validator;
