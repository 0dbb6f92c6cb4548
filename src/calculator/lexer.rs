use logos::Logos;

use crate::{
    error::EvaluationError,
    term::{Operand, Operator, Term},
};

/// Represents a lexical token of an arithmetic expression.
///
/// The expression is split at every operator character; the operators are
/// kept as tokens of their own and everything between them is an operand.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'a> {
    /// Text between two operators, such as `42`. Not parsed yet.
    #[regex(r"[^+\-*/]+", |lex| lex.slice())]
    Operand(&'a str),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
}

/// Maps an operator token to its [`Operator`].
///
/// Returns `None` for operand tokens.
///
/// # Example
/// ```
/// use calcify::{calculator::lexer::{Token, token_to_operator}, term::Operator};
///
/// assert_eq!(token_to_operator(&Token::Star), Some(Operator::Mul));
/// assert_eq!(token_to_operator(&Token::Operand("1")), None);
/// ```
#[must_use]
pub const fn token_to_operator(token: &Token<'_>) -> Option<Operator> {
    match token {
        Token::Plus => Some(Operator::Add),
        Token::Minus => Some(Operator::Sub),
        Token::Star => Some(Operator::Mul),
        Token::Slash => Some(Operator::Div),
        Token::Operand(_) => None,
    }
}

/// Splits an expression into the flat term sequence used by the evaluator.
///
/// Operand text is borrowed from `source` and left unparsed. Operators carry
/// the byte offset they were found at.
///
/// # Errors
/// Returns `EvaluationError::MalformedNumber` for text the lexer cannot
/// classify. Every character is either an operator or part of an operand, so
/// this does not happen in practice.
///
/// # Example
/// ```
/// use calcify::{
///     calculator::lexer::tokenize,
///     term::{Operand, Operator, Term},
/// };
///
/// let terms = tokenize("12+3").unwrap();
/// assert_eq!(terms,
///            vec![Term::Operand(Operand::Literal("12")),
///                 Term::Operator { op: Operator::Add, offset: 2 },
///                 Term::Operand(Operand::Literal("3"))]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Term<'_>>, EvaluationError> {
    let mut terms = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let Ok(token) = token else {
            return Err(EvaluationError::MalformedNumber { literal: lexer.slice().to_string() });
        };

        terms.push(match token_to_operator(&token) {
                       Some(op) => Term::Operator { op,
                                                    offset: lexer.span().start },
                       None => Term::Operand(Operand::Literal(lexer.slice())),
                   });
    }

    tracing::trace!(count = terms.len(), "tokenized expression");
    Ok(terms)
}
