use crate::{error::EvaluationError, util::num::parse_operand};

/// A binary arithmetic operator.
///
/// The calculator understands exactly four single-character operators. Each
/// belongs to one of two precedence tiers; see [`Tier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
}

/// Precedence class of an [`Operator`].
///
/// All operators of the `Multiplicative` tier are collapsed before any
/// operator of the `Additive` tier is looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// `*` and `/`.
    Multiplicative,
    /// `+` and `-`.
    Additive,
}

impl Tier {
    /// Tiers in the order the evaluator reduces them.
    pub const ORDER: [Self; 2] = [Self::Multiplicative, Self::Additive];
}

impl Operator {
    /// Returns the precedence tier of the operator.
    ///
    /// # Example
    /// ```
    /// use calcify::term::{Operator, Tier};
    ///
    /// assert_eq!(Operator::Mul.tier(), Tier::Multiplicative);
    /// assert_eq!(Operator::Sub.tier(), Tier::Additive);
    /// ```
    #[must_use]
    pub const fn tier(self) -> Tier {
        match self {
            Self::Mul | Self::Div => Tier::Multiplicative,
            Self::Add | Self::Sub => Tier::Additive,
        }
    }

    /// The character the operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An operand of the reduction.
///
/// Operands coming from the source text stay unparsed until a collapse needs
/// their value; operands produced by a collapse already carry one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    /// Digits exactly as they appeared in the expression.
    Literal(&'a str),
    /// The result of an earlier collapse.
    Value(f64),
}

impl Operand<'_> {
    /// Returns the numeric value, parsing literal text on demand.
    ///
    /// # Errors
    /// Returns [`EvaluationError::MalformedNumber`] if the literal is not a
    /// decimal number.
    ///
    /// # Example
    /// ```
    /// use calcify::term::Operand;
    ///
    /// assert_eq!(Operand::Literal("42").value().unwrap(), 42.0);
    /// assert_eq!(Operand::Value(1.5).value().unwrap(), 1.5);
    /// assert!(Operand::Literal("4 2").value().is_err());
    /// ```
    pub fn value(&self) -> Result<f64, EvaluationError> {
        match *self {
            Self::Literal(text) => parse_operand(text),
            Self::Value(value) => Ok(value),
        }
    }
}

/// One element of the flat sequence the evaluator reduces.
///
/// A well-formed expression yields `Operand, Operator, Operand, ...,
/// Operand`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Term<'a> {
    /// A number, parsed or not.
    Operand(Operand<'a>),
    /// An operator together with its byte offset in the expression.
    Operator {
        /// The operator.
        op:     Operator,
        /// Byte offset of the operator character in the source.
        offset: usize,
    },
}

impl<'a> Term<'a> {
    /// Returns the operand if this term is one.
    #[must_use]
    pub const fn as_operand(&self) -> Option<&Operand<'a>> {
        match self {
            Self::Operand(operand) => Some(operand),
            Self::Operator { .. } => None,
        }
    }
}
