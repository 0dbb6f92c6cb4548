use crate::error::ValidationError;

/// The result of validating an expression.
///
/// Holds every rule that failed, highest priority first. An outcome without
/// failures means the expression is well-formed and may be evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    failures: Vec<ValidationError>,
}

impl ValidationOutcome {
    /// Builds an outcome from a list of failed rules.
    ///
    /// The failures are sorted into priority order and deduplicated, so the
    /// order they are passed in does not matter.
    #[must_use]
    pub fn from_failures(failures: impl IntoIterator<Item = ValidationError>) -> Self {
        let failures: Vec<_> = failures.into_iter().collect();
        Self { failures: ValidationError::ALL.into_iter()
                                             .filter(|rule| failures.contains(rule))
                                             .collect(), }
    }

    /// Returns `true` if no rule failed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// The highest-priority failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<ValidationError> {
        self.failures.first().copied()
    }

    /// The message of the highest-priority failure, if any.
    ///
    /// # Example
    /// ```
    /// use calcify::calculator::validator::validate;
    ///
    /// assert_eq!(validate("2++3").reason().as_deref(),
    ///            Some("Expression contains adjacent operators."));
    /// assert_eq!(validate("2+3").reason(), None);
    /// ```
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        self.error().map(|error| error.to_string())
    }

    /// The messages of all failures, highest priority first.
    ///
    /// # Example
    /// ```
    /// use calcify::calculator::validator::validate;
    ///
    /// assert_eq!(validate("+2").reasons(), ["Expression is invalid."]);
    /// assert!(validate("2+3").reasons().is_empty());
    /// ```
    #[must_use]
    pub fn reasons(&self) -> Vec<String> {
        self.failures.iter().map(ToString::to_string).collect()
    }

    /// All failed rules, highest priority first.
    #[must_use]
    pub fn failures(&self) -> &[ValidationError] {
        &self.failures
    }
}

impl std::fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

/// Validates the structure of an arithmetic expression.
///
/// All four rules are checked on every call:
///
/// 1. the expression is not empty or whitespace only;
/// 2. it starts and ends with an ASCII digit;
/// 3. no two non-digit characters (operators or whitespace) are adjacent;
/// 4. it only contains digits, `+ - * /` and whitespace.
///
/// Rule 3 does not single out operators: whitespace counts as well, so
/// `"2 +3"` and `"2  3"` fail it just like `"2++3"` does.
///
/// # Example
/// ```
/// use calcify::{calculator::validator::validate, error::ValidationError};
///
/// assert!(validate("20+30-40*50/60").is_valid());
/// assert_eq!(validate("").error(), Some(ValidationError::Empty));
/// assert_eq!(validate("+2+3").error(), Some(ValidationError::InvalidBoundary));
/// assert_eq!(validate("2a+3").error(), Some(ValidationError::InvalidCharacters));
/// ```
#[must_use]
pub fn validate(expression: &str) -> ValidationOutcome {
    let checks = [(ValidationError::Empty, is_blank(expression)),
                  (ValidationError::InvalidBoundary, !starts_and_ends_with_digit(expression)),
                  (ValidationError::AdjacentOperators, has_adjacent_non_digits(expression)),
                  (ValidationError::InvalidCharacters, !has_only_allowed_characters(expression))];

    let outcome = ValidationOutcome::from_failures(checks.into_iter()
                                                         .filter_map(|(rule, failed)| {
                                                             failed.then_some(rule)
                                                         }));

    if outcome.is_valid() {
        tracing::debug!(expression, "expression accepted");
    } else {
        tracing::debug!(expression, failures = ?outcome.failures(), "expression rejected");
    }

    outcome
}

/// Rule 1: empty or whitespace only.
fn is_blank(expression: &str) -> bool {
    expression.chars().all(char::is_whitespace)
}

/// Rule 2: a digit, anything on a single line, then a digit.
///
/// The expression needs at least two characters. A single trailing line feed
/// after the last digit is tolerated; a line feed anywhere between the two
/// digits is not.
fn starts_and_ends_with_digit(expression: &str) -> bool {
    let body = expression.strip_suffix('\n').unwrap_or(expression);
    let mut chars = body.chars();

    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => {
            first.is_ascii_digit() && last.is_ascii_digit() && !chars.as_str().contains('\n')
        },
        _ => false,
    }
}

/// Rule 3: two consecutive characters that are both not digits.
///
/// Pairs involving a character rule 4 rejects are left to rule 4, so that
/// `2a+3` is reported as containing invalid characters. For such mixed input
/// the failure list is shorter than a plain non-digit-run check would give.
fn has_adjacent_non_digits(expression: &str) -> bool {
    let mut previous_non_digit = false;
    for c in expression.chars() {
        let non_digit = !c.is_ascii_digit() && is_allowed(c);
        if non_digit && previous_non_digit {
            return true;
        }
        previous_non_digit = non_digit;
    }
    false
}

/// Rule 4: non-empty and made of digits, operators and whitespace only.
fn has_only_allowed_characters(expression: &str) -> bool {
    !expression.is_empty() && expression.chars().all(is_allowed)
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/') || c.is_whitespace()
}
