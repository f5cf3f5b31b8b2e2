//! Shared builder functions used by every problem generator.
//!
//! Each generator ends by assembling the same pieces: display content, the
//! hidden operands, the expected answer and its comparison policy.  These
//! helpers keep problem modules focused on sampling and arithmetic.

use crate::trainer::{
    error::ArithmeticError,
    models::*,
    rational::Rational,
};

/// Tolerance used by the decimal-expression problem.
pub const DECIMAL_EPSILON: f64 = 1e-6;

/// Tolerance used by the one-decimal-place problems.
pub const ONE_PLACE_EPSILON: f64 = 1e-9;

/// Plain text display.
pub fn text(s: impl Into<String>) -> DisplayContent {
    DisplayContent::Text(s.into())
}

/// Stacked-fraction display; `template` refers to terms as `{0}`, `{1}`, ...
pub fn fractions(terms: Vec<FractionTerm>, template: impl Into<String>) -> DisplayContent {
    DisplayContent::Fractions { fractions: terms, template: template.into() }
}

/// Exact value of a displayed fraction.
pub fn term_value(term: FractionTerm) -> Result<Rational, ArithmeticError> {
    Rational::new(term.numerator as i128, term.denominator as i128)
}

/// `numer / denom` when it divides exactly.
pub fn exact_quotient(numer: i64, denom: i64) -> Result<i64, ArithmeticError> {
    let q = Rational::from(numer).checked_div(Rational::from(denom))?;
    if !q.is_integer() {
        return Err(ArithmeticError::InexactQuotient { numer, denom });
    }
    Ok(q.numer() as i64)
}

/// Integer answer compared with `==` after decimal parsing.
pub fn exact_integer(n: i64) -> (Answer, Comparison) {
    (Answer::Integer(n), Comparison::Exact)
}

/// Decimal answer with `places` digits, compared within `epsilon`.
pub fn decimal(value: Rational, places: u32, epsilon: f64) -> (Answer, Comparison) {
    (Answer::Decimal { value, places }, Comparison::Tolerance(epsilon))
}

/// Fraction answer compared by value.
pub fn exact_fraction(value: Rational) -> (Answer, Comparison) {
    (Answer::Fraction(value), Comparison::ExactFraction)
}

/// Assemble the final [`ProblemInstance`].
pub fn instance(
    problem_id: String,
    kind: ProblemKind,
    branch_key: impl Into<String>,
    display: DisplayContent,
    operands: Operands,
    (expected, comparison): (Answer, Comparison),
) -> ProblemInstance {
    ProblemInstance {
        problem_id,
        kind,
        branch_key: branch_key.into(),
        display,
        operands,
        expected,
        comparison,
    }
}
