//! Judging submitted answers against a live problem.
//!
//! `check` never mutates the instance; the catalog tracks the "answered"
//! flag separately.

use crate::trainer::{
    models::{Comparison, ProblemInstance, Verdict},
    parser::{parse_decimal, parse_fraction, parse_fraction_parts},
    rational::Rational,
};

impl ProblemInstance {
    /// Validate free-text input using this problem's comparison policy.
    pub fn check(&self, raw: &str) -> Verdict {
        let verdict = match self.comparison {
            Comparison::Exact => match parse_decimal(raw) {
                Ok(value) => self.judge(value == self.expected.to_f64()),
                Err(reason) => Verdict::Malformed { reason },
            },
            Comparison::Tolerance(epsilon) => match parse_decimal(raw) {
                Ok(value) => self.judge((value - self.expected.to_f64()).abs() < epsilon),
                Err(reason) => Verdict::Malformed { reason },
            },
            Comparison::ExactFraction => match parse_fraction(raw) {
                Ok(value) => self.judge_fraction(value),
                Err(reason) => Verdict::Malformed { reason },
            },
        };
        tracing::trace!(problem_id = %self.problem_id, raw, ?verdict, "checked answer");
        verdict
    }

    /// Validate a fraction typed into separate numerator and denominator boxes.
    pub fn check_parts(&self, numer: &str, denom: &str) -> Verdict {
        let verdict = match parse_fraction_parts(numer, denom) {
            Ok(value) => self.judge_fraction(value),
            Err(reason) => Verdict::Malformed { reason },
        };
        tracing::trace!(problem_id = %self.problem_id, numer, denom, ?verdict, "checked fraction parts");
        verdict
    }

    fn judge_fraction(&self, value: Rational) -> Verdict {
        self.judge(value == self.expected.to_rational())
    }

    fn judge(&self, correct: bool) -> Verdict {
        if correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect { expected: self.expected }
        }
    }
}
