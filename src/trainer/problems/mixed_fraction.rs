//! `(1 + b) × (v + g) − d ÷ e` where the whole fraction set is redrawn until
//! the result is a negative unit fraction `-1/n` with `n` in `2..=9`.

use rand::Rng;
use crate::trainer::{
    error::{ArithmeticError, TrainerError},
    helpers::{exact_fraction, fractions, instance, term_value},
    models::{FractionTerm, Operands, ProblemInstance, ProblemKind},
    rational::Rational,
    sampler::sample_until,
};

const KIND: ProblemKind = ProblemKind::MixedFractionExpression;

#[derive(Debug, Clone, Copy)]
struct FractionSet {
    b: FractionTerm,
    v: FractionTerm,
    g: FractionTerm,
    d: FractionTerm,
    e: i64,
}

impl FractionSet {
    fn evaluate(&self) -> Result<Rational, ArithmeticError> {
        let factor = Rational::ONE + term_value(self.b)?;
        let sum = term_value(self.v)? + term_value(self.g)?;
        Ok(factor * sum - term_value(self.d)?.checked_div(Rational::from(self.e))?)
    }

    fn is_target(&self) -> bool {
        self.evaluate().map_or(false, is_negative_unit_fraction)
    }
}

fn is_negative_unit_fraction(value: Rational) -> bool {
    value.numer() == -1 && (2..=9).contains(&value.denom())
}

fn is_whole(term: &FractionTerm) -> bool {
    term.numerator % term.denominator == 0
}

/// Improper fraction `n/den`, `den` in `4..=12`, `n` in `den+1..=3*den`.
fn improper<R: Rng>(rng: &mut R) -> FractionTerm {
    let den = rng.gen_range(4..=12i64);
    FractionTerm::new(rng.gen_range(den + 1..=3 * den), den)
}

fn draw_set<R: Rng>(rng: &mut R, max_attempts: usize) -> Result<FractionSet, TrainerError> {
    let b_den = rng.gen_range(3..=8i64);
    let b = FractionTerm::new(rng.gen_range(1..b_den), b_den);
    let v = sample_until(rng, KIND, max_attempts, improper, |t| !is_whole(t))?;
    let v_value = term_value(v)?;
    let g = sample_until(rng, KIND, max_attempts, improper, |t| {
        !is_whole(t) && term_value(*t).map_or(false, |g| g != v_value)
    })?;
    let d = sample_until(
        rng,
        KIND,
        max_attempts,
        |rng| {
            let den = rng.gen_range(3..=7i64);
            FractionTerm::new(rng.gen_range(10..=99i64), den)
        },
        |t| !is_whole(t),
    )?;
    let e = rng.gen_range(2..=9i64);
    Ok(FractionSet { b, v, g, d, e })
}

pub fn generate<R: Rng>(
    rng: &mut R,
    problem_id: String,
    max_attempts: usize,
) -> Result<ProblemInstance, TrainerError> {
    let set = sample_until(
        rng,
        KIND,
        max_attempts,
        |rng| draw_set(rng, max_attempts),
        |set| set.as_ref().map_or(false, FractionSet::is_target),
    )??;
    build(problem_id, set.b, set.v, set.g, set.d, set.e)
}

pub fn build(
    problem_id: String,
    b: FractionTerm, v: FractionTerm, g: FractionTerm, d: FractionTerm, e: i64,
) -> Result<ProblemInstance, TrainerError> {
    let result = FractionSet { b, v, g, d, e }.evaluate()?;
    Ok(instance(
        problem_id,
        KIND,
        format!("UnitFraction:{result}"),
        fractions(vec![b, v, g, d], format!("(1 + {{0}}) × ({{1}} + {{2}}) − {{3}} ÷ {e}")),
        Operands::MixedFractionExpression { b, v, g, d, e },
        exact_fraction(result),
    ))
}
