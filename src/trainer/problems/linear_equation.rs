use rand::Rng;
use crate::trainer::{
    error::TrainerError,
    helpers::{decimal, instance, text, ONE_PLACE_EPSILON},
    models::{Decimal, Operands, ProblemInstance, ProblemKind},
    rational::Rational,
    sampler::{sample_until, uniform_decimal},
};

/// `x = (c + d) / (a − b)`; fails only when `a == b`.
fn solve(a: i64, b: i64, c: Decimal, d: Decimal) -> Result<Rational, TrainerError> {
    Ok((c.to_rational() + d.to_rational()).checked_div(Rational::from(a - b))?)
}

/// Only `c` and `d` are redrawn until `x` has a single decimal place.
pub fn generate<R: Rng>(
    rng: &mut R,
    problem_id: String,
    max_attempts: usize,
) -> Result<ProblemInstance, TrainerError> {
    let a = rng.gen_range(10..=25i64);
    let b = rng.gen_range(8..=a - 1);
    let (c, d) = sample_until(
        rng,
        ProblemKind::LinearEquation,
        max_attempts,
        |rng| (uniform_decimal(rng, 11, 99, 1), uniform_decimal(rng, 11, 99, 1)),
        |&(c, d)| solve(a, b, c, d).map_or(false, |x| x.terminates_within(1)),
    )?;
    build(problem_id, a, b, c, d)
}

pub fn build(
    problem_id: String,
    a: i64, b: i64, c: Decimal, d: Decimal,
) -> Result<ProblemInstance, TrainerError> {
    let x = solve(a, b, c, d)?;
    let branch_key = if x.is_integer() { "Root:Whole" } else { "Root:Tenths" };
    Ok(instance(
        problem_id,
        ProblemKind::LinearEquation,
        branch_key,
        text(format!("Find the unknown x from the equation: {a}x - {b}x = {c} + {d}")),
        Operands::LinearEquation { a, b, c, d },
        decimal(x, 1, ONE_PLACE_EPSILON),
    ))
}
