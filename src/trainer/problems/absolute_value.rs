use rand::Rng;
use crate::trainer::{
    error::TrainerError,
    helpers::{exact_integer, instance, text},
    models::{Operands, ProblemInstance, ProblemKind},
};

pub fn generate<R: Rng>(
    rng: &mut R,
    problem_id: String,
    _max_attempts: usize,
) -> Result<ProblemInstance, TrainerError> {
    let a = rng.gen_range(-9..=-2i64);
    let b = rng.gen_range(2..=9i64);
    let c = rng.gen_range(-19..=-10i64);
    Ok(build(problem_id, a, b, c))
}

/// `a * |y + b|` evaluated at `y = c`.
pub fn build(problem_id: String, a: i64, b: i64, c: i64) -> ProblemInstance {
    let inside = c + b;
    let branch_key = if inside.abs() < 10 { "Inside:SingleDigit" } else { "Inside:TwoDigit" };
    instance(
        problem_id,
        ProblemKind::AbsoluteValue,
        branch_key,
        text(format!("Find the value of the expression {a} * |y + {b}| at y = {c}")),
        Operands::AbsoluteValue { a, b, c },
        exact_integer(a * inside.abs()),
    )
}
