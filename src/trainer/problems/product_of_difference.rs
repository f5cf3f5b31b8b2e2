use rand::Rng;
use crate::trainer::{
    error::TrainerError,
    helpers::{exact_integer, instance, text},
    models::{Operands, ProblemInstance, ProblemKind},
};

/// `a × (b – c)` with `b < c`, so the answer is always a negative integer.
pub fn generate<R: Rng>(
    rng: &mut R,
    problem_id: String,
    _max_attempts: usize,
) -> Result<ProblemInstance, TrainerError> {
    let a = rng.gen_range(2..=10i64);
    let b = rng.gen_range(20..=90i64);
    // c > b by construction, no rejection needed.
    let c = rng.gen_range(b + 1..=99);
    Ok(build(problem_id, a, b, c))
}

pub fn build(problem_id: String, a: i64, b: i64, c: i64) -> ProblemInstance {
    let gap = c - b;
    let branch_key = if gap < 10 { "Gap:SingleDigit" } else { "Gap:Wide" };
    instance(
        problem_id,
        ProblemKind::ProductOfDifference,
        branch_key,
        text(format!("{a} × ({b} – {c}) =")),
        Operands::ProductOfDifference { a, b, c },
        exact_integer(a * (b - c)),
    )
}
