use rand::Rng;
use crate::trainer::{
    error::TrainerError,
    helpers::{exact_integer, exact_quotient, instance, text},
    models::{Operands, ProblemInstance, ProblemKind},
    sampler::sample_until,
};

/// A round two-digit number `x` grows by `increase` when multiplied by
/// `factor`, i.e. `x * (factor - 1) = increase`.
pub fn generate<R: Rng>(
    rng: &mut R,
    problem_id: String,
    max_attempts: usize,
) -> Result<ProblemInstance, TrainerError> {
    let factor = rng.gen_range(2..=6i64);
    let step = (factor - 1) * 10;
    let increase = sample_until(
        rng,
        ProblemKind::TwoDigitNumber,
        max_attempts,
        |rng| 10 * rng.gen_range(1..=9i64),
        |b| b % step == 0,
    )?;
    build(problem_id, factor, increase)
}

/// Fails unless `increase` is a multiple of `(factor - 1) * 10`.
pub fn build(problem_id: String, factor: i64, increase: i64) -> Result<ProblemInstance, TrainerError> {
    let number = 10 * exact_quotient(increase, (factor - 1) * 10)?;
    Ok(instance(
        problem_id,
        ProblemKind::TwoDigitNumber,
        format!("Factor:{factor}"),
        text(format!(
            "A two-digit number ending in zero was multiplied by {factor}, \
             and it grew by {increase}. What was the number?"
        )),
        Operands::TwoDigitNumber { factor, increase },
        exact_integer(number),
    ))
}
