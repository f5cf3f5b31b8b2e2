use rand::Rng;
use crate::trainer::{
    error::TrainerError,
    helpers::{exact_integer, exact_quotient, instance, text},
    models::{Operands, ProblemInstance, ProblemKind},
    sampler::sample_until,
};

const KIND: ProblemKind = ProblemKind::ApartmentsPerFloor;

/// Ratio first, then a per-floor count divisible by it, then an apartment
/// number that closes a floor of the first building.
pub fn generate<R: Rng>(
    rng: &mut R,
    problem_id: String,
    max_attempts: usize,
) -> Result<ProblemInstance, TrainerError> {
    let ratio = rng.gen_range(2..=6i64);
    let scaled = sample_until(rng, KIND, max_attempts, |rng| rng.gen_range(6..=25i64), |y| y % ratio == 0)?;
    let per_floor = scaled / ratio;
    let last_apartment = sample_until(
        rng,
        KIND,
        max_attempts,
        |rng| rng.gen_range(100..=999i64),
        |a| a % per_floor == 0,
    )?;
    build(problem_id, ratio, scaled, last_apartment)
}

/// Fails unless `ratio` divides `scaled_per_floor` and the resulting
/// per-floor count divides `last_apartment`.
pub fn build(
    problem_id: String,
    ratio: i64,
    scaled_per_floor: i64,
    last_apartment: i64,
) -> Result<ProblemInstance, TrainerError> {
    let per_floor = exact_quotient(scaled_per_floor, ratio)?;
    exact_quotient(last_apartment, per_floor)?;
    let branch_key = format!("Ratio:{ratio}");
    Ok(instance(
        problem_id,
        KIND,
        branch_key,
        text(format!(
            "Every floor of the first building has {per_floor} apartments, and apartment \
             No. {last_apartment} is the last one on its floor. Each floor of the second \
             building has {ratio} times as many apartments. How many apartments are there \
             on each floor of the second building?"
        )),
        Operands::ApartmentsPerFloor { last_apartment, ratio, per_floor, scaled_per_floor },
        exact_integer(scaled_per_floor),
    ))
}
