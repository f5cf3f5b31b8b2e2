use rand::Rng;
use crate::trainer::{
    error::TrainerError,
    helpers::{decimal, instance, text, DECIMAL_EPSILON},
    models::{Decimal, Operands, ProblemInstance, ProblemKind},
    sampler::uniform_decimal,
};

pub fn generate<R: Rng>(
    rng: &mut R,
    problem_id: String,
    _max_attempts: usize,
) -> Result<ProblemInstance, TrainerError> {
    let a = uniform_decimal(rng, 120, 199, 2);
    let b = uniform_decimal(rng, 1, 9, 1);
    let c = uniform_decimal(rng, -29, -12, 1);
    Ok(build(problem_id, a, b, c))
}

/// `a – b * (c)`; the exact result has at most two decimal places.
pub fn build(problem_id: String, a: Decimal, b: Decimal, c: Decimal) -> ProblemInstance {
    let result = a.to_rational() - b.to_rational() * c.to_rational();
    let branch_key = if result.terminates_within(1) { "Places:One" } else { "Places:Two" };
    instance(
        problem_id,
        ProblemKind::DecimalExpression,
        branch_key,
        text(format!("{a} – {b} * ({c}) =")),
        Operands::DecimalExpression { a, b, c },
        decimal(result, 2, DECIMAL_EPSILON),
    )
}
