use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::trainer::{
    error::TrainerError,
    models::{ProblemInstance, ProblemKind, ProblemRequest, DEFAULT_MAX_ATTEMPTS},
    problems,
};

/// Generate a unique problem ID from kind + RNG.
fn make_problem_id<R: Rng>(kind: ProblemKind, rng: &mut R) -> String {
    format!("{}-{:08X}", kind.id_prefix(), rng.next_u32())
}

/// Core dispatch: routes to the correct problem module using the supplied RNG.
pub fn generate_with<R: Rng>(
    rng: &mut R,
    kind: ProblemKind,
    max_attempts: usize,
) -> Result<ProblemInstance, TrainerError> {
    let problem_id = make_problem_id(kind, rng);

    let instance = match kind {
        ProblemKind::ProductOfDifference =>
            problems::product_of_difference::generate(rng, problem_id, max_attempts),

        ProblemKind::FractionArithmetic =>
            problems::fraction_arithmetic::generate(rng, problem_id, max_attempts),

        ProblemKind::DecimalExpression =>
            problems::decimal_expression::generate(rng, problem_id, max_attempts),

        ProblemKind::AbsoluteValue =>
            problems::absolute_value::generate(rng, problem_id, max_attempts),

        ProblemKind::LinearEquation =>
            problems::linear_equation::generate(rng, problem_id, max_attempts),

        ProblemKind::RoundTripSpeed =>
            problems::round_trip::generate(rng, problem_id, max_attempts),

        ProblemKind::MixedFractionExpression =>
            problems::mixed_fraction::generate(rng, problem_id, max_attempts),

        ProblemKind::ApartmentsPerFloor =>
            problems::apartments::generate(rng, problem_id, max_attempts),

        ProblemKind::ClassSizeTotal =>
            problems::class_size::generate(rng, problem_id, max_attempts),

        ProblemKind::TwoDigitNumber =>
            problems::two_digit_number::generate(rng, problem_id, max_attempts),
    }?;

    tracing::debug!(
        problem_id = %instance.problem_id,
        %kind,
        branch_key = %instance.branch_key,
        "generated problem"
    );
    Ok(instance)
}

/// One-shot entry point: seeded requests are reproducible, `None` uses entropy.
pub fn generate_problem(request: ProblemRequest) -> Result<ProblemInstance, TrainerError> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_with(&mut rng, request.kind, DEFAULT_MAX_ATTEMPTS)
}
