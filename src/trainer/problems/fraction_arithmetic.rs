use rand::Rng;
use crate::trainer::{
    error::TrainerError,
    helpers::{exact_fraction, fractions, instance, term_value},
    models::{FractionTerm, Operands, ProblemInstance, ProblemKind},
    sampler::sample_until,
};

/// `(a/b − c/d) ÷ e/f`, answered as a fraction entered in two parts.
pub fn generate<R: Rng>(
    rng: &mut R,
    problem_id: String,
    max_attempts: usize,
) -> Result<ProblemInstance, TrainerError> {
    let b = rng.gen_range(2..=8i64);
    let a = rng.gen_range(b + 1..=9);
    let d = rng.gen_range(2..=8i64);
    let c = rng.gen_range(d + 1..=9);
    let e = rng.gen_range(5..=25i64);
    let f = sample_until(
        rng,
        ProblemKind::FractionArithmetic,
        max_attempts,
        |rng| rng.gen_range(5..=9i64),
        |&f| f != e,
    )?;
    build(problem_id, a, b, c, d, e, f)
}

pub fn build(
    problem_id: String,
    a: i64, b: i64, c: i64, d: i64, e: i64, f: i64,
) -> Result<ProblemInstance, TrainerError> {
    let terms = vec![FractionTerm::new(a, b), FractionTerm::new(c, d), FractionTerm::new(e, f)];
    let difference = term_value(terms[0])? - term_value(terms[1])?;
    let result = difference.checked_div(term_value(terms[2])?)?;

    let branch_key = match result.numer().signum() {
        -1 => "Sign:Negative",
        0  => "Sign:Zero",
        _  => "Sign:Positive",
    };

    Ok(instance(
        problem_id,
        ProblemKind::FractionArithmetic,
        branch_key,
        fractions(terms, "({0} − {1}) ÷ {2}"),
        Operands::FractionArithmetic { a, b, c, d, e, f },
        exact_fraction(result),
    ))
}
