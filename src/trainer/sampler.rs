//! Rejection sampling shared by the constrained generators.
//!
//! A generator supplies a `draw` step (sample operands, compute a candidate)
//! and an `accept` predicate saying whether the candidate has a presentable
//! answer.  [`sample_until`] repeats the pair until the predicate holds or the
//! attempt budget runs out.  Partial resampling is expressed by capturing the
//! fixed operands in the closures and drawing only the rest.

use rand::Rng;

use crate::trainer::{
    error::TrainerError,
    models::{Decimal, ProblemKind},
};

/// Draw a decimal uniformly from `[lo_units, hi_units] / 10^places`.
pub fn uniform_decimal<R: Rng>(rng: &mut R, lo_units: i64, hi_units: i64, places: u32) -> Decimal {
    Decimal::new(rng.gen_range(lo_units..=hi_units), places)
}

/// Repeat `draw` until `accept` holds, at most `max_attempts` times.
pub fn sample_until<R, T, D, A>(
    rng: &mut R,
    kind: ProblemKind,
    max_attempts: usize,
    mut draw: D,
    accept: A,
) -> Result<T, TrainerError>
where
    R: Rng,
    D: FnMut(&mut R) -> T,
    A: Fn(&T) -> bool,
{
    for attempt in 1..=max_attempts {
        let candidate = draw(rng);
        if accept(&candidate) {
            tracing::debug!(%kind, attempt, "accepted sample");
            return Ok(candidate);
        }
    }
    tracing::warn!(%kind, max_attempts, "rejection sampling exhausted");
    Err(TrainerError::GenerationExhausted { kind, attempts: max_attempts })
}

/// Pick uniformly from an exhaustively enumerated candidate set; an empty set
/// is a hard failure.
pub fn choose_enumerated<R: Rng, T: Clone>(
    rng: &mut R,
    kind: ProblemKind,
    candidates: &[T],
) -> Result<T, TrainerError> {
    if candidates.is_empty() {
        tracing::warn!(%kind, "enumerated sampling space is empty");
        return Err(TrainerError::GenerationExhausted { kind, attempts: 0 });
    }
    let idx = rng.gen_range(0..candidates.len());
    Ok(candidates[idx].clone())
}
