//! Speed/time word problem: the return trip is slower and its duration must
//! be a "half hour" value below ten hours (x.5 h).

use rand::Rng;
use crate::trainer::{
    error::TrainerError,
    helpers::{decimal, instance, text, ONE_PLACE_EPSILON},
    models::{Operands, ProblemInstance, ProblemKind},
    rational::Rational,
    sampler::sample_until,
};

/// Return-trip duration in hours; `None` when the return speed is not positive.
fn return_time(distance: i64, hours: i64, slowdown: i64) -> Option<Rational> {
    let distance = Rational::from(distance);
    let speed_out = distance.checked_div(Rational::from(hours)).ok()?;
    let speed_back = speed_out - Rational::from(slowdown);
    if speed_back <= Rational::ZERO {
        return None;
    }
    distance.checked_div(speed_back).ok()
}

fn is_presentable(time: Rational) -> bool {
    let tenths = time * Rational::from(10);
    time < Rational::from(10) && tenths.is_integer() && tenths.numer().rem_euclid(10) == 5
}

pub fn generate<R: Rng>(
    rng: &mut R,
    problem_id: String,
    max_attempts: usize,
) -> Result<ProblemInstance, TrainerError> {
    let (distance, hours, slowdown) = sample_until(
        rng,
        ProblemKind::RoundTripSpeed,
        max_attempts,
        |rng| {
            (
                10 * rng.gen_range(10..=99i64),
                rng.gen_range(2..=8i64),
                5 * rng.gen_range(1..=5i64),
            )
        },
        |&(distance, hours, slowdown)| {
            return_time(distance, hours, slowdown).map_or(false, is_presentable)
        },
    )?;
    build(problem_id, distance, hours, slowdown)
}

pub fn build(
    problem_id: String,
    distance: i64, hours: i64, slowdown: i64,
) -> Result<ProblemInstance, TrainerError> {
    let speed_out = Rational::from(distance).checked_div(Rational::from(hours))?;
    let time = Rational::from(distance).checked_div(speed_out - Rational::from(slowdown))?;
    let branch_key = if time < Rational::from(5) { "Return:Short" } else { "Return:Long" };
    Ok(instance(
        problem_id,
        ProblemKind::RoundTripSpeed,
        branch_key,
        text(format!(
            "A car covered the {distance} km from town A to town B in {hours} h. \
             On the way back it drove {slowdown} km/h slower. \
             How many hours did the return trip take?"
        )),
        Operands::RoundTripSpeed { distance, hours, slowdown },
        decimal(time, 1, ONE_PLACE_EPSILON),
    ))
}
