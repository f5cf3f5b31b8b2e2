//! Three classes: the first has `a` pupils, the second `b` fewer, the third
//! `v`% fewer.  Candidates are enumerated exhaustively rather than sampled.

use std::ops::RangeInclusive;

use rand::Rng;
use crate::trainer::{
    error::TrainerError,
    helpers::{exact_integer, instance, text},
    models::{Operands, ProblemInstance, ProblemKind},
    sampler::choose_enumerated,
};

pub const FIRST_CLASS: RangeInclusive<i64> = 20..=30;
pub const FEWER: RangeInclusive<i64> = 2..=9;
pub const PERCENT: RangeInclusive<i64> = 20..=30;
pub const TOTAL: RangeInclusive<i64> = 50..=90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSizes {
    pub first: i64,
    pub fewer: i64,
    pub percent: i64,
}

impl ClassSizes {
    pub fn total(&self) -> i64 {
        let third = self.first - self.first * self.percent / 100;
        self.first + (self.first - self.fewer) + third
    }
}

/// Every combination whose percentage is a whole number of pupils and whose
/// total lies in [`TOTAL`].
pub fn enumerate(
    first: RangeInclusive<i64>,
    fewer: RangeInclusive<i64>,
    percent: RangeInclusive<i64>,
) -> Vec<ClassSizes> {
    let mut out = Vec::new();
    for a in first {
        for b in fewer.clone() {
            for v in percent.clone() {
                let sizes = ClassSizes { first: a, fewer: b, percent: v };
                if (a * v) % 100 == 0 && TOTAL.contains(&sizes.total()) {
                    out.push(sizes);
                }
            }
        }
    }
    out
}

pub fn generate<R: Rng>(
    rng: &mut R,
    problem_id: String,
    _max_attempts: usize,
) -> Result<ProblemInstance, TrainerError> {
    let candidates = enumerate(FIRST_CLASS, FEWER, PERCENT);
    let sizes = choose_enumerated(rng, ProblemKind::ClassSizeTotal, &candidates)?;
    Ok(build(problem_id, sizes))
}

pub fn build(problem_id: String, sizes: ClassSizes) -> ProblemInstance {
    let ClassSizes { first, fewer, percent } = sizes;
    instance(
        problem_id,
        ProblemKind::ClassSizeTotal,
        format!("Percent:{percent}"),
        text(format!(
            "The first class has {first} pupils. The second class has {fewer} pupils fewer \
             than the first, and the third class has {percent}% fewer pupils than the first. \
             How many pupils are there in the three classes altogether?"
        )),
        Operands::ClassSizeTotal { first, fewer, percent },
        exact_integer(sizes.total()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trainer::models::{Answer, Verdict};

    #[test]
    fn total_adds_three_classes() {
        // 20 + 18 + (20 - 4) = 54
        let sizes = ClassSizes { first: 20, fewer: 2, percent: 20 };
        assert_eq!(sizes.total(), 54);
        let p = build("CS-TEST".into(), sizes);
        assert_eq!(p.expected, Answer::Integer(54));
        assert_eq!(p.check("54"), Verdict::Correct);
    }

    #[test]
    fn enumeration_respects_constraints() {
        let all = enumerate(FIRST_CLASS, FEWER, PERCENT);
        assert!(!all.is_empty());
        for s in &all {
            assert_eq!((s.first * s.percent) % 100, 0, "{s:?}");
            assert!(TOTAL.contains(&s.total()), "{s:?}");
        }
    }

    #[test]
    fn empty_enumeration_is_a_hard_failure() {
        use rand::{rngs::StdRng, SeedableRng};
        // 21..=23 pupils never give a whole number for 21..=23 percent.
        let empty = enumerate(21..=23, FEWER, 21..=23);
        assert!(empty.is_empty());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            choose_enumerated(&mut rng, ProblemKind::ClassSizeTotal, &empty),
            Err(TrainerError::GenerationExhausted { kind: ProblemKind::ClassSizeTotal, .. })
        ));
    }
}
