//! Crate-level tests for `grade6_trainer`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical problem; different seeds → varied problems |
//! | Structural | ID prefixes, non-empty branch keys, display form per kind |
//! | Post-conditions | Every generated answer has the form its generator promises |
//! | Round-trip | Checking the formatted expected answer is always `Correct` |
//! | Idempotence | Repeated checks return the same verdict |
//! | Bounded sampling | Rejection loops stop at the attempt budget |
//! | Config | JSON defaults, entropy smoke test |

use rand::{
    rngs::{mock::StepRng, StdRng},
    SeedableRng,
};

use crate::trainer::{
    generate_problem, generate_with,
    models::{
        Answer, Comparison, DisplayContent, MalformedReason, Operands, ProblemInstance,
        ProblemKind, ProblemRequest, TrainerConfig, Verdict, DEFAULT_MAX_ATTEMPTS,
    },
    rational::Rational,
    TrainerError,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn seeded_problem(kind: ProblemKind, seed: u64) -> ProblemInstance {
    generate_problem(ProblemRequest::seeded(kind, seed))
        .unwrap_or_else(|e| panic!("{kind:?} seed={seed} failed: {e}"))
}

/// Many instances of one kind from a single seeded stream.
fn stream(kind: ProblemKind, seed: u64, count: usize) -> Vec<ProblemInstance> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| generate_with(&mut rng, kind, DEFAULT_MAX_ATTEMPTS).unwrap())
        .collect()
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_problem() {
    for kind in ProblemKind::ALL {
        let a = seeded_problem(kind, 12345);
        let b = seeded_problem(kind, 12345);
        assert_eq!(a, b, "mismatch for {kind:?}");
    }
}

#[test]
fn different_seeds_produce_varied_problems() {
    let mut same_count = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = seeded_problem(ProblemKind::DecimalExpression, seed);
        let b = seeded_problem(ProblemKind::DecimalExpression, seed + 500);
        if a.display == b.display {
            same_count += 1;
        }
    }
    assert!(
        same_count < pairs as usize / 4,
        "Too many identical problems across different seeds ({same_count}/{pairs})"
    );
}

#[test]
fn entropy_seed_produces_a_valid_problem() {
    for kind in ProblemKind::ALL {
        let p = generate_problem(ProblemRequest::new(kind)).unwrap();
        assert_eq!(p.check(&p.expected.to_string()), Verdict::Correct, "{kind:?}");
    }
}

// ── structural ───────────────────────────────────────────────────────────────

#[test]
fn every_problem_id_starts_with_kind_prefix() {
    for kind in ProblemKind::ALL {
        let p = seeded_problem(kind, 1);
        let prefix = format!("{}-", kind.id_prefix());
        assert!(p.problem_id.starts_with(&prefix), "ID '{}' for {kind:?}", p.problem_id);
        assert_eq!(p.problem_id.len(), prefix.len() + 8);
        assert_eq!(p.kind, kind);
    }
}

#[test]
fn every_problem_has_non_empty_branch_key() {
    for kind in ProblemKind::ALL {
        for seed in SEEDS {
            assert!(!seeded_problem(kind, seed).branch_key.is_empty(), "{kind:?} seed={seed}");
        }
    }
}

#[test]
fn fraction_kinds_use_stacked_display() {
    for kind in ProblemKind::ALL {
        let p = seeded_problem(kind, 5);
        let stacked = matches!(p.display, DisplayContent::Fractions { .. });
        let fraction_kind = matches!(
            kind,
            ProblemKind::FractionArithmetic | ProblemKind::MixedFractionExpression
        );
        assert_eq!(stacked, fraction_kind, "{kind:?}");
        assert!(!p.display.render_plain().is_empty());
    }
}

#[test]
fn comparison_policies_are_declared_per_kind() {
    let expected = [
        (ProblemKind::ProductOfDifference, Comparison::Exact),
        (ProblemKind::FractionArithmetic, Comparison::ExactFraction),
        (ProblemKind::DecimalExpression, Comparison::Tolerance(1e-6)),
        (ProblemKind::AbsoluteValue, Comparison::Exact),
        (ProblemKind::LinearEquation, Comparison::Tolerance(1e-9)),
        (ProblemKind::RoundTripSpeed, Comparison::Tolerance(1e-9)),
        (ProblemKind::MixedFractionExpression, Comparison::ExactFraction),
        (ProblemKind::ApartmentsPerFloor, Comparison::Exact),
        (ProblemKind::ClassSizeTotal, Comparison::Exact),
        (ProblemKind::TwoDigitNumber, Comparison::Exact),
    ];
    for (kind, comparison) in expected {
        assert_eq!(seeded_problem(kind, 3).comparison, comparison, "{kind:?}");
    }
}

#[test]
fn kind_numbers_round_trip() {
    for kind in ProblemKind::ALL {
        assert_eq!(ProblemKind::from_number(kind.number()), Some(kind));
    }
    assert_eq!(ProblemKind::from_number(0), None);
    assert_eq!(ProblemKind::from_number(11), None);
}

// ── post-conditions ──────────────────────────────────────────────────────────

#[test]
fn product_of_difference_is_always_negative() {
    for p in stream(ProblemKind::ProductOfDifference, 1, 200) {
        let Operands::ProductOfDifference { a, b, c } = p.operands else { panic!() };
        assert!((2..=10).contains(&a) && (20..=90).contains(&b) && (b + 1..=99).contains(&c));
        assert!(matches!(p.expected, Answer::Integer(n) if n < 0), "{p:?}");
    }
}

#[test]
fn fraction_arithmetic_operands_respect_ranges() {
    for p in stream(ProblemKind::FractionArithmetic, 2, 200) {
        let Operands::FractionArithmetic { a, b, c, d, e, f } = p.operands else { panic!() };
        assert!((2..=8).contains(&b) && (b + 1..=9).contains(&a));
        assert!((2..=8).contains(&d) && (d + 1..=9).contains(&c));
        assert!((5..=25).contains(&e) && (5..=9).contains(&f) && f != e);
        assert!(matches!(p.expected, Answer::Fraction(_)));
    }
}

#[test]
fn decimal_expression_terminates_at_two_places() {
    for p in stream(ProblemKind::DecimalExpression, 3, 200) {
        let Answer::Decimal { value, places } = p.expected else { panic!() };
        assert_eq!(places, 2);
        assert!(value.terminates_within(2), "{p:?}");
        assert!(value > Rational::ONE);
    }
}

#[test]
fn absolute_value_answer_is_negative_integer() {
    for p in stream(ProblemKind::AbsoluteValue, 4, 200) {
        assert!(matches!(p.expected, Answer::Integer(n) if n < 0 && n >= -9 * 17), "{p:?}");
    }
}

#[test]
fn linear_equation_root_has_one_decimal_place() {
    for p in stream(ProblemKind::LinearEquation, 5, 200) {
        let Answer::Decimal { value, places } = p.expected else { panic!() };
        assert_eq!(places, 1);
        assert!(value.terminates_within(1), "{p:?}");
        let Operands::LinearEquation { a, b, .. } = p.operands else { panic!() };
        assert!((10..=25).contains(&a) && (8..a).contains(&b));
    }
}

#[test]
fn round_trip_time_is_a_half_hour_under_ten() {
    for p in stream(ProblemKind::RoundTripSpeed, 6, 100) {
        let Answer::Decimal { value, .. } = p.expected else { panic!() };
        let tenths = value * Rational::from(10);
        assert!(tenths.is_integer(), "{p:?}");
        assert_eq!(tenths.numer().rem_euclid(10), 5, "{p:?}");
        assert!(value > Rational::ZERO && value < Rational::from(10), "{p:?}");
    }
}

#[test]
fn mixed_fraction_answer_is_negative_unit_fraction() {
    for p in stream(ProblemKind::MixedFractionExpression, 7, 30) {
        let Answer::Fraction(value) = p.expected else { panic!() };
        assert_eq!(value.numer(), -1, "{p:?}");
        assert!((2..=9).contains(&value.denom()), "{p:?}");
        let Operands::MixedFractionExpression { v, g, d, .. } = p.operands else { panic!() };
        for term in [v, g, d] {
            assert_ne!(term.numerator % term.denominator, 0, "integer term in {p:?}");
        }
        assert_ne!(
            Rational::new(v.numerator.into(), v.denominator.into()),
            Rational::new(g.numerator.into(), g.denominator.into())
        );
    }
}

#[test]
fn apartments_divide_evenly() {
    for p in stream(ProblemKind::ApartmentsPerFloor, 8, 200) {
        let Operands::ApartmentsPerFloor { last_apartment, ratio, per_floor, scaled_per_floor } =
            p.operands
        else {
            panic!()
        };
        assert_eq!(scaled_per_floor % ratio, 0);
        assert_eq!(per_floor * ratio, scaled_per_floor);
        assert_eq!(last_apartment % per_floor, 0);
        assert!((100..=999).contains(&last_apartment));
        assert_eq!(p.expected, Answer::Integer(scaled_per_floor));
    }
}

#[test]
fn class_size_total_stays_in_range() {
    for p in stream(ProblemKind::ClassSizeTotal, 9, 200) {
        let Answer::Integer(total) = p.expected else { panic!() };
        assert!((50..=90).contains(&total), "{p:?}");
        let Operands::ClassSizeTotal { first, percent, .. } = p.operands else { panic!() };
        assert_eq!((first * percent) % 100, 0);
    }
}

#[test]
fn two_digit_number_is_round() {
    for p in stream(ProblemKind::TwoDigitNumber, 10, 200) {
        let Answer::Integer(x) = p.expected else { panic!() };
        assert!((10..=90).contains(&x) && x % 10 == 0, "{p:?}");
        let Operands::TwoDigitNumber { factor, increase } = p.operands else { panic!() };
        assert_eq!(x * factor - x, increase);
    }
}

// ── round-trip & idempotence ─────────────────────────────────────────────────

#[test]
fn formatted_expected_answer_is_always_correct() {
    for kind in ProblemKind::ALL {
        for seed in SEEDS {
            let p = seeded_problem(kind, seed);
            let text = p.expected.to_string();
            assert_eq!(p.check(&text), Verdict::Correct, "{kind:?} seed={seed} answer={text}");
        }
    }
}

#[test]
fn comma_separator_is_accepted_for_decimal_kinds() {
    for kind in [ProblemKind::DecimalExpression, ProblemKind::LinearEquation, ProblemKind::RoundTripSpeed] {
        let p = seeded_problem(kind, 11);
        let text = p.expected.to_string().replace('.', ",");
        assert_eq!(p.check(&text), Verdict::Correct, "{kind:?} answer={text}");
    }
}

#[test]
fn repeated_checks_are_idempotent() {
    for kind in ProblemKind::ALL {
        let p = seeded_problem(kind, 21);
        for raw in ["", "abc", "1/0", "-1/7", "3", "4,5"] {
            assert_eq!(p.check(raw), p.check(raw), "{kind:?} input={raw:?}");
        }
    }
}

#[test]
fn wrong_answers_report_the_expected_value() {
    for kind in ProblemKind::ALL {
        let p = seeded_problem(kind, 33);
        let wrong = match p.comparison {
            Comparison::ExactFraction => format!("{}", p.expected.to_rational() + Rational::ONE),
            _ => (p.expected.to_f64() + 1.0).to_string(),
        };
        assert_eq!(p.check(&wrong), Verdict::Incorrect { expected: p.expected }, "{kind:?}");
    }
}

#[test]
fn fraction_kinds_reject_zero_denominator() {
    for kind in [ProblemKind::FractionArithmetic, ProblemKind::MixedFractionExpression] {
        let p = seeded_problem(kind, 13);
        assert_eq!(
            p.check("0"),
            Verdict::Malformed { reason: MalformedReason::ExpectedFraction }
        );
        assert_eq!(
            p.check("5/0"),
            Verdict::Malformed { reason: MalformedReason::ZeroDenominator }
        );
    }
}

// ── bounded sampling ─────────────────────────────────────────────────────────

/// Kinds whose acceptance predicate never holds when every draw is the
/// lowest value of its range.
const STUCK_SOURCE_EXHAUSTS: [ProblemKind; 4] = [
    ProblemKind::FractionArithmetic,
    ProblemKind::RoundTripSpeed,
    ProblemKind::MixedFractionExpression,
    ProblemKind::ApartmentsPerFloor,
];

#[test]
fn stuck_source_exhausts_or_yields_a_valid_problem() {
    for kind in ProblemKind::ALL {
        let result = generate_with(&mut StepRng::new(0, 0), kind, 50);
        if STUCK_SOURCE_EXHAUSTS.contains(&kind) {
            assert_eq!(
                result,
                Err(TrainerError::GenerationExhausted { kind, attempts: 50 }),
                "{kind:?}"
            );
        } else {
            let p = result.unwrap_or_else(|e| panic!("{kind:?}: {e}"));
            assert_eq!(p.check(&p.expected.to_string()), Verdict::Correct, "{kind:?}");
        }
    }
}

#[test]
fn zero_budget_stops_every_rejection_loop() {
    let resampling = [
        ProblemKind::FractionArithmetic,
        ProblemKind::LinearEquation,
        ProblemKind::RoundTripSpeed,
        ProblemKind::MixedFractionExpression,
        ProblemKind::ApartmentsPerFloor,
        ProblemKind::TwoDigitNumber,
    ];
    for kind in resampling {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            generate_with(&mut rng, kind, 0),
            Err(TrainerError::GenerationExhausted { kind, attempts: 0 }),
            "{kind:?}"
        );
    }
}

// ── config ───────────────────────────────────────────────────────────────────

#[test]
fn config_defaults_fill_missing_json_fields() {
    let cfg: TrainerConfig = serde_json::from_str(r#"{ "rng_seed": 9 }"#).unwrap();
    assert_eq!(cfg.rng_seed, Some(9));
    assert_eq!(cfg.max_attempts, DEFAULT_MAX_ATTEMPTS);
    let cfg: TrainerConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, TrainerConfig::default());
}

#[test]
fn seeded_catalog_matches_seeded_stream() {
    let mut catalog = crate::ProblemCatalog::new(TrainerConfig {
        rng_seed: Some(77),
        ..TrainerConfig::default()
    });
    let from_catalog = catalog.generate(ProblemKind::LinearEquation).unwrap().clone();
    let from_stream = stream(ProblemKind::LinearEquation, 77, 1).remove(0);
    assert_eq!(from_catalog, from_stream);
}
