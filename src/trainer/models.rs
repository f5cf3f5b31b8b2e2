use std::fmt;
use serde::{Deserialize, Serialize};

use crate::trainer::rational::Rational;

// ---------------------------------------------------------------------------
// Numeric primitives
// ---------------------------------------------------------------------------

/// A decimal operand quantised to a fixed number of fractional digits,
/// stored exactly as `units / 10^places`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decimal {
    pub units: i64,
    pub places: u32,
}

impl Decimal {
    pub fn new(units: i64, places: u32) -> Self {
        Decimal { units, places }
    }

    pub fn to_rational(self) -> Rational {
        Rational::from_decimal(self.units as i128, self.places)
    }

    pub fn to_f64(self) -> f64 {
        self.to_rational().to_f64()
    }
}

/// `value` rounded to `places` digits, with trailing zeros trimmed but at
/// least one fractional digit kept ("1.2", "1.25", "-2.0").
fn short_decimal(value: Rational, places: u32) -> String {
    let full = value.to_decimal_string(places);
    match full.find('.') {
        Some(dot) => {
            let t = full.trim_end_matches('0');
            if t.len() == dot + 1 { format!("{t}0") } else { t.to_string() }
        }
        None => format!("{full}.0"),
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", short_decimal(self.to_rational(), self.places))
    }
}

// ---------------------------------------------------------------------------
// Problem kinds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProblemKind {
    ProductOfDifference,
    FractionArithmetic,
    DecimalExpression,
    AbsoluteValue,
    LinearEquation,
    RoundTripSpeed,
    MixedFractionExpression,
    ApartmentsPerFloor,
    ClassSizeTotal,
    TwoDigitNumber,
}

impl ProblemKind {
    /// All ten kinds in catalog order.
    pub const ALL: [ProblemKind; 10] = [
        ProblemKind::ProductOfDifference,
        ProblemKind::FractionArithmetic,
        ProblemKind::DecimalExpression,
        ProblemKind::AbsoluteValue,
        ProblemKind::LinearEquation,
        ProblemKind::RoundTripSpeed,
        ProblemKind::MixedFractionExpression,
        ProblemKind::ApartmentsPerFloor,
        ProblemKind::ClassSizeTotal,
        ProblemKind::TwoDigitNumber,
    ];

    /// 1-based position in the catalog, as shown on the task buttons.
    pub fn number(self) -> u8 {
        match self {
            ProblemKind::ProductOfDifference     => 1,
            ProblemKind::FractionArithmetic      => 2,
            ProblemKind::DecimalExpression       => 3,
            ProblemKind::AbsoluteValue           => 4,
            ProblemKind::LinearEquation          => 5,
            ProblemKind::RoundTripSpeed          => 6,
            ProblemKind::MixedFractionExpression => 7,
            ProblemKind::ApartmentsPerFloor      => 8,
            ProblemKind::ClassSizeTotal          => 9,
            ProblemKind::TwoDigitNumber          => 10,
        }
    }

    pub fn from_number(n: u8) -> Option<ProblemKind> {
        ProblemKind::ALL.iter().copied().find(|k| k.number() == n)
    }

    /// Prefix used in problem IDs.
    pub fn id_prefix(self) -> &'static str {
        match self {
            ProblemKind::ProductOfDifference     => "PD",
            ProblemKind::FractionArithmetic      => "FA",
            ProblemKind::DecimalExpression       => "DE",
            ProblemKind::AbsoluteValue           => "AV",
            ProblemKind::LinearEquation          => "LE",
            ProblemKind::RoundTripSpeed          => "RT",
            ProblemKind::MixedFractionExpression => "MF",
            ProblemKind::ApartmentsPerFloor      => "AP",
            ProblemKind::ClassSizeTotal          => "CS",
            ProblemKind::TwoDigitNumber          => "TD",
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProblemKind::ProductOfDifference     => "Product of a Difference",
            ProblemKind::FractionArithmetic      => "Fraction Arithmetic",
            ProblemKind::DecimalExpression       => "Decimal Expression",
            ProblemKind::AbsoluteValue           => "Absolute Value",
            ProblemKind::LinearEquation          => "Linear Equation",
            ProblemKind::RoundTripSpeed          => "Round-Trip Speed",
            ProblemKind::MixedFractionExpression => "Mixed Fraction Expression",
            ProblemKind::ApartmentsPerFloor      => "Apartments per Floor",
            ProblemKind::ClassSizeTotal          => "Class Size Total",
            ProblemKind::TwoDigitNumber          => "Two-Digit Number",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Display payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FractionTerm {
    pub numerator: i64,
    pub denominator: i64,
}

impl FractionTerm {
    pub fn new(numerator: i64, denominator: i64) -> Self {
        FractionTerm { numerator, denominator }
    }
}

/// What the presentation layer shows for a problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DisplayContent {
    Text(String),
    /// Stacked fractions.  `template` refers to `fractions[i]` as `{i}`.
    Fractions {
        fractions: Vec<FractionTerm>,
        template: String,
    },
}

impl DisplayContent {
    /// Single-line rendering with fractions written as `a/b`.
    pub fn render_plain(&self) -> String {
        match self {
            DisplayContent::Text(text) => text.clone(),
            DisplayContent::Fractions { fractions, template } => {
                let mut out = template.clone();
                for (i, frac) in fractions.iter().enumerate() {
                    out = out.replace(
                        &format!("{{{i}}}"),
                        &format!("{}/{}", frac.numerator, frac.denominator),
                    );
                }
                out
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Answers, comparison policies, verdicts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Answer {
    Integer(i64),
    /// Exact value known to terminate within `places` decimal digits.
    Decimal { value: Rational, places: u32 },
    Fraction(Rational),
}

impl Answer {
    pub fn to_f64(&self) -> f64 {
        match self {
            Answer::Integer(n) => *n as f64,
            Answer::Decimal { value, .. } | Answer::Fraction(value) => value.to_f64(),
        }
    }

    pub fn to_rational(&self) -> Rational {
        match self {
            Answer::Integer(n) => Rational::from(*n),
            Answer::Decimal { value, .. } | Answer::Fraction(value) => *value,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Integer(n) => write!(f, "{}", n),
            Answer::Decimal { value, places } => write!(f, "{}", short_decimal(*value, *places)),
            Answer::Fraction(value) => write!(f, "{}", value),
        }
    }
}

/// How a parsed submission is compared with the expected answer.
/// Each kind declares its own policy; they are intentionally not unified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Comparison {
    /// Parsed as a decimal and compared with `==`.
    Exact,
    /// Parsed as a decimal; accepted when `|submitted - expected| < epsilon`.
    Tolerance(f64),
    /// Parsed as `numerator/denominator`; accepted when value-equal.
    ExactFraction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MalformedReason {
    NotANumber,
    ZeroDenominator,
    ExpectedFraction,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::NotANumber       => write!(f, "Enter a number."),
            MalformedReason::ZeroDenominator  => write!(f, "The denominator must not be zero."),
            MalformedReason::ExpectedFraction => write!(f, "Enter the answer as a fraction, e.g. -1/7."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Incorrect { expected: Answer },
    Malformed { reason: MalformedReason },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => write!(f, "Correct!"),
            Verdict::Incorrect { expected } => write!(f, "Incorrect. The correct answer is {}", expected),
            Verdict::Malformed { reason } => write!(f, "{}", reason),
        }
    }
}

// ---------------------------------------------------------------------------
// Hidden operands
// ---------------------------------------------------------------------------

/// The sampled values behind a problem, one variant per kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operands {
    ProductOfDifference { a: i64, b: i64, c: i64 },
    FractionArithmetic { a: i64, b: i64, c: i64, d: i64, e: i64, f: i64 },
    DecimalExpression { a: Decimal, b: Decimal, c: Decimal },
    AbsoluteValue { a: i64, b: i64, c: i64 },
    LinearEquation { a: i64, b: i64, c: Decimal, d: Decimal },
    RoundTripSpeed { distance: i64, hours: i64, slowdown: i64 },
    MixedFractionExpression {
        b: FractionTerm,
        v: FractionTerm,
        g: FractionTerm,
        d: FractionTerm,
        e: i64,
    },
    ApartmentsPerFloor { last_apartment: i64, ratio: i64, per_floor: i64, scaled_per_floor: i64 },
    ClassSizeTotal { first: i64, fewer: i64, percent: i64 },
    TwoDigitNumber { factor: i64, increase: i64 },
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRequest {
    pub kind: ProblemKind,
    pub rng_seed: Option<u64>,
}

impl ProblemRequest {
    /// Request with an entropy-seeded random source.
    pub fn new(kind: ProblemKind) -> Self {
        ProblemRequest { kind, rng_seed: None }
    }

    pub fn seeded(kind: ProblemKind, seed: u64) -> Self {
        ProblemRequest { kind, rng_seed: Some(seed) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemInstance {
    pub problem_id: String,
    pub kind: ProblemKind,
    /// Logical shape of this instance, stable across seeds.
    /// Examples: "Exact:Integer", "UnitFraction:-1/7", "Speed:4.5h"
    pub branch_key: String,
    pub display: DisplayContent,
    pub operands: Operands,
    pub expected: Answer,
    pub comparison: Comparison,
}

/// Process-wide knobs; loadable from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    pub rng_seed: Option<u64>,
    /// Upper bound on draws for every rejection-sampling loop.
    pub max_attempts: usize,
}

pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig { rng_seed: None, max_attempts: DEFAULT_MAX_ATTEMPTS }
    }
}
