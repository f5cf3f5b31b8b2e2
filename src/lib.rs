//! # grade6_trainer
//!
//! Randomised 6th-grade arithmetic problems with exact answer checking.
//!
//! The library produces ten kinds of problems (integer expressions, fraction
//! and decimal arithmetic, equations and word problems), computes the exact
//! expected answer of each, and judges free-text answers typed by a student.
//! Rendering, keyboards and settings belong to the presentation layer; it only
//! calls `generate` for display content and `check` for a verdict.
//!
//! ## How it works
//!
//! 1. Each generator draws operands from bounded ranges.  Generators whose
//!    answers must have a "nice" form (a single decimal place, a unit
//!    fraction, ...) redraw until the candidate passes, within a configurable
//!    attempt budget.
//! 2. Expected answers are computed with exact [`Rational`] arithmetic, so
//!    fraction answers compare by value and decimal answers are known to
//!    terminate.
//! 3. [`ProblemInstance::check`] parses the raw text (`,` is accepted as a
//!    decimal separator; fractions are written `n/d`) and applies the
//!    comparison policy declared by the problem: exact, tolerance or
//!    exact-fraction.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` or inject any `Rng` into
//!   [`ProblemCatalog::with_rng`] to reproduce problems exactly.
//! - **Bounded**: no sampling loop runs forever; exhaustion is reported as
//!   [`TrainerError::GenerationExhausted`].
//! - **Branch keys**: each instance has a `branch_key` (e.g. `"Sign:Negative"`,
//!   `"UnitFraction:-1/7"`) for per-shape progress tracking.
//!
//! ## Quick start
//!
//! ```rust
//! use grade6_trainer::{
//!     generate_problem, ProblemCatalog, ProblemKind, ProblemRequest, TrainerConfig, Verdict,
//! };
//!
//! // One-shot, reproducible:
//! let problem = generate_problem(ProblemRequest::seeded(ProblemKind::ProductOfDifference, 42))
//!     .expect("generation succeeds");
//! println!("{}", problem.display.render_plain());
//! assert_eq!(problem.check(&problem.expected.to_string()), Verdict::Correct);
//!
//! // Catalog with one live problem per kind:
//! let mut catalog = ProblemCatalog::new(TrainerConfig::default());
//! catalog.generate(ProblemKind::MixedFractionExpression).expect("generation succeeds");
//! let verdict = catalog.check(ProblemKind::MixedFractionExpression, "-1/7").unwrap();
//! println!("{verdict}");
//! ```

pub mod presentation;
pub mod trainer;

// Convenience re-exports so callers can use `grade6_trainer::generate_problem`
// directly without reaching into `trainer::`.
pub use presentation::{to_client_payload, verdict_payload};
pub use trainer::{
    generate_problem, generate_with, Answer, ArithmeticError, Comparison, Decimal,
    DisplayContent, FractionTerm, GeneratorSlot, MalformedReason, Operands, ProblemCatalog,
    ProblemInstance, ProblemKind, ProblemRequest, Rational, TrainerConfig, TrainerError, Verdict,
};

#[cfg(test)]
mod tests;
