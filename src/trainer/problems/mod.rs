//! One module per problem kind, in catalog order.
//!
//! Every module exposes the same pair of functions:
//!
//! ```ignore
//! pub fn generate<R: Rng>(
//!     rng: &mut R,
//!     problem_id: String,
//!     max_attempts: usize,
//! ) -> Result<ProblemInstance, TrainerError>
//!
//! pub fn build(problem_id: String, /* explicit operands */) -> Result<ProblemInstance, TrainerError>
//! ```
//!
//! `build` returns a bare `ProblemInstance` only where no operand feeds a
//! division.
//! The dispatcher in `generator.rs` routes to `generate`.

/// 1 (PD-)
pub mod product_of_difference;
/// 2 (FA-)
pub mod fraction_arithmetic;
/// 3 (DE-)
pub mod decimal_expression;
/// 4 (AV-)
pub mod absolute_value;
/// 5 (LE-)
pub mod linear_equation;
/// 6 (RT-)
pub mod round_trip;
/// 7 (MF-)
pub mod mixed_fraction;
/// 8 (AP-)
pub mod apartments;
/// 9 (CS-)
pub mod class_size;
/// 10 (TD-)
pub mod two_digit_number;
