use thiserror::Error;

use crate::trainer::models::ProblemKind;

/// Failures of exact fraction arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("{numer} is not divisible by {denom}")]
    InexactQuotient { numer: i64, denom: i64 },
}

/// Hard failures surfaced to the caller of `generate()` / the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrainerError {
    /// The constrained sampling space was empty or no acceptable sample was
    /// found within the configured attempt budget.
    #[error("could not generate a {kind} problem after {attempts} attempts")]
    GenerationExhausted { kind: ProblemKind, attempts: usize },

    #[error("no active {0} problem; call generate() first")]
    NoActiveProblem(ProblemKind),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
