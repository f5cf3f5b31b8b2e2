//! Core trainer engine: problem generation, exact arithmetic and answer checking.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: problem kinds, display content, answers, verdicts, config |
//! | `error`     | `ArithmeticError` and `TrainerError` |
//! | `rational`  | Exact fractions in lowest terms |
//! | `sampler`   | Bounded rejection sampling and exhaustive-enumeration picking |
//! | `parser`    | Raw answer text → decimal or fraction |
//! | `checker`   | `ProblemInstance::check` per comparison policy |
//! | `helpers`   | Shared builder functions used by every problem module |
//! | `generator` | Entry points `generate_problem()` / `generate_with()` |
//! | `catalog`   | Ten live generator slots for the presentation layer |
//! | `problems`  | The ten problem generators |

pub mod catalog;
pub mod checker;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod parser;
pub mod problems;
pub mod rational;
pub mod sampler;

// Re-export the public API surface so callers can use
// `trainer::generate_problem` without reaching into sub-modules.
pub use catalog::{GeneratorSlot, ProblemCatalog};
pub use error::{ArithmeticError, TrainerError};
pub use generator::{generate_problem, generate_with};
pub use models::{
    Answer, Comparison, Decimal, DisplayContent, FractionTerm, MalformedReason, Operands,
    ProblemInstance, ProblemKind, ProblemRequest, TrainerConfig, Verdict,
};
pub use rational::Rational;
