//! Demo of all ten problem kinds.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=grade6_trainer=debug` to see sampling diagnostics.
//!
//! For every kind the demo:
//!
//! 1. generates a problem from a fixed seed (same seed = same problem),
//! 2. prints the display content, the JSON payload the UI receives and the
//!    expected answer,
//! 3. checks the formatted expected answer, a wrong answer and garbage input
//!    to show all three verdicts.

use grade6_trainer::{
    to_client_payload, verdict_payload, ProblemCatalog, ProblemKind, TrainerConfig,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = TrainerConfig { rng_seed: Some(2024), ..TrainerConfig::default() };
    let mut catalog = ProblemCatalog::new(config);

    for &kind in catalog.kinds() {
        let problem = match catalog.generate(kind) {
            Ok(p) => p.clone(),
            Err(e) => {
                eprintln!("  {kind}: {e}");
                continue;
            }
        };

        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  [{}] {}  ID: {}  Branch: {}",
            kind.number(), kind, problem.problem_id, problem.branch_key);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  Q: {}", problem.display.render_plain());
        println!("  Payload: {}", to_client_payload(&problem));
        println!("  Expected: {}", problem.expected);
        println!();

        let expected = problem.expected.to_string();
        for raw in [expected.as_str(), "42", "abc"] {
            match catalog.check(kind, raw) {
                Ok(verdict) => println!("  {raw:>10} → {}", verdict_payload(&verdict)),
                Err(e) => println!("  {raw:>10} → error: {e}"),
            }
        }
        println!();
    }

    // Catalog buttons are numbered from 1.
    if let Some(kind) = ProblemKind::from_number(7) {
        println!("Button 7 opens: {kind}");
    }
}
