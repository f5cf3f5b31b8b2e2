use serde_json::{json, Value};
use crate::trainer::models::{DisplayContent, ProblemInstance, Verdict};

/// Build the display block: either `displayText` or `displayFractions`.
fn display_block(display: &DisplayContent) -> (&'static str, Value) {
    match display {
        DisplayContent::Text(text) => ("displayText", json!(text)),
        DisplayContent::Fractions { fractions, template } => {
            let terms: Vec<Value> = fractions
                .iter()
                .map(|f| json!({ "numerator": f.numerator, "denominator": f.denominator }))
                .collect();
            ("displayFractions", json!({ "fractions": terms, "template": template }))
        }
    }
}

/// Input widget the UI should show for this problem.
fn input_mode(instance: &ProblemInstance) -> &'static str {
    match instance.display {
        DisplayContent::Fractions { .. } => "fraction",
        DisplayContent::Text(_) => "number",
    }
}

/// Map a `ProblemInstance` to the JSON object the presentation layer renders.
///
/// Operands and the expected answer are not included.
pub fn to_client_payload(instance: &ProblemInstance) -> Value {
    let (key, display) = display_block(&instance.display);
    let mut payload = json!({
        "kind": instance.kind.to_string(),
        "number": instance.kind.number(),
        "problem_id": instance.problem_id,
        "input": input_mode(instance),
    });
    payload[key] = display;
    payload
}

/// Map a `Verdict` to `{status, message, expected?}`.
pub fn verdict_payload(verdict: &Verdict) -> Value {
    match verdict {
        Verdict::Correct => json!({
            "status": "correct",
            "message": verdict.to_string(),
        }),
        Verdict::Incorrect { expected } => json!({
            "status": "incorrect",
            "message": verdict.to_string(),
            "expected": expected.to_string(),
        }),
        Verdict::Malformed { .. } => json!({
            "status": "malformed",
            "message": verdict.to_string(),
        }),
    }
}
