//! Test fixtures and factory functions for creating request bodies.

use serde_json::json;

/// Present-simple statement, 5 parts.
pub const STATEMENT_EN: [&str; 5] = ["She", "works", "on this project", "today", "."];
pub const STATEMENT_ES: [&str; 5] = ["Ella", "trabajar", "en este proyecto", "hoy", "."];

/// Yes/no question whose reference rendering has an extra opening mark,
/// so the part counts differ (6 vs 7).
pub const QUESTION_EN: [&str; 6] = ["Do", "you", "cook", "a new idea", "at home", "?"];
pub const QUESTION_ES: [&str; 7] = ["¿", "do", "tú", "cocinar", "una nueva idea", "en casa", "?"];

/// Generate `n` numbered parts, e.g. `w1 w2 ... wn`.
pub fn numbered_parts(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("w{}", i)).collect()
}

/// Create a compare request body (score / diff).
pub fn compare_request(expected: &str, heard: &str) -> serde_json::Value {
    json!({ "expected": expected, "heard": heard })
}

/// Create an evaluate request body.
pub fn evaluate_request(expected: &str, heard: &str, tolerance: Option<f64>) -> serde_json::Value {
    match tolerance {
        Some(t) => json!({ "expected": expected, "heard": heard, "tolerance": t }),
        None => json!({ "expected": expected, "heard": heard }),
    }
}

/// Create a segments / next exercise request body.
pub fn sentence_parts<S: AsRef<str>>(target: &[S], reference: &[S]) -> serde_json::Value {
    let target: Vec<&str> = target.iter().map(|p| p.as_ref()).collect();
    let reference: Vec<&str> = reference.iter().map(|p| p.as_ref()).collect();
    json!({ "parts_target": target, "parts_reference": reference })
}

/// Create a create-session request body.
pub fn create_session_request<S: AsRef<str>>(
    target: &[S],
    reference: &[S],
    tolerance: Option<f64>,
) -> serde_json::Value {
    let mut body = sentence_parts(target, reference);
    if let Some(t) = tolerance {
        body["tolerance"] = json!(t);
    }
    body
}

/// Create a check request body.
pub fn check_request(heard: &str) -> serde_json::Value {
    json!({ "heard": heard })
}
