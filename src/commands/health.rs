//! Evaluator health probe

use crate::evaluator::{EvaluateError, HttpEvaluator};
use anyhow::Context;
use colored::Colorize;

/// Check that the evaluator at `evaluator.base_url()` is up
///
/// # Errors
///
/// Returns an error if the health endpoint is unreachable or unhealthy.
pub async fn run_health(evaluator: &HttpEvaluator) -> anyhow::Result<()> {
    let result = evaluator.health().await;
    println!("{}", health_line(evaluator.base_url(), &result));
    result.with_context(|| format!("evaluator at {} is not healthy", evaluator.base_url()))
}

/// One-line verdict: "OK <url>" or "FAIL <url> (<reason>)"
fn health_line(base_url: &str, result: &Result<(), EvaluateError>) -> String {
    match result {
        Ok(()) => format!("{} {base_url}", "OK".green().bold()),
        Err(err) => format!("{} {base_url} ({err})", "FAIL".red().bold()),
    }
}
