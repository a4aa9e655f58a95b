//! Text output formatting for script outcomes.

use super::Outcome;

/// Render an outcome as human-readable text (possibly several lines).
pub fn outcome_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Bought {
            label,
            copy,
            edition,
        } => format!("bought {} ({}): {}", label, copy, edition),
        Outcome::Moved {
            operation,
            label,
            available,
        } => format!("{} {}: available={}", operation, label, available),
        Outcome::Lost { label } => format!("lost {}", label),
        Outcome::Condition { label, condition } => format!("{}: condition={}", label, condition),
        Outcome::Availability { available, .. } => available.to_string(),
        Outcome::Copies { all, available, .. } => format!("all={} available={}", all, available),
        Outcome::Found { editions, .. } => {
            if editions.is_empty() {
                "no matches".to_string()
            } else {
                editions
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        Outcome::Checked { copies } => format!("ok ({} copies)", copies),
    }
}
