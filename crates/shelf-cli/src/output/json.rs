//! JSON output formatting for script outcomes.

use super::Outcome;

/// Convert an outcome to a JSON object for output.
pub fn outcome_json(outcome: &Outcome) -> serde_json::Value {
    match outcome {
        Outcome::Bought {
            label,
            copy,
            edition,
        } => serde_json::json!({
            "op": "buy",
            "label": label,
            "copy": copy,
            "edition": edition,
        }),
        Outcome::Moved {
            operation,
            label,
            available,
        } => serde_json::json!({
            "op": operation,
            "label": label,
            "available": available,
        }),
        Outcome::Lost { label } => serde_json::json!({
            "op": "lose",
            "label": label,
        }),
        Outcome::Condition { label, condition } => serde_json::json!({
            "op": "condition",
            "label": label,
            "condition": condition,
        }),
        Outcome::Availability { label, available } => serde_json::json!({
            "op": "available",
            "label": label,
            "available": available,
        }),
        Outcome::Copies {
            edition,
            all,
            available,
        } => serde_json::json!({
            "op": "copies",
            "edition": edition,
            "all": all,
            "available": available,
        }),
        Outcome::Found { query, editions } => serde_json::json!({
            "op": "find",
            "query": query,
            "editions": editions,
        }),
        Outcome::Checked { copies } => serde_json::json!({
            "op": "check",
            "ok": true,
            "copies": copies,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::{Condition, Edition};

    #[test]
    fn test_found_json() {
        let outcome = Outcome::Found {
            query: "A".to_string(),
            editions: vec![Edition::new("A", ["B", "C"], 1990).unwrap()],
        };
        let value = outcome_json(&outcome);
        assert_eq!(value["op"], "find");
        assert_eq!(value["editions"][0]["title"], "A");
        assert_eq!(value["editions"][0]["authors"][1], "C");
        assert_eq!(value["editions"][0]["year"], 1990);
    }

    #[test]
    fn test_condition_json_uses_snake_case() {
        let outcome = Outcome::Condition {
            label: "a".to_string(),
            condition: Condition::Damaged,
        };
        assert_eq!(outcome_json(&outcome)["condition"], "damaged");
    }
}
