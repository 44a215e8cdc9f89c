//! Aggregate statistics view

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Consistent view of the statistics aggregate, as served by `GET /stats`.
///
/// The leader fields are omitted from the wire format while the aggregate
/// is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    /// Occurrence count per distinct input
    pub inputs: HashMap<String, u64>,

    /// Input with the highest count (first to reach it wins ties)
    #[serde(
        rename = "most_popular",
        skip_serializing_if = "String::is_empty",
        default
    )]
    pub most_popular: String,

    /// Input with the most Unicode codepoints
    #[serde(
        rename = "longest_input_received",
        skip_serializing_if = "String::is_empty",
        default
    )]
    pub longest_input: String,

    /// Codepoint count of `longest_input`
    #[serde(
        rename = "longest_input_len",
        skip_serializing_if = "crate::types::is_zero",
        default
    )]
    pub longest_input_len: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_omits_leader_fields() {
        let report = StatsReport {
            inputs: HashMap::new(),
            most_popular: String::new(),
            longest_input: String::new(),
            longest_input_len: 0,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, serde_json::json!({ "inputs": {} }));
    }

    #[test]
    fn test_populated_report_serializes_all_fields() {
        let mut inputs = HashMap::new();
        inputs.insert("hello".to_string(), 2);

        let report = StatsReport {
            inputs,
            most_popular: "hello".to_string(),
            longest_input: "hello".to_string(),
            longest_input_len: 5,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "inputs": { "hello": 2 },
                "most_popular": "hello",
                "longest_input_received": "hello",
                "longest_input_len": 5,
            })
        );
    }
}
