use crate::OutputFormatter;
use vigil_enforce::types::{CheckResult, FixResult};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }

    fn format_fix(&self, result: &FixResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
}
