//! Output formatters for vigil command results.
//!
//! Two output modes:
//! - **Human** (default): per-diagnostic lines plus a summary, empty stdout
//!   on a clean run
//! - **JSON** (`--json`): machine-readable structured output

pub mod human;
pub mod json;

use vigil_enforce::types::{CheckResult, FixResult};

pub trait OutputFormatter {
    fn format_check(&self, result: &CheckResult) -> String;
    fn format_fix(&self, result: &FixResult) -> String;
}
