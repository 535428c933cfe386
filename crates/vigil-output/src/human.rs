use crate::OutputFormatter;
use vigil_enforce::types::{CheckResult, Diagnostic, FixResult};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        if result.errors.is_empty() && result.warnings.is_empty() {
            return String::new(); // Clean check = empty stdout
        }

        let mut out = String::new();
        for d in &result.errors {
            out.push_str(&format_diagnostic(d));
        }
        for d in &result.warnings {
            out.push_str(&format_diagnostic(d));
        }

        out.push_str(&format!(
            "\n{} error(s), {} warning(s) in {} file(s)\n",
            result.errors.len(),
            result.warnings.len(),
            result.files_analyzed.len(),
        ));
        out
    }

    fn format_fix(&self, result: &FixResult) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} fix(es) applied across {} file(s) in {} pass(es)\n",
            result.fixes_applied,
            result.files_changed.len(),
            result.passes,
        ));
        if !result.remaining.is_empty() {
            out.push_str(&format!("\n{} issue(s) need manual attention:\n", result.remaining.len()));
            for d in &result.remaining {
                out.push_str(&format_diagnostic(d));
            }
        }
        out
    }
}

fn format_diagnostic(d: &Diagnostic) -> String {
    let mut out = format!(
        "[{} {}] {}:{}:{}\n  {}\n",
        d.code, d.category, d.file, d.line, d.column, d.message,
    );
    if d.fix.is_some() {
        out.push_str("  autofix available (run `vigil fix`)\n");
    } else if let Some(hint) = &d.fix_hint {
        out.push_str(&format!("  hint: {}\n", hint));
    }
    out
}
