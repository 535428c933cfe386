// Human-readable output for check and fix results.
use vigil_enforce::types::{status_for, CheckInfo, CheckResult, Diagnostic, FixResult};
use vigil_output::human::HumanFormatter;
use vigil_output::OutputFormatter;

use crate::common;

fn check_result(errors: Vec<Diagnostic>, warnings: Vec<Diagnostic>) -> CheckResult {
    CheckResult {
        version: env!("CARGO_PKG_VERSION").into(),
        command: "check".into(),
        status: status_for(&errors, &warnings).into(),
        files_analyzed: vec!["tests/acceptance/sample-test.js".into()],
        errors,
        warnings,
        info: CheckInfo::default(),
    }
}

#[test]
fn test_clean_check_prints_nothing() {
    let out = HumanFormatter.format_check(&check_result(vec![], vec![]));
    assert!(out.is_empty());
}

#[test]
fn test_fixable_error_advertises_autofix() {
    let src = format!(
        "{}{}
test('clicks', async function (assert) {{
  await click('.primary');
}});
",
        common::HELPERS_IMPORT,
        common::AUDIT_IMPORT
    );
    let errors = common::analysis_errors(&src);
    let out = HumanFormatter.format_check(&check_result(errors, vec![]));

    assert!(out.contains("[A001 missing_audit] tests/acceptance/sample-test.js:"));
    assert!(out.contains("autofix available (run `vigil fix`)"));
    assert!(out.contains("1 error(s), 0 warning(s) in 1 file(s)"));
}

#[test]
fn test_unfixable_error_shows_hint() {
    let src = format!(
        "{}{}
test('wrapped', async function (assert) {{
  handle(click('.primary'));
}});
",
        common::HELPERS_IMPORT,
        common::AUDIT_IMPORT
    );
    let errors = common::analysis_errors(&src);
    let out = HumanFormatter.format_check(&check_result(errors, vec![]));

    assert!(out.contains("[A002 unsafe_autofix]"));
    assert!(out.contains("hint: "));
    assert!(!out.contains("autofix available"));
}

#[test]
fn test_fix_summary_counts() {
    let result = FixResult {
        version: env!("CARGO_PKG_VERSION").into(),
        command: "fix".into(),
        status: "ok".into(),
        files_changed: vec!["a.js".into(), "b.js".into()],
        fixes_applied: 3,
        passes: 2,
        remaining: vec![],
    };
    let out = HumanFormatter.format_fix(&result);
    assert!(out.contains("3 fix(es) applied across 2 file(s) in 2 pass(es)"));
    assert!(!out.contains("manual attention"));
}

#[test]
fn test_fix_lists_remaining_issues() {
    let src = format!(
        "{}{}
test('wrapped', async function (assert) {{
  handle(click('.primary'));
}});
",
        common::HELPERS_IMPORT,
        common::AUDIT_IMPORT
    );
    let remaining = common::analysis_errors(&src);
    let result = FixResult {
        version: env!("CARGO_PKG_VERSION").into(),
        command: "fix".into(),
        status: "error".into(),
        files_changed: vec![],
        fixes_applied: 0,
        passes: 0,
        remaining,
    };
    let out = HumanFormatter.format_fix(&result);
    assert!(out.contains("1 issue(s) need manual attention"));
    assert!(out.contains("[A002 unsafe_autofix]"));
}
