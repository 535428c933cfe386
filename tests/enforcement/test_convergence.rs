// Fix-loop convergence: idempotence, multi-pass overlap handling, and
// pass-budget behavior on whole files.
use vigil_core::config::VigilConfig;
use vigil_enforce::engine::AuditEngine;

use crate::common;

#[test]
fn test_fixed_output_reanalyzes_clean() {
    let src = format!(
        "{}{}
test('several', async function (assert) {{
  await visit('/');
  await click('.a');
  await fillIn('input', 'x');
}});
",
        common::HELPERS_IMPORT,
        common::AUDIT_IMPORT
    );
    let fixed = common::fix(&src);
    assert!(common::analyze(&fixed).is_empty());
}

#[test]
fn test_fix_is_idempotent() {
    let src = format!(
        "{}{}
test('several', async function (assert) {{
  await visit('/');
  await click('.a');
}});
",
        common::HELPERS_IMPORT,
        common::AUDIT_IMPORT
    );
    let once = common::fix(&src);
    assert_eq!(common::fix(&once), once);
}

#[test]
fn test_disjoint_fixes_apply_in_one_pass() {
    let src = format!(
        "{}{}
test('several', async function (assert) {{
  await visit('/');
  await click('.a');
}});
",
        common::HELPERS_IMPORT,
        common::AUDIT_IMPORT
    );
    let engine = AuditEngine::new(VigilConfig::default());
    let outcome = engine.fix_file(&common::parse(&src)).unwrap();
    assert_eq!(outcome.fixes_applied, 2);
    assert_eq!(outcome.passes, 1);
    assert!(outcome.remaining.is_empty());
}

#[test]
fn test_overlapping_fixes_converge_across_passes() {
    // The return rewrite overlaps the insertion for the nested call, so the
    // nested fix is deferred and picked up on a later pass.
    let src = format!(
        "{}{}
function run() {{
  return fillIn('input', () => {{ click('.a'); }});
}}
",
        common::HELPERS_IMPORT,
        common::AUDIT_IMPORT
    );
    let engine = AuditEngine::new(VigilConfig::default());
    let outcome = engine.fix_file(&common::parse(&src)).unwrap();
    assert_eq!(outcome.fixes_applied, 2);
    assert!(outcome.passes >= 2);
    assert!(outcome.remaining.is_empty());
    assert!(common::analyze(&outcome.text).is_empty());
}

#[test]
fn test_pass_budget_stops_the_loop() {
    let config = VigilConfig {
        max_fix_passes: 1,
        ..VigilConfig::default()
    };
    let src = format!(
        "{}{}
function run() {{
  return fillIn('input', () => {{ click('.a'); }});
}}
",
        common::HELPERS_IMPORT,
        common::AUDIT_IMPORT
    );
    let engine = AuditEngine::new(config);
    let outcome = engine.fix_file(&common::parse(&src)).unwrap();
    assert_eq!(outcome.passes, 1);
    // one fixable diagnostic is still outstanding at the budget
    assert!(outcome.remaining.iter().any(|d| d.fix.is_some()));
}

#[test]
fn test_unfixable_diagnostics_survive_convergence() {
    let src = format!(
        "{}{}
test('mixed', async function (assert) {{
  await click('.a');
  handle(fillIn('input', 'x'));
}});
",
        common::HELPERS_IMPORT,
        common::AUDIT_IMPORT
    );
    let engine = AuditEngine::new(VigilConfig::default());
    let outcome = engine.fix_file(&common::parse(&src)).unwrap();
    assert_eq!(outcome.fixes_applied, 1);
    assert_eq!(outcome.remaining.len(), 1);
    assert_eq!(outcome.remaining[0].code, "A002");
    assert!(outcome.text.contains("await click('.a');\n  await a11yAudit();"));
}

#[test]
fn test_clean_file_passes_zero() {
    let src = format!(
        "{}{}
test('clean', async function (assert) {{
  await click('.a');
  await a11yAudit();
}});
",
        common::HELPERS_IMPORT,
        common::AUDIT_IMPORT
    );
    let engine = AuditEngine::new(VigilConfig::default());
    let outcome = engine.fix_file(&common::parse(&src)).unwrap();
    assert_eq!(outcome.passes, 0);
    assert_eq!(outcome.fixes_applied, 0);
    assert_eq!(outcome.text, src);
}
