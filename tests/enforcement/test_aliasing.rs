// Import-alias tracking and include/exclude filtering.
use std::collections::BTreeMap;

use vigil_core::config::{AuditTarget, ModuleFilter, VigilConfig};
use vigil_enforce::engine::AuditEngine;
use vigil_enforce::types::Diagnostic;

use crate::common;

fn analyze_with(config: VigilConfig, source: &str) -> Vec<Diagnostic> {
    AuditEngine::new(config)
        .analyze_file(&common::parse(source))
        .diagnostics
}

#[test]
fn test_renamed_action_import_is_tracked_by_local_name() {
    let src = format!(
        "import {{ click as press }} from '@ember/test-helpers';
{}
test('renamed', async function (assert) {{
  await press('.primary');
}});
",
        common::AUDIT_IMPORT
    );
    let errors = common::analysis_errors(&src);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("press"));
}

#[test]
fn test_original_name_unused_after_rename() {
    // Only the local alias is bound; a bare `click` is some other function.
    let src = format!(
        "import {{ click as press }} from '@ember/test-helpers';
{}
test('shadowed', async function (assert) {{
  await click('.primary');
}});
",
        common::AUDIT_IMPORT
    );
    assert!(common::analyze(&src).is_empty());
}

#[test]
fn test_renamed_audit_import_satisfies_adjacency() {
    let src = "import { click } from '@ember/test-helpers';
import audit from 'ember-a11y-testing/test-support/audit';
test('aliased audit', async function (assert) {
  await click('.primary');
  await audit();
});
";
    assert!(common::analyze(src).is_empty());
}

#[test]
fn test_fix_uses_renamed_audit_local() {
    let src = "import { click } from '@ember/test-helpers';
import audit from 'ember-a11y-testing/test-support/audit';
test('aliased audit', async function (assert) {
  await click('.primary');
});
";
    let fixed = common::fix(src);
    assert!(fixed.contains("await audit();"));
    assert!(!fixed.contains("a11yAudit"));
}

#[test]
fn test_namespace_import_does_not_bind_actions() {
    let src = format!(
        "import * as helpers from '@ember/test-helpers';
{}
test('namespace', async function (assert) {{
  await helpers.click('.primary');
}});
",
        common::AUDIT_IMPORT
    );
    assert!(common::analyze(&src).is_empty());
}

#[test]
fn test_excluded_helper_is_not_audited() {
    let mut action_modules = BTreeMap::new();
    action_modules.insert(
        "@ember/test-helpers".to_string(),
        ModuleFilter {
            include: vec![],
            exclude: vec!["visit".to_string()],
        },
    );
    let config = VigilConfig {
        action_modules,
        ..VigilConfig::default()
    };
    let src = format!(
        "{}{}
test('excluded', async function (assert) {{
  await visit('/');
  await click('.primary');
  await a11yAudit();
}});
",
        common::HELPERS_IMPORT,
        common::AUDIT_IMPORT
    );
    assert!(analyze_with(config, &src).is_empty());
}

#[test]
fn test_custom_module_requires_explicit_include() {
    let mut action_modules = BTreeMap::new();
    action_modules.insert(
        "my-helpers".to_string(),
        ModuleFilter {
            include: vec!["press".to_string()],
            exclude: vec![],
        },
    );
    let config = VigilConfig {
        action_modules,
        ..VigilConfig::default()
    };
    let src = format!(
        "import {{ press, hover }} from 'my-helpers';
{}
test('custom', async function (assert) {{
  await press('.primary');
  await hover('.primary');
}});
",
        common::AUDIT_IMPORT
    );
    let diagnostics = analyze_with(config, &src);
    // `press` is included, `hover` is not
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("press"));
}

#[test]
fn test_custom_audit_target_named_export() {
    let config = VigilConfig {
        audit_target: AuditTarget {
            module_path: "my-audit".to_string(),
            export_name: "runAudit".to_string(),
        },
        ..VigilConfig::default()
    };
    let src = "import { click } from '@ember/test-helpers';
import { runAudit } from 'my-audit';
test('custom audit', async function (assert) {
  await click('.primary');
  await runAudit();
});
";
    assert!(analyze_with(config, src).is_empty());
}

#[test]
fn test_custom_audit_target_still_falls_back_to_conventional_name() {
    // Without an import of the configured target, adjacency is checked
    // against the conventional `a11yAudit` name and a warning is emitted.
    let config = VigilConfig {
        audit_target: AuditTarget {
            module_path: "my-audit".to_string(),
            export_name: "runAudit".to_string(),
        },
        ..VigilConfig::default()
    };
    let src = "import { click } from '@ember/test-helpers';
test('no audit import', async function (assert) {
  await click('.primary');
  await a11yAudit();
});
";
    let diagnostics = analyze_with(config, src);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, "W001");
    assert!(diagnostics[0].message.contains("my-audit"));
}
