//! Configuration file loading for vigil.
//!
//! Reads `.vigil.json` and provides typed access to the audit target and the
//! action-module table. Falls back to sensible defaults when the config file
//! is missing or incomplete: configuration resolution never fails.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// The module whose helpers are audited when no action modules are configured.
pub const DEFAULT_ACTION_MODULE: &str = "@ember/test-helpers";

/// Interaction helpers audited by default for [`DEFAULT_ACTION_MODULE`].
pub const DEFAULT_ACTION_HELPERS: &[&str] = &[
    // route helpers
    "visit",
    // dom interaction helpers
    "blur",
    "click",
    "doubleClick",
    "fillIn",
    "focus",
    "tap",
    "triggerEvent",
    "triggerKeyEvent",
    "typeIn",
    // rendering helpers
    "render",
];

/// Module and export the required audit call must come from.
pub const DEFAULT_AUDIT_MODULE: &str = "ember-a11y-testing/test-support/audit";
pub const DEFAULT_AUDIT_EXPORT: &str = "default";

/// Local name assumed for the audit helper when it is not imported anywhere
/// in the analyzed file.
pub const FALLBACK_AUDIT_NAME: &str = "a11yAudit";

/// Top-level vigil configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VigilConfig {
    #[serde(default = "default_version")]
    pub version: String,
    /// Where the audit helper is imported from.
    #[serde(default)]
    pub audit_target: AuditTarget,
    /// Modules whose exported helpers count as action calls.
    /// Keyed by module specifier.
    #[serde(default)]
    pub action_modules: BTreeMap<String, ModuleFilter>,
    /// Optional glob restricting which files are analyzed
    /// (e.g. `tests/acceptance/**`).
    #[serde(default)]
    pub scope: Option<String>,
    /// Upper bound on report-fix-reanalyze passes.
    #[serde(default = "default_max_fix_passes")]
    pub max_fix_passes: u32,
}

/// The designated audit function: a module specifier plus the export to track.
/// `export_name == "default"` matches default-import specifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTarget {
    pub module_path: String,
    pub export_name: String,
}

/// Include/exclude filter for one action module. `exclude` always wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleFilter {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}
fn default_max_fix_passes() -> u32 {
    10
}

impl Default for AuditTarget {
    fn default() -> Self {
        Self {
            module_path: DEFAULT_AUDIT_MODULE.to_string(),
            export_name: DEFAULT_AUDIT_EXPORT.to_string(),
        }
    }
}

impl Default for VigilConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            audit_target: AuditTarget::default(),
            action_modules: BTreeMap::new(),
            scope: None,
            max_fix_passes: default_max_fix_passes(),
        }
    }
}

impl ModuleFilter {
    /// Effective helper-name set for this filter.
    ///
    /// An empty `include` on the default action module falls back to
    /// [`DEFAULT_ACTION_HELPERS`]; every other module contributes only what
    /// it explicitly includes. Excluded names are removed last, so `exclude`
    /// wins over `include` on overlap.
    pub fn effective_names(&self, is_default_module: bool) -> BTreeSet<String> {
        let base: Vec<String> = if self.include.is_empty() && is_default_module {
            DEFAULT_ACTION_HELPERS.iter().map(|s| s.to_string()).collect()
        } else {
            self.include.clone()
        };
        base.into_iter()
            .filter(|name| !self.exclude.iter().any(|e| e == name))
            .collect()
    }
}

impl VigilConfig {
    /// Load configuration from `.vigil.json` inside the given directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(dir: &Path) -> Self {
        let config_path = dir.join(".vigil.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str::<Self>(&content) {
            Ok(cfg) => cfg.normalized(),
            Err(e) => {
                eprintln!(
                    "vigil: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Canonical form: the default action module is always present, so the
    /// binding resolver can treat the table uniformly.
    pub fn normalized(mut self) -> Self {
        self.action_modules
            .entry(DEFAULT_ACTION_MODULE.to_string())
            .or_default();
        self
    }

    /// Effective include-minus-exclude helper set per action module.
    /// An empty table behaves as the default module with its built-in set.
    pub fn effective_action_modules(&self) -> BTreeMap<String, BTreeSet<String>> {
        let mut modules = self.action_modules.clone();
        modules.entry(DEFAULT_ACTION_MODULE.to_string()).or_default();
        modules
            .into_iter()
            .map(|(source, filter)| {
                let is_default = source == DEFAULT_ACTION_MODULE;
                let names = filter.effective_names(is_default);
                (source, names)
            })
            .collect()
    }
}
