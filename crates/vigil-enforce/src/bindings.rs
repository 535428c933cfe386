//! Symbol resolution: which local names are action helpers, and what the
//! audit function is called in this file.
//!
//! Resolution is strictly two-phase. Phase one collects every import in the
//! file (a binding's origin may appear in any import statement, including
//! ones after the first use site); phase two matches the merged table
//! against the configuration. Call-site analysis only ever sees the
//! finished [`SymbolTable`].

use std::collections::BTreeMap;

use tree_sitter::Node;
use vigil_core::config::{VigilConfig, FALLBACK_AUDIT_NAME};
use vigil_parsers::imports::{collect_imports, SpecifierKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    Default,
    Named,
}

/// Resolved mapping from a local identifier to its origin.
#[derive(Debug, Clone)]
pub struct Binding {
    pub local_name: String,
    pub origin_module: String,
    pub origin_export: String,
    pub kind: BindingKind,
}

/// The audit function's local name, either resolved from an import or
/// assumed by convention when the audit target is never imported.
#[derive(Debug, Clone)]
pub enum AuditBinding {
    Imported(Binding),
    Fallback(String),
}

impl AuditBinding {
    pub fn local_name(&self) -> &str {
        match self {
            AuditBinding::Imported(b) => &b.local_name,
            AuditBinding::Fallback(name) => name,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AuditBinding::Fallback(_))
    }
}

/// Per-file binding table, immutable once resolved.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    pub audit: AuditBinding,
    /// Action bindings keyed by local name. A local name shadowed by a later
    /// import of the same name resolves to the later origin.
    pub actions: BTreeMap<String, Binding>,
}

impl SymbolTable {
    pub fn audit_name(&self) -> &str {
        self.audit.local_name()
    }

    pub fn is_action(&self, local_name: &str) -> bool {
        self.actions.contains_key(local_name)
    }
}

/// Resolve the binding table for one file.
pub fn resolve(root: Node<'_>, source: &str, config: &VigilConfig) -> SymbolTable {
    let records = collect_imports(root, source);
    let action_modules = config.effective_action_modules();

    let mut audit = None;
    let mut actions: BTreeMap<String, Binding> = BTreeMap::new();

    for record in &records {
        if audit.is_none() && record.source == config.audit_target.module_path {
            audit = record.specifiers.iter().find_map(|spec| {
                let matches = if config.audit_target.export_name == "default" {
                    spec.kind == SpecifierKind::Default
                } else {
                    spec.kind == SpecifierKind::Named
                        && spec.imported == config.audit_target.export_name
                };
                matches.then(|| Binding {
                    local_name: spec.local.clone(),
                    origin_module: record.source.clone(),
                    origin_export: spec.imported.clone(),
                    kind: binding_kind(spec.kind),
                })
            });
        }

        let Some(names) = action_modules.get(&record.source) else {
            continue;
        };
        for spec in &record.specifiers {
            let tracked = match spec.kind {
                SpecifierKind::Named => names.contains(&spec.imported),
                SpecifierKind::Default => names.contains("default"),
                // Namespace members are called as `ns.click()`, which is not
                // an identifier callee; the scanner never matches those.
                SpecifierKind::Namespace => false,
            };
            if tracked {
                actions.insert(
                    spec.local.clone(),
                    Binding {
                        local_name: spec.local.clone(),
                        origin_module: record.source.clone(),
                        origin_export: spec.imported.clone(),
                        kind: binding_kind(spec.kind),
                    },
                );
            }
        }
    }

    let audit = match audit {
        Some(binding) => AuditBinding::Imported(binding),
        None => AuditBinding::Fallback(FALLBACK_AUDIT_NAME.to_string()),
    };

    SymbolTable { audit, actions }
}

fn binding_kind(kind: SpecifierKind) -> BindingKind {
    match kind {
        SpecifierKind::Default => BindingKind::Default,
        _ => BindingKind::Named,
    }
}
