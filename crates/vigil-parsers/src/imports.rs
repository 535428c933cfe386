//! Import extraction for JavaScript/TypeScript.
//!
//! Pure syntax: every top-level `import` statement is lowered to an
//! [`ImportRecord`] carrying its module specifier and the list of bound
//! specifiers. Interpreting which bindings matter (audit target, action
//! helpers) is the enforcement crate's job.

use tree_sitter::Node;

use crate::treesitter::node_text;

/// How a specifier binds its local name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifierKind {
    /// `import foo from "m"`
    Default,
    /// `import { foo } from "m"` or `import { foo as bar } from "m"`
    Named,
    /// `import * as ns from "m"`
    Namespace,
}

/// One name brought into scope by an import statement.
#[derive(Debug, Clone)]
pub struct ImportSpecifier {
    /// Exported name on the origin module ("default" for default imports).
    pub imported: String,
    /// Local alias the file actually uses.
    pub local: String,
    pub kind: SpecifierKind,
}

/// One `import` statement.
#[derive(Debug, Clone)]
pub struct ImportRecord {
    /// Module specifier with quotes stripped.
    pub source: String,
    pub specifiers: Vec<ImportSpecifier>,
    /// 1-based line of the statement.
    pub line: u32,
}

/// Collect every import statement under `root` in source order.
///
/// This is a complete pass over the top-level statement list: callers may
/// rely on the returned table covering the whole file, including imports
/// that appear after their first use site.
pub fn collect_imports(root: Node<'_>, source: &str) -> Vec<ImportRecord> {
    let mut records = Vec::new();
    let mut cursor = root.walk();
    for stmt in root.named_children(&mut cursor) {
        if stmt.kind() != "import_statement" {
            continue;
        }
        // Type-only imports are erased at runtime and bind no callable name.
        if stmt.child(1).is_some_and(|c| c.kind() == "type") {
            continue;
        }
        let Some(source_node) = stmt.child_by_field_name("source") else {
            continue;
        };
        let module = node_text(source_node, source)
            .trim_matches(|c| c == '"' || c == '\'')
            .to_string();

        let mut specifiers = Vec::new();
        let mut stmt_cursor = stmt.walk();
        for child in stmt.named_children(&mut stmt_cursor) {
            if child.kind() == "import_clause" {
                collect_clause(child, source, &mut specifiers);
            }
        }

        records.push(ImportRecord {
            source: module,
            specifiers,
            line: stmt.start_position().row as u32 + 1,
        });
    }
    records
}

fn collect_clause(clause: Node<'_>, source: &str, out: &mut Vec<ImportSpecifier>) {
    let mut cursor = clause.walk();
    for child in clause.named_children(&mut cursor) {
        match child.kind() {
            "identifier" => out.push(ImportSpecifier {
                imported: "default".to_string(),
                local: node_text(child, source).to_string(),
                kind: SpecifierKind::Default,
            }),
            "named_imports" => {
                let mut named_cursor = child.walk();
                for spec in child.named_children(&mut named_cursor) {
                    if spec.kind() != "import_specifier" {
                        continue;
                    }
                    let Some(name) = spec.child_by_field_name("name") else {
                        continue;
                    };
                    let imported = node_text(name, source).to_string();
                    let local = spec
                        .child_by_field_name("alias")
                        .map(|a| node_text(a, source).to_string())
                        .unwrap_or_else(|| imported.clone());
                    out.push(ImportSpecifier {
                        imported,
                        local,
                        kind: SpecifierKind::Named,
                    });
                }
            }
            "namespace_import" => {
                let mut ns_cursor = child.walk();
                for ns_child in child.named_children(&mut ns_cursor) {
                    if ns_child.kind() == "identifier" {
                        out.push(ImportSpecifier {
                            imported: "*".to_string(),
                            local: node_text(ns_child, source).to_string(),
                            kind: SpecifierKind::Namespace,
                        });
                    }
                }
            }
            _ => {}
        }
    }
}
