//! The adjacency check: is the statement after an action call a call to the
//! audit binding?

use tree_sitter::Node;

use crate::bindings::SymbolTable;
use crate::context::{next_sibling_statement, CallContext};
use vigil_parsers::treesitter::node_text;

/// Outcome of checking one call site.
#[derive(Debug, Clone)]
pub struct AdjacencyResult<'a> {
    pub satisfied: bool,
    /// The sibling statement that was inspected, when one exists.
    pub next: Option<Node<'a>>,
}

/// Check adjacency for a classified call site.
///
/// Argument contexts fail by construction: an argument has no sibling
/// statement that could hold the audit call.
pub fn check<'a>(
    context: &CallContext<'a>,
    source: &str,
    table: &SymbolTable,
) -> AdjacencyResult<'a> {
    let Some(statement) = context.statement() else {
        return AdjacencyResult {
            satisfied: false,
            next: None,
        };
    };

    let next = next_sibling_statement(statement);
    let satisfied = next.is_some_and(|n| is_audit_statement(n, source, table));
    AdjacencyResult { satisfied, next }
}

/// Whether a statement is a direct or awaited call to the audit binding,
/// either as an expression statement or as a return statement.
pub fn is_audit_statement(statement: Node<'_>, source: &str, table: &SymbolTable) -> bool {
    let expr = match statement.kind() {
        "expression_statement" | "return_statement" => {
            match first_non_comment_child(statement) {
                Some(e) => e,
                None => return false,
            }
        }
        _ => return false,
    };

    let call = if expr.kind() == "await_expression" {
        match first_non_comment_child(expr) {
            Some(inner) => inner,
            None => return false,
        }
    } else {
        expr
    };

    if call.kind() != "call_expression" {
        return false;
    }
    let Some(callee) = call.child_by_field_name("function") else {
        return false;
    };
    callee.kind() == "identifier" && node_text(callee, source) == table.audit_name()
}

fn first_non_comment_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment");
    found
}
