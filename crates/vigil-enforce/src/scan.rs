//! Call-site scanning: every call expression whose callee resolves to an
//! action binding's local name, bare or awaited.
//!
//! Only identifier callees are considered; an action name passed around as
//! a value (e.g. a callback reference) is not a call site and is out of this
//! engine's scope.

use tree_sitter::Node;

use crate::bindings::SymbolTable;
use vigil_parsers::treesitter::node_text;

/// One matched action call, read-only downstream.
#[derive(Debug, Clone)]
pub struct ActionCall<'a> {
    /// The `call_expression` node itself.
    pub call: Node<'a>,
    /// Local name the callee resolved through.
    pub callee_local: String,
    /// Whether the call is directly wrapped in an `await` expression.
    pub is_suspended: bool,
}

/// Collect all action calls under `root` in source order.
pub fn action_calls<'a>(
    root: Node<'a>,
    source: &str,
    table: &SymbolTable,
) -> Vec<ActionCall<'a>> {
    let mut calls = Vec::new();
    walk(root, source, table, &mut calls);
    calls.sort_by_key(|c| c.call.start_byte());
    calls
}

fn walk<'a>(node: Node<'a>, source: &str, table: &SymbolTable, out: &mut Vec<ActionCall<'a>>) {
    if node.kind() == "call_expression" {
        if let Some(callee) = node.child_by_field_name("function") {
            if callee.kind() == "identifier" {
                let name = node_text(callee, source);
                if table.is_action(name) {
                    let is_suspended = node
                        .parent()
                        .is_some_and(|p| p.kind() == "await_expression");
                    out.push(ActionCall {
                        call: node,
                        callee_local: name.to_string(),
                        is_suspended,
                    });
                }
            }
        }
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        walk(child, source, table, out);
    }
}
