//! Fix synthesis: minimal text edits that insert the missing audit call.
//!
//! Every synthesized edit references exactly the local audit name resolved
//! by the binding phase, preserves the original statement's indentation, and
//! keeps suspension semantics intact: an awaited action stays awaited, and
//! the inserted audit call is awaited whenever the enclosing function is
//! async. Argument contexts never get an edit; inserting a statement there
//! cannot be done without breaking syntax.

use tree_sitter::Node;

use crate::bindings::SymbolTable;
use crate::context::{enclosing_function, is_async_function, CallContext};
use crate::types::TextEdit;
use vigil_parsers::treesitter::node_text;

/// Synthesize the edit for one violated call site, or `None` when autofix is
/// unsafe for its context.
pub fn synthesize(
    context: &CallContext<'_>,
    source: &str,
    table: &SymbolTable,
) -> Option<TextEdit> {
    match context {
        CallContext::Argument { .. } => None,
        CallContext::Expression { statement } => Some(expression_fix(*statement, source, table)),
        CallContext::Return { statement } => return_fix(*statement, source, table),
    }
}

/// Insert `a11yAudit();` (awaited where appropriate) on a new line directly
/// after the action statement, at the same column.
fn expression_fix(statement: Node<'_>, source: &str, table: &SymbolTable) -> TextEdit {
    let expr = first_expression(statement);
    let had_await = expr.is_some_and(|e| e.kind() == "await_expression");
    let prefix = await_prefix(statement, had_await);
    let indent = line_indent(source, statement.start_byte());

    TextEdit::insertion(
        statement.end_byte(),
        format!("\n{indent}{prefix}{}();", table.audit_name()),
    )
}

/// Rewrite `return <expr>;` into `<await?> <expr>;` followed by
/// `return a11yAudit();`, so the audit still runs after the action while the
/// function's return value becomes the audit call.
fn return_fix(statement: Node<'_>, source: &str, table: &SymbolTable) -> Option<TextEdit> {
    let returned = first_expression(statement)?;
    let had_await = returned.kind() == "await_expression";
    // Never double the suspension marker: when the returned expression was
    // already awaited, reuse its inner call text.
    let expr = if had_await {
        first_expression(returned)?
    } else {
        returned
    };
    let expr_text = node_text(expr, source);
    let prefix = await_prefix(statement, had_await);
    let indent = line_indent(source, statement.start_byte());

    Some(TextEdit::replacement(
        statement.start_byte(),
        statement.end_byte(),
        format!(
            "{prefix}{expr_text};\n{indent}return {}();",
            table.audit_name()
        ),
    ))
}

/// `"await "` when the original expression was suspended or the enclosing
/// function is suspension-capable; empty otherwise.
fn await_prefix(statement: Node<'_>, had_await: bool) -> &'static str {
    let fn_async = enclosing_function(statement)
        .map(is_async_function)
        .unwrap_or(false);
    if had_await || fn_async {
        "await "
    } else {
        ""
    }
}

/// Recognize `assert.throws(...)`-style wrappers; used by the reporter to
/// tailor the remediation hint for unfixable argument contexts.
pub fn is_assert_throws(enclosing_call: Node<'_>, source: &str) -> bool {
    let Some(callee) = enclosing_call.child_by_field_name("function") else {
        return false;
    };
    if callee.kind() != "member_expression" {
        return false;
    }
    let object = callee.child_by_field_name("object");
    let property = callee.child_by_field_name("property");
    matches!(
        (object, property),
        (Some(o), Some(p))
            if node_text(o, source) == "assert" && node_text(p, source) == "throws"
    )
}

fn first_expression(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment");
    found
}

/// Leading whitespace of the line the byte offset sits on, when the offset
/// is at the start of that line's content. Statements mid-line get no
/// indentation (the inserted line starts at column zero rather than
/// inheriting unrelated text).
fn line_indent(source: &str, byte: usize) -> &str {
    let line_start = source[..byte].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let prefix = &source[line_start..byte];
    if prefix.chars().all(|c| c == ' ' || c == '\t') {
        prefix
    } else {
        ""
    }
}
