//! Context resolution: classify each action call's enclosing construct and
//! locate its statement within the nearest enclosing statement sequence.
//!
//! Adjacency is always sibling-level. A call nested three loops deep is
//! checked against the next statement of its own block, never against
//! statements of an outer block.

use tree_sitter::Node;

use crate::scan::ActionCall;

/// Node kinds that hold an ordered statement sequence.
const SEQUENCE_KINDS: &[&str] = &["program", "statement_block", "switch_case", "switch_default"];

/// Node kinds that introduce a function body (used for async detection).
const FUNCTION_KINDS: &[&str] = &[
    "function_declaration",
    "function_expression",
    "function",
    "arrow_function",
    "method_definition",
    "generator_function",
    "generator_function_declaration",
];

/// The construct enclosing a matched call.
#[derive(Debug, Clone)]
pub enum CallContext<'a> {
    /// `click();` or `await click();` — the statement is the
    /// `expression_statement` node.
    Expression { statement: Node<'a> },
    /// `return click();` or `return await click();` — the statement is the
    /// `return_statement` node.
    Return { statement: Node<'a> },
    /// `other(click())` — the call is an argument of `enclosing_call`.
    /// Unsafe for autofix: there is no following sibling statement to check
    /// or extend.
    Argument { enclosing_call: Node<'a> },
}

/// Classify a call site. Returns `None` for constructs this engine does not
/// reason about (e.g. the call initializing a variable declarator), matching
/// the scope of the adjacency invariant.
pub fn classify<'a>(call: &ActionCall<'a>) -> Option<CallContext<'a>> {
    // Adjacency is judged from the outermost expression node: the await
    // wrapper when the call is suspended, the call itself otherwise.
    let outer = if call.is_suspended {
        call.call.parent()?
    } else {
        call.call
    };
    let parent = outer.parent()?;

    match parent.kind() {
        "expression_statement" => Some(CallContext::Expression { statement: parent }),
        "return_statement" => Some(CallContext::Return { statement: parent }),
        "arguments" => {
            let enclosing = parent.parent()?;
            (enclosing.kind() == "call_expression")
                .then_some(CallContext::Argument { enclosing_call: enclosing })
        }
        _ => None,
    }
}

impl<'a> CallContext<'a> {
    /// The statement node whose sibling sequence adjacency is checked
    /// against, if the context has one.
    pub fn statement(&self) -> Option<Node<'a>> {
        match self {
            CallContext::Expression { statement } | CallContext::Return { statement } => {
                Some(*statement)
            }
            CallContext::Argument { .. } => None,
        }
    }
}

/// Next statement after `statement` in its immediately enclosing statement
/// sequence. `None` when the statement is last, or when its parent is not a
/// sequence at all (e.g. the braceless body of `if (x) click();`).
pub fn next_sibling_statement(statement: Node<'_>) -> Option<Node<'_>> {
    let parent = statement.parent()?;
    if !SEQUENCE_KINDS.contains(&parent.kind()) {
        return None;
    }
    let mut next = statement.next_named_sibling();
    while let Some(node) = next {
        if node.kind() == "comment" {
            next = node.next_named_sibling();
        } else {
            return Some(node);
        }
    }
    None
}

/// Nearest enclosing function-like ancestor, via an explicit ancestor walk.
pub fn enclosing_function(node: Node<'_>) -> Option<Node<'_>> {
    let mut current = node.parent();
    while let Some(n) = current {
        if FUNCTION_KINDS.contains(&n.kind()) {
            return Some(n);
        }
        current = n.parent();
    }
    None
}

/// Whether a function node is declared suspension-capable (`async`).
pub fn is_async_function(function: Node<'_>) -> bool {
    let mut cursor = function.walk();
    let found = function
        .children(&mut cursor)
        .any(|child| child.kind() == "async");
    found
}
