//! Enforcement engine for audit adjacency.
//!
//! Verifies that every call to a configured action helper (UI-interaction
//! test helpers such as `click` or `visit`) is immediately followed by a call
//! to the designated audit function, and synthesizes text edits where an
//! insertion is syntactically safe. Diagnostics:
//! - A001: missing audit call after an action helper (fixable in Expression
//!   and Return contexts)
//! - A002: missing audit call where the helper is an argument to another
//!   call (reported, never fixed)
//! - W001: audit helper not imported; analysis fell back to the
//!   conventional local name
//!
//! Analysis runs in two strict phases per file: the full import table is
//! collected first, then call sites are classified and checked. The engine
//! never executes the analyzed program.

pub mod types;
pub mod bindings;
pub mod scan;
pub mod context;
pub mod adjacency;
pub mod fixes;
pub mod engine;
