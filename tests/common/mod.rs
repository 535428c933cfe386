//! Shared test helpers for vigil integration tests.
//!
//! Import from any integration test file with:
//!   `#[path = "common/mod.rs"] mod common;`

use std::path::Path;

use vigil_core::config::VigilConfig;
use vigil_enforce::engine::AuditEngine;
use vigil_enforce::types::Diagnostic;
use vigil_parsers::treesitter::{JsParser, SourceFile};

pub const HELPERS_IMPORT: &str = "import { click, blur, fillIn, visit } from '@ember/test-helpers';\n";
pub const AUDIT_IMPORT: &str = "import a11yAudit from 'ember-a11y-testing/test-support/audit';\n";

#[allow(dead_code)]
pub fn parse(source: &str) -> SourceFile {
    let mut parser = JsParser::new();
    parser
        .parse_source(
            "javascript",
            Path::new("tests/acceptance/sample-test.js"),
            source,
        )
        .expect("test source should parse")
}

/// Analyze a source string with the default configuration.
#[allow(dead_code)]
pub fn analyze(source: &str) -> Vec<Diagnostic> {
    AuditEngine::new(VigilConfig::default())
        .analyze_file(&parse(source))
        .diagnostics
}

/// Error diagnostics only (drops the W001 fallback warning).
#[allow(dead_code)]
pub fn analysis_errors(source: &str) -> Vec<Diagnostic> {
    analyze(source).into_iter().filter(|d| d.is_error()).collect()
}

/// Fix a source string to convergence with the default configuration.
#[allow(dead_code)]
pub fn fix(source: &str) -> String {
    AuditEngine::new(VigilConfig::default())
        .fix_file(&parse(source))
        .expect("fix pass should not fail")
        .text
}
