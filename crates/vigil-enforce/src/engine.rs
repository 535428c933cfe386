use std::path::Path;

use vigil_core::config::VigilConfig;
use vigil_parsers::treesitter::{JsParser, ParseError, SourceFile};

use crate::adjacency;
use crate::bindings::{self, SymbolTable};
use crate::context::{self, CallContext};
use crate::fixes;
use crate::scan::{self, ActionCall};
use crate::types::{Diagnostic, TextEdit};

/// Core adjacency-enforcement engine. Owns the resolved configuration and
/// analyzes one parsed file at a time; no state survives across files.
pub struct AuditEngine {
    config: VigilConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// All diagnostics for one file, in source order.
#[derive(Debug, Clone)]
pub struct FileAnalysis {
    pub file: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileAnalysis {
    pub fn fixable_count(&self) -> u32 {
        self.diagnostics.iter().filter(|d| d.fix.is_some()).count() as u32
    }
}

/// Result of one fix-application pass.
#[derive(Debug, Clone)]
pub struct AppliedFixes {
    pub text: String,
    pub applied: u32,
    /// Edits deferred to a later pass because they overlapped an applied one.
    pub deferred: u32,
}

/// Result of running the report-fix-reanalyze loop to convergence.
#[derive(Debug, Clone)]
pub struct FixOutcome {
    pub text: String,
    pub passes: u32,
    pub fixes_applied: u32,
    /// Diagnostics still present at the fixpoint (unfixable contexts and
    /// warnings).
    pub remaining: Vec<Diagnostic>,
}

impl AuditEngine {
    pub fn new(config: VigilConfig) -> Self {
        Self {
            config: config.normalized(),
        }
    }

    pub fn config(&self) -> &VigilConfig {
        &self.config
    }

    /// Analyze one parsed file.
    ///
    /// Phase one (binding resolution) completes over the whole file before
    /// phase two (call-site analysis) starts.
    pub fn analyze_file(&self, file: &SourceFile) -> FileAnalysis {
        let table = bindings::resolve(file.root(), &file.text, &self.config);
        let calls = scan::action_calls(file.root(), &file.text, &table);

        let mut diagnostics = Vec::new();

        if table.audit.is_fallback() && !calls.is_empty() {
            diagnostics.push(Diagnostic {
                code: "W001".to_string(),
                severity: "WARNING".to_string(),
                category: "audit_not_imported".to_string(),
                message: format!(
                    "`{}` is not imported from `{}`; assuming the conventional name `{}`",
                    self.config.audit_target.export_name,
                    self.config.audit_target.module_path,
                    table.audit_name(),
                ),
                file: file.path.clone(),
                line: 1,
                column: 1,
                fix_hint: Some(format!(
                    "Import the audit helper from `{}`",
                    self.config.audit_target.module_path
                )),
                fix: None,
            });
        }

        for call in &calls {
            let Some(ctx) = context::classify(call) else {
                continue;
            };
            let result = adjacency::check(&ctx, &file.text, &table);
            if result.satisfied {
                continue;
            }
            diagnostics.push(self.violation(file, call, &ctx, &table));
        }

        FileAnalysis {
            file: file.path.clone(),
            diagnostics,
        }
    }

    fn violation(
        &self,
        file: &SourceFile,
        call: &ActionCall<'_>,
        ctx: &CallContext<'_>,
        table: &SymbolTable,
    ) -> Diagnostic {
        let position = call.call.start_position();
        let line = position.row as u32 + 1;
        let column = position.column as u32 + 1;
        let audit = table.audit_name();

        match ctx {
            CallContext::Argument { enclosing_call } => {
                let hint = if fixes::is_assert_throws(*enclosing_call, &file.text) {
                    format!(
                        "`assert.throws` wraps `{}`; call `{}` after the assertion statement",
                        call.callee_local, audit
                    )
                } else {
                    format!(
                        "`{}` is an argument here; move it to its own statement and call `{}` after it",
                        call.callee_local, audit
                    )
                };
                Diagnostic {
                    code: "A002".to_string(),
                    severity: "ERROR".to_string(),
                    category: "unsafe_autofix".to_string(),
                    message: format!(
                        "Call `{}` after action helper `{}` (no autofix in argument position)",
                        audit, call.callee_local
                    ),
                    file: file.path.clone(),
                    line,
                    column,
                    fix_hint: Some(hint),
                    fix: None,
                }
            }
            _ => Diagnostic {
                code: "A001".to_string(),
                severity: "ERROR".to_string(),
                category: "missing_audit".to_string(),
                message: format!(
                    "Call `{}` after action helper `{}`",
                    audit, call.callee_local
                ),
                file: file.path.clone(),
                line,
                column,
                fix_hint: Some(format!(
                    "Insert a `{}()` call immediately after this statement",
                    audit
                )),
                fix: fixes::synthesize(ctx, &file.text, table),
            },
        }
    }

    /// Apply as many synthesized edits as possible in one pass.
    ///
    /// Edits are sorted by range and applied back-to-front so earlier
    /// offsets stay valid; an edit overlapping an already-selected one is
    /// deferred to the next convergence pass rather than applied.
    pub fn apply_fixes(source: &str, diagnostics: &[Diagnostic]) -> AppliedFixes {
        let mut edits: Vec<&TextEdit> = diagnostics.iter().filter_map(|d| d.fix.as_ref()).collect();
        edits.sort_by_key(|e| (e.start_byte, e.end_byte));

        let mut selected: Vec<&TextEdit> = Vec::new();
        let mut deferred = 0u32;
        for edit in edits {
            if selected.iter().any(|kept| kept.overlaps(edit)) {
                deferred += 1;
            } else {
                selected.push(edit);
            }
        }

        let mut text = source.to_string();
        for edit in selected.iter().rev() {
            text.replace_range(edit.start_byte..edit.end_byte, &edit.text);
        }

        AppliedFixes {
            text,
            applied: selected.len() as u32,
            deferred,
        }
    }

    /// Run report-fix-reanalyze until no fixable diagnostic remains or the
    /// pass budget is exhausted. Applying a fix and re-running never
    /// re-reports the fixed call site, so the loop converges.
    pub fn fix_file(&self, file: &SourceFile) -> Result<FixOutcome, EngineError> {
        let mut parser = JsParser::new();
        let mut current = parser.parse_source(
            &file.language,
            Path::new(&file.path),
            &file.text,
        )?;

        let mut passes = 0u32;
        let mut fixes_applied = 0u32;

        let remaining = loop {
            let analysis = self.analyze_file(&current);
            if analysis.fixable_count() == 0 || passes >= self.config.max_fix_passes {
                break analysis.diagnostics;
            }

            let pass = Self::apply_fixes(&current.text, &analysis.diagnostics);
            passes += 1;
            fixes_applied += pass.applied;
            if pass.applied == 0 {
                break analysis.diagnostics;
            }

            let previous_hash = current.content_hash;
            let language = current.language.clone();
            let path = current.path.clone();
            current = parser.parse_source(&language, Path::new(&path), &pass.text)?;
            if current.content_hash == previous_hash {
                break self.analyze_file(&current).diagnostics;
            }
        };

        Ok(FixOutcome {
            text: current.text,
            passes,
            fixes_applied,
            remaining,
        })
    }
}

/// Split diagnostics by severity, preserving order within each bucket.
pub fn partition_diagnostics(
    diagnostics: Vec<Diagnostic>,
    errors: &mut Vec<Diagnostic>,
    warnings: &mut Vec<Diagnostic>,
) {
    for d in diagnostics {
        if d.is_error() {
            errors.push(d);
        } else {
            warnings.push(d);
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
