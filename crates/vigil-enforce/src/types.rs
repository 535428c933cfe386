use serde::{Deserialize, Serialize};

/// A minimal text edit: replace `start_byte..end_byte` with `text`.
/// Insertions use an empty range (`start_byte == end_byte`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub start_byte: usize,
    pub end_byte: usize,
    pub text: String,
}

impl TextEdit {
    pub fn insertion(at: usize, text: String) -> Self {
        Self {
            start_byte: at,
            end_byte: at,
            text,
        }
    }

    pub fn replacement(start_byte: usize, end_byte: usize, text: String) -> Self {
        Self {
            start_byte,
            end_byte,
            text,
        }
    }

    /// Whether two edits touch overlapping source ranges. Pure insertions at
    /// the same point count as overlapping: applying both in one pass would
    /// interleave their text unpredictably.
    pub fn overlaps(&self, other: &TextEdit) -> bool {
        if self.start_byte == self.end_byte && other.start_byte == other.end_byte {
            return self.start_byte == other.start_byte;
        }
        self.start_byte < other.end_byte && other.start_byte < self.end_byte
    }
}

/// One reported adjacency problem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable code: A001, A002, W001.
    pub code: String,
    /// "ERROR" or "WARNING".
    pub severity: String,
    /// Machine-readable category (missing_audit, unsafe_autofix, ...).
    pub category: String,
    pub message: String,
    pub file: String,
    /// 1-based line of the offending call.
    pub line: u32,
    /// 1-based column of the offending call.
    pub column: u32,
    /// Suggested remediation when no edit could be synthesized.
    pub fix_hint: Option<String>,
    /// Synthesized edit, absent when autofix is unsafe.
    pub fix: Option<TextEdit>,
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == "ERROR"
    }
}

/// Result of `vigil check` over a set of files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub version: String,
    pub command: String,
    /// "ok", "warning", or "error".
    pub status: String,
    pub files_analyzed: Vec<String>,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub info: CheckInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckInfo {
    pub files_scanned: u32,
    pub fixes_available: u32,
}

/// Result of `vigil fix` over a set of files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixResult {
    pub version: String,
    pub command: String,
    pub status: String,
    pub files_changed: Vec<String>,
    pub fixes_applied: u32,
    /// Convergence passes actually run (a pass may defer overlapping edits).
    pub passes: u32,
    /// Diagnostics still present after convergence (unfixable contexts).
    pub remaining: Vec<Diagnostic>,
}

pub fn status_for(errors: &[Diagnostic], warnings: &[Diagnostic]) -> &'static str {
    if !errors.is_empty() {
        "error"
    } else if !warnings.is_empty() {
        "warning"
    } else {
        "ok"
    }
}
