use vigil_enforce::engine::AuditEngine;
use vigil_enforce::types::{status_for, FixResult};
use vigil_output::OutputFormatter;
use vigil_parsers::treesitter::JsParser;

/// `vigil fix`: apply synthesized edits, re-running each file to
/// convergence, and report what remains unfixable.
pub fn run(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    paths: Vec<String>,
    scope: Option<String>,
    dry_run: bool,
    config_dir: Option<String>,
) -> i32 {
    let config = super::load_config(config_dir.as_deref());
    let scope = scope.or_else(|| config.scope.clone());
    let files = super::collect_files(&paths, scope.as_deref());

    let engine = AuditEngine::new(config);
    let mut parser = JsParser::new();

    let mut files_changed = Vec::new();
    let mut fixes_applied = 0u32;
    let mut max_passes = 0u32;
    let mut remaining = Vec::new();

    for path in &files {
        let file = match parser.parse_path(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("vigil fix: {e}");
                return 2;
            }
        };
        let original = file.text.clone();
        let outcome = match engine.fix_file(&file) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("vigil fix: {e}");
                return 2;
            }
        };

        if outcome.text != original {
            if !dry_run {
                if let Err(e) = std::fs::write(path, &outcome.text) {
                    eprintln!("vigil fix: cannot write {}: {e}", path.display());
                    return 2;
                }
            }
            files_changed.push(file.path.clone());
        }
        fixes_applied += outcome.fixes_applied;
        max_passes = max_passes.max(outcome.passes);
        remaining.extend(outcome.remaining);
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    vigil_enforce::engine::partition_diagnostics(remaining, &mut errors, &mut warnings);
    let status = status_for(&errors, &warnings).to_string();
    let has_errors = !errors.is_empty();

    let mut all_remaining = errors;
    all_remaining.extend(warnings);

    let result = FixResult {
        version: env!("CARGO_PKG_VERSION").to_string(),
        command: "fix".to_string(),
        status,
        files_changed,
        fixes_applied,
        passes: max_passes,
        remaining: all_remaining,
    };

    let rendered = formatter.format_fix(&result);
    if !rendered.is_empty() {
        print!("{rendered}");
    }
    if verbose && dry_run {
        println!("vigil: dry run, no files written");
    }

    if has_errors {
        1
    } else {
        0
    }
}
