use vigil_enforce::engine::{partition_diagnostics, AuditEngine};
use vigil_enforce::types::{status_for, CheckInfo, CheckResult};
use vigil_output::OutputFormatter;
use vigil_parsers::treesitter::JsParser;

/// `vigil check`: analyze files and report adjacency violations.
///
/// Exit codes: 0 clean (or warnings only), 1 violations, 2 internal error.
pub fn run(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    paths: Vec<String>,
    scope: Option<String>,
    strict: bool,
    config_dir: Option<String>,
) -> i32 {
    let config = super::load_config(config_dir.as_deref());
    let scope = scope.or_else(|| config.scope.clone());
    let files = super::collect_files(&paths, scope.as_deref());

    let engine = AuditEngine::new(config);
    let mut parser = JsParser::new();

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut files_analyzed = Vec::new();
    let mut fixes_available = 0u32;

    for path in &files {
        let file = match parser.parse_path(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("vigil check: {e}");
                return 2;
            }
        };
        let analysis = engine.analyze_file(&file);
        fixes_available += analysis.fixable_count();
        files_analyzed.push(file.path.clone());
        partition_diagnostics(analysis.diagnostics, &mut errors, &mut warnings);
    }

    let status = status_for(&errors, &warnings).to_string();
    let has_errors = !errors.is_empty();
    let has_warnings = !warnings.is_empty();

    let result = CheckResult {
        version: env!("CARGO_PKG_VERSION").to_string(),
        command: "check".to_string(),
        status,
        files_analyzed,
        errors,
        warnings,
        info: CheckInfo {
            files_scanned: files.len() as u32,
            fixes_available,
        },
    };

    let rendered = formatter.format_check(&result);
    if !rendered.is_empty() {
        print!("{rendered}");
    } else if verbose {
        println!(
            "vigil: {} file(s) clean, {} fix(es) available",
            result.info.files_scanned, result.info.fixes_available
        );
    }

    if has_errors || (strict && has_warnings) {
        1
    } else {
        0
    }
}
