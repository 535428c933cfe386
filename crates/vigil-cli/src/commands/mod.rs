pub mod check;
pub mod fix;

use std::path::{Path, PathBuf};

use vigil_core::config::VigilConfig;
use vigil_parsers::treesitter::detect_language;
use vigil_parsers::walker::FileWalker;

/// Load configuration from the given directory, or the current directory.
pub(crate) fn load_config(config_dir: Option<&str>) -> VigilConfig {
    let dir = config_dir.unwrap_or(".");
    VigilConfig::load(Path::new(dir))
}

/// Expand path arguments into the list of analyzable files.
///
/// Explicit file arguments bypass the scope glob (naming a file is already
/// an explicit choice); directories are walked with the scope applied.
pub(crate) fn collect_files(paths: &[String], scope: Option<&str>) -> Vec<PathBuf> {
    let roots: Vec<String> = if paths.is_empty() {
        vec![".".to_string()]
    } else {
        paths.to_vec()
    };

    let mut files = Vec::new();
    for root in &roots {
        let path = Path::new(root);
        if path.is_file() {
            if detect_language(path).is_some() {
                files.push(path.to_path_buf());
            }
            continue;
        }
        let walker = match scope {
            Some(glob) => match FileWalker::with_scope(path, glob) {
                Ok(w) => w,
                Err(e) => {
                    eprintln!("vigil: warning: invalid scope glob `{glob}`: {e}");
                    FileWalker::new(path)
                }
            },
            None => FileWalker::new(path),
        };
        files.extend(walker.walk().into_iter().map(|entry| entry.path));
    }
    files
}
