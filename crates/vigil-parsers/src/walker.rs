use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use ignore::WalkBuilder;

use crate::treesitter::detect_language;

pub struct WalkEntry {
    pub path: PathBuf,
    pub language: String,
}

/// Discovers analyzable JS/TS files under a root directory.
///
/// Respects `.gitignore` and an optional scope glob (matched against the
/// path relative to the root), so a suite can be restricted to e.g.
/// `tests/acceptance/**` without the engine knowing about file layout.
pub struct FileWalker {
    root: PathBuf,
    scope: Option<GlobMatcher>,
}

impl FileWalker {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            scope: None,
        }
    }

    pub fn with_scope(root: &Path, scope: &str) -> Result<Self, globset::Error> {
        let matcher = Glob::new(scope)?.compile_matcher();
        Ok(Self {
            root: root.to_path_buf(),
            scope: Some(matcher),
        })
    }

    pub fn walk(&self) -> Vec<WalkEntry> {
        let mut entries = Vec::new();

        let walker = WalkBuilder::new(&self.root)
            .hidden(true)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .add_custom_ignore_filename(".vigilignore")
            .build();

        for result in walker {
            let entry = match result {
                Ok(e) => e,
                Err(_) => continue,
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.into_path();
            let Some(lang) = detect_language(&path) else {
                continue;
            };

            if let Some(matcher) = &self.scope {
                let relative = path.strip_prefix(&self.root).unwrap_or(&path);
                if !matcher.is_match(relative) {
                    continue;
                }
            }

            entries.push(WalkEntry {
                path,
                language: lang.to_string(),
            });
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries
    }
}
