use std::path::Path;

use tree_sitter::{Language, Parser, Tree};

/// Wrapper around a tree-sitter parser configured for JavaScript/TypeScript.
pub struct JsParser {
    parser: Parser,
}

impl JsParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    /// Parse a source string into a [`SourceFile`].
    pub fn parse_source(
        &mut self,
        lang_name: &str,
        path: &Path,
        source: &str,
    ) -> Result<SourceFile, ParseError> {
        let lang = language_for_name(lang_name)?;
        self.parser
            .set_language(&lang)
            .map_err(|e| ParseError::Language(format!("{e}")))?;
        let tree = self
            .parser
            .parse(source.as_bytes(), None)
            .ok_or(ParseError::ParseFailed)?;

        Ok(SourceFile {
            path: path.to_string_lossy().to_string(),
            language: lang_name.to_string(),
            content_hash: vigil_core::hash::content_hash(source),
            text: source.to_string(),
            tree,
        })
    }

    /// Read and parse a file from disk, detecting the language from its
    /// extension.
    pub fn parse_path(&mut self, path: &Path) -> Result<SourceFile, ParseError> {
        let lang_name = detect_language(path)
            .ok_or_else(|| ParseError::UnsupportedLanguage(path.display().to_string()))?;
        let source = std::fs::read_to_string(path)
            .map_err(|e| ParseError::Io(path.display().to_string(), e))?;
        self.parse_source(lang_name, path, &source)
    }
}

impl Default for JsParser {
    fn default() -> Self {
        Self::new()
    }
}

/// One parsed file: source text plus its syntax tree.
///
/// All downstream analysis borrows nodes out of `tree`; the struct owns both
/// so a `SourceFile` is self-contained for the duration of one pass.
pub struct SourceFile {
    pub path: String,
    pub language: String,
    pub text: String,
    pub tree: Tree,
    /// xxhash64 of the raw content, used for fixpoint detection.
    pub content_hash: u64,
}

impl SourceFile {
    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unsupported language for {0}")]
    UnsupportedLanguage(String),
    #[error("language error: {0}")]
    Language(String),
    #[error("cannot read {0}: {1}")]
    Io(String, std::io::Error),
    #[error("parse failed")]
    ParseFailed,
}

fn language_for_name(name: &str) -> Result<Language, ParseError> {
    match name {
        // The TypeScript grammar is a superset of JavaScript.
        "typescript" | "javascript" => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        "tsx" | "jsx" => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
        other => Err(ParseError::UnsupportedLanguage(other.to_string())),
    }
}

pub fn detect_language(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "ts" => Some("typescript"),
        "js" | "mjs" | "cjs" => Some("javascript"),
        "tsx" => Some("tsx"),
        "jsx" => Some("jsx"),
        _ => None,
    }
}

/// Node text helper shared by the extraction passes.
pub fn node_text<'a>(node: tree_sitter::Node<'a>, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}
