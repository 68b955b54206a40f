//! Language Support - tree-sitter language configuration
//!
//! All tree-sitter language wiring lives here so the extractor and manager
//! never name a grammar crate directly.

use anyhow::Result;
use std::path::Path;

/// Get tree-sitter language parser for a given language name
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "go" => Ok(tree_sitter_go::LANGUAGE.into()),
        _ => Err(anyhow::anyhow!(
            "Unsupported language: '{}'. Supported languages: go",
            language
        )),
    }
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to `get_tree_sitter_language()`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "go" => Some("go"),
        _ => None,
    }
}

/// Whether `path` names a Go source file, judged by extension only
pub fn is_go_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(detect_language_from_extension)
        == Some("go")
}
