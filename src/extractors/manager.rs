//! ExtractorManager - Public API for describing Go files
//!
//! Handles reading and parsing and then delegates to the Go extractor.
//! A file that does not parse cleanly never reaches extraction; the caller
//! gets an [`ExtractError::Syntax`] instead.

use crate::extractors::base::{BaseExtractor, FileDetails};
use crate::extractors::go::GoExtractor;
use crate::language::{get_tree_sitter_language, is_go_source};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tree_sitter::Parser;

/// Longest source excerpt quoted in a syntax error message
const SNIPPET_CHARS: usize = 32;

/// Why a single file could not be described
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{path}: not a Go file")]
    NotGoSource { path: String },

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}:{column}: syntax error: {message}")]
    Syntax {
        path: String,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("parser setup failed: {0}")]
    Language(String),
}

/// Result of describing one file in a batch
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<FileDetails, ExtractError>,
}

/// Stateless entry point for file-level extraction
pub struct ExtractorManager {
    // No state needed - every call parses and extracts independently
}

impl Default for ExtractorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self {}
    }

    /// Read, parse and extract the Go file at `path`
    pub fn describe(&self, path: &Path) -> Result<FileDetails, ExtractError> {
        let file_path = path.to_string_lossy().to_string();
        if !is_go_source(path) {
            return Err(ExtractError::NotGoSource { path: file_path });
        }

        let content = std::fs::read_to_string(path).map_err(|source| ExtractError::Io {
            path: file_path.clone(),
            source,
        })?;

        self.describe_source(&file_path, &content)
    }

    /// Parse and extract already-read source text
    ///
    /// `file_path` is only used as the report's identity and for the
    /// extension check.
    pub fn describe_source(
        &self,
        file_path: &str,
        content: &str,
    ) -> Result<FileDetails, ExtractError> {
        if !is_go_source(Path::new(file_path)) {
            return Err(ExtractError::NotGoSource {
                path: file_path.to_string(),
            });
        }

        let mut parser = Parser::new();
        let language =
            get_tree_sitter_language("go").map_err(|e| ExtractError::Language(e.to_string()))?;
        parser
            .set_language(&language)
            .map_err(|e| ExtractError::Language(e.to_string()))?;

        let tree = parser.parse(content, None).ok_or_else(|| {
            ExtractError::Language(format!("parser returned no tree for {}", file_path))
        })?;

        let extractor = GoExtractor::new(file_path.to_string(), content.to_string());
        let root = tree.root_node();
        if extractor.base().has_error(&root) {
            return Err(syntax_error(extractor.base(), &root));
        }

        Ok(extractor.extract(&tree))
    }

    /// Describe many files on the rayon pool
    ///
    /// Outcomes come back in input order. A failing file only affects its own
    /// outcome.
    pub fn describe_files(&self, paths: &[PathBuf]) -> Vec<FileOutcome> {
        paths
            .par_iter()
            .map(|path| {
                let result = self.describe(path);
                if let Err(e) = &result {
                    tracing::warn!("⚠️  Failed to describe {}: {}", path.display(), e);
                }
                FileOutcome {
                    path: path.clone(),
                    result,
                }
            })
            .collect()
    }
}

fn syntax_error(base: &BaseExtractor, root: &tree_sitter::Node) -> ExtractError {
    let Some(node) = base.find_first_error(root) else {
        return ExtractError::Syntax {
            path: base.file_path.clone(),
            line: 1,
            column: 1,
            message: "malformed source".to_string(),
        };
    };

    let position = node.start_position();
    let message = if node.is_missing() {
        format!("missing {}", node.kind())
    } else {
        let snippet: String = base
            .get_compact_text(&node)
            .chars()
            .take(SNIPPET_CHARS)
            .collect();
        if snippet.is_empty() {
            "unexpected token".to_string()
        } else {
            format!("unexpected `{}`", snippet)
        }
    };

    ExtractError::Syntax {
        path: base.file_path.clone(),
        line: position.row + 1,
        column: position.column + 1,
        message,
    }
}
