// BaseExtractor implementation for gosymex
//
// Holds the source text a tree was parsed from and provides node-text access
// for the language extractor.

use tree_sitter::Node;

/// Base implementation for language extractors
pub struct BaseExtractor {
    pub file_path: String,
    pub content: String,
}

impl BaseExtractor {
    pub fn new(file_path: String, content: String) -> Self {
        Self { file_path, content }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Node text collapsed onto one line: runs of whitespace become a single
    /// space and the ends are trimmed
    pub fn get_compact_text(&self, node: &Node) -> String {
        self.get_node_text(node)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
