use crate::extractors::base::ImportSpec;
use tree_sitter::Node;

/// Extraction of import specifications
impl super::GoExtractor {
    /// Lower an `import_spec`, dropping any alias and the string delimiters
    ///
    /// Both interpreted (`"fmt"`) and raw (`` `fmt` ``) literals are accepted.
    pub(super) fn extract_import_spec(&self, node: Node) -> Option<ImportSpec> {
        let path_node = node.child_by_field_name("path")?;
        let raw = self.get_node_text(path_node);

        Some(ImportSpec {
            path: unquote_import_path(&raw).to_string(),
        })
    }
}

pub(super) fn unquote_import_path(raw: &str) -> &str {
    raw.trim_matches(|c| c == '"' || c == '`')
}
