mod functions;
mod helpers;
pub mod signatures;
mod specs;
mod types;

use crate::extractors::base::{BaseExtractor, Declaration, FileDetails, TypeShape, TypeSpec};
use signatures::{format_function_signature, format_member};
use tracing::debug;
use tree_sitter::{Node, Tree};

/// Go language extractor producing a [`FileDetails`] report:
/// - Import paths in source order
/// - Struct fields and interface methods as `"Name Type"` entries
/// - Function and method signatures in declaration order
///
/// The extractor keeps no state between calls; `extract` can run any number
/// of times on the same tree and yields identical reports.
pub struct GoExtractor {
    base: BaseExtractor,
}

impl GoExtractor {
    pub fn new(file_path: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(file_path, content),
        }
    }

    /// Source-backed helpers, shared with the caller's error checks
    pub fn base(&self) -> &BaseExtractor {
        &self.base
    }

    /// Walk the whole tree once, pre-order, and assemble the report
    ///
    /// Error nodes are walked like any other node, so a partially parsed
    /// tree yields whatever declarations survived.
    pub fn extract(&self, tree: &Tree) -> FileDetails {
        let mut details = FileDetails::new(self.base.file_path.clone());

        self.base.walk_tree(
            &tree.root_node(),
            &mut |node, _depth| {
                let declaration = self.lower_node(*node);
                apply_declaration(&mut details, declaration);
            },
            0,
        );

        debug!(
            "Extracted {} imports, {} structs, {} interfaces, {} funcs from {}",
            details.imports.len(),
            details.structs.len(),
            details.interfaces.as_ref().map_or(0, |i| i.len()),
            details.funcs.len(),
            details.file_path
        );
        details
    }

    /// Classify a single node; children are not inspected for dispatch
    pub fn lower_node(&self, node: Node) -> Declaration {
        let lowered = match node.kind() {
            "import_spec" => self.extract_import_spec(node).map(Declaration::Import),
            "type_spec" | "type_alias" => self.extract_type_spec(node).map(Declaration::Type),
            "function_declaration" | "method_declaration" => self
                .extract_function_declaration(node)
                .map(Declaration::Function),
            _ => None,
        };
        lowered.unwrap_or(Declaration::Other)
    }
}

/// Fold one lowered declaration into the report
pub fn apply_declaration(details: &mut FileDetails, declaration: Declaration) {
    match declaration {
        Declaration::Import(import) => details.imports.push(import.path),
        Declaration::Type(spec) => record_type(details, spec),
        Declaration::Function(decl) => details.funcs.push(format_function_signature(&decl)),
        Declaration::Other => {}
    }
}

fn record_type(details: &mut FileDetails, spec: TypeSpec) {
    match spec.shape {
        TypeShape::Record(fields) => {
            if let Some(interfaces) = details.interfaces.as_mut() {
                interfaces.remove(&spec.name);
            }
            let entry = details.structs.entry(spec.name).or_default();
            // One entry per field; a grouped `A, B int` reports only `A`
            for field in &fields {
                if let Some(name) = field.names.first() {
                    entry.push(format_member(name, &field.type_expr));
                }
            }
        }
        TypeShape::Contract(methods) => {
            details.structs.remove(&spec.name);
            let interfaces = details.interfaces.get_or_insert_with(Default::default);
            let entry = interfaces.entry(spec.name).or_default();
            for method in &methods {
                if let Some(name) = method.names.first() {
                    entry.push(format_member(name, &method.type_expr));
                }
            }
        }
        TypeShape::Other => {}
    }
}
