use crate::extractors::base::{Field, TypeShape, TypeSpec};
use tree_sitter::Node;

/// Type declaration lowering for Go (structs, interfaces, everything else)
impl super::GoExtractor {
    /// Lower a `type_spec` or `type_alias` node
    ///
    /// The shape is decided by the declared type alone, so `type A = struct{...}`
    /// is a record just like `type A struct{...}`. A parenthesized struct or
    /// interface is not unwrapped.
    pub(super) fn extract_type_spec(&self, node: Node) -> Option<TypeSpec> {
        let name = self.get_node_text(node.child_by_field_name("name")?);

        let shape = match node.child_by_field_name("type") {
            Some(type_node) if type_node.kind() == "struct_type" => {
                TypeShape::Record(self.extract_struct_fields(type_node))
            }
            Some(type_node) if type_node.kind() == "interface_type" => {
                TypeShape::Contract(self.extract_interface_elems(type_node))
            }
            _ => TypeShape::Other,
        };

        Some(TypeSpec { name, shape })
    }

    /// Lower the elements of an `interface_type`
    ///
    /// Methods become a named field whose type is the full `func(...)` text.
    /// Embedded interfaces and type-set elements become unnamed fields.
    pub(super) fn extract_interface_elems(&self, node: Node) -> Vec<Field> {
        let mut elems = Vec::new();

        for child in self.named_children(node) {
            match child.kind() {
                "method_elem" | "method_spec" => {
                    if let Some(name) = child.child_by_field_name("name") {
                        elems.push(Field::new(
                            [self.get_node_text(name)],
                            format!("func{}", self.extract_signature(child)),
                        ));
                    }
                }
                "type_elem" | "constraint_elem" | "interface_type_name" => {
                    elems.push(Field::unnamed(self.extract_type_from_node(child)));
                }
                _ => {}
            }
        }

        elems
    }
}
