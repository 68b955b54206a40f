use super::signatures::{format_field_list, format_func_type};
use crate::extractors::base::Field;
use tree_sitter::Node;

/// Helper methods for node text extraction and type-expression rendering
impl super::GoExtractor {
    /// Get node text (helper method)
    pub(super) fn get_node_text(&self, node: Node) -> String {
        self.base.get_node_text(&node)
    }

    /// Render a type node to its canonical single-line text
    ///
    /// Output matches what `go/types.ExprString` prints for the equivalent
    /// AST: `*T`, `[]T`, `map[K]V`, `<-chan T`, `pkg.T`, `T[A, B]`,
    /// `func(a int) error`, `struct{a int}`, `interface{M()}`, ...
    /// Unknown node kinds fall back to their whitespace-collapsed source text.
    pub(super) fn extract_type_from_node(&self, node: Node) -> String {
        match node.kind() {
            "type_identifier" | "identifier" | "package_identifier" | "field_identifier" => {
                self.get_node_text(node)
            }
            "qualified_type" => {
                match (
                    node.child_by_field_name("package"),
                    node.child_by_field_name("name"),
                ) {
                    (Some(package), Some(name)) => format!(
                        "{}.{}",
                        self.get_node_text(package),
                        self.get_node_text(name)
                    ),
                    _ => self.base.get_compact_text(&node),
                }
            }
            "pointer_type" => match self.first_named_child(node) {
                Some(inner) => format!("*{}", self.extract_type_from_node(inner)),
                None => self.base.get_compact_text(&node),
            },
            "slice_type" => match node.child_by_field_name("element") {
                Some(element) => format!("[]{}", self.extract_type_from_node(element)),
                None => self.base.get_compact_text(&node),
            },
            "array_type" => {
                match (
                    node.child_by_field_name("length"),
                    node.child_by_field_name("element"),
                ) {
                    (Some(length), Some(element)) => format!(
                        "[{}]{}",
                        self.render_length_expr(length),
                        self.extract_type_from_node(element)
                    ),
                    _ => self.base.get_compact_text(&node),
                }
            }
            "implicit_length_array_type" => match node.child_by_field_name("element") {
                Some(element) => format!("[...]{}", self.extract_type_from_node(element)),
                None => self.base.get_compact_text(&node),
            },
            "map_type" => {
                match (
                    node.child_by_field_name("key"),
                    node.child_by_field_name("value"),
                ) {
                    (Some(key), Some(value)) => format!(
                        "map[{}]{}",
                        self.extract_type_from_node(key),
                        self.extract_type_from_node(value)
                    ),
                    _ => self.base.get_compact_text(&node),
                }
            }
            "channel_type" => self.render_channel_type(node),
            "function_type" => format!("func{}", self.extract_signature(node)),
            "generic_type" => {
                let base = node
                    .child_by_field_name("type")
                    .map(|t| self.extract_type_from_node(t))
                    .unwrap_or_default();
                let arguments = node
                    .child_by_field_name("type_arguments")
                    .map(|args| {
                        self.named_children(args)
                            .into_iter()
                            .map(|arg| self.extract_type_from_node(arg))
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .unwrap_or_default();
                format!("{}[{}]", base, arguments)
            }
            "type_elem" | "constraint_elem" => self
                .named_children(node)
                .into_iter()
                .map(|t| self.extract_type_from_node(t))
                .collect::<Vec<_>>()
                .join(" | "),
            "negated_type" => match self.first_named_child(node) {
                Some(inner) => format!("~{}", self.extract_type_from_node(inner)),
                None => self.base.get_compact_text(&node),
            },
            "parenthesized_type" => match self.first_named_child(node) {
                Some(inner) => format!("({})", self.extract_type_from_node(inner)),
                None => self.base.get_compact_text(&node),
            },
            "struct_type" => {
                let fields = self.extract_struct_fields(node);
                format!("struct{{{}}}", format_field_list(&fields, "; "))
            }
            "interface_type" => {
                let mut elems = Vec::new();
                for child in self.named_children(node) {
                    match child.kind() {
                        "method_elem" | "method_spec" => {
                            if let Some(name) = child.child_by_field_name("name") {
                                elems.push(format!(
                                    "{}{}",
                                    self.get_node_text(name),
                                    self.extract_signature(child)
                                ));
                            }
                        }
                        "type_elem" | "constraint_elem" | "interface_type_name" => {
                            elems.push(self.extract_type_from_node(child))
                        }
                        _ => {}
                    }
                }
                format!("interface{{{}}}", elems.join("; "))
            }
            _ => self.base.get_compact_text(&node),
        }
    }

    /// Array length expression; binary operators get a blank on each side
    /// (`2 * N`), everything else keeps its compacted source text
    fn render_length_expr(&self, node: Node) -> String {
        match node.kind() {
            "binary_expression" => {
                match (
                    node.child_by_field_name("left"),
                    node.child_by_field_name("operator"),
                    node.child_by_field_name("right"),
                ) {
                    (Some(left), Some(operator), Some(right)) => format!(
                        "{} {} {}",
                        self.render_length_expr(left),
                        self.get_node_text(operator),
                        self.render_length_expr(right)
                    ),
                    _ => self.base.get_compact_text(&node),
                }
            }
            "parenthesized_expression" => match self.first_named_child(node) {
                Some(inner) => format!("({})", self.render_length_expr(inner)),
                None => self.base.get_compact_text(&node),
            },
            _ => self.base.get_compact_text(&node),
        }
    }

    /// `chan T`, `chan<- T` or `<-chan T`, decided by the order of the
    /// anonymous `chan` and `<-` tokens
    fn render_channel_type(&self, node: Node) -> String {
        let Some(value) = node.child_by_field_name("value") else {
            return self.base.get_compact_text(&node);
        };
        let value_text = self.extract_type_from_node(value);

        let mut tokens = Vec::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if !child.is_named() {
                tokens.push(child.kind());
            }
        }

        match tokens.as_slice() {
            ["<-", "chan", ..] => format!("<-chan {}", value_text),
            ["chan", "<-", ..] => format!("chan<- {}", value_text),
            _ => format!("chan {}", value_text),
        }
    }

    /// Parameter and result part of a function type, method element or
    /// function declaration, without the leading `func`
    pub(super) fn extract_signature(&self, node: Node) -> String {
        let params = node
            .child_by_field_name("parameters")
            .map(|list| self.extract_parameter_list(list))
            .unwrap_or_default();
        let results = self.extract_result(node.child_by_field_name("result"));
        format_func_type(&params, &results)
    }

    /// Lower a `field_declaration_list` owner (`struct_type`) into fields
    ///
    /// Embedded fields keep their `*` in the type text and have no names.
    pub(super) fn extract_struct_fields(&self, struct_node: Node) -> Vec<Field> {
        let Some(list) = self.base.find_child_by_type(&struct_node, "field_declaration_list")
        else {
            return Vec::new();
        };

        let mut fields = Vec::new();
        for declaration in self.base.find_children_by_type(&list, "field_declaration") {
            let Some(type_node) = declaration.child_by_field_name("type") else {
                continue;
            };
            let names: Vec<String> = self
                .base
                .children_by_field(&declaration, "name")
                .into_iter()
                .map(|name| self.get_node_text(name))
                .collect();

            let mut type_text = self.extract_type_from_node(type_node);
            if names.is_empty() && self.base.find_child_by_type(&declaration, "*").is_some() {
                type_text = format!("*{}", type_text);
            }

            fields.push(Field {
                names,
                type_expr: type_text,
            });
        }
        fields
    }

    pub(super) fn named_children<'a>(&self, node: Node<'a>) -> Vec<Node<'a>> {
        let mut cursor = node.walk();
        let children = node
            .named_children(&mut cursor)
            .filter(|child| child.kind() != "comment")
            .collect();
        children
    }

    fn first_named_child<'a>(&self, node: Node<'a>) -> Option<Node<'a>> {
        self.named_children(node).into_iter().next()
    }
}
