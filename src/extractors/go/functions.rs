use crate::extractors::base::{Field, FuncDecl};
use tree_sitter::Node;

/// Function and method lowering for Go
impl super::GoExtractor {
    /// Lower a `function_declaration` or `method_declaration`
    ///
    /// Returns `None` when the node has no name, which only happens inside a
    /// tree that failed to parse cleanly.
    pub(super) fn extract_function_declaration(&self, node: Node) -> Option<FuncDecl> {
        let name = self.get_node_text(node.child_by_field_name("name")?);

        // Only the first receiver group counts; an empty `()` receiver is
        // treated as no receiver.
        let receiver = node
            .child_by_field_name("receiver")
            .and_then(|list| self.extract_parameter_list(list).into_iter().next())
            .map(|group| group.type_expr);

        let params = node
            .child_by_field_name("parameters")
            .map(|list| self.extract_parameter_list(list))
            .unwrap_or_default();
        let results = self.extract_result(node.child_by_field_name("result"));

        Some(FuncDecl {
            name,
            receiver,
            params,
            results,
        })
    }

    /// Lower a `parameter_list` into one [`Field`] per declaration group
    ///
    /// `a, b int` stays one group with two names; variadic declarations
    /// carry a `...` prefix on their type. Declarations without a type node
    /// are dropped.
    pub(super) fn extract_parameter_list(&self, node: Node) -> Vec<Field> {
        let mut parameters = Vec::new();

        for child in self.named_children(node) {
            match child.kind() {
                "parameter_declaration" | "variadic_parameter_declaration" => {
                    if let Some(param) = self.extract_parameter_declaration(child) {
                        parameters.push(param);
                    }
                }
                _ => {}
            }
        }

        parameters
    }

    fn extract_parameter_declaration(&self, node: Node) -> Option<Field> {
        let type_node = node.child_by_field_name("type")?;
        let mut type_expr = self.extract_type_from_node(type_node);
        if node.kind() == "variadic_parameter_declaration" {
            type_expr = format!("...{}", type_expr);
        }

        let names = self
            .base
            .children_by_field(&node, "name")
            .into_iter()
            .map(|name| self.get_node_text(name))
            .collect();

        Some(Field { names, type_expr })
    }

    /// Lower the optional `result` of a function: a parenthesized list keeps
    /// its groups, a bare type becomes a single unnamed group
    pub(super) fn extract_result(&self, result: Option<Node>) -> Vec<Field> {
        match result {
            None => Vec::new(),
            Some(node) if node.kind() == "parameter_list" => self.extract_parameter_list(node),
            Some(node) => vec![Field::unnamed(self.extract_type_from_node(node))],
        }
    }
}
