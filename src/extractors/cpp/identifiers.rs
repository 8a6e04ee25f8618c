//! Identifier resolution for C++ definitions
//!
//! Every name the extractor reports goes through [`CppExtractor::identifier_for_kind`]:
//! look for a named child of the expected kind, otherwise try a fallback,
//! otherwise synthesize `anon-id-{start}-{end}`. Resolution never fails.

use tree_sitter::Node;

use super::helpers::{
    CLASS_IDENTIFIER, FUNCTION_DECLARATOR, LEGACY_NAMESPACE_IDENTIFIER, MACRO_FUNCTION_IDENTIFIER,
    NAMESPACE_IDENTIFIER, REFERENCE_DECLARATOR, TEMPLATE_SPECIALIZATION,
};
use super::CppExtractor;

/// Synthetic identifier for nodes without a resolvable name, 1-based rows
pub fn anonymous_identifier(node: &Node) -> String {
    format!(
        "anon-id-{}-{}",
        node.start_position().row + 1,
        node.end_position().row + 1
    )
}

impl CppExtractor {
    /// Normalized text of the first named child of `kind`, else `fallback(node)`,
    /// else the synthetic anonymous identifier
    pub(super) fn identifier_for_kind<'tree>(
        &self,
        node: Node<'tree>,
        kind: &str,
        fallback: Option<&dyn Fn(Node<'tree>) -> String>,
    ) -> String {
        if let Some(child) = self.base.find_named_child_by_type(&node, kind) {
            return self.base.get_normalized_text(&child);
        }

        match fallback {
            Some(fallback) => fallback(node),
            None => anonymous_identifier(&node),
        }
    }

    /// Declarator text of a function definition, e.g. `foo(int a) const`
    pub(super) fn function_name(&self, node: Node) -> String {
        self.identifier_for_kind(
            node,
            FUNCTION_DECLARATOR,
            Some(&|node: Node| self.identifier_for_kind(node, REFERENCE_DECLARATOR, None)),
        )
    }

    pub(super) fn class_name(&self, node: Node) -> String {
        self.identifier_for_kind(
            node,
            CLASS_IDENTIFIER,
            Some(&|node: Node| self.identifier_for_kind(node, TEMPLATE_SPECIALIZATION, None)),
        )
    }

    pub(super) fn macro_function_name(&self, node: Node) -> String {
        self.identifier_for_kind(node, MACRO_FUNCTION_IDENTIFIER, None)
    }

    pub(super) fn namespace_identifier(&self, node: Node) -> String {
        self.identifier_for_kind(
            node,
            NAMESPACE_IDENTIFIER,
            Some(&|node: Node| self.identifier_for_kind(node, LEGACY_NAMESPACE_IDENTIFIER, None)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::helpers::{CLASS_DEFINITIONS, FUNCTION_DEFINITION, NAMESPACE_DEFINITION};
    use super::*;
    use tree_sitter::{Parser, Tree};

    fn setup(content: &str) -> (CppExtractor, Tree) {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_cpp::LANGUAGE.into())
            .unwrap();
        let tree = parser.parse(content, None).unwrap();
        (CppExtractor::new(content.to_string()), tree)
    }

    fn first_of<'a>(extractor: &CppExtractor, tree: &'a Tree, kinds: &[&str]) -> Node<'a> {
        extractor
            .base
            .find_nodes_by_types(&tree.root_node(), kinds)
            .into_iter()
            .next()
            .unwrap()
    }

    #[test]
    fn test_function_name_collapses_whitespace() {
        let content = "int add(int a,\n        int   b)\n{\n    return a + b;\n}\n";
        let (extractor, tree) = setup(content);
        let node = first_of(&extractor, &tree, &[FUNCTION_DEFINITION]);

        assert_eq!(extractor.function_name(node), "add(int a, int b)");
    }

    #[test]
    fn test_function_name_falls_back_to_reference_declarator() {
        let content = "const auto& foo(int a) { return 1; }\n";
        let (extractor, tree) = setup(content);
        let node = first_of(&extractor, &tree, &[FUNCTION_DEFINITION]);

        assert_eq!(extractor.function_name(node), "& foo(int a)");
    }

    #[test]
    fn test_class_name_falls_back_to_template_type() {
        let content = "template<>\nstruct A<int> {\n    void f() {}\n};\n";
        let (extractor, tree) = setup(content);
        let node = first_of(&extractor, &tree, &CLASS_DEFINITIONS);

        assert_eq!(extractor.class_name(node), "A<int>");
    }

    #[test]
    fn test_anonymous_namespace_gets_synthetic_identifier() {
        let content = "namespace {\n    void anon() {}\n}\n";
        let (extractor, tree) = setup(content);
        let node = first_of(&extractor, &tree, &[NAMESPACE_DEFINITION]);

        assert_eq!(extractor.namespace_identifier(node), "anon-id-1-3");
    }

    #[test]
    fn test_named_namespace_identifier() {
        let content = "namespace geometry {\n    void area() {}\n}\n";
        let (extractor, tree) = setup(content);
        let node = first_of(&extractor, &tree, &[NAMESPACE_DEFINITION]);

        assert_eq!(extractor.namespace_identifier(node), "geometry");
    }

    #[test]
    fn test_missing_kind_without_fallback_is_anonymous() {
        let content = "void foo() {\n    return;\n}\n";
        let (extractor, tree) = setup(content);
        let node = first_of(&extractor, &tree, &[FUNCTION_DEFINITION]);

        assert_eq!(
            extractor.identifier_for_kind(node, "type_identifier", None),
            "anon-id-1-3"
        );
    }
}
