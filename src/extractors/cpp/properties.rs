//! Qualifier classification for function definitions
//!
//! The grammar surfaces qualifiers in two shapes: dedicated nodes around the
//! definition (template parent, storage class, virtual) and trailing keywords
//! that stay inside the declarator text (`override`, `volatile`, `const`).
//! Both passes produce [`FunctionProperty`] tags.

use tree_sitter::Node;

use crate::extractors::base::{normalize_whitespace, FunctionProperty};

use super::helpers::{
    is_template_member, STATIC_SPECIFIER, VIRTUAL_KEYWORD_NODE, VIRTUAL_SPECIFIER,
};
use super::CppExtractor;

impl CppExtractor {
    /// Qualifiers carried by grammar nodes: template parent, `static`, `virtual`
    pub(super) fn structural_properties(&self, node: Node) -> Vec<FunctionProperty> {
        let mut properties = Vec::new();

        if is_template_member(&node) {
            properties.push(FunctionProperty::Template);
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            let property = match child.kind() {
                STATIC_SPECIFIER if self.base.get_node_text(&child) == "static" => {
                    Some(FunctionProperty::Static)
                }
                VIRTUAL_SPECIFIER if self.base.get_node_text(&child) == "virtual" => {
                    Some(FunctionProperty::Virtual)
                }
                VIRTUAL_KEYWORD_NODE => Some(FunctionProperty::Virtual),
                _ => None,
            };

            if let Some(property) = property {
                if !properties.contains(&property) {
                    properties.push(property);
                }
            }
        }

        properties
    }

    /// Full classification of an ordinary definition
    ///
    /// Returns the cleaned name and the structural tags followed by the
    /// embedded-token tags.
    pub(super) fn classify(&self, node: Node, name: &str) -> (String, Vec<FunctionProperty>) {
        let mut properties = self.structural_properties(node);
        let (name, embedded) = strip_embedded_qualifiers(name);

        for property in embedded {
            if !properties.contains(&property) {
                properties.push(property);
            }
        }

        (name, properties)
    }
}

/// Remove trailing qualifier keywords from a declarator name
///
/// Each of `override`, `volatile`, `const` (in that order) is checked once: when
/// the name contains the keyword preceded by a space, the last such occurrence
/// is removed, whitespace is re-collapsed and the tag is recorded. Matching is
/// textual, so a parameter qualifier after a space counts when it is the only
/// occurrence, and so does an identifier that merely starts with a keyword
/// (`int constant`).
pub fn strip_embedded_qualifiers(name: &str) -> (String, Vec<FunctionProperty>) {
    let mut name = name.to_string();
    let mut properties = Vec::new();

    for property in FunctionProperty::EMBEDDED {
        let token = format!(" {}", property.keyword());
        if let Some(index) = name.rfind(&token) {
            name.replace_range(index..index + token.len(), " ");
            name = normalize_whitespace(&name);
            properties.push(property);
        }
    }

    (name, properties)
}

#[cfg(test)]
mod tests {
    use super::super::helpers::FUNCTION_DEFINITION;
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

    fn first_definition<'a>(extractor: &CppExtractor, tree: &'a Tree) -> Node<'a> {
        extractor
            .base
            .find_nodes_by_types(&tree.root_node(), &[FUNCTION_DEFINITION])[0]
    }

    #[test]
    fn test_strip_trailing_const() {
        let (name, properties) = strip_embedded_qualifiers("foo() const");
        assert_eq!(name, "foo()");
        assert_eq!(properties, vec![FunctionProperty::Const]);
    }

    #[test]
    fn test_strip_multiple_qualifiers_in_fixed_order() {
        let (name, properties) = strip_embedded_qualifiers("get(int i) const volatile override");
        assert_eq!(name, "get(int i)");
        assert_eq!(
            properties,
            vec![
                FunctionProperty::Override,
                FunctionProperty::Volatile,
                FunctionProperty::Const,
            ]
        );
    }

    #[test]
    fn test_strip_matches_parameter_const_after_space() {
        // A parameter qualifier preceded by a space is indistinguishable from a
        // trailing one at the text level
        let (name, properties) = strip_embedded_qualifiers("operator+(X lhs, const X& rhs)");
        assert_eq!(name, "operator+(X lhs, X& rhs)");
        assert_eq!(properties, vec![FunctionProperty::Const]);
    }

    #[test]
    fn test_strip_prefers_trailing_qualifier_over_parameter_const() {
        let (name, properties) = strip_embedded_qualifiers("f(int a, const int b) const");
        assert_eq!(name, "f(int a, const int b)");
        assert_eq!(properties, vec![FunctionProperty::Const]);
    }

    #[test]
    fn test_strip_matches_identifier_starting_with_keyword() {
        let (name, properties) = strip_embedded_qualifiers("f(int constant)");
        assert_eq!(name, "f(int ant)");
        assert_eq!(properties, vec![FunctionProperty::Const]);
    }

    #[test]
    fn test_strip_leaves_leading_parameter_const_alone() {
        let (name, properties) = strip_embedded_qualifiers("foo(const X& x)");
        assert_eq!(name, "foo(const X& x)");
        assert!(properties.is_empty());
    }

    #[test]
    fn test_strip_is_idempotent() {
        for input in ["foo() const", "f() override", "bar(int a) volatile", "baz()"] {
            let (once, _) = strip_embedded_qualifiers(input);
            let (twice, properties) = strip_embedded_qualifiers(&once);
            assert_eq!(once, twice, "second strip changed {input:?}");
            assert!(properties.is_empty());
        }
    }

    #[test]
    fn test_static_storage_class() {
        let content = "static void foo() { return; }\n";
        let (extractor, tree) = setup(content);
        let node = first_definition(&extractor, &tree);

        assert_eq!(
            extractor.structural_properties(node),
            vec![FunctionProperty::Static]
        );
    }

    #[test]
    fn test_inline_storage_class_is_not_static() {
        let content = "inline int foo(int a, int b)\n{\n    return a + b;\n}\n";
        let (extractor, tree) = setup(content);
        let node = first_definition(&extractor, &tree);

        assert!(extractor.structural_properties(node).is_empty());
    }

    #[test]
    fn test_virtual_member() {
        let content = "struct Base {\n    virtual void f() {}\n};\n";
        let (extractor, tree) = setup(content);
        let node = first_definition(&extractor, &tree);

        assert_eq!(
            extractor.structural_properties(node),
            vec![FunctionProperty::Virtual]
        );
    }

    #[test]
    fn test_template_member_with_trailing_const() {
        let content = "struct Box {\n    template<class T>\n    T get() const { return T(); }\n};\n";
        let (extractor, tree) = setup(content);
        let node = first_definition(&extractor, &tree);

        let name = extractor.function_name(node);
        let (name, properties) = extractor.classify(node, &name);

        assert_eq!(name, "get()");
        assert_eq!(
            properties,
            vec![FunctionProperty::Template, FunctionProperty::Const]
        );
    }
}
