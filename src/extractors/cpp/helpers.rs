//! Grammar node kinds the C++ extractor keys on, and small node predicates
//!
//! tree-sitter-c and tree-sitter-cpp share these kinds for everything C has, so
//! the same constants drive both grammars.

use tree_sitter::Node;

pub(super) const FUNCTION_DEFINITION: &str = "function_definition";
pub(super) const MACRO_FUNCTION_DEFINITION: &str = "preproc_function_def";

/// Definition kinds collected from a tree
pub(super) const DEFINITION_KINDS: [&str; 2] = [FUNCTION_DEFINITION, MACRO_FUNCTION_DEFINITION];

pub(super) const FUNCTION_DECLARATOR: &str = "function_declarator";
/// `const auto& foo()` / `X& operator++()` wrap the function declarator in `& ...`
pub(super) const REFERENCE_DECLARATOR: &str = "reference_declarator";
pub(super) const MACRO_FUNCTION_IDENTIFIER: &str = "identifier";

pub(super) const CLASS_DEFINITIONS: [&str; 2] = ["class_specifier", "struct_specifier"];
pub(super) const CLASS_IDENTIFIER: &str = "type_identifier";
/// `template<> struct A<int>` only carries the template type `A<int>`
pub(super) const TEMPLATE_SPECIALIZATION: &str = "template_type";

pub(super) const NAMESPACE_DEFINITION: &str = "namespace_definition";
pub(super) const NAMESPACE_IDENTIFIER: &str = "namespace_identifier";
/// Older grammar releases name namespaces with a plain identifier
pub(super) const LEGACY_NAMESPACE_IDENTIFIER: &str = "identifier";

pub(super) const TEMPLATE_DECLARATION: &str = "template_declaration";
pub(super) const STATIC_SPECIFIER: &str = "storage_class_specifier";
pub(super) const VIRTUAL_SPECIFIER: &str = "virtual_function_specifier";
/// Current tree-sitter-cpp emits `virtual` as a bare keyword child
pub(super) const VIRTUAL_KEYWORD_NODE: &str = "virtual";

pub(super) fn is_macro_definition(node: &Node) -> bool {
    node.kind() == MACRO_FUNCTION_DEFINITION
}

pub(super) fn is_template_member(node: &Node) -> bool {
    node.parent()
        .is_some_and(|parent| parent.kind() == TEMPLATE_DECLARATION)
}
