//! Class and namespace attribution
//!
//! Both lookups walk parent links up to the translation unit and never fail.

use tree_sitter::Node;

use super::helpers::{CLASS_DEFINITIONS, NAMESPACE_DEFINITION};
use super::CppExtractor;

impl CppExtractor {
    /// Name of the nearest enclosing class or struct
    ///
    /// Nested types attribute to their direct owner only.
    pub(super) fn enclosing_class_name(&self, node: Node) -> Option<String> {
        self.base
            .find_parent_of_types(&node, &CLASS_DEFINITIONS)
            .map(|class_node| self.class_name(class_node))
    }

    /// Names of every enclosing namespace in walk order, innermost first
    pub(super) fn enclosing_namespaces(&self, node: Node) -> Vec<String> {
        self.base
            .find_parents_of_type(&node, NAMESPACE_DEFINITION)
            .into_iter()
            .map(|namespace_node| self.namespace_identifier(namespace_node))
            .collect()
    }

    /// Enclosing namespaces joined with `::`, `None` at file scope
    pub(super) fn namespace_path(&self, node: Node) -> Option<String> {
        let namespaces = self.enclosing_namespaces(node);
        if namespaces.is_empty() {
            None
        } else {
            Some(namespaces.join("::"))
        }
    }
}
