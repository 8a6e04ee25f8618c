//! C++ extractor - function definitions with class, namespace and qualifier metadata
//! Modularized architecture with clear separation of concerns:
//! - helpers: Grammar node kinds and node predicates
//! - identifiers: Name resolution with fallbacks and synthetic identifiers
//! - scope: Enclosing class and namespace attribution
//! - properties: Structural and embedded qualifier classification
//! - spans: 1-based line spans, including the macro end-line correction

mod helpers;
mod identifiers;
mod properties;
mod scope;
mod spans;

pub use identifiers::anonymous_identifier;
pub use properties::strip_embedded_qualifiers;
pub use spans::line_span;

use crate::extractors::base::{BaseExtractor, FunctionProperty, FunctionRecord};
use tracing::{debug, trace};
use tree_sitter::{Node, Tree};

use helpers::{is_macro_definition, DEFINITION_KINDS};

/// C++ extractor for function definitions and function-like macros
///
/// Also drives C trees: tree-sitter-c uses the same definition kinds and simply
/// never produces classes or namespaces.
pub struct CppExtractor {
    base: BaseExtractor,
}

impl CppExtractor {
    pub fn new(content: String) -> Self {
        Self::with_language("cpp".to_string(), content)
    }

    pub fn with_language(language: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(language, content),
        }
    }

    /// Extract one record per function definition and function-like macro,
    /// in document order
    pub fn extract_functions(&self, tree: &Tree) -> Vec<FunctionRecord> {
        let definitions = self
            .base
            .find_nodes_by_types(&tree.root_node(), &DEFINITION_KINDS);

        let functions: Vec<FunctionRecord> = definitions
            .into_iter()
            .map(|node| self.convert_definition(node))
            .collect();

        debug!(
            "Extracted {} functions from {} tree",
            functions.len(),
            self.base.language
        );
        functions
    }

    fn convert_definition(&self, node: Node) -> FunctionRecord {
        let record = if is_macro_definition(&node) {
            self.convert_macro_definition(node)
        } else {
            self.convert_function_definition(node)
        };

        trace!(
            name = %record.name,
            start = record.start,
            end = record.end,
            "converted {}",
            node.kind()
        );
        record
    }

    /// Macros are not scoped by classes or namespaces in the grammar
    fn convert_macro_definition(&self, node: Node) -> FunctionRecord {
        let (start, end) = line_span(&node, true);

        FunctionRecord {
            name: self.macro_function_name(node),
            start,
            end,
            class_name: None,
            namespace: None,
            properties: vec![FunctionProperty::Macro],
        }
    }

    fn convert_function_definition(&self, node: Node) -> FunctionRecord {
        let (start, end) = line_span(&node, false);
        let (name, properties) = self.classify(node, &self.function_name(node));

        FunctionRecord {
            name,
            start,
            end,
            class_name: self.enclosing_class_name(node),
            namespace: self.namespace_path(node),
            properties,
        }
    }
}
