// Base Extractor Types and helpers
//
// - types.rs: Output data structures (FunctionRecord, FunctionProperty, FileFunctions)
// - extractor.rs: BaseExtractor implementation (node text, whitespace normalization)
// - tree_methods.rs: Tree navigation and traversal methods

pub mod extractor;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::{normalize_whitespace, BaseExtractor};
pub use tree_methods::ancestors;
pub use types::{FileFunctions, FunctionProperty, FunctionRecord};
