//! Function extractors
//!
//! Tree-sitter based extraction of function definitions from C and C++ sources.
//!
//! # Architecture
//!
//! - `base` - Output data model, node text access and tree navigation helpers
//! - `cpp` - Function definition extraction for C/C++ trees
//! - `manager` - ExtractorManager public API (parsing, files, batches)

pub mod base;
pub mod cpp;
pub mod manager;

// Re-export the public API
pub use base::{FileFunctions, FunctionProperty, FunctionRecord};
pub use cpp::CppExtractor;
pub use manager::ExtractorManager;
