// cpp-functions - tree-sitter based function extraction for C and C++
//
// The extraction core walks a parsed tree and never does I/O; the manager
// layer handles parsing and files, and the binary adds output and the CLI.

pub mod error;
pub mod extractors;
pub mod language;
pub mod output;

pub use error::ExtractError;
pub use extractors::{
    CppExtractor, ExtractorManager, FileFunctions, FunctionProperty, FunctionRecord,
};
