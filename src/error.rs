//! Errors raised around extraction: grammar setup, parsing and file access
//!
//! Extraction itself is total; these only come out of the manager layer.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported language: '{0}' (supported: c, cpp)")]
    UnsupportedLanguage(String),
    #[error("failed to set parser language for {language}: {source}")]
    LanguageSetup {
        language: String,
        #[source]
        source: tree_sitter::LanguageError,
    },
    #[error("failed to parse {0}")]
    Parse(String),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
