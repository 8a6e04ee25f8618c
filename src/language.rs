//! Language Support - Shared tree-sitter language configuration
//!
//! ALL grammar selection goes through this module: the extractor manager and
//! the CLI `--language` override both resolve names here.

use crate::error::ExtractError;

/// Languages with a registered grammar
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["c", "cpp"];

/// Language used when the extension says nothing useful
///
/// tree-sitter-cpp parses C as well, so it is the safe default.
pub const DEFAULT_LANGUAGE: &str = "cpp";

/// Get tree-sitter language parser for a given language name
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language, ExtractError> {
    match language {
        "c" => Ok(tree_sitter_c::LANGUAGE.into()),
        "cpp" => Ok(tree_sitter_cpp::LANGUAGE.into()),
        _ => Err(ExtractError::UnsupportedLanguage(language.to_string())),
    }
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to `get_tree_sitter_language()`.
/// Headers map to C++: a `.h` file is as likely to hold classes as not.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "c" => Some("c"),
        "cpp" | "cc" | "cxx" | "c++" | "h" | "hpp" | "hh" | "hxx" | "h++" | "ipp" | "tpp"
        | "inl" => Some("cpp"),
        _ => None,
    }
}

/// Language for a path, falling back to [`DEFAULT_LANGUAGE`]
pub fn detect_language_for_path(path: &std::path::Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(detect_language_from_extension)
        .unwrap_or(DEFAULT_LANGUAGE)
}
