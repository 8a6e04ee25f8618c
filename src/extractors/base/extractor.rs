// BaseExtractor implementation
//
// Holds the source text a tree was parsed from and the text utilities every
// language extractor shares.

use regex::Regex;
use std::sync::LazyLock;
use tree_sitter::Node;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Base implementation for language extractors
///
/// Carries no state between extractions beyond the source text itself; a new
/// extractor is built for every file.
pub struct BaseExtractor {
    pub language: String,
    pub content: String,
}

impl BaseExtractor {
    pub fn new(language: String, content: String) -> Self {
        Self { language, content }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Node text with every whitespace run (newlines and tabs included)
    /// collapsed to a single space, trimmed at both ends
    pub fn get_normalized_text(&self, node: &Node) -> String {
        normalize_whitespace(&self.get_node_text(node))
    }
}

/// Collapse whitespace runs to single spaces and trim
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
