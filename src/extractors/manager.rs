//! ExtractorManager - Public API for function extraction
//!
//! Handles reading and parsing source files and delegates to the C/C++
//! extractor. This module provides the main public interface for clients to
//! extract function records from source text or files on disk.

use crate::error::ExtractError;
use crate::extractors::base::{FileFunctions, FunctionRecord};
use crate::extractors::cpp::CppExtractor;
use crate::language::{detect_language_for_path, get_tree_sitter_language, SUPPORTED_LANGUAGES};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tree_sitter::Parser;

/// Manager for function extraction
pub struct ExtractorManager {
    // No state needed - parsers are created per call so the manager is shareable across threads
}

impl Default for ExtractorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self {}
    }

    pub fn supported_languages(&self) -> Vec<&'static str> {
        SUPPORTED_LANGUAGES.to_vec()
    }

    /// Parse `content` with the grammar for `language` and extract its functions
    pub fn extract_source(
        &self,
        content: &str,
        language: &str,
    ) -> Result<Vec<FunctionRecord>, ExtractError> {
        let tree_sitter_language = get_tree_sitter_language(language)?;

        // Create parser for the language
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_language)
            .map_err(|source| ExtractError::LanguageSetup {
                language: language.to_string(),
                source,
            })?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| ExtractError::Parse(format!("{} source", language)))?;

        let extractor = CppExtractor::with_language(language.to_string(), content.to_string());
        Ok(extractor.extract_functions(&tree))
    }

    /// Read a file, detect its language from the extension and extract its functions
    pub fn extract_file(&self, path: &Path) -> Result<FileFunctions, ExtractError> {
        self.extract_file_as(path, None)
    }

    /// Like [`extract_file`](Self::extract_file), with an optional forced language
    pub fn extract_file_as(
        &self,
        path: &Path,
        language: Option<&str>,
    ) -> Result<FileFunctions, ExtractError> {
        let language = language.unwrap_or_else(|| detect_language_for_path(path));

        let content = std::fs::read_to_string(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let functions = self
            .extract_source(&content, language)
            .map_err(|e| match e {
                ExtractError::Parse(_) => ExtractError::Parse(path.display().to_string()),
                other => other,
            })?;

        tracing::debug!(
            "Extracted {} functions from {} file: {}",
            functions.len(),
            language,
            path.display()
        );

        Ok(FileFunctions {
            file: path.display().to_string(),
            language: language.to_string(),
            functions,
        })
    }

    /// Extract functions from multiple files in parallel
    ///
    /// Runs on the global rayon pool. Results come back in input order, one per
    /// file; a file that fails is logged and returned as an `Err` without
    /// affecting the rest of the batch.
    pub fn extract_files_batch(
        &self,
        paths: &[PathBuf],
        language: Option<&str>,
    ) -> Vec<Result<FileFunctions, ExtractError>> {
        paths
            .par_iter()
            .map(|path| {
                self.extract_file_as(path, language).inspect_err(|e| {
                    tracing::warn!("Failed to extract functions from {}: {}", path.display(), e);
                })
            })
            .collect()
    }
}
