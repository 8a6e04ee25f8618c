// Base Extractor Types
//
// Data structures produced by the function extractors.

use serde::{Deserialize, Serialize};

/// A function-like definition extracted from C/C++ source code
///
/// One record per `function_definition` or `preproc_function_def` node.
/// Records are plain values: built once during extraction and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRecord {
    /// Declarator text with whitespace collapsed and trailing qualifiers removed
    pub name: String,
    /// Start line number (1-based, inclusive)
    pub start: u32,
    /// End line number (1-based, inclusive)
    pub end: u32,
    /// Nearest enclosing class or struct
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Enclosing namespaces joined with `::`, nearest first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Qualifier tags in detection order, no duplicates
    #[serde(default)]
    pub properties: Vec<FunctionProperty>,
}

impl FunctionRecord {
    pub fn is_macro(&self) -> bool {
        self.has_property(FunctionProperty::Macro)
    }

    pub fn has_property(&self, property: FunctionProperty) -> bool {
        self.properties.contains(&property)
    }
}

/// Qualifier tags attached to a function record
///
/// Some come from dedicated grammar nodes (template, static, virtual), some are
/// trailing keywords embedded in the declarator text (override, volatile, const).
/// Both shapes end up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionProperty {
    Template,
    Macro,
    Static,
    Virtual,
    Override,
    Volatile,
    Const,
}

impl FunctionProperty {
    /// Trailing declarator keywords, in the order they are checked and stripped
    pub const EMBEDDED: [FunctionProperty; 3] = [
        FunctionProperty::Override,
        FunctionProperty::Volatile,
        FunctionProperty::Const,
    ];

    /// Source keyword for this tag
    pub fn keyword(&self) -> &'static str {
        match self {
            FunctionProperty::Template => "template",
            FunctionProperty::Macro => "macro",
            FunctionProperty::Static => "static",
            FunctionProperty::Virtual => "virtual",
            FunctionProperty::Override => "override",
            FunctionProperty::Volatile => "volatile",
            FunctionProperty::Const => "const",
        }
    }
}

impl std::fmt::Display for FunctionProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Function records for one source file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileFunctions {
    /// Path as given by the caller
    pub file: String,
    /// Language the file was parsed as
    pub language: String,
    pub functions: Vec<FunctionRecord>,
}
