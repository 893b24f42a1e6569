use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic kind of a design value, determined from its lexical shape alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueKind {
    Color,
    Gradient,
    FontFamily,
    FontSize,
    Spacing,
    Shadow,
    Other,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Color => write!(f, "color"),
            ValueKind::Gradient => write!(f, "gradient"),
            ValueKind::FontFamily => write!(f, "font-family"),
            ValueKind::FontSize => write!(f, "font-size"),
            ValueKind::Spacing => write!(f, "spacing"),
            ValueKind::Shadow => write!(f, "shadow"),
            ValueKind::Other => write!(f, "other"),
        }
    }
}

/// Position information in a stylesheet source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    /// Path to the source file (e.g., "./src/button.css").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// A design-relevant literal used directly instead of through a token.
///
/// Informational only: findings are reported alongside the catalog but never
/// merged into a token group. The raw declaration value is preserved
/// verbatim, and `source_line` carries the full line for caret rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardCodedValue {
    pub value: String,
    pub kind: ValueKind,
    pub location: SourceLocation,
    pub source_line: String,
}
