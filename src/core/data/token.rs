use std::fmt;

use serde::{Deserialize, Serialize};

/// Source dialect or asset format a token group was extracted from.
///
/// Groups of the same source type are merged into one group across files,
/// so a catalog holds at most one group per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenSourceType {
    Css,
    Scss,
    Less,
    Svg,
    Image,
}

impl fmt::Display for TokenSourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSourceType::Css => write!(f, "css"),
            TokenSourceType::Scss => write!(f, "scss"),
            TokenSourceType::Less => write!(f, "less"),
            TokenSourceType::Svg => write!(f, "svg"),
            TokenSourceType::Image => write!(f, "image"),
        }
    }
}

/// A named design value extracted from a source file.
///
/// `value` is the normalized form (e.g. lowercase hex for opaque colors),
/// `original_value` preserves the literal source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub name: String,
    pub value: String,
    pub original_value: String,
}

impl Token {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        original_value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            original_value: original_value.into(),
        }
    }
}

/// All tokens extracted from one source dialect.
///
/// After merging, `tokens` never contains two entries with the same name;
/// later files overwrite earlier ones while keeping the first-seen position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGroup {
    #[serde(rename = "type")]
    pub source_type: TokenSourceType,
    pub tokens: Vec<Token>,
}

impl TokenGroup {
    pub fn new(source_type: TokenSourceType) -> Self {
        Self {
            source_type,
            tokens: Vec::new(),
        }
    }
}

/// File content as loaded by the caller.
///
/// Stylesheets and vector markup arrive as text; raster payloads as bytes.
/// The engine never reads the file system itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary(Vec<u8>),
}

/// A single input file: filename plus pre-loaded content.
///
/// Ephemeral input, consumed once per parse pass and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFile {
    pub filename: String,
    pub content: FileContent,
}

impl TokenFile {
    pub fn text(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: FileContent::Text(content.into()),
        }
    }

    pub fn binary(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content: FileContent::Binary(content),
        }
    }

    /// Text view of the content, `None` for binary payloads.
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            FileContent::Text(text) => Some(text),
            FileContent::Binary(_) => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match &self.content {
            FileContent::Text(text) => text.as_bytes(),
            FileContent::Binary(bytes) => bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_source_type_display() {
        assert_eq!(TokenSourceType::Css.to_string(), "css");
        assert_eq!(TokenSourceType::Scss.to_string(), "scss");
        assert_eq!(TokenSourceType::Less.to_string(), "less");
        assert_eq!(TokenSourceType::Svg.to_string(), "svg");
        assert_eq!(TokenSourceType::Image.to_string(), "image");
    }

    #[test]
    fn test_token_serialization_uses_camel_case() {
        let token = Token::new("color-primary", "#ff0000", "#FF0000");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(
            json,
            r##"{"name":"color-primary","value":"#ff0000","originalValue":"#FF0000"}"##
        );
    }

    #[test]
    fn test_group_serialization_renames_type() {
        let mut group = TokenGroup::new(TokenSourceType::Scss);
        group.tokens.push(Token::new("brand", "#abc", "#abc"));
        let json = serde_json::to_string(&group).unwrap();
        assert!(json.starts_with(r#"{"type":"scss","#));
    }

    #[test]
    fn test_token_file_text_view() {
        let file = TokenFile::text("a.css", ":root {}");
        assert_eq!(file.as_text(), Some(":root {}"));

        let file = TokenFile::binary("a.png", vec![0x89, 0x50]);
        assert_eq!(file.as_text(), None);
        assert_eq!(file.as_bytes(), &[0x89, 0x50]);
    }
}
