use serde::{Deserialize, Serialize};

use super::finding::HardCodedValue;
use super::token::{TokenGroup, TokenSourceType};

/// Extraction output: token groups, hard-coded findings and keyframe text.
///
/// Every extractor produces this shape for its own files; the merge step
/// combines many of them into one. Serializes to the
/// `{ tokenGroups, hardCodedValues, keyframes }` contract consumed by
/// documentation tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub token_groups: Vec<TokenGroup>,
    pub hard_coded_values: Vec<HardCodedValue>,
    pub keyframes: String,
}

impl Catalog {
    /// Catalog holding a single token group, the common extractor case.
    pub fn from_group(group: TokenGroup) -> Self {
        Self {
            token_groups: vec![group],
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.token_groups.is_empty()
            && self.hard_coded_values.is_empty()
            && self.keyframes.is_empty()
    }

    /// Total token count across all groups.
    pub fn token_count(&self) -> usize {
        self.token_groups.iter().map(|g| g.tokens.len()).sum()
    }

    pub fn group(&self, source_type: TokenSourceType) -> Option<&TokenGroup> {
        self.token_groups
            .iter()
            .find(|g| g.source_type == source_type)
    }
}

/// Whole-project aggregation shape, keyed by source type.
///
/// This is the on-disk bundle artifact written by the build path and
/// consumed later by the render path without re-parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTokens {
    pub css_tokens: Catalog,
    pub scss_tokens: Catalog,
    pub less_tokens: Catalog,
    pub svg_tokens: Catalog,
    pub image_tokens: Catalog,
}

impl ProjectTokens {
    /// All per-source catalogs in their fixed, deterministic order.
    pub fn parts(&self) -> [&Catalog; 5] {
        [
            &self.css_tokens,
            &self.scss_tokens,
            &self.less_tokens,
            &self.svg_tokens,
            &self.image_tokens,
        ]
    }

    pub fn token_count(&self) -> usize {
        self.parts().iter().map(|c| c.token_count()).sum()
    }

    pub fn hard_coded_count(&self) -> usize {
        self.parts().iter().map(|c| c.hard_coded_values.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::token::Token;
    use super::*;

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.token_count(), 0);
        assert_eq!(catalog.keyframes, "");
    }

    #[test]
    fn test_catalog_serialization_field_names() {
        let json = serde_json::to_string(&Catalog::default()).unwrap();
        assert_eq!(
            json,
            r#"{"tokenGroups":[],"hardCodedValues":[],"keyframes":""}"#
        );
    }

    #[test]
    fn test_project_tokens_serialization_keys() {
        let json = serde_json::to_string(&ProjectTokens::default()).unwrap();
        for key in [
            "cssTokens",
            "scssTokens",
            "lessTokens",
            "svgTokens",
            "imageTokens",
        ] {
            assert!(json.contains(key), "missing key {key} in {json}");
        }
    }

    #[test]
    fn test_token_count_spans_groups() {
        let mut css = TokenGroup::new(TokenSourceType::Css);
        css.tokens.push(Token::new("a", "1", "1"));
        let mut svg = TokenGroup::new(TokenSourceType::Svg);
        svg.tokens.push(Token::new("b", "2", "2"));
        svg.tokens.push(Token::new("c", "3", "3"));

        let catalog = Catalog {
            token_groups: vec![css, svg],
            ..Catalog::default()
        };
        assert_eq!(catalog.token_count(), 3);
        assert_eq!(
            catalog.group(TokenSourceType::Svg).unwrap().tokens.len(),
            2
        );
        assert!(catalog.group(TokenSourceType::Less).is_none());
    }
}
