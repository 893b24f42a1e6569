//! Core extraction engine.
//!
//! Pure function from pre-loaded files to a token catalog: each file routes
//! by extension to its extractor, per-file parses run independently (and in
//! parallel), and the merge step joins results in caller-supplied order.
//! The same entry points serve the build-time aggregation path and an
//! interactive render path.
//!
//! ## Module Structure
//!
//! - `data`: catalog data model (tokens, groups, findings)
//! - `classify`: value classification and normalization
//! - `stylesheet`: dialect-parameterized stylesheet tokenizer
//! - `svg`: vector icon extractor
//! - `raster`: raster image extractor
//! - `merge`: deterministic catalog merging
//! - `file_scanner`: candidate file discovery and loading (CLI collaborator)

pub mod classify;
pub mod data;
pub mod file_scanner;
pub mod merge;
pub mod raster;
pub mod stylesheet;
pub mod svg;

use std::path::Path;

pub use data::{
    Catalog, FileContent, HardCodedValue, ProjectTokens, SourceLocation, Token, TokenFile,
    TokenGroup, TokenSourceType, ValueKind,
};

/// Source type a path routes to, by case-insensitive extension.
/// `None` for files the engine does not handle.
pub fn source_type_for_path(filename: &str) -> Option<TokenSourceType> {
    let ext = Path::new(filename)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    match ext.as_str() {
        "css" => Some(TokenSourceType::Css),
        "scss" => Some(TokenSourceType::Scss),
        "less" => Some(TokenSourceType::Less),
        "svg" => Some(TokenSourceType::Svg),
        "png" | "jpeg" | "jpg" | "gif" => Some(TokenSourceType::Image),
        _ => None,
    }
}

/// Extract the whole-project aggregation shape, keyed by source type.
///
/// Files must arrive in a deterministic order (the CLI sorts paths
/// lexicographically); name collisions resolve last-write-wins by that
/// order. Unknown extensions are ignored.
pub fn extract_project_tokens(files: &[TokenFile]) -> ProjectTokens {
    let mut css: Vec<&TokenFile> = Vec::new();
    let mut scss: Vec<&TokenFile> = Vec::new();
    let mut less: Vec<&TokenFile> = Vec::new();
    let mut svg_files: Vec<&TokenFile> = Vec::new();
    let mut images: Vec<&TokenFile> = Vec::new();

    for file in files {
        match source_type_for_path(&file.filename) {
            Some(TokenSourceType::Css) => css.push(file),
            Some(TokenSourceType::Scss) => scss.push(file),
            Some(TokenSourceType::Less) => less.push(file),
            Some(TokenSourceType::Svg) => svg_files.push(file),
            Some(TokenSourceType::Image) => images.push(file),
            None => {}
        }
    }

    ProjectTokens {
        css_tokens: stylesheet::parse_files(&css, &stylesheet::dialect::CSS),
        scss_tokens: stylesheet::parse_files(&scss, &stylesheet::dialect::SCSS),
        less_tokens: stylesheet::parse_files(&less, &stylesheet::dialect::LESS),
        svg_tokens: svg::parse_files(&svg_files),
        image_tokens: raster::parse_files(&images),
    }
}

/// Extract one merged catalog from a mixed file list.
pub fn extract_catalog(files: &[TokenFile]) -> Catalog {
    let project = extract_project_tokens(files);
    merge::merge_catalogs([
        project.css_tokens,
        project.scss_tokens,
        project.less_tokens,
        project.svg_tokens,
        project.image_tokens,
    ])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_routing_by_extension() {
        assert_eq!(source_type_for_path("a.css"), Some(TokenSourceType::Css));
        assert_eq!(source_type_for_path("a.SCSS"), Some(TokenSourceType::Scss));
        assert_eq!(source_type_for_path("a.less"), Some(TokenSourceType::Less));
        assert_eq!(source_type_for_path("a.svg"), Some(TokenSourceType::Svg));
        assert_eq!(source_type_for_path("a.PNG"), Some(TokenSourceType::Image));
        assert_eq!(source_type_for_path("a.jpeg"), Some(TokenSourceType::Image));
        assert_eq!(source_type_for_path("a.jpg"), Some(TokenSourceType::Image));
        assert_eq!(source_type_for_path("a.gif"), Some(TokenSourceType::Image));
        assert_eq!(source_type_for_path("a.ts"), None);
        assert_eq!(source_type_for_path("Makefile"), None);
    }

    #[test]
    fn test_empty_input_yields_empty_catalogs() {
        let project = extract_project_tokens(&[]);
        for part in project.parts() {
            assert_eq!(part, &Catalog::default());
        }
        assert_eq!(extract_catalog(&[]), Catalog::default());
    }

    #[test]
    fn test_mixed_input_routes_to_groups() {
        let files = vec![
            TokenFile::text(
                "./tokens.css",
                "/* @tokens */\n:root { --brand: #FF0000; }",
            ),
            TokenFile::text(
                "./vars.scss",
                "// @tokens\n$space: 8px;\n",
            ),
            TokenFile::text("./icon.svg", r#"<svg id="arrow"><path d="M0 0"/></svg>"#),
        ];
        let catalog = extract_catalog(&files);
        let types: Vec<TokenSourceType> = catalog
            .token_groups
            .iter()
            .map(|g| g.source_type)
            .collect();
        assert_eq!(
            types,
            vec![
                TokenSourceType::Css,
                TokenSourceType::Scss,
                TokenSourceType::Svg
            ]
        );
        assert_eq!(catalog.token_count(), 3);
    }

    #[test]
    fn test_unknown_extensions_are_ignored() {
        let files = vec![TokenFile::text("./readme.md", "# nope")];
        assert_eq!(extract_catalog(&files), Catalog::default());
    }
}
