use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::core::data::{TokenFile, TokenSourceType};
use crate::core::source_type_for_path;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    pub files: HashSet<String>,
    pub skipped_count: usize,
}

pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files: HashSet<String> = HashSet::new();
    let mut skipped_count = 0;

    // Separate ignore patterns into literal paths and glob patterns
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            // Literal path mode: convert to absolute path for prefix matching
            let path = Path::new(base_dir).join(p);
            literal_ignore_paths.push(path);
        }
    }

    let dirs_to_scan: Vec<PathBuf> = if includes.is_empty() {
        vec![Path::new(base_dir).to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in includes {
            if is_glob_pattern(inc) {
                // Glob mode: expand pattern to matching directories
                let full_pattern = Path::new(base_dir).join(inc);
                let pattern_str = full_pattern.to_string_lossy();
                match glob(&pattern_str) {
                    Ok(entries) => {
                        for entry in entries.flatten() {
                            if entry.is_dir() {
                                paths.push(entry);
                            }
                        }
                    }
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid glob pattern '{}': {}",
                                "warning:".bold().yellow(),
                                inc,
                                e
                            );
                        }
                    }
                }
            } else {
                // Literal path mode: use as-is
                let path = Path::new(base_dir).join(inc);
                if path.exists() {
                    paths.push(path);
                } else if verbose {
                    eprintln!(
                        "{} Include path does not exist: {}",
                        "warning:".bold().yellow(),
                        path.display()
                    );
                }
            }
        }
        paths
    };

    for dir in dirs_to_scan {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            // Check if path matches any literal ignore path (prefix match)
            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }

            // Check if path matches any glob pattern
            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if path.is_file() && is_scannable_file(path) {
                files.insert(path_str.into());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_scannable_file(path: &Path) -> bool {
    source_type_for_path(&path.to_string_lossy()).is_some()
}

/// Load one candidate file, choosing text or binary by its route.
/// Raster payloads stay raw bytes; everything else must decode as UTF-8.
pub fn read_token_file(path: &str) -> Result<TokenFile> {
    match source_type_for_path(path) {
        Some(TokenSourceType::Image) => {
            let bytes =
                fs::read(path).with_context(|| format!("Failed to read file: {}", path))?;
            Ok(TokenFile::binary(path, bytes))
        }
        _ => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path))?;
            Ok(TokenFile::text(path, text))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_scan_stylesheet_and_asset_files() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        File::create(dir_path.join("tokens.css")).unwrap();
        File::create(dir_path.join("vars.scss")).unwrap();
        File::create(dir_path.join("icon.svg")).unwrap();
        File::create(dir_path.join("app.tsx")).unwrap();

        let result = scan_files(dir_path.to_str().unwrap(), &[], &[], false);

        assert_eq!(result.files.len(), 3);
        assert!(result.files.iter().any(|f| f.ends_with("tokens.css")));
        assert!(result.files.iter().any(|f| f.ends_with("vars.scss")));
        assert!(result.files.iter().any(|f| f.ends_with("icon.svg")));
        assert!(!result.files.iter().any(|f| f.ends_with("app.tsx")));
    }

    #[test]
    fn test_scan_ignores_node_modules() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let node_modules = dir_path.join("node_modules");
        fs::create_dir(&node_modules).unwrap();
        File::create(node_modules.join("lib.css")).unwrap();

        File::create(dir_path.join("app.css")).unwrap();

        let result = scan_files(
            dir_path.to_str().unwrap(),
            &[],
            &["**/node_modules/**".to_owned()],
            false,
        );

        assert_eq!(result.files.len(), 1);
        assert!(result.files.iter().any(|f| f.ends_with("app.css")));
        assert!(!result.files.iter().any(|f| f.contains("node_modules")));
    }

    #[test]
    fn test_scan_nested_directories() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let styles = dir_path.join("styles");
        fs::create_dir(&styles).unwrap();
        File::create(styles.join("theme.less")).unwrap();

        let assets = dir_path.join("assets");
        fs::create_dir(&assets).unwrap();
        File::create(assets.join("logo.png")).unwrap();

        let result = scan_files(dir_path.to_str().unwrap(), &[], &[], false);

        assert_eq!(result.files.len(), 2);
        assert!(result.files.iter().any(|f| f.ends_with("styles/theme.less")));
        assert!(result.files.iter().any(|f| f.ends_with("assets/logo.png")));
    }

    #[test]
    fn test_scan_with_includes() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let src = dir_path.join("src");
        fs::create_dir(&src).unwrap();
        File::create(src.join("tokens.css")).unwrap();

        let vendor = dir_path.join("vendor");
        fs::create_dir(&vendor).unwrap();
        File::create(vendor.join("reset.css")).unwrap();

        let result = scan_files(
            dir_path.to_str().unwrap(),
            &["src".to_owned()],
            &[],
            false,
        );

        assert_eq!(result.files.len(), 1);
        assert!(result.files.iter().any(|f| f.ends_with("src/tokens.css")));
    }

    #[test]
    fn test_scan_ignores_literal_directory_path() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let generated = dir_path.join("styles").join("generated");
        fs::create_dir_all(&generated).unwrap();
        File::create(generated.join("out.css")).unwrap();
        File::create(dir_path.join("styles").join("theme.css")).unwrap();

        let result = scan_files(
            dir_path.to_str().unwrap(),
            &[],
            &["styles/generated".to_owned()],
            false,
        );

        assert_eq!(result.files.len(), 1);
        assert!(result.files.iter().any(|f| f.ends_with("theme.css")));
    }

    #[test]
    fn test_is_scannable_file() {
        assert!(is_scannable_file(Path::new("a.css")));
        assert!(is_scannable_file(Path::new("a.scss")));
        assert!(is_scannable_file(Path::new("a.less")));
        assert!(is_scannable_file(Path::new("a.svg")));
        assert!(is_scannable_file(Path::new("a.png")));
        assert!(is_scannable_file(Path::new("photo.JPEG")));
        assert!(!is_scannable_file(Path::new("app.tsx")));
        assert!(!is_scannable_file(Path::new("data.json")));
        assert!(!is_scannable_file(Path::new("README.md")));
    }

    #[test]
    fn test_read_token_file_text_and_binary() {
        let dir = tempdir().unwrap();
        let css = dir.path().join("a.css");
        fs::write(&css, ":root {}").unwrap();
        let png = dir.path().join("a.png");
        fs::write(&png, [0x89u8, 0x50]).unwrap();

        let css_file = read_token_file(css.to_str().unwrap()).unwrap();
        assert_eq!(css_file.as_text(), Some(":root {}"));

        let png_file = read_token_file(png.to_str().unwrap()).unwrap();
        assert_eq!(png_file.as_text(), None);
        assert_eq!(png_file.as_bytes(), &[0x89, 0x50]);
    }

    #[test]
    fn test_read_token_file_missing_path_errors() {
        assert!(read_token_file("./definitely-missing.css").is_err());
    }
}
