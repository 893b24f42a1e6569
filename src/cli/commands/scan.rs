use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{BundleSummary, CommandResult, CommandSummary, ScanSummary};
use crate::cli::args::ScanCommand;
use crate::config::load_config;
use crate::core::file_scanner::{read_token_file, scan_files};
use crate::core::{TokenFile, extract_catalog, extract_project_tokens};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let verbose = args.common.verbose;

    let source_root = args
        .common
        .source_root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let root = source_root.to_string_lossy().to_string();

    let config_result = load_config(&source_root)?;
    if verbose && !config_result.from_file {
        eprintln!("Note: No .tokexrc.json found, using default configuration");
    }
    let config = config_result.config;

    let scan_result = scan_files(&root, &config.includes, &config.ignores, verbose);
    if scan_result.skipped_count > 0 {
        eprintln!(
            "Warning: {} path(s) skipped due to access errors{}",
            scan_result.skipped_count,
            if verbose { "" } else { " (use -v for details)" }
        );
    }

    // Name collisions resolve last-write-wins by file order, so the order
    // must be deterministic: lexicographic path sort.
    let mut paths: Vec<String> = scan_result.files.into_iter().collect();
    paths.sort();

    let files = load_files(&paths, verbose);
    let files_scanned = files.len();

    let output = args
        .output
        .clone()
        .or_else(|| config.output.as_ref().map(PathBuf::from));

    let (summary, hard_coded_count) = match output {
        Some(output_path) => {
            let project = extract_project_tokens(&files);
            let json =
                serde_json::to_string(&project).context("Failed to serialize token bundle")?;
            fs::write(&output_path, json)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            let hard_coded_count = project.hard_coded_count();
            let token_count = project.token_count();
            (
                CommandSummary::Bundle(BundleSummary {
                    output_path,
                    files_scanned,
                    token_count,
                }),
                hard_coded_count,
            )
        }
        None => {
            let catalog = extract_catalog(&files);
            let hard_coded_count = catalog.hard_coded_values.len();
            (
                CommandSummary::Scan(ScanSummary {
                    catalog,
                    files_scanned,
                }),
                hard_coded_count,
            )
        }
    };

    Ok(CommandResult {
        summary,
        hard_coded_count,
        deny_hardcoded: args.deny_hardcoded,
    })
}

/// Read candidate files, surfacing I/O failures here so unreadable content
/// never reaches the engine.
fn load_files(paths: &[String], verbose: bool) -> Vec<TokenFile> {
    let mut files = Vec::new();
    for path in paths {
        match read_token_file(path) {
            Ok(file) => files.push(file),
            Err(e) => {
                if verbose {
                    eprintln!("Warning: {:#}", e);
                } else {
                    eprintln!("Warning: skipped {}", path);
                }
            }
        }
    }
    files
}
