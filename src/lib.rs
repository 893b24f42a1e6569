//! Tokex - design token extractor for stylesheets and image assets
//!
//! Tokex is a CLI tool and library for extracting design tokens (colors,
//! gradients, fonts, spacing, shadows, icons) from CSS/SCSS/LESS
//! stylesheets, SVG markup and raster images. It builds a structured,
//! serializable catalog for documentation tooling, detects hard-coded
//! design values that should have been tokens, and collects animation
//! keyframes for display.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core extraction engine (classifier, tokenizers, merge)

pub mod cli;
pub mod config;
pub mod core;
