//! Core data types shared by the extractors and the merge step.
//!
//! ## Module Structure
//!
//! - `token`: Token, TokenGroup, TokenSourceType and the TokenFile input
//! - `finding`: hard-coded value findings and source locations
//! - `catalog`: the merged Catalog and the per-source-type bundle shape

mod catalog;
mod finding;
mod token;

pub use catalog::{Catalog, ProjectTokens};
pub use finding::{HardCodedValue, SourceLocation, ValueKind};
pub use token::{FileContent, Token, TokenFile, TokenGroup, TokenSourceType};
