//! Stylesheet tokenization.
//!
//! One tokenizer serves all three dialects, parameterized by a small
//! [`Dialect`] descriptor. A single pass over the parsed rule tree extracts
//! sentinel-marked token declarations, hard-coded design literals outside
//! marked scope, and verbatim keyframes rules. The armed/disarmed sentinel
//! state is threaded explicitly through the walk rather than kept in outer
//! mutable state.

pub mod dialect;
mod parser;

pub use dialect::Dialect;

use rayon::prelude::*;

use crate::core::classify::{classify, literal_kind};
use crate::core::data::{
    Catalog, HardCodedValue, SourceLocation, Token, TokenFile, TokenGroup,
};
use crate::core::merge::merge_catalogs;

use parser::{Declaration, Item};

/// Marker comment designating a rule block whose declarations are tokens.
pub const TOKENS_SENTINEL: &str = "@tokens";

/// Parse a batch of same-dialect files into one catalog.
///
/// Files parse independently and in parallel; results join in input order,
/// so token-name collisions resolve last-write-wins by file order.
pub fn parse_files(files: &[&TokenFile], dialect: &Dialect) -> Catalog {
    let parts: Vec<Catalog> = files
        .par_iter()
        .map(|file| parse_file(file, dialect))
        .collect();
    merge_catalogs(parts)
}

/// Parse one stylesheet. Binary or otherwise unwalkable content yields an
/// empty catalog; a broken file never aborts the batch.
pub fn parse_file(file: &TokenFile, dialect: &Dialect) -> Catalog {
    let Some(text) = file.as_text() else {
        return Catalog::default();
    };

    let items = parser::parse(text);
    let mut walk = FileWalk {
        dialect,
        src: text,
        filename: &file.filename,
        // Files without the sentinel are scanned for keyframes only.
        collect_tokens: text.contains(TOKENS_SENTINEL),
        tokens: Vec::new(),
        hard_coded: Vec::new(),
        keyframes: Vec::new(),
    };
    walk.walk_items(&items, false);

    let mut catalog = Catalog {
        hard_coded_values: walk.hard_coded,
        keyframes: walk.keyframes.join("\n\n"),
        ..Catalog::default()
    };
    if !walk.tokens.is_empty() {
        let mut group = TokenGroup::new(dialect.source_type);
        group.tokens = walk.tokens;
        catalog.token_groups.push(group);
    }
    catalog
}

fn is_sentinel(text: &str) -> bool {
    // Doc-style comments leave leading asterisks in the interior text.
    let text = text.trim().trim_start_matches('*').trim();
    text == TOKENS_SENTINEL
        || text
            .strip_prefix(TOKENS_SENTINEL)
            .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

fn is_keyframes(prelude: &str) -> bool {
    let prelude = prelude.trim_start();
    prelude.starts_with("@keyframes")
        || (prelude.starts_with("@-") && prelude.contains("keyframes"))
}

struct FileWalk<'a> {
    dialect: &'a Dialect,
    src: &'a str,
    filename: &'a str,
    collect_tokens: bool,
    tokens: Vec<Token>,
    hard_coded: Vec<HardCodedValue>,
    keyframes: Vec<String>,
}

impl FileWalk<'_> {
    /// Walk one block's items. `armed_scope` is true when an enclosing rule
    /// was marked by the sentinel, making every declaration a token.
    fn walk_items(&mut self, items: &[Item], armed_scope: bool) {
        let mut armed = false;
        for item in items {
            match item {
                Item::Comment(comment) => {
                    // The sentinel arms the walk; any other comment disarms.
                    armed = self.collect_tokens && is_sentinel(&comment.text);
                }
                Item::Declaration(declaration) => {
                    if !self.collect_tokens {
                        continue;
                    }
                    if armed_scope || armed {
                        self.push_token(declaration);
                    } else {
                        self.check_hard_coded(declaration);
                    }
                }
                Item::Rule(rule) => {
                    if is_keyframes(&rule.prelude) {
                        if self.dialect.collects_keyframes {
                            self.keyframes.push(self.src[rule.start..rule.end].to_string());
                        }
                    } else {
                        self.walk_items(&rule.items, armed_scope || armed);
                    }
                    // A marker applies to a single following rule.
                    armed = false;
                }
            }
        }
    }

    fn push_token(&mut self, declaration: &Declaration) {
        let name = self.dialect.token_name(&declaration.name);
        let (_, value) = classify(&declaration.value, Some(&declaration.name));
        self.tokens
            .push(Token::new(name, value, declaration.value.clone()));
    }

    fn check_hard_coded(&mut self, declaration: &Declaration) {
        let Some(kind) = literal_kind(&declaration.value) else {
            return;
        };
        let source_line = self
            .src
            .lines()
            .nth(declaration.line.saturating_sub(1))
            .unwrap_or("")
            .to_string();
        self.hard_coded.push(HardCodedValue {
            value: declaration.value.clone(),
            kind,
            location: SourceLocation::new(self.filename, declaration.line, declaration.col),
            source_line,
        });
    }
}
