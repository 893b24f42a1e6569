//! Catalog merging.
//!
//! Pure and infallible: combines per-file or per-extractor catalogs into
//! one. Groups of the same source type concatenate in input order; within a
//! merged group tokens are re-keyed by name with later entries overwriting
//! earlier ones while keeping the first-seen position. Hard-coded findings
//! concatenate without deduplication, keyframe text joins with a blank line.
//! Callers supply a deterministic input order; completion order never
//! reaches this point.

use std::collections::HashMap;

use crate::core::data::{Catalog, Token, TokenGroup, TokenSourceType};

pub fn merge_catalogs(parts: impl IntoIterator<Item = Catalog>) -> Catalog {
    let mut merged = Catalog::default();
    let mut group_index: HashMap<TokenSourceType, usize> = HashMap::new();

    for part in parts {
        for group in part.token_groups {
            if group.tokens.is_empty() {
                continue;
            }
            match group_index.get(&group.source_type) {
                Some(&i) => {
                    for token in group.tokens {
                        upsert(&mut merged.token_groups[i].tokens, token);
                    }
                }
                None => {
                    group_index.insert(group.source_type, merged.token_groups.len());
                    let mut target = TokenGroup::new(group.source_type);
                    for token in group.tokens {
                        upsert(&mut target.tokens, token);
                    }
                    merged.token_groups.push(target);
                }
            }
        }

        merged.hard_coded_values.extend(part.hard_coded_values);

        if !part.keyframes.is_empty() {
            if !merged.keyframes.is_empty() {
                merged.keyframes.push_str("\n\n");
            }
            merged.keyframes.push_str(&part.keyframes);
        }
    }

    merged
}

/// Insert or overwrite by name, keeping the first-seen position stable.
fn upsert(tokens: &mut Vec<Token>, token: Token) {
    match tokens.iter_mut().find(|t| t.name == token.name) {
        Some(existing) => *existing = token,
        None => tokens.push(token),
    }
}
