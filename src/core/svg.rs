//! Vector icon extraction.
//!
//! Walks inlined SVG markup and emits one token per named icon definition:
//! `<symbol>` elements carrying an `id`, or the root `<svg>` element when it
//! carries one. Symbol fragments are re-wrapped as standalone `<svg>`
//! markup so each token value renders independently of the rest of the
//! file. Files with no recognizable definitions contribute nothing, and
//! malformed XML is isolated per file.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use rayon::prelude::*;

use crate::core::data::{Catalog, Token, TokenFile, TokenGroup, TokenSourceType};
use crate::core::merge::merge_catalogs;

/// Parse a batch of SVG files into one catalog (icon group only; vector
/// files contribute no hard-coded values or keyframes).
pub fn parse_files(files: &[&TokenFile]) -> Catalog {
    let parts: Vec<Catalog> = files.par_iter().map(|file| parse_file(file)).collect();
    merge_catalogs(parts)
}

pub fn parse_file(file: &TokenFile) -> Catalog {
    let Some(text) = file.as_text() else {
        return Catalog::default();
    };
    let tokens = match scan_icons(text) {
        Ok(tokens) => tokens,
        Err(_) => return Catalog::default(),
    };
    if tokens.is_empty() {
        return Catalog::default();
    }
    let mut group = TokenGroup::new(TokenSourceType::Svg);
    group.tokens = tokens;
    Catalog::from_group(group)
}

/// Single pass over the XML events, slicing each definition's markup
/// verbatim from the source via the reader's byte positions.
fn scan_icons(text: &str) -> Result<Vec<Token>, quick_xml::Error> {
    let mut reader = Reader::from_str(text);
    let mut depth = 0usize;
    let mut symbols: Vec<Token> = Vec::new();
    // (start offset, depth at start, id)
    let mut symbol_capture: Option<(usize, usize, String)> = None;
    let mut root_start: Option<(usize, String)> = None;
    let mut root_token: Option<Token> = None;

    loop {
        let event_start = reader.buffer_position() as usize;
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(e) => {
                if symbol_capture.is_none() && e.local_name().as_ref() == b"symbol" {
                    if let Some(id) = attr_id(&e) {
                        symbol_capture = Some((event_start, depth, id));
                    }
                }
                if depth == 0 && e.local_name().as_ref() == b"svg" && root_start.is_none() {
                    if let Some(id) = attr_id(&e) {
                        root_start = Some((event_start, id));
                    }
                }
                depth += 1;
            }
            Event::Empty(e) => {
                let event_end = reader.buffer_position() as usize;
                if symbol_capture.is_none() && e.local_name().as_ref() == b"symbol" {
                    if let Some(id) = attr_id(&e) {
                        symbols.push(symbol_token(&id, &text[event_start..event_end]));
                    }
                }
                if depth == 0 && e.local_name().as_ref() == b"svg" && root_token.is_none() {
                    if let Some(id) = attr_id(&e) {
                        let markup = &text[event_start..event_end];
                        root_token = Some(Token::new(id, markup, markup));
                    }
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                let event_end = reader.buffer_position() as usize;
                let symbol_done = symbol_capture
                    .as_ref()
                    .is_some_and(|(_, capture_depth, _)| depth == *capture_depth);
                if symbol_done {
                    if let Some((start, _, id)) = symbol_capture.take() {
                        symbols.push(symbol_token(&id, &text[start..event_end]));
                    }
                }
                if depth == 0 {
                    if let Some((start, id)) = root_start.take() {
                        let markup = &text[start..event_end];
                        root_token = Some(Token::new(id, markup, markup));
                    }
                }
            }
            _ => {}
        }
    }

    // Sprite sheets win over the root element: a file defining symbols is a
    // collection, not a single icon.
    Ok(if symbols.is_empty() {
        root_token.into_iter().collect()
    } else {
        symbols
    })
}

/// Re-wrap a `<symbol>` fragment as a standalone `<svg>` fragment,
/// preserving its attributes (notably `viewBox`).
fn symbol_token(id: &str, markup: &str) -> Token {
    let mut value = markup.replacen("<symbol", "<svg", 1);
    if let Some(idx) = value.rfind("</symbol>") {
        value.replace_range(idx.., "</svg>");
    }
    Token::new(id, value.clone(), value)
}

fn attr_id(element: &BytesStart) -> Option<String> {
    let attr = element.try_get_attribute("id").ok().flatten()?;
    let value = String::from_utf8_lossy(attr.value.as_ref()).into_owned();
    if value.is_empty() { None } else { Some(value) }
}
