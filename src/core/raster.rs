//! Raster image extraction.
//!
//! Sniffs PNG/JPEG/GIF payloads for format and dimensions, then emits one
//! token per readable image whose value is an embeddable data URI. The
//! engine performs no transcoding; unreadable or truncated payloads are
//! skipped without aborting the batch.

use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use rayon::prelude::*;

use crate::core::data::{Catalog, Token, TokenFile, TokenGroup, TokenSourceType};
use crate::core::merge::merge_catalogs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
}

impl ImageFormat {
    pub fn mime(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
        }
    }
}

/// Basic metadata derived from an image header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

/// Parse a batch of raster files into one catalog (image group only).
pub fn parse_files(files: &[&TokenFile]) -> Catalog {
    let parts: Vec<Catalog> = files.par_iter().map(|file| parse_file(file)).collect();
    merge_catalogs(parts)
}

pub fn parse_file(file: &TokenFile) -> Catalog {
    let bytes = file.as_bytes();
    let Some(info) = sniff(bytes) else {
        return Catalog::default();
    };

    let name = file_stem(&file.filename);
    let value = format!("data:{};base64,{}", info.format.mime(), STANDARD.encode(bytes));
    let mut group = TokenGroup::new(TokenSourceType::Image);
    group.tokens.push(Token::new(name, value.clone(), value));
    Catalog::from_group(group)
}

fn file_stem(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string())
}

/// Identify the image format and read its dimensions from the header.
/// Returns `None` for unrecognized or truncated payloads.
pub fn sniff(bytes: &[u8]) -> Option<ImageInfo> {
    sniff_png(bytes)
        .or_else(|| sniff_gif(bytes))
        .or_else(|| sniff_jpeg(bytes))
        .filter(|info| info.width > 0 && info.height > 0)
}

fn sniff_png(bytes: &[u8]) -> Option<ImageInfo> {
    const SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    if bytes.len() < 24 || &bytes[..8] != SIGNATURE || &bytes[12..16] != b"IHDR" {
        return None;
    }
    Some(ImageInfo {
        format: ImageFormat::Png,
        width: u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]),
        height: u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]),
    })
}

fn sniff_gif(bytes: &[u8]) -> Option<ImageInfo> {
    if bytes.len() < 10 || (&bytes[..6] != b"GIF87a" && &bytes[..6] != b"GIF89a") {
        return None;
    }
    Some(ImageInfo {
        format: ImageFormat::Gif,
        width: u16::from_le_bytes([bytes[6], bytes[7]]) as u32,
        height: u16::from_le_bytes([bytes[8], bytes[9]]) as u32,
    })
}

fn sniff_jpeg(bytes: &[u8]) -> Option<ImageInfo> {
    if bytes.len() < 4 || bytes[0] != 0xFF || bytes[1] != 0xD8 {
        return None;
    }

    // Walk segments until a start-of-frame marker carries the dimensions.
    let mut i = 2usize;
    while i + 4 <= bytes.len() {
        if bytes[i] != 0xFF {
            return None;
        }
        let marker = bytes[i + 1];
        match marker {
            // Padding and restart markers have no payload.
            0xFF | 0x01 | 0xD0..=0xD7 => {
                i += 2;
                continue;
            }
            // End of image or start of scan without a frame header.
            0xD9 | 0xDA => return None,
            0xC0..=0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF => {
                if i + 9 > bytes.len() {
                    return None;
                }
                return Some(ImageInfo {
                    format: ImageFormat::Jpeg,
                    width: u16::from_be_bytes([bytes[i + 7], bytes[i + 8]]) as u32,
                    height: u16::from_be_bytes([bytes[i + 5], bytes[i + 6]]) as u32,
                });
            }
            _ => {
                let length = u16::from_be_bytes([bytes[i + 2], bytes[i + 3]]) as usize;
                if length < 2 {
                    return None;
                }
                i += 2 + length;
            }
        }
    }
    None
}
