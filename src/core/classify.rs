//! Value classification.
//!
//! Given a raw declaration value, determines its semantic kind and a
//! normalized representation. Classification is ordered first-match over the
//! value's lexical shape: color, gradient, shadow, font family, then sized
//! values. The declared name only disambiguates between font-size and
//! spacing once the lexical form already matched. Classification never
//! fails; unrecognized values pass through as `Other`.

use std::sync::OnceLock;

use regex::Regex;

use crate::core::data::ValueKind;

/// CSS named colors recognized as color literals, with their hex values.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("aqua", "#00ffff"),
    ("azure", "#f0ffff"),
    ("beige", "#f5f5dc"),
    ("black", "#000000"),
    ("blue", "#0000ff"),
    ("brown", "#a52a2a"),
    ("chocolate", "#d2691e"),
    ("coral", "#ff7f50"),
    ("crimson", "#dc143c"),
    ("cyan", "#00ffff"),
    ("darkgray", "#a9a9a9"),
    ("darkgrey", "#a9a9a9"),
    ("dimgray", "#696969"),
    ("dimgrey", "#696969"),
    ("forestgreen", "#228b22"),
    ("fuchsia", "#ff00ff"),
    ("ghostwhite", "#f8f8ff"),
    ("gold", "#ffd700"),
    ("gray", "#808080"),
    ("green", "#008000"),
    ("grey", "#808080"),
    ("hotpink", "#ff69b4"),
    ("indigo", "#4b0082"),
    ("ivory", "#fffff0"),
    ("khaki", "#f0e68c"),
    ("lavender", "#e6e6fa"),
    ("lightgray", "#d3d3d3"),
    ("lightgrey", "#d3d3d3"),
    ("lime", "#00ff00"),
    ("magenta", "#ff00ff"),
    ("maroon", "#800000"),
    ("navy", "#000080"),
    ("olive", "#808000"),
    ("orange", "#ffa500"),
    ("orchid", "#da70d6"),
    ("pink", "#ffc0cb"),
    ("plum", "#dda0dd"),
    ("purple", "#800080"),
    ("rebeccapurple", "#663399"),
    ("red", "#ff0000"),
    ("royalblue", "#4169e1"),
    ("salmon", "#fa8072"),
    ("seagreen", "#2e8b57"),
    ("silver", "#c0c0c0"),
    ("skyblue", "#87ceeb"),
    ("slategray", "#708090"),
    ("snow", "#fffafa"),
    ("steelblue", "#4682b4"),
    ("tan", "#d2b48c"),
    ("teal", "#008080"),
    ("tomato", "#ff6347"),
    ("turquoise", "#40e0d0"),
    ("violet", "#ee82ee"),
    ("wheat", "#f5deb3"),
    ("white", "#ffffff"),
    ("whitesmoke", "#f5f5f5"),
    ("yellow", "#ffff00"),
];

const GENERIC_FAMILIES: &[&str] = &[
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
];

fn hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#(?:[0-9a-fA-F]{8}|[0-9a-fA-F]{6}|[0-9a-fA-F]{3,4})$").unwrap()
    })
}

fn color_fn_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^(rgba?|hsla?)\(\s*([^)]*?)\s*\)$").unwrap())
}

fn gradient_fn_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:repeating-)?(?:linear|radial|conic)-gradient\(").unwrap()
    })
}

/// Matches any color-shaped fragment, used for counting gradient stops.
fn color_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let names = NAMED_COLORS
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(
            r"(?i)#[0-9a-f]{{3,8}}\b|\b(?:rgba?|hsla?)\(|\b(?:transparent|currentcolor|{names})\b"
        ))
        .unwrap()
    })
}

fn shadow_segment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let len = r"[-+]?(?:\d+\.?\d*|\.\d+)(?:px|rem|em|pt|%)?";
        let color = r"(?:#[0-9a-fA-F]{3,8}|(?:rgba?|hsla?)\([^)]*\)|[a-zA-Z][a-zA-Z-]*)";
        Regex::new(&format!(
            r"(?i)^(?:inset\s+)?(?:{len}\s+){{1,3}}{len}\s+{color}$"
        ))
        .unwrap()
    })
}

fn length_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[-+]?(?:\d+\.?\d*|\.\d+)(?:px|rem|em|pt|%)$").unwrap()
    })
}

fn family_part_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^(?:"[^"]*"|'[^']*'|[A-Za-z][A-Za-z0-9 _-]*)$"#).unwrap()
    })
}

/// Classify a raw token value, returning its kind and normalized form.
///
/// `declared_name` is the declaration's property or variable name, used only
/// as a secondary hint for ambiguous sized values and font-family lists.
pub fn classify(raw_value: &str, declared_name: Option<&str>) -> (ValueKind, String) {
    let value = raw_value.trim();

    if let Some(normalized) = normalize_color(value) {
        return (ValueKind::Color, normalized);
    }
    if is_gradient(value) {
        return (ValueKind::Gradient, value.to_string());
    }
    if is_shadow(value) {
        return (ValueKind::Shadow, value.to_string());
    }
    if is_font_family(value, declared_name) {
        return (ValueKind::FontFamily, value.to_string());
    }
    if is_length_list(value) {
        let kind = match declared_name {
            Some(name) if has_font_size_hint(name) => ValueKind::FontSize,
            _ => ValueKind::Spacing,
        };
        return (kind, value.to_string());
    }

    (ValueKind::Other, value.to_string())
}

/// Kind of a design-relevant literal (color, gradient or shadow shapes only),
/// used for hard-coded value detection. Values referencing variables are not
/// literals and return `None`.
pub fn literal_kind(value: &str) -> Option<ValueKind> {
    let value = value.trim();
    if value.contains("var(") || value.contains('$') || value.contains('@') {
        return None;
    }

    if normalize_color(value).is_some() {
        return Some(ValueKind::Color);
    }
    if is_gradient(value) {
        return Some(ValueKind::Gradient);
    }
    if is_shadow(value) {
        return Some(ValueKind::Shadow);
    }
    None
}

/// Normalize a color value to lowercase hex when fully opaque, or preserve
/// the source notation when it carries alpha. Returns `None` when the value
/// is not a color.
fn normalize_color(value: &str) -> Option<String> {
    if hex_re().is_match(value) {
        return Some(normalize_hex(value));
    }

    if let Some(caps) = color_fn_re().captures(value) {
        let name = caps[1].to_ascii_lowercase();
        let args = &caps[2];
        return Some(normalize_color_fn(value, &name, args));
    }

    let lowered = value.to_ascii_lowercase();
    if lowered == "transparent" {
        // Alpha zero, keep the keyword.
        return Some(lowered);
    }
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, hex)| (*hex).to_string())
}

fn normalize_hex(value: &str) -> String {
    let lowered = value.to_ascii_lowercase();
    match lowered.len() {
        // #rgba with opaque alpha collapses to #rgb
        5 if lowered.ends_with('f') => lowered[..4].to_string(),
        // #rrggbbaa with opaque alpha collapses to #rrggbb
        9 if lowered.ends_with("ff") => lowered[..7].to_string(),
        _ => lowered,
    }
}

fn normalize_color_fn(original: &str, name: &str, args: &str) -> String {
    let (components, alpha) = match split_color_args(args) {
        Some(parts) => parts,
        // Shape matched but components are not plain numbers; keep notation.
        None => return original.trim().to_string(),
    };

    if let Some(alpha) = alpha {
        if alpha < 1.0 {
            return original.trim().to_string();
        }
    }

    let rgb = if name.starts_with("rgb") {
        parse_rgb_components(&components)
    } else {
        parse_hsl_components(&components)
    };

    match rgb {
        Some((r, g, b)) => format!("#{r:02x}{g:02x}{b:02x}"),
        None => original.trim().to_string(),
    }
}

/// Split functional color arguments into three components plus optional
/// alpha, accepting both comma and space/slash syntax.
fn split_color_args(args: &str) -> Option<(Vec<String>, Option<f64>)> {
    let (body, slash_alpha) = match args.split_once('/') {
        Some((body, alpha)) => (body, Some(alpha.trim())),
        None => (args, None),
    };

    let mut parts: Vec<String> = if body.contains(',') {
        body.split(',').map(|p| p.trim().to_string()).collect()
    } else {
        body.split_whitespace().map(str::to_string).collect()
    };

    let alpha_part = match slash_alpha {
        Some(alpha) => Some(alpha.to_string()),
        None if parts.len() == 4 => parts.pop(),
        None => None,
    };

    if parts.len() != 3 {
        return None;
    }

    let alpha = match alpha_part {
        Some(a) => Some(parse_number(&a)?),
        None => None,
    };
    Some((parts, alpha))
}

/// Parse a plain or percentage number; percentages map to the 0..=1 range.
fn parse_number(text: &str) -> Option<f64> {
    if let Some(percent) = text.strip_suffix('%') {
        return percent.trim().parse::<f64>().ok().map(|n| n / 100.0);
    }
    text.parse::<f64>().ok()
}

fn parse_rgb_components(parts: &[String]) -> Option<(u8, u8, u8)> {
    let mut channels = [0u8; 3];
    for (i, part) in parts.iter().enumerate() {
        let n = if let Some(percent) = part.strip_suffix('%') {
            percent.trim().parse::<f64>().ok()? / 100.0 * 255.0
        } else {
            part.parse::<f64>().ok()?
        };
        channels[i] = n.round().clamp(0.0, 255.0) as u8;
    }
    Some((channels[0], channels[1], channels[2]))
}

fn parse_hsl_components(parts: &[String]) -> Option<(u8, u8, u8)> {
    let h = parts[0].trim_end_matches("deg").parse::<f64>().ok()?;
    let s = parts[1].strip_suffix('%')?.trim().parse::<f64>().ok()?;
    let l = parts[2].strip_suffix('%')?.trim().parse::<f64>().ok()?;
    Some(hsl_to_rgb(h, s, l))
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = (((h % 360.0) + 360.0) % 360.0) / 360.0;
    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);

    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let to_channel = |t: f64| -> u8 {
        let t = ((t % 1.0) + 1.0) % 1.0;
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    };

    (
        to_channel(h + 1.0 / 3.0),
        to_channel(h),
        to_channel(h - 1.0 / 3.0),
    )
}

/// A gradient is a gradient-style function wrapping at least two color stops.
fn is_gradient(value: &str) -> bool {
    gradient_fn_re().is_match(value) && color_token_re().find_iter(value).count() >= 2
}

/// A shadow is an offset pair, optional blur/spread, and a trailing color;
/// comma-joined lists classify as one unit when every segment matches.
fn is_shadow(value: &str) -> bool {
    let segments = split_top_level_commas(value);
    if segments.is_empty() {
        return false;
    }
    segments.iter().all(|segment| {
        let segment = segment.trim();
        shadow_segment_re().is_match(segment) && ends_with_color(segment)
    })
}

fn ends_with_color(segment: &str) -> bool {
    let last = match segment.rsplit_once(char::is_whitespace) {
        Some((_, last)) => last,
        None => return false,
    };
    if normalize_color(last).is_some() {
        return true;
    }
    // Functional colors contain whitespace of their own; fall back to the
    // last top-level parenthesized call.
    let trimmed = segment.trim_end();
    trimmed.ends_with(')')
        && color_token_re()
            .find_iter(trimmed)
            .last()
            .is_some_and(|m| trimmed[m.start()..].starts_with(|c: char| c == 'r' || c == 'h'))
}

fn is_font_family(value: &str, declared_name: Option<&str>) -> bool {
    if length_found(value) {
        return false;
    }
    let parts = split_top_level_commas(value);
    if parts.is_empty() {
        return false;
    }
    if !parts
        .iter()
        .all(|part| family_part_re().is_match(part.trim()))
    {
        return false;
    }

    let last = parts.last().map(|p| p.trim().to_ascii_lowercase());
    if last.is_some_and(|last| GENERIC_FAMILIES.contains(&last.as_str())) {
        return true;
    }

    declared_name.is_some_and(|name| {
        let name = name.to_ascii_lowercase();
        name.contains("font") || name.contains("family")
    })
}

fn length_found(value: &str) -> bool {
    value
        .split_whitespace()
        .flat_map(|part| part.split(','))
        .any(|part| length_re().is_match(part))
}

/// One or more length values (unitless zero included).
fn is_length_list(value: &str) -> bool {
    let mut parts = value.split_whitespace().peekable();
    if parts.peek().is_none() {
        return false;
    }
    parts.all(|part| length_re().is_match(part) || part == "0")
}

fn has_font_size_hint(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    name.contains("size") || name.contains("font")
}

fn split_top_level_commas(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in value.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&value[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&value[start..]);
    parts
}
