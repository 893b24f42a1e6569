use crate::core::data::TokenSourceType;

/// Per-dialect syntax descriptor.
///
/// The three stylesheet dialects share one parser and walk; they differ only
/// in the variable sigil and whether their keyframes join the shared
/// animation namespace.
#[derive(Debug, Clone, Copy)]
pub struct Dialect {
    pub source_type: TokenSourceType,
    /// Variable prefix (`$` for SCSS, `@` for LESS). Custom properties
    /// (`--name`) are recognized in every dialect.
    pub variable_sigil: Option<char>,
    /// CSS and SCSS share a keyframes namespace; LESS does not contribute.
    pub collects_keyframes: bool,
}

pub const CSS: Dialect = Dialect {
    source_type: TokenSourceType::Css,
    variable_sigil: None,
    collects_keyframes: true,
};

pub const SCSS: Dialect = Dialect {
    source_type: TokenSourceType::Scss,
    variable_sigil: Some('$'),
    collects_keyframes: true,
};

pub const LESS: Dialect = Dialect {
    source_type: TokenSourceType::Less,
    variable_sigil: Some('@'),
    collects_keyframes: false,
};

impl Dialect {
    /// Strip the dialect's sigil from a declaration name to form the token
    /// name (`--color-primary` → `color-primary`, `$brand` → `brand`).
    pub fn token_name(&self, raw: &str) -> String {
        if let Some(stripped) = raw.strip_prefix("--") {
            return stripped.to_string();
        }
        if let Some(sigil) = self.variable_sigil {
            if let Some(stripped) = raw.strip_prefix(sigil) {
                return stripped.to_string();
            }
        }
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_custom_property_sigil_stripped_everywhere() {
        assert_eq!(CSS.token_name("--color-primary"), "color-primary");
        assert_eq!(SCSS.token_name("--color-primary"), "color-primary");
    }

    #[test]
    fn test_scss_variable_sigil() {
        assert_eq!(SCSS.token_name("$brand"), "brand");
        assert_eq!(CSS.token_name("$brand"), "$brand");
    }

    #[test]
    fn test_less_variable_sigil() {
        assert_eq!(LESS.token_name("@brand"), "brand");
    }

    #[test]
    fn test_plain_property_name_unchanged() {
        assert_eq!(CSS.token_name("color"), "color");
    }
}
