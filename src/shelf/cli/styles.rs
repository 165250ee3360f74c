use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prepended to text whose style name is not registered, to catch typos in
/// templates.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const HEADER: &str = "header";
    pub const RULE: &str = "rule";
    pub const ISBN: &str = "isbn";
    pub const DELETE: &str = "delete";
    pub const EMPTY: &str = "empty";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

/// Named `console` styles applied by the `style` template filter.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Applies a named style, forcing ANSI codes on.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.clone().force_styling(true).apply_to(text).to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    /// Checks the style name but returns the text without ANSI codes.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.has(name) {
            text.to_string()
        } else {
            format!("{} {}", MISSING_STYLE_INDICATOR, text)
        }
    }
}

pub static SHELF_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::HEADER, Style::new().bold())
        .add(names::RULE, Style::new().dim())
        .add(names::ISBN, Style::new().cyan())
        .add(names::DELETE, Style::new().red())
        .add(names::EMPTY, Style::new().italic().dim())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_returns_text() {
        assert_eq!(SHELF_THEME.apply_plain(names::SUCCESS, "ok"), "ok");
    }

    #[test]
    fn colored_mode_wraps_in_ansi() {
        let styled = SHELF_THEME.apply(names::ERROR, "bad");
        assert!(styled.contains("bad"));
        assert!(styled.contains("\u{1b}["));
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(SHELF_THEME.apply_plain("nope", "x"), "(!?) x");
        assert!(SHELF_THEME.apply("nope", "x").starts_with(MISSING_STYLE_INDICATOR));
    }
}
