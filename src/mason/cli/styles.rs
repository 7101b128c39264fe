use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod names {
    pub const HEADER: &str = "header";
    pub const RULE: &str = "rule";
    pub const MATCH: &str = "match";
    pub const DATE: &str = "date";
    pub const KEY: &str = "key";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
}

pub static MASON_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        (names::HEADER, Style::new().bold()),
        (names::RULE, Style::new().color256(246)),
        (names::MATCH, Style::new().black().on_yellow()),
        (names::DATE, Style::new().cyan()),
        (names::KEY, Style::new().bold()),
        (names::INFO, Style::new().dim()),
        (names::SUCCESS, Style::new().green()),
        (names::WARNING, Style::new().yellow()),
    ])
});

/// Looks up a theme style. `use_color` forces styling on or off; `None`
/// follows terminal detection.
pub fn style(name: &str, use_color: Option<bool>) -> Style {
    let base = MASON_THEME.get(name).cloned().unwrap_or_else(Style::new);
    match use_color {
        Some(enabled) => base.force_styling(enabled),
        None => base,
    }
}
