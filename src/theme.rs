use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<String>,
    pub set_theme: WriteSignal<String>,
}

/// Apply the theme by setting or removing the `data-theme` attribute on `<html>`.
/// - "light" → forces light
/// - "dark" → forces dark
/// - anything else ("system") → removes attribute, CSS @media handles it
pub fn apply_theme(theme: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(html) = doc.document_element() {
                match theme {
                    "light" => {
                        let _ = html.set_attribute("data-theme", "light");
                    }
                    "dark" => {
                        let _ = html.set_attribute("data-theme", "dark");
                    }
                    _ => {
                        let _ = html.remove_attribute("data-theme");
                    }
                }
            }
        }
    }
}

/// The next mode in the light → dark → system cycle the nav toggle walks.
pub fn next_theme(theme: &str) -> &'static str {
    match theme {
        "light" => "dark",
        "dark" => "system",
        _ => "light",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cycle_covers_all_modes() {
        assert_eq!(next_theme("light"), "dark");
        assert_eq!(next_theme("dark"), "system");
        assert_eq!(next_theme("system"), "light");
        // Unknown values fall back into the cycle
        assert_eq!(next_theme("solarized"), "light");
    }
}
