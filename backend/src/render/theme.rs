//! Light/dark theme variables and the page stylesheet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color scheme of a rendered page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// CSS custom properties of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary_color: &'static str,
    pub accent_color: &'static str,
    pub text_color: &'static str,
    pub secondary_background_color: &'static str,
    pub card_background: &'static str,
    pub chip_background: &'static str,
    pub shadow: &'static str,
}

const LIGHT: Palette = Palette {
    primary_color: "#1a365d",
    accent_color: "#38bdf8",
    text_color: "#000000",
    secondary_background_color: "#f9fafb",
    card_background: "#ffffff",
    chip_background: "#e2e8f0",
    shadow: "0 4px 6px -1px rgba(0, 0, 0, 0.1)",
};

const DARK: Palette = Palette {
    primary_color: "#90cdf4",
    accent_color: "#0bc5ea",
    text_color: "#e6edf3",
    secondary_background_color: "#0d1117",
    card_background: "#161b22",
    chip_background: "#30363d",
    shadow: "0 4px 6px -1px rgba(255, 255, 255, 0.1)",
};

impl Theme {
    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme, used by the page's theme switch link.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}', expected 'light' or 'dark'", other)),
        }
    }
}

/// `:root` block with the theme variables.
pub fn css_variables(theme: Theme) -> String {
    let p = theme.palette();
    format!(
        r#":root {{
    --primary-color: {};
    --accent-color: {};
    --text-color: {};
    --secondary-background-color: {};
    --card-background: {};
    --chip-background: {};
    --shadow: {};
}}"#,
        p.primary_color,
        p.accent_color,
        p.text_color,
        p.secondary_background_color,
        p.card_background,
        p.chip_background,
        p.shadow,
    )
}

/// Complete stylesheet: theme variables followed by the layout rules.
pub fn stylesheet(theme: Theme) -> String {
    format!("{}\n{}", css_variables(theme), BASE_CSS)
}

/// Icon font used by the social buttons and contact block.
pub const ICON_STYLESHEET_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";

const BASE_CSS: &str = r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    background-color: var(--secondary-background-color);
    color: var(--text-color);
}
.layout { display: flex; min-height: 100vh; }
.sidebar {
    width: 300px;
    flex-shrink: 0;
    padding: 2rem 1.5rem;
    background-color: var(--card-background);
    box-shadow: var(--shadow);
    text-align: center;
}
.avatar {
    border-radius: 50%;
    width: 150px;
    height: 150px;
    object-fit: cover;
    margin-bottom: 1rem;
}
.sidebar .role { color: var(--accent-color); }
.contact { text-align: left; margin: 1.5rem 0; }
.contact summary { cursor: pointer; font-weight: 600; }
.social { margin-top: 3rem; }
.social a { margin: 0 10px; }
.content { flex: 1; padding: 2rem 3rem; max-width: 1200px; }
.theme-switch { float: right; font-size: 0.9rem; }
h1, h2, h3, h4 { color: var(--primary-color); }
a { color: var(--accent-color); }
hr { border: none; border-top: 1px solid var(--chip-background); margin: 2rem 0; }
.grid-row {
    display: grid;
    grid-template-columns: repeat(3, minmax(0, 1fr));
    gap: 1.5rem;
}
.project-card {
    background-color: var(--card-background);
    border-radius: 10px;
    padding: 2rem;
    margin: 1.25rem 0;
    transition: all 0.3s ease;
    border: 2px solid var(--accent-color);
}
.certificate-card {
    background-color: var(--card-background);
    border-left: 3px solid var(--accent-color);
    border-radius: 10px;
    padding: 1.5rem;
    margin: 1.25rem 0;
    transition: all 0.3s ease;
}
.project-card:hover, .certificate-card:hover {
    transform: translateY(-5px);
    box-shadow: var(--shadow);
}
.card-image { width: 100%; border-radius: 10px; }
.chips { padding: 0; }
.chip {
    display: inline-block;
    background-color: var(--chip-background);
    border-radius: 25px;
    font-size: 0.9rem;
    list-style: none;
    margin: 5px;
    padding: 6px 12px;
}
.empty-state {
    padding: 1rem 1.5rem;
    border-radius: 10px;
    background-color: var(--chip-background);
}
footer { text-align: center; margin: 2rem 0 10px; }
@media (max-width: 900px) {
    .layout { flex-direction: column; }
    .sidebar { width: 100%; }
    .content { padding: 1.5rem; }
    .grid-row { grid-template-columns: 1fr; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(" Dark ".parse::<Theme>(), Ok(Theme::Dark));
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_css_variables_per_theme() {
        let light = css_variables(Theme::Light);
        assert!(light.contains("--primary-color: #1a365d;"));
        assert!(light.contains("--chip-background: #e2e8f0;"));

        let dark = css_variables(Theme::Dark);
        assert!(dark.contains("--primary-color: #90cdf4;"));
        assert!(dark.contains("--secondary-background-color: #0d1117;"));
        assert!(dark.contains("rgba(255, 255, 255, 0.1)"));
    }

    #[test]
    fn test_stylesheet_contains_layout() {
        let css = stylesheet(Theme::Dark);
        assert!(css.starts_with(":root {"));
        assert!(css.contains(".chip {"));
        assert!(css.contains("grid-template-columns: repeat(3"));
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
