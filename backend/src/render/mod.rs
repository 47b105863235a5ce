//! Server-side page renderer.
//!
//! A pure function from a [`Portfolio`] and [`RenderOptions`] to a complete
//! HTML document:
//!
//! ```text
//! ┌────────────┬──────────────────────────────────────┐
//! │  Sidebar   │  Hero (name, role)                   │
//! │  avatar    │  About                               │
//! │  name      │  Skills        [card][card][card]    │
//! │  role      │  Research      [card][card][card]    │
//! │  contact   │  Extension     ...                   │
//! │  social    │  Certificates  ...                   │
//! │            │  Recognitions  ...                   │
//! │            │  Footer                              │
//! └────────────┴──────────────────────────────────────┘
//! ```

pub mod html;
pub mod sections;
pub mod theme;

use chrono::Datelike;

use crate::models::Portfolio;

pub use html::{html_escape, truncate_chars, DESCRIPTION_PREVIEW_CHARS};
pub use sections::{GalleryLayout, GALLERIES, GRID_COLUMNS};
pub use theme::{css_variables, stylesheet, Palette, Theme, ICON_STYLESHEET_URL};

/// Default browser tab title.
pub const DEFAULT_PAGE_TITLE: &str = "Portfolio";

/// Options for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Browser tab title
    pub page_title: String,
    /// Year shown in the footer
    pub year: i32,
    /// Show a link that reloads the page with the other theme
    pub theme_switch: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            year: chrono::Local::now().year(),
            theme_switch: false,
        }
    }
}

impl RenderOptions {
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = title.into();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_theme_switch(mut self, enabled: bool) -> Self {
        self.theme_switch = enabled;
        self
    }
}

/// Render the whole page.
pub fn render_page(portfolio: &Portfolio, options: &RenderOptions) -> String {
    let galleries: Vec<String> = GALLERIES
        .iter()
        .map(|layout| sections::gallery(portfolio, layout))
        .collect();

    let theme_switch = if options.theme_switch {
        let other = options.theme.toggled();
        format!(
            "<a class=\"theme-switch\" href=\"?theme={}\">Switch to {} mode</a>",
            other, other
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<link rel="stylesheet" href="{icons}">
<style>
{css}
</style>
</head>
<body>
<div class="layout">
{sidebar}
<main class="content">
{theme_switch}
{hero}
{about}
<hr>
{skills}
<hr>
{galleries}
<hr>
{footer}
</main>
</div>
</body>
</html>
"#,
        theme = options.theme,
        title = html_escape(&options.page_title),
        icons = ICON_STYLESHEET_URL,
        css = stylesheet(options.theme),
        sidebar = sections::sidebar(portfolio),
        theme_switch = theme_switch,
        hero = sections::hero(portfolio),
        about = sections::about(portfolio),
        skills = sections::skills(portfolio),
        galleries = galleries.join("\n<hr>\n"),
        footer = sections::footer(portfolio, options.year),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GalleryItem, ProfileField};

    fn portfolio() -> Portfolio {
        let mut p = Portfolio::default();
        p.profile.insert(
            "name".into(),
            ProfileField { title: "Ada".into(), description: None, image: None },
        );
        p.profile.insert(
            "role".into(),
            ProfileField { title: "Analyst".into(), description: None, image: None },
        );
        p.about = "Hello.".into();
        p.projects.push(GalleryItem {
            title: "Engine".into(),
            description: None,
            image: None,
            link: None,
        });
        p
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let html = render_page(&portfolio(), &RenderOptions::default().with_year(2026));

        let order = ["id=\"about\"", "id=\"skills\"", "id=\"research\"", "id=\"extension\"", "id=\"certificates\"", "id=\"recognitions\"", "<footer>"];
        let positions: Vec<usize> = order.iter().map(|m| html.find(m).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("&copy; 2026 Ada."));
    }

    #[test]
    fn test_theme_selects_stylesheet() {
        let light = render_page(&portfolio(), &RenderOptions::default());
        let dark = render_page(&portfolio(), &RenderOptions::default().with_theme(Theme::Dark));

        assert!(light.contains("--primary-color: #1a365d;"));
        assert!(dark.contains("--primary-color: #90cdf4;"));
        assert!(dark.contains("data-theme=\"dark\""));
    }

    #[test]
    fn test_theme_switch_link() {
        let html = render_page(
            &portfolio(),
            &RenderOptions::default().with_theme(Theme::Dark).with_theme_switch(true),
        );
        assert!(html.contains("href=\"?theme=light\""));
    }

    #[test]
    fn test_render_is_pure() {
        let options = RenderOptions::default().with_page_title("Ada's page").with_year(2030);
        assert_eq!(render_page(&portfolio(), &options), render_page(&portfolio(), &options));
        assert!(render_page(&portfolio(), &options).contains("<title>Ada&#39;s page</title>"));
    }
}
