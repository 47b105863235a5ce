//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Portfolio Types** - Shaped portfolio as served by `GET /api/portfolio`
//! - **Theme** - Light/dark selection
//! - **Error Types** - Frontend error handling

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Portfolio Types
// =============================================================================

/// One entry of the profile mapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileField {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A social network button.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon class list, e.g. `fab fa-github`
    pub icon: String,
    pub url: String,
}

/// A titled group of skills.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<String>,
}

/// A gallery card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Shaped portfolio.
///
/// Map fields keep the order of the dataset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub profile: IndexMap<String, ProfileField>,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub social_links: IndexMap<String, SocialLink>,
    #[serde(default)]
    pub skills: IndexMap<String, SkillGroup>,
    #[serde(default)]
    pub projects: Vec<GalleryItem>,
    #[serde(default)]
    pub certificates: Vec<GalleryItem>,
    #[serde(default)]
    pub extensions: Vec<GalleryItem>,
    #[serde(default)]
    pub recognitions: Vec<GalleryItem>,
}

impl Portfolio {
    pub fn name(&self) -> String {
        self.profile_title("name")
    }

    pub fn role(&self) -> String {
        self.profile_title("role")
    }

    pub fn avatar(&self) -> Option<String> {
        self.profile.get("name").and_then(|f| f.image.clone())
    }

    fn profile_title(&self, key: &str) -> String {
        self.profile.get(key).map(|f| f.title.clone()).unwrap_or_default()
    }

    /// Contact entries (location, phone, email) present in the profile.
    pub fn contacts(&self) -> Vec<(&'static str, String)> {
        ["location", "phone", "email"]
            .into_iter()
            .filter_map(|key| {
                self.profile
                    .get(key)
                    .filter(|f| !f.title.is_empty())
                    .map(|f| (key, f.title.clone()))
            })
            .collect()
    }
}

/// Which gallery a card grid shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryKind {
    Research,
    Extension,
    Certificates,
    Recognitions,
}

impl GalleryKind {
    pub const ALL: [GalleryKind; 4] = [
        GalleryKind::Research,
        GalleryKind::Extension,
        GalleryKind::Certificates,
        GalleryKind::Recognitions,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            GalleryKind::Research => "🔬 Research",
            GalleryKind::Extension => "📚 Extension",
            GalleryKind::Certificates => "📜 Certificates",
            GalleryKind::Recognitions => "🏆 Recognitions and Awards",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            GalleryKind::Research => "No research projects yet.",
            GalleryKind::Extension => "No extension projects yet.",
            GalleryKind::Certificates => "No certificates registered.",
            GalleryKind::Recognitions => "No recognitions registered.",
        }
    }

    pub fn link_label(&self) -> &'static str {
        match self {
            GalleryKind::Research | GalleryKind::Extension => "View project",
            GalleryKind::Certificates => "View certificate",
            GalleryKind::Recognitions => "More info",
        }
    }

    pub fn card_class(&self) -> &'static str {
        match self {
            GalleryKind::Certificates => "certificate-card",
            _ => "project-card",
        }
    }

    /// Research and extension cards show a preview of the description.
    pub fn truncates(&self) -> bool {
        matches!(self, GalleryKind::Research | GalleryKind::Extension)
    }

    pub fn items<'a>(&self, portfolio: &'a Portfolio) -> &'a [GalleryItem] {
        match self {
            GalleryKind::Research => &portfolio.projects,
            GalleryKind::Extension => &portfolio.extensions,
            GalleryKind::Certificates => &portfolio.certificates,
            GalleryKind::Recognitions => &portfolio.recognitions,
        }
    }
}

/// Cut text to `max_chars` characters, appending `...` when something was removed.
pub fn preview_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((idx, _)) => format!("{}...", text[..idx].trim_end()),
    }
}

/// Link target for a dataset URL. Empty URLs and schemes that run script are rejected.
pub fn safe_url(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_lowercase();
    if ["javascript:", "data:", "vbscript:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
    {
        return None;
    }
    Some(trimmed.to_string())
}

// =============================================================================
// Theme
// =============================================================================

/// Color theme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Network/HTTP error.
    Network(String),
    /// Backend answered with an error status.
    Server { status: u16, message: String },
    /// Invalid data format.
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Server { status, message } => write!(f, "Server error ({}): {}", status, message),
            AppError::Decode(msg) => write!(f, "Invalid portfolio data: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_deserialization_keeps_order() {
        let json = r#"{
            "profile": {
                "name": { "title": "Ada", "image": "ada.png" },
                "role": { "title": "Analyst" },
                "email": { "title": "ada@example.com" }
            },
            "about": "Hello",
            "socialLinks": { "github": { "icon": "fab fa-github", "url": "https://github.com/ada" } },
            "skills": {
                "zeta": { "title": "Zeta", "skills": ["Z"] },
                "alpha": { "title": "Alpha", "skills": ["A", "B"] }
            },
            "projects": [{ "title": "Engine", "description": "Notes" }],
            "certificates": [],
            "extensions": [],
            "recognitions": []
        }"#;

        let portfolio: Portfolio = serde_json::from_str(json).unwrap();
        assert_eq!(portfolio.name(), "Ada");
        assert_eq!(portfolio.role(), "Analyst");
        assert_eq!(portfolio.avatar().as_deref(), Some("ada.png"));
        assert_eq!(portfolio.contacts(), vec![("email", "ada@example.com".to_string())]);

        let skill_keys: Vec<&str> = portfolio.skills.keys().map(String::as_str).collect();
        assert_eq!(skill_keys, vec!["zeta", "alpha"]);
        assert_eq!(portfolio.projects[0].image, None);
    }

    #[test]
    fn test_preview_text() {
        assert_eq!(preview_text("short", 100), "short");
        assert_eq!(preview_text(&"x".repeat(120), 100), format!("{}...", "x".repeat(100)));
    }

    #[test]
    fn test_safe_url() {
        assert_eq!(safe_url(" https://github.com/ada ").as_deref(), Some("https://github.com/ada"));
        assert_eq!(safe_url("assets/ada.png").as_deref(), Some("assets/ada.png"));
        assert_eq!(safe_url("javascript:alert(1)"), None);
        assert_eq!(safe_url("  JavaScript:alert(1)"), None);
        assert_eq!(safe_url("data:text/html;base64,PHNjcmlwdD4="), None);
        assert_eq!(safe_url("vbscript:msgbox"), None);
        assert_eq!(safe_url("   "), None);
    }

    #[test]
    fn test_gallery_kind() {
        let mut portfolio = Portfolio::default();
        portfolio.certificates.push(GalleryItem {
            title: "Rust".into(),
            description: None,
            image: None,
            link: None,
        });
        assert_eq!(GalleryKind::Certificates.items(&portfolio).len(), 1);
        assert!(GalleryKind::Research.truncates());
        assert!(!GalleryKind::Recognitions.truncates());
        assert_eq!(GalleryKind::Certificates.card_class(), "certificate-card");
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default().toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.as_str(), "dark");
    }
}
