//! Domain models for the portfolio.
//!
//! - [`Section`] - Discriminator grouping dataset rows
//! - [`Row`] - One validated dataset row
//! - [`ProfileField`], [`SocialLink`], [`SkillGroup`], [`GalleryItem`] - Shaped entities
//! - [`Portfolio`] - Immutable context holding every shaped entity

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator used inside the `skills` cell.
pub const SKILL_SEPARATOR: char = '|';

// =============================================================================
// Section
// =============================================================================

/// Semantic category of a dataset row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Profile,
    About,
    Social,
    Skill,
    Project,
    Certificate,
    Extension,
    Recognition,
}

impl Section {
    /// All sections, in page order.
    pub const ALL: [Section; 8] = [
        Section::Profile,
        Section::About,
        Section::Social,
        Section::Skill,
        Section::Project,
        Section::Extension,
        Section::Certificate,
        Section::Recognition,
    ];

    /// Parse a section name (case-insensitive, surrounding whitespace ignored).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "profile" => Some(Self::Profile),
            "about" => Some(Self::About),
            "social" => Some(Self::Social),
            "skill" => Some(Self::Skill),
            "project" => Some(Self::Project),
            "certificate" => Some(Self::Certificate),
            "extension" => Some(Self::Extension),
            "recognition" => Some(Self::Recognition),
            _ => None,
        }
    }

    /// Dataset name of this section.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::About => "about",
            Self::Social => "social",
            Self::Skill => "skill",
            Self::Project => "project",
            Self::Certificate => "certificate",
            Self::Extension => "extension",
            Self::Recognition => "recognition",
        }
    }

    /// Sections whose rows are addressed by the `key` column.
    pub fn is_keyed(&self) -> bool {
        matches!(self, Self::Profile | Self::Social | Self::Skill)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown section '{}'", s.trim()))
    }
}

// =============================================================================
// Row
// =============================================================================

/// A dataset row after validation.
///
/// Text cells are trimmed and empty optional cells are `None`.
///
/// The `skills` column carries two meanings depending on the section:
/// the icon class list of a `social` row, and the pipe-separated skill
/// names of a `skill` row. Use [`Row::icon`] and [`Row::skill_names`]
/// rather than reading the field directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub section: Section,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
}

impl Row {
    /// Create an empty row for a section.
    pub fn new(section: Section) -> Self {
        Self {
            section,
            key: None,
            title: String::new(),
            description: None,
            image: None,
            link: None,
            skills: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_skills(mut self, skills: impl Into<String>) -> Self {
        self.skills = Some(skills.into());
        self
    }

    /// Icon class text of a social row.
    pub fn icon(&self) -> &str {
        self.skills.as_deref().unwrap_or("")
    }

    /// Skill names of a skill row, in order, trimmed, empty segments dropped.
    pub fn skill_names(&self) -> Vec<String> {
        split_skills(self.skills.as_deref().unwrap_or(""))
    }
}

/// Split a pipe-separated skill list.
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(SKILL_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

// =============================================================================
// Shaped entities
// =============================================================================

/// One entry of the profile mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileField {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A social network button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon class list, e.g. `fab fa-github`.
    pub icon: String,
    pub url: String,
}

/// A titled group of skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<String>,
}

/// A card of one of the gallery sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl From<&Row> for GalleryItem {
    fn from(row: &Row) -> Self {
        Self {
            title: row.title.clone(),
            description: row.description.clone(),
            image: row.image.clone(),
            link: row.link.clone(),
        }
    }
}

// =============================================================================
// Portfolio
// =============================================================================

/// Profile keys that must exist before the header can be rendered.
pub const REQUIRED_PROFILE_KEYS: [&str; 2] = ["name", "role"];

/// Optional profile keys shown in the sidebar contact block.
pub const CONTACT_KEYS: [&str; 3] = ["location", "phone", "email"];

/// Every shaped entity of a dataset.
///
/// Built once by [`crate::transform::shape`] and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub profile: IndexMap<String, ProfileField>,
    pub about: String,
    pub social_links: IndexMap<String, SocialLink>,
    pub skills: IndexMap<String, SkillGroup>,
    pub projects: Vec<GalleryItem>,
    pub certificates: Vec<GalleryItem>,
    pub extensions: Vec<GalleryItem>,
    pub recognitions: Vec<GalleryItem>,
}

impl Portfolio {
    /// Display name (profile `name` title).
    pub fn name(&self) -> &str {
        self.profile_title("name")
    }

    /// Role line (profile `role` title).
    pub fn role(&self) -> &str {
        self.profile_title("role")
    }

    /// Avatar image (profile `name` image).
    pub fn avatar(&self) -> Option<&str> {
        self.profile.get("name").and_then(|f| f.image.as_deref())
    }

    /// Title of a profile entry, or `""` when absent.
    pub fn profile_title(&self, key: &str) -> &str {
        self.profile.get(key).map(|f| f.title.as_str()).unwrap_or("")
    }

    /// Contact entries present in the profile, in display order.
    pub fn contacts(&self) -> Vec<(&'static str, &str)> {
        CONTACT_KEYS
            .iter()
            .filter_map(|key| {
                self.profile
                    .get(*key)
                    .map(|f| f.title.as_str())
                    .filter(|t| !t.is_empty())
                    .map(|t| (*key, t))
            })
            .collect()
    }

    /// Gallery collection for a gallery section.
    pub fn gallery(&self, section: Section) -> &[GalleryItem] {
        match section {
            Section::Project => &self.projects,
            Section::Certificate => &self.certificates,
            Section::Extension => &self.extensions,
            Section::Recognition => &self.recognitions,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_from_name() {
        assert_eq!(Section::from_name("profile"), Some(Section::Profile));
        assert_eq!(Section::from_name("  Skill "), Some(Section::Skill));
        assert_eq!(Section::from_name("RECOGNITION"), Some(Section::Recognition));
        assert_eq!(Section::from_name("blog"), None);
        assert_eq!(Section::from_name(""), None);
    }

    #[test]
    fn test_keyed_sections() {
        let keyed: Vec<Section> = Section::ALL.into_iter().filter(Section::is_keyed).collect();
        assert_eq!(keyed, vec![Section::Profile, Section::Social, Section::Skill]);
    }

    #[test]
    fn test_section_round_trip_names() {
        for section in Section::ALL {
            assert_eq!(section.as_str().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn test_split_skills() {
        assert_eq!(split_skills("Python|SQL|Go"), vec!["Python", "SQL", "Go"]);
        assert_eq!(split_skills(" Rust | | C++ |"), vec!["Rust", "C++"]);
        assert!(split_skills("").is_empty());
        assert!(split_skills("||").is_empty());
    }

    #[test]
    fn test_row_skills_column_reuse() {
        let social = Row::new(Section::Social).with_skills("fab fa-github");
        assert_eq!(social.icon(), "fab fa-github");

        let skill = Row::new(Section::Skill).with_skills("Python|SQL");
        assert_eq!(skill.skill_names(), vec!["Python", "SQL"]);
        assert_eq!(Row::new(Section::Skill).skill_names(), Vec::<String>::new());
    }

    #[test]
    fn test_portfolio_accessors() {
        let mut portfolio = Portfolio::default();
        portfolio.profile.insert(
            "name".into(),
            ProfileField { title: "Ada".into(), description: None, image: Some("ada.png".into()) },
        );
        portfolio.profile.insert(
            "email".into(),
            ProfileField { title: "ada@example.com".into(), description: None, image: None },
        );

        assert_eq!(portfolio.name(), "Ada");
        assert_eq!(portfolio.role(), "");
        assert_eq!(portfolio.avatar(), Some("ada.png"));
        assert_eq!(portfolio.contacts(), vec![("email", "ada@example.com")]);
        assert!(portfolio.gallery(Section::About).is_empty());
    }
}
