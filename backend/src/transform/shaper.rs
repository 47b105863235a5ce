//! Per-section transforms from rows to shaped entities.
//!
//! | Section       | Entity                              | Addressed by |
//! |---------------|-------------------------------------|--------------|
//! | `profile`     | `key → ProfileField`                | `key`        |
//! | `about`       | first row's description             | -            |
//! | `social`      | `key → SocialLink`                  | `key`        |
//! | `skill`       | `key → SkillGroup`                  | `key`        |
//! | `project`     | `Vec<GalleryItem>`                  | row order    |
//! | `certificate` | `Vec<GalleryItem>`                  | row order    |
//! | `extension`   | `Vec<GalleryItem>`                  | row order    |
//! | `recognition` | `Vec<GalleryItem>`                  | row order    |
//!
//! Keyed sections keep the position of the first occurrence of a key and
//! the content of the last one.

use indexmap::IndexMap;

use super::grouper::{group_by_section, SectionGroups};
use crate::error::ShapeResult;
use crate::models::{GalleryItem, Portfolio, ProfileField, Row, Section, SkillGroup, SocialLink};
use crate::validation::{validate_required, Warning};

/// Shaping output: the portfolio plus what was dropped on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Shaped {
    pub portfolio: Portfolio,
    pub warnings: Vec<Warning>,
}

/// Shape rows into a portfolio and check the required profile keys.
pub fn shape(rows: &[Row]) -> ShapeResult<Portfolio> {
    let shaped = shape_rows(rows);
    validate_required(&shaped.portfolio)?;
    Ok(shaped.portfolio)
}

/// Shape rows without enforcing required keys.
pub fn shape_rows(rows: &[Row]) -> Shaped {
    let groups = group_by_section(rows);
    let mut warnings = Vec::new();

    let profile = keyed(&groups, Section::Profile, &mut warnings, |row| ProfileField {
        title: row.title.clone(),
        description: row.description.clone(),
        image: row.image.clone(),
    });

    let social_links = keyed(&groups, Section::Social, &mut warnings, |row| SocialLink {
        icon: row.icon().to_string(),
        url: row.link.clone().unwrap_or_default(),
    });

    let skills = keyed(&groups, Section::Skill, &mut warnings, |row| SkillGroup {
        title: if row.title.is_empty() {
            row.key.clone().unwrap_or_default()
        } else {
            row.title.clone()
        },
        skills: row.skill_names(),
    });

    for (key, group) in &skills {
        if group.skills.is_empty() {
            warnings.push(Warning::EmptySkillGroup { key: key.clone() });
        }
    }

    let portfolio = Portfolio {
        profile,
        about: about_text(&groups),
        social_links,
        skills,
        projects: gallery(&groups, Section::Project),
        certificates: gallery(&groups, Section::Certificate),
        extensions: gallery(&groups, Section::Extension),
        recognitions: gallery(&groups, Section::Recognition),
    };

    Shaped { portfolio, warnings }
}

/// Build a key-addressed mapping; rows without a key are dropped.
fn keyed<T>(
    groups: &SectionGroups<'_>,
    section: Section,
    warnings: &mut Vec<Warning>,
    build: impl Fn(&Row) -> T,
) -> IndexMap<String, T> {
    debug_assert!(section.is_keyed(), "{} rows are not addressed by key", section);
    let mut map = IndexMap::new();

    for row in groups.get(section) {
        let Some(key) = row.key.as_deref() else {
            warnings.push(Warning::MissingKey {
                section,
                title: row.title.clone(),
            });
            continue;
        };

        if map.insert(key.to_string(), build(row)).is_some() {
            warnings.push(Warning::DuplicateKey {
                section,
                key: key.to_string(),
            });
        }
    }

    map
}

/// First about row: its description, or its title when the description is empty.
fn about_text(groups: &SectionGroups<'_>) -> String {
    groups
        .get(Section::About)
        .first()
        .map(|row| row.description.clone().unwrap_or_else(|| row.title.clone()))
        .unwrap_or_default()
}

fn gallery(groups: &SectionGroups<'_>, section: Section) -> Vec<GalleryItem> {
    groups.get(section).iter().map(|row| GalleryItem::from(*row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;

    fn base_rows() -> Vec<Row> {
        vec![
            Row::new(Section::Profile)
                .with_key("name")
                .with_title("Ada Lovelace")
                .with_image("ada.png"),
            Row::new(Section::Profile)
                .with_key("role")
                .with_title("Analyst")
                .with_description("First programmer"),
        ]
    }

    #[test]
    fn test_profile_has_exactly_given_keys() {
        let portfolio = shape(&base_rows()).unwrap();

        let keys: Vec<&str> = portfolio.profile.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "role"]);
        assert_eq!(portfolio.profile["name"].image.as_deref(), Some("ada.png"));
        assert_eq!(portfolio.profile["role"].description.as_deref(), Some("First programmer"));
    }

    #[test]
    fn test_skill_split() {
        let mut rows = base_rows();
        rows.push(
            Row::new(Section::Skill)
                .with_key("Languages")
                .with_skills("Python|SQL|Go"),
        );

        let portfolio = shape(&rows).unwrap();
        let group = &portfolio.skills["Languages"];
        assert_eq!(group.skills, vec!["Python", "SQL", "Go"]);
        assert_eq!(group.title, "Languages");
    }

    #[test]
    fn test_duplicate_key_last_wins_first_position() {
        let mut rows = base_rows();
        rows.push(Row::new(Section::Social).with_key("github").with_link("https://old"));
        rows.push(Row::new(Section::Social).with_key("mail").with_link("mailto:a@b"));
        rows.push(
            Row::new(Section::Social)
                .with_key("github")
                .with_link("https://new")
                .with_skills("fab fa-github"),
        );

        let shaped = shape_rows(&rows);
        let links = &shaped.portfolio.social_links;

        let keys: Vec<&str> = links.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["github", "mail"]);
        assert_eq!(links["github"].url, "https://new");
        assert_eq!(links["github"].icon, "fab fa-github");
        assert!(shaped.warnings.contains(&Warning::DuplicateKey {
            section: Section::Social,
            key: "github".into()
        }));
    }

    #[test]
    fn test_keyless_rows_dropped() {
        let mut rows = base_rows();
        rows.push(Row::new(Section::Skill).with_title("Orphan").with_skills("A|B"));

        let shaped = shape_rows(&rows);
        assert!(shaped.portfolio.skills.is_empty());
        assert_eq!(
            shaped.warnings,
            vec![Warning::MissingKey {
                section: Section::Skill,
                title: "Orphan".into()
            }]
        );
    }

    #[test]
    fn test_about_first_row_or_empty() {
        let mut rows = base_rows();
        assert_eq!(shape(&rows).unwrap().about, "");

        rows.push(Row::new(Section::About).with_description("First"));
        rows.push(Row::new(Section::About).with_description("Second"));
        assert_eq!(shape(&rows).unwrap().about, "First");
    }

    #[test]
    fn test_galleries_preserve_order_and_counts() {
        let mut rows = base_rows();
        for title in ["P1", "P2", "P3"] {
            rows.push(Row::new(Section::Project).with_title(title).with_description("d"));
        }
        rows.insert(0, Row::new(Section::Certificate).with_title("C1").with_link("https://c1"));
        rows.push(Row::new(Section::Extension).with_title("E1"));

        let portfolio = shape(&rows).unwrap();
        let projects: Vec<&str> = portfolio.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(projects, vec!["P1", "P2", "P3"]);
        assert_eq!(portfolio.certificates.len(), 1);
        assert_eq!(portfolio.certificates[0].description, None);
        assert_eq!(portfolio.extensions.len(), 1);
        assert!(portfolio.recognitions.is_empty());
    }

    #[test]
    fn test_missing_name_fatal() {
        let rows = vec![Row::new(Section::Profile).with_key("role").with_title("Analyst")];
        assert_eq!(shape(&rows), Err(ShapeError::MissingProfileKey("name".into())));
    }

    #[test]
    fn test_shaping_is_idempotent() {
        let mut rows = base_rows();
        rows.push(Row::new(Section::Skill).with_key("db").with_skills("Postgres|Redis"));
        rows.push(Row::new(Section::Recognition).with_title("Award"));

        let first = shape_rows(&rows);
        let second = shape_rows(&rows);
        assert_eq!(first, second);
        assert!(first.portfolio.skills.keys().eq(second.portfolio.skills.keys()));
    }
}
