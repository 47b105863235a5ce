//! Portfolio validation.
//!
//! Two kinds of findings:
//!
//! - Fatal: a required profile key (`name`, `role`) is missing. Returned as
//!   [`ShapeError`] so nothing gets rendered with a blank header.
//! - Non-fatal: [`Warning`]s for rows that were dropped or overwritten and
//!   for empty optional sections. These are logged by the load pipeline.

use serde::Serialize;
use std::fmt;

use crate::error::{ShapeError, ShapeResult};
use crate::models::{Portfolio, Section, REQUIRED_PROFILE_KEYS};
use crate::parser::SkippedRow;

/// A non-fatal finding about the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Warning {
    /// Row dropped by the parser (empty or unknown section).
    SkippedRow { line: u64, reason: String },
    /// Keyed-section row without a `key`.
    MissingKey { section: Section, title: String },
    /// A later row replaced an earlier one with the same key.
    DuplicateKey { section: Section, key: String },
    /// Skill row whose skill list is empty.
    EmptySkillGroup { key: String },
    /// Optional section without rows.
    EmptySection { section: Section },
}

impl From<SkippedRow> for Warning {
    fn from(skip: SkippedRow) -> Self {
        Warning::SkippedRow {
            line: skip.line,
            reason: skip.reason,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::SkippedRow { line, reason } => write!(f, "Line {} skipped: {}", line, reason),
            Warning::MissingKey { section, title } => {
                write!(f, "{} row '{}' has no key and was ignored", section, title)
            }
            Warning::DuplicateKey { section, key } => {
                write!(f, "{} key '{}' is defined more than once, last row wins", section, key)
            }
            Warning::EmptySkillGroup { key } => write!(f, "skill group '{}' lists no skills", key),
            Warning::EmptySection { section } => write!(f, "section '{}' has no rows", section),
        }
    }
}

/// Check the fatal invariants of a shaped portfolio.
pub fn validate_required(portfolio: &Portfolio) -> ShapeResult<()> {
    if portfolio.profile.is_empty() {
        return Err(ShapeError::MissingProfile);
    }

    for key in REQUIRED_PROFILE_KEYS {
        let present = portfolio
            .profile
            .get(key)
            .is_some_and(|field| !field.title.is_empty());
        if !present {
            return Err(ShapeError::MissingProfileKey(key.to_string()));
        }
    }

    Ok(())
}

/// Validate a portfolio, returning the non-fatal warnings.
pub fn validate_portfolio(portfolio: &Portfolio) -> ShapeResult<Vec<Warning>> {
    validate_required(portfolio)?;

    let mut warnings = Vec::new();

    if portfolio.about.is_empty() {
        warnings.push(Warning::EmptySection { section: Section::About });
    }
    if portfolio.social_links.is_empty() {
        warnings.push(Warning::EmptySection { section: Section::Social });
    }
    if portfolio.skills.is_empty() {
        warnings.push(Warning::EmptySection { section: Section::Skill });
    }
    for section in [Section::Project, Section::Extension, Section::Certificate, Section::Recognition] {
        if portfolio.gallery(section).is_empty() {
            warnings.push(Warning::EmptySection { section });
        }
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileField;

    fn field(title: &str) -> ProfileField {
        ProfileField {
            title: title.to_string(),
            description: None,
            image: None,
        }
    }

    #[test]
    fn test_missing_profile() {
        let portfolio = Portfolio::default();
        assert_eq!(validate_required(&portfolio), Err(ShapeError::MissingProfile));
    }

    #[test]
    fn test_missing_name_is_fatal() {
        let mut portfolio = Portfolio::default();
        portfolio.profile.insert("role".into(), field("Engineer"));

        assert_eq!(
            validate_required(&portfolio),
            Err(ShapeError::MissingProfileKey("name".into()))
        );
    }

    #[test]
    fn test_blank_name_is_fatal() {
        let mut portfolio = Portfolio::default();
        portfolio.profile.insert("name".into(), field(""));
        portfolio.profile.insert("role".into(), field("Engineer"));

        assert!(validate_portfolio(&portfolio).is_err());
    }

    #[test]
    fn test_empty_sections_are_warnings() {
        let mut portfolio = Portfolio::default();
        portfolio.profile.insert("name".into(), field("Ada"));
        portfolio.profile.insert("role".into(), field("Engineer"));

        let warnings = validate_portfolio(&portfolio).unwrap();
        assert!(warnings.contains(&Warning::EmptySection { section: Section::Recognition }));
        assert!(warnings.contains(&Warning::EmptySection { section: Section::About }));
        assert_eq!(warnings.len(), 7);
    }

    #[test]
    fn test_warning_display() {
        let warning = Warning::DuplicateKey {
            section: Section::Social,
            key: "github".into(),
        };
        assert_eq!(
            warning.to_string(),
            "social key 'github' is defined more than once, last row wins"
        );
    }
}
