//! REST API types.
//!
//! `GET /api/portfolio` returns [`crate::models::Portfolio`] directly; the
//! types here cover reload reports and errors.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::models::Portfolio;
use crate::render::Theme;
use crate::transform::pipeline::{CsvInfo, LoadReport};
use crate::validation::Warning;

/// Number of entries per shaped entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionCounts {
    pub profile: usize,
    pub social_links: usize,
    pub skill_groups: usize,
    pub projects: usize,
    pub extensions: usize,
    pub certificates: usize,
    pub recognitions: usize,
}

impl From<&Portfolio> for SectionCounts {
    fn from(p: &Portfolio) -> Self {
        Self {
            profile: p.profile.len(),
            social_links: p.social_links.len(),
            skill_groups: p.skills.len(),
            projects: p.projects.len(),
            extensions: p.extensions.len(),
            certificates: p.certificates.len(),
            recognitions: p.recognitions.len(),
        }
    }
}

/// Response of `POST /api/reload`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReloadResponse {
    /// "ready" or "warning"
    pub status: String,
    pub counts: SectionCounts,
    pub csv_info: CsvInfo,
    pub warnings: Vec<Warning>,
}

impl From<LoadReport> for ReloadResponse {
    fn from(report: LoadReport) -> Self {
        Self {
            status: if report.warnings.is_empty() { "ready" } else { "warning" }.to_string(),
            counts: SectionCounts::from(&report.portfolio),
            csv_info: report.csv_info,
            warnings: report.warnings,
        }
    }
}

/// Query string of the page and stylesheet routes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeQuery {
    pub theme: Option<String>,
}

impl ThemeQuery {
    /// Requested theme, or `fallback` when absent.
    pub fn resolve(&self, fallback: Theme) -> Result<Theme, String> {
        match self.theme.as_deref() {
            None | Some("") => Ok(fallback),
            Some(name) => name.parse(),
        }
    }
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({
        "status": "error",
        "error": error,
    })
}
