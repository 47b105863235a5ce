//! # Folio - portfolio site renderer
//!
//! Folio reads a single flat CSV dataset (profile, about, social links,
//! skills, projects, extensions, certificates, recognitions), shapes it into
//! typed sections and renders a themed HTML page.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV File   │────▶│   Parser    │────▶│   Shaper    │────▶│  Renderer   │
//! │  (ISO/UTF8) │     │  (typed Row)│     │ (Portfolio) │     │ (HTML+CSS)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use folio::{load_portfolio, render_page, RenderOptions, Theme};
//!
//! let report = load_portfolio("data/portfolio.csv")?;
//! let html = render_page(&report.portfolio, &RenderOptions::default().with_theme(Theme::Dark));
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Rows and shaped entities
//! - [`parser`] - CSV parsing with auto-detection
//! - [`transform`] - Grouping, shaping and the load pipeline
//! - [`validation`] - Required keys and non-fatal warnings
//! - [`render`] - Server-side HTML renderer and themes
//! - [`store`] - Publish-once portfolio holder with explicit reload
//! - [`config`] - Defaults and environment overrides
//! - [`api`] - HTTP server and logs

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Shaping
pub mod transform;

// Validation
pub mod validation;

// Rendering
pub mod render;

// Serving
pub mod api;
pub mod store;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, LoadError, ServerError, ShapeError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{GalleryItem, Portfolio, ProfileField, Row, Section, SkillGroup, SocialLink};

// =============================================================================
// Re-exports - Parsing, shaping and validation
// =============================================================================

pub use parser::{detect_delimiter, detect_encoding, parse_bytes_auto, parse_file_auto, parse_str, ParseResult};
pub use transform::{group_by_section, load_portfolio, load_portfolio_bytes, shape, shape_rows, CsvInfo, LoadReport};
pub use validation::{validate_portfolio, Warning};

// =============================================================================
// Re-exports - Rendering
// =============================================================================

pub use render::{render_page, stylesheet, RenderOptions, Theme};

// =============================================================================
// Re-exports - Serving
// =============================================================================

pub use config::AppConfig;
pub use store::PortfolioStore;

pub mod server {
    pub use crate::api::server::{build_router, start_server, AppState};
}
