//! Application configuration.
//!
//! Centralized configuration for the Folio frontend. Values are compiled in;
//! the backend URL is the only one that changes between deployments.

/// Folio backend serving `/api/portfolio` and `/theme.css`.
pub const BACKEND_URL: &str = "http://localhost:3000";

/// Cards per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Project and extension descriptions are cut to this many characters.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Icon font used by the social buttons.
pub const ICON_STYLESHEET_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";
