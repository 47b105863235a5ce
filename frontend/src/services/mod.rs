//! Backend services.
//!
//! - [`portfolio`] - Fetch the shaped portfolio and build stylesheet URLs

pub mod portfolio;

pub use portfolio::*;
