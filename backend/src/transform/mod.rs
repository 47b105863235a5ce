//! Row shaping module.
//!
//! This module turns validated dataset rows into the portfolio context:
//! - Grouper: partition rows by section, keeping row order
//! - Shaper: per-section transforms into typed entities
//! - Pipeline: file → rows → shaped and validated portfolio

pub mod grouper;
pub mod pipeline;
pub mod shaper;

pub use grouper::{group_by_section, SectionGroups};
pub use pipeline::*;
pub use shaper::{shape, shape_rows, Shaped};
