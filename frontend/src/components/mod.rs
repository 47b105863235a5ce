//! UI Components for the Folio portfolio page.
//!
//! # Layout Components
//! - [`Sidebar`] - Avatar, name, role, contact and social links
//! - [`ThemeToggle`] - Light/dark switch
//! - [`Footer`] - Copyright line
//!
//! # Section Components
//! - [`Hero`] - Name and role heading
//! - [`About`] - Biography paragraphs
//! - [`Skills`] - Skill groups as chips
//! - [`Gallery`] - Card grid for research, extension, certificates and recognitions

mod sidebar;
mod theme_toggle;
mod hero;
mod skills;
mod gallery;
mod footer;

pub use sidebar::*;
pub use theme_toggle::*;
pub use hero::*;
pub use skills::*;
pub use gallery::*;
pub use footer::*;
