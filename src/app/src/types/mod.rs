//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - court: live court status and simulation clock state
//! - menu: navigation menu entries and the built-in fallback list

pub mod court;
pub mod menu;

pub use court::*;
pub use menu::*;
