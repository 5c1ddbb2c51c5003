//! Data models for embed content and styling

pub mod content;
pub mod style;

pub use content::*;
pub use style::*;
