//! State machines of the embedded widgets
//!
//! The generated runtime scripts implement these in the browser; the Rust
//! versions define the same transitions and drive the editor's live preview.

pub mod audio;
pub mod pager;
pub mod paragraphs;

pub use audio::{AudioSwitch, SwitchPlan, Track};
pub use pager::PageNavigator;
pub use paragraphs::{ParagraphController, ParagraphView};
