//! Parsers for author input
//!
//! None of these fail: input they do not recognize is passed through
//! unchanged or ignored.

pub mod drive;
pub mod filename;
pub mod lyrics;
pub mod soundcloud;
pub mod text;

pub use drive::{content_image_url, extract_file_id, is_file_id, normalize_drive_link, thumbnail_url};
pub use filename::{download_file_name, parse_filename, strip_extension, ParsedFilename};
pub use lyrics::{parse_paragraphs, paragraphs_to_fragment, Paragraph};
pub use soundcloud::player_url;
pub use text::{bulk_lines, parse_word_list};
