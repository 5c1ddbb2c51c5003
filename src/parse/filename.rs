//! Filename conventions
//!
//! Course images are named `"Name - CODE - description.ext"`. Bulk import
//! reads the card caption and lesson code out of that name.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref EXTENSION: Regex = Regex::new(r"\.[^.]+$").unwrap();
    static ref UNSAFE_FILE_CHARS: Regex = Regex::new(r#"[<>:"/\\|?*]"#).unwrap();
}

const SEGMENT_DELIMITER: &str = " - ";

/// Caption and lesson code taken from a display name
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFilename {
    pub name: String,
    pub lesson_code: String,
}

/// Split a display name on `" - "`
///
/// - three or more segments: segment 1 is the name, segment 2 the code
/// - two segments: segment 1 is the name, no code
/// - one segment: the whole (trimmed) input is the name
pub fn parse_filename(filename: &str) -> ParsedFilename {
    let parts: Vec<&str> = filename.split(SEGMENT_DELIMITER).collect();
    match parts.as_slice() {
        [name, code, _, ..] => ParsedFilename {
            name: name.trim().to_string(),
            lesson_code: code.trim().to_string(),
        },
        [name, _] => ParsedFilename {
            name: name.trim().to_string(),
            lesson_code: String::new(),
        },
        _ => ParsedFilename {
            name: filename.trim().to_string(),
            lesson_code: String::new(),
        },
    }
}

/// Drop a trailing `.ext`
pub fn strip_extension(filename: &str) -> String {
    EXTENSION.replace(filename, "").into_owned()
}

/// File name for saving generated code as text
pub fn download_file_name(title: &str) -> String {
    let safe = UNSAFE_FILE_CHARS.replace_all(title, "_");
    let safe = safe.trim();
    if safe.is_empty() {
        "embed-code.txt".to_string()
    } else {
        format!("{}.txt", safe)
    }
}
