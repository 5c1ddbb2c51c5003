//! Author-supplied content for the three embed kinds
//!
//! These values live only in the editor's working memory. The generator
//! reads them and never writes back.

use serde::{Deserialize, Serialize};

/// Cards per printed/displayed flashcard page
pub const PAGE_SIZE: usize = 8;

/// One flashcard: an image with a caption and an optional lesson code
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardItem {
    pub image_url: String,
    pub text: String,
    #[serde(default)]
    pub lesson_code: String,
}

impl CardItem {
    pub fn new(image_url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            text: text.into(),
            lesson_code: String::new(),
        }
    }

    pub fn with_lesson_code(mut self, code: impl Into<String>) -> Self {
        self.lesson_code = code.into();
        self
    }

    /// Placeholder card shown for an empty slot
    pub fn placeholder(index: usize) -> Self {
        Self::new("", format!("Card {}", index + 1))
    }
}

/// Card counts offered by the editor
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardCount {
    Eight,
    Sixteen,
    TwentyFour,
}

impl CardCount {
    pub fn get(self) -> usize {
        match self {
            CardCount::Eight => 8,
            CardCount::Sixteen => 16,
            CardCount::TwentyFour => 24,
        }
    }

    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            8 => Some(CardCount::Eight),
            16 => Some(CardCount::Sixteen),
            24 => Some(CardCount::TwentyFour),
            _ => None,
        }
    }
}

/// Resize a card list to `count`, keeping existing cards by index
pub fn resize_cards(cards: &[CardItem], count: CardCount) -> Vec<CardItem> {
    (0..count.get())
        .map(|i| cards.get(i).cloned().unwrap_or_else(|| CardItem::placeholder(i)))
        .collect()
}

/// A fill-in-the-blank song page
///
/// `body_text` is raw author text: blank lines separate paragraphs and
/// `(word)` marks a hideable word.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LyricsDocument {
    pub title: String,
    pub author: String,
    pub vocal_audio_url: String,
    #[serde(default)]
    pub instrumental_audio_url: Option<String>,
    pub body_text: String,
}

impl LyricsDocument {
    /// The instrumental URL if one is set and non-blank
    pub fn instrumental(&self) -> Option<&str> {
        self.instrumental_audio_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Fill empty title/author with the editor's display placeholders
    pub fn with_display_defaults(mut self) -> Self {
        if self.title.trim().is_empty() {
            self.title = "Title".to_string();
        }
        if self.author.trim().is_empty() {
            self.author = "Author".to_string();
        }
        self
    }
}

/// One lesson in a vocabulary theme
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub name: String,
    pub words: Vec<String>,
}

impl Lesson {
    pub fn new(name: impl Into<String>, words: &[&str]) -> Self {
        Self {
            name: name.into(),
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// A titled group of lessons rendered as one card
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub title: String,
    #[serde(default)]
    pub css_class: String,
    pub lessons: Vec<Lesson>,
}

/// Returned when an edit would leave a theme without lessons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastLessonError;

impl Theme {
    /// Append a placeholder lesson named after its position
    pub fn add_lesson(&mut self) -> &Lesson {
        let number = self.lessons.len() + 1;
        self.lessons.push(Lesson::new(
            format!("Lesson {}: New", number),
            &["word1", "word2", "word3"],
        ));
        &self.lessons[self.lessons.len() - 1]
    }

    /// Remove a lesson; a theme always keeps at least one
    pub fn remove_lesson(&mut self, index: usize) -> Result<Lesson, LastLessonError> {
        if self.lessons.len() <= 1 || index >= self.lessons.len() {
            return Err(LastLessonError);
        }
        Ok(self.lessons.remove(index))
    }
}

/// The two themes the word-list editor ships with
pub fn default_themes() -> Vec<Theme> {
    vec![
        Theme {
            title: "Klanken".to_string(),
            css_class: String::new(),
            lessons: vec![
                Lesson::new("Les 1: aai, ooi, oei", &["aai", "ooi", "oei", "kraai", "kooi", "mooi", "groei"]),
                Lesson::new("Les 2: s / ss", &["sok", "glas", "kussen", "mossel", "das", "wassen"]),
                Lesson::new("Les 3: t / d", &["hond", "kat", "bed", "wand", "tijd", "stad", "hand"]),
                Lesson::new("Les 4: ee, eu, oo", &["been", "zee", "neus", "deur", "boom", "rood"]),
            ],
        },
        Theme {
            title: "BAK - woorden".to_string(),
            css_class: "lw-theme-2".to_string(),
            lessons: vec![
                Lesson::new("Les 1: Boerderij", &["koe", "geit", "kip", "stal", "melk", "trekker", "boer", "paard"]),
                Lesson::new("Les 2: Dierentuin", &["leeuw", "tijger", "aap", "slang", "beer", "zebra", "olifant", "giraffe"]),
                Lesson::new("Les 3: School", &["pen", "boek", "schrift", "bord", "tas", "potlood", "gum", "liniaal"]),
                Lesson::new("Les 4: Lichaam", &["hoofd", "arm", "been", "hand", "voet", "oog", "neus", "mond"]),
            ],
        },
    ]
}
