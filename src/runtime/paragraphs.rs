//! Paragraph navigation and word hiding

use serde::Serialize;

/// What the control bar shows after a transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphView {
    /// "{current+1}/{N}"
    pub indicator: String,
    pub current: usize,
    /// Whether the current paragraph's words are hidden (toggle button state)
    pub current_hidden: bool,
    pub hidden: Vec<bool>,
}

/// State of one lyrics widget
///
/// Every paragraph starts visible and the first one is current. All
/// transitions keep `current` inside `0..len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphController {
    current: usize,
    hidden: Vec<bool>,
}

impl ParagraphController {
    /// `None` for zero paragraphs: such a widget exposes no controls
    pub fn new(paragraph_count: usize) -> Option<Self> {
        if paragraph_count == 0 {
            return None;
        }
        Some(Self {
            current: 0,
            hidden: vec![false; paragraph_count],
        })
    }

    pub fn len(&self) -> usize {
        self.hidden.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_hidden(&self, index: usize) -> bool {
        self.hidden.get(index).copied().unwrap_or(false)
    }

    pub fn next(&mut self) {
        if self.current + 1 < self.len() {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Make `index` current; out-of-range indexes are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.len() {
            self.current = index;
        }
    }

    pub fn toggle_current(&mut self) {
        let current = self.current;
        self.hidden[current] = !self.hidden[current];
    }

    pub fn hide(&mut self, index: usize) {
        self.set_hidden(index, true);
    }

    pub fn show(&mut self, index: usize) {
        self.set_hidden(index, false);
    }

    fn set_hidden(&mut self, index: usize, hidden: bool) {
        if let Some(flag) = self.hidden.get_mut(index) {
            *flag = hidden;
        }
    }

    /// Hide every paragraph; returns the indexes that actually changed
    pub fn hide_all(&mut self) -> Vec<usize> {
        self.set_all(true)
    }

    /// Show every paragraph; returns the indexes that actually changed
    pub fn show_all(&mut self) -> Vec<usize> {
        self.set_all(false)
    }

    fn set_all(&mut self, hidden: bool) -> Vec<usize> {
        let mut changed = Vec::new();
        for (i, flag) in self.hidden.iter_mut().enumerate() {
            if *flag != hidden {
                *flag = hidden;
                changed.push(i);
            }
        }
        changed
    }

    pub fn indicator(&self) -> String {
        format!("{}/{}", self.current + 1, self.len())
    }

    pub fn view(&self) -> ParagraphView {
        ParagraphView {
            indicator: self.indicator(),
            current: self.current,
            current_hidden: self.hidden[self.current],
            hidden: self.hidden.clone(),
        }
    }
}
