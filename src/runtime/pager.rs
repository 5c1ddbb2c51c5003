//! Flashcard page navigation

/// Wheel deltas at or below this magnitude are ignored
pub const WHEEL_THRESHOLD: f64 = 10.0;
/// After a wheel-triggered page change, further wheel input is ignored
/// for this long
pub const WHEEL_LOCK_MS: u64 = 500;

/// Current page of a multi-page flashcard set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNavigator {
    current: usize,
    total: usize,
    locked_until: Option<u64>,
}

impl PageNavigator {
    /// `None` when there are no pages to navigate
    pub fn new(total: usize) -> Option<Self> {
        if total == 0 {
            return None;
        }
        Some(Self {
            current: 0,
            total,
            locked_until: None,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn go_to(&mut self, page: usize) {
        self.current = page.min(self.total - 1);
    }

    pub fn next(&mut self) {
        self.go_to(self.current + 1);
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.total
    }

    /// Handle a wheel event at `now_ms`; returns whether the page changed
    pub fn wheel(&mut self, delta_y: f64, now_ms: u64) -> bool {
        if matches!(self.locked_until, Some(until) if now_ms < until) {
            return false;
        }
        let moved = if delta_y > WHEEL_THRESHOLD && self.can_go_next() {
            self.next();
            true
        } else if delta_y < -WHEEL_THRESHOLD && self.can_go_previous() {
            self.previous();
            true
        } else {
            false
        };
        if moved {
            self.locked_until = Some(now_ms + WHEEL_LOCK_MS);
        }
        moved
    }

    /// Indicator text from a template with `{page}` and `{total}`
    pub fn indicator(&self, template: &str) -> String {
        template
            .replace("{page}", &(self.current + 1).to_string())
            .replace("{total}", &self.total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_at_both_ends() {
        let mut nav = PageNavigator::new(3).unwrap();
        nav.previous();
        assert_eq!(nav.current(), 0);
        assert!(!nav.can_go_previous());
        nav.go_to(10);
        assert_eq!(nav.current(), 2);
        nav.next();
        assert_eq!(nav.current(), 2);
        assert!(!nav.can_go_next());
    }

    #[test]
    fn test_wheel_debounce() {
        let mut nav = PageNavigator::new(3).unwrap();
        assert!(nav.wheel(40.0, 1_000));
        assert_eq!(nav.current(), 1);
        assert!(!nav.wheel(40.0, 1_200));
        assert_eq!(nav.current(), 1);
        assert!(nav.wheel(40.0, 1_500));
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn test_small_wheel_delta_ignored() {
        let mut nav = PageNavigator::new(2).unwrap();
        assert!(!nav.wheel(10.0, 0));
        assert!(!nav.wheel(-40.0, 0));
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn test_indicator() {
        let mut nav = PageNavigator::new(3).unwrap();
        nav.next();
        assert_eq!(nav.indicator("Page {page} of {total}"), "Page 2 of 3");
    }
}
