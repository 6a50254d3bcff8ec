//! Navigation bar state
//!
//! Owned by the navigation component for its own lifetime; nothing else
//! reads or writes it.

/// Scroll offset past which the bar switches to its solid style
pub const SCROLL_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    mobile_open: bool,
    active_dropdown: Option<String>,
    search_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn search_open(&self) -> bool {
        self.search_open
    }

    pub fn active_dropdown(&self) -> Option<&str> {
        self.active_dropdown.as_deref()
    }

    pub fn is_dropdown_open(&self, label: &str) -> bool {
        self.active_dropdown.as_deref() == Some(label)
    }

    pub fn on_scroll(&mut self, offset_y: f64) {
        self.scrolled = offset_y > SCROLL_THRESHOLD;
    }

    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    /// Desktop hover. Items without a dropdown leave the state alone.
    pub fn open_dropdown(&mut self, label: &str, has_dropdown: bool) {
        if has_dropdown {
            self.active_dropdown = Some(label.to_string());
        }
    }

    pub fn close_dropdown(&mut self) {
        self.active_dropdown = None;
    }

    /// Mobile tap: opens `label`, or closes it if it is already open
    pub fn toggle_dropdown(&mut self, label: &str) {
        if self.is_dropdown_open(label) {
            self.active_dropdown = None;
        } else {
            self.active_dropdown = Some(label.to_string());
        }
    }

    pub fn toggle_search(&mut self) {
        self.search_open = !self.search_open;
    }

    pub fn close_search(&mut self) {
        self.search_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        let mut nav = NavState::new();
        nav.on_scroll(20.0);
        assert!(!nav.scrolled());
        nav.on_scroll(21.0);
        assert!(nav.scrolled());
        nav.on_scroll(0.0);
        assert!(!nav.scrolled());
    }

    #[test]
    fn test_single_dropdown_open() {
        let mut nav = NavState::new();
        nav.open_dropdown("Products", true);
        nav.open_dropdown("Solutions", true);
        assert_eq!(nav.active_dropdown(), Some("Solutions"));
        assert!(!nav.is_dropdown_open("Products"));

        nav.open_dropdown("Pricing", false);
        assert_eq!(nav.active_dropdown(), Some("Solutions"));

        nav.close_dropdown();
        assert_eq!(nav.active_dropdown(), None);
    }

    #[test]
    fn test_toggle_dropdown() {
        let mut nav = NavState::new();
        nav.toggle_dropdown("Products");
        assert!(nav.is_dropdown_open("Products"));
        nav.toggle_dropdown("Solutions");
        assert!(nav.is_dropdown_open("Solutions"));
        nav.toggle_dropdown("Solutions");
        assert_eq!(nav.active_dropdown(), None);
    }

    #[test]
    fn test_mobile_and_search_toggles() {
        let mut nav = NavState::new();
        nav.toggle_mobile();
        nav.toggle_search();
        assert!(nav.mobile_open());
        assert!(nav.search_open());

        nav.close_search();
        nav.close_search();
        assert!(!nav.search_open());
        nav.toggle_mobile();
        assert!(!nav.mobile_open());
    }
}
