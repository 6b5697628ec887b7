#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Vertical scroll offset (px) past which the header switches to its
/// "scrolled" style.
pub const SCROLLED_AFTER_PX: f64 = 10.0;

/// Header chrome state, provided as an `RwSignal` by the header itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl HeaderState {
    /// Update `scrolled` from the current scroll offset.
    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = is_scrolled(scroll_y);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following a nav link always closes the mobile menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn menu_label(self) -> &'static str {
        if self.menu_open { "Close menu" } else { "Open menu" }
    }

    pub fn class(self) -> &'static str {
        if self.scrolled { "site-header site-header--scrolled" } else { "site-header" }
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER_PX
}
