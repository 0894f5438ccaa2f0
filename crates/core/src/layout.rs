//! Pure state behind the reading bar and the mobile sidebar.

/// Viewport width (px) at or below which the sidebar is an overlay.
pub const SIDEBAR_BREAKPOINT_PX: u32 = 900;

/// Percentage of the page scrolled, clamped to `0.0..=100.0`.
///
/// Pages shorter than the viewport report 0.
#[must_use]
pub fn reading_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Open/closed state of the sidebar on narrow viewports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
    breakpoint_px: u32,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new(SIDEBAR_BREAKPOINT_PX)
    }
}

impl SidebarState {
    #[must_use]
    pub fn new(breakpoint_px: u32) -> Self {
        Self {
            open: false,
            breakpoint_px,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A nav link was followed; narrow layouts close the overlay.
    pub fn on_nav_link(&mut self, viewport_width: u32) {
        if viewport_width <= self.breakpoint_px {
            self.close();
        }
    }

    /// Widening past the breakpoint always closes the overlay.
    pub fn on_resize(&mut self, viewport_width: u32) {
        if viewport_width > self.breakpoint_px {
            self.close();
        }
    }
}
