//! Welcome overlay
//!
//! A headline shown over the field. The window has no page to scroll, so the
//! mouse wheel drives a virtual scroll offset instead. Scrolling back up
//! near the top swaps in the alternate message; scrolling down restores the
//! default one.

use winit::event::MouseScrollDelta;

/// Pixels scrolled per wheel line
pub const LINE_HEIGHT: f32 = 40.0;
/// Scrollable height as a multiple of the viewport height
pub const PAGE_HEIGHT: f32 = 3.0;
/// Portion of the viewport height (from the top) where scrolling up swaps messages
pub const ALTERNATE_ZONE: f32 = 0.3;

/// Text shown by the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WelcomeMessage {
    pub headline: &'static str,
    pub tagline: &'static str,
    /// Label of the button under the tagline
    pub call_to_action: Option<&'static str>,
}

pub const DEFAULT_MESSAGE: WelcomeMessage = WelcomeMessage {
    headline: "Welcome",
    tagline: "Scroll to know more",
    call_to_action: None,
};

pub const ALTERNATE_MESSAGE: WelcomeMessage = WelcomeMessage {
    headline: "See potential?",
    tagline: "Let's build something meaningful",
    call_to_action: Some("Get in Touch"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Scroll-driven welcome message state
#[derive(Debug, Clone)]
pub struct WelcomeOverlay {
    hidden: bool,
    viewport_height: f32,
    scroll_y: f32,
    direction: Option<ScrollDirection>,
    alternate: bool,
}

impl WelcomeOverlay {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            hidden: false,
            viewport_height,
            scroll_y: 0.0,
            direction: None,
            alternate: false,
        }
    }

    /// Builder: suppress the overlay entirely
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
        self.scroll_y = self.scroll_y.min(self.max_scroll());
    }

    fn max_scroll(&self) -> f32 {
        (self.viewport_height * (PAGE_HEIGHT - 1.0)).max(0.0)
    }

    /// Convert a winit wheel delta to a change in scroll offset
    ///
    /// Positive wheel motion scrolls up, which reduces the offset.
    pub fn wheel_offset(delta: MouseScrollDelta) -> f32 {
        match delta {
            MouseScrollDelta::LineDelta(_, y) => -y * LINE_HEIGHT,
            MouseScrollDelta::PixelDelta(position) => -position.y as f32,
        }
    }

    /// Apply a mouse wheel event
    pub fn wheel(&mut self, delta: MouseScrollDelta) {
        self.scroll_by(Self::wheel_offset(delta));
    }

    /// Move the virtual scroll offset by `dy` pixels (positive is down)
    ///
    /// Returns true when the displayed message changed.
    pub fn scroll_by(&mut self, dy: f32) -> bool {
        let previous = self.scroll_y;
        self.scroll_y = (self.scroll_y + dy).clamp(0.0, self.max_scroll());

        if self.scroll_y > previous {
            self.direction = Some(ScrollDirection::Down);
        } else if self.scroll_y < previous {
            self.direction = Some(ScrollDirection::Up);
        } else {
            return false;
        }

        let before = self.alternate;
        match self.direction {
            Some(ScrollDirection::Up) if self.scroll_y < self.viewport_height * ALTERNATE_ZONE => {
                self.alternate = true;
            }
            Some(ScrollDirection::Down) => self.alternate = false,
            _ => {}
        }
        before != self.alternate
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Message to display, or `None` when the overlay is suppressed
    pub fn message(&self) -> Option<WelcomeMessage> {
        if self.hidden {
            None
        } else if self.alternate {
            Some(ALTERNATE_MESSAGE)
        } else {
            Some(DEFAULT_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_default_message() {
        let overlay = WelcomeOverlay::new(600.0);
        assert_eq!(overlay.message(), Some(DEFAULT_MESSAGE));
        assert_eq!(overlay.direction(), None);
    }

    #[test]
    fn test_hidden_overlay_has_no_message() {
        let mut overlay = WelcomeOverlay::new(600.0).with_hidden(true);
        assert!(overlay.is_hidden());
        overlay.scroll_by(500.0);
        overlay.scroll_by(-490.0);
        assert_eq!(overlay.message(), None);
    }

    #[test]
    fn test_scroll_up_near_top_shows_alternate() {
        let mut overlay = WelcomeOverlay::new(600.0);
        overlay.scroll_by(400.0);
        assert_eq!(overlay.direction(), Some(ScrollDirection::Down));

        // Still below the top 30% (180px)
        assert!(!overlay.scroll_by(-100.0));
        assert_eq!(overlay.message(), Some(DEFAULT_MESSAGE));

        assert!(overlay.scroll_by(-200.0));
        assert_eq!(overlay.scroll_y(), 100.0);
        assert_eq!(overlay.message(), Some(ALTERNATE_MESSAGE));
        assert_eq!(
            overlay.message().and_then(|m| m.call_to_action),
            Some("Get in Touch")
        );
    }

    #[test]
    fn test_scroll_down_restores_default() {
        let mut overlay = WelcomeOverlay::new(600.0);
        overlay.scroll_by(100.0);
        overlay.scroll_by(-50.0);
        assert_eq!(overlay.message(), Some(ALTERNATE_MESSAGE));

        assert!(overlay.scroll_by(10.0));
        assert_eq!(overlay.message(), Some(DEFAULT_MESSAGE));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut overlay = WelcomeOverlay::new(600.0);
        assert!(!overlay.scroll_by(-100.0));
        assert_eq!(overlay.scroll_y(), 0.0);
        assert_eq!(overlay.direction(), None);

        overlay.scroll_by(10_000.0);
        assert_eq!(overlay.scroll_y(), 1200.0);

        overlay.set_viewport_height(300.0);
        assert_eq!(overlay.scroll_y(), 600.0);
    }

    #[test]
    fn test_wheel_lines_scroll_up_on_positive_delta() {
        assert_eq!(
            WelcomeOverlay::wheel_offset(MouseScrollDelta::LineDelta(0.0, 2.0)),
            -80.0
        );
        let mut overlay = WelcomeOverlay::new(600.0);
        overlay.wheel(MouseScrollDelta::LineDelta(0.0, -3.0));
        assert_eq!(overlay.scroll_y(), 120.0);
    }
}
