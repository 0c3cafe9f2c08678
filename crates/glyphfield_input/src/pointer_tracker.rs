//! Pointer tracking across mouse and touch input
//!
//! Events:
//! - Cursor move / primary touch move: `Moved` (drives repulsion)
//! - Left click / primary touch start: `Pressed` (injects a burst)
//!
//! Only the first finger down is followed; other touches are ignored until
//! it lifts.

use glyphfield_math::Vec2;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};

/// Pointer event in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer or primary touch moved
    Moved(Vec2),
    /// Left click or primary touch began
    Pressed(Vec2),
}

/// Tracks cursor and touch state for one drawing surface
#[derive(Debug, Default)]
pub struct PointerTracker {
    /// Top-left corner of the surface in window coordinates
    surface_origin: Vec2,
    /// Last cursor position in window coordinates
    cursor: Option<Vec2>,
    /// Id of the touch being followed
    primary_touch: Option<u64>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set where the surface sits inside the window
    pub fn with_surface_origin(mut self, origin: Vec2) -> Self {
        self.surface_origin = origin;
        self
    }

    /// Convert a window position to surface-local coordinates
    pub fn to_local(&self, window_position: Vec2) -> Vec2 {
        window_position - self.surface_origin
    }

    /// Last known cursor position, surface-local
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor.map(|c| self.to_local(c))
    }

    /// Whether a touch is currently being followed
    pub fn is_touching(&self) -> bool {
        self.primary_touch.is_some()
    }

    /// Dispatch a winit window event
    ///
    /// Returns `None` for events that are not pointer input or that the
    /// tracker ignores.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(position.x, position.y),
            WindowEvent::CursorLeft { .. } => {
                self.cursor_left();
                None
            }
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*button, *state),
            WindowEvent::Touch(touch) => {
                self.touch(touch.id, touch.phase, touch.location.x, touch.location.y)
            }
            _ => None,
        }
    }

    /// Process cursor movement (window coordinates)
    pub fn cursor_moved(&mut self, x: f64, y: f64) -> Option<PointerEvent> {
        let position = Vec2::new(x as f32, y as f32);
        self.cursor = Some(position);
        Some(PointerEvent::Moved(self.to_local(position)))
    }

    /// Forget the cursor once it leaves the window
    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }

    /// Process a mouse button; left press becomes `Pressed` at the cursor
    pub fn mouse_input(&mut self, button: MouseButton, state: ElementState) -> Option<PointerEvent> {
        if button != MouseButton::Left || state != ElementState::Pressed {
            return None;
        }
        self.cursor().map(PointerEvent::Pressed)
    }

    /// Process a touch event (window coordinates)
    pub fn touch(&mut self, id: u64, phase: TouchPhase, x: f64, y: f64) -> Option<PointerEvent> {
        let local = self.to_local(Vec2::new(x as f32, y as f32));

        match phase {
            TouchPhase::Started => {
                if self.primary_touch.is_some() {
                    return None;
                }
                self.primary_touch = Some(id);
                Some(PointerEvent::Pressed(local))
            }
            TouchPhase::Moved => {
                (self.primary_touch == Some(id)).then_some(PointerEvent::Moved(local))
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.primary_touch == Some(id) {
                    self.primary_touch = None;
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_move_is_surface_local() {
        let mut tracker = PointerTracker::new().with_surface_origin(Vec2::new(10.0, 20.0));
        let event = tracker.cursor_moved(110.0, 70.0);
        assert_eq!(event, Some(PointerEvent::Moved(Vec2::new(100.0, 50.0))));
        assert_eq!(tracker.cursor(), Some(Vec2::new(100.0, 50.0)));
    }

    #[test]
    fn test_left_click_presses_at_cursor() {
        let mut tracker = PointerTracker::new();
        tracker.cursor_moved(42.0, 24.0);
        let event = tracker.mouse_input(MouseButton::Left, ElementState::Pressed);
        assert_eq!(event, Some(PointerEvent::Pressed(Vec2::new(42.0, 24.0))));
    }

    #[test]
    fn test_click_ignored_without_cursor_or_on_release() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.mouse_input(MouseButton::Left, ElementState::Pressed), None);

        tracker.cursor_moved(1.0, 1.0);
        assert_eq!(tracker.mouse_input(MouseButton::Left, ElementState::Released), None);
        assert_eq!(tracker.mouse_input(MouseButton::Right, ElementState::Pressed), None);

        tracker.cursor_left();
        assert_eq!(tracker.mouse_input(MouseButton::Left, ElementState::Pressed), None);
    }

    #[test]
    fn test_touch_start_presses_and_move_moves() {
        let mut tracker = PointerTracker::new();
        assert_eq!(
            tracker.touch(7, TouchPhase::Started, 5.0, 6.0),
            Some(PointerEvent::Pressed(Vec2::new(5.0, 6.0)))
        );
        assert!(tracker.is_touching());
        assert_eq!(
            tracker.touch(7, TouchPhase::Moved, 8.0, 9.0),
            Some(PointerEvent::Moved(Vec2::new(8.0, 9.0)))
        );
        assert_eq!(tracker.touch(7, TouchPhase::Ended, 8.0, 9.0), None);
        assert!(!tracker.is_touching());
    }

    #[test]
    fn test_only_primary_touch_followed() {
        let mut tracker = PointerTracker::new();
        tracker.touch(1, TouchPhase::Started, 0.0, 0.0);
        assert_eq!(tracker.touch(2, TouchPhase::Started, 50.0, 50.0), None);
        assert_eq!(tracker.touch(2, TouchPhase::Moved, 60.0, 60.0), None);
        assert_eq!(tracker.touch(2, TouchPhase::Ended, 60.0, 60.0), None);
        assert!(tracker.is_touching());

        tracker.touch(1, TouchPhase::Cancelled, 0.0, 0.0);
        // A new finger becomes primary once the first one is gone
        assert_eq!(
            tracker.touch(2, TouchPhase::Started, 70.0, 70.0),
            Some(PointerEvent::Pressed(Vec2::new(70.0, 70.0)))
        );
    }
}
