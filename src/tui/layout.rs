//! Layout definitions for the TUI
//!
//! The screen splits into a header, the entry form, and a status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Header area (title, record count)
    pub header: Rect,
    /// Entry form area
    pub form: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(8),    // Form
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: vertical[0],
            form: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed() {
        let screen = Rect::new(0, 0, 100, 40);
        let rect = centered_rect_fixed(50, 10, screen);
        assert_eq!(rect, Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let screen = Rect::new(0, 0, 30, 5);
        let rect = centered_rect_fixed(50, 10, screen);
        assert!(rect.width <= 30);
        assert!(rect.height <= 5);
    }
}
