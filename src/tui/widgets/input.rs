//! Text input widget
//!
//! A labelled single-line text input with cursor support.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position (byte offset; input is ASCII-oriented form text)
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text shown while empty
    pub placeholder: String,
    /// Label rendered before the field
    pub label: String,
}

impl TextInput {
    /// Create a new text input with a label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, moving the cursor to the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.content.len();
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left one character
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
        }
    }

    /// Move cursor right one character
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            let next = self.content[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor += next;
        }
    }

    /// Move cursor to the start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end
    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() + 2
        };

        if !self.label.is_empty() {
            let label_style = if self.focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let label_line = Line::from(vec![
                Span::styled(self.label.as_str(), label_style),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width as u16);
        }

        let input_start = area.x + label_width as u16;

        let (display_text, text_style) = if self.content.is_empty() {
            (
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (self.content.as_str(), Style::default().fg(Color::White))
        };
        buf.set_string(input_start, area.y, display_text, text_style);

        if self.focused {
            let cursor_col = self.content[..self.cursor].chars().count();
            let cursor_x = input_start + cursor_col as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self.content[self.cursor..].chars().next().unwrap_or('_');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new("Amount");
        input.insert('4');
        input.insert('2');
        assert_eq!(input.value(), "42");

        input.backspace();
        assert_eq!(input.value(), "4");
    }

    #[test]
    fn test_cursor_movement() {
        let mut input = TextInput::new("Category");
        input.set_content("food");
        assert_eq!(input.cursor, 4);

        input.move_left();
        input.insert('o');
        assert_eq!(input.value(), "foood");

        input.move_start();
        assert_eq!(input.cursor, 0);
        input.move_end();
        assert_eq!(input.cursor, 5);
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new("Date");
        input.set_content("2026-08-29");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }
}
