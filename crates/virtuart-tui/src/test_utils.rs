//! Rendering test helpers built on ratatui's `TestBackend`

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use virtuart_app::AppState;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Roomy terminal that fits the whole page
pub const PAGE_WIDTH: u16 = 100;
pub const PAGE_HEIGHT: u16 = 40;

/// In-memory terminal for widget and full-page render tests
pub struct TestTerminal {
    /// The underlying ratatui terminal with TestBackend.
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Terminal large enough for every page section (100x40)
    pub fn page() -> Self {
        Self::with_size(PAGE_WIDTH, PAGE_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame with a custom rendering function (e.g. `view`)
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    /// Get the underlying buffer for assertions
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Whether `text` appears on any single row
    pub fn buffer_contains(&self, text: &str) -> bool {
        (0..self.buffer().area.height).any(|y| self.row_text(y).contains(text))
    }

    /// Whether row `line` contains `text`
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        self.row_text(line).contains(text)
    }

    /// Symbol at a cell, `None` outside the terminal
    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        self.buffer().cell((x, y)).map(|cell| cell.symbol())
    }

    /// Text of row `y` (empty outside the terminal)
    pub fn row_text(&self, y: u16) -> String {
        let buffer = self.buffer();
        if y >= buffer.area.height {
            return String::new();
        }
        let width = buffer.area.width as usize;
        let start = y as usize * width;
        buffer.content[start..start + width]
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    /// Whole screen, one row per line. Handy in assertion messages.
    pub fn content(&self) -> String {
        (0..self.buffer().area.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Gallery state with placeholder content and default settings
pub fn create_test_state() -> AppState {
    AppState::with_defaults()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
    }

    #[test]
    fn test_line_contains_and_cell_at() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("\nsecond"), term.area());

        assert!(term.line_contains(1, "second"));
        assert!(!term.line_contains(0, "second"));
        assert_eq!(term.cell_at(0, 1), Some("s"));
        assert_eq!(term.cell_at(50, 50), None);
    }
}
