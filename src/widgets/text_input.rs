use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Single-line text input with a character-indexed cursor.
///
/// Used for onboarding answers and the chat composer. The cursor counts
/// `char`s, not bytes, so multi-byte input edits correctly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    content: String,
    /// Cursor position in chars
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map_or(self.content.len(), |(i, _)| i)
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (Backspace)
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.content.remove(at);
    }

    /// Delete the character under the cursor (Delete)
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Replace the content, cursor at the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Take the content, leaving the input empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Visible slice for a field `width` columns wide, plus the cursor column.
    ///
    /// Scrolls so the cursor stays in view, measuring display width rather
    /// than chars.
    pub fn visible_window(&self, width: usize) -> (String, usize) {
        if width == 0 {
            return (String::new(), 0);
        }
        let chars: Vec<char> = self.content.chars().collect();
        let cursor = self.cursor.min(chars.len());

        // Walk left from the cursor until the window is full
        let mut start = cursor;
        let mut used = 1; // cursor cell
        while start > 0 {
            let w = chars[start - 1].width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            start -= 1;
        }

        let mut visible = String::new();
        let mut cols = 0;
        let mut cursor_col = 0;
        for (i, c) in chars.iter().enumerate().skip(start) {
            if i == cursor {
                cursor_col = cols;
            }
            let w = c.width().unwrap_or(0);
            if cols + w > width {
                break;
            }
            visible.push(*c);
            cols += w;
        }
        if cursor == chars.len() {
            cursor_col = cols.min(width.saturating_sub(1));
        }
        (visible, cursor_col)
    }
}

/// Renders a [`TextInput`], with a placeholder when empty.
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    block: Option<Block<'a>>,
    placeholder: &'a str,
    style: Style,
    placeholder_style: Style,
    cursor_style: Style,
    focused: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            block: None,
            placeholder: "",
            style: Style::default(),
            placeholder_style: Style::default(),
            cursor_style: Style::default(),
            focused: false,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn placeholder(mut self, text: &'a str, style: Style) -> Self {
        self.placeholder = text;
        self.placeholder_style = style;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn cursor_style(mut self, style: Style) -> Self {
        self.cursor_style = style;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let width = inner.width as usize;
        if self.input.is_empty() {
            buf.set_stringn(inner.x, inner.y, self.placeholder, width, self.placeholder_style);
            if self.focused {
                buf.set_style(Rect::new(inner.x, inner.y, 1, 1), self.cursor_style);
            }
            return;
        }

        let (visible, cursor_col) = self.input.visible_window(width);
        buf.set_stringn(inner.x, inner.y, &visible, width, self.style);
        if self.focused {
            let x = inner.x + (cursor_col as u16).min(inner.width - 1);
            buf.set_style(Rect::new(x, inner.y, 1, 1), self.cursor_style);
        }
    }
}
