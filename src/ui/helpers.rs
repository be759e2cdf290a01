//! Helper functions for UI rendering

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};
use unicode_width::UnicodeWidthStr;

use crate::navigation::ItemStatus;

use super::theme::Palette;

/// Rounded panel with a padded title.
pub fn panel<'a>(title: &str, palette: &Palette, focused: bool) -> Block<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border(focused))
        .style(palette.base());
    if title.is_empty() {
        block
    } else {
        block.title(Span::styled(format!(" {title} "), palette.title()))
    }
}

/// Text bar like `█████░░░░░`.
pub fn progress_bar(percent: u16, width: usize) -> String {
    let percent = usize::from(percent.min(100));
    let filled = (percent * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled.min(width)))
}

pub fn status_icon(status: ItemStatus) -> &'static str {
    match status {
        ItemStatus::Completed => "✓",
        ItemStatus::Current => "▶",
        ItemStatus::Locked => "🔒",
    }
}

/// Truncate to `max` display columns, adding an ellipsis when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// `label: value` line with a dim label.
pub fn labeled<'a>(label: &str, value: String, palette: &Palette) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), palette.dim()),
        Span::styled(value, palette.text()),
    ])
}

/// Key hint line: `key` in accent, description dim, pairs separated by spaces.
pub fn key_hints<'a>(hints: &[(&str, &str)], palette: &Palette) -> Line<'a> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, description)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key.to_string(), palette.title()));
        spans.push(Span::styled(format!(" {description}"), palette.dim()));
    }
    Line::from(spans)
}

/// Row marker for list items.
pub fn marker(selected: bool) -> &'static str {
    if selected {
        "› "
    } else {
        "  "
    }
}

pub fn blank<'a>() -> Line<'a> {
    Line::from("")
}

pub fn styled<'a>(text: impl Into<String>, style: Style) -> Line<'a> {
    Line::from(Span::styled(text.into(), style))
}
