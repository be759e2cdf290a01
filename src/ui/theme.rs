//! Colour palettes for the light and dark themes.
//!
//! Components pick colours here and nowhere else; the theme flag never
//! changes layout.

use ratatui::style::{Color, Modifier, Style};

use crate::navigation::ItemStatus;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    /// Secondary text
    pub muted: Color,
    /// Brand colour for titles and focus
    pub accent: Color,
    pub border: Color,
    /// Background of the selected row
    pub highlight_bg: Color,
    pub success: Color,
    pub warning: Color,
    pub locked: Color,
    pub danger: Color,
}

// ============================================================================
// Palettes
// ============================================================================

const LIGHT: Palette = Palette {
    bg: Color::Rgb(248, 250, 252),
    fg: Color::Rgb(15, 23, 42),
    muted: Color::Rgb(100, 116, 139),
    accent: Color::Rgb(79, 70, 229),
    border: Color::Rgb(203, 213, 225),
    highlight_bg: Color::Rgb(224, 231, 255),
    success: Color::Rgb(5, 150, 105),
    warning: Color::Rgb(217, 119, 6),
    locked: Color::Rgb(148, 163, 184),
    danger: Color::Rgb(220, 38, 38),
};

const DARK: Palette = Palette {
    bg: Color::Rgb(15, 23, 42),
    fg: Color::Rgb(226, 232, 240),
    muted: Color::Rgb(148, 163, 184),
    accent: Color::Rgb(129, 140, 248),
    border: Color::Rgb(51, 65, 85),
    highlight_bg: Color::Rgb(49, 46, 129),
    success: Color::Rgb(52, 211, 153),
    warning: Color::Rgb(251, 191, 36),
    locked: Color::Rgb(100, 116, 139),
    danger: Color::Rgb(248, 113, 113),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    /// Screen background and default text
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a row, highlighted when selected
    pub fn row(&self, selected: bool) -> Style {
        if selected {
            self.selected()
        } else {
            self.text()
        }
    }

    pub fn cursor(&self) -> Style {
        Style::default().fg(self.bg).bg(self.accent)
    }

    pub fn status(&self, status: ItemStatus) -> Style {
        match status {
            ItemStatus::Completed => Style::default().fg(self.success),
            ItemStatus::Current => Style::default().fg(self.warning).add_modifier(Modifier::BOLD),
            ItemStatus::Locked => Style::default().fg(self.locked),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Palette::for_theme(Theme::Light), Palette::for_theme(Theme::Dark));
    }

    #[test]
    fn test_base_uses_background() {
        let palette = Palette::for_theme(Theme::Dark);
        assert_eq!(palette.base().bg, Some(palette.bg));
    }
}
