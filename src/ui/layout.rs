//! Screen regions.

use ratatui::layout::{Constraint, Layout, Rect};

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 24;

/// Below this width the sidebar collapses to icons
pub const NARROW_WIDTH: u16 = 70;

const COLLAPSED_SIDEBAR_WIDTH: u16 = 6;

/// Regions of the main-mode frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub sidebar: Rect,
    pub top_bar: Rect,
    pub body: Rect,
    pub footer: Rect,
}

impl MainLayout {
    pub fn new(area: Rect) -> Self {
        let sidebar_width = if area.width < NARROW_WIDTH {
            COLLAPSED_SIDEBAR_WIDTH
        } else {
            SIDEBAR_WIDTH
        };
        let [sidebar, content] =
            Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).areas(area);
        let [top_bar, body, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(content);
        Self {
            sidebar,
            top_bar,
            body,
            footer,
        }
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar.width < SIDEBAR_WIDTH
    }
}

/// A `width` x `height` rect centred in `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Split `area` into a header of `header` rows and the rest.
pub fn split_header(area: Rect, header: u16) -> (Rect, Rect) {
    let [top, rest] =
        Layout::vertical([Constraint::Length(header), Constraint::Min(0)]).areas(area);
    (top, rest)
}
