//! UI rendering for edux
//!
//! One entry point, [`render`], draws the whole frame from `&App`:
//! - Landing: logo card with the two entry actions
//! - Onboarding: the view on top of the onboarding stack
//! - Main: sidebar tabs, top bar, the active tab body and a footer
//!
//! Rendering never mutates state; everything shown is derived from the
//! shell and its two flow controllers.

mod courses;
mod dashboard;
mod helpers;
mod landing;
mod layout;
mod mentors;
mod onboarding;
mod pages;
mod theme;

pub use courses::breadcrumb;
pub use layout::{centered_rect, MainLayout};
pub use theme::Palette;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, MainTab, ShellMode};
use crate::navigation::{CourseView, ItemStatus};

use helpers::{key_hints, panel, styled};

/// Columns reserved for the theme and avatar in the top bar
const PROFILE_WIDTH: u16 = 22;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI for the current mode
pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme.theme());
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    match app.mode {
        ShellMode::Landing => landing::render_landing(frame, area, app, &palette),
        ShellMode::Onboarding => onboarding::render_onboarding(frame, area, app, &palette),
        ShellMode::Main => render_main(frame, area, app, &palette),
    }
}

fn render_main(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let layout = MainLayout::new(area);
    render_sidebar(frame, &layout, app, palette);
    render_top_bar(frame, layout.top_bar, app, palette);

    match app.active_tab {
        MainTab::Dashboard => dashboard::render_dashboard(frame, layout.body, app, palette),
        MainTab::Courses => courses::render_courses(frame, layout.body, app, palette),
        MainTab::SkillAnalysis => pages::render_skills(frame, layout.body, palette),
        MainTab::Redemption => pages::render_redemption(frame, layout.body, app, palette),
        MainTab::Rewards => pages::render_rewards(frame, layout.body, palette),
    }

    render_footer(frame, layout.footer, app, palette);
}

// ============================================================================
// Chrome
// ============================================================================

fn render_sidebar(frame: &mut Frame, layout: &MainLayout, app: &App, palette: &Palette) {
    let collapsed = layout.sidebar_collapsed();
    let block = panel(if collapsed { "" } else { "edux" }, palette, false);
    let inner = block.inner(layout.sidebar);
    frame.render_widget(block, layout.sidebar);

    let mut lines = Vec::with_capacity(MainTab::ALL.len() * 2);
    for tab in MainTab::ALL {
        let selected = tab == app.active_tab;
        let text = if collapsed {
            format!(" {}", tab.icon())
        } else {
            format!(" {} {} {}", tab.index() + 1, tab.icon(), tab.title())
        };
        lines.push(styled(text, palette.row(selected)));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_top_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = panel("", palette, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, profile_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(PROFILE_WIDTH)]).areas(inner);

    let mut title = vec![Span::styled(app.active_tab.title(), palette.title())];
    if app.active_tab == MainTab::Courses && app.courses.stack().can_pop() {
        title.push(Span::styled(format!("  {}", breadcrumb(app)), palette.dim()));
    }
    frame.render_widget(Paragraph::new(Line::from(title)), title_area);

    let theme_icon = if app.theme.is_dark() { "🌙 dark" } else { "☀ light" };
    let right = Line::from(vec![
        Span::styled(theme_icon, palette.dim()),
        Span::styled("  👤 Student ", palette.text()),
    ]);
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), profile_area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    if let Some(status) = app.status.as_deref() {
        frame.render_widget(
            Paragraph::new(styled(format!(" {status}"), palette.status(ItemStatus::Current))),
            area,
        );
        return;
    }
    frame.render_widget(Paragraph::new(footer_hints(app, palette)), area);
}

fn footer_hints<'a>(app: &App, palette: &Palette) -> Line<'a> {
    let hints: &[(&str, &str)] = match app.active_tab {
        MainTab::Dashboard => &[("1-5", "tabs"), ("r", "redo setup"), ("^T", "theme"), ("q", "quit")],
        MainTab::Courses => match app.courses.active_view() {
            CourseView::Catalog => &[
                ("←→", "category"),
                ("Enter", "open"),
                ("f", "finish"),
                ("m", "mentors"),
                ("q", "quit"),
            ],
            CourseView::CourseDetails { .. } | CourseView::WeekDetails { .. } => {
                &[("↑↓", "select"), ("Enter", "start"), ("Esc", "back")]
            }
            CourseView::QuestContent { .. } => &[("Enter", "complete"), ("Esc", "back")],
            CourseView::Completion { .. } => &[("Enter", "back to catalog")],
            CourseView::Mentors => &[("←→", "filter"), ("Enter", "chat"), ("Esc", "back")],
            CourseView::Chat { .. } => &[("Enter", "send"), ("Tab", "suggest"), ("Esc", "back")],
        },
        MainTab::Redemption => &[("↑↓", "browse"), ("1-5", "tabs"), ("q", "quit")],
        MainTab::SkillAnalysis | MainTab::Rewards => &[("1-5", "tabs"), ("^T", "theme"), ("q", "quit")],
    };
    key_hints(hints, palette)
}
