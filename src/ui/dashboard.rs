//! Dashboard tab.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::catalog::courses;
use crate::catalog::onboarding::method_info;
use crate::catalog::pages::{DASHBOARD_BADGES, DASHBOARD_QUESTS};

use super::helpers::{blank, labeled, panel, progress_bar, styled};
use super::theme::Palette;

pub fn render_dashboard(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let [welcome_area, lower] =
        Layout::vertical([Constraint::Length(7), Constraint::Min(0)]).areas(area);
    let [quests_area, badges_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(lower);

    render_welcome(frame, welcome_area, app, palette);
    render_quests(frame, quests_area, palette);
    render_badges(frame, badges_area, palette);
}

fn render_welcome(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let progress = app.courses.progress();
    let onboarding = app
        .onboarding_method
        .map_or("not completed".to_string(), |m| method_info(m).title.to_string());

    let mut lines = vec![
        styled("Welcome back, learner! 👋", palette.title()),
        Line::from(vec![
            Span::styled("XP earned ", palette.dim()),
            Span::styled(progress.earned_xp().to_string(), palette.text()),
            Span::styled("   Quests done ", palette.dim()),
            Span::styled(progress.total_completed().to_string(), palette.text()),
            Span::styled("   Courses finished ", palette.dim()),
            Span::styled(app.courses_completed.len().to_string(), palette.text()),
        ]),
        labeled("Onboarding", onboarding, palette),
    ];
    if let Some(last) = app.courses_completed.last().and_then(|id| courses::course(*id)) {
        lines.push(labeled("Latest completion", last.title.to_string(), palette));
    }
    lines.push(styled("Press r to redo setup", palette.dim()));

    frame.render_widget(
        Paragraph::new(lines)
            .block(panel("Dashboard", palette, false))
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_quests(frame: &mut Frame, area: Rect, palette: &Palette) {
    let bar_width = usize::from(area.width.saturating_sub(16)).clamp(4, 30);
    let mut lines = Vec::new();
    for quest in DASHBOARD_QUESTS {
        lines.push(Line::from(vec![
            Span::styled(quest.title, palette.text()),
            Span::styled(format!("  {}", quest.kind), palette.dim()),
        ]));
        let style = if quest.progress >= 100 {
            palette.status(crate::navigation::ItemStatus::Completed)
        } else {
            palette.title()
        };
        lines.push(Line::from(vec![
            Span::styled(progress_bar(quest.progress, bar_width), style),
            Span::styled(format!(" {:>3}%", quest.progress), palette.dim()),
        ]));
        lines.push(styled(format!("Reward: {}", quest.reward), palette.dim()));
        lines.push(blank());
    }
    frame.render_widget(
        Paragraph::new(lines).block(panel("Active Quests", palette, false)),
        area,
    );
}

fn render_badges(frame: &mut Frame, area: Rect, palette: &Palette) {
    let earned = DASHBOARD_BADGES.iter().filter(|b| b.earned).count();
    let mut lines = vec![
        styled(
            format!("{earned} of {} earned", DASHBOARD_BADGES.len()),
            palette.dim(),
        ),
        blank(),
    ];
    for badge in DASHBOARD_BADGES {
        let style = if badge.earned {
            palette.text()
        } else {
            palette.status(crate::navigation::ItemStatus::Locked)
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", badge.icon)),
            Span::styled(badge.name, style),
        ]));
    }
    frame.render_widget(
        Paragraph::new(lines).block(panel("Badges", palette, false)),
        area,
    );
}
