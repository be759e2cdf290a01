//! Skill analysis, redemption store and rewards tabs.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::catalog::pages::{
    average_skill_level, improvement_areas, strength_areas, unlocked_points, ACHIEVEMENTS,
    LEADERBOARD, REDEEMABLE, REDEMPTION_HISTORY, SKILLS,
};
use crate::navigation::ItemStatus;

use super::helpers::{blank, marker, panel, progress_bar, styled, truncate};
use super::theme::Palette;

// ============================================================================
// Skill analysis
// ============================================================================

pub fn render_skills(frame: &mut Frame, area: Rect, palette: &Palette) {
    let [levels_area, summary_area] =
        Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)]).areas(area);

    let bar_width = usize::from(levels_area.width.saturating_sub(34)).clamp(4, 24);
    let mut lines = vec![
        styled(format!("Average level {}%", average_skill_level()), palette.title()),
        blank(),
    ];
    for skill in SKILLS {
        let change_style = if skill.change >= 0 {
            palette.status(ItemStatus::Completed)
        } else {
            ratatui::style::Style::default().fg(palette.danger)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<17}", skill.name), palette.text()),
            Span::styled(progress_bar(skill.level, bar_width), palette.title()),
            Span::styled(format!(" {:>3}% ", skill.level), palette.dim()),
            Span::styled(format!("{:+}", skill.change), change_style),
        ]));
    }
    frame.render_widget(
        Paragraph::new(lines).block(panel("Skill Levels", palette, false)),
        levels_area,
    );

    let mut summary = vec![styled("Strengths", palette.title())];
    for skill in strength_areas() {
        summary.push(styled(
            format!("  ✓ {} ({}%)", skill.name, skill.level),
            palette.status(ItemStatus::Completed),
        ));
    }
    summary.push(blank());
    summary.push(styled("Focus next", palette.title()));
    for skill in improvement_areas() {
        summary.push(styled(
            format!("  ▶ {} · {}", skill.name, skill.category),
            palette.status(ItemStatus::Current),
        ));
    }
    frame.render_widget(
        Paragraph::new(summary)
            .block(panel("Summary", palette, false))
            .wrap(Wrap { trim: true }),
        summary_area,
    );
}

// ============================================================================
// Redemption
// ============================================================================

pub fn render_redemption(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let [store_area, history_area] =
        Layout::vertical([Constraint::Min(10), Constraint::Length(6)]).areas(area);

    let title_width = usize::from(store_area.width.saturating_sub(30)).max(8);
    let mut lines = Vec::with_capacity(REDEEMABLE.len());
    for (i, item) in REDEEMABLE.iter().enumerate() {
        let selected = i == app.cursors.reward;
        let row_style = if item.available {
            palette.row(selected)
        } else {
            palette.status(ItemStatus::Locked)
        };
        let mut spans = vec![
            Span::styled(marker(selected), palette.title()),
            Span::styled(format!("{:<w$}", truncate(item.title, title_width), w = title_width), row_style),
            Span::styled(format!(" {:<10}", item.category), palette.dim()),
        ];
        if item.discount > 0 {
            spans.push(Span::styled(
                format!(" {} pts (-{}%)", item.discounted_points(), item.discount),
                palette.status(ItemStatus::Current),
            ));
        } else {
            spans.push(Span::styled(format!(" {} pts", item.points), palette.text()));
        }
        if !item.available {
            spans.push(Span::styled(" sold out", palette.dim()));
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(
        Paragraph::new(lines).block(panel("Redeem Points", palette, true)),
        store_area,
    );

    let history: Vec<Line> = REDEMPTION_HISTORY
        .iter()
        .map(|r| {
            Line::from(vec![
                Span::styled(format!("{}  ", r.date), palette.dim()),
                Span::styled(r.item, palette.text()),
                Span::styled(format!("  {} pts  {}", r.points, r.status), palette.dim()),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(history).block(panel("History", palette, false)),
        history_area,
    );
}

// ============================================================================
// Rewards
// ============================================================================

pub fn render_rewards(frame: &mut Frame, area: Rect, palette: &Palette) {
    let [achievements_area, board_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(area);

    let bar_width = usize::from(achievements_area.width.saturating_sub(20)).clamp(4, 20);
    let mut lines = vec![
        styled(format!("{} points unlocked", unlocked_points()), palette.title()),
        blank(),
    ];
    for achievement in ACHIEVEMENTS {
        let status = if achievement.unlocked {
            ItemStatus::Completed
        } else {
            ItemStatus::Locked
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", super::helpers::status_icon(status)), palette.status(status)),
            Span::styled(achievement.title, palette.text()),
            Span::styled(format!("  +{}", achievement.points), palette.dim()),
        ]));
        lines.push(Line::from(vec![
            Span::styled(format!("   {} ", achievement.description), palette.dim()),
        ]));
        if !achievement.unlocked {
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(progress_bar(achievement.progress, bar_width), palette.title()),
                Span::styled(format!(" {}%", achievement.progress), palette.dim()),
            ]));
        }
    }
    frame.render_widget(
        Paragraph::new(lines)
            .block(panel("Achievements", palette, false))
            .wrap(Wrap { trim: false }),
        achievements_area,
    );

    let board: Vec<Line> = LEADERBOARD
        .iter()
        .map(|entry| {
            let style = if entry.is_user {
                palette.selected()
            } else {
                palette.text()
            };
            Line::from(vec![
                Span::styled(format!("#{} ", entry.rank), palette.dim()),
                Span::styled(format!("{:<16}", entry.name), style),
                Span::styled(format!("{:>6}", entry.points), palette.dim()),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(board).block(panel("Leaderboard", palette, false)),
        board_area,
    );
}
