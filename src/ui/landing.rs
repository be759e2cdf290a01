//! Landing screen: logo, pitch and the two entry actions.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::{App, LANDING_ACTIONS};

use super::helpers::{blank, key_hints, panel, styled};
use super::layout::centered_rect;
use super::theme::Palette;

const LOGO: [&str; 5] = [
    "███████╗██████╗ ██╗   ██╗██╗  ██╗",
    "██╔════╝██╔══██╗██║   ██║╚██╗██╔╝",
    "█████╗  ██║  ██║██║   ██║ ╚███╔╝ ",
    "██╔══╝  ██║  ██║██║   ██║ ██╔██╗ ",
    "███████╗██████╔╝╚██████╔╝██╔╝ ██╗",
];

const FEATURES: [(&str, &str); 3] = [
    ("🎯", "Quest-based courses that unlock week by week"),
    ("🤝", "Mentors and an AI assistant on call"),
    ("🏆", "XP, badges and rewards for every step"),
];

pub fn render_landing(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let card = centered_rect(72, 22, area);
    let block = panel("", palette, true);
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let [logo_area, pitch_area, actions_area, hints_area] = Layout::vertical([
        Constraint::Length(LOGO.len() as u16 + 1),
        Constraint::Min(6),
        Constraint::Length(LANDING_ACTIONS.len() as u16 + 1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let logo: Vec<Line> = LOGO
        .iter()
        .map(|row| styled(*row, palette.title()))
        .collect();
    frame.render_widget(Paragraph::new(logo).alignment(Alignment::Center), logo_area);

    let mut pitch = vec![
        styled("Learn by doing. Level up as you go.", palette.text()),
        blank(),
    ];
    for (icon, text) in FEATURES {
        pitch.push(Line::from(vec![
            Span::raw(format!("{icon}  ")),
            Span::styled(text, palette.dim()),
        ]));
    }
    frame.render_widget(
        Paragraph::new(pitch)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        pitch_area,
    );

    let actions: Vec<Line> = LANDING_ACTIONS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let selected = i == app.cursors.landing;
            let text = if selected {
                format!("[ {label} ]")
            } else {
                format!("  {label}  ")
            };
            styled(text, palette.row(selected))
        })
        .collect();
    frame.render_widget(Paragraph::new(actions).alignment(Alignment::Center), actions_area);

    let hints = key_hints(&[("↑↓", "choose"), ("Enter", "go"), ("q", "quit")], palette);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), hints_area);
}
