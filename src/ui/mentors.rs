//! Mentor list and chat views of the Courses tab.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Sender};
use crate::catalog::mentors::{self, MENTOR_FILTERS};
use crate::navigation::ItemStatus;
use crate::widgets::TextInputWidget;

use super::helpers::{blank, marker, panel, styled};
use super::layout::split_header;
use super::theme::Palette;

fn filter_label(index: usize) -> &'static str {
    match MENTOR_FILTERS.get(index).copied().flatten() {
        None => "All",
        Some(mentors::MentorKind::Execution) => "Execution",
        Some(mentors::MentorKind::Expert) => "Expert",
        Some(mentors::MentorKind::Counselor) => "Counselor",
        Some(mentors::MentorKind::Ai) => "AI",
    }
}

pub fn render_mentors(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = panel("Mentors", palette, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (filters_area, list_area) = split_header(inner, 2);
    let mut chips = Vec::with_capacity(MENTOR_FILTERS.len() * 2);
    for i in 0..MENTOR_FILTERS.len() {
        if i > 0 {
            chips.push(Span::styled(" │ ", palette.dim()));
        }
        let style = if i == app.cursors.mentor_filter {
            palette.selected()
        } else {
            palette.dim()
        };
        chips.push(Span::styled(filter_label(i), style));
    }
    frame.render_widget(Paragraph::new(Line::from(chips)), filters_area);

    let visible = app.visible_mentors();
    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new(styled("No mentors match this filter", palette.dim())),
            list_area,
        );
        return;
    }

    let mut lines = Vec::with_capacity(visible.len() * 3);
    for (i, mentor) in visible.iter().enumerate() {
        let selected = i == app.cursors.mentor;
        let presence = if mentor.online {
            Span::styled(" ● online", palette.status(ItemStatus::Completed))
        } else {
            Span::styled(" ○ away", palette.dim())
        };
        lines.push(Line::from(vec![
            Span::styled(marker(selected), palette.title()),
            Span::raw(format!("{} ", mentor.avatar)),
            Span::styled(mentor.name, palette.row(selected)),
            Span::styled(format!("  {}", mentor.title), palette.dim()),
            presence,
        ]));
        lines.push(styled(
            format!(
                "     ★ {:.1} · {} sessions · replies {} · {}",
                mentor.rating, mentor.sessions, mentor.response_time, mentor.price
            ),
            palette.dim(),
        ));
        lines.push(styled(
            format!("     {}: {}", mentor.specialty, mentor.expertise.join(", ")),
            palette.dim(),
        ));
    }
    frame.render_widget(Paragraph::new(lines), list_area);
}

pub fn render_chat(frame: &mut Frame, area: Rect, app: &App, mentor_id: u32, palette: &Palette) {
    let title = mentors::mentor(mentor_id)
        .map_or_else(|| "Chat".to_string(), |m| format!("{} {}", m.avatar, m.name));
    let block = panel(&title, palette, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(chat) = app.chat.as_ref() else {
        return;
    };

    let suggestion_rows = if chat.shows_suggestions() {
        chat.suggestions().len() as u16 + 1
    } else {
        0
    };
    let [transcript_area, suggestions_area, input_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(suggestion_rows),
        Constraint::Length(3),
    ])
    .areas(inner);

    let mut lines = Vec::new();
    for message in chat.messages() {
        let (who, style) = match message.sender {
            Sender::Student => ("You", palette.title()),
            Sender::Mentor => ("Mentor", palette.status(ItemStatus::Completed)),
        };
        lines.push(Line::from(vec![
            Span::styled(who, style),
            Span::styled(format!("  {}", message.time_label()), palette.dim()),
        ]));
        for text_line in message.text.lines() {
            lines.push(styled(text_line.to_string(), palette.text()));
        }
        lines.push(blank());
    }
    // Keep the newest messages visible.
    let overflow = lines.len().saturating_sub(usize::from(transcript_area.height));
    let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        transcript_area,
    );

    if suggestion_rows > 0 {
        let (header, list) = split_header(suggestions_area, 1);
        frame.render_widget(
            Paragraph::new(styled("Suggested (Tab to use):", palette.dim())),
            header,
        );
        let rows: Vec<Line> = chat
            .suggestions()
            .iter()
            .map(|s| styled(format!("  • {s}"), palette.dim()))
            .collect();
        frame.render_widget(Paragraph::new(rows), list);
    }

    let input = TextInputWidget::new(&app.input)
        .block(panel("Message", palette, true))
        .placeholder("Type your message…", palette.dim())
        .style(palette.text())
        .cursor_style(palette.cursor())
        .focused(true);
    frame.render_widget(input, input_area);
}
