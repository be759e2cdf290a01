//! Onboarding screens: method selection, the method steps and completion.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::catalog::onboarding::{method_info, steps_for, VIDEO_AI_RESPONSES};
use crate::navigation::{OnboardingMethod, OnboardingView};
use crate::widgets::TextInputWidget;

use super::helpers::{blank, key_hints, marker, panel, styled};
use super::layout::{centered_rect, split_header};
use super::theme::Palette;

pub fn render_onboarding(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let card = centered_rect(84, 30, area);
    match *app.onboarding.active_view() {
        OnboardingView::Selection => render_selection(frame, card, app, palette),
        OnboardingView::Method(method) => render_method(frame, card, app, method, palette),
        OnboardingView::Complete => render_complete(frame, card, app, palette),
    }
}

fn render_selection(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = panel("Choose how to get started", palette, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        styled("Pick an onboarding method to create your student profile.", palette.dim()),
        blank(),
    ];
    for (i, method) in OnboardingMethod::ALL.iter().enumerate() {
        let info = method_info(*method);
        let selected = i == app.cursors.method;
        lines.push(Line::from(vec![
            Span::styled(marker(selected), palette.title()),
            Span::raw(format!("{} ", info.icon)),
            Span::styled(info.title, palette.row(selected)),
        ]));
        lines.push(styled(format!("     {}", info.description), palette.dim()));
        lines.push(blank());
    }
    lines.push(key_hints(
        &[("↑↓", "choose"), ("Enter", "start"), ("Esc", "back")],
        palette,
    ));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_method(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    method: OnboardingMethod,
    palette: &Palette,
) {
    let info = method_info(method);
    let block = panel(&format!("{} {}", info.icon, info.title), palette, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(session) = app.onboarding.session() else {
        return;
    };
    let steps = steps_for(method);
    let Some(step) = steps.get(session.index()) else {
        return;
    };

    let (header, body) = split_header(inner, 5);
    let [title_area, gauge_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(2)]).areas(header);

    let title = vec![
        styled(step.title, palette.title()),
        styled(step.subtitle, palette.dim()),
    ];
    frame.render_widget(Paragraph::new(title).wrap(Wrap { trim: true }), title_area);

    let percent = session.progress_percent();
    let gauge = Gauge::default()
        .gauge_style(palette.title())
        .percent(percent)
        .label(format!(
            "Step {} of {} · {percent}%",
            session.index() + 1,
            session.len()
        ));
    frame.render_widget(
        gauge,
        Rect {
            height: gauge_area.height.min(1),
            ..gauge_area
        },
    );

    // Video interviews show the interviewer's prompt above the answer.
    let (prompt_area, fields_area) = if method == OnboardingMethod::Video {
        split_header(body, 4)
    } else {
        (Rect { height: 0, ..body }, body)
    };
    if prompt_area.height > 0 {
        let response = VIDEO_AI_RESPONSES[session.index().min(VIDEO_AI_RESPONSES.len() - 1)];
        let prompt = Paragraph::new(Line::from(vec![
            Span::styled("🤖 Interviewer: ", palette.title()),
            Span::styled(response, palette.text()),
        ]))
        .block(panel("", palette, false))
        .wrap(Wrap { trim: true });
        frame.render_widget(prompt, prompt_area);
    }

    let mut constraints: Vec<Constraint> = step.fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));
    let rows = Layout::vertical(constraints).split(fields_area);

    for (i, field) in step.fields.iter().enumerate() {
        let focused = i == app.cursors.field;
        let block = panel(field.label, palette, focused);
        if focused {
            let widget = TextInputWidget::new(&app.input)
                .block(block)
                .placeholder(field.placeholder, palette.dim())
                .style(palette.text())
                .cursor_style(palette.cursor())
                .focused(true);
            frame.render_widget(widget, rows[i]);
        } else {
            let answer = session.answer(i);
            let line = if answer.is_empty() {
                styled(field.placeholder, palette.dim())
            } else {
                styled(answer.to_string(), palette.text())
            };
            frame.render_widget(Paragraph::new(line).block(block), rows[i]);
        }
    }

    let next_label = if session.is_last() { "finish" } else { "next" };
    let hints = key_hints(
        &[("Tab", "field"), ("Enter", next_label), ("Esc", "previous")],
        palette,
    );
    if let Some(hint_area) = rows.last() {
        frame.render_widget(Paragraph::new(hints), *hint_area);
    }
}

fn render_complete(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = panel("You're all set", palette, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![blank(), styled("🎉 Welcome aboard!", palette.title()), blank()];
    if let Some(method) = app.onboarding.selection() {
        let info = method_info(method);
        lines.push(styled(
            format!("{} {}", info.icon, info.completion_title),
            palette.text(),
        ));
        lines.push(styled(info.completion_description, palette.dim()));
        lines.push(blank());
    }
    lines.push(styled(
        "Your student profile is ready. Courses, mentors and rewards await.",
        palette.text(),
    ));
    lines.push(blank());
    lines.push(key_hints(&[("Enter", "continue to the app")], palette));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
