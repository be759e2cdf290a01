//! Courses tab: catalog, course details, week details, quest content and
//! the completion screen. Mentor views live in [`super::mentors`].

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::catalog::courses::{self, CATEGORIES};
use crate::catalog::pages::completion_achievements;
use crate::navigation::{CourseProgress, CourseView, ItemStatus};

use super::helpers::{blank, labeled, marker, panel, progress_bar, status_icon, styled, truncate};
use super::layout::split_header;
use super::mentors;
use super::theme::Palette;

/// Render whichever course view is on top of the stack.
pub fn render_courses(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    match *app.courses.active_view() {
        CourseView::Catalog => render_catalog(frame, area, app, palette),
        CourseView::CourseDetails { course_id } => {
            render_course_details(frame, area, app, course_id, palette)
        }
        CourseView::WeekDetails { course_id, week_id } => {
            render_week_details(frame, area, app, course_id, week_id, palette)
        }
        CourseView::QuestContent {
            course_id,
            week_id,
            quest_id,
        } => render_quest(frame, area, course_id, week_id, quest_id, palette),
        CourseView::Completion { course_id } => {
            render_completion(frame, area, course_id, palette)
        }
        CourseView::Mentors => mentors::render_mentors(frame, area, app, palette),
        CourseView::Chat { mentor_id, .. } => {
            mentors::render_chat(frame, area, app, mentor_id, palette)
        }
    }
}

/// Breadcrumb built from the stack, e.g. `catalog › course-details`.
pub fn breadcrumb(app: &App) -> String {
    app.courses.stack().kinds().join(" › ")
}

fn missing(frame: &mut Frame, area: Rect, what: &str, palette: &Palette) {
    frame.render_widget(
        Paragraph::new(styled(format!("{what} not found"), palette.dim()))
            .block(panel("Courses", palette, false)),
        area,
    );
}

// ============================================================================
// Catalog
// ============================================================================

fn render_catalog(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = panel("Course Catalog", palette, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (tabs_area, list_area) = split_header(inner, 2);
    let mut tabs = Vec::with_capacity(CATEGORIES.len() * 2);
    for (i, category) in CATEGORIES.iter().enumerate() {
        if i > 0 {
            tabs.push(Span::styled(" │ ", palette.dim()));
        }
        let selected = i == app.cursors.category;
        tabs.push(Span::styled(*category, if selected { palette.selected() } else { palette.dim() }));
    }
    frame.render_widget(Paragraph::new(Line::from(tabs)), tabs_area);

    let progress = app.courses.progress();
    let visible = app.visible_courses();
    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new(styled("No courses in this category yet", palette.dim())),
            list_area,
        );
        return;
    }

    let title_width = usize::from(list_area.width.saturating_sub(24)).max(10);
    let mut lines = Vec::with_capacity(visible.len() * 3);
    for (i, course) in visible.iter().enumerate() {
        let selected = i == app.cursors.course;
        let percent = progress.course_percent(course.id);
        let finished = progress.course_finished(course.id);
        let mut title = vec![
            Span::styled(marker(selected), palette.title()),
            Span::styled(truncate(course.title, title_width), palette.row(selected)),
        ];
        if finished {
            title.push(Span::styled("  ✓ ready to finish", palette.status(ItemStatus::Completed)));
        }
        lines.push(Line::from(title));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(
                format!(
                    "{} · {} · {} · {}",
                    course.category,
                    course.difficulty.label(),
                    course.duration,
                    course.instructor
                ),
                palette.dim(),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(progress_bar(percent, 20), palette.title()),
            Span::styled(format!(" {percent}%"), palette.dim()),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), list_area);
}

// ============================================================================
// Course and week details
// ============================================================================

fn render_course_details(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    course_id: u32,
    palette: &Palette,
) {
    let Some(course) = courses::course(course_id) else {
        missing(frame, area, "Course", palette);
        return;
    };
    let progress = app.courses.progress();
    let block = panel(course.title, palette, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (header, list_area) = split_header(inner, 5);
    let percent = progress.course_percent(course_id);
    let summary = vec![
        styled(course.description, palette.text()),
        labeled("Instructor", course.instructor.to_string(), palette),
        labeled(
            "Quests",
            format!(
                "{} of {} complete · {} XP total",
                progress.completed_quests(course_id),
                course.total_quests(),
                course.total_xp()
            ),
            palette,
        ),
        Line::from(vec![
            Span::styled(progress_bar(percent, 30), palette.title()),
            Span::styled(format!(" {percent}%"), palette.dim()),
        ]),
    ];
    frame.render_widget(Paragraph::new(summary).wrap(Wrap { trim: true }), header);

    let mut lines = Vec::with_capacity(course.weeks.len() * 2);
    for (i, week) in course.weeks.iter().enumerate() {
        let selected = i == app.cursors.week;
        let status = progress.week_status(course_id, week.id).unwrap_or(ItemStatus::Locked);
        let row_style = if status.is_locked() {
            palette.status(status)
        } else {
            palette.row(selected)
        };
        lines.push(Line::from(vec![
            Span::styled(marker(selected), palette.title()),
            Span::styled(format!("{} ", status_icon(status)), palette.status(status)),
            Span::styled(format!("Week {}: {}", week.id, week.title), row_style),
        ]));
        lines.push(styled(
            format!(
                "     {} · {} · {}% · {}",
                week.estimated_time,
                status.label(),
                progress.week_percent(course_id, week.id),
                week.description
            ),
            palette.dim(),
        ));
    }
    frame.render_widget(Paragraph::new(lines), list_area);
}

fn render_week_details(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    course_id: u32,
    week_id: u32,
    palette: &Palette,
) {
    let Some(week) = courses::week(course_id, week_id) else {
        missing(frame, area, "Week", palette);
        return;
    };
    let progress = app.courses.progress();
    let block = panel(&format!("Week {}: {}", week.id, week.title), palette, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (header, list_area) = split_header(inner, 3);
    let summary = vec![
        styled(week.description, palette.text()),
        labeled(
            "Progress",
            format!(
                "{}% · {} XP available · {}",
                progress.week_percent(course_id, week_id),
                week.total_xp(),
                week.estimated_time
            ),
            palette,
        ),
    ];
    frame.render_widget(Paragraph::new(summary).wrap(Wrap { trim: true }), header);

    let mut lines = Vec::with_capacity(week.quests.len() * 2);
    for (i, quest) in week.quests.iter().enumerate() {
        let selected = i == app.cursors.quest;
        let status = progress
            .quest_status(course_id, week_id, quest.id)
            .unwrap_or(ItemStatus::Locked);
        let row_style = if status.is_locked() {
            palette.status(status)
        } else {
            palette.row(selected)
        };
        lines.push(Line::from(vec![
            Span::styled(marker(selected), palette.title()),
            Span::styled(format!("{} ", status_icon(status)), palette.status(status)),
            Span::raw(format!("{} ", quest.kind.icon())),
            Span::styled(quest.title, row_style),
            Span::styled(format!("  +{} XP", quest.xp), palette.dim()),
        ]));
        lines.push(styled(
            format!(
                "       {} · {} · {}",
                quest.kind.label(),
                quest.estimated_time,
                quest.description
            ),
            palette.dim(),
        ));
    }
    frame.render_widget(Paragraph::new(lines), list_area);
}

// ============================================================================
// Quest content and completion
// ============================================================================

fn render_quest(
    frame: &mut Frame,
    area: Rect,
    course_id: u32,
    week_id: u32,
    quest_id: u32,
    palette: &Palette,
) {
    let Some(quest) = courses::quest(course_id, week_id, quest_id) else {
        missing(frame, area, "Quest", palette);
        return;
    };
    let block = panel(&format!("{} {}", quest.kind.icon(), quest.title), palette, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(quest.kind.label(), palette.title()),
            Span::styled(
                format!(" · {} · +{} XP", quest.estimated_time, quest.xp),
                palette.dim(),
            ),
        ]),
        blank(),
        styled(quest.description, palette.text()),
        blank(),
    ];
    for paragraph in quest.body.split("\n\n") {
        lines.push(styled(paragraph.trim().to_string(), palette.text()));
        lines.push(blank());
    }
    if let Some(code) = quest.code {
        for code_line in code.lines() {
            lines.push(Line::from(vec![
                Span::styled("│ ", palette.dim()),
                Span::styled(code_line.to_string(), palette.title()),
            ]));
        }
        lines.push(blank());
    }
    if !quest.rewards.is_empty() {
        lines.push(labeled("Rewards", quest.rewards.join(", "), palette));
    }

    let [content_area, action_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), content_area);
    frame.render_widget(
        Paragraph::new(styled("[ Enter: Mark quest complete ]", palette.selected()))
            .alignment(Alignment::Center),
        action_area,
    );
}

fn render_completion(frame: &mut Frame, area: Rect, course_id: u32, palette: &Palette) {
    let Some(course) = courses::course(course_id) else {
        missing(frame, area, "Course", palette);
        return;
    };
    let block = panel("Course Complete", palette, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        blank(),
        styled("🏆", palette.title()),
        styled("Congratulations!", palette.title()),
        styled(format!("You completed {}", course.title), palette.text()),
        blank(),
    ];
    for (title, detail) in
        completion_achievements(course.total_xp(), course.total_quests(), course.weeks.len())
    {
        lines.push(Line::from(vec![
            Span::styled(title, palette.status(ItemStatus::Completed)),
            Span::styled(format!("  {detail}"), palette.dim()),
        ]));
    }
    lines.push(blank());
    lines.push(styled("[ Enter: Back to catalog ]", palette.selected()));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
