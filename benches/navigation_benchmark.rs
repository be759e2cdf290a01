//! Benchmarks for view-stack operations, lock checks and frame rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use edux::app::{App, MainTab};
use edux::catalog::ProgressBook;
use edux::config::ShellConfig;
use edux::navigation::{is_unlocked, CourseView, ViewStack};
use edux::theme::ThemeStore;
use edux::ui;
use ratatui::{backend::TestBackend, Terminal};

/// Push `depth` descriptors, then pop them all
fn bench_stack_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_stack_push_pop");

    for depth in [4u32, 16, 64, 256].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, &depth| {
            b.iter(|| {
                let mut stack = ViewStack::new(CourseView::Catalog);
                for i in 0..depth {
                    stack.push(CourseView::CourseDetails { course_id: i });
                }
                while stack.pop().is_ok() {}
                black_box(stack.depth())
            });
        });
    }

    group.finish();
}

/// Lock evaluation for every quest in the seeded catalog
fn bench_lock_checks(c: &mut Criterion) {
    let book = ProgressBook::seeded();
    let targets: Vec<CourseView> = edux::catalog::courses::COURSES
        .iter()
        .flat_map(|course| {
            course.weeks.iter().flat_map(move |week| {
                week.quests.iter().map(move |quest| CourseView::QuestContent {
                    course_id: course.id,
                    week_id: week.id,
                    quest_id: quest.id,
                })
            })
        })
        .collect();

    c.bench_function("is_unlocked_all_quests", |b| {
        b.iter(|| {
            let unlocked = targets
                .iter()
                .filter(|target| is_unlocked(black_box(*target), &book))
                .count();
            black_box(unlocked)
        });
    });
}

/// Full-frame render of each main tab
fn bench_render_tabs(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_tab");
    let mut app = App::with_theme_store(ShellConfig::new(), ThemeStore::in_memory());
    let mut terminal = Terminal::new(TestBackend::new(160, 48)).expect("test backend");

    for tab in MainTab::ALL {
        app.select_tab(tab);
        group.bench_function(BenchmarkId::from_parameter(tab.title()), |b| {
            b.iter(|| {
                let completed = terminal.draw(|frame| ui::render(frame, &app));
                black_box(completed.is_ok())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stack_push_pop, bench_lock_checks, bench_render_tabs);

criterion_main!(benches);
