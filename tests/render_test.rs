//! Render smoke tests against ratatui's TestBackend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use edux::app::{App, MainTab, ShellMode};
use edux::config::ShellConfig;
use edux::theme::ThemeStore;
use edux::ui;
use ratatui::{backend::TestBackend, Terminal};

fn app_with(config: ShellConfig) -> App {
    App::with_theme_store(config, ThemeStore::in_memory())
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn screen_text(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_landing_shows_actions() {
    let app = app_with(ShellConfig::new().with_initial_mode(ShellMode::Landing));
    let text = screen_text(&app, 100, 30);
    assert!(text.contains("Get Started"));
    assert!(text.contains("Enter App"));
}

#[test]
fn test_onboarding_screens() {
    let mut app = app_with(ShellConfig::new().with_initial_mode(ShellMode::Onboarding));
    let text = screen_text(&app, 100, 34);
    assert!(text.contains("Text-based Onboarding"));
    assert!(text.contains("Video-based Onboarding"));

    press(&mut app, KeyCode::Enter);
    let text = screen_text(&app, 100, 34);
    assert!(text.contains("Personal Information"));
    assert!(text.contains("Step 1 of 3"));
}

#[test]
fn test_video_onboarding_shows_interviewer() {
    let mut app = app_with(ShellConfig::new().with_initial_mode(ShellMode::Onboarding));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    let text = screen_text(&app, 100, 34);
    assert!(text.contains("Interviewer"));
}

#[test]
fn test_every_tab_renders() {
    let mut app = app_with(ShellConfig::new());
    let expected = [
        (MainTab::Dashboard, "Active Quests"),
        (MainTab::Courses, "Course Catalog"),
        (MainTab::SkillAnalysis, "Skill Levels"),
        (MainTab::Redemption, "Redeem Points"),
        (MainTab::Rewards, "Leaderboard"),
    ];
    for (tab, marker) in expected {
        app.select_tab(tab);
        let text = screen_text(&app, 120, 40);
        assert!(text.contains(marker), "{tab:?} should show {marker}");
    }
}

#[test]
fn test_course_views_render() {
    let mut app = app_with(ShellConfig::new());
    press(&mut app, KeyCode::Char('2'));

    press(&mut app, KeyCode::Enter);
    let text = screen_text(&app, 120, 40);
    assert!(text.contains("Galactic React Mastery"));
    assert!(text.contains("course-details"));

    press(&mut app, KeyCode::Enter);
    let text = screen_text(&app, 120, 40);
    assert!(text.contains("State & Props Management"));

    press(&mut app, KeyCode::Enter);
    let text = screen_text(&app, 120, 40);
    assert!(text.contains("Controlled Inputs"));
    assert!(text.contains("Mark quest complete"));
}

#[test]
fn test_completion_screen_lists_achievements() {
    let mut app = app_with(ShellConfig::new());
    press(&mut app, KeyCode::Char('2'));
    for _ in 0..4 {
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Char('f'));
    let text = screen_text(&app, 120, 40);
    assert!(text.contains("Congratulations"));
    assert!(text.contains("Course Master"));
}

#[test]
fn test_chat_renders_greeting_and_input() {
    let mut app = app_with(ShellConfig::new());
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('m'));
    let text = screen_text(&app, 120, 40);
    assert!(text.contains("Mentors"));

    press(&mut app, KeyCode::Enter);
    let text = screen_text(&app, 120, 40);
    assert!(text.contains("Message"));
    assert!(text.contains("Suggested"));
}

#[test]
fn test_status_replaces_footer_hints() {
    let mut app = app_with(ShellConfig::new());
    app.set_status("Quest complete");
    let text = screen_text(&app, 120, 40);
    assert!(text.contains("Quest complete"));
}

#[test]
fn test_small_terminal_every_mode() {
    for mode in [ShellMode::Landing, ShellMode::Onboarding, ShellMode::Main] {
        let mut app = app_with(ShellConfig::new().with_initial_mode(mode));
        screen_text(&app, 20, 6);
        press(&mut app, KeyCode::Enter);
        screen_text(&app, 20, 6);
    }
}
