//! Type definitions for the application shell.
//!
//! - [`ShellMode`] - top-level mode
//! - [`MainTab`] - which peer tab is shown in main mode
//! - [`Cursors`] - per-screen list selection
//! - [`AppMessage`] - flow completion events routed back to the shell

use crate::navigation::OnboardingMethod;

/// Top-level mode of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShellMode {
    Landing,
    Onboarding,
    #[default]
    Main,
}

impl ShellMode {
    /// Parse `landing`, `onboarding` or `main`, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "landing" => Some(ShellMode::Landing),
            "onboarding" => Some(ShellMode::Onboarding),
            "main" => Some(ShellMode::Main),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShellMode::Landing => "landing",
            ShellMode::Onboarding => "onboarding",
            ShellMode::Main => "main",
        }
    }
}

/// Peer tabs of the main mode, in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MainTab {
    #[default]
    Dashboard,
    Courses,
    SkillAnalysis,
    Redemption,
    Rewards,
}

impl MainTab {
    pub const ALL: [MainTab; 5] = [
        MainTab::Dashboard,
        MainTab::Courses,
        MainTab::SkillAnalysis,
        MainTab::Redemption,
        MainTab::Rewards,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MainTab::Dashboard => "Dashboard",
            MainTab::Courses => "Courses",
            MainTab::SkillAnalysis => "Skill Analysis",
            MainTab::Redemption => "Redemption",
            MainTab::Rewards => "Rewards",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MainTab::Dashboard => "⌂",
            MainTab::Courses => "📚",
            MainTab::SkillAnalysis => "📊",
            MainTab::Redemption => "🎁",
            MainTab::Rewards => "🏆",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    /// Tab for a 1-based number key.
    pub fn from_number(n: u32) -> Option<Self> {
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Selection index of every list-like screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursors {
    pub landing: usize,
    pub method: usize,
    pub category: usize,
    pub course: usize,
    pub week: usize,
    pub quest: usize,
    pub mentor_filter: usize,
    pub mentor: usize,
    /// Next suggested chat question to insert
    pub suggestion: usize,
    pub reward: usize,
    /// Focused field on an onboarding step
    pub field: usize,
}

/// Events raised by flow completion hooks.
///
/// Hooks only send; the shell applies the mode change when it drains the
/// channel, keeping flows unaware of their owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    OnboardingCompleted { method: OnboardingMethod },
    CourseCompleted { course_id: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_name() {
        assert_eq!(ShellMode::from_name("Landing"), Some(ShellMode::Landing));
        assert_eq!(ShellMode::from_name(" main "), Some(ShellMode::Main));
        assert_eq!(ShellMode::from_name("settings"), None);
    }

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(MainTab::Rewards.next(), MainTab::Dashboard);
        assert_eq!(MainTab::Dashboard.previous(), MainTab::Rewards);
    }

    #[test]
    fn test_tab_from_number() {
        assert_eq!(MainTab::from_number(2), Some(MainTab::Courses));
        assert_eq!(MainTab::from_number(0), None);
        assert_eq!(MainTab::from_number(6), None);
    }
}
