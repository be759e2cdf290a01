//! Static content for the dashboard and the reward pages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub name: &'static str,
    pub icon: &'static str,
    pub earned: bool,
}

pub static DASHBOARD_BADGES: &[Badge] = &[
    Badge { name: "First Course", icon: "🎯", earned: true },
    Badge { name: "Speed Learner", icon: "⚡", earned: true },
    Badge { name: "Consistent", icon: "🔥", earned: true },
    Badge { name: "Expert", icon: "👑", earned: false },
    Badge { name: "Master", icon: "🏆", earned: false },
    Badge { name: "Scholar", icon: "📚", earned: false },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardQuest {
    pub title: &'static str,
    pub progress: u16,
    pub reward: &'static str,
    pub kind: &'static str,
}

pub static DASHBOARD_QUESTS: &[DashboardQuest] = &[
    DashboardQuest { title: "Complete React Fundamentals", progress: 75, reward: "150 XP", kind: "Course Quest" },
    DashboardQuest { title: "JavaScript Advanced Concepts", progress: 100, reward: "200 XP", kind: "Skill Quest" },
    DashboardQuest { title: "Build a Full Stack Project", progress: 0, reward: "300 XP", kind: "Project Quest" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u16,
    pub change: i16,
    pub category: &'static str,
}

pub static SKILLS: &[Skill] = &[
    Skill { name: "React", level: 85, change: 5, category: "Frontend" },
    Skill { name: "TypeScript", level: 78, change: 8, category: "Programming" },
    Skill { name: "Node.js", level: 72, change: 3, category: "Backend" },
    Skill { name: "Python", level: 65, change: -2, category: "Programming" },
    Skill { name: "UI/UX Design", level: 58, change: 12, category: "Design" },
    Skill { name: "Machine Learning", level: 45, change: 15, category: "Data Science" },
    Skill { name: "MongoDB", level: 62, change: 4, category: "Database" },
    Skill { name: "AWS", level: 55, change: 7, category: "Cloud" },
];

pub fn average_skill_level() -> u16 {
    if SKILLS.is_empty() {
        return 0;
    }
    let total: u32 = SKILLS.iter().map(|s| u32::from(s.level)).sum();
    (total as f32 / SKILLS.len() as f32).round() as u16
}

/// Top three skills at 70 or above.
pub fn strength_areas() -> Vec<&'static Skill> {
    SKILLS.iter().filter(|s| s.level >= 70).take(3).collect()
}

/// First three skills below 60.
pub fn improvement_areas() -> Vec<&'static Skill> {
    SKILLS.iter().filter(|s| s.level < 60).take(3).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardItem {
    pub title: &'static str,
    pub points: u32,
    pub category: &'static str,
    pub available: bool,
    pub discount: u32,
}

impl RewardItem {
    /// Price after discount, rounded down.
    pub fn discounted_points(&self) -> u32 {
        self.points * (100 - self.discount.min(100)) / 100
    }
}

pub static REDEEMABLE: &[RewardItem] = &[
    RewardItem { title: "Premium Course Access", points: 500, category: "Courses", available: true, discount: 0 },
    RewardItem { title: "One-on-One Mentorship", points: 800, category: "Mentorship", available: true, discount: 20 },
    RewardItem { title: "Certificate of Excellence", points: 300, category: "Certificates", available: true, discount: 0 },
    RewardItem { title: "EduX Premium Hoodie", points: 1200, category: "Merchandise", available: true, discount: 15 },
    RewardItem { title: "Tech Conference Ticket", points: 2000, category: "Events", available: true, discount: 0 },
    RewardItem { title: "Exclusive Workshop Access", points: 1500, category: "Workshops", available: false, discount: 0 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redemption {
    pub item: &'static str,
    pub points: u32,
    pub date: &'static str,
    pub status: &'static str,
}

pub static REDEMPTION_HISTORY: &[Redemption] = &[
    Redemption { item: "React Masterclass", points: 500, date: "2 days ago", status: "completed" },
    Redemption { item: "Certificate Package", points: 300, date: "1 week ago", status: "delivered" },
    Redemption { item: "Mentor Session", points: 800, date: "2 weeks ago", status: "scheduled" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    pub progress: u16,
    pub points: u32,
    pub unlocked: bool,
}

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement { title: "First Steps", description: "Complete your first course", progress: 100, points: 100, unlocked: true },
    Achievement { title: "Quick Learner", description: "Complete 3 courses in a week", progress: 67, points: 250, unlocked: false },
    Achievement { title: "Streak Master", description: "Maintain a 7-day learning streak", progress: 100, points: 200, unlocked: true },
    Achievement { title: "Knowledge Seeker", description: "Complete 10 courses", progress: 20, points: 500, unlocked: false },
    Achievement { title: "Perfect Score", description: "Score 100% on any assessment", progress: 100, points: 300, unlocked: true },
    Achievement { title: "Social Learner", description: "Help 5 fellow students in discussions", progress: 40, points: 150, unlocked: false },
];

pub fn unlocked_points() -> u32 {
    ACHIEVEMENTS.iter().filter(|a| a.unlocked).map(|a| a.points).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: &'static str,
    pub points: u32,
    pub is_user: bool,
}

pub static LEADERBOARD: &[LeaderboardEntry] = &[
    LeaderboardEntry { rank: 1, name: "Alex Chen", points: 4520, is_user: false },
    LeaderboardEntry { rank: 2, name: "Sarah Wilson", points: 3890, is_user: false },
    LeaderboardEntry { rank: 3, name: "You", points: 2450, is_user: true },
    LeaderboardEntry { rank: 4, name: "Mike Rodriguez", points: 2180, is_user: false },
    LeaderboardEntry { rank: 5, name: "Emma Johnson", points: 1920, is_user: false },
];

/// Completion-screen achievements, parameterised by the finished course.
pub fn completion_achievements(total_xp: u32, total_quests: usize, weeks: usize) -> Vec<(String, String)> {
    vec![
        ("👑 Course Master".to_string(), "Completed all course content".to_string()),
        ("⚡ XP Champion".to_string(), format!("Earned {total_xp} experience points")),
        ("🎯 Quest Conqueror".to_string(), format!("Completed {total_quests} quests")),
        ("📅 Week Warrior".to_string(), format!("Finished all {weeks} weeks")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_summaries() {
        assert_eq!(average_skill_level(), 65);
        assert!(strength_areas().iter().all(|s| s.level >= 70));
        assert_eq!(strength_areas().len(), 3);
        assert!(improvement_areas().iter().all(|s| s.level < 60));
    }

    #[test]
    fn test_discount() {
        let hoodie = REDEEMABLE[3];
        assert_eq!(hoodie.discounted_points(), 1020);
        assert_eq!(REDEEMABLE[0].discounted_points(), 500);
    }

    #[test]
    fn test_unlocked_points() {
        assert_eq!(unlocked_points(), 600);
    }
}
