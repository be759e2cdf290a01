//! In-memory progress bookkeeping.
//!
//! Only quest completion is stored. Week and quest statuses are derived on
//! every lookup so they can never disagree with each other.

use std::collections::HashSet;

use crate::navigation::{CourseProgress, ItemStatus};

use super::courses::{CourseSpec, WeekSpec, COURSES};

type QuestKey = (u32, u32, u32);

#[derive(Debug, Clone)]
pub struct ProgressBook {
    courses: &'static [CourseSpec],
    completed: HashSet<QuestKey>,
}

impl Default for ProgressBook {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ProgressBook {
    /// Progress over the built-in catalog, starting from its seeded flags.
    pub fn seeded() -> Self {
        Self::with_courses(COURSES)
    }

    pub fn with_courses(courses: &'static [CourseSpec]) -> Self {
        let completed = courses
            .iter()
            .flat_map(|course| {
                course.weeks.iter().flat_map(move |week| {
                    week.quests
                        .iter()
                        .filter(|quest| quest.seeded_complete)
                        .map(move |quest| (course.id, week.id, quest.id))
                })
            })
            .collect();
        Self { courses, completed }
    }

    /// A book with nothing completed.
    pub fn empty(courses: &'static [CourseSpec]) -> Self {
        Self {
            courses,
            completed: HashSet::new(),
        }
    }

    fn course(&self, course_id: u32) -> Option<&'static CourseSpec> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    pub fn is_quest_done(&self, course_id: u32, week_id: u32, quest_id: u32) -> bool {
        self.completed.contains(&(course_id, week_id, quest_id))
    }

    fn week_done(&self, course_id: u32, week: &WeekSpec) -> bool {
        week.quests
            .iter()
            .all(|q| self.is_quest_done(course_id, week.id, q.id))
    }

    pub fn completed_quests(&self, course_id: u32) -> usize {
        self.completed.iter().filter(|(c, _, _)| *c == course_id).count()
    }

    /// Completed quests over total quests, 0..=100.
    pub fn course_percent(&self, course_id: u32) -> u16 {
        let Some(course) = self.course(course_id) else {
            return 0;
        };
        let total = course.total_quests();
        if total == 0 {
            return 0;
        }
        ((self.completed_quests(course_id) * 100) / total) as u16
    }

    /// Completed quests over total quests for one week, 0..=100.
    pub fn week_percent(&self, course_id: u32, week_id: u32) -> u16 {
        let Some(week) = self.course(course_id).and_then(|c| c.week(week_id)) else {
            return 0;
        };
        if week.quests.is_empty() {
            return 0;
        }
        let done = week
            .quests
            .iter()
            .filter(|q| self.is_quest_done(course_id, week_id, q.id))
            .count();
        ((done * 100) / week.quests.len()) as u16
    }

    /// XP from every completed quest across the catalog.
    pub fn earned_xp(&self) -> u32 {
        self.courses
            .iter()
            .flat_map(|course| {
                course.weeks.iter().flat_map(move |week| {
                    week.quests
                        .iter()
                        .filter(move |q| self.is_quest_done(course.id, week.id, q.id))
                })
            })
            .map(|q| q.xp)
            .sum()
    }

    pub fn total_completed(&self) -> usize {
        self.completed.len()
    }

    /// The week a student would resume, if the course is unfinished.
    pub fn current_week(&self, course_id: u32) -> Option<&'static WeekSpec> {
        let course = self.course(course_id)?;
        course.weeks.iter().find(|w| !self.week_done(course_id, w))
    }
}

impl CourseProgress for ProgressBook {
    fn course_exists(&self, course_id: u32) -> bool {
        self.course(course_id).is_some()
    }

    fn week_status(&self, course_id: u32, week_id: u32) -> Option<ItemStatus> {
        let course = self.course(course_id)?;
        let mut seen_current = false;
        for week in course.weeks {
            let status = if self.week_done(course_id, week) {
                ItemStatus::Completed
            } else if !seen_current {
                seen_current = true;
                ItemStatus::Current
            } else {
                ItemStatus::Locked
            };
            if week.id == week_id {
                return Some(status);
            }
        }
        None
    }

    fn quest_status(&self, course_id: u32, week_id: u32, quest_id: u32) -> Option<ItemStatus> {
        let week = self.course(course_id)?.week(week_id)?;
        match self.week_status(course_id, week_id)? {
            ItemStatus::Completed => week.quest(quest_id).map(|_| ItemStatus::Completed),
            ItemStatus::Locked => week.quest(quest_id).map(|_| ItemStatus::Locked),
            ItemStatus::Current => {
                let mut seen_current = false;
                for quest in week.quests {
                    let status = if self.is_quest_done(course_id, week_id, quest.id) {
                        ItemStatus::Completed
                    } else if !seen_current {
                        seen_current = true;
                        ItemStatus::Current
                    } else {
                        ItemStatus::Locked
                    };
                    if quest.id == quest_id {
                        return Some(status);
                    }
                }
                None
            }
        }
    }

    fn course_finished(&self, course_id: u32) -> bool {
        match self.course(course_id) {
            Some(course) => course.weeks.iter().all(|w| self.week_done(course_id, w)),
            None => false,
        }
    }

    fn record_quest_completed(&mut self, course_id: u32, week_id: u32, quest_id: u32) -> bool {
        let exists = self
            .course(course_id)
            .and_then(|c| c.week(week_id))
            .and_then(|w| w.quest(quest_id))
            .is_some();
        if !exists {
            tracing::warn!(course_id, week_id, quest_id, "ignoring completion of unknown quest");
            return false;
        }
        let inserted = self.completed.insert((course_id, week_id, quest_id));
        if inserted {
            tracing::info!(course_id, week_id, quest_id, "quest completed");
        }
        inserted
    }
}
