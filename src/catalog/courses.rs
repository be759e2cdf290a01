//! Course catalog: courses → weeks → quests.
//!
//! Ids are unique within their parent (week ids within a course, quest ids
//! within a week). The `seeded_complete` flags give [`ProgressBook`] its
//! starting point; every status shown in the UI is derived from them.
//!
//! [`ProgressBook`]: super::ProgressBook

/// Flavour of a quest, used for icons and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestKind {
    Tutorial,
    HandsOn,
    Interactive,
    Practical,
    Project,
}

impl QuestKind {
    pub fn label(&self) -> &'static str {
        match self {
            QuestKind::Tutorial => "tutorial",
            QuestKind::HandsOn => "hands-on",
            QuestKind::Interactive => "interactive",
            QuestKind::Practical => "practical",
            QuestKind::Project => "project",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            QuestKind::Tutorial => "📖",
            QuestKind::HandsOn => "⌨",
            QuestKind::Interactive => "▶",
            QuestKind::Practical => "◎",
            QuestKind::Project => "🏆",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestSpec {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: QuestKind,
    pub xp: u32,
    pub estimated_time: &'static str,
    pub rewards: &'static [&'static str],
    pub body: &'static str,
    pub code: Option<&'static str>,
    pub seeded_complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekSpec {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub estimated_time: &'static str,
    pub quests: &'static [QuestSpec],
}

impl WeekSpec {
    pub fn quest(&self, quest_id: u32) -> Option<&'static QuestSpec> {
        self.quests.iter().find(|q| q.id == quest_id)
    }

    pub fn total_xp(&self) -> u32 {
        self.quests.iter().map(|q| q.xp).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseSpec {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub instructor: &'static str,
    pub category: &'static str,
    pub difficulty: Difficulty,
    pub duration: &'static str,
    pub weeks: &'static [WeekSpec],
}

impl CourseSpec {
    pub fn week(&self, week_id: u32) -> Option<&'static WeekSpec> {
        self.weeks.iter().find(|w| w.id == week_id)
    }

    pub fn total_quests(&self) -> usize {
        self.weeks.iter().map(|w| w.quests.len()).sum()
    }

    pub fn total_xp(&self) -> u32 {
        self.weeks.iter().map(WeekSpec::total_xp).sum()
    }
}

/// Filter chips shown above the catalog.
pub const CATEGORIES: [&str; 5] = ["All", "Frontend", "Backend", "Data Science", "Design"];

macro_rules! quest {
    ($id:expr, $title:expr, $desc:expr, $kind:ident, $xp:expr, $time:expr, [$($reward:expr),*], $body:expr, $code:expr, $done:expr) => {
        QuestSpec {
            id: $id,
            title: $title,
            description: $desc,
            kind: QuestKind::$kind,
            xp: $xp,
            estimated_time: $time,
            rewards: &[$($reward),*],
            body: $body,
            code: $code,
            seeded_complete: $done,
        }
    };
}

const REACT_WEEK_1: &[QuestSpec] = &[
    quest!(1, "Understanding JSX", "Learn the syntax and power of JSX in React applications", Tutorial, 25, "30 min",
        ["XP +25", "🎯 JSX Master Badge"],
        "JSX is a syntax extension for JavaScript that lets you write HTML-like markup inside a JavaScript file. Elements must be properly closed, and a component returns a single parent element.",
        Some("const element = <h1>Hello, world!</h1>;"), true),
    quest!(2, "Creating Your First Component", "Build your first React component from scratch", HandsOn, 35, "45 min",
        ["XP +35", "⚡ Component Creator"],
        "Components are functions that return markup. Name them with a capital letter and compose them like HTML tags.",
        Some("function Welcome(props) {\n  return <h1>Hello, {props.name}</h1>;\n}"), true),
    quest!(3, "Props and Data Flow", "Master how data flows between React components using props", Interactive, 40, "1 hour",
        ["XP +40", "🔗 Data Flow Expert", "🎁 Mystery Crate"],
        "Props flow from parent to child and are read-only. A child never mutates the props it receives.",
        None, true),
    quest!(4, "Event Handling", "Learn to handle user interactions and events in React", Practical, 30, "40 min",
        ["XP +30", "🎮 Event Master"],
        "Event handlers are passed as props in camelCase, such as onClick, and receive a synthetic event.",
        Some("<button onClick={() => setCount(count + 1)}>Add</button>"), true),
    quest!(5, "Component Composition", "Master the art of composing components for reusable UI", Project, 50, "1.5 hours",
        ["XP +50", "🏗 Architect Badge", "💎 Rare Components Kit"],
        "Composition means building complex UIs from small components, passing children instead of inheriting behavior.",
        None, true),
];

const REACT_WEEK_2: &[QuestSpec] = &[
    quest!(1, "Lifting State Up", "Share state between siblings through a common parent", Tutorial, 30, "40 min",
        ["XP +30"],
        "When two components need the same data, move the state to their closest common parent and pass it down as props.",
        None, true),
    quest!(2, "Controlled Inputs", "Drive form fields from component state", HandsOn, 35, "45 min",
        ["XP +35", "📝 Form Tamer"],
        "A controlled input takes its value from state and reports changes through onChange, so React stays the single source of truth.",
        Some("<input value={name} onChange={e => setName(e.target.value)} />"), false),
    quest!(3, "Derived State", "Compute values instead of storing duplicates", Interactive, 40, "1 hour",
        ["XP +40"],
        "Anything that can be computed from props or state should be computed during render rather than stored separately.",
        None, false),
];

const REACT_WEEK_3: &[QuestSpec] = &[
    quest!(1, "useState in Depth", "Functional updates and state batching", Tutorial, 35, "45 min",
        ["XP +35"],
        "useState returns the current value and a setter. Pass a function to the setter when the next value depends on the previous one.",
        Some("setCount(c => c + 1);"), false),
    quest!(2, "useEffect Essentials", "Synchronise components with external systems", HandsOn, 45, "1 hour",
        ["XP +45", "🔄 Effect Wrangler"],
        "Effects run after render. Return a cleanup function and list every reactive value the effect reads in its dependency array.",
        None, false),
    quest!(3, "Custom Hooks", "Extract reusable stateful logic", Project, 60, "1.5 hours",
        ["XP +60", "🪝 Hook Smith"],
        "A custom hook is a function whose name starts with use and which calls other hooks. It shares logic, not state.",
        None, false),
];

const REACT_WEEK_4: &[QuestSpec] = &[
    quest!(1, "Context API", "Pass data deeply without prop drilling", Tutorial, 40, "50 min",
        ["XP +40"],
        "Context provides a value to every component below a provider. Reach for it when many distant components need the same data.",
        None, false),
    quest!(2, "useReducer Patterns", "Model complex state transitions", Practical, 55, "1.5 hours",
        ["XP +55", "🧠 Reducer Sage"],
        "A reducer takes the current state and an action and returns the next state. It keeps transition logic in one place.",
        Some("const [state, dispatch] = useReducer(reducer, initial);"), false),
];

const ML_WEEK_1: &[QuestSpec] = &[
    quest!(1, "Data Cleaning", "Handle missing values and outliers", Tutorial, 30, "45 min",
        ["XP +30"],
        "Real datasets are messy. Decide per column whether to drop, impute or flag missing values before training anything.",
        None, true),
    quest!(2, "Feature Scaling", "Normalise and standardise inputs", HandsOn, 35, "45 min",
        ["XP +35"],
        "Many algorithms assume features on comparable scales. Standardisation subtracts the mean and divides by the standard deviation.",
        None, false),
];

const ML_WEEK_2: &[QuestSpec] = &[
    quest!(1, "Linear Regression", "Fit your first predictive model", Interactive, 45, "1 hour",
        ["XP +45", "📈 Trend Spotter"],
        "Linear regression finds the line that minimises squared error between predictions and observed values.",
        None, false),
    quest!(2, "Decision Trees", "Split data into interpretable rules", Project, 55, "1.5 hours",
        ["XP +55"],
        "A decision tree recursively splits the data on the feature that best separates the target, producing readable rules.",
        None, false),
];

const UX_WEEK_1: &[QuestSpec] = &[
    quest!(1, "Empathy Maps", "Capture what users say, think, do and feel", Tutorial, 25, "30 min",
        ["XP +25"],
        "An empathy map organises research findings into what users say, think, do and feel, exposing gaps in understanding.",
        None, false),
    quest!(2, "User Personas", "Turn research into archetypes", HandsOn, 30, "45 min",
        ["XP +30", "🧑‍🎨 Persona Crafter"],
        "Personas summarise goals and frustrations of a user segment so design decisions can be checked against them.",
        None, false),
];

const UX_WEEK_2: &[QuestSpec] = &[
    quest!(1, "Typography", "Build hierarchy with type", Tutorial, 30, "40 min",
        ["XP +30"],
        "Size, weight and spacing establish hierarchy. Limit yourself to a small type scale and apply it consistently.",
        None, false),
    quest!(2, "Color and Contrast", "Design accessible palettes", Practical, 35, "45 min",
        ["XP +35"],
        "Text needs sufficient contrast against its background. Use color to reinforce meaning, never as the only signal.",
        None, false),
];

const NODE_WEEK_1: &[QuestSpec] = &[
    quest!(1, "The Event Loop", "Understand non-blocking I/O", Tutorial, 35, "45 min",
        ["XP +35"],
        "Node runs JavaScript on a single thread and hands I/O to the system, resuming callbacks when results are ready.",
        None, false),
    quest!(2, "Modules", "Organise code with imports and exports", HandsOn, 30, "40 min",
        ["XP +30"],
        "Each file is a module. Export what other modules need and keep everything else private.",
        Some("export function greet(name) { return `Hello ${name}`; }"), false),
];

const NODE_WEEK_2: &[QuestSpec] = &[
    quest!(1, "Routing", "Map URLs to handlers", Interactive, 40, "1 hour",
        ["XP +40"],
        "A router matches the method and path of a request and dispatches it to the handler registered for that route.",
        None, false),
    quest!(2, "Middleware", "Compose request processing", Project, 50, "1.5 hours",
        ["XP +50", "🧩 Pipeline Builder"],
        "Middleware functions run in order around a handler, each able to inspect, modify or short-circuit the request.",
        None, false),
];

const GIT_WEEK_1: &[QuestSpec] = &[
    quest!(1, "Commits", "Record changes with intent", Tutorial, 20, "20 min",
        ["XP +20"],
        "A commit is a snapshot with a message explaining why the change was made. Keep commits small and focused.",
        Some("git commit -m \"Explain the change\""), true),
    quest!(2, "Branches", "Work in parallel safely", HandsOn, 25, "30 min",
        ["XP +25", "🌿 Branch Keeper"],
        "Branches are cheap pointers to commits. Create one per piece of work and merge it back when it is ready.",
        Some("git switch -c feature/login"), true),
];

pub static COURSES: &[CourseSpec] = &[
    CourseSpec {
        id: 1,
        title: "Galactic React Mastery",
        description: "Journey through the React universe and master component galaxies, hook nebulas, and state management constellations.",
        instructor: "Captain Sarah Chen",
        category: "Frontend",
        difficulty: Difficulty::Advanced,
        duration: "12 hours",
        weeks: &[
            WeekSpec { id: 1, title: "React Fundamentals", description: "Master the basics of React components and JSX", estimated_time: "4 hours", quests: REACT_WEEK_1 },
            WeekSpec { id: 2, title: "State & Props Management", description: "Learn how to manage state and pass data between components", estimated_time: "5 hours", quests: REACT_WEEK_2 },
            WeekSpec { id: 3, title: "Hooks & Lifecycle", description: "Deep dive into React hooks and component lifecycle", estimated_time: "6 hours", quests: REACT_WEEK_3 },
            WeekSpec { id: 4, title: "Context & Reducers", description: "Advanced state management with Context API and useReducer", estimated_time: "5 hours", quests: REACT_WEEK_4 },
        ],
    },
    CourseSpec {
        id: 2,
        title: "Machine Learning Fundamentals",
        description: "Learn the basics of ML algorithms and data science",
        instructor: "Dr. Alex Kumar",
        category: "Data Science",
        difficulty: Difficulty::Intermediate,
        duration: "18 hours",
        weeks: &[
            WeekSpec { id: 1, title: "Data Foundations", description: "Prepare data for learning", estimated_time: "3 hours", quests: ML_WEEK_1 },
            WeekSpec { id: 2, title: "Supervised Learning", description: "Train models on labelled data", estimated_time: "5 hours", quests: ML_WEEK_2 },
        ],
    },
    CourseSpec {
        id: 3,
        title: "UX/UI Design Principles",
        description: "Create beautiful and intuitive user experiences",
        instructor: "Maya Rodriguez",
        category: "Design",
        difficulty: Difficulty::Beginner,
        duration: "15 hours",
        weeks: &[
            WeekSpec { id: 1, title: "Design Thinking", description: "Start from the people you design for", estimated_time: "3 hours", quests: UX_WEEK_1 },
            WeekSpec { id: 2, title: "Visual Hierarchy", description: "Guide the eye with type and color", estimated_time: "3 hours", quests: UX_WEEK_2 },
        ],
    },
    CourseSpec {
        id: 4,
        title: "Node.js Backend Development",
        description: "Build scalable server-side applications with Node.js",
        instructor: "James Wilson",
        category: "Backend",
        difficulty: Difficulty::Intermediate,
        duration: "20 hours",
        weeks: &[
            WeekSpec { id: 1, title: "Runtime Basics", description: "How Node executes your code", estimated_time: "3 hours", quests: NODE_WEEK_1 },
            WeekSpec { id: 2, title: "HTTP Services", description: "Serve requests with routes and middleware", estimated_time: "4 hours", quests: NODE_WEEK_2 },
        ],
    },
    CourseSpec {
        id: 5,
        title: "Git Essentials",
        description: "Version control habits every developer needs",
        instructor: "AI Assistant Nova",
        category: "Backend",
        difficulty: Difficulty::Beginner,
        duration: "1 hour",
        weeks: &[
            WeekSpec { id: 1, title: "Version Control Basics", description: "Commits and branches", estimated_time: "1 hour", quests: GIT_WEEK_1 },
        ],
    },
];

pub fn course(course_id: u32) -> Option<&'static CourseSpec> {
    COURSES.iter().find(|c| c.id == course_id)
}

pub fn week(course_id: u32, week_id: u32) -> Option<&'static WeekSpec> {
    course(course_id)?.week(week_id)
}

pub fn quest(course_id: u32, week_id: u32, quest_id: u32) -> Option<&'static QuestSpec> {
    week(course_id, week_id)?.quest(quest_id)
}

/// Courses matching a category chip; "All" matches everything.
pub fn courses_in_category(category: &str) -> Vec<&'static CourseSpec> {
    COURSES
        .iter()
        .filter(|c| category == "All" || c.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique_within_parent() {
        let course_ids: HashSet<u32> = COURSES.iter().map(|c| c.id).collect();
        assert_eq!(course_ids.len(), COURSES.len());
        for course in COURSES {
            let week_ids: HashSet<u32> = course.weeks.iter().map(|w| w.id).collect();
            assert_eq!(week_ids.len(), course.weeks.len(), "course {}", course.id);
            for week in course.weeks {
                let quest_ids: HashSet<u32> = week.quests.iter().map(|q| q.id).collect();
                assert_eq!(quest_ids.len(), week.quests.len());
            }
        }
    }

    #[test]
    fn test_lookup_helpers() {
        assert_eq!(course(1).map(|c| c.title), Some("Galactic React Mastery"));
        assert_eq!(quest(1, 1, 3).map(|q| q.title), Some("Props and Data Flow"));
        assert!(quest(1, 9, 1).is_none());
        assert!(course(99).is_none());
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(courses_in_category("All").len(), COURSES.len());
        let backend = courses_in_category("Backend");
        assert!(backend.iter().all(|c| c.category == "Backend"));
        assert_eq!(backend.len(), 2);
    }

    #[test]
    fn test_course_totals() {
        let react = course(1).unwrap();
        assert_eq!(react.total_quests(), 13);
        assert_eq!(react.week(1).unwrap().total_xp(), 180);
    }
}
