//! Mentor roster and the canned chat script.

use std::fmt;

/// Mentor specialisation. Doubles as the chat persona selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MentorKind {
    Execution,
    Expert,
    Counselor,
    Ai,
}

impl MentorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MentorKind::Execution => "execution",
            MentorKind::Expert => "expert",
            MentorKind::Counselor => "counselor",
            MentorKind::Ai => "ai",
        }
    }
}

impl fmt::Display for MentorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mentor {
    pub id: u32,
    pub name: &'static str,
    pub kind: MentorKind,
    pub title: &'static str,
    pub specialty: &'static str,
    pub description: &'static str,
    pub avatar: &'static str,
    pub rating: f32,
    pub sessions: u32,
    pub response_time: &'static str,
    pub expertise: &'static [&'static str],
    pub online: bool,
    pub price: &'static str,
}

pub static MENTORS: &[Mentor] = &[
    Mentor {
        id: 1,
        name: "Commander Sarah Chen",
        kind: MentorKind::Execution,
        title: "Execution Mentor",
        specialty: "Project Management & Implementation",
        description: "Master the art of turning ideas into reality with strategic execution and project management expertise.",
        avatar: "SC",
        rating: 4.9,
        sessions: 1200,
        response_time: "< 2 hours",
        expertise: &["Project Planning", "Team Leadership", "Agile Methods", "Goal Setting"],
        online: true,
        price: "Free",
    },
    Mentor {
        id: 2,
        name: "Dr. Alex Kumar",
        kind: MentorKind::Expert,
        title: "Expert Mentor",
        specialty: "Technical Excellence & Advanced Concepts",
        description: "Deep dive into complex technical concepts with industry-leading expertise and real-world experience.",
        avatar: "AK",
        rating: 4.8,
        sessions: 980,
        response_time: "< 4 hours",
        expertise: &["Advanced Architecture", "System Design", "Code Review", "Best Practices"],
        online: true,
        price: "Premium",
    },
    Mentor {
        id: 3,
        name: "Maya Rodriguez",
        kind: MentorKind::Counselor,
        title: "Learning Counselor",
        specialty: "Career Guidance & Personal Development",
        description: "Navigate your learning journey with personalized guidance on career paths and skill development.",
        avatar: "MR",
        rating: 4.9,
        sessions: 1500,
        response_time: "< 1 hour",
        expertise: &["Career Planning", "Skill Assessment", "Learning Strategy", "Goal Setting"],
        online: true,
        price: "Free",
    },
    Mentor {
        id: 4,
        name: "AI Assistant Nova",
        kind: MentorKind::Ai,
        title: "AI Learning Assistant",
        specialty: "Instant Help & Concept Explanations",
        description: "Get instant answers about your current quest, from syntax questions to debugging help, any time of day.",
        avatar: "AI",
        rating: 4.7,
        sessions: 5400,
        response_time: "Instant",
        expertise: &["React", "JavaScript", "Debugging", "Explanations"],
        online: true,
        price: "Free",
    },
];

/// Filter chips above the mentor list; `None` means all.
pub const MENTOR_FILTERS: [Option<MentorKind>; 5] = [
    None,
    Some(MentorKind::Execution),
    Some(MentorKind::Expert),
    Some(MentorKind::Counselor),
    Some(MentorKind::Ai),
];

pub fn mentor(mentor_id: u32) -> Option<&'static Mentor> {
    MENTORS.iter().find(|m| m.id == mentor_id)
}

pub fn mentors_of_kind(filter: Option<MentorKind>) -> Vec<&'static Mentor> {
    MENTORS
        .iter()
        .filter(|m| filter.map_or(true, |kind| m.kind == kind))
        .collect()
}

/// Opening line of a chat.
pub fn greeting(mentor_id: u32, kind: MentorKind) -> String {
    if kind == MentorKind::Ai {
        return "Hello! I'm your AI learning assistant. I can help you with questions about your current quest on JSX and React fundamentals. What would you like to know?".to_string();
    }
    let name = mentor(mentor_id).map_or("your mentor", |m| m.name);
    format!("Hi! I'm {name}. I'm here to help you with your learning journey. How can I assist you today?")
}

pub fn suggested_questions(kind: MentorKind) -> &'static [&'static str] {
    match kind {
        MentorKind::Ai => &[
            "How do I implement useState in React?",
            "What's the difference between props and state?",
            "Help me debug this component error",
            "Explain React component lifecycle",
        ],
        _ => &[
            "How can I improve my learning strategy?",
            "What should I focus on next in my journey?",
            "How do I stay motivated during challenging topics?",
            "Can you review my progress so far?",
        ],
    }
}

/// Keyword-driven canned reply.
pub fn mentor_reply(kind: MentorKind, message: &str) -> &'static str {
    let message = message.to_lowercase();
    if kind == MentorKind::Ai {
        if message.contains("usestate") || (message.contains("state") && !message.contains("props")) {
            return "useState is a React Hook that adds state to function components. It returns the current value and a setter:\n\nconst [count, setCount] = useState(0);\n\nCalling the setter schedules a re-render with the new value. Want me to explain more about state management?";
        }
        if message.contains("props") || message.contains("difference") {
            return "Props are passed from parent to child and are read-only. State is owned by a component and changes over time, triggering re-renders. Need help with a specific props or state scenario?";
        }
        if message.contains("jsx") {
            return "JSX lets you write HTML-like markup in components. Return a single parent element, use className instead of class, close every tag and use camelCase attributes. Want to practice with some examples?";
        }
        return "I'd be happy to help you with that! Could you share more details about what you're working on? I can assist with React concepts, debugging, syntax or walk through examples step by step.";
    }
    if message.contains("learning") || message.contains("strategy") {
        return "Excellent question! Practice regularly for 30-45 minutes a day, apply what you learn in small projects, revisit concepts that challenge you and ask for help when stuck. How are you finding the move from HTML to JSX?";
    }
    if message.contains("progress") || message.contains("review") {
        return "You've made great progress: JSX fundamentals and component basics are done, and props and data flow are underway. Next, practice passing props and try building a small component library. What would you like to dive into?";
    }
    "Thank you for reaching out! I'm here to support your learning journey, whether you need help with course content, career guidance or motivation. What's on your mind today?"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_all_and_by_kind() {
        assert_eq!(mentors_of_kind(None).len(), MENTORS.len());
        let ai = mentors_of_kind(Some(MentorKind::Ai));
        assert_eq!(ai.len(), 1);
        assert_eq!(ai[0].id, 4);
    }

    #[test]
    fn test_greeting_uses_mentor_name() {
        assert!(greeting(3, MentorKind::Counselor).contains("Maya Rodriguez"));
        assert!(greeting(4, MentorKind::Ai).starts_with("Hello! I'm your AI"));
    }

    #[test]
    fn test_replies_follow_keywords() {
        assert!(mentor_reply(MentorKind::Ai, "Explain JSX please").starts_with("JSX"));
        assert!(mentor_reply(MentorKind::Ai, "props vs state?").starts_with("Props"));
        assert!(mentor_reply(MentorKind::Counselor, "review my progress").contains("great progress"));
        assert!(mentor_reply(MentorKind::Expert, "hi").starts_with("Thank you"));
    }
}
