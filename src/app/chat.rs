//! Mentor chat transcript.

use chrono::{DateTime, Local};

use crate::catalog::mentors::{greeting, mentor_reply, suggested_questions, MentorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Student,
    Mentor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            sent_at: Local::now(),
        }
    }

    pub fn time_label(&self) -> String {
        self.sent_at.format("%H:%M").to_string()
    }
}

/// Transcript for the chat view. Lives only while that view is on top.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    pub mentor_id: u32,
    pub kind: MentorKind,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Start a chat with the mentor's greeting.
    pub fn open(mentor_id: u32, kind: MentorKind) -> Self {
        Self {
            mentor_id,
            kind,
            messages: vec![ChatMessage::new(Sender::Mentor, greeting(mentor_id, kind))],
        }
    }

    pub fn is_for(&self, mentor_id: u32, kind: MentorKind) -> bool {
        self.mentor_id == mentor_id && self.kind == kind
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn suggestions(&self) -> &'static [&'static str] {
        suggested_questions(self.kind)
    }

    /// Suggestions are offered until the student has said something.
    pub fn shows_suggestions(&self) -> bool {
        self.messages.len() <= 1
    }

    /// Send a message and append the mentor's reply. Blank input is ignored.
    pub fn send(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage::new(Sender::Student, text));
        self.messages
            .push(ChatMessage::new(Sender::Mentor, mentor_reply(self.kind, text)));
        tracing::debug!(mentor_id = self.mentor_id, kind = %self.kind, "chat message sent");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_has_greeting() {
        let chat = ChatSession::open(4, MentorKind::Ai);
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].sender, Sender::Mentor);
        assert!(chat.shows_suggestions());
    }

    #[test]
    fn test_send_appends_reply() {
        let mut chat = ChatSession::open(1, MentorKind::Execution);
        assert!(chat.send("How is my progress?"));
        assert_eq!(chat.messages().len(), 3);
        assert_eq!(chat.messages()[1].sender, Sender::Student);
        assert_eq!(chat.messages()[2].sender, Sender::Mentor);
        assert!(!chat.shows_suggestions());
    }

    #[test]
    fn test_blank_message_ignored() {
        let mut chat = ChatSession::open(1, MentorKind::Execution);
        assert!(!chat.send("   "));
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn test_time_label_format() {
        let chat = ChatSession::open(2, MentorKind::Expert);
        assert_eq!(chat.messages()[0].time_label().len(), 5);
    }
}
