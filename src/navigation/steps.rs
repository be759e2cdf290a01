//! Linear step counter used inside onboarding method screens.
//!
//! This is deliberately not a stack: steps are never a back-navigation target
//! from outside the method screen, so a 0-based index is all that's needed.

/// Result of asking to move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAdvance {
    /// Current step has an empty required field; nothing changed.
    Blocked,
    /// Moved to the next step.
    Advanced,
    /// The last step is answered; the caller should complete the method.
    Finished,
}

/// Result of asking to move backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRetreat {
    /// Moved to the previous step.
    Moved,
    /// Already at step 0; the caller decides whether to leave the screen.
    AtStart,
}

/// Fixed-length sequence of steps, each with one or more required fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequence {
    index: usize,
    /// answers[step][field]
    answers: Vec<Vec<String>>,
}

impl StepSequence {
    /// Build a sequence from the number of required fields per step.
    pub fn new<I>(field_counts: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let answers = field_counts
            .into_iter()
            .map(|count| vec![String::new(); count.max(1)])
            .collect();
        Self { index: 0, answers }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// 0-based index of the current step.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.answers.len()
    }

    /// Number of fields on the current step.
    pub fn field_count(&self) -> usize {
        self.answers.get(self.index).map_or(0, Vec::len)
    }

    /// Answer text for a field of the current step ("" if unset).
    pub fn answer(&self, field: usize) -> &str {
        self.answers
            .get(self.index)
            .and_then(|fields| fields.get(field))
            .map_or("", String::as_str)
    }

    /// All answers of a given step.
    pub fn answers_for(&self, step: usize) -> &[String] {
        self.answers.get(step).map_or(&[], Vec::as_slice)
    }

    /// Store an answer for a field of the current step.
    ///
    /// Returns `false` if the field does not exist.
    pub fn set_answer(&mut self, field: usize, value: impl Into<String>) -> bool {
        match self
            .answers
            .get_mut(self.index)
            .and_then(|fields| fields.get_mut(field))
        {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// A step is answered once every field holds non-blank text.
    pub fn is_answered(&self, step: usize) -> bool {
        self.answers
            .get(step)
            .map_or(true, |fields| fields.iter().all(|f| !f.trim().is_empty()))
    }

    pub fn current_answered(&self) -> bool {
        self.is_answered(self.index)
    }

    /// First unanswered field on the current step.
    pub fn first_empty_field(&self) -> Option<usize> {
        self.answers
            .get(self.index)?
            .iter()
            .position(|f| f.trim().is_empty())
    }

    /// Count of answered steps, in order from the start.
    pub fn answered_count(&self) -> usize {
        (0..self.len()).filter(|&s| self.is_answered(s)).count()
    }

    /// Progress through the sequence, 0-100.
    pub fn progress_percent(&self) -> u16 {
        if self.answers.is_empty() {
            return 100;
        }
        let done = self.index + usize::from(self.current_answered());
        ((done * 100) / self.answers.len()) as u16
    }

    /// Move forward if the current step is answered.
    pub fn next(&mut self) -> StepAdvance {
        if !self.current_answered() {
            return StepAdvance::Blocked;
        }
        if self.is_last() {
            return StepAdvance::Finished;
        }
        self.index += 1;
        StepAdvance::Advanced
    }

    /// Move back one step.
    pub fn previous(&mut self) -> StepRetreat {
        if self.index == 0 {
            return StepRetreat::AtStart;
        }
        self.index -= 1;
        StepRetreat::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unanswered_step_blocks() {
        let mut seq = StepSequence::new([1, 1]);
        assert_eq!(seq.next(), StepAdvance::Blocked);
        assert_eq!(seq.index(), 0);
    }

    #[test]
    fn test_blank_answer_does_not_count() {
        let mut seq = StepSequence::new([1]);
        seq.set_answer(0, "   ");
        assert!(!seq.current_answered());
        assert_eq!(seq.next(), StepAdvance::Blocked);
    }

    #[test]
    fn test_multi_field_step_needs_every_field() {
        let mut seq = StepSequence::new([2, 1]);
        seq.set_answer(0, "Ada");
        assert_eq!(seq.first_empty_field(), Some(1));
        assert_eq!(seq.next(), StepAdvance::Blocked);
        seq.set_answer(1, "Lovelace");
        assert_eq!(seq.next(), StepAdvance::Advanced);
        assert_eq!(seq.index(), 1);
    }

    #[test]
    fn test_last_step_reports_finished_without_moving() {
        let mut seq = StepSequence::new([1]);
        seq.set_answer(0, "done");
        assert_eq!(seq.next(), StepAdvance::Finished);
        assert_eq!(seq.index(), 0);
        assert_eq!(seq.progress_percent(), 100);
    }

    #[test]
    fn test_previous_at_start() {
        let mut seq = StepSequence::new([1, 1]);
        assert_eq!(seq.previous(), StepRetreat::AtStart);
        seq.set_answer(0, "x");
        seq.next();
        assert_eq!(seq.previous(), StepRetreat::Moved);
        assert_eq!(seq.index(), 0);
        // Answers survive moving back
        assert_eq!(seq.answer(0), "x");
    }

    #[test]
    fn test_set_answer_out_of_range() {
        let mut seq = StepSequence::new([1]);
        assert!(!seq.set_answer(3, "nope"));
    }

    #[test]
    fn test_zero_field_count_is_clamped() {
        let seq = StepSequence::new([0]);
        assert_eq!(seq.field_count(), 1);
    }
}
