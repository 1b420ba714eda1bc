//! Judging conversations and folding the results into the run's tracking state.

use std::collections::BTreeMap;

use serde::Serialize;

use super::conversation::Conversation;

/// Whether the verdict matches the conversation's ground truth.
pub fn evaluate(conversation: &Conversation, suspicious: bool) -> bool {
    suspicious == conversation.has_secret
}

/// How a judgment affects plot tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    None,
    CorrectlyFlagged,
    /// A guilty conversation waved through. In the story, the Inspector helped
    /// the rebels.
    IncorrectlyCleared,
}

pub fn classify(conversation: &Conversation, suspicious: bool, correct: bool) -> Classification {
    if suspicious && correct {
        Classification::CorrectlyFlagged
    } else if !suspicious && conversation.has_secret {
        Classification::IncorrectlyCleared
    } else {
        Classification::None
    }
}

/// A single verdict on a single conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Judgment {
    pub conversation_id: u32,
    pub suspicious: bool,
    pub correct: bool,
    pub classification: Classification,
}

impl Judgment {
    pub fn new(conversation: &Conversation, suspicious: bool) -> Self {
        let correct = evaluate(conversation, suspicious);
        Self {
            conversation_id: conversation.id,
            suspicious,
            correct,
            classification: classify(conversation, suspicious, correct),
        }
    }
}

/// Everything the campaign remembers about the Inspector's judgments.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrackingState {
    /// Plot conversation id -> flagged correctly.
    pub correct_flags: BTreeMap<u32, bool>,
    /// Plot conversation id -> guilty but cleared.
    pub missed_flags: BTreeMap<u32, bool>,
    pub total_score: usize,
    /// Day -> number of "suspicious" verdicts.
    pub day_flag_counts: BTreeMap<u32, usize>,
    /// Day -> number of conversations judged.
    pub day_judged_counts: BTreeMap<u32, usize>,
}

impl TrackingState {
    /// Start a run tracking the given plot conversations, all unflagged.
    pub fn new(plot_ids: impl IntoIterator<Item = u32>) -> Self {
        let mut state = Self::default();
        for id in plot_ids {
            state.correct_flags.insert(id, false);
            state.missed_flags.insert(id, false);
        }
        state
    }

    pub fn apply(&mut self, day: u32, judgment: &Judgment) {
        if judgment.correct {
            self.total_score += 1;
        }
        if judgment.suspicious {
            *self.day_flag_counts.entry(day).or_default() += 1;
        }
        *self.day_judged_counts.entry(day).or_default() += 1;

        let id = judgment.conversation_id;
        match judgment.classification {
            Classification::CorrectlyFlagged => {
                if let Some(flag) = self.correct_flags.get_mut(&id) {
                    *flag = true;
                }
            }
            Classification::IncorrectlyCleared => {
                if let Some(flag) = self.missed_flags.get_mut(&id) {
                    *flag = true;
                }
            }
            Classification::None => {}
        }
    }

    pub fn flagged_correctly(&self, plot_id: u32) -> bool {
        self.correct_flags.get(&plot_id).copied().unwrap_or(false)
    }

    /// Did the Inspector wave through any plot conversation?
    pub fn any_helped(&self) -> bool {
        self.missed_flags.values().any(|&missed| missed)
    }

    pub fn flagged_on(&self, day: u32) -> usize {
        self.day_flag_counts.get(&day).copied().unwrap_or(0)
    }

    pub fn judged_on(&self, day: u32) -> usize {
        self.day_judged_counts.get(&day).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guilty() -> Conversation {
        Conversation::new(1, true, &[("Alice", "The accounts are safe."), ("Bob", "Good.")])
    }

    fn innocent() -> Conversation {
        Conversation::new(13, false, &[("Mom", "Breakfast?"), ("Son", "Cereal.")])
    }

    #[test]
    fn test_evaluate_matches_ground_truth() {
        for conv in [guilty(), innocent()] {
            for verdict in [true, false] {
                assert_eq!(evaluate(&conv, verdict), verdict == conv.has_secret);
            }
        }
    }

    #[test]
    fn test_evaluate_is_pure() {
        let conv = guilty();
        assert_eq!(evaluate(&conv, false), evaluate(&conv, false));
        assert_eq!(evaluate(&conv, true), evaluate(&conv, true));
    }

    #[test]
    fn test_classify() {
        let g = guilty();
        let i = innocent();
        assert_eq!(classify(&g, true, true), Classification::CorrectlyFlagged);
        assert_eq!(classify(&g, false, false), Classification::IncorrectlyCleared);
        assert_eq!(classify(&i, true, false), Classification::None);
        assert_eq!(classify(&i, false, true), Classification::None);
    }

    #[test]
    fn test_tracking_only_records_plot_ids() {
        let mut state = TrackingState::new([1]);
        let other = Conversation::new(99, true, &[("X", "a"), ("Y", "b")]);

        state.apply(1, &Judgment::new(&other, false));
        assert!(!state.missed_flags.contains_key(&99));
        assert!(!state.any_helped());

        state.apply(1, &Judgment::new(&guilty(), false));
        assert!(state.any_helped());
        assert!(!state.flagged_correctly(1));
    }

    #[test]
    fn test_tracking_scores_and_counts() {
        let mut state = TrackingState::new([1]);
        state.apply(1, &Judgment::new(&guilty(), true));
        state.apply(1, &Judgment::new(&innocent(), true));
        state.apply(2, &Judgment::new(&innocent(), false));

        assert_eq!(state.total_score, 2);
        assert!(state.flagged_correctly(1));
        assert_eq!(state.flagged_on(1), 2);
        assert_eq!(state.judged_on(1), 2);
        assert_eq!(state.flagged_on(2), 0);
        assert_eq!(state.judged_on(2), 1);
        assert_eq!(state.flagged_on(3), 0);
    }
}
