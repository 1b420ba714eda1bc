use serde::{Deserialize, Serialize};

/// One spoken line of an intercepted conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub speaker: String,
    pub text: String,
}

impl Line {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}

/// An intercepted conversation the Inspector reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique within a campaign.
    pub id: u32,
    pub participants: Vec<String>,
    /// Dialogue in spoken order.
    pub lines: Vec<Line>,
    /// Ground truth: whether the State wants this conversation flagged.
    pub has_secret: bool,
    /// What the participants are hiding. Display/logging only.
    #[serde(default)]
    pub secret_description: Option<String>,
    /// Plot-critical conversations never enter the filler pool.
    #[serde(default)]
    pub is_special: bool,
}

impl Conversation {
    /// Build a conversation from `(speaker, text)` pairs. Participants are taken
    /// from the speakers in order of first appearance.
    pub fn new(id: u32, has_secret: bool, lines: &[(&str, &str)]) -> Self {
        let mut participants: Vec<String> = Vec::new();
        for (speaker, _) in lines {
            if !participants.iter().any(|p| p == speaker) {
                participants.push((*speaker).to_string());
            }
        }
        Self {
            id,
            participants,
            lines: lines
                .iter()
                .map(|(speaker, text)| Line::new(*speaker, *text))
                .collect(),
            has_secret,
            secret_description: None,
            is_special: false,
        }
    }

    pub fn with_secret(mut self, description: impl Into<String>) -> Self {
        self.secret_description = Some(description.into());
        self
    }

    pub fn special(mut self) -> Self {
        self.is_special = true;
        self
    }
}

/// A question from the loyalty review held during the investigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options` of the loyalty-preserving answer.
    pub correct: usize,
}

impl Question {
    pub fn new(prompt: impl Into<String>, options: &[&str], correct: usize) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.iter().map(|o| (*o).to_string()).collect(),
            correct,
        }
    }

    pub fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct
    }
}

/// The player's response to "your assessment, Inspector?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Suspicious,
    Clear,
    /// Look at the rulebook. Does not consume the turn.
    ShowRulebook,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participants_follow_first_appearance() {
        let conv = Conversation::new(
            7,
            false,
            &[("Jake", "Hi"), ("Sarah", "Hey"), ("Jake", "Bye"), ("Mike", "Later")],
        );
        assert_eq!(conv.participants, vec!["Jake", "Sarah", "Mike"]);
        assert_eq!(conv.lines.len(), 4);
        assert_eq!(conv.lines[2], Line::new("Jake", "Bye"));
        assert!(!conv.is_special);
        assert!(conv.secret_description.is_none());
    }

    #[test]
    fn test_question_correct_answer() {
        let q = Question::new("Who do you serve?", &["The State", "Myself"], 0);
        assert!(q.is_correct(0));
        assert!(!q.is_correct(1));
        assert!(!q.is_correct(5));
    }
}
