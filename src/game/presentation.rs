//! The boundary between the campaign engine and whatever shows it to the
//! player. The engine blocks on every request; implementations are
//! responsible for re-prompting until they have a valid answer.

use super::conversation::{Conversation, Question, Verdict};
use super::outcome::Ending;
use crate::error::Result;

/// Section headers of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Shift(u32),
    Investigation,
    Revelation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummary {
    pub day: u32,
    pub flagged: usize,
    pub total: usize,
}

impl DaySummary {
    pub fn cleared(&self) -> usize {
        self.total - self.flagged
    }
}

pub trait Presentation {
    fn announce(&mut self, stage: Stage) -> Result<()>;

    fn present_conversation(&mut self, conversation: &Conversation) -> Result<()>;

    /// Show a narrative-only conversation; no verdict follows.
    fn present_revelation(&mut self, conversation: &Conversation) -> Result<()>;

    fn request_verdict(&mut self) -> Result<Verdict>;

    fn show_rulebook(&mut self) -> Result<()>;

    /// Confirm a recorded verdict before moving on.
    fn acknowledge_judgment(&mut self, flagged: bool) -> Result<()>;

    /// Must return an index below `question.options.len()`.
    fn request_quiz_answer(&mut self, question: &Question) -> Result<usize>;

    /// `true` to share the truth.
    fn request_final_choice(&mut self) -> Result<bool>;

    fn report_day_summary(&mut self, summary: &DaySummary) -> Result<()>;

    fn report_final_outcome(&mut self, ending: &Ending) -> Result<()>;
}
