//! A scripted stand-in for the terminal, for driving whole campaigns in tests.

use std::collections::VecDeque;

use super::conversation::{Conversation, Question, Verdict};
use super::outcome::Ending;
use super::presentation::{DaySummary, Presentation, Stage};
use crate::error::Result;

type VerdictPolicy = Box<dyn FnMut(&Conversation) -> Verdict>;

pub struct ScriptedPresentation {
    policy: VerdictPolicy,
    quiz_answers: VecDeque<usize>,
    final_choice: bool,
    current: Option<Conversation>,
    /// Ids in the order they were shown, repeats included.
    pub presented: Vec<u32>,
    pub stages: Vec<Stage>,
    pub summaries: Vec<DaySummary>,
    pub rulebook_views: usize,
    pub acknowledged: Vec<bool>,
    pub questions_asked: usize,
    pub final_choice_requested: bool,
    pub outcome: Option<Ending>,
}

impl ScriptedPresentation {
    pub fn with_policy(policy: impl FnMut(&Conversation) -> Verdict + 'static) -> Self {
        Self {
            policy: Box::new(policy),
            quiz_answers: VecDeque::new(),
            final_choice: true,
            current: None,
            presented: Vec::new(),
            stages: Vec::new(),
            summaries: Vec::new(),
            rulebook_views: 0,
            acknowledged: Vec::new(),
            questions_asked: 0,
            final_choice_requested: false,
            outcome: None,
        }
    }

    /// Judges every conversation by its ground truth.
    pub fn perfect() -> Self {
        Self::with_policy(truthful)
    }

    pub fn quiz(mut self, answers: &[usize]) -> Self {
        self.quiz_answers = answers.iter().copied().collect();
        self
    }

    pub fn final_choice(mut self, share: bool) -> Self {
        self.final_choice = share;
        self
    }
}

pub fn truthful(conversation: &Conversation) -> Verdict {
    if conversation.has_secret {
        Verdict::Suspicious
    } else {
        Verdict::Clear
    }
}

pub fn mistaken(conversation: &Conversation) -> Verdict {
    if conversation.has_secret {
        Verdict::Clear
    } else {
        Verdict::Suspicious
    }
}

impl Presentation for ScriptedPresentation {
    fn announce(&mut self, stage: Stage) -> Result<()> {
        self.stages.push(stage);
        Ok(())
    }

    fn present_conversation(&mut self, conversation: &Conversation) -> Result<()> {
        self.presented.push(conversation.id);
        self.current = Some(conversation.clone());
        Ok(())
    }

    fn present_revelation(&mut self, conversation: &Conversation) -> Result<()> {
        self.presented.push(conversation.id);
        Ok(())
    }

    fn request_verdict(&mut self) -> Result<Verdict> {
        let conversation = self
            .current
            .as_ref()
            .expect("verdict requested before any conversation was shown");
        Ok((self.policy)(conversation))
    }

    fn show_rulebook(&mut self) -> Result<()> {
        self.rulebook_views += 1;
        Ok(())
    }

    fn acknowledge_judgment(&mut self, flagged: bool) -> Result<()> {
        self.acknowledged.push(flagged);
        Ok(())
    }

    fn request_quiz_answer(&mut self, _question: &Question) -> Result<usize> {
        self.questions_asked += 1;
        Ok(self.quiz_answers.pop_front().unwrap_or(0))
    }

    fn request_final_choice(&mut self) -> Result<bool> {
        self.final_choice_requested = true;
        Ok(self.final_choice)
    }

    fn report_day_summary(&mut self, summary: &DaySummary) -> Result<()> {
        self.summaries.push(*summary);
        Ok(())
    }

    fn report_final_outcome(&mut self, ending: &Ending) -> Result<()> {
        self.outcome = Some(ending.clone());
        Ok(())
    }
}
