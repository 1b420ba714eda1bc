//! A campaign is the configuration table for one variant of the game: the
//! catalog of conversations, the day-by-day plan, and the optional
//! investigation arc.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::conversation::{Conversation, Question};
use crate::error::{GameError, Result};

/// Quiz answers are read as a single digit key.
pub const MAX_QUIZ_OPTIONS: usize = 9;

/// What a single day of the shift must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum DayRule {
    /// Always shown.
    Plot { conversation: u32 },
    /// Shown only if the plot conversation of `trigger_day` was flagged correctly.
    FollowUp { conversation: u32, trigger_day: u32 },
    /// Nothing mandatory; the whole day is drawn from the pool.
    Filler,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investigation {
    pub questions: Vec<Question>,
    /// Minimum number of loyal answers to survive the review.
    pub pass_threshold: usize,
    /// Narrative-only conversations shown on the day of the truth, in order.
    pub revelations: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub name: String,
    pub conversations_per_day: usize,
    pub conversations: Vec<Conversation>,
    /// Day `n` is `days[n - 1]`.
    pub days: Vec<DayRule>,
    /// Absent in variants without the investigation arc.
    #[serde(default)]
    pub investigation: Option<Investigation>,
}

impl Campaign {
    /// Parse a campaign table from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let campaign: Campaign = serde_json::from_str(json)?;
        campaign.validate()?;
        Ok(campaign)
    }

    pub fn all_conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn question_set(&self) -> &[Question] {
        self.investigation
            .as_ref()
            .map(|inv| inv.questions.as_slice())
            .unwrap_or(&[])
    }

    pub fn conversation(&self, id: u32) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn total_days(&self) -> u32 {
        self.days.len() as u32
    }

    pub fn day_rule(&self, day: u32) -> Option<DayRule> {
        let index = usize::try_from(day).ok()?.checked_sub(1)?;
        self.days.get(index).copied()
    }

    /// Ids of the conversations that are always shown.
    pub fn plot_ids(&self) -> Vec<u32> {
        self.days
            .iter()
            .filter_map(|rule| match rule {
                DayRule::Plot { conversation } => Some(*conversation),
                _ => None,
            })
            .collect()
    }

    /// Number of conversations judged over the whole shift.
    pub fn total_conversations(&self) -> usize {
        self.days.len() * self.conversations_per_day
    }

    /// The filler pool a run starts from: every non-special conversation, in
    /// catalog order.
    pub fn filler_pool(&self) -> Vec<&Conversation> {
        self.conversations.iter().filter(|c| !c.is_special).collect()
    }

    /// Check that the table is internally consistent and that the pool can
    /// fill every day even when no follow-up is unlocked.
    pub fn validate(&self) -> Result<()> {
        if self.conversations_per_day == 0 {
            return Err(invalid("conversations_per_day must be positive"));
        }
        if self.days.is_empty() {
            return Err(invalid("campaign has no days"));
        }

        let mut seen = HashSet::new();
        for conv in &self.conversations {
            if !seen.insert(conv.id) {
                return Err(invalid(format!("conversation #{} appears twice", conv.id)));
            }
            if conv.participants.len() < 2 {
                return Err(invalid(format!(
                    "conversation #{} needs at least two participants",
                    conv.id
                )));
            }
        }

        // Each plot-critical conversation is scheduled exactly once.
        let mut planned = HashSet::new();
        let mut plan_once = |id: u32| {
            if planned.insert(id) {
                Ok(())
            } else {
                Err(invalid(format!(
                    "conversation #{id} is used more than once in the campaign plan"
                )))
            }
        };

        let mut filler_needed = 0;
        for (index, rule) in self.days.iter().enumerate() {
            let day = index as u32 + 1;
            match *rule {
                DayRule::Plot { conversation } => {
                    self.require_special(conversation)?;
                    plan_once(conversation)?;
                    filler_needed += self.conversations_per_day - 1;
                }
                DayRule::FollowUp {
                    conversation,
                    trigger_day,
                } => {
                    self.require_special(conversation)?;
                    plan_once(conversation)?;
                    if trigger_day == 0 || trigger_day >= day {
                        return Err(invalid(format!(
                            "day {day} follows up on day {trigger_day}, which is not an earlier day"
                        )));
                    }
                    if !matches!(self.day_rule(trigger_day), Some(DayRule::Plot { .. })) {
                        return Err(invalid(format!(
                            "day {day} follows up on day {trigger_day}, which has no plot conversation"
                        )));
                    }
                    filler_needed += self.conversations_per_day;
                }
                DayRule::Filler => filler_needed += self.conversations_per_day,
            }
        }

        let available = self.filler_pool().len();
        if available < filler_needed {
            return Err(invalid(format!(
                "filler pool holds {available} conversations, the days may need {filler_needed}"
            )));
        }

        if let Some(investigation) = &self.investigation {
            for (i, question) in investigation.questions.iter().enumerate() {
                if question.options.len() < 2 {
                    return Err(invalid(format!("question {} needs two or more options", i + 1)));
                }
                if question.options.len() > MAX_QUIZ_OPTIONS {
                    return Err(invalid(format!(
                        "question {} has more than {MAX_QUIZ_OPTIONS} options",
                        i + 1
                    )));
                }
                if question.correct >= question.options.len() {
                    return Err(invalid(format!(
                        "question {} marks option {} correct but has {} options",
                        i + 1,
                        question.correct + 1,
                        question.options.len()
                    )));
                }
            }
            if investigation.pass_threshold > investigation.questions.len() {
                return Err(invalid("pass threshold exceeds the number of questions"));
            }
            for &id in &investigation.revelations {
                self.require_special(id)?;
                plan_once(id)?;
            }
        }

        Ok(())
    }

    fn require_special(&self, id: u32) -> Result<()> {
        match self.conversation(id) {
            Some(conv) if conv.is_special => Ok(()),
            Some(_) => Err(invalid(format!(
                "conversation #{id} is plot-critical but not marked special"
            ))),
            None => Err(invalid(format!("conversation #{id} does not exist"))),
        }
    }
}

fn invalid(message: impl Into<String>) -> GameError {
    GameError::InvalidCampaign(message.into())
}
