pub mod campaign;
pub mod catalog;
pub mod conversation;
pub mod draw;
pub mod investigation;
pub mod judgment;
pub mod outcome;
pub mod planner;
pub mod presentation;

#[cfg(test)]
mod testing;

use log::{debug, info, warn};
use rand::Rng;

use crate::error::{GameError, Result};
use campaign::{Campaign, Investigation};
use conversation::{Conversation, Verdict};
use judgment::{Judgment, TrackingState};
use outcome::{Ending, PerformanceTier};
use presentation::{DaySummary, Presentation, Stage};

// ---------------------------------------------------------------------------
// Campaign run state
// ---------------------------------------------------------------------------

struct CampaignRun<'a, P, R: ?Sized> {
    campaign: &'a Campaign,
    presentation: &'a mut P,
    rng: &'a mut R,
    tracking: TrackingState,
}

impl<'a, P: Presentation, R: Rng + ?Sized> CampaignRun<'a, P, R> {
    fn new(campaign: &'a Campaign, presentation: &'a mut P, rng: &'a mut R) -> Self {
        Self {
            campaign,
            presentation,
            rng,
            tracking: TrackingState::new(campaign.plot_ids()),
        }
    }

    fn play(&mut self) -> Result<Ending> {
        let campaign = self.campaign;
        info!(
            "Campaign '{}' started: {} days, {} conversations per day",
            campaign.name,
            campaign.total_days(),
            campaign.conversations_per_day
        );

        let mut pool = campaign.filler_pool();
        for day in 1..=campaign.total_days() {
            pool = self.play_day(day, pool)?;
        }

        let ending = self.resolve()?;
        info!("Campaign ended: {:?}", ending.kind());
        debug!("Final tracking state: {}", serde_json::to_string(&self.tracking)?);

        self.presentation.report_final_outcome(&ending)?;
        Ok(ending)
    }

    // -----------------------------------------------------------------------
    // Shifts
    // -----------------------------------------------------------------------

    /// Play one day and hand back the pool left for the next.
    fn play_day(&mut self, day: u32, pool: Vec<&'a Conversation>) -> Result<Vec<&'a Conversation>> {
        info!("Day {day} begins ({} conversations in pool)", pool.len());
        self.presentation.announce(Stage::Shift(day))?;

        let plan = planner::plan_day(self.campaign, day, &self.tracking, pool, &mut *self.rng)?;

        for conversation in &plan.conversations {
            let suspicious = self.solicit_verdict(conversation)?;
            let judgment = Judgment::new(conversation, suspicious);
            debug!(
                "Judged #{}: suspicious={} correct={} ({:?}) truth: {}",
                conversation.id,
                suspicious,
                judgment.correct,
                judgment.classification,
                conversation.secret_description.as_deref().unwrap_or("nothing to hide")
            );
            self.tracking.apply(day, &judgment);
            self.presentation.acknowledge_judgment(suspicious)?;
        }

        let summary = DaySummary {
            day,
            flagged: self.tracking.flagged_on(day),
            total: self.tracking.judged_on(day),
        };
        info!(
            "Day {day} complete: {} flagged of {} (score so far {})",
            summary.flagged, summary.total, self.tracking.total_score
        );
        self.presentation.report_day_summary(&summary)?;

        Ok(plan.remaining_pool)
    }

    /// Show a conversation until the player commits to a verdict. Looking at
    /// the rulebook does not use up the turn.
    fn solicit_verdict(&mut self, conversation: &Conversation) -> Result<bool> {
        loop {
            self.presentation.present_conversation(conversation)?;
            match self.presentation.request_verdict()? {
                Verdict::Suspicious => return Ok(true),
                Verdict::Clear => return Ok(false),
                Verdict::ShowRulebook => self.presentation.show_rulebook()?,
            }
        }
    }

    // -----------------------------------------------------------------------
    // After the last shift
    // -----------------------------------------------------------------------

    fn resolve(&mut self) -> Result<Ending> {
        let campaign = self.campaign;
        let Some(investigation) = &campaign.investigation else {
            return Ok(self.normal_ending());
        };
        if !self.tracking.any_helped() {
            info!("No plot conversation was cleared; shift graded normally");
            return Ok(self.normal_ending());
        }

        info!(
            "A plot conversation was cleared; opening investigation ({} questions)",
            campaign.question_set().len()
        );
        self.investigate(investigation)
    }

    fn normal_ending(&self) -> Ending {
        let score = self.tracking.total_score;
        let total = self.campaign.total_conversations();
        Ending::Normal {
            tier: PerformanceTier::from_score(score, total),
            score,
            total,
            days: self.campaign.total_days(),
        }
    }

    fn investigate(&mut self, investigation: &Investigation) -> Result<Ending> {
        self.presentation.announce(Stage::Investigation)?;

        let mut answers = Vec::with_capacity(investigation.questions.len());
        for question in &investigation.questions {
            let answer = self.presentation.request_quiz_answer(question)?;
            if answer >= question.options.len() {
                warn!(
                    "Quiz answer {answer} out of range for {} options; counted as disloyal",
                    question.options.len()
                );
            }
            answers.push(answer);
        }

        let quiz_score = investigation::score(&investigation.questions, &answers);
        info!(
            "Loyalty review: {quiz_score}/{} (need {})",
            investigation.questions.len(),
            investigation.pass_threshold
        );
        if !investigation::passes(quiz_score, investigation.pass_threshold) {
            return Ok(Ending::Caught {
                quiz_score,
                questions: investigation.questions.len(),
            });
        }

        self.presentation.announce(Stage::Revelation)?;
        for &id in &investigation.revelations {
            let conversation = self.campaign.conversation(id).ok_or_else(|| {
                GameError::InvalidCampaign(format!("revelation #{id} does not exist"))
            })?;
            self.presentation.present_revelation(conversation)?;
        }

        let share = self.presentation.request_final_choice()?;
        info!("Final choice: share the truth = {share}");
        Ok(if share { Ending::Good } else { Ending::Silence })
    }
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Play a whole campaign through `presentation`, shuffling with `rng`.
///
/// The only failures are content errors (an exhausted pool, a broken
/// campaign table) and whatever the presentation raises, such as an interrupt.
pub fn run<P: Presentation, R: Rng + ?Sized>(
    campaign: &Campaign,
    presentation: &mut P,
    rng: &mut R,
) -> Result<Ending> {
    CampaignRun::new(campaign, presentation, rng).play()
}
