//! Deciding which conversations land on the Inspector's desk each day.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use super::campaign::{Campaign, DayRule};
use super::conversation::Conversation;
use super::draw::draw;
use super::judgment::TrackingState;
use crate::error::{GameError, Result};

/// A planned day, plus the pool left over for the days after it.
#[derive(Debug)]
pub struct DayPlan<'c> {
    pub conversations: Vec<&'c Conversation>,
    pub remaining_pool: Vec<&'c Conversation>,
}

/// The mandatory conversation for `day`, if the day has one given the
/// judgments so far.
pub fn mandatory_conversation(
    campaign: &Campaign,
    day: u32,
    tracking: &TrackingState,
) -> Result<Option<u32>> {
    let rule = campaign.day_rule(day).ok_or(GameError::UnknownDay(day))?;
    match rule {
        DayRule::Plot { conversation } => Ok(Some(conversation)),
        DayRule::FollowUp {
            conversation,
            trigger_day,
        } => match campaign.day_rule(trigger_day) {
            Some(DayRule::Plot {
                conversation: trigger,
            }) => Ok(tracking.flagged_correctly(trigger).then_some(conversation)),
            _ => Err(GameError::InvalidCampaign(format!(
                "day {day} follows up on day {trigger_day}, which has no plot conversation"
            ))),
        },
        DayRule::Filler => Ok(None),
    }
}

/// Assemble the conversations for `day`: the mandatory one (if any) topped up
/// from `pool`, then shuffled so the mandatory one has no fixed position.
pub fn plan_day<'c, R: Rng + ?Sized>(
    campaign: &'c Campaign,
    day: u32,
    tracking: &TrackingState,
    pool: Vec<&'c Conversation>,
    rng: &mut R,
) -> Result<DayPlan<'c>> {
    let mut conversations = Vec::with_capacity(campaign.conversations_per_day);

    if let Some(id) = mandatory_conversation(campaign, day, tracking)? {
        let conv = campaign
            .conversation(id)
            .ok_or_else(|| GameError::InvalidCampaign(format!("conversation #{id} does not exist")))?;
        conversations.push(conv);
    }

    let needed = campaign.conversations_per_day.saturating_sub(conversations.len());
    let (drawn, remaining_pool) = draw(pool, needed, rng)?;
    conversations.extend(drawn);
    conversations.shuffle(rng);

    debug!(
        "Day {day} planned: {:?} ({} left in pool)",
        conversations.iter().map(|c| c.id).collect::<Vec<_>>(),
        remaining_pool.len()
    );

    Ok(DayPlan {
        conversations,
        remaining_pool,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog;
    use crate::game::judgment::Judgment;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn count_id(plan: &DayPlan, id: u32) -> usize {
        plan.conversations.iter().filter(|c| c.id == id).count()
    }

    fn flag_plot(campaign: &Campaign, tracking: &mut TrackingState, id: u32, suspicious: bool) {
        let conv = campaign.conversation(id).unwrap();
        tracking.apply(1, &Judgment::new(conv, suspicious));
    }

    #[test]
    fn test_plot_days_always_include_their_conversation() {
        let campaign = catalog::surveillance_state();
        let plot_ids = campaign.plot_ids();

        let fresh = TrackingState::new(plot_ids.clone());
        let mut all_flagged = fresh.clone();
        let mut all_missed = fresh.clone();
        for &id in &plot_ids {
            flag_plot(&campaign, &mut all_flagged, id, true);
            flag_plot(&campaign, &mut all_missed, id, false);
        }
        assert!(plot_ids.iter().all(|&id| all_flagged.flagged_correctly(id)));
        assert!(all_missed.any_helped());

        for tracking in [&fresh, &all_flagged, &all_missed] {
            for seed in 0..20 {
                for (day, &plot_id) in (1..=3).zip(plot_ids.iter()) {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let plan =
                        plan_day(&campaign, day, tracking, campaign.filler_pool(), &mut rng).unwrap();
                    assert_eq!(plan.conversations.len(), campaign.conversations_per_day);
                    assert_eq!(count_id(&plan, plot_id), 1);
                }
            }
        }
    }

    #[test]
    fn test_follow_up_included_iff_trigger_flagged() {
        let campaign = catalog::surveillance_state();
        let plot_ids = campaign.plot_ids();

        for (day, (&plot_id, follow_up)) in (4..=6).zip(plot_ids.iter().zip([4, 5, 6])) {
            for flagged in [true, false] {
                let mut tracking = TrackingState::new(plot_ids.clone());
                flag_plot(&campaign, &mut tracking, plot_id, flagged);

                let mut rng = StdRng::seed_from_u64(day as u64);
                let plan =
                    plan_day(&campaign, day, &tracking, campaign.filler_pool(), &mut rng).unwrap();
                assert_eq!(plan.conversations.len(), campaign.conversations_per_day);
                assert_eq!(count_id(&plan, follow_up), usize::from(flagged));
            }
        }
    }

    #[test]
    fn test_other_plot_flags_do_not_unlock_follow_up() {
        let campaign = catalog::surveillance_state();
        let plot_ids = campaign.plot_ids();
        let mut tracking = TrackingState::new(plot_ids.clone());
        flag_plot(&campaign, &mut tracking, plot_ids[1], true);
        flag_plot(&campaign, &mut tracking, plot_ids[2], true);

        let mut rng = StdRng::seed_from_u64(3);
        let plan = plan_day(&campaign, 4, &tracking, campaign.filler_pool(), &mut rng).unwrap();
        assert_eq!(count_id(&plan, 4), 0);
    }

    #[test]
    fn test_pool_shrinks_by_drawn_count() {
        let campaign = catalog::surveillance_state();
        let tracking = TrackingState::new(campaign.plot_ids());
        let pool = campaign.filler_pool();
        let before = pool.len();

        let mut rng = StdRng::seed_from_u64(11);
        let plan = plan_day(&campaign, 1, &tracking, pool, &mut rng).unwrap();
        assert_eq!(plan.remaining_pool.len(), before - 5);
        for conv in &plan.conversations {
            assert!(plan.remaining_pool.iter().all(|r| r.id != conv.id));
        }
    }

    #[test]
    fn test_short_pool_surfaces_error() {
        let campaign = catalog::surveillance_state();
        let tracking = TrackingState::new(campaign.plot_ids());
        let pool: Vec<_> = campaign.filler_pool().into_iter().take(3).collect();

        let mut rng = StdRng::seed_from_u64(5);
        let result = plan_day(&campaign, 1, &tracking, pool, &mut rng);
        assert!(matches!(
            result,
            Err(GameError::InsufficientPool {
                requested: 5,
                available: 3
            })
        ));
    }

    #[test]
    fn test_unknown_day() {
        let campaign = catalog::surveillance_state();
        let tracking = TrackingState::new(campaign.plot_ids());
        let mut rng = StdRng::seed_from_u64(5);
        let result = plan_day(&campaign, 7, &tracking, campaign.filler_pool(), &mut rng);
        assert!(matches!(result, Err(GameError::UnknownDay(7))));
    }
}
