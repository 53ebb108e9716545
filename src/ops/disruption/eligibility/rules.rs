use super::config::EligibilityConfig;
use crate::ops::disruption::domain::{EligibleAction, Passenger, Priority};

/// Priority rules are ordered; the first match wins. Elite tiers and special
/// service requests outrank any delay-based escalation.
pub(crate) fn priority(
    passenger: &Passenger,
    delay_minutes: u32,
    config: &EligibilityConfig,
) -> Priority {
    if passenger.loyalty_tier.is_elite() || passenger.has_ssr() {
        Priority::High
    } else if delay_minutes > config.high_priority_delay {
        Priority::High
    } else if delay_minutes > config.medium_priority_delay {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Action thresholds are evaluated independently; a long enough delay
/// qualifies for several at once. Rebooking is unconditional for any
/// disrupted passenger.
pub(crate) fn eligible_actions(
    delay_minutes: u32,
    config: &EligibilityConfig,
) -> Vec<EligibleAction> {
    let mut actions = Vec::new();

    if delay_minutes >= config.meal_delay {
        actions.push(EligibleAction::Meal);
    }
    if delay_minutes >= config.compensation_delay {
        actions.push(EligibleAction::Compensation);
    }
    actions.push(EligibleAction::Rebooking);
    if delay_minutes >= config.overnight_delay {
        actions.push(EligibleAction::Hotel);
        actions.push(EligibleAction::Transport);
    }

    actions
}
