use serde::{Deserialize, Serialize};

/// Delay thresholds, in minutes, driving recovery eligibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    /// Without a connection, a delay must exceed this to count as disrupted.
    pub solo_disruption_delay: u32,
    /// Meal vouchers open up at this delay.
    pub meal_delay: u32,
    /// Monetary compensation opens up at this delay.
    pub compensation_delay: u32,
    /// Hotel and ground transport open up at this delay (overnight).
    pub overnight_delay: u32,
    /// Delay beyond which any disrupted passenger is escalated to high
    /// priority regardless of tier.
    pub high_priority_delay: u32,
    /// Delay beyond which priority is at least medium.
    pub medium_priority_delay: u32,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            solo_disruption_delay: 60,
            meal_delay: 120,
            compensation_delay: 180,
            overnight_delay: 720,
            high_priority_delay: 180,
            medium_priority_delay: 120,
        }
    }
}
