use serde::{Deserialize, Serialize};

/// Tunables for flight-level classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// High-value headcount above which a disruption escalates to High.
    pub high_value_alert_count: usize,
    /// Route distance beyond which the simulator assumes long-haul
    /// connection ratios.
    pub long_haul_distance_km: u32,
    /// Share of affected passengers assumed to be connecting on long-haul
    /// routes when no itinerary data is available.
    pub long_haul_connecting_ratio: f64,
    /// Same, for short and medium haul.
    pub short_haul_connecting_ratio: f64,
    /// Delay above which a connection is considered at high risk.
    pub high_risk_delay_minutes: u32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            high_value_alert_count: 20,
            long_haul_distance_km: 3000,
            long_haul_connecting_ratio: 0.30,
            short_haul_connecting_ratio: 0.15,
            high_risk_delay_minutes: 90,
        }
    }
}
