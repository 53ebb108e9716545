use crate::ops::disruption::domain::{DisruptionStatus, Severity};

/// Grades a disruption. Rules are priority-ordered; the first match wins.
pub(crate) fn grade(
    status: DisruptionStatus,
    delay_minutes: u32,
    high_value_count: usize,
    high_value_alert_count: usize,
) -> Severity {
    if status == DisruptionStatus::Cancelled {
        return Severity::Critical;
    }

    if high_value_count > high_value_alert_count {
        return Severity::High;
    }

    if status == DisruptionStatus::Delayed {
        return if delay_minutes > 240 {
            Severity::Critical
        } else if delay_minutes > 120 {
            Severity::High
        } else if delay_minutes > 30 {
            Severity::Medium
        } else {
            Severity::Low
        };
    }

    if matches!(
        status,
        DisruptionStatus::AircraftSwap | DisruptionStatus::Diverted
    ) {
        return Severity::Medium;
    }

    Severity::Low
}
