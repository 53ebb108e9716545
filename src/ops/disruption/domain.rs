use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for scheduled flights.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlightId(pub String);

/// Identifier wrapper for passenger records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassengerId(pub String);

/// Operational status of a flight as reported by the schedule feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisruptionStatus {
    #[serde(rename = "On Time")]
    OnTime,
    Delayed,
    Cancelled,
    Diverted,
    #[serde(rename = "Aircraft Swap")]
    AircraftSwap,
}

impl DisruptionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            DisruptionStatus::OnTime => "On Time",
            DisruptionStatus::Delayed => "Delayed",
            DisruptionStatus::Cancelled => "Cancelled",
            DisruptionStatus::Diverted => "Diverted",
            DisruptionStatus::AircraftSwap => "Aircraft Swap",
        }
    }

    pub const fn is_disrupted(self) -> bool {
        !matches!(self, DisruptionStatus::OnTime)
    }
}

/// Category derived from the raw status for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisruptionType {
    Delay,
    Cancellation,
    #[serde(rename = "Aircraft Swap")]
    AircraftSwap,
    Diversion,
}

impl From<DisruptionStatus> for DisruptionType {
    fn from(status: DisruptionStatus) -> Self {
        match status {
            DisruptionStatus::Cancelled => DisruptionType::Cancellation,
            DisruptionStatus::AircraftSwap => DisruptionType::AircraftSwap,
            DisruptionStatus::Diverted => DisruptionType::Diversion,
            DisruptionStatus::OnTime | DisruptionStatus::Delayed => DisruptionType::Delay,
        }
    }
}

/// Severity grade assigned to a disrupted flight. Ordering follows impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

/// One scheduled service. Read-only to the engines; the ingestion layer owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub flight_id: FlightId,
    pub flight_number: String,
    pub flight_date: NaiveDate,
    pub origin: String,
    pub destination: String,
    pub scheduled_departure: DateTime<Utc>,
    pub scheduled_arrival: DateTime<Utc>,
    /// Absent for cancellations.
    #[serde(default)]
    pub estimated_departure: Option<DateTime<Utc>>,
    #[serde(default)]
    pub estimated_arrival: Option<DateTime<Utc>>,
    pub status: DisruptionStatus,
    #[serde(default)]
    pub disruption_reason: Option<String>,
    /// Nonzero only when the status is Delayed.
    #[serde(default)]
    pub delay_minutes: u32,
    #[serde(default)]
    pub aircraft_type: Option<String>,
    #[serde(default)]
    pub gate: Option<String>,
    #[serde(default)]
    pub terminal: Option<String>,
}

/// Loyalty program tier. Records without a tier are treated as Guest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoyaltyTier {
    #[default]
    Guest,
    Silver,
    Gold,
    Platinum,
}

impl LoyaltyTier {
    /// Gold and Platinum members get high-value handling.
    pub const fn is_elite(self) -> bool {
        matches!(self, LoyaltyTier::Gold | LoyaltyTier::Platinum)
    }
}

/// Cabin derived from the booking fare class code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cabin {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl Cabin {
    /// Maps single-letter fare class codes onto cabins. Unknown codes are
    /// treated as economy rather than rejected.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "F" | "A" => Cabin::First,
            "J" | "C" | "D" => Cabin::Business,
            "W" | "P" => Cabin::PremiumEconomy,
            _ => Cabin::Economy,
        }
    }

    pub const fn is_premium(self) -> bool {
        matches!(self, Cabin::Business | Cabin::First)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckInStatus {
    #[serde(rename = "Checked In")]
    CheckedIn,
    #[default]
    #[serde(rename = "Not Checked In")]
    NotCheckedIn,
}

/// Onward itinerary segment attached to a passenger record when the booking
/// continues past this flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectingSegment {
    /// Airport where the connection is made.
    pub arrival_iata: String,
    #[serde(default)]
    pub departure_iata: Option<String>,
    #[serde(default)]
    pub departure_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub arrival_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub marketing_flight_number: Option<String>,
}

/// One traveler on one flight segment. The engines never mutate these; derived
/// eligibility data is returned alongside, not written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub passenger_id: PassengerId,
    pub pnr: String,
    #[serde(default)]
    pub flight_id: Option<FlightId>,
    #[serde(default)]
    pub flight_number: Option<String>,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub fare_class: String,
    pub fare_class_name: String,
    #[serde(default)]
    pub seat_number: Option<String>,
    #[serde(default)]
    pub loyalty_tier: LoyaltyTier,
    #[serde(default)]
    pub frequent_flyer_number: Option<String>,
    #[serde(default)]
    pub check_in_status: CheckInStatus,
    #[serde(default)]
    pub boarding_pass_issued: bool,
    #[serde(default)]
    pub special_service_request: Option<String>,
    #[serde(default)]
    pub checked_bags: u8,
    #[serde(default)]
    pub ticket_price_usd: f64,
    /// Present iff the booking has an onward segment after this flight.
    #[serde(default)]
    pub connection: Option<ConnectingSegment>,
}

impl Passenger {
    pub fn cabin(&self) -> Cabin {
        Cabin::from_code(&self.fare_class)
    }

    /// High-value means elite loyalty tier or a premium cabin.
    pub fn is_high_value(&self) -> bool {
        self.loyalty_tier.is_elite() || self.cabin().is_premium()
    }

    /// A passenger is in scope for a disruption once they have checked in or
    /// hold a boarding pass.
    pub fn is_engaged(&self) -> bool {
        self.check_in_status == CheckInStatus::CheckedIn || self.boarding_pass_issued
    }

    pub fn has_ssr(&self) -> bool {
        self.special_service_request
            .as_deref()
            .map(|code| !code.trim().is_empty())
            .unwrap_or(false)
    }

    /// Airport where this passenger connects, when an onward segment exists.
    pub fn connection_airport(&self) -> Option<&str> {
        self.connection
            .as_ref()
            .map(|segment| segment.arrival_iata.as_str())
    }
}

/// How likely a connecting passenger is to miss their onward flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionRisk {
    Medium,
    High,
}

/// Rollup entry for a passenger caught in a disruption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffectedPassenger {
    pub passenger_id: PassengerId,
    pub pnr: String,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub fare_class: String,
    pub fare_class_name: String,
    #[serde(default)]
    pub seat_number: Option<String>,
    pub loyalty_tier: LoyaltyTier,
    #[serde(default)]
    pub frequent_flyer_number: Option<String>,
    pub check_in_status: CheckInStatus,
    pub boarding_pass_issued: bool,
    #[serde(default)]
    pub special_service_request: Option<String>,
    pub checked_bags: u8,
    pub ticket_price_usd: f64,
}

impl AffectedPassenger {
    pub fn from_passenger(passenger: &Passenger) -> Self {
        Self {
            passenger_id: passenger.passenger_id.clone(),
            pnr: passenger.pnr.clone(),
            full_name: passenger.full_name.clone(),
            email: passenger.email.clone(),
            phone: passenger.phone.clone(),
            fare_class: passenger.fare_class.clone(),
            fare_class_name: passenger.fare_class_name.clone(),
            seat_number: passenger.seat_number.clone(),
            loyalty_tier: passenger.loyalty_tier,
            frequent_flyer_number: passenger.frequent_flyer_number.clone(),
            check_in_status: passenger.check_in_status,
            boarding_pass_issued: passenger.boarding_pass_issued,
            special_service_request: passenger.special_service_request.clone(),
            checked_bags: passenger.checked_bags,
            ticket_price_usd: passenger.ticket_price_usd,
        }
    }
}

/// Rollup entry for a Gold/Platinum or premium-cabin passenger needing
/// priority handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighValuePassenger {
    pub passenger_id: PassengerId,
    pub pnr: String,
    pub full_name: String,
    pub fare_class: String,
    pub loyalty_tier: LoyaltyTier,
    #[serde(default)]
    pub frequent_flyer_number: Option<String>,
    pub priority_level: ConnectionRisk,
}

impl HighValuePassenger {
    pub fn from_passenger(passenger: &Passenger) -> Self {
        let priority_level = if passenger.loyalty_tier == LoyaltyTier::Platinum {
            ConnectionRisk::High
        } else {
            ConnectionRisk::Medium
        };
        Self {
            passenger_id: passenger.passenger_id.clone(),
            pnr: passenger.pnr.clone(),
            full_name: passenger.full_name.clone(),
            fare_class: passenger.fare_class.clone(),
            loyalty_tier: passenger.loyalty_tier,
            frequent_flyer_number: passenger.frequent_flyer_number.clone(),
            priority_level,
        }
    }
}

/// Rollup entry for a passenger whose onward connection is at risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectingPassenger {
    pub passenger_id: PassengerId,
    pub pnr: String,
    pub full_name: String,
    pub fare_class: String,
    pub loyalty_tier: LoyaltyTier,
    pub connection_risk: ConnectionRisk,
    pub needs_rebooking: bool,
}

/// Derived aggregate describing one disrupted flight's overall impact.
/// Recomputed from scratch on every scan; never incrementally updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisruptionEvent {
    pub disruption_id: String,
    pub flight_id: FlightId,
    pub flight_number: String,
    pub flight_date: NaiveDate,
    pub origin: String,
    pub destination: String,
    pub disruption_type: DisruptionType,
    pub disruption_status: DisruptionStatus,
    pub disruption_reason: String,
    pub severity: Severity,
    pub delay_minutes: u32,
    pub scheduled_departure: DateTime<Utc>,
    #[serde(default)]
    pub estimated_departure: Option<DateTime<Utc>>,
    pub passengers_affected: usize,
    pub high_value_passengers: usize,
    pub connecting_passengers: usize,
    pub detected_at: DateTime<Utc>,
    pub requires_rebooking: bool,
    pub requires_accommodation: bool,
    pub estimated_cost_impact: f64,
    pub affected_passenger_list: Vec<AffectedPassenger>,
    pub high_value_passenger_list: Vec<HighValuePassenger>,
    pub connecting_passenger_list: Vec<ConnectingPassenger>,
}

/// Recovery priority assigned to a disrupted passenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Remedial benefit categories a disrupted passenger can qualify for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EligibleAction {
    Meal,
    Hotel,
    Rebooking,
    Compensation,
    Transport,
}

impl EligibleAction {
    pub const fn label(self) -> &'static str {
        match self {
            EligibleAction::Meal => "meal",
            EligibleAction::Hotel => "hotel",
            EligibleAction::Rebooking => "rebooking",
            EligibleAction::Compensation => "compensation",
            EligibleAction::Transport => "transport",
        }
    }
}

/// Per-passenger recovery decision. Computed on demand, never stored;
/// identical inputs always produce identical verdicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub passenger_id: PassengerId,
    pub disrupted: bool,
    pub priority: Priority,
    pub eligible_for: Vec<EligibleAction>,
    pub reason: String,
}

impl EligibilityVerdict {
    pub fn allows(&self, action: EligibleAction) -> bool {
        self.eligible_for.contains(&action)
    }
}
