/// Published minimum connecting times in minutes, by connection airport.
const MINIMUM_CONNECTING_TIMES: &[(&str, u32)] = &[
    ("LHR", 90),
    ("AUH", 75),
    ("DXB", 90),
    ("JFK", 120),
    ("CDG", 90),
    ("LAX", 120),
    ("SFO", 120),
    ("BOM", 60),
    ("DEL", 60),
    ("CAI", 60),
    ("SYD", 120),
    ("JED", 60),
    ("MAD", 90),
];

/// Applied when an airport has no published MCT.
pub const DEFAULT_MCT_MINUTES: u32 = 90;

/// Minimum minutes required at `airport` to make an onward connection.
pub fn minimum_connecting_time(airport: &str) -> u32 {
    MINIMUM_CONNECTING_TIMES
        .iter()
        .find(|(code, _)| *code == airport)
        .map(|(_, minutes)| *minutes)
        .unwrap_or(DEFAULT_MCT_MINUTES)
}
