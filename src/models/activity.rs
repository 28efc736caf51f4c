/// Activities accepted by the `activity` schema.
pub const ACTIVITIES: [&str; 13] = [
    "Morning Routine",
    "Study",
    "Fitness Session",
    "Reading",
    "Coding Practice",
    "Project Work",
    "Language Learning",
    "Meditation",
    "Meetings",
    "Email & Admin",
    "Household Chores",
    "Family Time",
    "Evening Review",
];

/// Case-insensitive lookup returning the canonical spelling.
pub fn canonical(name: &str) -> Option<&'static str> {
    let wanted = name.trim();
    ACTIVITIES
        .iter()
        .copied()
        .find(|a| a.eq_ignore_ascii_case(wanted))
}
