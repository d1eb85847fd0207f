// src/domain/geos.rs

/// States offered in the location filter, with their counties.
pub const STATE_COUNTIES: &[(&str, &[&str])] = &[
    (
        "Texas",
        &["Dallas County", "Harris County", "Travis County", "Tarrant County"],
    ),
    (
        "Florida",
        &["Miami-Dade County", "Broward County", "Palm Beach County"],
    ),
    (
        "California",
        &["Los Angeles County", "Orange County", "San Diego County"],
    ),
    ("Arizona", &["Maricopa County", "Pima County"]),
];

pub fn states() -> impl Iterator<Item = &'static str> {
    STATE_COUNTIES.iter().map(|(state, _)| *state)
}

/// Counties selectable once `state` is chosen. Empty for "" or an unknown state,
/// since a county only means something relative to a state.
pub fn counties_for(state: &str) -> &'static [&'static str] {
    STATE_COUNTIES
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, counties)| *counties)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counties_for_known_and_unknown_states() {
        assert_eq!(states().count(), 4);
        assert!(counties_for("Texas").contains(&"Harris County"));
        assert_eq!(counties_for("Arizona").len(), 2);
        assert!(counties_for("").is_empty());
        assert!(counties_for("Nevada").is_empty());
    }
}
