use crate::core::{Facility, FilterState};

/// Lowercases and trims; absent text normalizes to the empty string.
pub fn normalize(value: Option<&str>) -> String {
    value.unwrap_or("").to_lowercase().trim().to_string()
}

pub fn matches_text(facility: &Facility, query: &str) -> bool {
    query.is_empty()
        || normalize(facility.name.as_deref()).contains(query)
        || normalize(facility.kind.as_deref()).contains(query)
}

pub fn matches_accessibility(facility: &Facility, accessible_only: bool) -> bool {
    !accessible_only || facility.is_wheelchair_accessible()
}

/// Facilities matching both filters, in source order.
pub fn filter_facilities<'a>(facilities: &'a [Facility], state: &FilterState) -> Vec<&'a Facility> {
    let query = normalize(Some(state.query.as_str()));

    facilities
        .iter()
        .filter(|f| matches_text(f, &query) && matches_accessibility(f, state.accessible_only))
        .collect()
}
