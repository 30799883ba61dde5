use std::collections::HashSet;

use crate::domain::filter::ExclusionRule;

/// Manual exclusion list for known-bad game records.
///
/// The upstream source occasionally emits a phantom game (a fixture that
/// never happened but leaked into the history feed). Until the source is
/// fixed, bad records are pinned here by hand: string-form games by their
/// exact text, structured games by a field-matching rule. To exclude a new
/// record, append to the matching table below.
pub fn excluded_strings() -> HashSet<String> {
    HashSet::from(["Yankees 0 - 0 Mets - 08-09-2025 - 9:40 pm (hora Chile)".to_string()])
}

pub fn exclusion_rules() -> Vec<ExclusionRule> {
    vec![ExclusionRule {
        home_team: Some("Yankees".to_string()),
        away_team: Some("Mets".to_string()),
        home_score: Some(0),
        away_score: Some(0),
        ended_at_local_contains: Some("08-09-2025 - 9:40".to_string()),
    }]
}
