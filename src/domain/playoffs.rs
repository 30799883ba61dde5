use std::collections::BTreeMap;

use super::models::{BracketSeries, TeamRow};

/// Derive the single-elimination seeding template from the ranked table.
///
/// The top 8 teams are paired symmetrically (1v8, 2v7, 3v6, 4v5) into
/// QF1..QF4; semifinals and the final reference earlier series by label
/// until actual results feed the bracket. With fewer than 8 ranked teams
/// there is no partial bracket, just an empty map.
pub fn build_playoffs(rows: &[TeamRow]) -> BTreeMap<String, BracketSeries> {
    let mut series = BTreeMap::new();
    if rows.len() < 8 {
        return series;
    }

    let top8 = &rows[..8];
    for seed in 0..4 {
        series.insert(
            format!("QF{}", seed + 1),
            BracketSeries::new(top8[seed].team.clone(), top8[7 - seed].team.clone()),
        );
    }
    series.insert(
        "SF1".to_string(),
        BracketSeries::new("Ganador QF1", "Ganador QF4"),
    );
    series.insert(
        "SF2".to_string(),
        BracketSeries::new("Ganador QF2", "Ganador QF3"),
    );
    series.insert(
        "Final".to_string(),
        BracketSeries::new("Ganador SF1", "Ganador SF2"),
    );

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap as Stats;

    fn ranked_rows(teams: &[&str]) -> Vec<TeamRow> {
        teams
            .iter()
            .map(|team| TeamRow {
                team: team.to_string(),
                stats: Stats::new(),
            })
            .collect()
    }

    const EIGHT_TEAMS: [&str; 8] = [
        "Yankees", "Dodgers", "Mets", "Cubs", "Giants", "Padres", "Cardinals", "Rockies",
    ];

    #[test]
    fn test_fewer_than_eight_teams_yields_empty_bracket() {
        assert!(build_playoffs(&[]).is_empty());
        assert!(build_playoffs(&ranked_rows(&EIGHT_TEAMS[..7])).is_empty());
    }

    #[test]
    fn test_quarterfinals_pair_symmetric_seeds() {
        let series = build_playoffs(&ranked_rows(&EIGHT_TEAMS));

        assert_eq!(series.len(), 7);
        assert_eq!(series["QF1"].teams, ["Yankees", "Rockies"]);
        assert_eq!(series["QF2"].teams, ["Dodgers", "Cardinals"]);
        assert_eq!(series["QF3"].teams, ["Mets", "Padres"]);
        assert_eq!(series["QF4"].teams, ["Cubs", "Giants"]);
    }

    #[test]
    fn test_later_rounds_are_placeholders_with_empty_games() {
        let series = build_playoffs(&ranked_rows(&EIGHT_TEAMS));

        assert_eq!(series["SF1"].teams, ["Ganador QF1", "Ganador QF4"]);
        assert_eq!(series["SF2"].teams, ["Ganador QF2", "Ganador QF3"]);
        assert_eq!(series["Final"].teams, ["Ganador SF1", "Ganador SF2"]);
        assert!(series.values().all(|s| s.games.is_empty()));
    }

    #[test]
    fn test_teams_below_eighth_place_are_ignored() {
        let mut teams = EIGHT_TEAMS.to_vec();
        teams.extend(["Marlins", "Brewers"]);

        let series = build_playoffs(&ranked_rows(&teams));

        assert_eq!(series.len(), 7);
        let participants: Vec<&str> = series
            .values()
            .flat_map(|s| s.teams.iter().map(String::as_str))
            .collect();
        assert!(!participants.contains(&"Marlins"));
        assert!(!participants.contains(&"Brewers"));
    }
}
