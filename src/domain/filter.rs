use std::collections::HashSet;

use super::models::{Boxscore, GameRecord};

/// One manual exclusion rule for structured game records.
///
/// Every present constraint must hold for the rule to match: plain fields
/// by exact equality, `ended_at_local_contains` by case-sensitive substring
/// against the game's localized end timestamp (missing timestamp counts as
/// the empty string).
#[derive(Debug, Clone)]
pub struct ExclusionRule {
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
    pub ended_at_local_contains: Option<String>,
}

impl ExclusionRule {
    pub fn matches(&self, game: &Boxscore) -> bool {
        if let Some(home_team) = &self.home_team {
            if game.home_team != *home_team {
                return false;
            }
        }
        if let Some(away_team) = &self.away_team {
            if game.away_team != *away_team {
                return false;
            }
        }
        if let Some(home_score) = self.home_score {
            if game.home_score != home_score {
                return false;
            }
        }
        if let Some(away_score) = self.away_score {
            if game.away_score != away_score {
                return false;
            }
        }
        if let Some(fragment) = &self.ended_at_local_contains {
            let ended_at = game.ended_at_local.as_deref().unwrap_or("");
            if !ended_at.contains(fragment.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Remove denylisted games from the history, preserving order.
///
/// String-form games are excluded when their trimmed text equals a
/// denylist entry; structured games when at least one rule fully matches.
/// Unrecognized record shapes always pass through.
pub fn filter_games(
    games: Vec<GameRecord>,
    rules: &[ExclusionRule],
    strings: &HashSet<String>,
) -> Vec<GameRecord> {
    games
        .into_iter()
        .filter(|game| !should_exclude(game, rules, strings))
        .collect()
}

fn should_exclude(game: &GameRecord, rules: &[ExclusionRule], strings: &HashSet<String>) -> bool {
    match game {
        GameRecord::Text(text) => strings.contains(text.trim()),
        GameRecord::Boxscore(boxscore) => rules.iter().any(|rule| rule.matches(boxscore)),
        GameRecord::Other(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{excluded_strings, exclusion_rules};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn boxscore(home: &str, away: &str, hs: i64, as_: i64, ended: Option<&str>) -> GameRecord {
        GameRecord::Boxscore(Boxscore {
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_score: hs,
            away_score: as_,
            ended_at_local: ended.map(str::to_string),
            extra: BTreeMap::new(),
        })
    }

    #[test]
    fn test_excludes_denylisted_string_exactly() {
        let games = vec![
            GameRecord::Text(
                "Yankees 0 - 0 Mets - 08-09-2025 - 9:40 pm (hora Chile)".to_string(),
            ),
            GameRecord::Text(
                "Yankees 1 - 0 Mets - 08-09-2025 - 9:40 pm (hora Chile)".to_string(),
            ),
        ];

        let kept = filter_games(games, &exclusion_rules(), &excluded_strings());

        assert_eq!(
            kept,
            vec![GameRecord::Text(
                "Yankees 1 - 0 Mets - 08-09-2025 - 9:40 pm (hora Chile)".to_string()
            )]
        );
    }

    #[test]
    fn test_string_matching_trims_whitespace() {
        let games = vec![GameRecord::Text(
            "  Yankees 0 - 0 Mets - 08-09-2025 - 9:40 pm (hora Chile) \n".to_string(),
        )];

        let kept = filter_games(games, &exclusion_rules(), &excluded_strings());

        assert!(kept.is_empty());
    }

    #[test]
    fn test_excludes_boxscore_matching_every_rule_constraint() {
        let games = vec![boxscore(
            "Yankees",
            "Mets",
            0,
            0,
            Some("08-09-2025 - 9:40 pm (hora Chile)"),
        )];

        let kept = filter_games(games, &exclusion_rules(), &excluded_strings());

        assert!(kept.is_empty());
    }

    #[test]
    fn test_keeps_boxscore_when_any_constraint_fails() {
        let games = vec![
            // Different score
            boxscore("Yankees", "Mets", 1, 0, Some("08-09-2025 - 9:40 pm (hora Chile)")),
            // Different timestamp
            boxscore("Yankees", "Mets", 0, 0, Some("08-10-2025 - 7:15 pm (hora Chile)")),
            // Missing timestamp counts as empty string, so the substring fails
            boxscore("Yankees", "Mets", 0, 0, None),
            // Different teams
            boxscore("Dodgers", "Giants", 0, 0, Some("08-09-2025 - 9:40 pm (hora Chile)")),
        ];

        let kept = filter_games(games.clone(), &exclusion_rules(), &excluded_strings());

        assert_eq!(kept, games);
    }

    #[test]
    fn test_unrecognized_record_shapes_pass_through() {
        let games = vec![
            GameRecord::Other(json!({"home_team": "Yankees", "note": "no scores here"})),
            GameRecord::Other(json!(42)),
        ];

        let kept = filter_games(games.clone(), &exclusion_rules(), &excluded_strings());

        assert_eq!(kept, games);
    }

    #[test]
    fn test_filter_preserves_order() {
        let games = vec![
            GameRecord::Text("Dodgers 3 - 2 Padres".to_string()),
            GameRecord::Text(
                "Yankees 0 - 0 Mets - 08-09-2025 - 9:40 pm (hora Chile)".to_string(),
            ),
            boxscore("Cubs", "Cardinals", 5, 4, Some("08-11-2025 - 8:00 pm (hora Chile)")),
            GameRecord::Text("Giants 1 - 0 Rockies".to_string()),
        ];

        let kept = filter_games(games.clone(), &exclusion_rules(), &excluded_strings());

        assert_eq!(kept.len(), 3);
        assert_eq!(kept[0], games[0]);
        assert_eq!(kept[1], games[2]);
        assert_eq!(kept[2], games[3]);
    }

    #[test]
    fn test_empty_rule_set_keeps_everything() {
        let games = vec![
            GameRecord::Text(
                "Yankees 0 - 0 Mets - 08-09-2025 - 9:40 pm (hora Chile)".to_string(),
            ),
            boxscore("Yankees", "Mets", 0, 0, Some("08-09-2025 - 9:40 pm (hora Chile)")),
        ];

        let kept = filter_games(games.clone(), &[], &HashSet::new());

        assert_eq!(kept, games);
    }
}
