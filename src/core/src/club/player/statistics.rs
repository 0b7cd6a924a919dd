use crate::club::TeamId;
use serde::{Deserialize, Serialize};

/// What the match engine reports about one player after a match.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchPerformance {
    pub minutes_played: u16,
    pub goals: u16,
    pub assists: u16,
    pub yellow_cards: u8,
    pub red_cards: u8,
    pub clean_sheet: bool,
    /// Match rating on a 0-10 scale.
    pub rating: f64,
}

impl MatchPerformance {
    pub fn new(minutes_played: u16, rating: f64) -> Self {
        MatchPerformance {
            minutes_played,
            rating,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CareerStats {
    pub total_matches: u32,
    pub total_goals: u32,
    pub total_assists: u32,
    pub total_yellow_cards: u32,
    pub total_red_cards: u32,
    pub total_clean_sheets: u32,
    pub season_stats: Vec<SeasonStats>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeasonStats {
    pub season_id: String,
    pub team_id: Option<TeamId>,
    pub matches: u32,
    pub goals: u32,
    pub assists: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub clean_sheets: u32,
    pub average_rating: f64,
}

impl SeasonStats {
    pub fn new(season_id: impl Into<String>, team_id: Option<TeamId>) -> Self {
        SeasonStats {
            season_id: season_id.into(),
            team_id,
            ..Default::default()
        }
    }

    fn record(&mut self, performance: &MatchPerformance) {
        self.matches += 1;
        self.goals += performance.goals as u32;
        self.assists += performance.assists as u32;
        self.yellow_cards += performance.yellow_cards as u32;
        self.red_cards += performance.red_cards as u32;
        if performance.clean_sheet {
            self.clean_sheets += 1;
        }

        // running mean
        self.average_rating += (performance.rating - self.average_rating) / self.matches as f64;
    }
}

impl CareerStats {
    pub fn start_season(&mut self, season_id: impl Into<String>, team_id: Option<TeamId>) {
        self.season_stats.push(SeasonStats::new(season_id, team_id));
    }

    pub fn current_season(&self) -> Option<&SeasonStats> {
        self.season_stats.last()
    }

    pub fn record(&mut self, performance: &MatchPerformance) {
        self.total_matches += 1;
        self.total_goals += performance.goals as u32;
        self.total_assists += performance.assists as u32;
        self.total_yellow_cards += performance.yellow_cards as u32;
        self.total_red_cards += performance.red_cards as u32;
        if performance.clean_sheet {
            self.total_clean_sheets += 1;
        }

        if let Some(season) = self.season_stats.last_mut() {
            season.record(performance);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_without_open_season_only_updates_totals() {
        let mut stats = CareerStats::default();
        stats.record(&MatchPerformance {
            goals: 2,
            assists: 1,
            ..MatchPerformance::new(90, 8.0)
        });

        assert_eq!(stats.total_matches, 1);
        assert_eq!(stats.total_goals, 2);
        assert_eq!(stats.total_assists, 1);
        assert!(stats.current_season().is_none());
    }

    #[test]
    fn test_season_average_rating() {
        let mut stats = CareerStats::default();
        stats.start_season("2024/25", Some(TeamId(1)));

        stats.record(&MatchPerformance::new(90, 6.0));
        stats.record(&MatchPerformance::new(90, 8.0));
        stats.record(&MatchPerformance {
            clean_sheet: true,
            ..MatchPerformance::new(90, 7.0)
        });

        let season = stats.current_season().unwrap();
        assert_eq!(season.matches, 3);
        assert_eq!(season.clean_sheets, 1);
        assert!((season.average_rating - 7.0).abs() < 1e-9);
        assert_eq!(stats.total_clean_sheets, 1);
    }

    #[test]
    fn test_new_season_starts_fresh() {
        let mut stats = CareerStats::default();
        stats.start_season("2023/24", None);
        stats.record(&MatchPerformance::new(45, 5.0));
        stats.start_season("2024/25", None);

        assert_eq!(stats.season_stats.len(), 2);
        assert_eq!(stats.current_season().unwrap().matches, 0);
        assert_eq!(stats.total_matches, 1);
    }
}
