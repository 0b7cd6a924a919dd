use crate::club::PlayerPosition;
use crate::common::SquadError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

pub const LINEUP_SIZE: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Formation {
    #[default]
    #[serde(rename = "4-4-2")]
    F442,
    #[serde(rename = "4-3-3")]
    F433,
    #[serde(rename = "4-5-1")]
    F451,
    #[serde(rename = "3-5-2")]
    F352,
    #[serde(rename = "5-3-2")]
    F532,
    #[serde(rename = "4-2-3-1")]
    F4231,
    #[serde(rename = "4-3-1-2")]
    F4312,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormationRequirements {
    pub goalkeepers: usize,
    pub defenders: usize,
    pub midfielders: usize,
    pub forwards: usize,
}

impl FormationRequirements {
    const fn new(defenders: usize, midfielders: usize, forwards: usize) -> Self {
        FormationRequirements {
            goalkeepers: 1,
            defenders,
            midfielders,
            forwards,
        }
    }

    pub fn get(&self, position: PlayerPosition) -> usize {
        match position {
            PlayerPosition::Goalkeeper => self.goalkeepers,
            PlayerPosition::Defender => self.defenders,
            PlayerPosition::Midfielder => self.midfielders,
            PlayerPosition::Forward => self.forwards,
        }
    }

    pub fn total(&self) -> usize {
        self.goalkeepers + self.defenders + self.midfielders + self.forwards
    }
}

impl Formation {
    pub const ALL: [Formation; 7] = [
        Formation::F442,
        Formation::F433,
        Formation::F451,
        Formation::F352,
        Formation::F532,
        Formation::F4231,
        Formation::F4312,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Formation::F442 => "4-4-2",
            Formation::F433 => "4-3-3",
            Formation::F451 => "4-5-1",
            Formation::F352 => "3-5-2",
            Formation::F532 => "5-3-2",
            Formation::F4231 => "4-2-3-1",
            Formation::F4312 => "4-3-1-2",
        }
    }

    /// Every variant is a known formation; unknown names are rejected by `FromStr`.
    pub fn is_valid(&self) -> bool {
        Formation::ALL.contains(self)
    }

    pub fn requirements(&self) -> FormationRequirements {
        match self {
            Formation::F442 => FormationRequirements::new(4, 4, 2),
            Formation::F433 => FormationRequirements::new(4, 3, 3),
            Formation::F451 => FormationRequirements::new(4, 5, 1),
            Formation::F352 => FormationRequirements::new(3, 5, 2),
            Formation::F532 => FormationRequirements::new(5, 3, 2),
            // 2 holding + 3 attacking midfielders
            Formation::F4231 => FormationRequirements::new(4, 5, 1),
            // 3 central + 1 attacking midfielder
            Formation::F4312 => FormationRequirements::new(4, 4, 2),
        }
    }

    /// Matchup multiplier against an opponent's shape, 1.0 when neither side
    /// has an edge.
    pub fn strength_against(&self, opponent: Formation) -> f64 {
        use Formation::*;

        match (self, opponent) {
            (F442, F433) => 0.9,
            (F442, F451) => 1.1,
            (F442, F352) => 1.0,

            (F433, F442) => 1.1,
            (F433, F451) => 0.9,
            (F433, F532) => 1.1,

            (F451, F433) => 1.1,
            (F451, F442) => 0.9,
            (F451, F352) => 1.0,

            (F352, F442) => 1.0,
            (F352, F532) => 0.9,
            (F352, F433) => 0.9,

            (F532, F433) => 0.9,
            (F532, F352) => 1.1,
            (F532, F442) => 1.0,

            _ => 1.0,
        }
    }
}

impl Display for Formation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Formation {
    type Err = SquadError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Formation::ALL
            .into_iter()
            .find(|formation| formation.as_str() == s.trim())
            .ok_or_else(|| SquadError::InvalidFormation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirements_sum_to_eleven() {
        for formation in Formation::ALL {
            let requirements = formation.requirements();
            assert_eq!(requirements.total(), LINEUP_SIZE, "{}", formation);
            assert_eq!(requirements.get(PlayerPosition::Goalkeeper), 1);
            assert!(formation.is_valid());
        }
    }

    #[test]
    fn test_requirements_table() {
        let requirements = Formation::F352.requirements();

        assert_eq!(requirements.get(PlayerPosition::Defender), 3);
        assert_eq!(requirements.get(PlayerPosition::Midfielder), 5);
        assert_eq!(requirements.get(PlayerPosition::Forward), 2);

        assert_eq!(Formation::F4231.requirements(), Formation::F451.requirements());
        assert_eq!(Formation::F4312.requirements(), Formation::F442.requirements());
    }

    #[test]
    fn test_parse_formation() {
        assert_eq!("4-2-3-1".parse::<Formation>(), Ok(Formation::F4231));
        assert_eq!(Formation::F532.to_string(), "5-3-2");

        let err = "4-4-3".parse::<Formation>().unwrap_err();
        assert_eq!(err.code(), "INVALID_FORMATION");
    }

    #[test]
    fn test_strength_against() {
        assert_eq!(Formation::F442.strength_against(Formation::F433), 0.9);
        assert_eq!(Formation::F433.strength_against(Formation::F442), 1.1);
        assert_eq!(Formation::F532.strength_against(Formation::F352), 1.1);
        assert_eq!(Formation::F4231.strength_against(Formation::F442), 1.0);
        assert_eq!(Formation::F442.strength_against(Formation::F442), 1.0);
    }

    #[test]
    fn test_serialized_as_shape_string() {
        assert_eq!(serde_json::to_string(&Formation::F4312).unwrap(), "\"4-3-1-2\"");
        assert_eq!(Formation::default(), Formation::F442);
    }
}
