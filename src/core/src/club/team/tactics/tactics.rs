use crate::common::{SquadError, SquadResult};
use serde::{Deserialize, Serialize};

const SETTING_MAX: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mentality {
    VeryDefensive,
    Defensive,
    #[default]
    Balanced,
    Attacking,
    VeryAttacking,
}

/// Team instructions. Every slider is on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamTactics {
    pub mentality: Mentality,
    // higher pressing = more ball recoveries but more fatigue
    pub pressing: u8,
    pub tempo: u8,
    pub width: u8,
    // high line squeezes space but leaves room in behind
    pub defensive_line: u8,
}

impl Default for TeamTactics {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamTactics {
    pub fn new() -> Self {
        TeamTactics {
            mentality: Mentality::Balanced,
            pressing: 50,
            tempo: 50,
            width: 50,
            defensive_line: 50,
        }
    }

    pub fn validate(&self) -> SquadResult<()> {
        let settings = [
            ("pressing", self.pressing),
            ("tempo", self.tempo),
            ("width", self.width),
            ("defensive_line", self.defensive_line),
        ];

        match settings.iter().find(|(_, value)| *value > SETTING_MAX) {
            Some((name, value)) => Err(SquadError::InvalidTactics(format!(
                "{} must be within 0..={}, got {}",
                name, SETTING_MAX, value
            ))),
            None => Ok(()),
        }
    }

    pub fn is_attacking(&self) -> bool {
        matches!(self.mentality, Mentality::Attacking | Mentality::VeryAttacking)
    }

    pub fn is_defensive(&self) -> bool {
        matches!(self.mentality, Mentality::Defensive | Mentality::VeryDefensive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tactics_are_valid() {
        let tactics = TeamTactics::default();

        assert!(tactics.validate().is_ok());
        assert!(!tactics.is_attacking());
        assert!(!tactics.is_defensive());
    }

    #[test]
    fn test_out_of_range_setting_rejected() {
        let tactics = TeamTactics {
            width: 120,
            ..TeamTactics::new()
        };

        let err = tactics.validate().unwrap_err();
        assert_eq!(err.code(), "INVALID_TACTICS");
        assert!(err.to_string().contains("width"));
    }
}
