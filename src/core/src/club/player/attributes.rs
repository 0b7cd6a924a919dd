use crate::club::PlayerPosition;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const ATTRIBUTE_MIN_VALUE: u8 = 0;
pub const ATTRIBUTE_MAX_VALUE: u8 = 100;

/// Skill values on a 0-100 scale. The last five are hidden from the player
/// and only steer consistency and development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    pub quality: u8,

    // technical
    pub keeping: u8,
    pub tackling: u8,
    pub passing: u8,
    pub shooting: u8,
    pub heading: u8,

    // physical
    pub speed: u8,
    pub stamina: u8,

    // mental
    pub perception: u8,
    pub ball_control: u8,

    // hidden
    pub consistency: u8,
    pub important_matches: u8,
    pub potential: u8,
    pub ambition: u8,
    pub professionalism: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    Quality,
    Keeping,
    Tackling,
    Passing,
    Shooting,
    Heading,
    Speed,
    Stamina,
    Perception,
    BallControl,
    Consistency,
    ImportantMatches,
    Potential,
    Ambition,
    Professionalism,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 15] = [
        AttributeKind::Quality,
        AttributeKind::Keeping,
        AttributeKind::Tackling,
        AttributeKind::Passing,
        AttributeKind::Shooting,
        AttributeKind::Heading,
        AttributeKind::Speed,
        AttributeKind::Stamina,
        AttributeKind::Perception,
        AttributeKind::BallControl,
        AttributeKind::Consistency,
        AttributeKind::ImportantMatches,
        AttributeKind::Potential,
        AttributeKind::Ambition,
        AttributeKind::Professionalism,
    ];

    pub fn is_hidden(&self) -> bool {
        matches!(
            self,
            AttributeKind::Consistency
                | AttributeKind::ImportantMatches
                | AttributeKind::Potential
                | AttributeKind::Ambition
                | AttributeKind::Professionalism
        )
    }

    /// Age below which the attribute can still grow.
    pub fn peak_age(&self) -> u8 {
        match self {
            AttributeKind::Speed | AttributeKind::Stamina => 28,
            AttributeKind::Perception | AttributeKind::Passing | AttributeKind::BallControl => 32,
            _ => 30,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttributeKind::Quality => "Quality",
            AttributeKind::Keeping => "Keeping",
            AttributeKind::Tackling => "Tackling",
            AttributeKind::Passing => "Passing",
            AttributeKind::Shooting => "Shooting",
            AttributeKind::Heading => "Heading",
            AttributeKind::Speed => "Speed",
            AttributeKind::Stamina => "Stamina",
            AttributeKind::Perception => "Perception",
            AttributeKind::BallControl => "BallControl",
            AttributeKind::Consistency => "Consistency",
            AttributeKind::ImportantMatches => "ImportantMatches",
            AttributeKind::Potential => "Potential",
            AttributeKind::Ambition => "Ambition",
            AttributeKind::Professionalism => "Professionalism",
        }
    }
}

impl Display for AttributeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl PlayerAttributes {
    /// Position-seeded starting values for a freshly created player.
    pub fn for_position(position: PlayerPosition) -> Self {
        let base = PlayerAttributes {
            quality: 65,
            consistency: 70,
            important_matches: 70,
            potential: 75,
            ambition: 70,
            professionalism: 70,
            ..PlayerAttributes::flat(0)
        };

        match position {
            PlayerPosition::Goalkeeper => PlayerAttributes {
                keeping: 70,
                tackling: 20,
                passing: 50,
                shooting: 10,
                heading: 30,
                speed: 40,
                stamina: 70,
                perception: 65,
                ball_control: 30,
                ..base
            },
            PlayerPosition::Defender => PlayerAttributes {
                keeping: 20,
                tackling: 70,
                passing: 55,
                shooting: 35,
                heading: 65,
                speed: 65,
                stamina: 75,
                perception: 60,
                ball_control: 50,
                ..base
            },
            PlayerPosition::Midfielder => PlayerAttributes {
                keeping: 20,
                tackling: 55,
                passing: 70,
                shooting: 55,
                heading: 50,
                speed: 70,
                stamina: 80,
                perception: 70,
                ball_control: 70,
                ..base
            },
            PlayerPosition::Forward => PlayerAttributes {
                keeping: 20,
                tackling: 30,
                passing: 60,
                shooting: 75,
                heading: 60,
                speed: 75,
                stamina: 70,
                perception: 65,
                ball_control: 70,
                ..base
            },
        }
    }

    /// Every attribute set to the same value, clamped to the 0-100 scale.
    pub fn flat(value: u8) -> Self {
        let value = value.min(ATTRIBUTE_MAX_VALUE);

        PlayerAttributes {
            quality: value,
            keeping: value,
            tackling: value,
            passing: value,
            shooting: value,
            heading: value,
            speed: value,
            stamina: value,
            perception: value,
            ball_control: value,
            consistency: value,
            important_matches: value,
            potential: value,
            ambition: value,
            professionalism: value,
        }
    }

    pub fn get(&self, kind: AttributeKind) -> u8 {
        match kind {
            AttributeKind::Quality => self.quality,
            AttributeKind::Keeping => self.keeping,
            AttributeKind::Tackling => self.tackling,
            AttributeKind::Passing => self.passing,
            AttributeKind::Shooting => self.shooting,
            AttributeKind::Heading => self.heading,
            AttributeKind::Speed => self.speed,
            AttributeKind::Stamina => self.stamina,
            AttributeKind::Perception => self.perception,
            AttributeKind::BallControl => self.ball_control,
            AttributeKind::Consistency => self.consistency,
            AttributeKind::ImportantMatches => self.important_matches,
            AttributeKind::Potential => self.potential,
            AttributeKind::Ambition => self.ambition,
            AttributeKind::Professionalism => self.professionalism,
        }
    }

    fn slot_mut(&mut self, kind: AttributeKind) -> &mut u8 {
        match kind {
            AttributeKind::Quality => &mut self.quality,
            AttributeKind::Keeping => &mut self.keeping,
            AttributeKind::Tackling => &mut self.tackling,
            AttributeKind::Passing => &mut self.passing,
            AttributeKind::Shooting => &mut self.shooting,
            AttributeKind::Heading => &mut self.heading,
            AttributeKind::Speed => &mut self.speed,
            AttributeKind::Stamina => &mut self.stamina,
            AttributeKind::Perception => &mut self.perception,
            AttributeKind::BallControl => &mut self.ball_control,
            AttributeKind::Consistency => &mut self.consistency,
            AttributeKind::ImportantMatches => &mut self.important_matches,
            AttributeKind::Potential => &mut self.potential,
            AttributeKind::Ambition => &mut self.ambition,
            AttributeKind::Professionalism => &mut self.professionalism,
        }
    }

    pub fn set(&mut self, kind: AttributeKind, value: u8) {
        *self.slot_mut(kind) = value.min(ATTRIBUTE_MAX_VALUE);
    }

    /// Adds `delta` and clamps to 0-100. Returns the change actually applied.
    pub fn adjust(&mut self, kind: AttributeKind, delta: i16) -> i16 {
        let slot = self.slot_mut(kind);
        let before = *slot as i16;
        let after = (before + delta).clamp(ATTRIBUTE_MIN_VALUE as i16, ATTRIBUTE_MAX_VALUE as i16);
        *slot = after as u8;
        after - before
    }

    pub fn can_improve(&self, kind: AttributeKind, age: u8) -> bool {
        age < kind.peak_age()
    }

    pub fn goalkeeper_rating(&self) -> u8 {
        Self::weighted(&[
            (self.keeping, 0.5),
            (self.speed, 0.1),
            (self.perception, 0.2),
            (self.stamina, 0.1),
            (self.passing, 0.1),
        ])
    }

    pub fn defender_rating(&self) -> u8 {
        Self::weighted(&[
            (self.tackling, 0.3),
            (self.heading, 0.2),
            (self.speed, 0.15),
            (self.stamina, 0.15),
            (self.passing, 0.1),
            (self.perception, 0.1),
        ])
    }

    pub fn midfielder_rating(&self) -> u8 {
        Self::weighted(&[
            (self.passing, 0.25),
            (self.ball_control, 0.2),
            (self.perception, 0.15),
            (self.stamina, 0.15),
            (self.tackling, 0.15),
            (self.shooting, 0.1),
        ])
    }

    pub fn forward_rating(&self) -> u8 {
        Self::weighted(&[
            (self.shooting, 0.3),
            (self.ball_control, 0.2),
            (self.speed, 0.2),
            (self.heading, 0.15),
            (self.perception, 0.15),
        ])
    }

    pub fn rating_for(&self, position: PlayerPosition) -> u8 {
        match position {
            PlayerPosition::Goalkeeper => self.goalkeeper_rating(),
            PlayerPosition::Defender => self.defender_rating(),
            PlayerPosition::Midfielder => self.midfielder_rating(),
            PlayerPosition::Forward => self.forward_rating(),
        }
    }

    /// Rating for a position given by its short code ("GK", "DEF", ...).
    /// Codes that name no position fall back to raw quality.
    pub fn rating_for_code(&self, code: &str) -> u8 {
        match code.parse::<PlayerPosition>() {
            Ok(position) => self.rating_for(position),
            Err(_) => self.quality,
        }
    }

    // sum is truncated, not rounded
    fn weighted(terms: &[(u8, f64)]) -> u8 {
        let sum: f64 = terms.iter().map(|&(value, weight)| value as f64 * weight).sum();
        sum as u8
    }
}

impl Default for PlayerAttributes {
    fn default() -> Self {
        PlayerAttributes::for_position(PlayerPosition::Midfielder)
    }
}
