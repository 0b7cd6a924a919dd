use crate::club::{AttributeKind, DevelopmentResult, Player, PlayerPosition, TrainingResult};
use chrono::NaiveDate;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const DEFAULT_DEVELOPMENT_SEED: u64 = 42;

const TECHNICAL_ATTRIBUTES: [AttributeKind; 3] = [
    AttributeKind::Passing,
    AttributeKind::BallControl,
    AttributeKind::Shooting,
];

const PHYSICAL_ATTRIBUTES: [AttributeKind; 3] = [
    AttributeKind::Speed,
    AttributeKind::Stamina,
    AttributeKind::Heading,
];

const TACTICAL_ATTRIBUTES: [AttributeKind; 2] = [AttributeKind::Perception, AttributeKind::Tackling];

const SET_PIECE_ATTRIBUTES: [AttributeKind; 2] = [AttributeKind::Heading, AttributeKind::Shooting];

const GENERAL_POOL: [AttributeKind; 9] = [
    AttributeKind::Keeping,
    AttributeKind::Tackling,
    AttributeKind::Passing,
    AttributeKind::Shooting,
    AttributeKind::Heading,
    AttributeKind::Speed,
    AttributeKind::Stamina,
    AttributeKind::Perception,
    AttributeKind::BallControl,
];

const YOUTH_GROWTH_POOL: [AttributeKind; 4] = [
    AttributeKind::Passing,
    AttributeKind::BallControl,
    AttributeKind::Perception,
    AttributeKind::Tackling,
];

const YOUTH_AGE_LIMIT: u8 = 23;
const VETERAN_AGE: u8 = 30;
const PHYSICAL_DECLINE_FLOOR: u8 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingType {
    General,
    Technical,
    Physical,
    Tactical,
    SetPieces,
}

impl TrainingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainingType::General => "general",
            TrainingType::Technical => "technical",
            TrainingType::Physical => "physical",
            TrainingType::Tactical => "tactical",
            TrainingType::SetPieces => "set_pieces",
        }
    }
}

impl Display for TrainingType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrainingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(TrainingType::General),
            "technical" => Ok(TrainingType::Technical),
            "physical" => Ok(TrainingType::Physical),
            "tactical" => Ok(TrainingType::Tactical),
            "set_pieces" => Ok(TrainingType::SetPieces),
            _ => Err(format!("unknown training type '{}'", s)),
        }
    }
}

/// Training and ageing for players. Every roll comes from the owned
/// generator, so equal seeds and equal call sequences replay exactly.
pub struct DevelopmentEngine<R = StdRng> {
    rng: R,
}

impl DevelopmentEngine<StdRng> {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_DEVELOPMENT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        DevelopmentEngine {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for DevelopmentEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> DevelopmentEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        DevelopmentEngine { rng }
    }

    pub fn improvement_chance(&self, player: &Player, now: NaiveDate) -> f64 {
        let base_chance = match player.age(now) {
            age if age < 21 => 0.8,
            age if age < 25 => 0.6,
            age if age < 28 => 0.4,
            age if age < 32 => 0.2,
            _ => 0.05,
        };

        let potential = player.attributes.potential as f64 / 100.0;
        let professionalism = player.attributes.professionalism as f64 / 100.0;
        let morale = player.morale / 100.0;

        base_chance * potential * (0.5 + 0.5 * professionalism) * (0.8 + 0.2 * morale)
    }

    /// Gain for an attribute currently at `current`. High values rarely move,
    /// 95 and above never do.
    pub fn improvement_amount(&mut self, current: u8) -> u8 {
        match current {
            95..=u8::MAX => 0,
            90..=94 => u8::from(self.rng.random::<f64>() < 0.1),
            80..=89 => u8::from(self.rng.random::<f64>() < 0.3),
            _ => 1 + self.rng.random_range(0..2u8),
        }
    }

    pub fn process_training(
        &mut self,
        player: &mut Player,
        training_type: TrainingType,
        intensity: f64,
        now: NaiveDate,
    ) -> TrainingResult {
        let mut result = TrainingResult::new(player.id, training_type);

        let chance = self.improvement_chance(player, now);

        match training_type {
            TrainingType::Technical => self.train_attributes(player, &TECHNICAL_ATTRIBUTES, chance, &mut result),
            TrainingType::Physical => {
                self.train_attributes(player, &PHYSICAL_ATTRIBUTES, chance * 0.8, &mut result)
            }
            TrainingType::Tactical => self.train_attributes(player, &TACTICAL_ATTRIBUTES, chance, &mut result),
            TrainingType::SetPieces if player.position == PlayerPosition::Goalkeeper => {
                self.train_attributes(player, &[AttributeKind::Keeping], chance, &mut result)
            }
            TrainingType::SetPieces => {
                self.train_attributes(player, &SET_PIECE_ATTRIBUTES, chance * 0.7, &mut result)
            }
            TrainingType::General => {
                // picks are drawn with replacement, each tested as soon as it is drawn
                let picks = 2 + self.rng.random_range(0..2usize);
                for _ in 0..picks {
                    let kind = GENERAL_POOL[self.rng.random_range(0..GENERAL_POOL.len())];
                    self.train_attribute(player, kind, chance * 0.5, &mut result);
                }
            }
        }

        result.fitness_change = -5.0 * intensity;
        result.morale_change = if intensity < 0.7 {
            2.0
        } else if intensity > 0.9 {
            -3.0
        } else {
            0.0
        };

        player.adjust_fitness(result.fitness_change);
        player.adjust_morale(result.morale_change);

        debug!(
            "player {}: {} training, chance = {:.3}, gains = {:?}",
            player.id, training_type, chance, result.changes
        );

        result
    }

    fn train_attributes(
        &mut self,
        player: &mut Player,
        attributes: &[AttributeKind],
        chance: f64,
        result: &mut TrainingResult,
    ) {
        for &kind in attributes {
            self.train_attribute(player, kind, chance, result);
        }
    }

    fn train_attribute(&mut self, player: &mut Player, kind: AttributeKind, chance: f64, result: &mut TrainingResult) {
        if self.rng.random::<f64>() >= chance {
            return;
        }

        let amount = self.improvement_amount(player.attributes.get(kind));
        if amount == 0 {
            return;
        }

        let applied = player.attributes.adjust(kind, amount as i16);
        if applied > 0 {
            result.changes.push((kind, applied as u8));
        }
    }

    /// One ageing tick: youth growth below 23, physical decline past 30.
    /// Quality is recomputed from the positional rating afterwards.
    pub fn process_natural_development(&mut self, player: &mut Player, now: NaiveDate) -> DevelopmentResult {
        let mut result = DevelopmentResult::new(player.id, player.attributes.quality);

        let age = player.age(now);

        if age < YOUTH_AGE_LIMIT {
            self.youth_growth(player, &mut result);
        } else if age > VETERAN_AGE {
            self.veteran_decline(player, age, &mut result);
        }

        let quality = player.overall_rating();
        player.attributes.set(AttributeKind::Quality, quality);
        result.quality_after = quality;

        if !result.is_empty() {
            debug!(
                "player {}: natural development {:?}, quality {} -> {}",
                player.id, result.changes, result.quality_before, result.quality_after
            );
        }

        result
    }

    fn youth_growth(&mut self, player: &mut Player, result: &mut DevelopmentResult) {
        if self.rng.random::<f64>() < 0.3 {
            Self::record(player, AttributeKind::Speed, 1, result);
            Self::record(player, AttributeKind::Stamina, 1, result);
        }

        if self.rng.random::<f64>() < player.attributes.potential as f64 / 200.0 {
            let kind = YOUTH_GROWTH_POOL[self.rng.random_range(0..YOUTH_GROWTH_POOL.len())];
            Self::record(player, kind, 1, result);
        }
    }

    fn veteran_decline(&mut self, player: &mut Player, age: u8, result: &mut DevelopmentResult) {
        let decline_rate = (age - VETERAN_AGE) as f64 * 0.05;

        if self.rng.random::<f64>() < decline_rate && player.attributes.speed > PHYSICAL_DECLINE_FLOOR {
            Self::record(player, AttributeKind::Speed, -1, result);
        }

        if self.rng.random::<f64>() < decline_rate * 0.8 && player.attributes.stamina > PHYSICAL_DECLINE_FLOOR {
            Self::record(player, AttributeKind::Stamina, -1, result);
        }

        // experience
        if self.rng.random::<f64>() < 0.2 {
            Self::record(player, AttributeKind::Perception, 1, result);
        }
    }

    fn record(player: &mut Player, kind: AttributeKind, delta: i16, result: &mut DevelopmentResult) {
        let applied = player.attributes.adjust(kind, delta);
        if applied != 0 {
            result.changes.push((kind, applied));
        }
    }
}
