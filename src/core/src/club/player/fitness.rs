use crate::club::{Player, PlayerPosition};
use chrono::NaiveDate;
use log::debug;

pub const FATIGUE_RATE_PER_MINUTE: f64 = 0.15;
pub const RECOVERY_RATE_PER_DAY: f64 = 10.0;
pub const INJURY_FITNESS_THRESHOLD: f64 = 40.0;

const MAX_MATCH_FATIGUE: f64 = 60.0;
const MAX_INJURY_RISK: f64 = 0.5;

/// Fatigue, recovery and injury risk as pure functions of a player snapshot.
pub struct FitnessEngine;

impl FitnessEngine {
    pub fn match_fatigue(player: &Player, minutes_played: u16, intensity: f64, now: NaiveDate) -> f64 {
        if minutes_played == 0 {
            return 0.0;
        }

        let mut fatigue = minutes_played as f64 * FATIGUE_RATE_PER_MINUTE * intensity;

        fatigue *= 1.5 - player.attributes.stamina as f64 / 100.0;

        let age = player.age(now);
        if age > 30 {
            fatigue *= 1.0 + (age as f64 - 30.0) * 0.05;
        }

        fatigue *= Self::position_factor(player.position);

        fatigue.min(MAX_MATCH_FATIGUE)
    }

    pub fn daily_recovery(player: &Player, training_intensity: f64, now: NaiveDate) -> f64 {
        let mut recovery = RECOVERY_RATE_PER_DAY + player.attributes.stamina as f64 / 20.0;

        let age = player.age(now);
        if age < 23 {
            recovery *= 1.2;
        } else if age > 30 {
            recovery *= 0.9 - (age as f64 - 30.0) * 0.02;
        }

        recovery *= 2.0 - training_intensity;
        recovery *= 1.0 + player.attributes.professionalism as f64 / 200.0;

        recovery
    }

    /// Probability-like value consumed by the match engine; no dice are rolled here.
    pub fn injury_risk(player: &Player, now: NaiveDate) -> f64 {
        let mut risk = 0.0;

        if player.fitness < INJURY_FITNESS_THRESHOLD {
            risk += (INJURY_FITNESS_THRESHOLD - player.fitness) / 100.0;
        }

        let age = player.age(now);
        if age > 30 {
            risk += (age as f64 - 30.0) * 0.01;
        }

        risk.min(MAX_INJURY_RISK)
    }

    pub fn apply_match_fitness(player: &mut Player, minutes_played: u16, intensity: f64, now: NaiveDate) -> f64 {
        let fatigue = Self::match_fatigue(player, minutes_played, intensity, now);
        player.adjust_fitness(-fatigue);

        debug!(
            "player {}: match fatigue {:.2}, fitness = {:.2}",
            player.id, fatigue, player.fitness
        );

        fatigue
    }

    pub fn apply_daily_recovery(player: &mut Player, training_intensity: f64, now: NaiveDate) -> f64 {
        let recovery = Self::daily_recovery(player, training_intensity, now);
        player.adjust_fitness(recovery);

        debug!(
            "player {}: recovered {:.2}, fitness = {:.2}",
            player.id, recovery, player.fitness
        );

        recovery
    }

    fn position_factor(position: PlayerPosition) -> f64 {
        match position {
            PlayerPosition::Goalkeeper => 0.6,
            PlayerPosition::Defender => 0.85,
            PlayerPosition::Midfielder => 1.15,
            PlayerPosition::Forward => 1.0,
        }
    }
}
