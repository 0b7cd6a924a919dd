use crate::club::player::builder::PlayerBuilder;
use crate::club::{AttributeKind, CareerStats, MatchPerformance, PlayerAttributes, TeamId};
use crate::common::{DomainEvent, EventPayload};
use crate::shared::FullName;
use crate::utils::DateUtils;
use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

pub const CONDITION_MAX_VALUE: f64 = 100.0;
pub const CONDITION_MIN_VALUE: f64 = 0.0;

/// Fitness a player needs to be picked.
pub const MATCH_FITNESS_THRESHOLD: f64 = 70.0;

const DEFAULT_FITNESS: f64 = 100.0;
const DEFAULT_MORALE: f64 = 75.0;
const DEFAULT_FORM: f64 = 70.0;

// weight of the newest match in the form average
const FORM_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub fn aggregate_id(&self) -> String {
        format!("player-{}", self.0)
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerPosition {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl PlayerPosition {
    /// Fill order used when picking a lineup.
    pub const ALL: [PlayerPosition; 4] = [
        PlayerPosition::Goalkeeper,
        PlayerPosition::Defender,
        PlayerPosition::Midfielder,
        PlayerPosition::Forward,
    ];

    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "GK",
            PlayerPosition::Defender => "DEF",
            PlayerPosition::Midfielder => "MID",
            PlayerPosition::Forward => "FWD",
        }
    }
}

impl Display for PlayerPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.get_short_name())
    }
}

impl FromStr for PlayerPosition {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "GK" => Ok(PlayerPosition::Goalkeeper),
            "DEF" => Ok(PlayerPosition::Defender),
            "MID" => Ok(PlayerPosition::Midfielder),
            "FWD" => Ok(PlayerPosition::Forward),
            _ => Err(format!("'{}' is not a valid position", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    Available,
    Injured,
    Suspended,
    OnLoan,
    Retired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerPreferredFoot {
    Left,
    Right,
    Both,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub full_name: FullName,
    pub birth_date: NaiveDate,
    pub nationality: String,

    pub height: u8,
    pub weight: u8,

    pub position: PlayerPosition,
    pub preferred_foot: PlayerPreferredFoot,
    pub shirt_number: u8,
    pub contract_until: Option<NaiveDate>,
    pub market_value: i64,
    pub wage: i64,

    pub status: PlayerStatus,
    pub fitness: f64,
    pub morale: f64,
    pub form: f64,

    pub attributes: PlayerAttributes,
    pub career_stats: CareerStats,

    pub current_team_id: Option<TeamId>,
}

impl Player {
    pub fn new(id: PlayerId, full_name: FullName, position: PlayerPosition, birth_date: NaiveDate) -> Self {
        Player {
            id,
            full_name,
            birth_date,
            nationality: String::new(),
            height: 0,
            weight: 0,
            position,
            preferred_foot: PlayerPreferredFoot::Right,
            shirt_number: 0,
            contract_until: None,
            market_value: 0,
            wage: 0,
            status: PlayerStatus::Available,
            fitness: DEFAULT_FITNESS,
            morale: DEFAULT_MORALE,
            form: DEFAULT_FORM,
            attributes: PlayerAttributes::for_position(position),
            career_stats: CareerStats::default(),
            current_team_id: None,
        }
    }

    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub fn age(&self, now: NaiveDate) -> u8 {
        DateUtils::age(self.birth_date, now)
    }

    pub fn name(&self) -> String {
        self.full_name.display_name()
    }

    pub fn is_available(&self) -> bool {
        self.status == PlayerStatus::Available && self.fitness >= MATCH_FITNESS_THRESHOLD
    }

    /// Utility rules: midfielders cover every outfield line, defenders and
    /// forwards can drop into midfield with passing above 60, keepers only keep.
    pub fn can_play_position(&self, position: PlayerPosition) -> bool {
        if self.position == position {
            return true;
        }

        match self.position {
            PlayerPosition::Defender | PlayerPosition::Forward => {
                position == PlayerPosition::Midfielder && self.attributes.passing > 60
            }
            PlayerPosition::Midfielder => position != PlayerPosition::Goalkeeper,
            PlayerPosition::Goalkeeper => false,
        }
    }

    pub fn overall_rating(&self) -> u8 {
        self.attributes.rating_for(self.position)
    }

    /// Rating when fielded at `position`, which may differ from the natural one.
    pub fn rating_at(&self, position: PlayerPosition) -> u8 {
        self.attributes.rating_for(position)
    }

    pub fn can_improve(&self, kind: AttributeKind, now: NaiveDate) -> bool {
        self.attributes.can_improve(kind, self.age(now))
    }

    pub fn start_season(&mut self, season_id: impl Into<String>) {
        self.career_stats.start_season(season_id, self.current_team_id);
    }

    pub fn update_match_stats(&mut self, performance: &MatchPerformance) {
        self.career_stats.record(performance);
        self.update_form(performance.rating);

        debug!(
            "player {}: match stats updated, rating = {:.1}, form = {:.1}",
            self.id, performance.rating, self.form
        );
    }

    fn update_form(&mut self, match_rating: f64) {
        self.form = (self.form * (1.0 - FORM_WEIGHT) + match_rating * 10.0 * FORM_WEIGHT)
            .clamp(CONDITION_MIN_VALUE, CONDITION_MAX_VALUE);
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness.clamp(CONDITION_MIN_VALUE, CONDITION_MAX_VALUE);
    }

    pub fn adjust_fitness(&mut self, delta: f64) {
        self.set_fitness(self.fitness + delta);
    }

    pub fn adjust_morale(&mut self, delta: f64) {
        self.morale = (self.morale + delta).clamp(CONDITION_MIN_VALUE, CONDITION_MAX_VALUE);
    }

    pub fn injure(&mut self, injury_type: impl Into<String>, expected_days: u16, now: NaiveDateTime) -> DomainEvent {
        self.status = PlayerStatus::Injured;

        DomainEvent::new(
            self.id.aggregate_id(),
            now,
            EventPayload::PlayerInjured {
                player_id: self.id,
                injury_type: injury_type.into(),
                expected_days,
            },
        )
    }

    /// Clears an injury. Returns nothing when the player was not injured.
    pub fn recover(&mut self, now: NaiveDateTime) -> Option<DomainEvent> {
        if self.status != PlayerStatus::Injured {
            return None;
        }

        self.status = PlayerStatus::Available;

        Some(DomainEvent::new(
            self.id.aggregate_id(),
            now,
            EventPayload::PlayerRecovered { player_id: self.id },
        ))
    }

    pub fn suspend(&mut self, matches: u8, now: NaiveDateTime) -> DomainEvent {
        self.status = PlayerStatus::Suspended;

        DomainEvent::new(
            self.id.aggregate_id(),
            now,
            EventPayload::PlayerSuspended {
                player_id: self.id,
                matches,
            },
        )
    }

    pub fn lift_suspension(&mut self) {
        if self.status == PlayerStatus::Suspended {
            self.status = PlayerStatus::Available;
        }
    }

    pub fn loan_out(&mut self) {
        self.status = PlayerStatus::OnLoan;
    }

    pub fn retire(&mut self) {
        self.status = PlayerStatus::Retired;
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}, {}", self.full_name, self.birth_date)
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{at_noon, player_aged, today};

    #[test]
    fn test_new_player_defaults() {
        let player = player_aged(1, PlayerPosition::Defender, 24);

        assert_eq!(player.status, PlayerStatus::Available);
        assert_eq!(player.fitness, 100.0);
        assert_eq!(player.morale, 75.0);
        assert_eq!(player.form, 70.0);
        assert_eq!(player.attributes, PlayerAttributes::for_position(PlayerPosition::Defender));
        assert_eq!(player.age(today()), 24);
    }

    #[test]
    fn test_availability_needs_status_and_fitness() {
        let mut player = player_aged(1, PlayerPosition::Forward, 24);
        assert!(player.is_available());

        player.set_fitness(69.9);
        assert!(!player.is_available());

        player.set_fitness(70.0);
        assert!(player.is_available());

        player.suspend(1, at_noon());
        assert!(!player.is_available());
    }

    #[test]
    fn test_defender_in_midfield_needs_passing() {
        let mut player = player_aged(1, PlayerPosition::Defender, 24);

        player.attributes.passing = 60;
        assert!(!player.can_play_position(PlayerPosition::Midfielder));

        player.attributes.passing = 61;
        assert!(player.can_play_position(PlayerPosition::Midfielder));
        assert!(!player.can_play_position(PlayerPosition::Forward));
        assert!(!player.can_play_position(PlayerPosition::Goalkeeper));
    }

    #[test]
    fn test_forward_in_midfield_needs_passing() {
        let mut player = player_aged(1, PlayerPosition::Forward, 24);

        player.attributes.passing = 61;
        assert!(player.can_play_position(PlayerPosition::Midfielder));
        assert!(!player.can_play_position(PlayerPosition::Defender));

        player.attributes.passing = 40;
        assert!(!player.can_play_position(PlayerPosition::Midfielder));
    }

    #[test]
    fn test_midfielder_covers_outfield() {
        let player = player_aged(1, PlayerPosition::Midfielder, 24);

        assert!(player.can_play_position(PlayerPosition::Defender));
        assert!(player.can_play_position(PlayerPosition::Midfielder));
        assert!(player.can_play_position(PlayerPosition::Forward));
        assert!(!player.can_play_position(PlayerPosition::Goalkeeper));
    }

    #[test]
    fn test_goalkeeper_only_keeps() {
        let mut player = player_aged(1, PlayerPosition::Goalkeeper, 24);
        player.attributes.passing = 99;

        assert!(player.can_play_position(PlayerPosition::Goalkeeper));
        for position in [PlayerPosition::Defender, PlayerPosition::Midfielder, PlayerPosition::Forward] {
            assert!(!player.can_play_position(position));
        }
    }

    #[test]
    fn test_update_match_stats_moves_form() {
        let mut player = player_aged(1, PlayerPosition::Forward, 24);
        player.update_match_stats(&MatchPerformance {
            goals: 1,
            yellow_cards: 1,
            ..MatchPerformance::new(90, 9.0)
        });

        // 70 * 0.7 + 90 * 0.3
        assert!((player.form - 76.0).abs() < 1e-9);
        assert_eq!(player.career_stats.total_matches, 1);
        assert_eq!(player.career_stats.total_goals, 1);
        assert_eq!(player.career_stats.total_yellow_cards, 1);
    }

    #[test]
    fn test_form_stays_in_range() {
        let mut player = player_aged(1, PlayerPosition::Forward, 24);
        for _ in 0..20 {
            player.update_match_stats(&MatchPerformance::new(90, 15.0));
        }
        assert_eq!(player.form, 100.0);

        for _ in 0..20 {
            player.update_match_stats(&MatchPerformance::new(90, -3.0));
        }
        assert_eq!(player.form, 0.0);
    }

    #[test]
    fn test_injury_lifecycle_emits_events() {
        let mut player = player_aged(4, PlayerPosition::Midfielder, 24);

        let event = player.injure("Calf Strain", 14, at_noon());
        assert_eq!(player.status, PlayerStatus::Injured);
        assert_eq!(event.aggregate_id, "player-4");
        assert_eq!(event.event_type().as_str(), "player.injured");

        let recovered = player.recover(at_noon()).unwrap();
        assert_eq!(player.status, PlayerStatus::Available);
        assert_eq!(recovered.event_type().as_str(), "player.recovered");

        assert!(player.recover(at_noon()).is_none());
    }

    #[test]
    fn test_lift_suspension_only_affects_suspended() {
        let mut player = player_aged(4, PlayerPosition::Midfielder, 24);
        player.retire();
        player.lift_suspension();
        assert_eq!(player.status, PlayerStatus::Retired);

        player.suspend(2, at_noon());
        player.lift_suspension();
        assert_eq!(player.status, PlayerStatus::Available);
    }

    #[test]
    fn test_morale_and_fitness_clamped() {
        let mut player = player_aged(4, PlayerPosition::Midfielder, 24);
        player.adjust_morale(40.0);
        assert_eq!(player.morale, 100.0);
        player.adjust_fitness(-250.0);
        assert_eq!(player.fitness, 0.0);
    }

    #[test]
    fn test_position_codes_round_trip() {
        for position in PlayerPosition::ALL {
            assert_eq!(position.to_string().parse::<PlayerPosition>(), Ok(position));
        }
        assert!("ST".parse::<PlayerPosition>().is_err());
    }
}
