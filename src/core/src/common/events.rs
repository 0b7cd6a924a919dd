use crate::club::{AttributeKind, Formation, PlayerId, TeamId, TrainingType};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    MatchScheduled,
    MatchStarted,
    MatchCompleted,
    GoalScored,
    CardIssued,
    PlayerInjured,
    PlayerRecovered,
    PlayerSuspended,
    PlayerTrained,
    PlayerProgressed,
    LineupSet,
    TacticsChanged,
    FormationChanged,
    SeasonStarted,
    SeasonCompleted,
    FixturesGenerated,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::MatchScheduled => "match.scheduled",
            EventType::MatchStarted => "match.started",
            EventType::MatchCompleted => "match.completed",
            EventType::GoalScored => "match.goal_scored",
            EventType::CardIssued => "match.card_issued",
            EventType::PlayerInjured => "player.injured",
            EventType::PlayerRecovered => "player.recovered",
            EventType::PlayerSuspended => "player.suspended",
            EventType::PlayerTrained => "player.trained",
            EventType::PlayerProgressed => "player.progressed",
            EventType::LineupSet => "team.lineup_set",
            EventType::TacticsChanged => "team.tactics_changed",
            EventType::FormationChanged => "team.formation_changed",
            EventType::SeasonStarted => "season.started",
            EventType::SeasonCompleted => "season.completed",
            EventType::FixturesGenerated => "season.fixtures_generated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardColor {
    Yellow,
    Red,
}

/// Typed body of a domain event. The core builds the player and team variants;
/// match and season variants are filled in by the collaborators that own them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventPayload {
    MatchScheduled {
        home_team_id: TeamId,
        away_team_id: TeamId,
        scheduled_at: NaiveDateTime,
    },
    MatchStarted {
        match_id: String,
    },
    MatchCompleted {
        home_score: u8,
        away_score: u8,
    },
    GoalScored {
        match_id: String,
        player_id: PlayerId,
        team_id: TeamId,
        minute: u8,
        assist_by: Option<PlayerId>,
    },
    CardIssued {
        match_id: String,
        player_id: PlayerId,
        color: CardColor,
        minute: u8,
    },
    PlayerInjured {
        player_id: PlayerId,
        injury_type: String,
        expected_days: u16,
    },
    PlayerRecovered {
        player_id: PlayerId,
    },
    PlayerSuspended {
        player_id: PlayerId,
        matches: u8,
    },
    PlayerTrained {
        player_id: PlayerId,
        training_type: TrainingType,
        attribute_gains: Vec<(AttributeKind, u8)>,
    },
    PlayerProgressed {
        player_id: PlayerId,
        quality_before: u8,
        quality_after: u8,
    },
    LineupSet {
        team_id: TeamId,
        match_id: String,
        player_ids: Vec<PlayerId>,
        formation: Formation,
    },
    TacticsChanged {
        team_id: TeamId,
    },
    FormationChanged {
        team_id: TeamId,
        from: Formation,
        to: Formation,
    },
    SeasonStarted {
        season_id: String,
        league_id: String,
        start_date: NaiveDateTime,
        teams: Vec<TeamId>,
    },
    SeasonCompleted {
        season_id: String,
    },
    FixturesGenerated {
        season_id: String,
        fixtures: usize,
    },
}

/// A plain record keyed by aggregate identity and timestamp. Delivery and
/// persistence belong to whoever consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent {
    pub aggregate_id: String,
    pub occurred_at: NaiveDateTime,
    pub payload: EventPayload,
}

impl DomainEvent {
    pub fn new(aggregate_id: impl Into<String>, occurred_at: NaiveDateTime, payload: EventPayload) -> Self {
        DomainEvent {
            aggregate_id: aggregate_id.into(),
            occurred_at,
            payload,
        }
    }

    pub fn event_type(&self) -> EventType {
        match self.payload {
            EventPayload::MatchScheduled { .. } => EventType::MatchScheduled,
            EventPayload::MatchStarted { .. } => EventType::MatchStarted,
            EventPayload::MatchCompleted { .. } => EventType::MatchCompleted,
            EventPayload::GoalScored { .. } => EventType::GoalScored,
            EventPayload::CardIssued { .. } => EventType::CardIssued,
            EventPayload::PlayerInjured { .. } => EventType::PlayerInjured,
            EventPayload::PlayerRecovered { .. } => EventType::PlayerRecovered,
            EventPayload::PlayerSuspended { .. } => EventType::PlayerSuspended,
            EventPayload::PlayerTrained { .. } => EventType::PlayerTrained,
            EventPayload::PlayerProgressed { .. } => EventType::PlayerProgressed,
            EventPayload::LineupSet { .. } => EventType::LineupSet,
            EventPayload::TacticsChanged { .. } => EventType::TacticsChanged,
            EventPayload::FormationChanged { .. } => EventType::FormationChanged,
            EventPayload::SeasonStarted { .. } => EventType::SeasonStarted,
            EventPayload::SeasonCompleted { .. } => EventType::SeasonCompleted,
            EventPayload::FixturesGenerated { .. } => EventType::FixturesGenerated,
        }
    }
}
