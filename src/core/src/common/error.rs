use crate::club::{PlayerId, PlayerPosition, TeamId};
use thiserror::Error;

pub type SquadResult<T> = Result<T, SquadError>;

/// How a caller is expected to react to a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Identity absent from a collection; retry with another identity or fail upward.
    NotFound,
    /// An invariant of a lineup, formation, tactics or budget was violated.
    Validation,
    /// Roster size or uniqueness was violated on add/remove.
    SquadMutation,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SquadError {
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),

    #[error("team {0} not found")]
    TeamNotFound(TeamId),

    #[error("invalid formation: {0}")]
    InvalidFormation(String),

    #[error("lineup needs exactly {required} starters, got {available}")]
    InsufficientPlayers { available: usize, required: usize },

    #[error("player {name} ({player_id}) is unavailable")]
    PlayerUnavailable { player_id: PlayerId, name: String },

    #[error("player {name} ({player_id}) cannot play {position}")]
    PositionMismatch {
        player_id: PlayerId,
        name: String,
        position: PlayerPosition,
    },

    #[error("formation {formation} requires {required} {position}, got {actual}")]
    FormationMismatch {
        formation: String,
        position: PlayerPosition,
        required: usize,
        actual: usize,
    },

    #[error("invalid tactical settings: {0}")]
    InvalidTactics(String),

    #[error("transfer fee {fee} exceeds budget {budget}")]
    BudgetExceeded { fee: i64, budget: i64 },

    #[error("wages {wages} exceed remaining wage budget {remaining}")]
    WageBudgetExceeded { wages: i64, remaining: i64 },

    #[error("squad size limit of {0} reached")]
    SquadFull(usize),

    #[error("player {0} already in squad")]
    DuplicatePlayer(PlayerId),
}

impl SquadError {
    pub fn code(&self) -> &'static str {
        match self {
            SquadError::PlayerNotFound(_) => "PLAYER_NOT_FOUND",
            SquadError::TeamNotFound(_) => "TEAM_NOT_FOUND",
            SquadError::InvalidFormation(_) => "INVALID_FORMATION",
            SquadError::InsufficientPlayers { .. } => "INSUFFICIENT_PLAYERS",
            SquadError::PlayerUnavailable { .. } => "PLAYER_UNAVAILABLE",
            SquadError::PositionMismatch { .. } => "POSITION_MISMATCH",
            SquadError::FormationMismatch { .. } => "FORMATION_MISMATCH",
            SquadError::InvalidTactics(_) => "INVALID_TACTICS",
            SquadError::BudgetExceeded { .. } => "BUDGET_EXCEEDED",
            SquadError::WageBudgetExceeded { .. } => "WAGE_BUDGET_EXCEEDED",
            SquadError::SquadFull(_) => "SQUAD_FULL",
            SquadError::DuplicatePlayer(_) => "DUPLICATE_PLAYER",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SquadError::PlayerNotFound(_) | SquadError::TeamNotFound(_) => ErrorCategory::NotFound,
            SquadError::SquadFull(_) | SquadError::DuplicatePlayer(_) => {
                ErrorCategory::SquadMutation
            }
            _ => ErrorCategory::Validation,
        }
    }
}
