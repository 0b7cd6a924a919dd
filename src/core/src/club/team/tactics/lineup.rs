use crate::club::team::tactics::Formation;
use crate::club::{PlayerId, PlayerPosition};
use serde::{Deserialize, Serialize};

pub const MAX_SUBSTITUTES: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupSlot {
    pub player_id: PlayerId,
    pub position: PlayerPosition,
}

impl LineupSlot {
    pub fn new(player_id: PlayerId, position: PlayerPosition) -> Self {
        LineupSlot { player_id, position }
    }
}

/// Starters paired with the position each one is assigned to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Lineup {
    pub formation: Formation,
    pub starters: Vec<LineupSlot>,
    pub substitutes: Vec<PlayerId>,
    pub captain: Option<PlayerId>,
}

impl Lineup {
    pub fn new(formation: Formation) -> Self {
        Lineup {
            formation,
            starters: Vec::with_capacity(11),
            substitutes: Vec::with_capacity(MAX_SUBSTITUTES),
            captain: None,
        }
    }

    pub fn with_starter(mut self, player_id: PlayerId, position: PlayerPosition) -> Self {
        self.starters.push(LineupSlot::new(player_id, position));
        self
    }

    pub fn with_substitute(mut self, player_id: PlayerId) -> Self {
        self.substitutes.push(player_id);
        self
    }

    pub fn with_captain(mut self, player_id: PlayerId) -> Self {
        self.captain = Some(player_id);
        self
    }

    pub fn starter_ids(&self) -> Vec<PlayerId> {
        self.starters.iter().map(|slot| slot.player_id).collect()
    }

    pub fn is_starting(&self, player_id: PlayerId) -> bool {
        self.starters.iter().any(|slot| slot.player_id == player_id)
    }

    pub fn count_at(&self, position: PlayerPosition) -> usize {
        self.starters.iter().filter(|slot| slot.position == position).count()
    }

    pub fn position_of(&self, player_id: PlayerId) -> Option<PlayerPosition> {
        self.starters
            .iter()
            .find(|slot| slot.player_id == player_id)
            .map(|slot| slot.position)
    }
}
