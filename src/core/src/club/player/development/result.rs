use crate::club::{AttributeKind, PlayerId, TrainingType};
use crate::common::{DomainEvent, EventPayload};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    pub player_id: PlayerId,
    pub training_type: TrainingType,
    /// Applied gains in the order they were rolled. The same attribute may
    /// appear twice after general training.
    pub changes: Vec<(AttributeKind, u8)>,
    pub fitness_change: f64,
    pub morale_change: f64,
}

impl TrainingResult {
    pub fn new(player_id: PlayerId, training_type: TrainingType) -> Self {
        TrainingResult {
            player_id,
            training_type,
            changes: Vec::new(),
            fitness_change: 0.0,
            morale_change: 0.0,
        }
    }

    pub fn has_improvements(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn total_gain(&self) -> u32 {
        self.changes.iter().map(|(_, gain)| *gain as u32).sum()
    }

    pub fn to_event(&self, now: NaiveDateTime) -> DomainEvent {
        DomainEvent::new(
            self.player_id.aggregate_id(),
            now,
            EventPayload::PlayerTrained {
                player_id: self.player_id,
                training_type: self.training_type,
                attribute_gains: self.changes.clone(),
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentResult {
    pub player_id: PlayerId,
    pub changes: Vec<(AttributeKind, i16)>,
    pub quality_before: u8,
    pub quality_after: u8,
}

impl DevelopmentResult {
    pub fn new(player_id: PlayerId, quality_before: u8) -> Self {
        DevelopmentResult {
            player_id,
            changes: Vec::new(),
            quality_before,
            quality_after: quality_before,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.quality_before == self.quality_after
    }

    pub fn to_event(&self, now: NaiveDateTime) -> DomainEvent {
        DomainEvent::new(
            self.player_id.aggregate_id(),
            now,
            EventPayload::PlayerProgressed {
                player_id: self.player_id,
                quality_before: self.quality_before,
                quality_after: self.quality_after,
            },
        )
    }
}
