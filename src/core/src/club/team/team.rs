use crate::club::team::builder::TeamBuilder;
use crate::club::{
    Formation, LINEUP_SIZE, Lineup, MatchHistory, MatchResult, Player, PlayerCollection, PlayerId,
    PlayerPosition, SeasonBudget, TeamSeasonStats, TeamTactics, Transaction,
};
use crate::common::{DomainEvent, EventPayload, SquadError, SquadResult};
use chrono::NaiveDateTime;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result};

pub const MAX_SQUAD_SIZE: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    pub fn aggregate_id(&self) -> String {
        format!("team-{}", self.0)
    }
}

impl Display for TeamId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchType {
    #[default]
    Grass,
    Hybrid,
    Artificial,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stadium {
    pub name: String,
    pub capacity: u32,
    pub city: String,
    pub country: String,
    pub pitch_type: PitchType,
}

impl Stadium {
    pub fn new(name: impl Into<String>, capacity: u32) -> Self {
        Stadium {
            name: name.into(),
            capacity,
            ..Stadium::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub short_name: String,
    pub founded: Option<u16>,
    pub stadium: Stadium,
    pub manager_name: Option<String>,

    pub players: PlayerCollection,
    pub captain: Option<PlayerId>,
    pub vice_captain: Option<PlayerId>,

    pub formation: Formation,
    pub tactics: TeamTactics,
    pub lineup: Option<Lineup>,

    pub budget: i64,
    pub wage_budget: i64,
    pub transactions: Vec<Transaction>,

    pub match_history: MatchHistory,
    pub season_stats: TeamSeasonStats,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, stadium: Stadium) -> Self {
        let name = name.into();
        let short_name = name.chars().take(3).collect::<String>().to_uppercase();

        Team {
            id,
            name,
            short_name,
            founded: None,
            stadium,
            manager_name: None,
            players: PlayerCollection::default(),
            captain: None,
            vice_captain: None,
            formation: Formation::default(),
            tactics: TeamTactics::default(),
            lineup: None,
            budget: 0,
            wage_budget: 0,
            transactions: Vec::new(),
            match_history: MatchHistory::new(),
            season_stats: TeamSeasonStats::default(),
        }
    }

    pub fn builder() -> TeamBuilder {
        TeamBuilder::new()
    }

    pub fn players(&self) -> Vec<&Player> {
        self.players.players()
    }

    pub fn add_player(&mut self, mut player: Player) -> SquadResult<()> {
        if self.players.len() >= MAX_SQUAD_SIZE {
            return Err(SquadError::SquadFull(MAX_SQUAD_SIZE));
        }

        if self.players.contains(player.id) {
            return Err(SquadError::DuplicatePlayer(player.id));
        }

        info!("team {}: signed player {} ({})", self.name, player.name(), player.id);

        player.current_team_id = Some(self.id);
        self.players.add(player);

        Ok(())
    }

    /// Removes a player and clears any captaincy pointing at them.
    pub fn remove_player(&mut self, player_id: PlayerId) -> SquadResult<Player> {
        let mut player = self
            .players
            .take_player(player_id)
            .ok_or(SquadError::PlayerNotFound(player_id))?;

        if self.captain == Some(player_id) {
            self.captain = None;
        }

        if self.vice_captain == Some(player_id) {
            self.vice_captain = None;
        }

        info!("team {}: released player {} ({})", self.name, player.name(), player_id);

        player.current_team_id = None;

        Ok(player)
    }

    pub fn get_player(&self, player_id: PlayerId) -> SquadResult<&Player> {
        self.players
            .find(player_id)
            .ok_or(SquadError::PlayerNotFound(player_id))
    }

    pub fn get_player_mut(&mut self, player_id: PlayerId) -> SquadResult<&mut Player> {
        self.players
            .find_mut(player_id)
            .ok_or(SquadError::PlayerNotFound(player_id))
    }

    pub fn available_players(&self) -> Vec<&Player> {
        self.players.available()
    }

    pub fn players_for_position(&self, position: PlayerPosition) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.can_play_position(position))
            .collect()
    }

    pub fn set_captain(&mut self, player_id: PlayerId) -> SquadResult<()> {
        self.get_player(player_id)?;
        self.captain = Some(player_id);
        Ok(())
    }

    pub fn set_vice_captain(&mut self, player_id: PlayerId) -> SquadResult<()> {
        self.get_player(player_id)?;
        self.vice_captain = Some(player_id);
        Ok(())
    }

    /// Checks starter count, then availability of every starter, then the
    /// formation, stopping at the first failure.
    pub fn validate_lineup(&self, lineup: &Lineup) -> SquadResult<()> {
        if lineup.starters.len() != LINEUP_SIZE {
            return Err(SquadError::InsufficientPlayers {
                available: lineup.starters.len(),
                required: LINEUP_SIZE,
            });
        }

        let mut seen = HashSet::with_capacity(LINEUP_SIZE);

        for slot in &lineup.starters {
            let player = self.get_player(slot.player_id)?;

            if !seen.insert(slot.player_id) {
                return Err(SquadError::DuplicatePlayer(slot.player_id));
            }

            if !player.is_available() {
                return Err(SquadError::PlayerUnavailable {
                    player_id: player.id,
                    name: player.name(),
                });
            }
        }

        if !lineup.formation.is_valid() {
            return Err(SquadError::InvalidFormation(lineup.formation.to_string()));
        }

        self.validate_formation_positions(lineup)
    }

    fn validate_formation_positions(&self, lineup: &Lineup) -> SquadResult<()> {
        for slot in &lineup.starters {
            let player = self.get_player(slot.player_id)?;

            if !player.can_play_position(slot.position) {
                return Err(SquadError::PositionMismatch {
                    player_id: player.id,
                    name: player.name(),
                    position: slot.position,
                });
            }
        }

        let requirements = lineup.formation.requirements();

        for position in PlayerPosition::ALL {
            let required = requirements.get(position);
            let actual = lineup.count_at(position);

            if actual != required {
                return Err(SquadError::FormationMismatch {
                    formation: lineup.formation.to_string(),
                    position,
                    required,
                    actual,
                });
            }
        }

        Ok(())
    }

    pub fn set_formation(&mut self, formation: Formation, now: NaiveDateTime) -> DomainEvent {
        let from = self.formation;
        self.formation = formation;

        debug!("team {}: formation {} -> {}", self.name, from, formation);

        DomainEvent::new(
            self.id.aggregate_id(),
            now,
            EventPayload::FormationChanged {
                team_id: self.id,
                from,
                to: formation,
            },
        )
    }

    pub fn set_tactics(&mut self, tactics: TeamTactics, now: NaiveDateTime) -> SquadResult<DomainEvent> {
        tactics.validate()?;
        self.tactics = tactics;

        Ok(DomainEvent::new(
            self.id.aggregate_id(),
            now,
            EventPayload::TacticsChanged { team_id: self.id },
        ))
    }

    pub fn set_lineup(
        &mut self,
        lineup: Lineup,
        match_id: impl Into<String>,
        now: NaiveDateTime,
    ) -> SquadResult<DomainEvent> {
        self.validate_lineup(&lineup)?;

        let event = DomainEvent::new(
            self.id.aggregate_id(),
            now,
            EventPayload::LineupSet {
                team_id: self.id,
                match_id: match_id.into(),
                player_ids: lineup.starter_ids(),
                formation: lineup.formation,
            },
        );

        info!("team {}: lineup set in {}", self.name, lineup.formation);

        self.lineup = Some(lineup);

        Ok(event)
    }

    /// Quick pick for the current formation: eligible players in roster
    /// order, not ranked by rating, and a player may fill more than one line.
    /// `SquadManager::recommend_lineup` is the ranked selection.
    pub fn best_eleven(&self) -> Vec<&Player> {
        let available = self.available_players();
        if available.len() < LINEUP_SIZE {
            return available;
        }

        let requirements = self.formation.requirements();

        PlayerPosition::ALL
            .into_iter()
            .flat_map(|position| {
                available
                    .iter()
                    .copied()
                    .filter(move |p| p.can_play_position(position))
                    .take(requirements.get(position))
            })
            .collect()
    }

    pub fn team_strength(&self) -> f64 {
        let best_eleven = self.best_eleven();
        if best_eleven.is_empty() {
            return 0.0;
        }

        let total: u32 = best_eleven.iter().map(|p| p.overall_rating() as u32).sum();

        total as f64 / best_eleven.len() as f64
    }

    pub fn record_match(&mut self, result: MatchResult) {
        self.season_stats.record(&result);
        self.match_history.add(result);
    }

    pub fn form_string(&self) -> String {
        self.match_history.form_string()
    }

    pub fn apply_season_budget(&mut self, season_budget: SeasonBudget) {
        self.budget = season_budget.budget;
        self.wage_budget = season_budget.wage_budget;

        info!(
            "team {}: season budget {}, weekly wage budget {}",
            self.name, self.budget, self.wage_budget
        );
    }

    pub fn record_transaction(&mut self, transaction: Transaction) {
        self.budget += transaction.amount;
        self.transactions.push(transaction);
    }
}
