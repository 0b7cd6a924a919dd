use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

pub const FORM_MATCHES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub fn from_score(goals_for: u8, goals_against: u8) -> Self {
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            MatchOutcome::Win => 3,
            MatchOutcome::Draw => 1,
            MatchOutcome::Loss => 0,
        }
    }

    pub fn code(&self) -> char {
        match self {
            MatchOutcome::Win => 'W',
            MatchOutcome::Draw => 'D',
            MatchOutcome::Loss => 'L',
        }
    }
}

impl Display for MatchOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_id: String,
    pub opponent: String,
    pub is_home: bool,
    pub goals_for: u8,
    pub goals_against: u8,
}

impl MatchResult {
    pub fn new(match_id: impl Into<String>, opponent: impl Into<String>, is_home: bool, goals_for: u8, goals_against: u8) -> Self {
        MatchResult {
            match_id: match_id.into(),
            opponent: opponent.into(),
            is_home,
            goals_for,
            goals_against,
        }
    }

    pub fn outcome(&self) -> MatchOutcome {
        MatchOutcome::from_score(self.goals_for, self.goals_against)
    }
}

/// Most recent results, newest first, capped at five.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchHistory {
    items: Vec<MatchResult>,
}

impl MatchHistory {
    pub fn new() -> Self {
        MatchHistory {
            items: Vec::with_capacity(FORM_MATCHES + 1),
        }
    }

    pub fn add(&mut self, result: MatchResult) {
        self.items.insert(0, result);
        self.items.truncate(FORM_MATCHES);
    }

    pub fn items(&self) -> &[MatchResult] {
        &self.items
    }

    pub fn form_string(&self) -> String {
        self.items.iter().map(|result| result.outcome().code()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamSeasonStats {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
    pub league_position: Option<u8>,
}

impl TeamSeasonStats {
    pub fn record(&mut self, result: &MatchResult) {
        self.played += 1;
        self.goals_for += result.goals_for as u32;
        self.goals_against += result.goals_against as u32;

        let outcome = result.outcome();
        match outcome {
            MatchOutcome::Win => self.won += 1,
            MatchOutcome::Draw => self.drawn += 1,
            MatchOutcome::Loss => self.lost += 1,
        }

        self.points += outcome.points();
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }
}
