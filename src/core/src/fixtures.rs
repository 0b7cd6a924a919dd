use crate::club::{Player, PlayerId, PlayerPosition, Stadium, Team, TeamId};
use crate::shared::FullName;
use crate::utils::DateUtils;
use chrono::{NaiveDate, NaiveDateTime};
use rand::TryRng;
use std::collections::VecDeque;
use std::convert::Infallible;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

pub fn at_noon() -> NaiveDateTime {
    today().and_hms_opt(12, 0, 0).unwrap()
}

pub fn player_aged(id: u32, position: PlayerPosition, age: u8) -> Player {
    Player::new(
        PlayerId(id),
        FullName::new("Test", format!("Player{}", id)),
        position,
        DateUtils::birth_date_for_age(age, today()),
    )
}

/// Eleven 25-year-olds in natural 4-4-2 shape: id 1 in goal, 2-5 defence,
/// 6-9 midfield, 10-11 attack.
pub fn squad_442() -> Vec<Player> {
    (1..=11)
        .map(|id| {
            let position = match id {
                1 => PlayerPosition::Goalkeeper,
                2..=5 => PlayerPosition::Defender,
                6..=9 => PlayerPosition::Midfielder,
                _ => PlayerPosition::Forward,
            };
            player_aged(id, position, 25)
        })
        .collect()
}

pub fn team_with(players: Vec<Player>) -> Team {
    let mut team = Team::new(TeamId(1), "United", Stadium::new("Main Ground", 30_000));
    for player in players {
        team.add_player(player).unwrap();
    }
    team
}

/// Replays fixed draws from [0, 1). `random::<f64>()` returns the value
/// itself and a small `random_range(0..n)` returns `floor(value * n)`.
/// Running out of draws panics, so an unexpected extra roll fails the test.
pub struct ScriptedRng {
    draws: VecDeque<f64>,
}

impl ScriptedRng {
    pub fn new(draws: &[f64]) -> Self {
        ScriptedRng {
            draws: draws.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }

    fn next_draw(&mut self) -> f64 {
        self.draws.pop_front().expect("scripted draws exhausted")
    }
}

impl TryRng for ScriptedRng {
    type Error = Infallible;

    fn try_next_u32(&mut self) -> Result<u32, Infallible> {
        Ok((self.next_draw() * (1u64 << 32) as f64) as u32)
    }

    fn try_next_u64(&mut self) -> Result<u64, Infallible> {
        // f64 sampling keeps the top 53 bits
        Ok(((self.next_draw() * (1u64 << 53) as f64) as u64) << 11)
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Infallible> {
        dst.fill(0);
        Ok(())
    }
}
