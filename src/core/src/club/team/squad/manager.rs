use crate::club::{
    Formation, LINEUP_SIZE, Lineup, LineupSlot, MAX_SUBSTITUTES, Player, PlayerId, PlayerPosition,
    PlayerStatus, Team,
};
use crate::common::{SquadError, SquadResult};
use chrono::NaiveDate;
use itertools::Itertools;
use log::{debug, warn};
use std::collections::{BTreeMap, HashSet};

const YOUTH_AGE_LIMIT: u8 = 21;
const VETERAN_AGE: u8 = 30;

/// Read-only squad analysis and lineup recommendation for a team.
pub struct SquadManager<'t> {
    team: &'t Team,
}

impl<'t> SquadManager<'t> {
    pub fn new(team: &'t Team) -> Self {
        SquadManager { team }
    }

    /// Roster grouped by natural position, best rated first. Ties keep roster order.
    pub fn squad_depth(&self) -> BTreeMap<PlayerPosition, Vec<&'t Player>> {
        let mut depth: BTreeMap<PlayerPosition, Vec<&'t Player>> = BTreeMap::new();

        for player in self.team.players.iter() {
            depth.entry(player.position).or_default().push(player);
        }

        for players in depth.values_mut() {
            players.sort_by(|a, b| b.overall_rating().cmp(&a.overall_rating()));
        }

        depth
    }

    pub fn squad_age(&self, now: NaiveDate) -> f64 {
        if self.team.players.is_empty() {
            return 0.0;
        }

        let total: u32 = self.team.players.iter().map(|p| p.age(now) as u32).sum();

        total as f64 / self.team.players.len() as f64
    }

    pub fn squad_value(&self) -> i64 {
        self.team.players.iter().map(|p| p.market_value).sum()
    }

    pub fn wage_bill(&self) -> i64 {
        self.team.players.get_week_salary()
    }

    pub fn youth_prospects(&self, now: NaiveDate) -> Vec<&'t Player> {
        self.team
            .players
            .iter()
            .filter(|p| p.age(now) < YOUTH_AGE_LIMIT)
            .collect()
    }

    pub fn veterans(&self, now: NaiveDate) -> Vec<&'t Player> {
        self.team
            .players
            .iter()
            .filter(|p| p.age(now) > VETERAN_AGE)
            .collect()
    }

    pub fn injured_players(&self) -> Vec<&'t Player> {
        self.team.players.by_status(PlayerStatus::Injured)
    }

    pub fn suspended_players(&self) -> Vec<&'t Player> {
        self.team.players.by_status(PlayerStatus::Suspended)
    }

    /// Fills lines in GK, DEF, MID, FWD order from available players ranked
    /// by their rating at that line. A player eligible for several lines goes
    /// to the first line that takes them. Unused available players make up
    /// the bench in roster order.
    pub fn recommend_lineup(&self, formation: Formation, now: NaiveDate) -> SquadResult<Lineup> {
        let available = self.team.available_players();
        let requirements = formation.requirements();

        let mut lineup = Lineup::new(formation);
        let mut used: HashSet<PlayerId> = HashSet::with_capacity(LINEUP_SIZE);

        for position in PlayerPosition::ALL {
            let candidates: Vec<&Player> = available
                .iter()
                .copied()
                .filter(|p| !used.contains(&p.id) && p.can_play_position(position))
                .sorted_by(|a, b| b.rating_at(position).cmp(&a.rating_at(position)))
                .take(requirements.get(position))
                .collect();

            for player in candidates {
                lineup.starters.push(LineupSlot::new(player.id, position));
                used.insert(player.id);
            }
        }

        if lineup.starters.len() < LINEUP_SIZE {
            warn!(
                "team {}: cannot field {} ({} of {} starters)",
                self.team.name,
                formation,
                lineup.starters.len(),
                LINEUP_SIZE
            );

            return Err(SquadError::InsufficientPlayers {
                available: lineup.starters.len(),
                required: LINEUP_SIZE,
            });
        }

        lineup.substitutes = available
            .iter()
            .filter(|p| !used.contains(&p.id))
            .map(|p| p.id)
            .take(MAX_SUBSTITUTES)
            .collect();

        lineup.captain = self.select_captain(&lineup, now);

        debug!(
            "team {}: recommended {} with captain {:?}",
            self.team.name, formation, lineup.captain
        );

        Ok(lineup)
    }

    /// Keeps the club captain when starting, otherwise the most experienced
    /// starter by age plus a tenth of career matches.
    fn select_captain(&self, lineup: &Lineup, now: NaiveDate) -> Option<PlayerId> {
        if let Some(captain) = self.team.captain {
            if lineup.is_starting(captain) {
                return Some(captain);
            }
        }

        let mut best: Option<PlayerId> = None;
        let mut best_score = 0.0;

        for slot in &lineup.starters {
            if let Ok(player) = self.team.get_player(slot.player_id) {
                let score = player.age(now) as f64 + player.career_stats.total_matches as f64 / 10.0;
                if score > best_score {
                    best_score = score;
                    best = Some(player.id);
                }
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::PlayerAttributes;
    use crate::fixtures::{player_aged, squad_442, team_with, today};

    #[test]
    fn test_recommend_442_fills_every_line() {
        let mut players = squad_442();
        for id in 12..=16 {
            players.push(player_aged(id, PlayerPosition::ALL[id as usize % 4], 24));
        }
        let team = team_with(players);

        let lineup = SquadManager::new(&team).recommend_lineup(Formation::F442, today()).unwrap();

        assert_eq!(lineup.starters.len(), 11);
        assert_eq!(lineup.count_at(PlayerPosition::Goalkeeper), 1);
        assert_eq!(lineup.count_at(PlayerPosition::Defender), 4);
        assert_eq!(lineup.count_at(PlayerPosition::Midfielder), 4);
        assert_eq!(lineup.count_at(PlayerPosition::Forward), 2);
        assert!(lineup.captain.is_some());
        assert_eq!(lineup.substitutes.len(), 5);
        assert_eq!(team.validate_lineup(&lineup), Ok(()));
    }

    #[test]
    fn test_recommend_fails_when_short() {
        let mut players = squad_442();
        players[4].set_fitness(50.0);
        let team = team_with(players);
        let manager = SquadManager::new(&team);

        for formation in Formation::ALL {
            let err = manager.recommend_lineup(formation, today()).unwrap_err();
            assert_eq!(err.code(), "INSUFFICIENT_PLAYERS");
        }
    }

    #[test]
    fn test_recommend_picks_higher_rated_keeper() {
        let mut players = squad_442();
        let mut better = player_aged(12, PlayerPosition::Goalkeeper, 24);
        better.attributes.keeping = 95;
        players.push(better);
        let team = team_with(players);

        let lineup = SquadManager::new(&team).recommend_lineup(Formation::F442, today()).unwrap();

        assert_eq!(lineup.starters[0], LineupSlot::new(PlayerId(12), PlayerPosition::Goalkeeper));
        assert_eq!(lineup.substitutes, vec![PlayerId(1)]);
    }

    #[test]
    fn test_equal_ratings_keep_roster_order() {
        let mut players = squad_442();
        players.push(player_aged(12, PlayerPosition::Forward, 24));
        let team = team_with(players);

        let lineup = SquadManager::new(&team).recommend_lineup(Formation::F442, today()).unwrap();

        let forwards: Vec<PlayerId> = lineup
            .starters
            .iter()
            .filter(|slot| slot.position == PlayerPosition::Forward)
            .map(|slot| slot.player_id)
            .collect();
        assert_eq!(forwards, vec![PlayerId(10), PlayerId(11)]);
    }

    #[test]
    fn test_midfielder_claimed_by_earlier_line() {
        // three defenders only, so the best remaining midfielder covers defence
        let mut players = squad_442();
        players.remove(4);
        players.push(player_aged(12, PlayerPosition::Midfielder, 24));
        let team = team_with(players);

        let lineup = SquadManager::new(&team).recommend_lineup(Formation::F442, today()).unwrap();

        assert_eq!(lineup.position_of(PlayerId(6)), Some(PlayerPosition::Defender));
        assert_eq!(lineup.count_at(PlayerPosition::Midfielder), 4);
    }

    #[test]
    fn test_slots_ranked_by_rating_at_slot() {
        let team = team_with(squad_442());
        let defender = team.get_player(PlayerId(2)).unwrap();
        let midfielder = team.get_player(PlayerId(6)).unwrap();

        // 67 vs 66 at their natural positions, under 66 at the back
        assert!(midfielder.overall_rating() > defender.overall_rating());
        assert!(midfielder.rating_at(PlayerPosition::Defender) < defender.rating_at(PlayerPosition::Defender));

        let lineup = SquadManager::new(&team).recommend_lineup(Formation::F442, today()).unwrap();

        for id in 2..=5 {
            assert_eq!(lineup.position_of(PlayerId(id)), Some(PlayerPosition::Defender));
        }
        for id in 6..=9 {
            assert_eq!(lineup.position_of(PlayerId(id)), Some(PlayerPosition::Midfielder));
        }
    }

    #[test]
    fn test_bench_capped_at_seven_in_roster_order() {
        let mut players = squad_442();
        // eleven spares, weaker than every starter and rising in rating with id
        for id in 12..=22u32 {
            let mut spare = player_aged(id, PlayerPosition::ALL[id as usize % 4], 24);
            spare.attributes = PlayerAttributes::flat(20 + 2 * (id - 12) as u8);
            players.push(spare);
        }
        let team = team_with(players);

        let lineup = SquadManager::new(&team).recommend_lineup(Formation::F442, today()).unwrap();

        assert_eq!(lineup.starter_ids(), (1..=11).map(PlayerId).collect::<Vec<_>>());
        assert_eq!(lineup.substitutes, (12..=18).map(PlayerId).collect::<Vec<_>>());
    }

    #[test]
    fn test_captain_tie_goes_to_first_starter() {
        let team = team_with(squad_442());

        let lineup = SquadManager::new(&team).recommend_lineup(Formation::F442, today()).unwrap();

        assert_eq!(lineup.captain, Some(PlayerId(1)));
    }

    #[test]
    fn test_benched_captain_replaced() {
        let mut players = squad_442();
        let mut keeper = player_aged(12, PlayerPosition::Goalkeeper, 24);
        keeper.attributes.keeping = 95;
        players.push(keeper);
        let mut team = team_with(players);
        team.set_captain(PlayerId(1)).unwrap();

        let lineup = SquadManager::new(&team).recommend_lineup(Formation::F442, today()).unwrap();

        assert_eq!(lineup.substitutes, vec![PlayerId(1)]);
        // the 24-year-old keeper is scored first, then defender 2 at 25 beats it
        assert_eq!(lineup.captain, Some(PlayerId(2)));
    }

    #[test]
    fn test_captain_retained_when_starting() {
        let mut team = team_with(squad_442());
        team.set_captain(PlayerId(9)).unwrap();

        let lineup = SquadManager::new(&team).recommend_lineup(Formation::F442, today()).unwrap();

        assert_eq!(lineup.captain, Some(PlayerId(9)));
    }

    #[test]
    fn test_captain_by_experience() {
        let mut players = squad_442();
        players[6] = player_aged(7, PlayerPosition::Midfielder, 33);
        players[3].career_stats.total_matches = 100;
        let team = team_with(players);

        // 25 + 100 / 10 beats 33
        let lineup = SquadManager::new(&team).recommend_lineup(Formation::F442, today()).unwrap();

        assert_eq!(lineup.captain, Some(PlayerId(4)));
    }

    #[test]
    fn test_squad_depth_sorted_and_stable() {
        let mut players = squad_442();
        players[3].attributes.tackling = 95;
        let team = team_with(players);
        let manager = SquadManager::new(&team);

        let depth = manager.squad_depth();
        let defenders: Vec<PlayerId> = depth[&PlayerPosition::Defender].iter().map(|p| p.id).collect();

        assert_eq!(defenders, vec![PlayerId(4), PlayerId(2), PlayerId(3), PlayerId(5)]);
        assert_eq!(depth.len(), 4);

        let again = manager.squad_depth();
        assert!(depth.iter().zip(again.iter()).all(|((pa, a), (pb, b))| {
            pa == pb && a.iter().map(|p| p.id).eq(b.iter().map(|p| p.id))
        }));
    }

    #[test]
    fn test_aggregates_and_filters() {
        let mut players = squad_442();
        players[0] = player_aged(1, PlayerPosition::Goalkeeper, 19);
        players[1] = player_aged(2, PlayerPosition::Defender, 34);
        players[2].status = PlayerStatus::Injured;
        players[3].status = PlayerStatus::Suspended;
        for player in players.iter_mut() {
            player.market_value = 1_000;
            player.wage = 100;
        }
        let team = team_with(players);
        let manager = SquadManager::new(&team);

        assert_eq!(manager.squad_value(), 11_000);
        assert_eq!(manager.wage_bill(), 1_100);
        assert_eq!(manager.youth_prospects(today()).len(), 1);
        assert_eq!(manager.veterans(today()).len(), 1);
        assert_eq!(manager.injured_players()[0].id, PlayerId(3));
        assert_eq!(manager.suspended_players()[0].id, PlayerId(4));

        // (19 + 34 + 9 * 25) / 11
        assert!((manager.squad_age(today()) - 278.0 / 11.0).abs() < 1e-9);
    }
}
