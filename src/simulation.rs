use crate::config::SimulationConfig;
use chrono::{Days, NaiveDate};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use squad_core::utils::Logging;
use squad_core::{
    CupProgress, DevelopmentEngine, FinancialManager, FitnessEngine, MatchPerformance, MatchResult,
    PlayerGenerator, PlayerId, PlayerPosition, SquadManager, Stadium, Team, TeamId, TrainingType,
    Transaction, TransactionType,
};
use std::collections::HashMap;

const TRAINING_ROTATION: [TrainingType; 5] = [
    TrainingType::Technical,
    TrainingType::Physical,
    TrainingType::Tactical,
    TrainingType::SetPieces,
    TrainingType::General,
];

const TRAINING_INTENSITY: f64 = 0.6;
const REST_DAYS: u64 = 5;
const DEVELOPMENT_INTERVAL_WEEKS: u32 = 4;
const OPPONENTS: [&str; 6] = ["Rovers", "Athletic", "Wanderers", "Albion", "County", "Rangers"];

/// Weekly driver: training, recovery, a matchday and periodic ageing.
/// Plays the part of the scheduler and match engine around the core.
pub struct SeasonSimulation {
    config: SimulationConfig,
    team: Team,
    development: DevelopmentEngine,
    rng: StdRng,
    date: NaiveDate,
    injuries: HashMap<PlayerId, u16>,
}

impl SeasonSimulation {
    pub fn new(config: SimulationConfig, start: NaiveDate) -> color_eyre::Result<Self> {
        let mut generator = PlayerGenerator::with_seed(config.seed);
        let squad = generator.generate_squad(config.squad_size, start);

        let mut team = Team::builder()
            .id(TeamId(1))
            .name("Northbridge Town")
            .stadium(Stadium::new("Riverside Park", 24_000))
            .formation(config.formation)
            .players(squad)
            .build()
            .map_err(|e| color_eyre::eyre::eyre!(e))?;

        team.apply_season_budget(FinancialManager::season_budget(8, CupProgress::Quarter));

        let season_id = format!("{}", start.format("%Y"));
        for player in team.players.iter_mut() {
            player.start_season(season_id.clone());
        }

        info!(
            "squad generated: {} players, strength {:.1}",
            team.players.len(),
            team.team_strength()
        );

        Ok(SeasonSimulation {
            development: DevelopmentEngine::with_seed(config.seed),
            rng: StdRng::seed_from_u64(config.seed.wrapping_add(1)),
            config,
            team,
            date: start,
            injuries: HashMap::new(),
        })
    }

    pub fn run(&mut self) -> color_eyre::Result<()> {
        for week in 1..=self.config.weeks {
            let message = format!("simulate week {}", week);
            Logging::estimate_result(|| self.simulate_week(week), &message)?;
        }

        self.report();

        Ok(())
    }

    fn simulate_week(&mut self, week: u32) -> color_eyre::Result<()> {
        let training_type = TRAINING_ROTATION[(week as usize - 1) % TRAINING_ROTATION.len()];

        self.train(training_type);

        for _ in 0..REST_DAYS {
            self.rest_day();
        }

        self.matchday(week)?;

        if week % DEVELOPMENT_INTERVAL_WEEKS == 0 {
            self.natural_development();
        }

        info!(
            "week {}: form {}, strength {:.1}, injured {}, budget {}",
            week,
            self.team.form_string(),
            self.team.team_strength(),
            SquadManager::new(&self.team).injured_players().len(),
            self.team.budget
        );

        Ok(())
    }

    fn train(&mut self, training_type: TrainingType) {
        let now = self.date;

        for player in self.team.players.iter_mut().filter(|p| p.is_available()) {
            let result = self
                .development
                .process_training(player, training_type, TRAINING_INTENSITY, now);

            if result.has_improvements() {
                debug!("{}: +{} from {} training", player.name(), result.total_gain(), training_type);
            }
        }
    }

    fn rest_day(&mut self) {
        self.date = self.date + Days::new(1);
        let now = self.date;
        let timestamp = now.and_time(chrono::NaiveTime::MIN);

        let mut recovered = Vec::new();
        for (player_id, days) in self.injuries.iter_mut() {
            *days = days.saturating_sub(1);
            if *days == 0 {
                recovered.push(*player_id);
            }
        }

        for player_id in recovered {
            self.injuries.remove(&player_id);
            if let Ok(player) = self.team.get_player_mut(player_id) {
                if let Some(event) = player.recover(timestamp) {
                    info!("{} is back in training ({})", player.name(), event.event_type().as_str());
                }
            }
        }

        for player in self.team.players.iter_mut() {
            FitnessEngine::apply_daily_recovery(player, 0.5, now);
        }
    }

    fn matchday(&mut self, week: u32) -> color_eyre::Result<()> {
        self.date = self.date + Days::new(1);
        let now = self.date;
        let timestamp = now.and_time(chrono::NaiveTime::MIN);
        let match_id = format!("match-{}", week);

        let lineup = match SquadManager::new(&self.team).recommend_lineup(self.config.formation, now) {
            Ok(lineup) => lineup,
            Err(e) => {
                warn!("week {}: match forfeited, {} ({})", week, e, e.code());
                self.team.record_match(MatchResult::new(match_id, Self::opponent(week), true, 0, 3));
                self.date = self.date + Days::new(1);
                return Ok(());
            }
        };

        self.team.set_lineup(lineup.clone(), match_id.clone(), timestamp)?;

        let is_home = week % 2 == 1;
        let mut goals_for = 0u8;

        for slot in &lineup.starters {
            let player = self.team.get_player_mut(slot.player_id)?;

            let scoring_chance = match slot.position {
                PlayerPosition::Forward => 0.35,
                PlayerPosition::Midfielder => 0.15,
                PlayerPosition::Defender => 0.05,
                PlayerPosition::Goalkeeper => 0.0,
            };

            let goals = u16::from(self.rng.random::<f64>() < scoring_chance);
            goals_for += goals as u8;

            let performance = MatchPerformance {
                goals,
                yellow_cards: u8::from(self.rng.random::<f64>() < 0.1),
                ..MatchPerformance::new(90, self.rng.random_range(5.0..9.0))
            };

            player.update_match_stats(&performance);
            FitnessEngine::apply_match_fitness(player, 90, 1.0, now);

            let risk = FitnessEngine::injury_risk(player, now);
            if self.rng.random::<f64>() < risk {
                let days = self.rng.random_range(7..=28);
                let event = player.injure("Muscle Strain", days, timestamp);
                info!("{} injured for {} days ({})", player.name(), days, event.event_type().as_str());
                self.injuries.insert(player.id, days);
            }
        }

        let goals_against = self.rng.random_range(0..=3u8);
        self.team.record_match(MatchResult::new(
            match_id.clone(),
            Self::opponent(week),
            is_home,
            goals_for,
            goals_against,
        ));

        let revenue = FinancialManager::new(&self.team).match_revenue(self.rng.random_range(12_000..=24_000), is_home);
        if revenue > 0 {
            self.team.record_transaction(Transaction::new(
                format!("{}-gate", match_id),
                TransactionType::TicketSales,
                revenue,
                "gate receipts",
                now,
            ));
        }

        self.date = self.date + Days::new(1);

        Ok(())
    }

    fn natural_development(&mut self) {
        let now = self.date;

        for player in self.team.players.iter_mut() {
            let result = self.development.process_natural_development(player, now);
            if result.quality_before != result.quality_after {
                debug!(
                    "{}: quality {} -> {}",
                    player.name(),
                    result.quality_before,
                    result.quality_after
                );
            }
        }
    }

    fn opponent(week: u32) -> &'static str {
        OPPONENTS[week as usize % OPPONENTS.len()]
    }

    fn report(&self) {
        let squad = SquadManager::new(&self.team);
        let finances = FinancialManager::new(&self.team);

        info!(
            "season report: {} played, {} pts, form {}",
            self.team.season_stats.played,
            self.team.season_stats.points,
            self.team.form_string()
        );

        for (position, players) in squad.squad_depth() {
            if let Some(best) = players.first() {
                info!(
                    "{}: {} players, best {} ({})",
                    position,
                    players.len(),
                    best.name(),
                    best.overall_rating()
                );
            }
        }

        info!(
            "average age {:.1}, squad value {}, wage bill {}/{}",
            squad.squad_age(self.date),
            squad.squad_value(),
            finances.total_wages(),
            self.team.wage_budget
        );
    }
}
