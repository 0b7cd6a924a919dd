use crate::club::{
    CareerStats, Player, PlayerAttributes, PlayerId, PlayerPosition, PlayerPreferredFoot,
    PlayerStatus, TeamId,
};
use crate::shared::FullName;
use chrono::NaiveDate;

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<PlayerId>,
    full_name: Option<FullName>,
    birth_date: Option<NaiveDate>,
    nationality: Option<String>,
    height: Option<u8>,
    weight: Option<u8>,
    position: Option<PlayerPosition>,
    preferred_foot: Option<PlayerPreferredFoot>,
    shirt_number: Option<u8>,
    contract_until: Option<NaiveDate>,
    market_value: Option<i64>,
    wage: Option<i64>,
    status: Option<PlayerStatus>,
    fitness: Option<f64>,
    morale: Option<f64>,
    form: Option<f64>,
    attributes: Option<PlayerAttributes>,
    career_stats: Option<CareerStats>,
    current_team_id: Option<TeamId>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: PlayerId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn full_name(mut self, full_name: FullName) -> Self {
        self.full_name = Some(full_name);
        self
    }

    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    pub fn nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }

    pub fn height(mut self, height: u8) -> Self {
        self.height = Some(height);
        self
    }

    pub fn weight(mut self, weight: u8) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn position(mut self, position: PlayerPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn preferred_foot(mut self, preferred_foot: PlayerPreferredFoot) -> Self {
        self.preferred_foot = Some(preferred_foot);
        self
    }

    pub fn shirt_number(mut self, shirt_number: u8) -> Self {
        self.shirt_number = Some(shirt_number);
        self
    }

    pub fn contract_until(mut self, contract_until: NaiveDate) -> Self {
        self.contract_until = Some(contract_until);
        self
    }

    pub fn market_value(mut self, market_value: i64) -> Self {
        self.market_value = Some(market_value);
        self
    }

    pub fn wage(mut self, wage: i64) -> Self {
        self.wage = Some(wage);
        self
    }

    pub fn status(mut self, status: PlayerStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn fitness(mut self, fitness: f64) -> Self {
        self.fitness = Some(fitness);
        self
    }

    pub fn morale(mut self, morale: f64) -> Self {
        self.morale = Some(morale);
        self
    }

    pub fn form(mut self, form: f64) -> Self {
        self.form = Some(form);
        self
    }

    pub fn attributes(mut self, attributes: PlayerAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn career_stats(mut self, career_stats: CareerStats) -> Self {
        self.career_stats = Some(career_stats);
        self
    }

    pub fn current_team_id(mut self, team_id: TeamId) -> Self {
        self.current_team_id = Some(team_id);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        let position = self.position.ok_or("position is required")?;

        let mut player = Player::new(
            self.id.ok_or("id is required")?,
            self.full_name.ok_or("full_name is required")?,
            position,
            self.birth_date.ok_or("birth_date is required")?,
        );

        player.nationality = self.nationality.unwrap_or_default();
        player.height = self.height.unwrap_or(0);
        player.weight = self.weight.unwrap_or(0);
        player.preferred_foot = self.preferred_foot.unwrap_or(PlayerPreferredFoot::Right);
        player.shirt_number = self.shirt_number.unwrap_or(0);
        player.contract_until = self.contract_until;
        player.market_value = self.market_value.unwrap_or(0);
        player.wage = self.wage.unwrap_or(0);
        player.status = self.status.unwrap_or(PlayerStatus::Available);
        player.current_team_id = self.current_team_id;
        player.career_stats = self.career_stats.unwrap_or_default();

        if let Some(attributes) = self.attributes {
            player.attributes = attributes;
        }

        if let Some(fitness) = self.fitness {
            player.set_fitness(fitness);
        }

        if let Some(morale) = self.morale {
            player.morale = 0.0;
            player.adjust_morale(morale);
        }

        if let Some(form) = self.form {
            player.form = form.clamp(0.0, 100.0);
        }

        Ok(player)
    }
}
