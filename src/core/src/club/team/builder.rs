use crate::club::{Formation, Player, Stadium, Team, TeamId, TeamTactics};

#[derive(Default)]
pub struct TeamBuilder {
    id: Option<TeamId>,
    name: Option<String>,
    short_name: Option<String>,
    founded: Option<u16>,
    stadium: Option<Stadium>,
    manager_name: Option<String>,
    players: Option<Vec<Player>>,
    formation: Option<Formation>,
    tactics: Option<TeamTactics>,
    budget: Option<i64>,
    wage_budget: Option<i64>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: TeamId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    pub fn founded(mut self, founded: u16) -> Self {
        self.founded = Some(founded);
        self
    }

    pub fn stadium(mut self, stadium: Stadium) -> Self {
        self.stadium = Some(stadium);
        self
    }

    pub fn manager_name(mut self, manager_name: impl Into<String>) -> Self {
        self.manager_name = Some(manager_name.into());
        self
    }

    pub fn players(mut self, players: Vec<Player>) -> Self {
        self.players = Some(players);
        self
    }

    pub fn formation(mut self, formation: Formation) -> Self {
        self.formation = Some(formation);
        self
    }

    pub fn tactics(mut self, tactics: TeamTactics) -> Self {
        self.tactics = Some(tactics);
        self
    }

    pub fn budget(mut self, budget: i64) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn wage_budget(mut self, wage_budget: i64) -> Self {
        self.wage_budget = Some(wage_budget);
        self
    }

    pub fn build(self) -> Result<Team, String> {
        let mut team = Team::new(
            self.id.ok_or("id is required")?,
            self.name.ok_or("name is required")?,
            self.stadium.unwrap_or_default(),
        );

        if let Some(short_name) = self.short_name {
            team.short_name = short_name;
        }

        let tactics = self.tactics.unwrap_or_default();
        tactics.validate().map_err(|e| e.to_string())?;

        team.founded = self.founded;
        team.manager_name = self.manager_name;
        team.formation = self.formation.unwrap_or_default();
        team.tactics = tactics;
        team.budget = self.budget.unwrap_or(0);
        team.wage_budget = self.wage_budget.unwrap_or(0);

        for player in self.players.unwrap_or_default() {
            team.add_player(player).map_err(|e| e.to_string())?;
        }

        Ok(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{PlayerId, PlayerPosition};
    use crate::fixtures::player_aged;

    #[test]
    fn test_build_team() {
        let team = TeamBuilder::new()
            .id(TeamId(8))
            .name("Harbour City")
            .formation(Formation::F433)
            .players(vec![
                player_aged(1, PlayerPosition::Goalkeeper, 30),
                player_aged(2, PlayerPosition::Defender, 22),
            ])
            .budget(5_000_000)
            .build()
            .unwrap();

        assert_eq!(team.short_name, "HAR");
        assert_eq!(team.formation, Formation::F433);
        assert_eq!(team.players.len(), 2);
        assert_eq!(team.get_player(PlayerId(2)).unwrap().current_team_id, Some(TeamId(8)));
    }

    #[test]
    fn test_build_rejects_duplicate_players() {
        let result = TeamBuilder::new()
            .id(TeamId(8))
            .name("Harbour City")
            .players(vec![
                player_aged(1, PlayerPosition::Goalkeeper, 30),
                player_aged(1, PlayerPosition::Goalkeeper, 30),
            ])
            .build();

        assert_eq!(result.err(), Some("player 1 already in squad".to_string()));
    }

    #[test]
    fn test_build_requires_name() {
        let result = TeamBuilder::new().id(TeamId(8)).build();

        assert_eq!(result.err(), Some("name is required".to_string()));
    }
}
