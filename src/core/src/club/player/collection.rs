use crate::club::{Player, PlayerId, PlayerPosition, PlayerStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerCollection {
    pub players: Vec<Player>,
}

impl PlayerCollection {
    pub fn new(players: Vec<Player>) -> Self {
        PlayerCollection { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn by_position(&self, position: PlayerPosition) -> Vec<&Player> {
        self.players.iter().filter(|p| p.position == position).collect()
    }

    pub fn by_status(&self, status: PlayerStatus) -> Vec<&Player> {
        self.players.iter().filter(|p| p.status == status).collect()
    }

    pub fn available(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_available()).collect()
    }

    pub fn add(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn get_week_salary(&self) -> i64 {
        self.players.iter().map(|p| p.wage).sum()
    }

    pub fn players(&self) -> Vec<&Player> {
        self.players.iter().collect()
    }

    pub fn find(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn find_mut(&mut self, player_id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub fn take_player(&mut self, player_id: PlayerId) -> Option<Player> {
        let idx = self.players.iter().position(|p| p.id == player_id)?;
        Some(self.players.remove(idx))
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Player> {
        self.players.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::player_aged;

    #[test]
    fn test_take_player_preserves_order() {
        let mut collection = PlayerCollection::new(vec![
            player_aged(1, PlayerPosition::Goalkeeper, 25),
            player_aged(2, PlayerPosition::Defender, 25),
            player_aged(3, PlayerPosition::Forward, 25),
        ]);

        let taken = collection.take_player(PlayerId(2)).unwrap();

        assert_eq!(taken.id, PlayerId(2));
        assert_eq!(
            collection.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![PlayerId(1), PlayerId(3)]
        );
        assert!(collection.take_player(PlayerId(2)).is_none());
    }

    #[test]
    fn test_week_salary_sums_wages() {
        let mut first = player_aged(1, PlayerPosition::Defender, 25);
        first.wage = 1_500;
        let mut second = player_aged(2, PlayerPosition::Defender, 25);
        second.wage = 2_500;

        let collection = PlayerCollection::new(vec![first, second]);

        assert_eq!(collection.get_week_salary(), 4_000);
        assert_eq!(collection.by_position(PlayerPosition::Defender).len(), 2);
    }

    #[test]
    fn test_available_skips_unfit_and_injured() {
        let mut tired = player_aged(1, PlayerPosition::Midfielder, 25);
        tired.set_fitness(50.0);
        let mut injured = player_aged(2, PlayerPosition::Midfielder, 25);
        injured.status = PlayerStatus::Injured;
        let fit = player_aged(3, PlayerPosition::Midfielder, 25);

        let collection = PlayerCollection::new(vec![tired, injured, fit]);
        let available = collection.available();

        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, PlayerId(3));
        assert_eq!(collection.by_status(PlayerStatus::Injured).len(), 1);
    }
}
