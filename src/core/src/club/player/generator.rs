use crate::club::{AttributeKind, Player, PlayerAttributes, PlayerId, PlayerPosition, PlayerPreferredFoot};
use crate::shared::FullName;
use crate::utils::DateUtils;
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

const FIRST_NAMES: [&str; 16] = [
    "Adam", "Bruno", "Carlos", "Daniel", "Emil", "Felix", "Gabriel", "Hugo", "Ivan", "Jonas",
    "Karim", "Luca", "Marco", "Nikola", "Oscar", "Pavel",
];

const LAST_NAMES: [&str; 16] = [
    "Alves", "Berger", "Costa", "Dvorak", "Eriksen", "Fischer", "Garcia", "Hansen", "Ivanov",
    "Jensen", "Kovac", "Lindqvist", "Moreau", "Novak", "Olsen", "Petrov",
];

const NATIONALITIES: [&str; 8] = ["ENG", "ESP", "GER", "FRA", "ITA", "POR", "NED", "BRA"];

const ATTRIBUTE_SPREAD: i16 = 10;

/// Seeded source of plausible players around the positional defaults.
pub struct PlayerGenerator {
    rng: StdRng,
    next_id: u32,
}

impl PlayerGenerator {
    pub fn with_seed(seed: u64) -> Self {
        PlayerGenerator {
            rng: StdRng::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn generate(&mut self, position: PlayerPosition, min_age: u8, max_age: u8, now: NaiveDate) -> Player {
        let id = PlayerId(self.next_id);
        self.next_id += 1;

        let age = self.rng.random_range(min_age..=max_age.max(min_age));
        let birth_date = DateUtils::birth_date_for_age(age, now)
            .checked_sub_days(Days::new(self.rng.random_range(0..365)))
            .unwrap_or_else(|| DateUtils::birth_date_for_age(age, now));

        let full_name = FullName::new(
            FIRST_NAMES[self.rng.random_range(0..FIRST_NAMES.len())],
            LAST_NAMES[self.rng.random_range(0..LAST_NAMES.len())],
        );

        let mut player = Player::new(id, full_name, position, birth_date);

        player.attributes = self.generate_attributes(position);
        player.nationality = NATIONALITIES[self.rng.random_range(0..NATIONALITIES.len())].to_string();
        player.height = self.rng.random_range(168..=198);
        player.weight = self.rng.random_range(62..=92);
        player.preferred_foot = match self.rng.random_range(0..10) {
            0..=6 => PlayerPreferredFoot::Right,
            7 | 8 => PlayerPreferredFoot::Left,
            _ => PlayerPreferredFoot::Both,
        };

        let rating = player.overall_rating() as i64;
        player.wage = rating * rating * 5;
        player.market_value = rating * rating * 2_000;
        player.contract_until = now.checked_add_days(Days::new(365 * self.rng.random_range(1..=5)));

        player
    }

    /// Roughly two keepers per sixteen players, the rest split 2:2:1 over
    /// defence, midfield and attack.
    pub fn generate_squad(&mut self, size: usize, now: NaiveDate) -> Vec<Player> {
        let goalkeepers = (size / 8).max(2).min(size);
        let outfield = size - goalkeepers;
        let defenders = outfield * 2 / 5;
        let midfielders = outfield * 2 / 5;
        let forwards = outfield - defenders - midfielders;

        let plan = [
            (PlayerPosition::Goalkeeper, goalkeepers),
            (PlayerPosition::Defender, defenders),
            (PlayerPosition::Midfielder, midfielders),
            (PlayerPosition::Forward, forwards),
        ];

        let mut squad = Vec::with_capacity(size);

        for (position, count) in plan {
            for _ in 0..count {
                let mut player = self.generate(position, 17, 35, now);
                player.shirt_number = (squad.len() + 1) as u8;
                squad.push(player);
            }
        }

        squad
    }

    fn generate_attributes(&mut self, position: PlayerPosition) -> PlayerAttributes {
        let mut attributes = PlayerAttributes::for_position(position);

        for kind in AttributeKind::ALL {
            if kind == AttributeKind::Quality {
                continue;
            }

            if kind.is_hidden() {
                attributes.set(kind, self.rng.random_range(40..=95));
            } else {
                attributes.adjust(kind, self.rng.random_range(-ATTRIBUTE_SPREAD..=ATTRIBUTE_SPREAD));
            }
        }

        let quality = attributes.rating_for(position);
        attributes.set(AttributeKind::Quality, quality);

        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::today;

    #[test]
    fn test_generate_respects_age_range() {
        let mut generator = PlayerGenerator::with_seed(5);

        for _ in 0..50 {
            let player = generator.generate(PlayerPosition::Defender, 18, 22, today());
            let age = player.age(today());
            assert!((18..=22).contains(&age), "age {}", age);
            assert_eq!(player.attributes.quality, player.overall_rating());
        }
    }

    #[test]
    fn test_generate_squad_shape() {
        let mut generator = PlayerGenerator::with_seed(5);

        let squad = generator.generate_squad(24, today());

        let count = |position| squad.iter().filter(|p| p.position == position).count();
        assert_eq!(squad.len(), 24);
        assert_eq!(count(PlayerPosition::Goalkeeper), 3);
        assert_eq!(count(PlayerPosition::Defender), 8);
        assert_eq!(count(PlayerPosition::Midfielder), 8);
        assert_eq!(count(PlayerPosition::Forward), 5);

        let mut ids: Vec<_> = squad.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 24);
    }

    #[test]
    fn test_same_seed_same_squad() {
        let first = PlayerGenerator::with_seed(9).generate_squad(16, today());
        let second = PlayerGenerator::with_seed(9).generate_squad(16, today());

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.full_name, b.full_name);
            assert_eq!(a.birth_date, b.birth_date);
            assert_eq!(a.attributes, b.attributes);
        }
    }
}
