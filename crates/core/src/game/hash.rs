//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from rules code.
//! It does not own replay execution or journal formats.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::state::Occupant;

impl<R: Renderer> GameSession<R> {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.next_input_seq);
        hasher.write_u8(match self.phase {
            GamePhase::MainMenu => 0,
            GamePhase::Playing => 1,
            GamePhase::GameOver => 2,
            GamePhase::Ending => 3,
        });
        hasher.write_u32(self.state.progression.floor);
        hasher.write_u8(self.state.progression.tier as u8);
        hasher.write_u64(self.layout_index.map_or(u64::MAX, |index| index as u64));

        let player = &self.state.player;
        hasher.write_i32(player.pos.x);
        hasher.write_i32(player.pos.y);
        for stat in [
            player.stats.max_hp,
            player.stats.hp,
            player.stats.atk,
            player.stats.def,
            player.stats.spd,
            player.stats.atk_pct,
            player.stats.def_pct,
        ] {
            hasher.write_i32(stat);
        }
        hasher.write_u32(player.coin);

        for slot in self.state.inventory.slots() {
            match &slot.relic {
                Some(relic) => hasher.write(relic.key.as_bytes()),
                None => hasher.write_u8(0),
            }
        }

        for (tile, occupant) in self.state.grid.occupied() {
            hasher.write_i32(tile.pos.x);
            hasher.write_i32(tile.pos.y);
            match occupant {
                Occupant::Monster(monster) => {
                    hasher.write_u8(1);
                    hasher.write_u8(monster.kind as u8);
                    hasher.write_i32(monster.stats.hp);
                }
                Occupant::Bonfire => hasher.write_u8(2),
                Occupant::RelicChest => hasher.write_u8(3),
            }
        }
        if let Some(offer) = self.pending_chest {
            hasher.write_u64(offer.prompt_id.0);
            hasher.write(offer.relic.as_bytes());
        }
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn same_seed_same_hash() {
        let mut first = GameSession::new(99, GameConfig::default()).expect("default catalog");
        let mut second = GameSession::new(99, GameConfig::default()).expect("default catalog");
        first.start_game().expect("start");
        second.start_game().expect("start");
        assert_eq!(first.snapshot_hash(), second.snapshot_hash());
    }

    #[test]
    fn hash_tracks_player_state() {
        let mut session = playing_session(&["S..", ".P.", "..E"]);
        let before = session.snapshot_hash();
        session.move_player(Direction::Up).expect("playing");
        assert_ne!(before, session.snapshot_hash());
    }
}
