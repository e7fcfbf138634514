//! Turn-order combat between the player and a single monster.
//! This module exists to keep damage math and strike ordering independent of grid bookkeeping.
//! It does not own coin transfer, tile cleanup, or phase changes after a death.

use std::cmp::Ordering;

use super::*;
use crate::ports::AudioCue;
use crate::roll::coin_flip;
use crate::state::{Monster, Occupant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strike {
    pub attacker: Combatant,
    pub damage: i32,
    pub defender_hp_after: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatOutcome {
    pub first_striker: Combatant,
    pub strikes: Vec<Strike>,
    pub monster_slain: bool,
    pub player_slain: bool,
}

/// Every landed hit does at least one point.
pub fn damage(atk: i32, def: i32) -> i32 {
    (atk - def).max(1)
}

/// The faster side strikes first; equal speed is a coin flip. A defender left standing strikes
/// back exactly once.
pub fn resolve_combat(
    player: &mut Player,
    monster: &mut Monster,
    rng: &mut ChaCha8Rng,
) -> CombatOutcome {
    let first_striker = match player.spd().cmp(&monster.stats.spd) {
        Ordering::Greater => Combatant::Player,
        Ordering::Less => Combatant::Monster,
        Ordering::Equal if coin_flip(rng) => Combatant::Player,
        Ordering::Equal => Combatant::Monster,
    };

    let mut strikes = vec![strike(first_striker, player, monster)];
    if !player.is_dead() && !monster.is_dead() {
        let second = match first_striker {
            Combatant::Player => Combatant::Monster,
            Combatant::Monster => Combatant::Player,
        };
        strikes.push(strike(second, player, monster));
    }

    CombatOutcome {
        first_striker,
        strikes,
        monster_slain: monster.is_dead(),
        player_slain: player.is_dead(),
    }
}

/// A single unanswered hit from a monster.
pub fn resolve_ambush(player: &mut Player, monster: &Monster) -> Strike {
    let dealt = damage(monster.stats.atk, player.def());
    Strike {
        attacker: Combatant::Monster,
        damage: dealt,
        defender_hp_after: player.take_damage(dealt),
    }
}

fn strike(attacker: Combatant, player: &mut Player, monster: &mut Monster) -> Strike {
    match attacker {
        Combatant::Player => {
            let dealt = damage(player.atk(), monster.stats.def);
            Strike { attacker, damage: dealt, defender_hp_after: monster.take_damage(dealt) }
        }
        Combatant::Monster => {
            let dealt = damage(monster.stats.atk, player.def());
            Strike { attacker, damage: dealt, defender_hp_after: player.take_damage(dealt) }
        }
    }
}

impl<R: Renderer> GameSession<R> {
    pub(super) fn fight_monster_at(&mut self, pos: Pos) -> MoveOutcome {
        let Some(Occupant::Monster(monster)) =
            self.state.grid.tile_mut(pos).and_then(|tile| tile.occupant.as_mut())
        else {
            return MoveOutcome::Ignored;
        };
        let outcome = resolve_combat(&mut self.state.player, monster, &mut self.rng);

        for strike in &outcome.strikes {
            self.audio.play(AudioCue::Hit);
            self.log.push(LogEvent::Strike {
                attacker: strike.attacker,
                damage: strike.damage,
                defender_hp: strike.defender_hp_after,
            });
        }

        if outcome.monster_slain {
            self.slay_monster(pos);
        }
        if outcome.player_slain {
            self.audio.play(AudioCue::Death);
            self.enter_game_over();
            return MoveOutcome::PlayerDied;
        }
        MoveOutcome::Fought { at: pos, monster_slain: outcome.monster_slain }
    }

    /// Pays out the monster's coin and removes it from its tile and the render set.
    fn slay_monster(&mut self, pos: Pos) {
        let Some(tile) = self.state.grid.tile_mut(pos) else {
            return;
        };
        let Some(Occupant::Monster(monster)) =
            tile.occupant.take_if(|occupant| matches!(occupant, Occupant::Monster(_)))
        else {
            return;
        };
        if let Some(handle) = tile.clear_occupant() {
            self.renderer.remove(handle);
        }
        self.state.player.coin += monster.coin;
        self.audio.play(AudioCue::Death);
        self.log.push(LogEvent::MonsterSlain { kind: monster.kind, at: pos, coin: monster.coin });
    }
}
