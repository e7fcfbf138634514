//! Directional input resolution: what happens when the player tries to step onto a tile.
//! This module exists to order the per-move rules (chest, monster, bonfire, step, ambush, exit).
//! It does not own damage math, relic effects, or floor construction.

use std::cmp::Ordering;

use tracing::debug;

use super::*;
use crate::ports::AudioCue;
use crate::roll::chance;
use crate::state::Occupant;

impl<R: Renderer> GameSession<R> {
    pub fn move_player(&mut self, direction: Direction) -> Result<MoveOutcome, GameError> {
        if !self.input_enabled() {
            return Ok(MoveOutcome::Suppressed);
        }

        let target = self.state.player.pos.step(direction);
        let Some(tile) = self.state.grid.tile(target) else {
            return Ok(MoveOutcome::Ignored);
        };

        match tile.occupant {
            Some(Occupant::RelicChest) => return Ok(self.open_chest(target)),
            Some(Occupant::Monster(_)) => return Ok(self.fight_monster_at(target)),
            Some(Occupant::Bonfire) => return Ok(self.use_bonfire(target)),
            None => {}
        }
        if !tile.is_reachable() {
            return Ok(MoveOutcome::Ignored);
        }
        let kind = tile.kind;

        self.state.player.pos = target;
        self.render_player();
        self.audio.play(AudioCue::Move);
        self.log.push(LogEvent::PlayerMoved { to: target });

        let ambushed_by = self.resolve_ambushes();
        if self.state.player.is_dead() {
            self.audio.play(AudioCue::Death);
            self.enter_game_over();
            return Ok(MoveOutcome::PlayerDied);
        }

        if kind == TileKind::End {
            return Ok(match self.advance_floor()? {
                FloorAdvance::NextFloor { floor, tier, .. } => {
                    MoveOutcome::FloorAdvanced { floor, tier }
                }
                FloorAdvance::Ending { floor } => MoveOutcome::EndingReached { floor },
            });
        }
        Ok(MoveOutcome::Moved { to: target, ambushed_by })
    }

    /// Every orthogonal neighbour that is faster than the player, or as fast and wins the
    /// tie roll, lands one hit. Checked Up, Right, Down, Left; stops once the player is down.
    fn resolve_ambushes(&mut self) -> Vec<Pos> {
        let mut ambushers = Vec::new();
        for pos in self.state.player.pos.neighbors() {
            if self.state.player.is_dead() {
                break;
            }
            let Some(monster) = self.state.grid.tile(pos).and_then(|tile| tile.monster()) else {
                continue;
            };
            let ambushes = match monster.stats.spd.cmp(&self.state.player.spd()) {
                Ordering::Greater => true,
                Ordering::Equal => chance(&mut self.rng, self.config.ambush_tie_percent),
                Ordering::Less => false,
            };
            if !ambushes {
                continue;
            }

            let strike = resolve_ambush(&mut self.state.player, monster);
            debug!(?pos, damage = strike.damage, "ambushed");
            self.audio.play(AudioCue::Hit);
            self.log.push(LogEvent::Ambushed { by: monster.kind, at: pos });
            self.log.push(LogEvent::Strike {
                attacker: strike.attacker,
                damage: strike.damage,
                defender_hp: strike.defender_hp_after,
            });
            ambushers.push(pos);
        }
        ambushers
    }

    fn use_bonfire(&mut self, pos: Pos) -> MoveOutcome {
        let player = &mut self.state.player;
        let amount = player.stats.max_hp / 2 + self.config.bonfire_bonus;
        let healed = player.heal(amount);

        if let Some(handle) = self.state.grid.tile_mut(pos).and_then(|tile| tile.clear_occupant())
        {
            self.renderer.remove(handle);
        }
        self.audio.play(AudioCue::Pickup);
        self.log.push(LogEvent::BonfireUsed { at: pos, healed });
        MoveOutcome::Healed { at: pos, amount: healed }
    }
}
