//! Floor construction, drawing, and progression between floors.
//! This module exists to isolate grid replacement and tier stepping from per-move rules.
//! It does not own what happens when the player walks onto an occupied tile.

use tracing::{debug, info};

use super::*;
use crate::mapgen::{Placement, place_objects};
use crate::ports::{AssetKey, Entity};
use crate::state::{Monster, Occupant};

impl<R: Renderer> GameSession<R> {
    /// Counts a completed floor. Reaching the ending floor ends the run; otherwise a new grid is
    /// dealt and the player placed on its start tile. Stats, coin, and relics carry over.
    pub fn advance_floor(&mut self) -> Result<FloorAdvance, GameError> {
        if self.phase != GamePhase::Playing {
            return Err(GameError::InvalidPhase(self.phase));
        }
        if self.pending_chest.is_some() {
            return Err(GameError::InputDisabled);
        }

        let progression = &mut self.state.progression;
        progression.floor += 1;
        let floor = progression.floor;
        let tier = self.config.tier_for_floor(floor);
        let tier_raised = tier != progression.tier;
        progression.tier = tier;
        self.log.push(LogEvent::FloorAdvanced { floor });
        if tier_raised {
            self.log.push(LogEvent::TierRaised { tier });
            info!(floor, tier = tier.label(), "monster tier raised");
        }

        if floor >= self.state.progression.ending_floor {
            self.phase = GamePhase::Ending;
            self.log.push(LogEvent::EndingReached { floor });
            info!(floor, "ending reached");
            return Ok(FloorAdvance::Ending { floor });
        }

        self.build_floor()?;
        info!(floor, "entered floor");
        Ok(FloorAdvance::NextFloor { floor, tier, tier_raised })
    }

    pub(super) fn build_floor(&mut self) -> Result<(), GameError> {
        let region = self.state.region;
        let generated = self.generator.generate(region, &mut self.rng, self.assets.as_mut())?;
        let placements = place_objects(
            &generated.floor_cells,
            &self.config.object_counts.ordered(),
            self.state.progression.tier,
            &self.content,
            &mut self.rng,
        );

        let mut grid = generated.grid;
        for placement in &placements {
            let Some(tile) = grid.tile_mut(placement.pos()) else {
                continue;
            };
            tile.occupant = Some(match placement {
                Placement::Monster { pos, template } => {
                    Occupant::Monster(Monster::spawn(template, *pos))
                }
                Placement::RelicChest { .. } => Occupant::RelicChest,
                Placement::Bonfire { .. } => Occupant::Bonfire,
            });
        }

        self.state.grid = grid;
        self.state.player.pos = generated.start_cell;
        self.layout_index = Some(generated.layout_index);
        self.redraw_floor();

        let floor = self.state.progression.floor;
        self.log.push(LogEvent::FloorGenerated {
            floor,
            region,
            layout: generated.layout_index,
            placed: placements.len(),
        });
        debug!(floor, layout = generated.layout_index, placed = placements.len(), "floor built");
        Ok(())
    }

    /// Clears the renderer and draws tiles, then occupants, then the player on top.
    pub(super) fn redraw_floor(&mut self) {
        self.renderer.clear();
        let region = self.state.region;

        for tile in self.state.grid.tiles_mut() {
            tile.display = Some(self.renderer.render(&Entity::Tile {
                pos: tile.pos,
                kind: tile.kind,
                image: tile.image.clone(),
            }));
            tile.occupant_display = tile.occupant.as_ref().map(|occupant| {
                let entity = occupant_entity(self.assets.as_mut(), region, tile.pos, occupant);
                self.renderer.render(&entity)
            });
        }

        self.state.player.display = None;
        self.render_player();
    }

    pub(super) fn render_player(&mut self) {
        if let Some(handle) = self.state.player.display.take() {
            self.renderer.remove(handle);
        }
        let image = self.assets.resolve_image(AssetKey::Player, self.state.region);
        let handle = self.renderer.render(&Entity::Player { pos: self.state.player.pos, image });
        self.renderer.bring_to_front(handle);
        self.state.player.display = Some(handle);
    }
}

fn occupant_entity(
    assets: &mut dyn AssetResolver,
    region: RegionId,
    pos: Pos,
    occupant: &Occupant,
) -> Entity {
    match occupant {
        Occupant::Monster(monster) => Entity::Monster {
            pos,
            kind: monster.kind,
            image: assets.resolve_image(AssetKey::Monster(monster.kind), region),
        },
        Occupant::Bonfire => {
            Entity::Bonfire { pos, image: assets.resolve_image(AssetKey::Bonfire, region) }
        }
        Occupant::RelicChest => {
            Entity::RelicChest { pos, image: assets.resolve_image(AssetKey::RelicChest, region) }
        }
    }
}
