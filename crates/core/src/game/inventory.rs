//! Relic storage and permanent stat effects.

use super::*;
use crate::ports::AudioCue;

impl<R: Renderer> GameSession<R> {
    /// Applies `relic` to the player and stores it in the lowest empty slot.
    ///
    /// A full inventory is reported before anything else; a relic already held (or a catalog
    /// the player has fully collected) yields `NoRelicAvailable`. Nothing changes on rejection.
    pub fn add_relic(&mut self, relic: RelicDef) -> Result<usize, RelicRejection> {
        let inventory = &self.state.inventory;
        if inventory.is_full() {
            return Err(RelicRejection::InventoryFull);
        }
        let all_held = self.content.relics.iter().all(|known| inventory.holds(known.name));
        if inventory.holds(relic.name) || all_held {
            return Err(RelicRejection::NoRelicAvailable);
        }

        let slot = self.state.inventory.first_empty_mut().ok_or(RelicRejection::InventoryFull)?;
        slot.relic = Some(relic);
        let index = slot.index;
        self.state.player.stats = relic.effect.apply(self.state.player.stats);

        self.audio.play(AudioCue::Pickup);
        self.log.push(LogEvent::RelicAdded { relic: relic.name, slot: index });
        Ok(index)
    }
}
