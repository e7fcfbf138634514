//! Collaborator seams: rendering, asset lookup, and audio.
//! This module exists so the rules engine can request presentation side effects without owning them.
//! It does not own any drawing, decoding, or playback code.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::content::monster_image;
use crate::mapgen::tile_image_variants;
use crate::roll::pick_index;
use crate::types::{DisplayHandle, MonsterKind, Pos, RegionId, TileKind};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetKey {
    Tile(TileKind),
    Player,
    Monster(MonsterKind),
    Bonfire,
    RelicChest,
}

/// Something the renderer can draw, tagged by what it depicts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    Tile { pos: Pos, kind: TileKind, image: ImageRef },
    Monster { pos: Pos, kind: MonsterKind, image: ImageRef },
    Player { pos: Pos, image: ImageRef },
    Bonfire { pos: Pos, image: ImageRef },
    RelicChest { pos: Pos, image: ImageRef },
}

impl Entity {
    pub fn pos(&self) -> Pos {
        match self {
            Entity::Tile { pos, .. }
            | Entity::Monster { pos, .. }
            | Entity::Player { pos, .. }
            | Entity::Bonfire { pos, .. }
            | Entity::RelicChest { pos, .. } => *pos,
        }
    }

    pub fn image(&self) -> &ImageRef {
        match self {
            Entity::Tile { image, .. }
            | Entity::Monster { image, .. }
            | Entity::Player { image, .. }
            | Entity::Bonfire { image, .. }
            | Entity::RelicChest { image, .. } => image,
        }
    }
}

pub trait Renderer {
    fn render(&mut self, entity: &Entity) -> DisplayHandle;
    fn remove(&mut self, handle: DisplayHandle);
    fn bring_to_front(&mut self, handle: DisplayHandle);
    /// Drops everything; called before a new floor is drawn.
    fn clear(&mut self);
}

pub trait AssetResolver {
    fn resolve_image(&mut self, key: AssetKey, region: RegionId) -> ImageRef;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Move,
    Hit,
    Death,
    ChestOpen,
    Pickup,
    AmbientLoop,
}

pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: AudioCue) {}
}

/// Resolves tile images from the region variant lists. Cosmetic picks draw from a private RNG
/// so they never disturb the rules RNG stream.
pub struct CatalogAssets {
    rng: ChaCha8Rng,
}

impl CatalogAssets {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed ^ 0xA55E_75A5_5E75_A55E) }
    }
}

impl AssetResolver for CatalogAssets {
    fn resolve_image(&mut self, key: AssetKey, region: RegionId) -> ImageRef {
        match key {
            AssetKey::Tile(kind) => {
                let variants = tile_image_variants(region, kind);
                let pick = pick_index(&mut self.rng, variants.len());
                ImageRef(variants[pick].clone())
            }
            AssetKey::Player => ImageRef("images/Player.png".to_string()),
            AssetKey::Monster(kind) => ImageRef(monster_image(kind).to_string()),
            AssetKey::Bonfire => ImageRef("images/Bonfire.png".to_string()),
            AssetKey::RelicChest => ImageRef("images/RelicChest.png".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_images_come_from_the_region_variants() {
        let mut assets = CatalogAssets::new(11);
        for region in RegionId::ALL {
            for kind in TileKind::ALL {
                let image = assets.resolve_image(AssetKey::Tile(kind), region);
                assert!(tile_image_variants(region, kind).contains(&image.0), "{image:?}");
            }
        }
    }

    #[test]
    fn same_seed_resolves_same_images() {
        let mut first = CatalogAssets::new(5);
        let mut second = CatalogAssets::new(5);
        for _ in 0..10 {
            let key = AssetKey::Tile(TileKind::Floor);
            assert_eq!(
                first.resolve_image(key, RegionId::Cave),
                second.resolve_image(key, RegionId::Cave)
            );
        }
    }
}
