use crate::config::PlayerBase;
use crate::content::{MonsterTemplate, RelicDef};
use crate::ports::ImageRef;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerStats {
    pub max_hp: i32,
    pub hp: i32,
    pub atk: i32,
    pub def: i32,
    pub spd: i32,
    /// Attack multiplier in percent; 100 is neutral.
    pub atk_pct: i32,
    /// Defense multiplier in percent; 100 is neutral.
    pub def_pct: i32,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Pos,
    pub stats: PlayerStats,
    pub coin: u32,
    pub display: Option<DisplayHandle>,
}

impl Player {
    pub fn new(base: &PlayerBase) -> Self {
        Self {
            pos: Pos { y: 0, x: 0 },
            stats: PlayerStats {
                max_hp: base.max_hp,
                hp: base.max_hp,
                atk: base.atk,
                def: base.def,
                spd: base.spd,
                atk_pct: 100,
                def_pct: 100,
            },
            coin: 0,
            display: None,
        }
    }

    pub fn atk(&self) -> i32 {
        self.stats.atk * self.stats.atk_pct / 100
    }

    pub fn def(&self) -> i32 {
        self.stats.def * self.stats.def_pct / 100
    }

    pub fn spd(&self) -> i32 {
        self.stats.spd
    }

    pub fn is_dead(&self) -> bool {
        self.stats.hp <= 0
    }

    /// Applies `damage`, flooring HP at zero, and returns the remaining HP.
    pub fn take_damage(&mut self, damage: i32) -> i32 {
        self.stats.hp = (self.stats.hp - damage).max(0);
        self.stats.hp
    }

    /// Restores up to `amount` HP and returns how much was actually healed.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.stats.hp;
        self.stats.hp = (self.stats.hp + amount.max(0)).min(self.stats.max_hp);
        self.stats.hp - before
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonsterStats {
    pub max_hp: i32,
    pub hp: i32,
    pub atk: i32,
    pub def: i32,
    pub spd: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monster {
    pub kind: MonsterKind,
    pub name: &'static str,
    pub tier: MonsterTier,
    pub pos: Pos,
    pub stats: MonsterStats,
    pub coin: u32,
}

impl Monster {
    pub fn spawn(template: &MonsterTemplate, pos: Pos) -> Self {
        Self {
            kind: template.kind,
            name: template.name,
            tier: template.tier,
            pos,
            stats: MonsterStats {
                max_hp: template.hp,
                hp: template.hp,
                atk: template.atk,
                def: template.def,
                spd: template.spd,
            },
            coin: template.coin,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.stats.hp <= 0
    }

    pub fn take_damage(&mut self, damage: i32) -> i32 {
        self.stats.hp = (self.stats.hp - damage).max(0);
        self.stats.hp
    }
}

/// The single object a reachable tile may hold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Occupant {
    Monster(Monster),
    Bonfire,
    RelicChest,
}

impl Occupant {
    pub fn kind(&self) -> ObjectKind {
        match self {
            Occupant::Monster(_) => ObjectKind::Monster,
            Occupant::Bonfire => ObjectKind::Bonfire,
            Occupant::RelicChest => ObjectKind::RelicChest,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Tile {
    pub pos: Pos,
    pub kind: TileKind,
    pub image: ImageRef,
    pub occupant: Option<Occupant>,
    pub display: Option<DisplayHandle>,
    pub occupant_display: Option<DisplayHandle>,
}

impl Tile {
    pub fn new(pos: Pos, kind: TileKind, image: ImageRef) -> Self {
        Self { pos, kind, image, occupant: None, display: None, occupant_display: None }
    }

    pub fn is_reachable(&self) -> bool {
        self.kind.is_reachable()
    }

    pub fn monster(&self) -> Option<&Monster> {
        match &self.occupant {
            Some(Occupant::Monster(monster)) => Some(monster),
            _ => None,
        }
    }

    /// Clears the occupant and hands back its display handle, if it had one.
    pub fn clear_occupant(&mut self) -> Option<DisplayHandle> {
        self.occupant = None;
        self.occupant_display.take()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Builds a square grid from row-major tiles; `tiles.len()` must equal `size * size`.
    pub fn new(size: usize, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), size * size);
        Self { size, tiles }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }

    pub fn tile(&self, pos: Pos) -> Option<&Tile> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.tiles.get(self.index(pos))
    }

    pub fn tile_mut(&mut self, pos: Pos) -> Option<&mut Tile> {
        if !self.in_bounds(pos) {
            return None;
        }
        let idx = self.index(pos);
        self.tiles.get_mut(idx)
    }

    pub fn kind_at(&self, pos: Pos) -> TileKind {
        self.tile(pos).map_or(TileKind::Wall, |tile| tile.kind)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    pub fn occupied(&self) -> impl Iterator<Item = (&Tile, &Occupant)> {
        self.tiles.iter().filter_map(|tile| tile.occupant.as_ref().map(|occupant| (tile, occupant)))
    }

    pub fn count_occupants(&self, kind: ObjectKind) -> usize {
        self.occupied().filter(|(_, occupant)| occupant.kind() == kind).count()
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.size + (pos.x as usize)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventorySlot {
    pub index: usize,
    pub relic: Option<RelicDef>,
}

impl InventorySlot {
    pub fn is_occupied(&self) -> bool {
        self.relic.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inventory {
    slots: Vec<InventorySlot>,
}

impl Inventory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { slots: (0..capacity).map(|index| InventorySlot { index, relic: None }).collect() }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&InventorySlot> {
        self.slots.get(index)
    }

    pub fn held_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(InventorySlot::is_occupied)
    }

    pub fn holds(&self, name: &str) -> bool {
        self.relics().any(|relic| relic.name == name)
    }

    pub fn relics(&self) -> impl Iterator<Item = &RelicDef> {
        self.slots.iter().filter_map(|slot| slot.relic.as_ref())
    }

    pub(crate) fn first_empty_mut(&mut self) -> Option<&mut InventorySlot> {
        self.slots.iter_mut().find(|slot| !slot.is_occupied())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressionState {
    pub floor: u32,
    pub tier: MonsterTier,
    pub tier_thresholds: [u32; 3],
    pub ending_floor: u32,
}

pub struct GameState {
    pub region: RegionId,
    pub grid: Grid,
    pub player: Player,
    pub inventory: Inventory,
    pub progression: ProgressionState,
}
