//! Public data models for generated floors, placements, and catalog errors.

use std::fmt;

use crate::content::MonsterTemplate;
use crate::state::Grid;
use crate::types::{ObjectKind, Pos, RegionId};

#[derive(Clone, Debug)]
pub struct GeneratedFloor {
    pub layout_index: usize,
    pub grid: Grid,
    /// Plain `Floor` cells in row-major order; `Start` and `End` are never spawn candidates.
    pub floor_cells: Vec<Pos>,
    pub start_cell: Pos,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Placement {
    Monster { pos: Pos, template: MonsterTemplate },
    RelicChest { pos: Pos },
    Bonfire { pos: Pos },
}

impl Placement {
    pub fn pos(&self) -> Pos {
        match self {
            Placement::Monster { pos, .. }
            | Placement::RelicChest { pos }
            | Placement::Bonfire { pos } => *pos,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            Placement::Monster { .. } => ObjectKind::Monster,
            Placement::RelicChest { .. } => ObjectKind::RelicChest,
            Placement::Bonfire { .. } => ObjectKind::Bonfire,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapGenError {
    NoLayouts(RegionId),
    WrongSize { region: RegionId, layout: usize, expected: usize },
    StartCount { region: RegionId, layout: usize, found: usize },
    MissingEnd { region: RegionId, layout: usize },
    UnknownGlyph { region: RegionId, layout: usize, glyph: char },
}

impl fmt::Display for MapGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLayouts(region) => write!(f, "region {} has no layouts", region.key()),
            Self::WrongSize { region, layout, expected } => write!(
                f,
                "layout {layout} of {} is not {expected}x{expected}",
                region.key()
            ),
            Self::StartCount { region, layout, found } => write!(
                f,
                "layout {layout} of {} has {found} start tiles, expected exactly one",
                region.key()
            ),
            Self::MissingEnd { region, layout } => {
                write!(f, "layout {layout} of {} has no end tile", region.key())
            }
            Self::UnknownGlyph { region, layout, glyph } => {
                write!(f, "layout {layout} of {} uses unknown glyph {glyph:?}", region.key())
            }
        }
    }
}

impl std::error::Error for MapGenError {}
