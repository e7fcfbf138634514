//! Shared test fixtures for the `game` submodule test suites.
//! This module exists to avoid repeating grid and monster setup across many tests.
//! It does not own production gameplay logic.

use super::*;
use crate::config::GameConfig;
use crate::ports::ImageRef;
use crate::state::{Monster, MonsterStats, Occupant, Tile};

pub(super) const TEST_MONSTER_COIN: u32 = 3;

/// A started session whose grid is replaced by `rows`.
pub(super) fn playing_session(rows: &[&str]) -> GameSession {
    let mut session = GameSession::new(7, GameConfig::default()).expect("default catalog");
    session.start_game().expect("start from main menu");
    install_ascii(&mut session, rows);
    session
}

/// Replaces the session grid with a square ASCII fixture and redraws it.
///
/// Glyphs: `#` wall, `.` floor, `S` start, `E` end, `~` river, plus `P` (player on floor),
/// `M` (slow test monster on floor), `B` (bonfire on floor), `C` (relic chest on floor).
pub(super) fn install_ascii(session: &mut GameSession, rows: &[&str]) {
    let size = rows.len();
    let mut tiles = Vec::with_capacity(size * size);
    let mut player = None;

    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), size, "fixture rows must form a square");
        for (x, glyph) in row.chars().enumerate() {
            let pos = Pos { y: y as i32, x: x as i32 };
            let (kind, occupant) = match glyph {
                '#' => (TileKind::Wall, None),
                '.' => (TileKind::Floor, None),
                'S' => (TileKind::Start, None),
                'E' => (TileKind::End, None),
                '~' => (TileKind::River, None),
                'P' => {
                    player = Some(pos);
                    (TileKind::Floor, None)
                }
                'M' => (TileKind::Floor, Some(Occupant::Monster(test_monster(pos, 6, 3, 0, 1)))),
                'B' => (TileKind::Floor, Some(Occupant::Bonfire)),
                'C' => (TileKind::Floor, Some(Occupant::RelicChest)),
                other => panic!("unknown fixture glyph {other:?}"),
            };
            let mut tile = Tile::new(pos, kind, ImageRef(format!("test/{}.png", kind.name())));
            tile.occupant = occupant;
            tiles.push(tile);
        }
    }

    session.state.grid = Grid::new(size, tiles);
    session.state.player.pos = player.expect("fixture needs a P glyph");
    session.redraw_floor();
}

pub(super) fn test_monster(pos: Pos, hp: i32, atk: i32, def: i32, spd: i32) -> Monster {
    Monster {
        kind: MonsterKind::Slime,
        name: "Test Slime",
        tier: MonsterTier::Level1,
        pos,
        stats: MonsterStats { max_hp: hp, hp, atk, def, spd },
        coin: TEST_MONSTER_COIN,
    }
}

/// Puts a monster with the given stats on `pos`, replacing any occupant, and redraws.
pub(super) fn set_test_monster(
    session: &mut GameSession,
    pos: Pos,
    hp: i32,
    atk: i32,
    def: i32,
    spd: i32,
) {
    let tile = session.state.grid.tile_mut(pos).expect("fixture position in bounds");
    tile.occupant = Some(Occupant::Monster(test_monster(pos, hp, atk, def, spd)));
    session.redraw_floor();
}
