//! Flat-colour rendering of the scene plus the HUD, inventory, and event log panels.

use crate::ui_text::{event_log_line, hud_lines, inventory_lines, status_text};
use app::app_loop::AppState;
use crawl_core::{Entity, GameSession, MonsterKind, Pos, TileKind, ViewMode};
use macroquad::prelude::*;

const PANEL_PAD: f32 = 16.0;
const STATUS_HEIGHT: f32 = 40.0;
const SIDEBAR_WIDTH: f32 = 300.0;
const LINE_STEP: f32 = 20.0;
const FONT_SIZE: f32 = 20.0;
const LOG_LINES: usize = 8;
const BORDER_COLOR: Color = Color { r: 0.2, g: 0.2, b: 0.2, a: 1.0 };

pub fn draw_frame(session: &GameSession, app_state: &AppState) {
    clear_background(BLACK);
    draw_text(&status_text(session, app_state), PANEL_PAD, 28.0, 24.0, WHITE);

    let board_size = (screen_width() - SIDEBAR_WIDTH - PANEL_PAD * 3.0)
        .min(screen_height() - STATUS_HEIGHT - PANEL_PAD * 2.0)
        .max(0.0);
    let board_origin = vec2(PANEL_PAD, STATUS_HEIGHT + PANEL_PAD);
    draw_rectangle_lines(board_origin.x, board_origin.y, board_size, board_size, 1.0, BORDER_COLOR);

    match session.view_mode() {
        ViewMode::Map => draw_scene(session, board_origin, board_size),
        ViewMode::Inventory => draw_lines(&inventory_lines(session), board_origin, LIGHTGRAY),
    }

    let sidebar = vec2(board_origin.x + board_size + PANEL_PAD, board_origin.y);
    let hud = hud_lines(session);
    draw_lines(&hud, sidebar, WHITE);

    let log_origin = vec2(sidebar.x, sidebar.y + (hud.len() + 1) as f32 * LINE_STEP);
    let recent: Vec<String> = session
        .log()
        .iter()
        .rev()
        .take(LOG_LINES)
        .rev()
        .map(event_log_line)
        .collect();
    draw_lines(&recent, log_origin, GRAY);
}

fn draw_lines(lines: &[String], origin: Vec2, color: Color) {
    for (row, line) in lines.iter().enumerate() {
        let y = origin.y + PANEL_PAD + row as f32 * LINE_STEP;
        draw_text(line, origin.x + PANEL_PAD, y, FONT_SIZE, color);
    }
}

/// Draws the scene back to front, one square cell per grid position.
fn draw_scene(session: &GameSession, origin: Vec2, board_size: f32) {
    let grid_size = session.grid().size();
    if grid_size == 0 {
        return;
    }
    let cell = board_size / grid_size as f32;
    let cell_origin =
        |pos: Pos| vec2(origin.x + pos.x as f32 * cell, origin.y + pos.y as f32 * cell);
    let half = cell / 2.0;

    for (_, entity) in session.renderer().iter() {
        let corner = cell_origin(entity.pos());
        let center = corner + vec2(half, half);
        match entity {
            Entity::Tile { kind, .. } => {
                draw_rectangle(corner.x, corner.y, cell, cell, tile_color(*kind));
            }
            Entity::Monster { kind, .. } => {
                draw_circle(center.x, center.y, cell * 0.35, monster_color(*kind));
            }
            Entity::Bonfire { .. } => {
                draw_triangle(
                    vec2(center.x, corner.y + cell * 0.15),
                    vec2(corner.x + cell * 0.2, corner.y + cell * 0.85),
                    vec2(corner.x + cell * 0.8, corner.y + cell * 0.85),
                    ORANGE,
                );
            }
            Entity::RelicChest { .. } => {
                let inset = cell * 0.2;
                let (width, height) = (cell - inset * 2.0, cell - inset * 3.0);
                draw_rectangle(corner.x + inset, corner.y + inset * 1.5, width, height, GOLD);
            }
            Entity::Player { .. } => {
                draw_circle(center.x, center.y, cell * 0.3, SKYBLUE);
                draw_circle_lines(center.x, center.y, cell * 0.3, 2.0, WHITE);
            }
        }
    }
}

fn tile_color(kind: TileKind) -> Color {
    match kind {
        TileKind::Wall => DARKGRAY,
        TileKind::Floor => Color::new(0.35, 0.3, 0.22, 1.0),
        TileKind::Start => Color::new(0.3, 0.45, 0.3, 1.0),
        TileKind::End => PURPLE,
        TileKind::River => DARKBLUE,
    }
}

fn monster_color(kind: MonsterKind) -> Color {
    match kind {
        MonsterKind::Slime | MonsterKind::Bat | MonsterKind::Rat => GREEN,
        MonsterKind::Goblin | MonsterKind::Wolf | MonsterKind::Skeleton => YELLOW,
        MonsterKind::Orc | MonsterKind::Wraith | MonsterKind::Harpy => RED,
        MonsterKind::Golem | MonsterKind::Drake | MonsterKind::Lich => MAGENTA,
    }
}
