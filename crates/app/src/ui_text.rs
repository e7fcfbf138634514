//! Text formatting for the status line, HUD, inventory view, and event log entries.

use app::app_loop::AppState;
use app::{format_seed, format_snapshot_hash, outcome_code};
use crawl_core::{
    ChestResolution, Combatant, GamePhase, GameSession, InputOutcome, LogEvent, MoveOutcome,
    RelicRejection,
};

pub fn status_text(session: &GameSession, app_state: &AppState) -> String {
    if let Some(error) = &app_state.last_error {
        return format!("Refused: {error}");
    }
    match session.phase() {
        GamePhase::MainMenu => "Press Enter to descend".to_string(),
        GamePhase::GameOver | GamePhase::Ending => {
            let code = outcome_code(session.phase()).unwrap_or("UNKNOWN");
            format!("Finished: {code} (Enter to restart)")
        }
        GamePhase::Playing => match session.pending_chest() {
            Some(offer) => {
                let name = session.content().relic(offer.relic).map_or(offer.relic, |r| r.name);
                format!("A chest holds {name}. Take it? (Y/N)")
            }
            None => app_state
                .last_outcome
                .as_ref()
                .and_then(outcome_text)
                .unwrap_or_else(|| "Arrows/WASD move, Tab inventory".to_string()),
        },
    }
}

fn outcome_text(outcome: &InputOutcome) -> Option<String> {
    let text = match outcome {
        InputOutcome::Move(MoveOutcome::Fought { monster_slain: true, .. }) => {
            "The monster falls.".to_string()
        }
        InputOutcome::Move(MoveOutcome::Fought { .. }) => "You trade blows.".to_string(),
        InputOutcome::Move(MoveOutcome::Healed { amount, .. }) => {
            format!("The bonfire restores {amount} HP.")
        }
        InputOutcome::Move(MoveOutcome::ChestEmpty { .. }) => "The chest is empty.".to_string(),
        InputOutcome::Move(MoveOutcome::FloorAdvanced { floor, .. }) => {
            format!("Floor {floor}.")
        }
        InputOutcome::Move(MoveOutcome::Moved { ambushed_by, .. }) if !ambushed_by.is_empty() => {
            format!("Ambushed by {}!", ambushed_by.len())
        }
        InputOutcome::Chest(ChestResolution::Accepted { slot }) => {
            format!("Relic stored in slot {}.", slot + 1)
        }
        InputOutcome::Chest(ChestResolution::Rejected(reason)) => rejection_text(*reason),
        InputOutcome::Chest(ChestResolution::Declined) => "You leave the relic.".to_string(),
        InputOutcome::Inspected { slot, relic } => format!(
            "Slot {}: {} ({}) - {}",
            slot + 1,
            relic.name,
            relic.grade.label(),
            relic.description
        ),
        _ => return None,
    };
    Some(text)
}

fn rejection_text(reason: RelicRejection) -> String {
    match reason {
        RelicRejection::InventoryFull => "Your pack is full.".to_string(),
        RelicRejection::NoRelicAvailable => "You already carry that relic.".to_string(),
    }
}

pub fn hud_lines(session: &GameSession) -> Vec<String> {
    let player = session.player();
    let progression = session.progression();
    vec![
        format!("Seed: {}", format_seed(session.seed())),
        format!("Floor: {} / {}", progression.floor, progression.ending_floor),
        format!("Tier: {}", progression.tier.label()),
        format!("HP: {}/{}", player.stats.hp, player.stats.max_hp),
        format!("ATK {}  DEF {}  SPD {}", player.atk(), player.def(), player.spd()),
        format!("Coin: {}", player.coin),
        format!(
            "Relics: {}/{}",
            session.inventory().held_count(),
            session.inventory().capacity()
        ),
        format!("Hash: {}", format_snapshot_hash(session.snapshot_hash())),
    ]
}

pub fn inventory_lines(session: &GameSession) -> Vec<String> {
    session
        .inventory()
        .slots()
        .iter()
        .map(|slot| match &slot.relic {
            Some(relic) => format!("[{}] {} - {}", slot.index + 1, relic.name, relic.description),
            None => format!("[{}] (empty)", slot.index + 1),
        })
        .collect()
}

pub fn event_log_line(event: &LogEvent) -> String {
    match event {
        LogEvent::GameStarted { seed } => format!("Run started (seed {seed})"),
        LogEvent::FloorGenerated { floor, layout, placed, .. } => {
            format!("Floor {floor}: layout {layout}, {placed} objects")
        }
        LogEvent::PlayerMoved { to } => format!("Moved to ({}, {})", to.x, to.y),
        LogEvent::Strike { attacker, damage, defender_hp } => match attacker {
            Combatant::Player => format!("You hit for {damage} ({defender_hp} left)"),
            Combatant::Monster => format!("You take {damage} ({defender_hp} HP)"),
        },
        LogEvent::MonsterSlain { kind, coin, .. } => format!("{kind:?} slain, +{coin} coin"),
        LogEvent::Ambushed { by, .. } => format!("{by:?} ambushes you"),
        LogEvent::BonfireUsed { healed, .. } => format!("Bonfire heals {healed}"),
        LogEvent::ChestOffered { relic, .. } => format!("Chest offers {relic}"),
        LogEvent::ChestEmpty { .. } => "Empty chest".to_string(),
        LogEvent::ChestDeclined { relic } => format!("Left {relic} behind"),
        LogEvent::RelicAdded { relic, slot } => format!("{relic} -> slot {}", slot + 1),
        LogEvent::RelicRejected { relic, reason } => format!("{relic} rejected: {reason}"),
        LogEvent::FloorAdvanced { floor } => format!("Descended to floor {floor}"),
        LogEvent::TierRaised { tier } => format!("Monsters grow stronger ({})", tier.label()),
        LogEvent::GameOver { floor } => format!("Died on floor {floor}"),
        LogEvent::EndingReached { floor } => format!("Reached floor {floor}"),
        LogEvent::Restarted => "Run restarted".to_string(),
    }
}
