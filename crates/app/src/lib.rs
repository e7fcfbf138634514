use crawl_core::GamePhase;

pub mod app_loop;
pub mod journal_file;
pub mod launch;
pub mod settings;

pub const APP_NAME: &str = "TileCrawl";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Reason code for a finished run, or `None` while the run is still open.
pub fn outcome_code(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::GameOver => Some("DMG_HP_ZERO"),
        GamePhase::Ending => Some("WIN_FINAL_FLOOR"),
        GamePhase::MainMenu | GamePhase::Playing => None,
    }
}
