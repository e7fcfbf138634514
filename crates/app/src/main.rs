mod frame_input;
mod ui_render;
mod ui_text;
mod window_config;

use std::env;

use app::app_loop::AppState;
use app::journal_file::{default_journal_path, write_journal_atomic};
use app::launch::{LaunchOptions, generate_runtime_seed, parse_launch_args};
use app::settings::{default_settings_path, load_settings};
use app::{format_seed, format_snapshot_hash};
use crawl_core::{GameSession, InputJournal};
use frame_input::capture_frame_input;
use macroquad::prelude::next_frame;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use ui_render::draw_frame;
use window_config::build_window_conf;

#[macroquad::main(build_window_conf)]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().collect();
    let LaunchOptions { seed, config_path } =
        match parse_launch_args(&args, generate_runtime_seed()) {
            Ok(options) => options,
            Err(message) => {
                error!(%message, "invalid arguments");
                return;
            }
        };

    let settings_path = config_path.or_else(default_settings_path);
    let config = match load_settings(settings_path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "cannot load settings");
            return;
        }
    };

    let seed = seed.value();
    let mut session = match GameSession::new(seed, config.clone()) {
        Ok(session) => session,
        Err(err) => {
            error!(%err, "cannot build session");
            return;
        }
    };
    info!(seed = %format_seed(seed), "session ready");

    let journal_path = default_journal_path();
    let mut journal = InputJournal::new(seed, config);
    let mut app_state = AppState::new();

    loop {
        let frame = capture_frame_input();
        if frame.quit_requested {
            break;
        }

        app_state.tick(&mut session, &frame.keys_pressed);
        if !app_state.accepted_inputs.is_empty() {
            for command in app_state.accepted_inputs.drain(..) {
                journal.append(command);
            }
            if let Some(path) = journal_path.as_deref()
                && let Err(err) = write_journal_atomic(&journal, path)
            {
                warn!(%err, path = %path.display(), "failed to persist input journal");
            }
        }

        draw_frame(&session, &app_state);
        next_frame().await
    }

    info!(
        phase = ?session.phase(),
        floor = session.progression().floor,
        hash = %format_snapshot_hash(session.snapshot_hash()),
        "session closed"
    );
}
