//! Searchlight Arena headless runner
//!
//! Plays one seeded level under autoplay at the target frame rate and prints
//! the final snapshot as JSON.
//!
//! Usage: `searchlight-arena [seed] [tuning.json] [settings.json] [--skin NAME] [--solve BEHAVIOR]`

use searchlight_arena::{Skin, SolveBehavior};

/// Command line options
#[derive(Debug, Default, PartialEq)]
struct RunOptions {
    seed: Option<u64>,
    tuning_path: Option<String>,
    settings_path: Option<String>,
    skin: Option<Skin>,
    solve: Option<SolveBehavior>,
}

impl RunOptions {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, String> {
        let mut opts = Self::default();
        let mut positional = 0;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--skin" => {
                    let name = args.next().ok_or("--skin needs a value")?;
                    opts.skin = Some(
                        Skin::from_str(&name).ok_or_else(|| format!("unknown skin '{name}'"))?,
                    );
                }
                "--solve" => {
                    let name = args.next().ok_or("--solve needs a value")?;
                    opts.solve = Some(
                        SolveBehavior::from_str(&name)
                            .ok_or_else(|| format!("unknown solve behavior '{name}'"))?,
                    );
                }
                _ => {
                    match positional {
                        0 => {
                            opts.seed =
                                Some(arg.parse().map_err(|_| format!("bad seed '{arg}'"))?)
                        }
                        1 => opts.tuning_path = Some(arg),
                        2 => opts.settings_path = Some(arg),
                        _ => return Err(format!("unexpected argument '{arg}'")),
                    }
                    positional += 1;
                }
            }
        }
        Ok(opts)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::process::ExitCode;

    use searchlight_arena::consts::*;
    use searchlight_arena::sim::{GameState, Rect, TickInput, tick};
    use searchlight_arena::{LevelTuning, Settings};

    // Host surface the runner pretends to draw into (portrait phone)
    const SURFACE_WIDTH: f32 = 1170.0;
    const SURFACE_HEIGHT: f32 = 2532.0;

    env_logger::init();

    let opts = match RunOptions::parse(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let seed = opts.seed.unwrap_or(0x5EED);

    let mut tuning = match &opts.tuning_path {
        Some(path) => match std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|json| LevelTuning::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(tuning) => tuning,
            Err(e) => {
                eprintln!("Failed to load tuning from {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => LevelTuning::default(),
    };
    if let Some(solve) = opts.solve {
        tuning.solve_behavior = solve;
    }

    let mut settings = match &opts.settings_path {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(json) => Settings::from_json(&json),
            Err(e) => {
                log::warn!("Cannot read settings {path} ({e}); using defaults");
                Settings::default()
            }
        },
        None => Settings::default(),
    };
    if let Some(skin) = opts.skin {
        settings.skin = skin;
    }

    log::info!(
        "Searchlight Arena (headless) starting, seed {seed}, skin {}, solve {}",
        settings.skin.as_str(),
        tuning.solve_behavior.as_str()
    );
    log::debug!("Tuning: {}", tuning.to_json());
    log::debug!("Settings: {}", settings.to_json());

    let rect = Rect::new(0.0, 0.0, SURFACE_WIDTH, SURFACE_HEIGHT);
    let mut state = GameState::new(seed, rect, tuning, settings);
    let input = TickInput {
        autoplay: true,
        ..Default::default()
    };

    // Generous cap in case a tuning makes the level endless
    let max_frames = (state.tuning.level_seconds as f32 + 5.0) * TARGET_FPS;
    let mut frames = 0u32;
    while !state.outcome.is_terminal() && (frames as f32) < max_frames {
        tick(&mut state, &input, FRAME_DT);
        frames += 1;
    }

    log::info!("Finished after {} frames: {:?}", frames, state.outcome);

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize snapshot: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The arena is embedded by a host page on the web; nothing to run here
    let _ = RunOptions::parse(std::iter::empty());
}
