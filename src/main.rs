#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use clap::Parser;
use groundhop::canvas::DrawList;
use groundhop::components::mapposition::MapPosition;
use groundhop::components::menu::{Menu, MenuAction};
use groundhop::game::GameContext;
use groundhop::resources::gameconfig::GameConfig;
use groundhop::resources::input::InputState;
use groundhop::resources::levelconfig::LevelConfig;
use groundhop::resources::spritestore::SpriteStore;
use groundhop::resources::worldsignals::{HERO, LEVEL_RESETS, WorldSignals};
use groundhop::systems::audio::silent_audio_thread;
use log::{debug, error, info, warn};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "A small 2D platformer: walk, jump, avoid the patrols.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON level file overriding the built-in layout.
    #[arg(long, value_name = "PATH")]
    level: Option<String>,

    /// Run without a window: press Start, simulate ticks and log the result.
    #[arg(long)]
    headless: bool,

    /// Number of ticks to simulate in headless mode.
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Seed for enemy starting directions.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective configuration back to the config file.
    #[arg(long)]
    save_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if cli.save_config {
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
    }

    let level = match cli.level.as_deref() {
        Some(path) => match LevelConfig::load_from_file(path) {
            Ok(level) => {
                info!("Loaded level from {}", path);
                level
            }
            Err(e) => {
                error!("Failed to load level {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => LevelConfig::default(),
    };

    let result = if cli.headless || !cfg!(feature = "raylib") {
        run_headless(config, level, cli.ticks, cli.seed)
    } else {
        run_windowed(config, level, cli.seed)
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "raylib")]
fn run_windowed(config: GameConfig, level: LevelConfig, seed: Option<u64>) -> Result<(), String> {
    groundhop::host::window::run(config, level, seed)
}

#[cfg(not(feature = "raylib"))]
fn run_windowed(_config: GameConfig, _level: LevelConfig, _seed: Option<u64>) -> Result<(), String> {
    Err("built without the `raylib` feature; use --headless".to_string())
}

/// Scripted run: start the game, walk right and hop now and then.
fn run_headless(
    config: GameConfig,
    level: LevelConfig,
    ticks: u32,
    seed: Option<u64>,
) -> Result<(), String> {
    info!("Running headless for {} ticks", ticks);
    let width = config.window_width as f32;
    let mut game = GameContext::new(config, level, SpriteStore::placeholder(), silent_audio_thread)?;
    if let Some(seed) = seed {
        game = game.with_seed(seed);
    }

    let start = Menu::main_menu(width)
        .buttons
        .iter()
        .find(|b| b.action == MenuAction::StartGame)
        .map(|b| b.rect.center())
        .ok_or("main menu has no Start button")?;
    game.on_press(start.0, start.1);

    let mut frame = DrawList::new();
    for tick in 0..ticks {
        game.set_input(InputState::new(false, tick % 120 < 80, tick % 90 == 45));
        game.update();
        frame.clear_cmds();
        game.draw(&mut frame);
        if game.should_quit() {
            break;
        }
    }
    debug!("last frame: {} draw calls", frame.cmds.len());

    let signals = game.world().resource::<WorldSignals>();
    let resets = signals.get_integer(LEVEL_RESETS).unwrap_or(0);
    let hero = signals
        .get_entity(HERO)
        .and_then(|e| game.world().get::<MapPosition>(*e))
        .copied();
    match hero {
        Some(pos) => info!(
            "Finished in {:?}: {} level resets, hero at ({:.1}, {:.1})",
            game.state(),
            resets,
            pos.x,
            pos.y
        ),
        None => info!("Finished in {:?}: {} level resets, no hero", game.state(), resets),
    }
    game.shutdown();
    Ok(())
}
