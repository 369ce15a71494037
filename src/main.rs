use std::path::PathBuf;

use anyhow::Result;
use bevy::prelude::*;
use clap::Parser;

use fruit_merge::{ConfigLoadReport, GameConfig, GamePlugin};

const DEFAULT_LAYERS: [&str; 2] = ["assets/config/game.ron", "assets/config/game.local.ron"];

#[derive(Parser, Debug)]
#[command(name = "fruit_merge", version, about = "Drop fruits, merge pairs, stay under the line")]
struct Args {
    /// Config layer(s) applied in order; replaces the default layers when given.
    #[arg(long = "config", short = 'c')]
    configs: Vec<PathBuf>,
    /// Fixed seed for the next-fruit roll.
    #[arg(long)]
    seed: Option<u64>,
    /// Exit after this many seconds (0 disables).
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let args = Args::parse();
    let (mut cfg, used, errors) = if args.configs.is_empty() {
        GameConfig::load_layered(DEFAULT_LAYERS)
    } else {
        GameConfig::load_layered(&args.configs)
    };
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }
    let report = ConfigLoadReport::new(&cfg, used, errors);

    App::new()
        .insert_resource(cfg.clone())
        .insert_resource(report)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .run();
    Ok(())
}
