//! Headless oil rig server
//!
//! Loads (or creates) a world, enables the oil rig plugin and runs the tick loop.

use clap::Parser;
use glam::DVec3;
use parking_lot::RwLock;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use oilrigs::{
    ADMIN_PERMISSION, GameServer, OVERWORLD, OilRig, OilRigPlugin, Player, SEA_LEVEL, SavedWorld,
    ServerEvent, World, load_world, save_world,
};

/// Headless voxel server hosting the oil rig plugin
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Plugin configuration file (created with defaults if missing)
    #[arg(long, default_value = "plugins/OilRigs/config.toml")]
    config: PathBuf,

    /// World snapshot to load on start and save on shutdown
    #[arg(long)]
    world: Option<PathBuf>,

    /// Stop after this many ticks instead of waiting for Ctrl+C
    #[arg(long)]
    ticks: Option<u64>,

    /// Build a sample rig at spawn
    #[arg(long, default_value_t = false)]
    demo: bool,
}

fn open_world(path: Option<&PathBuf>) -> World {
    match path {
        Some(path) if path.exists() => match load_world(path) {
            Ok(saved) => {
                tracing::info!("Loaded world from {}", path.display());
                saved.into_world()
            }
            Err(e) => {
                tracing::error!("Failed to load world {}: {}", path.display(), e);
                tracing::warn!("Generating a fresh world instead.");
                World::flat_ocean(OVERWORLD, 4)
            }
        },
        _ => {
            tracing::info!("Generating world...");
            World::flat_ocean(OVERWORLD, 4)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let world = Arc::new(RwLock::new(open_world(args.world.as_ref())));

    let mut plugin = OilRigPlugin::new(&args.config);
    if let Err(e) = plugin.enable() {
        tracing::error!("Failed to enable OilRigs: {}", e);
        return ExitCode::FAILURE;
    }

    let mut server = GameServer::new(world.clone(), plugin);

    if args.demo {
        let builder = Player::new("Builder", OVERWORLD, DVec3::new(0.5, SEA_LEVEL as f64 + 1.0, 2.5))
            .with_permission(ADMIN_PERMISSION);
        let origin = oilrigs::BlockPos::new(OVERWORLD, 0, SEA_LEVEL + 1, 0);
        let tx = server.event_sender();
        for (pos, block) in OilRig::new().structure.placements(origin) {
            if let Err(e) = tx.send(ServerEvent::BlockPlaced {
                player: builder.clone(),
                pos,
                block,
            }) {
                tracing::warn!("Failed to queue demo block at {}: {}", pos, e);
            }
        }
        tracing::info!("Queued demo rig at {}", origin);
    }

    tracing::info!("Server running. Press Ctrl+C to stop.");
    let ticks = server.run(args.ticks).await;
    tracing::info!("Stopped after {} ticks", ticks);

    if let Some(path) = &args.world {
        let snapshot = SavedWorld::from_world(&world.read());
        match save_world(path, &snapshot) {
            Ok(()) => tracing::info!("Saved world to {}", path.display()),
            Err(e) => {
                tracing::error!("Failed to save world {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
