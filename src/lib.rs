// Core module with fundamental types
pub mod core;

// World storage and the host-facing world interface
pub mod world;

// Oil rig feature: validation, production, admin actions
pub mod rigs;

// Headless host: tick scheduler and server loop
pub mod server;

// Other modules
pub mod constants;
pub mod save;
pub mod utils;

// Re-exports
pub use constants::*;
pub use crate::core::{Biome, BlockPos, BlockType, Inventory, ItemKind, ItemStack, OVERWORLD, WorldId};
pub use rigs::{CommandSender, EventResponse, Firing, OilRigPlugin, Player, PluginEvent};
pub use save::{SaveError, SavedWorld, load_world, save_world};
pub use server::{GameServer, ServerEvent, TickScheduler};
pub use utils::{ConfigError, RigConfig};
pub use world::{OilRig, World, WorldAccess};
