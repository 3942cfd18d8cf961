// World constants
pub const WORLD_HEIGHT: i32 = 256;
pub const CHUNK_SIZE: i32 = 16;
pub const SUBCHUNK_HEIGHT: i32 = 16;
pub const NUM_SUBCHUNKS: i32 = WORLD_HEIGHT / SUBCHUNK_HEIGHT;
pub const SEA_LEVEL: i32 = 64;

// Scheduler constants
pub const TICKS_PER_SECOND: u64 = 20;
pub const TICK_MILLIS: u64 = 1000 / TICKS_PER_SECOND;

// Container sizes
pub const HOPPER_SLOTS: usize = 5;
pub const CHEST_SLOTS: usize = 27;

// Oil rig constants
pub const DEFAULT_GENERATION_DELAY: u64 = 60;
pub const RESCAN_RADIUS: i32 = 30;
pub const FORCE_DEPOSIT_RADIUS: f64 = 30.0;
pub const OIL_BUCKET_NAME: &str = "§6Bucket of Oil";

// Admin command
pub const COMMAND_NAME: &str = "oilrigs";
pub const ADMIN_PERMISSION: &str = "oilrigs.admin";
