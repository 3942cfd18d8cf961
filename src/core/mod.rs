//! Core data structures for the server
//! Contains fundamental types like blocks, biomes, chunks, positions and inventories.

pub mod biome;
pub mod block;
pub mod chunk;
pub mod coords;
pub mod inventory;

// Re-export commonly used types
pub use biome::Biome;
pub use block::BlockType;
pub use chunk::{Chunk, SubChunk};
pub use coords::{BlockPos, OVERWORLD, WorldId};
pub use inventory::{Inventory, ItemKind, ItemMeta, ItemStack};
