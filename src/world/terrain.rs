use rustc_hash::FxHashMap;

use crate::constants::*;
use crate::core::biome::Biome;
use crate::core::block::BlockType;
use crate::core::chunk::Chunk;
use crate::core::coords::{BlockPos, WorldId};
use crate::core::inventory::Inventory;
use crate::world::access::WorldAccess;

/// Key of a loaded chunk column.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ChunkKey {
    pub world: WorldId,
    pub cx: i32,
    pub cz: i32,
}

impl ChunkKey {
    pub fn of(pos: BlockPos) -> Self {
        Self {
            world: pos.world,
            cx: pos.x.div_euclid(CHUNK_SIZE),
            cz: pos.z.div_euclid(CHUNK_SIZE),
        }
    }
}

/// In-memory voxel store for every hosted world.
///
/// Container blocks own an [`Inventory`] that lives as long as the block does.
pub struct World {
    pub chunks: FxHashMap<ChunkKey, Chunk>,
    containers: FxHashMap<BlockPos, Inventory>,
}

impl World {
    pub fn new() -> Self {
        Self {
            chunks: FxHashMap::default(),
            containers: FxHashMap::default(),
        }
    }

    /// Flat ocean: sand floor, water up to `SEA_LEVEL`, over a square of
    /// chunks centred on the origin.
    pub fn flat_ocean(world: WorldId, radius_chunks: i32) -> Self {
        let mut w = Self::new();
        for cx in -radius_chunks..=radius_chunks {
            for cz in -radius_chunks..=radius_chunks {
                let mut chunk = Chunk::new(Biome::Ocean);
                for lx in 0..CHUNK_SIZE {
                    for lz in 0..CHUNK_SIZE {
                        chunk.set_block(lx, 0, lz, BlockType::Stone);
                        for y in 1..SEA_LEVEL - 8 {
                            chunk.set_block(lx, y, lz, BlockType::Sand);
                        }
                        for y in SEA_LEVEL - 8..=SEA_LEVEL {
                            chunk.set_block(lx, y, lz, BlockType::Water);
                        }
                    }
                }
                w.chunks.insert(ChunkKey { world, cx, cz }, chunk);
            }
        }
        w
    }

    pub fn load_chunk(&mut self, key: ChunkKey, chunk: Chunk) {
        self.chunks.insert(key, chunk);
    }

    /// Unloading drops the chunk's containers together with their contents.
    pub fn unload_chunk(&mut self, key: ChunkKey) -> Option<Chunk> {
        self.containers.retain(|pos, _| ChunkKey::of(*pos) != key);
        self.chunks.remove(&key)
    }

    pub fn is_loaded(&self, pos: BlockPos) -> bool {
        pos.y >= 0 && pos.y < WORLD_HEIGHT && self.chunks.contains_key(&ChunkKey::of(pos))
    }

    pub fn get_block(&self, pos: BlockPos) -> Option<BlockType> {
        if pos.y < 0 || pos.y >= WORLD_HEIGHT {
            return None;
        }
        let chunk = self.chunks.get(&ChunkKey::of(pos))?;
        Some(chunk.get_block(
            pos.x.rem_euclid(CHUNK_SIZE),
            pos.y,
            pos.z.rem_euclid(CHUNK_SIZE),
        ))
    }

    /// Places a block, creating or dropping the container inventory as the
    /// block type requires. Returns `false` when the position is not loaded.
    pub fn set_block(&mut self, pos: BlockPos, block: BlockType) -> bool {
        if pos.y < 0 || pos.y >= WORLD_HEIGHT {
            return false;
        }
        let Some(chunk) = self.chunks.get_mut(&ChunkKey::of(pos)) else {
            return false;
        };
        let previous = chunk.get_block(pos.x.rem_euclid(CHUNK_SIZE), pos.y, pos.z.rem_euclid(CHUNK_SIZE));
        chunk.set_block(
            pos.x.rem_euclid(CHUNK_SIZE),
            pos.y,
            pos.z.rem_euclid(CHUNK_SIZE),
            block,
        );

        if previous != block {
            self.containers.remove(&pos);
            if let Some(slots) = block.container_slots() {
                self.containers.insert(pos, Inventory::new(slots));
            }
        }
        true
    }

    pub fn get_biome(&self, pos: BlockPos) -> Option<Biome> {
        let chunk = self.chunks.get(&ChunkKey::of(pos))?;
        Some(chunk.get_biome(pos.x, pos.z))
    }

    pub fn set_biome(&mut self, pos: BlockPos, biome: Biome) -> bool {
        match self.chunks.get_mut(&ChunkKey::of(pos)) {
            Some(chunk) => {
                chunk.set_biome(pos.x, pos.z, biome);
                true
            }
            None => false,
        }
    }

    pub fn containers(&self) -> impl Iterator<Item = (&BlockPos, &Inventory)> {
        self.containers.iter()
    }

    /// Replaces the contents of an existing container.
    pub fn restore_container(&mut self, pos: BlockPos, inventory: Inventory) -> bool {
        match self.containers.get_mut(&pos) {
            Some(existing) => {
                *existing = inventory;
                true
            }
            None => false,
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldAccess for World {
    fn block(&self, pos: BlockPos) -> Option<BlockType> {
        self.get_block(pos)
    }

    fn biome(&self, pos: BlockPos) -> Option<Biome> {
        self.is_loaded(pos).then(|| self.get_biome(pos)).flatten()
    }

    fn container(&self, pos: BlockPos) -> Option<&Inventory> {
        self.containers.get(&pos)
    }

    fn container_mut(&mut self, pos: BlockPos) -> Option<&mut Inventory> {
        self.containers.get_mut(&pos)
    }
}
