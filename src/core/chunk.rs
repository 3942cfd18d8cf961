use crate::constants::*;
use crate::core::biome::Biome;
use crate::core::block::BlockType;

pub struct SubChunk {
    pub blocks: [[[BlockType; CHUNK_SIZE as usize]; SUBCHUNK_HEIGHT as usize]; CHUNK_SIZE as usize],
    pub is_empty: bool,
}

impl SubChunk {
    pub fn new() -> Self {
        SubChunk {
            blocks: [[[BlockType::Air; CHUNK_SIZE as usize]; SUBCHUNK_HEIGHT as usize];
                CHUNK_SIZE as usize],
            is_empty: true,
        }
    }

    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockType {
        if x >= 0 && x < CHUNK_SIZE && y >= 0 && y < SUBCHUNK_HEIGHT && z >= 0 && z < CHUNK_SIZE {
            self.blocks[x as usize][y as usize][z as usize]
        } else {
            BlockType::Air
        }
    }

    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: BlockType) {
        if x >= 0 && x < CHUNK_SIZE && y >= 0 && y < SUBCHUNK_HEIGHT && z >= 0 && z < CHUNK_SIZE {
            self.blocks[x as usize][y as usize][z as usize] = block;
            self.is_empty = block == BlockType::Air && self.is_empty;
        }
    }
}

impl Default for SubChunk {
    fn default() -> Self {
        Self::new()
    }
}

/// A 16x256x16 column of blocks with one biome per (x, z).
pub struct Chunk {
    pub subchunks: Vec<SubChunk>,
    pub biomes: [[Biome; CHUNK_SIZE as usize]; CHUNK_SIZE as usize],
}

impl Chunk {
    pub fn new(biome: Biome) -> Self {
        let mut subchunks = Vec::with_capacity(NUM_SUBCHUNKS as usize);
        for _ in 0..NUM_SUBCHUNKS {
            subchunks.push(SubChunk::new());
        }
        Chunk {
            subchunks,
            biomes: [[biome; CHUNK_SIZE as usize]; CHUNK_SIZE as usize],
        }
    }

    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockType {
        if y < 0 || y >= WORLD_HEIGHT {
            return BlockType::Air;
        }
        let subchunk_idx = (y / SUBCHUNK_HEIGHT) as usize;
        let local_y = y % SUBCHUNK_HEIGHT;
        self.subchunks[subchunk_idx].get_block(x, local_y, z)
    }

    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: BlockType) {
        if y < 0 || y >= WORLD_HEIGHT {
            return;
        }
        let subchunk_idx = (y / SUBCHUNK_HEIGHT) as usize;
        let local_y = y % SUBCHUNK_HEIGHT;
        self.subchunks[subchunk_idx].set_block(x, local_y, z, block);
    }

    pub fn get_biome(&self, x: i32, z: i32) -> Biome {
        self.biomes[x.rem_euclid(CHUNK_SIZE) as usize][z.rem_euclid(CHUNK_SIZE) as usize]
    }

    pub fn set_biome(&mut self, x: i32, z: i32, biome: Biome) {
        self.biomes[x.rem_euclid(CHUNK_SIZE) as usize][z.rem_euclid(CHUNK_SIZE) as usize] = biome;
    }
}
