use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;

use crate::constants::*;
use crate::core::biome::Biome;
use crate::core::block::BlockType;
use crate::core::chunk::Chunk;
use crate::core::coords::{BlockPos, WorldId};
use crate::core::inventory::Inventory;
use crate::world::terrain::{ChunkKey, World};

const MAGIC_HEADER: &[u8; 4] = b"OILW";
const VERSION: u32 = 1;
// Magic, version, payload length
const HEADER_LEN: u64 = 4 + 4 + 8;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Invalid file format")]
    BadMagic,

    #[error("Unsupported file version: {0}")]
    UnsupportedVersion(u32),

    #[error("Payload of {declared} bytes exceeds the {available} bytes left in the file")]
    Truncated { declared: u64, available: u64 },
}

#[derive(Serialize, Deserialize)]
pub struct SavedBlock {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub block_type: BlockType,
}

#[derive(Serialize, Deserialize)]
pub struct SavedChunk {
    pub world: WorldId,
    pub cx: i32,
    pub cz: i32,
    /// Row-major by x, then z.
    pub biomes: Vec<Biome>,
    /// Non-air blocks only, in chunk-local coordinates.
    pub blocks: Vec<SavedBlock>,
}

#[derive(Serialize, Deserialize)]
pub struct SavedContainer {
    pub pos: BlockPos,
    pub inventory: Inventory,
}

#[derive(Serialize, Deserialize)]
pub struct SavedWorld {
    pub chunks: Vec<SavedChunk>,
    pub containers: Vec<SavedContainer>,
}

impl SavedWorld {
    pub fn from_world(world: &World) -> Self {
        let mut keys: Vec<&ChunkKey> = world.chunks.keys().collect();
        keys.sort();

        let mut saved_chunks = Vec::with_capacity(keys.len());
        for key in keys {
            let chunk = &world.chunks[key];
            let mut blocks = Vec::new();

            for (sy, subchunk) in chunk.subchunks.iter().enumerate() {
                if subchunk.is_empty {
                    continue;
                }
                let base_y = sy as i32 * SUBCHUNK_HEIGHT;

                for lx in 0..CHUNK_SIZE as usize {
                    for ly in 0..SUBCHUNK_HEIGHT as usize {
                        for lz in 0..CHUNK_SIZE as usize {
                            let block = subchunk.blocks[lx][ly][lz];
                            if block == BlockType::Air {
                                continue;
                            }
                            blocks.push(SavedBlock {
                                x: lx as i32,
                                y: base_y + ly as i32,
                                z: lz as i32,
                                block_type: block,
                            });
                        }
                    }
                }
            }

            saved_chunks.push(SavedChunk {
                world: key.world,
                cx: key.cx,
                cz: key.cz,
                biomes: chunk.biomes.iter().flatten().copied().collect(),
                blocks,
            });
        }

        let mut containers: Vec<SavedContainer> = world
            .containers()
            .map(|(pos, inventory)| SavedContainer {
                pos: *pos,
                inventory: inventory.clone(),
            })
            .collect();
        containers.sort_by_key(|c| c.pos);

        SavedWorld {
            chunks: saved_chunks,
            containers,
        }
    }

    pub fn into_world(self) -> World {
        let mut world = World::new();

        for saved in self.chunks {
            let key = ChunkKey {
                world: saved.world,
                cx: saved.cx,
                cz: saved.cz,
            };
            let mut chunk = Chunk::new(Biome::default());
            for (i, biome) in saved.biomes.into_iter().enumerate() {
                let i = i as i32;
                chunk.set_biome(i / CHUNK_SIZE, i % CHUNK_SIZE, biome);
            }
            world.load_chunk(key, chunk);

            for block in saved.blocks {
                let pos = BlockPos::new(
                    saved.world,
                    saved.cx * CHUNK_SIZE + block.x,
                    block.y,
                    saved.cz * CHUNK_SIZE + block.z,
                );
                world.set_block(pos, block.block_type);
            }
        }

        for container in self.containers {
            if !world.restore_container(container.pos, container.inventory) {
                tracing::warn!("Dropping contents of missing container at {}", container.pos);
            }
        }

        world
    }
}

pub fn save_world<P: AsRef<Path>>(path: P, world: &SavedWorld) -> Result<(), SaveError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(MAGIC_HEADER)?;
    writer.write_all(&VERSION.to_le_bytes())?;

    let data = bincode::serialize(world)?;

    let size = data.len() as u64;
    writer.write_all(&size.to_le_bytes())?;

    writer.write_all(&data)?;
    writer.flush()?;

    Ok(())
}

pub fn load_world<P: AsRef<Path>>(path: P) -> Result<SavedWorld, SaveError> {
    let file = File::open(path)?;
    let file_len = file.metadata()?.len();
    let mut reader = BufReader::new(file);
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if &magic != MAGIC_HEADER {
        return Err(SaveError::BadMagic);
    }

    let mut version_bytes = [0u8; 4];
    reader.read_exact(&mut version_bytes)?;
    let version = u32::from_le_bytes(version_bytes);
    if version != VERSION {
        return Err(SaveError::UnsupportedVersion(version));
    }

    let mut size_bytes = [0u8; 8];
    reader.read_exact(&mut size_bytes)?;
    let size = u64::from_le_bytes(size_bytes);
    let available = file_len.saturating_sub(HEADER_LEN);
    if size > available {
        return Err(SaveError::Truncated {
            declared: size,
            available,
        });
    }

    let mut data = vec![0u8; size as usize];
    reader.read_exact(&mut data)?;

    Ok(bincode::deserialize(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::coords::OVERWORLD;
    use crate::rigs::ProducedItem;
    use crate::world::{OilRig, WorldAccess};

    #[test]
    fn test_snapshot_keeps_rig_and_hopper_contents() {
        let mut world = World::flat_ocean(OVERWORLD, 0);
        let hopper = BlockPos::new(OVERWORLD, 2, SEA_LEVEL + 1, 2);
        OilRig::new().structure.place(&mut world, hopper);
        world.set_biome(hopper, Biome::DeepOcean);
        let oil = ProducedItem::oil_bucket();
        world.container_mut(hopper).unwrap().add_item(oil.stack());

        let path = std::env::temp_dir().join(format!("oilrigs-{}-world.oilw", std::process::id()));
        save_world(&path, &SavedWorld::from_world(&world)).unwrap();
        let restored = load_world(&path).unwrap().into_world();
        let _ = std::fs::remove_file(&path);

        assert_eq!(restored.block(hopper.up(3)), Some(BlockType::DiamondBlock));
        assert_eq!(restored.block(hopper.down(1)), Some(BlockType::Water));
        assert_eq!(restored.biome(hopper), Some(Biome::DeepOcean));
        assert_eq!(restored.biome(hopper.offset(glam::IVec3::X)), Some(Biome::Ocean));
        assert_eq!(restored.container(hopper), world.container(hopper));
    }

    #[test]
    fn test_rejects_foreign_file() {
        let path = std::env::temp_dir().join(format!("oilrigs-{}-bad.oilw", std::process::id()));
        std::fs::write(&path, b"NOPE\x01\x00\x00\x00").unwrap();
        let err = load_world(&path).err().unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, SaveError::BadMagic));
    }

    #[test]
    fn test_rejects_oversized_length() {
        let path = std::env::temp_dir().join(format!("oilrigs-{}-short.oilw", std::process::id()));
        let mut bytes = MAGIC_HEADER.to_vec();
        bytes.extend_from_slice(&VERSION.to_le_bytes());
        bytes.extend_from_slice(&u64::MAX.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 8]);
        std::fs::write(&path, &bytes).unwrap();
        let err = load_world(&path).err().unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            err,
            SaveError::Truncated {
                declared: u64::MAX,
                available: 8
            }
        ));
    }
}
