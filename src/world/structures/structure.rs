use crate::core::block::BlockType;
use crate::core::coords::BlockPos;
use crate::world::terrain::World;

#[derive(Debug, Clone)]
pub struct Structure {
    pub name: String,
    pub blocks: Vec<(i32, i32, i32, BlockType)>,
}

impl Structure {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn with_block(mut self, x: i32, y: i32, z: i32, block: BlockType) -> Self {
        self.blocks.push((x, y, z, block));
        self
    }

    /// World positions and block types in placement order.
    pub fn placements(&self, origin: BlockPos) -> impl Iterator<Item = (BlockPos, BlockType)> + '_ {
        self.blocks
            .iter()
            .map(move |&(x, y, z, block)| (origin.offset(glam::IVec3::new(x, y, z)), block))
    }

    /// Writes every block directly, without going through placement events.
    pub fn place(&self, world: &mut World, origin: BlockPos) -> bool {
        self.placements(origin)
            .fold(true, |ok, (pos, block)| world.set_block(pos, block) && ok)
    }
}
