use crate::core::{Biome, BlockPos, BlockType, Inventory};

/// World reads and container access the rig logic needs from its host.
///
/// Every read returns `None` when the position is outside loaded terrain, so
/// callers can treat missing data the same way as a mismatch.
pub trait WorldAccess {
    fn block(&self, pos: BlockPos) -> Option<BlockType>;

    fn biome(&self, pos: BlockPos) -> Option<Biome>;

    /// Inventory of the container block at `pos`, if there is one.
    fn container(&self, pos: BlockPos) -> Option<&Inventory>;

    fn container_mut(&mut self, pos: BlockPos) -> Option<&mut Inventory>;
}
