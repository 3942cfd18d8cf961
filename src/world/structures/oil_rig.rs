use super::Structure;
use crate::core::block::BlockType;

/// Hopper on water, a coal block on top, capped by two diamond blocks.
/// The origin is the hopper.
#[derive(Debug, Clone)]
pub struct OilRig {
    pub structure: Structure,
}

impl OilRig {
    pub fn new() -> Self {
        let structure = Structure::new("Oil Rig")
            .with_block(0, 0, 0, BlockType::Hopper)
            .with_block(0, 1, 0, BlockType::CoalBlock)
            .with_block(0, 2, 0, BlockType::DiamondBlock)
            .with_block(0, 3, 0, BlockType::DiamondBlock);

        Self { structure }
    }
}

impl Default for OilRig {
    fn default() -> Self {
        Self::new()
    }
}
