use serde::{Deserialize, Serialize};

use crate::constants::*;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum BlockType {
    #[default]
    Air,
    Stone,
    Sand,
    Water,
    Lava,
    CoalBlock,
    DiamondBlock,
    Hopper,
    Chest,
}

impl BlockType {
    /// Number of inventory slots a block of this type carries, if any.
    pub fn container_slots(&self) -> Option<usize> {
        match self {
            BlockType::Hopper => Some(HOPPER_SLOTS),
            BlockType::Chest => Some(CHEST_SLOTS),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BlockType::Air => "AIR",
            BlockType::Stone => "STONE",
            BlockType::Sand => "SAND",
            BlockType::Water => "WATER",
            BlockType::Lava => "LAVA",
            BlockType::CoalBlock => "COAL_BLOCK",
            BlockType::DiamondBlock => "DIAMOND_BLOCK",
            BlockType::Hopper => "HOPPER",
            BlockType::Chest => "CHEST",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_blocks() {
        assert_eq!(BlockType::Hopper.container_slots(), Some(HOPPER_SLOTS));
        assert_eq!(BlockType::Chest.container_slots(), Some(CHEST_SLOTS));
        assert_eq!(BlockType::CoalBlock.container_slots(), None);
        assert_eq!(BlockType::Water.container_slots(), None);
    }
}
