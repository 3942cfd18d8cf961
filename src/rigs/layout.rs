//! Oil rig structure check.
//!
//! A rig is a vertical stack read from the bottom up:
//!
//! ```text
//!  +3  diamond block   (marker, placed last)
//!  +2  diamond block   (marker)
//!  +1  coal block      (fuel)
//!   0  hopper          (container; biome checked here)
//!  -1  water           (liquid)
//! ```
//!
//! Both call shapes, from the top marker on placement and from the hopper on
//! every production cycle, resolve to the hopper first and then walk the same
//! table, so they cannot disagree.

use crate::core::{BlockPos, BlockType};
use crate::utils::RigConfig;
use crate::world::WorldAccess;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellRole {
    Liquid,
    Container,
    Fuel,
    Marker,
}

impl CellRole {
    pub fn block(&self) -> BlockType {
        match self {
            CellRole::Liquid => BlockType::Water,
            CellRole::Container => BlockType::Hopper,
            CellRole::Fuel => BlockType::CoalBlock,
            CellRole::Marker => BlockType::DiamondBlock,
        }
    }

    fn matches<W: WorldAccess>(&self, world: &W, pos: BlockPos) -> bool {
        if world.block(pos) != Some(self.block()) {
            return false;
        }
        // A hopper block without its inventory is not a working container
        *self != CellRole::Container || world.container(pos).is_some()
    }
}

/// Vertical offset from the hopper and the role expected there.
pub const RIG_CELLS: [(i32, CellRole); 5] = [
    (-1, CellRole::Liquid),
    (0, CellRole::Container),
    (1, CellRole::Fuel),
    (2, CellRole::Marker),
    (3, CellRole::Marker),
];

/// Where a validation starts from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Anchor {
    /// The topmost marker, as just placed by a player.
    TopMarker,
    /// The hopper, as stored in the registry.
    Container,
}

impl Anchor {
    /// Height of the anchor above the hopper.
    pub fn height(&self) -> i32 {
        match self {
            Anchor::TopMarker => 3,
            Anchor::Container => 0,
        }
    }

    pub fn container_of(&self, anchor: BlockPos) -> BlockPos {
        anchor.down(self.height())
    }
}

/// Checks the rig rooted at `anchor`. Never mutates the world; any cell that
/// is not loaded makes the rig invalid.
pub fn validate<W: WorldAccess>(world: &W, anchor: BlockPos, from: Anchor, config: &RigConfig) -> bool {
    let container = from.container_of(anchor);

    let cells_ok = RIG_CELLS
        .iter()
        .all(|&(dy, role)| role.matches(world, container.up(dy)));
    if !cells_ok {
        return false;
    }

    world
        .biome(container)
        .is_some_and(|biome| config.is_biome_allowed(biome))
}
