use glam::{DVec3, IVec3};
use serde::{Deserialize, Serialize};

/// Identifies one world (dimension) hosted by the server.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorldId(pub u32);

pub const OVERWORLD: WorldId = WorldId(0);

impl std::fmt::Display for WorldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "world#{}", self.0)
    }
}

/// A single cell in a world. Equal iff world and all three axes match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    pub world: WorldId,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(world: WorldId, x: i32, y: i32, z: i32) -> Self {
        Self { world, x, y, z }
    }

    /// Block containing a (possibly fractional) location.
    pub fn containing(world: WorldId, location: DVec3) -> Self {
        let cell = location.floor();
        Self::new(world, cell.x as i32, cell.y as i32, cell.z as i32)
    }

    pub fn offset(&self, delta: IVec3) -> Self {
        Self::new(self.world, self.x + delta.x, self.y + delta.y, self.z + delta.z)
    }

    pub fn up(&self, n: i32) -> Self {
        self.offset(IVec3::Y * n)
    }

    pub fn down(&self, n: i32) -> Self {
        self.offset(IVec3::NEG_Y * n)
    }

    pub fn as_dvec3(&self) -> DVec3 {
        DVec3::new(self.x as f64, self.y as f64, self.z as f64)
    }

    /// Euclidean distance to a location, or `None` when it lies in another world.
    pub fn distance_to(&self, world: WorldId, location: DVec3) -> Option<f64> {
        (self.world == world).then(|| self.as_dvec3().distance(location))
    }
}

impl std::fmt::Display for BlockPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {}, {})", self.world, self.x, self.y, self.z)
    }
}
