//! World storage and the host-side world interface
//! Contains the in-memory voxel store, structures and the access trait used by rig logic.

pub mod access;
pub mod structures;
pub mod terrain;

// Re-export commonly used types
pub use access::WorldAccess;
pub use structures::{OilRig, Structure};
pub use terrain::{ChunkKey, World};
