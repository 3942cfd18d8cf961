pub mod oil_rig;
pub mod structure;

pub use oil_rig::OilRig;
pub use structure::Structure;
