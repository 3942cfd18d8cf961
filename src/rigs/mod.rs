//! Oil rig feature: structure check, production, admin actions and the
//! plugin facade the host talks to.

pub mod admin;
pub mod commands;
pub mod events;
pub mod item;
pub mod layout;
pub mod plugin;
pub mod production;
pub mod registry;

pub use commands::{AdminCommand, CommandSender, Player};
pub use events::{EventResponse, PluginEvent};
pub use item::ProducedItem;
pub use layout::{Anchor, validate};
pub use plugin::OilRigPlugin;
pub use production::{Firing, Production, RigScheduler};
pub use registry::{ActiveRigs, TaskId};
