use crate::core::{BlockPos, BlockType, ItemStack};
use crate::rigs::commands::{CommandSender, Player};

/// Events the host delivers to the plugin.
#[derive(Debug, Clone)]
pub enum PluginEvent {
    /// A player placed `block` at `pos`; the world already contains it.
    BlockPlaced {
        player: Player,
        pos: BlockPos,
        block: BlockType,
    },
    /// An item is about to move out of the container at `source`.
    InventoryMove {
        source: BlockPos,
        destination: BlockPos,
    },
    /// A player is about to empty the bucket held in their main hand.
    BucketEmpty {
        player: Player,
        main_hand: Option<ItemStack>,
    },
    Command {
        sender: CommandSender,
        label: String,
        args: Vec<String>,
    },
}

/// How the plugin answered an event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventResponse {
    /// The host must not carry out the action.
    pub cancelled: bool,
    /// Messages for the player or sender that caused the event.
    pub replies: Vec<String>,
}

impl EventResponse {
    pub fn allow() -> Self {
        Self::default()
    }

    pub fn cancel() -> Self {
        Self {
            cancelled: true,
            replies: Vec::new(),
        }
    }

    pub fn reply(message: impl Into<String>) -> Self {
        Self {
            cancelled: false,
            replies: vec![message.into()],
        }
    }
}
