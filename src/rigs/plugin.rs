use std::path::PathBuf;

use crate::core::{BlockPos, BlockType};
use crate::rigs::admin;
use crate::rigs::commands::{self, AdminCommand, CommandSender, PLAYERS_ONLY, Player};
use crate::rigs::events::{EventResponse, PluginEvent};
use crate::rigs::item::ProducedItem;
use crate::rigs::layout::{self, Anchor};
use crate::rigs::production::{Firing, Production, RigScheduler};
use crate::rigs::registry::TaskId;
use crate::utils::{ConfigError, RigConfig};
use crate::world::WorldAccess;

pub const RIG_CREATED: &str = "§2Oil Rig Created.";
pub const RELOADED: &str = "§aOilRigs configuration reloaded!";
pub const NO_RIGS_NEARBY: &str = "§cNo valid oil rigs found within 30 blocks!";

/// The oil rig feature as the host sees it: lifecycle, event handlers,
/// admin commands and the production callback.
pub struct OilRigPlugin {
    config_path: PathBuf,
    config: RigConfig,
    item: ProducedItem,
    production: Production,
}

impl OilRigPlugin {
    /// Starts with default settings; `enable` reads `config_path`.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            config: RigConfig::default(),
            item: ProducedItem::oil_bucket(),
            production: Production::new(),
        }
    }

    pub fn with_config(mut self, config: RigConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    /// Swaps settings without touching running rigs; they pick the new
    /// values up on their next cycle.
    pub fn set_config(&mut self, config: RigConfig) {
        self.config = config;
    }

    pub fn item(&self) -> &ProducedItem {
        &self.item
    }

    pub fn production(&self) -> &Production {
        &self.production
    }

    pub fn is_active(&self, hopper: &BlockPos) -> bool {
        self.production.is_active(hopper)
    }

    pub fn enable(&mut self) -> Result<(), ConfigError> {
        RigConfig::save_default(&self.config_path)?;
        self.config = RigConfig::load(&self.config_path)?;
        self.item = ProducedItem::oil_bucket();
        tracing::info!(
            "OilRigs enabled! Generation delay: {} seconds",
            self.config.generation_delay
        );
        tracing::info!("Allowed biomes: {}", self.config.allowed_biomes.join(", "));
        Ok(())
    }

    pub fn disable<S: RigScheduler>(&mut self, scheduler: &mut S) {
        let cancelled = self.production.unregister_all(scheduler);
        tracing::info!("OilRigs disabled! Stopped {} rig(s)", cancelled);
    }

    pub fn handle_event<W: WorldAccess, S: RigScheduler>(
        &mut self,
        world: &mut W,
        scheduler: &mut S,
        event: PluginEvent,
    ) -> EventResponse {
        match event {
            PluginEvent::BlockPlaced { player, pos, block } => {
                self.on_block_placed(world, scheduler, &player, pos, block)
            }
            PluginEvent::InventoryMove { source, .. } => self.on_inventory_move(source),
            PluginEvent::BucketEmpty { main_hand, .. } => match main_hand {
                Some(item) if self.item.is_instance(&item) => EventResponse::cancel(),
                _ => EventResponse::allow(),
            },
            PluginEvent::Command {
                sender,
                label,
                args,
            } => self.on_command(world, scheduler, &sender, &label, &args),
        }
    }

    fn on_block_placed<W: WorldAccess, S: RigScheduler>(
        &mut self,
        world: &W,
        scheduler: &mut S,
        player: &Player,
        pos: BlockPos,
        block: BlockType,
    ) -> EventResponse {
        if block != BlockType::DiamondBlock {
            return EventResponse::allow();
        }
        if !layout::validate(world, pos, Anchor::TopMarker, &self.config) {
            return EventResponse::allow();
        }

        let hopper = Anchor::TopMarker.container_of(pos);
        if !self.production.register(scheduler, hopper, &self.config) {
            return EventResponse::allow();
        }
        tracing::info!("New oil rig registered at {} by {}", hopper, player.name);
        EventResponse::reply(RIG_CREATED)
    }

    /// Rig hoppers keep their output; nothing may pull items out of them.
    fn on_inventory_move(&self, source: BlockPos) -> EventResponse {
        if self.production.is_active(&source) {
            EventResponse::cancel()
        } else {
            EventResponse::allow()
        }
    }

    pub fn on_command<W: WorldAccess, S: RigScheduler>(
        &mut self,
        world: &mut W,
        scheduler: &mut S,
        sender: &CommandSender,
        label: &str,
        args: &[String],
    ) -> EventResponse {
        if !commands::is_rig_command(label) {
            return EventResponse::allow();
        }
        match commands::parse(sender, args) {
            Ok(AdminCommand::Reload) => self.reload(world, scheduler, sender),
            Ok(AdminCommand::ForceDeposit) => self.force_deposit(world, sender),
            Err(rejection) => {
                tracing::debug!("Rejected /{} from {}: {:?}", label, sender.name(), rejection);
                EventResponse::reply(rejection.message())
            }
        }
    }

    fn reload<W: WorldAccess, S: RigScheduler>(
        &mut self,
        world: &W,
        scheduler: &mut S,
        sender: &CommandSender,
    ) -> EventResponse {
        self.production.unregister_all(scheduler);

        let mut response = EventResponse::allow();
        match RigConfig::load(&self.config_path) {
            Ok(config) => {
                self.set_config(config);
                self.item = ProducedItem::oil_bucket();
                response.replies.push(RELOADED.to_string());
            }
            Err(e) => {
                tracing::warn!("Keeping previous configuration: {}", e);
                response.replies.push(format!("§cFailed to reload configuration: {}", e));
            }
        }

        // Only a player gives the re-scan a place to look
        if let Some(player) = sender.as_player() {
            let found = admin::rescan(world, &mut self.production, scheduler, player.block_pos(), &self.config);
            tracing::info!("Re-scan around {} restored {} oil rig(s)", player.name, found);
        }

        tracing::info!(
            "Plugin reloaded. New generation delay: {} seconds",
            self.config.generation_delay
        );
        response
    }

    fn force_deposit<W: WorldAccess>(&mut self, world: &mut W, sender: &CommandSender) -> EventResponse {
        let Some(player) = sender.as_player() else {
            return EventResponse::reply(PLAYERS_ONLY);
        };

        let affected = admin::force_deposit(world, &self.production, player.world, player.location, &self.item);
        if affected > 0 {
            EventResponse::reply(format!("§aForced oil deposit in {} oil rig(s)!", affected))
        } else {
            EventResponse::reply(NO_RIGS_NEARBY)
        }
    }

    /// Scheduler callback for one production cycle.
    pub fn on_task<W: WorldAccess, S: RigScheduler>(
        &mut self,
        world: &mut W,
        scheduler: &mut S,
        task: TaskId,
        hopper: BlockPos,
    ) -> Firing {
        self.production
            .fire(world, scheduler, task, hopper, &self.config, &self.item)
    }
}
