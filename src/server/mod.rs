//! Headless host: owns the world, the tick scheduler and the plugin, and
//! feeds them events on a single control loop.

pub mod scheduler;

use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::constants::*;
use crate::core::{BlockPos, BlockType, ItemKind, ItemStack};
use crate::rigs::{CommandSender, EventResponse, Firing, OilRigPlugin, Player, PluginEvent};
use crate::world::{World, WorldAccess};

pub use scheduler::TickScheduler;

/// Events delivered to the server by players and the console
#[derive(Debug, Clone)]
pub enum ServerEvent {
    BlockPlaced {
        player: Player,
        pos: BlockPos,
        block: BlockType,
    },
    BlockBroken {
        player: Player,
        pos: BlockPos,
    },
    /// One item moving between two containers, e.g. a hopper pulling from above.
    ItemTransfer {
        source: BlockPos,
        destination: BlockPos,
    },
    BucketEmpty {
        player: Player,
        pos: BlockPos,
        bucket: ItemStack,
    },
    Command {
        sender: CommandSender,
        line: String,
    },
}

pub struct GameServer {
    world: Arc<RwLock<World>>,
    plugin: OilRigPlugin,
    scheduler: TickScheduler,
    event_tx: mpsc::UnboundedSender<ServerEvent>,
    event_rx: Option<mpsc::UnboundedReceiver<ServerEvent>>,
}

impl GameServer {
    /// `plugin` is expected to be enabled already.
    pub fn new(world: Arc<RwLock<World>>, plugin: OilRigPlugin) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Self {
            world,
            plugin,
            scheduler: TickScheduler::new(),
            event_tx,
            event_rx: Some(event_rx),
        }
    }

    pub fn event_sender(&self) -> mpsc::UnboundedSender<ServerEvent> {
        self.event_tx.clone()
    }

    pub fn world(&self) -> Arc<RwLock<World>> {
        self.world.clone()
    }

    pub fn plugin(&self) -> &OilRigPlugin {
        &self.plugin
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    /// Applies one event to the world, consulting the plugin first where it
    /// may veto the action.
    pub fn handle_event(&mut self, event: ServerEvent) -> EventResponse {
        let mut world = self.world.write();

        let response = match event {
            ServerEvent::BlockPlaced { player, pos, block } => {
                if !world.set_block(pos, block) {
                    tracing::debug!("{} tried to place {} in unloaded terrain", player.name, block.name());
                    return EventResponse::cancel();
                }
                let event = PluginEvent::BlockPlaced { player, pos, block };
                self.plugin.handle_event(&mut *world, &mut self.scheduler, event)
            }

            ServerEvent::BlockBroken { player, pos } => {
                tracing::debug!("{} broke block at {}", player.name, pos);
                world.set_block(pos, BlockType::Air);
                EventResponse::allow()
            }

            ServerEvent::ItemTransfer {
                source,
                destination,
            } => {
                let event = PluginEvent::InventoryMove {
                    source,
                    destination,
                };
                let response = self.plugin.handle_event(&mut *world, &mut self.scheduler, event);
                if !response.cancelled {
                    transfer_one(&mut world, source, destination);
                }
                response
            }

            ServerEvent::BucketEmpty { player, pos, bucket } => {
                let event = PluginEvent::BucketEmpty {
                    player,
                    main_hand: Some(bucket.clone()),
                };
                let response = self.plugin.handle_event(&mut *world, &mut self.scheduler, event);
                if !response.cancelled {
                    let liquid = match bucket.kind {
                        ItemKind::WaterBucket => Some(BlockType::Water),
                        ItemKind::LavaBucket => Some(BlockType::Lava),
                        _ => None,
                    };
                    if let Some(liquid) = liquid {
                        world.set_block(pos, liquid);
                    }
                }
                response
            }

            ServerEvent::Command { sender, line } => {
                let mut words = line.trim().trim_start_matches('/').split_whitespace();
                let label = words.next().unwrap_or_default().to_string();
                let args = words.map(str::to_string).collect();
                let event = PluginEvent::Command {
                    sender,
                    label,
                    args,
                };
                self.plugin.handle_event(&mut *world, &mut self.scheduler, event)
            }
        };

        for reply in &response.replies {
            tracing::info!(target: "chat", "{}", reply);
        }
        response
    }

    /// Advances the scheduler by one tick and runs every due production cycle.
    pub fn tick(&mut self) -> Vec<(BlockPos, Firing)> {
        let due = self.scheduler.advance();
        if due.is_empty() {
            return Vec::new();
        }

        let mut world = self.world.write();
        due.into_iter()
            .map(|(task, pos)| {
                let firing = self.plugin.on_task(&mut *world, &mut self.scheduler, task, pos);
                (pos, firing)
            })
            .collect()
    }

    /// Runs the control loop at `TICKS_PER_SECOND` until `max_ticks` have
    /// passed or Ctrl+C is received, then disables the plugin. Returns the
    /// number of ticks run.
    pub async fn run(&mut self, max_ticks: Option<u64>) -> u64 {
        let Some(mut event_rx) = self.event_rx.take() else {
            tracing::warn!("Server loop is already running");
            return 0;
        };

        let mut interval = tokio::time::interval(Duration::from_millis(TICK_MILLIS));
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);
        let mut ticks = 0;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.tick();
                    ticks += 1;
                    if max_ticks.is_some_and(|max| ticks >= max) {
                        break;
                    }
                }
                Some(event) = event_rx.recv() => {
                    self.handle_event(event);
                }
                _ = &mut shutdown => {
                    tracing::info!("Shutting down...");
                    break;
                }
            }
        }

        self.plugin.disable(&mut self.scheduler);
        self.event_rx = Some(event_rx);
        ticks
    }
}

/// Moves a single item unless the destination has no room for it.
fn transfer_one(world: &mut World, source: BlockPos, destination: BlockPos) -> bool {
    if world.container(destination).is_none() {
        return false;
    }
    let Some(item) = world.container_mut(source).and_then(|inv| inv.take_one()) else {
        return false;
    };
    let leftover = world
        .container_mut(destination)
        .and_then(|inv| inv.add_item(item));
    match leftover {
        Some(item) => {
            if let Some(inv) = world.container_mut(source) {
                inv.add_item(item);
            }
            false
        }
        None => true,
    }
}
