use crate::core::BlockPos;
use crate::rigs::item::ProducedItem;
use crate::rigs::layout::{self, Anchor};
use crate::rigs::registry::{ActiveRigs, TaskId};
use crate::utils::RigConfig;
use crate::world::WorldAccess;

/// Repeating-task primitive provided by the host.
pub trait RigScheduler {
    /// Runs the rig's production first after `delay` ticks, then every
    /// `period` ticks, until cancelled.
    fn schedule_repeating(&mut self, rig: BlockPos, delay: u64, period: u64) -> TaskId;

    /// Stops future runs. Unknown or already cancelled tasks are ignored.
    fn cancel(&mut self, task: TaskId);
}

/// What a single production cycle did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Firing {
    Produced,
    ContainerFull,
    /// The structure no longer holds; the rig has been unregistered.
    Destroyed,
    /// The task no longer belongs to an active rig.
    Stale,
}

/// Owns the active rig registry and keeps it in step with the scheduler.
#[derive(Debug, Default)]
pub struct Production {
    rigs: ActiveRigs,
}

impl Production {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rigs(&self) -> &ActiveRigs {
        &self.rigs
    }

    pub fn is_active(&self, pos: &BlockPos) -> bool {
        self.rigs.contains(pos)
    }

    /// Starts production at `pos`. Returns `false` if it was already running.
    pub fn register<S: RigScheduler>(&mut self, scheduler: &mut S, pos: BlockPos, config: &RigConfig) -> bool {
        if self.rigs.contains(&pos) {
            return false;
        }
        let period = config.period_ticks();
        let task = scheduler.schedule_repeating(pos, period, period);
        self.rigs.insert(pos, task)
    }

    pub fn unregister<S: RigScheduler>(&mut self, scheduler: &mut S, pos: &BlockPos) -> bool {
        match self.rigs.remove(pos) {
            Some(task) => {
                scheduler.cancel(task);
                true
            }
            None => false,
        }
    }

    /// Cancels every task and empties the registry. Returns how many were running.
    pub fn unregister_all<S: RigScheduler>(&mut self, scheduler: &mut S) -> usize {
        let mut cancelled = 0;
        for (_, task) in self.rigs.drain() {
            scheduler.cancel(task);
            cancelled += 1;
        }
        cancelled
    }

    /// One production cycle of the rig whose hopper is at `pos`.
    pub fn fire<W: WorldAccess, S: RigScheduler>(
        &mut self,
        world: &mut W,
        scheduler: &mut S,
        task: TaskId,
        pos: BlockPos,
        config: &RigConfig,
        item: &ProducedItem,
    ) -> Firing {
        if self.rigs.task(&pos) != Some(task) {
            scheduler.cancel(task);
            return Firing::Stale;
        }

        if !layout::validate(world, pos, Anchor::Container, config) {
            self.unregister(scheduler, &pos);
            tracing::info!("Oil rig at {} was destroyed or modified.", pos);
            return Firing::Destroyed;
        }

        let Some(inventory) = world.container_mut(pos) else {
            self.unregister(scheduler, &pos);
            tracing::info!("Oil rig at {} lost its hopper.", pos);
            return Firing::Destroyed;
        };

        if !inventory.has_empty_slot() {
            tracing::info!("Hopper is full at {}. Waiting for space...", pos);
            return Firing::ContainerFull;
        }

        inventory.add_item(item.stack());
        tracing::info!("Generated oil bucket at {}", pos);
        Firing::Produced
    }
}
