use rustc_hash::FxHashMap;

use crate::core::BlockPos;

/// Handle of a repeating task owned by the host scheduler.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct TaskId(pub u64);

/// Hopper position -> production task. An entry exists iff the rig is active.
#[derive(Debug, Default)]
pub struct ActiveRigs {
    tasks: FxHashMap<BlockPos, TaskId>,
}

impl ActiveRigs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, pos: &BlockPos) -> bool {
        self.tasks.contains_key(pos)
    }

    pub fn task(&self, pos: &BlockPos) -> Option<TaskId> {
        self.tasks.get(pos).copied()
    }

    /// Refuses to replace an existing entry.
    pub fn insert(&mut self, pos: BlockPos, task: TaskId) -> bool {
        if self.tasks.contains_key(&pos) {
            return false;
        }
        self.tasks.insert(pos, task);
        true
    }

    pub fn remove(&mut self, pos: &BlockPos) -> Option<TaskId> {
        self.tasks.remove(pos)
    }

    pub fn drain(&mut self) -> impl Iterator<Item = (BlockPos, TaskId)> + '_ {
        self.tasks.drain()
    }

    /// Positions in a stable order.
    pub fn positions(&self) -> Vec<BlockPos> {
        let mut positions: Vec<BlockPos> = self.tasks.keys().copied().collect();
        positions.sort();
        positions
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
