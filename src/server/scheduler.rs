use rustc_hash::FxHashMap;

use crate::core::BlockPos;
use crate::rigs::{RigScheduler, TaskId};

#[derive(Debug, Clone)]
struct ScheduledTask {
    rig: BlockPos,
    next_run: u64,
    period: u64,
}

/// Tick-driven repeating task scheduler. Time only moves when the server
/// calls [`TickScheduler::advance`].
#[derive(Debug, Default)]
pub struct TickScheduler {
    current_tick: u64,
    next_id: u64,
    tasks: FxHashMap<TaskId, ScheduledTask>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_tick(&self) -> u64 {
        self.current_tick
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Moves to the next tick and returns the tasks due on it, oldest first.
    pub fn advance(&mut self) -> Vec<(TaskId, BlockPos)> {
        self.current_tick += 1;
        let now = self.current_tick;

        let mut due: Vec<(TaskId, BlockPos)> = self
            .tasks
            .iter_mut()
            .filter(|(_, task)| task.next_run <= now)
            .map(|(id, task)| {
                task.next_run = now.saturating_add(task.period);
                (*id, task.rig)
            })
            .collect();
        due.sort_by_key(|(id, _)| *id);
        due
    }
}

impl RigScheduler for TickScheduler {
    fn schedule_repeating(&mut self, rig: BlockPos, delay: u64, period: u64) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.tasks.insert(
            id,
            ScheduledTask {
                rig,
                next_run: self.current_tick.saturating_add(delay),
                period: period.max(1),
            },
        );
        id
    }

    fn cancel(&mut self, task: TaskId) {
        self.tasks.remove(&task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OVERWORLD;

    fn rig() -> BlockPos {
        BlockPos::new(OVERWORLD, 0, 65, 0)
    }

    #[test]
    fn test_delay_then_period() {
        let mut sched = TickScheduler::new();
        sched.schedule_repeating(rig(), 3, 2);
        let fired: Vec<u64> = (0..9)
            .filter_map(|_| {
                let due = sched.advance();
                (!due.is_empty()).then(|| sched.current_tick())
            })
            .collect();
        assert_eq!(fired, vec![3, 5, 7, 9]);
        assert_eq!(sched.pending(), 1);
    }

    #[test]
    fn test_huge_delay_never_comes_due() {
        let mut sched = TickScheduler::new();
        sched.advance();
        sched.schedule_repeating(rig(), u64::MAX, u64::MAX);
        for _ in 0..100 {
            assert!(sched.advance().is_empty());
        }
        assert_eq!(sched.pending(), 1);
    }

    #[test]
    fn test_cancel_stops_runs() {
        let mut sched = TickScheduler::new();
        let task = sched.schedule_repeating(rig(), 1, 1);
        assert_eq!(sched.advance(), vec![(task, rig())]);
        sched.cancel(task);
        sched.cancel(task);
        assert!(sched.advance().is_empty());
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_due_tasks_in_creation_order() {
        let mut sched = TickScheduler::new();
        let ids: Vec<TaskId> = (0..5)
            .map(|i| sched.schedule_repeating(rig().up(i), 1, 10))
            .collect();
        let due: Vec<TaskId> = sched.advance().into_iter().map(|(id, _)| id).collect();
        assert_eq!(due, ids);
    }
}
