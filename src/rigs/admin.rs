use glam::{DVec3, IVec3};

use crate::constants::*;
use crate::core::{BlockPos, BlockType, WorldId};
use crate::rigs::item::ProducedItem;
use crate::rigs::layout::{self, Anchor};
use crate::rigs::production::{Production, RigScheduler};
use crate::utils::RigConfig;
use crate::world::WorldAccess;

/// Registers every intact rig whose hopper lies in the cube of
/// `RESCAN_RADIUS` around `center`. Returns the number newly registered.
pub fn rescan<W: WorldAccess, S: RigScheduler>(
    world: &W,
    production: &mut Production,
    scheduler: &mut S,
    center: BlockPos,
    config: &RigConfig,
) -> usize {
    let mut found = 0;
    for x in -RESCAN_RADIUS..=RESCAN_RADIUS {
        for y in -RESCAN_RADIUS..=RESCAN_RADIUS {
            for z in -RESCAN_RADIUS..=RESCAN_RADIUS {
                let pos = center.offset(IVec3::new(x, y, z));
                if world.block(pos) != Some(BlockType::Hopper) || world.container(pos).is_none() {
                    continue;
                }
                let top = pos.up(Anchor::TopMarker.height());
                if layout::validate(world, top, Anchor::TopMarker, config)
                    && production.register(scheduler, pos, config)
                {
                    tracing::debug!("Re-registered oil rig at {}", pos);
                    found += 1;
                }
            }
        }
    }
    found
}

/// Drops one produced item into every active rig within
/// `FORCE_DEPOSIT_RADIUS` of `location` that has room. The structure is not
/// re-checked. Returns how many rigs received an item.
pub fn force_deposit<W: WorldAccess>(
    world: &mut W,
    production: &Production,
    world_id: WorldId,
    location: DVec3,
    item: &ProducedItem,
) -> usize {
    let mut affected = 0;
    for pos in production.rigs().positions() {
        let in_range = pos
            .distance_to(world_id, location)
            .is_some_and(|d| d <= FORCE_DEPOSIT_RADIUS);
        if !in_range {
            continue;
        }
        if let Some(inventory) = world.container_mut(pos) {
            if inventory.has_empty_slot() {
                inventory.add_item(item.stack());
                affected += 1;
            }
        }
    }
    affected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{OVERWORLD, WorldId};
    use crate::rigs::production::tests::RecordingScheduler;
    use crate::world::{OilRig, World};

    fn hopper_at(x: i32, z: i32) -> BlockPos {
        BlockPos::new(OVERWORLD, x, SEA_LEVEL + 1, z)
    }

    fn world_with_rigs(hoppers: &[BlockPos]) -> World {
        let mut world = World::flat_ocean(OVERWORLD, 3);
        for pos in hoppers {
            OilRig::new().structure.place(&mut world, *pos);
        }
        world
    }

    #[test]
    fn test_rescan_finds_rigs_in_cube() {
        let near = hopper_at(10, -10);
        let edge = hopper_at(30, 0);
        let far = hopper_at(31, 0);
        let world = world_with_rigs(&[near, edge, far]);
        let mut sched = RecordingScheduler::default();
        let mut prod = Production::new();
        let center = BlockPos::new(OVERWORLD, 0, SEA_LEVEL + 1, 0);

        let found = rescan(&world, &mut prod, &mut sched, center, &RigConfig::default());
        assert_eq!(found, 2);
        assert!(prod.is_active(&near));
        assert!(prod.is_active(&edge));
        assert!(!prod.is_active(&far));

        // Already active rigs are not registered twice
        assert_eq!(rescan(&world, &mut prod, &mut sched, center, &RigConfig::default()), 0);
        assert_eq!(sched.live.len(), 2);
    }

    #[test]
    fn test_rescan_skips_broken_rigs() {
        let pos = hopper_at(3, 3);
        let mut world = world_with_rigs(&[pos]);
        world.set_block(pos.up(1), BlockType::Stone);
        let mut sched = RecordingScheduler::default();
        let mut prod = Production::new();

        let found = rescan(&world, &mut prod, &mut sched, pos, &RigConfig::default());
        assert_eq!(found, 0);
        assert!(prod.rigs().is_empty());
    }

    #[test]
    fn test_force_deposit_counts_rigs_in_range() {
        let near = hopper_at(5, 5);
        let far = hopper_at(40, 0);
        let mut world = world_with_rigs(&[near, far]);
        let mut sched = RecordingScheduler::default();
        let mut prod = Production::new();
        let config = RigConfig::default();
        prod.register(&mut sched, near, &config);
        prod.register(&mut sched, far, &config);
        let item = ProducedItem::oil_bucket();

        let player = DVec3::new(0.5, SEA_LEVEL as f64 + 2.0, 0.5);
        assert_eq!(force_deposit(&mut world, &prod, OVERWORLD, player, &item), 1);
        assert_eq!(world.container(near).map(|i| i.count_similar(&item.stack())), Some(1));
        assert!(world.container(far).is_some_and(|i| i.is_empty()));
    }

    #[test]
    fn test_force_deposit_other_world_untouched() {
        let pos = hopper_at(1, 1);
        let mut world = world_with_rigs(&[pos]);
        let mut sched = RecordingScheduler::default();
        let mut prod = Production::new();
        prod.register(&mut sched, pos, &RigConfig::default());
        let item = ProducedItem::oil_bucket();

        let affected = force_deposit(&mut world, &prod, WorldId(7), pos.as_dvec3(), &item);
        assert_eq!(affected, 0);
        assert!(world.container(pos).is_some_and(|i| i.is_empty()));
    }

    #[test]
    fn test_force_deposit_skips_full_and_trusts_registry() {
        let pos = hopper_at(1, 1);
        let mut world = world_with_rigs(&[pos]);
        let mut sched = RecordingScheduler::default();
        let mut prod = Production::new();
        prod.register(&mut sched, pos, &RigConfig::default());
        let item = ProducedItem::oil_bucket();

        // Structure broken but still registered: deposit still happens
        world.set_block(pos.up(2), BlockType::Air);
        assert_eq!(force_deposit(&mut world, &prod, OVERWORLD, pos.as_dvec3(), &item), 1);

        for _ in 0..4 {
            force_deposit(&mut world, &prod, OVERWORLD, pos.as_dvec3(), &item);
        }
        let before = world.container(pos).cloned();
        assert_eq!(force_deposit(&mut world, &prod, OVERWORLD, pos.as_dvec3(), &item), 0);
        assert_eq!(world.container(pos).cloned(), before);
    }
}
