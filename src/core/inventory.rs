use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ItemKind {
    Bucket,
    WaterBucket,
    LavaBucket,
    Coal,
    Diamond,
    Cobblestone,
}

impl ItemKind {
    pub fn max_stack_size(&self) -> u8 {
        match self {
            ItemKind::Bucket => 16,
            ItemKind::WaterBucket | ItemKind::LavaBucket => 1,
            _ => 64,
        }
    }
}

/// Custom presentation attached to an item stack.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct ItemMeta {
    pub display_name: Option<String>,
    pub lore: Vec<String>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ItemStack {
    pub kind: ItemKind,
    pub amount: u8,
    pub meta: Option<ItemMeta>,
}

impl ItemStack {
    pub fn new(kind: ItemKind, amount: u8) -> Self {
        Self {
            kind,
            amount,
            meta: None,
        }
    }

    pub fn with_meta(mut self, meta: ItemMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn display_name(&self) -> Option<&str> {
        self.meta.as_ref()?.display_name.as_deref()
    }

    /// Same kind and meta; amounts may differ.
    pub fn is_similar(&self, other: &ItemStack) -> bool {
        self.kind == other.kind && self.meta == other.meta
    }
}

/// Fixed-size slot storage of a container block.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<Option<ItemStack>>,
}

impl Inventory {
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Option<ItemStack>] {
        &self.slots
    }

    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn has_empty_slot(&self) -> bool {
        self.first_empty().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Total amount of stacks similar to `item`.
    pub fn count_similar(&self, item: &ItemStack) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|s| s.is_similar(item))
            .map(|s| s.amount as u32)
            .sum()
    }

    /// Merges into similar stacks first, then fills empty slots.
    /// Returns whatever did not fit.
    pub fn add_item(&mut self, mut item: ItemStack) -> Option<ItemStack> {
        let max = item.kind.max_stack_size();

        for stack in self.slots.iter_mut().flatten() {
            if item.amount == 0 {
                return None;
            }
            if stack.is_similar(&item) && stack.amount < max {
                let moved = (max - stack.amount).min(item.amount);
                stack.amount += moved;
                item.amount -= moved;
            }
        }

        for slot in self.slots.iter_mut() {
            if item.amount == 0 {
                return None;
            }
            if slot.is_none() {
                let moved = max.min(item.amount);
                let mut placed = item.clone();
                placed.amount = moved;
                *slot = Some(placed);
                item.amount -= moved;
            }
        }

        (item.amount > 0).then_some(item)
    }

    /// Removes a single unit from the first occupied slot.
    pub fn take_one(&mut self) -> Option<ItemStack> {
        let slot = self.slots.iter_mut().find(|s| s.is_some())?;
        let stack = slot.as_mut()?;
        let mut taken = stack.clone();
        taken.amount = 1;
        stack.amount -= 1;
        if stack.amount == 0 {
            *slot = None;
        }
        Some(taken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_fills_empty_slots() {
        let mut inv = Inventory::new(2);
        assert!(inv.add_item(ItemStack::new(ItemKind::LavaBucket, 1)).is_none());
        assert!(inv.add_item(ItemStack::new(ItemKind::LavaBucket, 1)).is_none());
        assert!(!inv.has_empty_slot());
        let leftover = inv.add_item(ItemStack::new(ItemKind::LavaBucket, 1));
        assert_eq!(leftover.map(|s| s.amount), Some(1));
    }

    #[test]
    fn test_add_merges_similar() {
        let mut inv = Inventory::new(3);
        inv.add_item(ItemStack::new(ItemKind::Coal, 10));
        inv.add_item(ItemStack::new(ItemKind::Coal, 60));
        assert_eq!(inv.slots()[0].as_ref().map(|s| s.amount), Some(64));
        assert_eq!(inv.slots()[1].as_ref().map(|s| s.amount), Some(6));
        assert_eq!(inv.first_empty(), Some(2));
    }

    #[test]
    fn test_meta_prevents_merge() {
        let mut inv = Inventory::new(2);
        let named = ItemStack::new(ItemKind::Coal, 1).with_meta(ItemMeta {
            display_name: Some("Fuel".to_string()),
            lore: Vec::new(),
        });
        inv.add_item(ItemStack::new(ItemKind::Coal, 1));
        inv.add_item(named.clone());
        assert_eq!(inv.count_similar(&named), 1);
        assert!(!inv.has_empty_slot());
    }

    #[test]
    fn test_take_one() {
        let mut inv = Inventory::new(1);
        inv.add_item(ItemStack::new(ItemKind::Coal, 2));
        assert_eq!(inv.take_one().map(|s| s.amount), Some(1));
        assert_eq!(inv.take_one().map(|s| s.amount), Some(1));
        assert!(inv.take_one().is_none());
        assert!(inv.is_empty());
    }
}
