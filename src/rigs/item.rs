use crate::constants::OIL_BUCKET_NAME;
use crate::core::{ItemKind, ItemMeta, ItemStack};

/// Template of the item a rig produces. Handed out by clone only.
#[derive(Debug, Clone, PartialEq)]
pub struct ProducedItem {
    template: ItemStack,
}

impl ProducedItem {
    pub fn oil_bucket() -> Self {
        let meta = ItemMeta {
            display_name: Some(OIL_BUCKET_NAME.to_string()),
            lore: vec![
                "§7A bucket filled with crude oil".to_string(),
                "§cCannot be placed".to_string(),
            ],
        };
        Self {
            template: ItemStack::new(ItemKind::LavaBucket, 1).with_meta(meta),
        }
    }

    pub fn stack(&self) -> ItemStack {
        self.template.clone()
    }

    pub fn display_name(&self) -> &str {
        self.template.display_name().unwrap_or_default()
    }

    /// Whether `item` carries this item's display label.
    pub fn is_instance(&self, item: &ItemStack) -> bool {
        item.display_name() == Some(self.display_name())
    }
}

impl Default for ProducedItem {
    fn default() -> Self {
        Self::oil_bucket()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognises_by_label() {
        let oil = ProducedItem::oil_bucket();
        assert!(oil.is_instance(&oil.stack()));
        assert!(!oil.is_instance(&ItemStack::new(ItemKind::LavaBucket, 1)));

        let renamed = ItemStack::new(ItemKind::WaterBucket, 1).with_meta(ItemMeta {
            display_name: Some(OIL_BUCKET_NAME.to_string()),
            lore: Vec::new(),
        });
        assert!(oil.is_instance(&renamed));
    }
}
