//! Station slots
//!
//! One output slot surrounded by a fixed ring of ingredient slots. The grid
//! only stores items; the rules for moving items between the slots and the
//! pointer live in the router.

use crate::game::Item;

/// Number of ingredient slots around the output
pub const INGREDIENT_SLOTS: usize = 6;

/// Addresses a slot in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotRef {
    Output,
    Ingredient(usize),
}

impl SlotRef {
    pub fn is_ingredient(&self) -> bool {
        matches!(self, SlotRef::Ingredient(_))
    }

    /// All ingredient slots in ring order
    pub fn ingredients() -> impl Iterator<Item = SlotRef> {
        (0..INGREDIENT_SLOTS).map(SlotRef::Ingredient)
    }
}

/// Contents of one slot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slot {
    /// Real, pickable content
    pub item: Option<Item>,
    /// Crafted result not yet materialized (output slot only)
    pub pending_result: Option<Item>,
}

/// Exclusive owner of the station's slots
#[derive(Debug, Clone, Default)]
pub struct SlotGrid {
    output: Slot,
    ingredients: [Slot; INGREDIENT_SLOTS],
}

impl SlotGrid {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, slot: SlotRef) -> Option<&Slot> {
        match slot {
            SlotRef::Output => Some(&self.output),
            SlotRef::Ingredient(i) => self.ingredients.get(i),
        }
    }

    fn ingredient_mut(&mut self, slot: SlotRef) -> Option<&mut Slot> {
        match slot {
            SlotRef::Output => None,
            SlotRef::Ingredient(i) => self.ingredients.get_mut(i),
        }
    }

    /// Item currently in a slot
    pub fn peek(&self, slot: SlotRef) -> Option<&Item> {
        self.slot(slot).and_then(|s| s.item.as_ref())
    }

    /// Mutable access to an ingredient slot's item (for stack arithmetic)
    pub fn peek_mut(&mut self, slot: SlotRef) -> Option<&mut Item> {
        self.ingredient_mut(slot).and_then(|s| s.item.as_mut())
    }

    pub fn is_empty(&self, slot: SlotRef) -> bool {
        self.peek(slot).is_none()
    }

    /// Put `item` into an ingredient slot, returning whatever it evicted.
    /// The output slot and out-of-range slots reject the item and hand it back.
    pub fn place(&mut self, slot: SlotRef, item: Item) -> Result<Option<Item>, Item> {
        match self.ingredient_mut(slot) {
            Some(s) => Ok(s.item.replace(item)),
            None => {
                log::debug!("Rejected placement of {} x{} into {:?}", item.kind, item.stack, slot);
                Err(item)
            }
        }
    }

    /// Remove a slot's real item. A pending result is never taken.
    pub fn take(&mut self, slot: SlotRef) -> Option<Item> {
        match slot {
            SlotRef::Output => self.output.item.take(),
            SlotRef::Ingredient(i) => self.ingredients.get_mut(i).and_then(|s| s.item.take()),
        }
    }

    /// Put back an item the output slot could not fully hand over
    pub(crate) fn restore_output(&mut self, item: Item) {
        self.output.item = Some(item);
    }

    pub fn pending_result(&self) -> Option<&Item> {
        self.output.pending_result.as_ref()
    }

    pub fn set_pending_result(&mut self, item: Item) {
        self.output.pending_result = Some(item);
    }

    pub fn clear_pending_result(&mut self) -> Option<Item> {
        self.output.pending_result.take()
    }

    /// Move the pending result into the output slot.
    /// Only happens when the output is empty and a result is pending.
    pub fn promote_pending(&mut self) -> bool {
        if self.output.item.is_some() {
            return false;
        }
        match self.output.pending_result.take() {
            Some(result) => {
                self.output.item = Some(result);
                true
            }
            None => false,
        }
    }

    /// Ingredient items by slot index (empty slots skipped)
    pub fn ingredient_items(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.ingredients
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.item.as_ref().map(|item| (i, item)))
    }

    /// Empty every ingredient slot, returning the removed items whole
    pub fn clear_ingredients(&mut self) -> Vec<(usize, Item)> {
        self.ingredients
            .iter_mut()
            .enumerate()
            .filter_map(|(i, s)| s.item.take().map(|item| (i, item)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ItemKind;

    #[test]
    fn test_place_and_take_ingredient() {
        let mut grid = SlotGrid::new();
        let slot = SlotRef::Ingredient(2);

        assert_eq!(grid.place(slot, Item::one(ItemKind(768))), Ok(None));
        assert_eq!(grid.peek(slot), Some(&Item::one(ItemKind(768))));

        // Evicts the previous content
        let evicted = grid.place(slot, Item::one(ItemKind(82))).unwrap();
        assert_eq!(evicted, Some(Item::one(ItemKind(768))));

        assert_eq!(grid.take(slot), Some(Item::one(ItemKind(82))));
        assert!(grid.is_empty(slot));
        assert_eq!(grid.take(slot), None);
    }

    #[test]
    fn test_output_rejects_placement() {
        let mut grid = SlotGrid::new();
        let item = Item::new(ItemKind(74), 3);
        assert_eq!(grid.place(SlotRef::Output, item.clone()), Err(item));
        assert!(grid.is_empty(SlotRef::Output));
    }

    #[test]
    fn test_out_of_range_slot() {
        let mut grid = SlotGrid::new();
        let item = Item::one(ItemKind(1));
        let slot = SlotRef::Ingredient(INGREDIENT_SLOTS);
        assert_eq!(grid.place(slot, item.clone()), Err(item));
        assert_eq!(grid.take(slot), None);
        assert_eq!(grid.peek(slot), None);
    }

    #[test]
    fn test_pending_result_not_pickable() {
        let mut grid = SlotGrid::new();
        grid.set_pending_result(Item::one(ItemKind(74)));
        assert_eq!(grid.take(SlotRef::Output), None);
        assert!(grid.pending_result().is_some());
    }

    #[test]
    fn test_promote_pending() {
        let mut grid = SlotGrid::new();
        assert!(!grid.promote_pending());

        grid.set_pending_result(Item::one(ItemKind(74)));
        assert!(grid.promote_pending());
        assert_eq!(grid.peek(SlotRef::Output), Some(&Item::one(ItemKind(74))));
        assert!(grid.pending_result().is_none());

        // Occupied output blocks promotion
        grid.set_pending_result(Item::one(ItemKind(74)));
        assert!(!grid.promote_pending());
        assert!(grid.pending_result().is_some());
    }

    #[test]
    fn test_clear_ingredients_takes_whole_stacks() {
        let mut grid = SlotGrid::new();
        grid.place(SlotRef::Ingredient(0), Item::new(ItemKind(768), 2)).unwrap();
        grid.place(SlotRef::Ingredient(4), Item::one(ItemKind(82))).unwrap();

        let cleared = grid.clear_ingredients();
        assert_eq!(
            cleared,
            vec![(0, Item::new(ItemKind(768), 2)), (4, Item::one(ItemKind(82)))]
        );
        assert_eq!(grid.ingredient_items().count(), 0);
    }
}
