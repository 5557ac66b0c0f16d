//! Satchel - a single row of item stacks shown under the station
//!
//! Stands in for the player's inventory: clicking a cell exchanges its
//! contents with the carried item.

use macroquad::prelude::{Rect, Vec2};

use crate::game::Item;

#[derive(Debug, Clone)]
pub struct Satchel {
    cells: Vec<Option<Item>>,
}

impl Satchel {
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![None; size],
        }
    }

    /// Build a satchel from a list of stacks, one per cell
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            cells: items.into_iter().map(Some).collect(),
        }
    }

    pub fn cells(&self) -> &[Option<Item>] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounds of every cell, centered horizontally in `area`
    pub fn cell_bounds(&self, area: Rect, cell_size: f32, spacing: f32) -> Vec<Rect> {
        let n = self.cells.len() as f32;
        let row_w = n * cell_size + (n - 1.0).max(0.0) * spacing;
        let start_x = area.x + (area.w - row_w) / 2.0;
        let y = area.y + (area.h - cell_size) / 2.0;

        (0..self.cells.len())
            .map(|i| Rect::new(start_x + i as f32 * (cell_size + spacing), y, cell_size, cell_size))
            .collect()
    }

    /// Cell under `point`, if any
    pub fn hit_test(&self, area: Rect, cell_size: f32, spacing: f32, point: Vec2) -> Option<usize> {
        self.cell_bounds(area, cell_size, spacing)
            .iter()
            .position(|r| r.contains(point))
    }

    /// Exchange cell `index` with the carried item. Same-kind stacks merge,
    /// any overflow stays carried.
    pub fn click(&mut self, index: usize, held: &mut Option<Item>) {
        let Some(cell) = self.cells.get_mut(index) else {
            return;
        };

        let carried = held.take();
        if let (Some(stack), Some(incoming)) = (cell.as_mut(), carried.as_ref()) {
            if stack.can_stack_with(incoming) {
                let leftover = stack.add_to_stack(incoming);
                if leftover > 0 {
                    *held = Some(Item::new(incoming.kind, leftover));
                }
                return;
            }
        }
        *held = std::mem::replace(cell, carried);
    }

    /// Put an item back into the satchel, merging into a matching stack
    /// first. Returns whatever did not fit.
    pub fn absorb(&mut self, mut item: Item) -> Option<Item> {
        for stack in self.cells.iter_mut().flatten() {
            if stack.can_stack_with(&item) {
                item.stack = stack.add_to_stack(&item);
                if item.stack == 0 {
                    return None;
                }
            }
        }

        match self.cells.iter_mut().find(|c| c.is_none()) {
            Some(empty) => {
                *empty = Some(item);
                None
            }
            None => Some(item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{ItemKind, MAX_STACK};
    use macroquad::prelude::vec2;

    #[test]
    fn test_click_takes_and_places() {
        let mut satchel = Satchel::with_items([Item::new(ItemKind(768), 5)]);
        let mut held = None;

        satchel.click(0, &mut held);
        assert_eq!(held, Some(Item::new(ItemKind(768), 5)));
        assert!(satchel.cells()[0].is_none());

        satchel.click(0, &mut held);
        assert!(held.is_none());
        assert_eq!(satchel.cells()[0], Some(Item::new(ItemKind(768), 5)));
    }

    #[test]
    fn test_click_merges_same_kind() {
        let mut satchel = Satchel::with_items([Item::new(ItemKind(82), MAX_STACK - 1)]);
        let mut held = Some(Item::new(ItemKind(82), 3));

        satchel.click(0, &mut held);
        assert_eq!(satchel.cells()[0], Some(Item::new(ItemKind(82), MAX_STACK)));
        assert_eq!(held, Some(Item::new(ItemKind(82), 2)));
    }

    #[test]
    fn test_click_swaps_different_kind() {
        let mut satchel = Satchel::with_items([Item::one(ItemKind(1))]);
        let mut held = Some(Item::one(ItemKind(2)));

        satchel.click(0, &mut held);
        assert_eq!(held, Some(Item::one(ItemKind(1))));
        assert_eq!(satchel.cells()[0], Some(Item::one(ItemKind(2))));

        // Out of range leaves everything alone
        satchel.click(9, &mut held);
        assert_eq!(held, Some(Item::one(ItemKind(1))));
    }

    #[test]
    fn test_absorb() {
        let mut satchel = Satchel::with_items([Item::new(ItemKind(7), 2)]);
        assert_eq!(satchel.len(), 1);

        assert!(satchel.absorb(Item::new(ItemKind(7), 3)).is_none());
        assert_eq!(satchel.cells()[0], Some(Item::new(ItemKind(7), 5)));

        // Full satchel hands the item back
        assert_eq!(satchel.absorb(Item::one(ItemKind(8))), Some(Item::one(ItemKind(8))));

        let mut roomy = Satchel::new(2);
        assert!(roomy.absorb(Item::one(ItemKind(8))).is_none());
        assert_eq!(roomy.cells()[0], Some(Item::one(ItemKind(8))));
    }

    #[test]
    fn test_cells_centered_and_hit() {
        let satchel = Satchel::new(3);
        let area = Rect::new(0.0, 0.0, 300.0, 100.0);
        let bounds = satchel.cell_bounds(area, 80.0, 10.0);

        assert_eq!(bounds[0].x, 20.0);
        assert_eq!(bounds[0].y, 10.0);
        assert_eq!(bounds[2].x + bounds[2].w, 280.0);

        assert_eq!(satchel.hit_test(area, 80.0, 10.0, vec2(150.0, 50.0)), Some(1));
        assert_eq!(satchel.hit_test(area, 80.0, 10.0, vec2(105.0, 50.0)), None);
    }
}
