//! Station recipe
//!
//! The station knows exactly one recipe: one unit each of six distinct
//! ingredient kinds produce a single output item. Matching is order
//! independent and ignores stack sizes and unrelated extras.

use crate::game::{Item, ItemKind};
use super::slots::SlotGrid;

/// Ingredient kinds the recipe requires, one unit each
pub const REQUIRED_KINDS: [ItemKind; 6] = [
    ItemKind(768),
    ItemKind(769),
    ItemKind(771),
    ItemKind(766),
    ItemKind(82),
    ItemKind(444),
];

/// Kind produced by the recipe
pub const OUTPUT_KIND: ItemKind = ItemKind(74);

/// Fixed set of required kinds plus the item they produce
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeRequirement {
    kinds: [ItemKind; 6],
    output: ItemKind,
}

impl Default for RecipeRequirement {
    fn default() -> Self {
        Self {
            kinds: REQUIRED_KINDS,
            output: OUTPUT_KIND,
        }
    }
}

impl RecipeRequirement {
    /// Item placed into the output slot on a match
    pub fn result(&self) -> Item {
        Item::one(self.output)
    }

    /// Check whether the given items cover every required kind.
    /// Each requirement is satisfied at most once, so duplicates never stand in for a missing kind.
    pub fn matches<'a>(&self, items: impl IntoIterator<Item = &'a Item>) -> bool {
        // Scratch flags live for this pass only
        let mut satisfied = [false; 6];

        for item in items {
            for (flag, kind) in satisfied.iter_mut().zip(self.kinds.iter()) {
                if !*flag && item.kind == *kind {
                    *flag = true;
                }
            }
        }

        satisfied.iter().all(|&s| s)
    }

    /// Evaluate the grid's ingredient slots
    pub fn evaluate(&self, grid: &SlotGrid) -> bool {
        self.matches(grid.ingredient_items().map(|(_, item)| item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crafting::slots::SlotRef;

    fn items(kinds: &[u32]) -> Vec<Item> {
        kinds.iter().map(|&k| Item::one(ItemKind(k))).collect()
    }

    #[test]
    fn test_exact_set_matches_in_any_order() {
        let recipe = RecipeRequirement::default();
        let mut kinds = vec![768, 769, 771, 766, 82, 444];

        for _ in 0..kinds.len() {
            kinds.rotate_left(1);
            assert!(recipe.matches(&items(&kinds)));

            let mut reversed = kinds.clone();
            reversed.reverse();
            assert!(recipe.matches(&items(&reversed)));
        }
    }

    #[test]
    fn test_extras_do_not_prevent_match() {
        let recipe = RecipeRequirement::default();
        assert!(recipe.matches(&items(&[1, 768, 769, 771, 766, 82, 444, 768, 999])));
    }

    #[test]
    fn test_stack_size_ignored() {
        let recipe = RecipeRequirement::default();
        let mut set = items(&[768, 769, 771, 766, 82, 444]);
        set[0].stack = 5;
        assert!(recipe.matches(&set));
    }

    #[test]
    fn test_removing_any_required_kind_breaks_match() {
        let recipe = RecipeRequirement::default();
        let full = [768, 769, 771, 766, 82, 444];

        for skip in 0..full.len() {
            let partial: Vec<u32> = full
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, &k)| k)
                .collect();
            assert!(!recipe.matches(&items(&partial)), "matched without {}", full[skip]);
        }
    }

    #[test]
    fn test_duplicates_do_not_substitute() {
        let recipe = RecipeRequirement::default();
        // Two of 768, none of 769
        assert!(!recipe.matches(&items(&[768, 768, 771, 766, 82, 444])));
    }

    #[test]
    fn test_empty_does_not_match() {
        let recipe = RecipeRequirement::default();
        assert!(!recipe.matches(std::iter::empty()));
    }

    #[test]
    fn test_repeated_evaluation_is_independent() {
        let recipe = RecipeRequirement::default();
        assert!(recipe.matches(&items(&[768, 769, 771, 766, 82, 444])));
        // No flags carried over from the previous pass
        assert!(!recipe.matches(&items(&[768])));
    }

    #[test]
    fn test_evaluate_grid() {
        let recipe = RecipeRequirement::default();
        let mut grid = SlotGrid::new();
        for (slot, kind) in SlotRef::ingredients().zip(REQUIRED_KINDS.iter().rev()) {
            grid.place(slot, Item::one(*kind)).unwrap();
        }
        assert!(recipe.evaluate(&grid));

        grid.take(SlotRef::Ingredient(3));
        assert!(!recipe.evaluate(&grid));
    }

    #[test]
    fn test_result_is_single_output() {
        assert_eq!(RecipeRequirement::default().result(), Item::one(OUTPUT_KIND));
    }
}
