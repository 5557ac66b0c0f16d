//! Pointer routing
//!
//! Turns a click on a slot into pick-up / put-down semantics between the
//! grid and the item carried by the pointer, and keeps the pending result
//! in step with the ingredients.

use crate::game::{Item, MAX_STACK};
use super::recipe::RecipeRequirement;
use super::slots::{SlotGrid, SlotRef};

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Nothing hovered, or nothing to move
    Ignored,
    /// One unit (or a single-item stack) went into an empty ingredient slot
    Placed,
    /// An ingredient slot's content moved to the pointer
    PickedUp,
    /// The carried stack was merged onto a same-kind ingredient
    Merged,
    /// Carried item and ingredient traded places
    Swapped,
    /// A completed output item moved to the pointer
    OutputTaken,
    /// The output was clicked while empty; the caller may start a craft
    CraftRequested,
    /// The click could not be honoured (e.g. carrying something that does not stack with the output)
    Rejected,
}

impl RouteOutcome {
    /// Whether an ingredient slot changed
    pub fn changed_ingredients(&self) -> bool {
        matches!(self, RouteOutcome::Placed | RouteOutcome::PickedUp | RouteOutcome::Merged | RouteOutcome::Swapped)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InteractionRouter {
    recipe: RecipeRequirement,
}

impl InteractionRouter {
    /// Route a click on `hovered`. `held` is the pointer's carried item.
    /// While `crafting` is true the pending result is committed and left alone.
    pub fn route_click(
        &self,
        hovered: Option<SlotRef>,
        held: &mut Option<Item>,
        grid: &mut SlotGrid,
        crafting: bool,
    ) -> RouteOutcome {
        let Some(slot) = hovered else {
            return RouteOutcome::Ignored;
        };

        let outcome = match slot {
            SlotRef::Output => Self::click_output(held, grid),
            SlotRef::Ingredient(_) => Self::click_ingredient(slot, held, grid),
        };

        if !crafting && (outcome.changed_ingredients() || outcome == RouteOutcome::OutputTaken) {
            self.refresh_pending(grid);
        }

        outcome
    }

    fn click_ingredient(slot: SlotRef, held: &mut Option<Item>, grid: &mut SlotGrid) -> RouteOutcome {
        match (grid.peek_mut(slot), held.as_mut()) {
            (None, None) => RouteOutcome::Ignored,

            // Empty slot: place a single unit, or the whole carried item if it is just one
            (None, Some(carried)) => {
                let placed = if carried.stack > 1 {
                    carried.stack -= 1;
                    carried.get_one()
                } else {
                    match held.take() {
                        Some(item) => item,
                        None => return RouteOutcome::Ignored,
                    }
                };
                match grid.place(slot, placed) {
                    Ok(_) => RouteOutcome::Placed,
                    Err(item) => {
                        Self::return_to_pointer(held, item);
                        RouteOutcome::Rejected
                    }
                }
            }

            (Some(_), None) => {
                *held = grid.take(slot);
                RouteOutcome::PickedUp
            }

            // Same kind: merge, then keep a single unit in the slot
            (Some(content), Some(carried)) if content.can_stack_with(carried) => {
                let mut left = content.add_to_stack(carried);
                if content.stack > 1 {
                    // The pointer never holds more than a full stack; the rest stays put
                    let back = (content.stack - 1).min(MAX_STACK - left);
                    left += back;
                    content.stack -= back;
                }
                carried.stack = left;
                if left <= 0 {
                    *held = None;
                }
                RouteOutcome::Merged
            }

            (Some(_), Some(_)) => match held.take() {
                Some(carried) => match grid.place(slot, carried) {
                    Ok(evicted) => {
                        *held = evicted;
                        RouteOutcome::Swapped
                    }
                    Err(item) => {
                        *held = Some(item);
                        RouteOutcome::Rejected
                    }
                },
                None => RouteOutcome::Ignored,
            },
        }
    }

    fn click_output(held: &mut Option<Item>, grid: &mut SlotGrid) -> RouteOutcome {
        let Some(output) = grid.peek(SlotRef::Output) else {
            return RouteOutcome::CraftRequested;
        };

        match held {
            None => {
                *held = grid.take(SlotRef::Output);
                RouteOutcome::OutputTaken
            }
            Some(carried) if carried.can_stack_with(output) => {
                let Some(taken) = grid.take(SlotRef::Output) else {
                    return RouteOutcome::Ignored;
                };
                let left = carried.add_to_stack(&taken);
                if left > 0 {
                    grid.restore_output(Item::new(taken.kind, left));
                }
                RouteOutcome::OutputTaken
            }
            Some(_) => RouteOutcome::Rejected,
        }
    }

    fn return_to_pointer(held: &mut Option<Item>, item: Item) {
        match held {
            Some(carried) => {
                carried.add_to_stack(&item);
            }
            None => *held = Some(item),
        }
    }

    /// Set the pending result when the ingredients match and the output is free, clear it otherwise
    pub fn refresh_pending(&self, grid: &mut SlotGrid) {
        if self.recipe.evaluate(grid) && grid.is_empty(SlotRef::Output) {
            if grid.pending_result().is_none() {
                log::debug!("Recipe matched, result pending");
                grid.set_pending_result(self.recipe.result());
            }
        } else if grid.clear_pending_result().is_some() {
            log::debug!("Recipe no longer matches, pending result cleared");
        }
    }
}
