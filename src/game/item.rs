use std::fmt;

/// Largest stack a single item can hold
pub const MAX_STACK: i32 = 999;

/// Numeric item kind identifier (object sheet index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKind(pub u32);

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A stack of items of one kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub kind: ItemKind,
    pub stack: i32,
}

impl Item {
    pub fn new(kind: ItemKind, stack: i32) -> Self {
        Self { kind, stack }
    }

    /// Single unit of the same kind
    pub fn one(kind: ItemKind) -> Self {
        Self::new(kind, 1)
    }

    /// Copy of this item with a stack of one (the source is left untouched)
    pub fn get_one(&self) -> Self {
        Self::one(self.kind)
    }

    pub fn can_stack_with(&self, other: &Item) -> bool {
        self.kind == other.kind
    }

    /// Merge `other` into this stack up to `MAX_STACK`.
    /// Returns how many units of `other` did not fit (all of them when the kinds differ).
    pub fn add_to_stack(&mut self, other: &Item) -> i32 {
        if !self.can_stack_with(other) {
            return other.stack;
        }
        let room = (MAX_STACK - self.stack).max(0);
        let moved = other.stack.min(room);
        self.stack += moved;
        other.stack - moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_to_stack_same_kind() {
        let mut a = Item::new(ItemKind(768), 3);
        let left = a.add_to_stack(&Item::new(ItemKind(768), 4));
        assert_eq!(left, 0);
        assert_eq!(a.stack, 7);
    }

    #[test]
    fn test_add_to_stack_overflow() {
        let mut a = Item::new(ItemKind(82), MAX_STACK - 2);
        let left = a.add_to_stack(&Item::new(ItemKind(82), 5));
        assert_eq!(a.stack, MAX_STACK);
        assert_eq!(left, 3);
    }

    #[test]
    fn test_add_to_stack_different_kind() {
        let mut a = Item::new(ItemKind(82), 1);
        let left = a.add_to_stack(&Item::new(ItemKind(444), 5));
        assert_eq!(a.stack, 1);
        assert_eq!(left, 5);
    }

    #[test]
    fn test_get_one() {
        let a = Item::new(ItemKind(771), 12);
        let one = a.get_one();
        assert_eq!(one, Item::one(ItemKind(771)));
        assert_eq!(a.stack, 12);
    }
}
