//! The player's inventory.

use std::fmt;

/// Items the player carries, in the order they were picked up.
///
/// Adding an item that is already carried does nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item. Returns false if it was already carried.
    pub fn add(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if self.contains(&item) {
            false
        } else {
            self.items.push(item);
            true
        }
    }

    /// Check if the player carries an item.
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Carried items in pickup order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of carried items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is carried.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Inventory: {}", self.items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_and_contains() {
        let mut inv = Inventory::new();
        assert!(!inv.contains("wrench"));
        assert!(inv.add("wrench"));
        assert!(inv.contains("wrench"));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn adding_twice_keeps_one_entry() {
        let mut inv = Inventory::new();
        inv.add("wrench");
        inv.add("keycard");
        assert!(!inv.add("wrench"));
        assert_eq!(inv.items(), &["wrench".to_string(), "keycard".to_string()]);
    }

    #[test]
    fn display_lists_items() {
        let mut inv = Inventory::new();
        assert_eq!(inv.to_string(), "Inventory: ");
        inv.add("wrench");
        inv.add("keycard");
        assert_eq!(inv.to_string(), "Inventory: wrench, keycard");
    }

    proptest! {
        #[test]
        fn add_is_idempotent_and_keeps_first_order(
            items in proptest::collection::vec("[a-d]", 0..20)
        ) {
            let mut inv = Inventory::new();
            for item in &items {
                inv.add(item.clone());
            }

            let mut expected: Vec<String> = Vec::new();
            for item in &items {
                if !expected.contains(item) {
                    expected.push(item.clone());
                }
            }
            prop_assert_eq!(inv.items(), expected.as_slice());
        }
    }
}
