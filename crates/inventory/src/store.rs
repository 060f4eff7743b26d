//! Bounded, ordered inventory list.

use stockroom_core::{DomainError, DomainResult};

use crate::item::{Item, Money};

/// Number of items the inventory holds unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 10;

/// The inventory: items in insertion order, never more than `capacity` of them.
///
/// Items are positional. The only handle a user has on an item is its 1-based
/// position in [`list`](Self::list), and removing an item shifts everything after
/// it one place to the left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryStore {
    items: Vec<Item>,
    capacity: usize,
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore {
    /// Empty store with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuild a store from previously persisted items.
    ///
    /// Keeps the first `capacity` items; returns the store and how many were dropped.
    pub fn from_items(items: impl IntoIterator<Item = Item>, capacity: usize) -> (Self, usize) {
        let mut store = Self::with_capacity(capacity);
        let mut dropped = 0;
        for item in items {
            if store.is_full() {
                dropped += 1;
            } else {
                store.items.push(item);
            }
        }
        if dropped > 0 {
            tracing::warn!(dropped, capacity, "persisted inventory exceeds capacity");
        }
        (store, dropped)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Append an item. Fails (leaving the store untouched) when full.
    ///
    /// Names are not required to be unique.
    pub fn add(&mut self, item: Item) -> DomainResult<()> {
        if self.is_full() {
            return Err(DomainError::capacity_exceeded(self.capacity));
        }
        tracing::debug!(name = %item.name(), position = self.items.len() + 1, "item added");
        self.items.push(item);
        Ok(())
    }

    /// Remove the item at 1-based `position` and return it.
    pub fn remove(&mut self, position: usize) -> DomainResult<Item> {
        if position == 0 || position > self.items.len() {
            return Err(DomainError::index_out_of_range(position, self.items.len()));
        }
        let item = self.items.remove(position - 1);
        tracing::debug!(name = %item.name(), position, "item removed");
        Ok(item)
    }

    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(|item| item.name().as_str())
    }

    /// Sum of quantity × price over every item.
    pub fn total_value(&self) -> Money {
        self.items.iter().map(Item::value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemName, Price, Quantity};

    fn item(name: &str, quantity: u32, price: &str) -> Item {
        Item::new(
            ItemName::new(name).unwrap(),
            Quantity::new(quantity).unwrap(),
            Price::parse(price).unwrap(),
        )
    }

    fn names(store: &InventoryStore) -> Vec<&str> {
        store.names().collect()
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut store = InventoryStore::new();
        store.add(item("A", 1, "1")).unwrap();
        store.add(item("B", 1, "1")).unwrap();
        store.add(item("A", 2, "3")).unwrap();

        assert_eq!(names(&store), vec!["A", "B", "A"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn eleventh_add_fails_and_leaves_store_unchanged() {
        let mut store = InventoryStore::new();
        for i in 0..10 {
            store.add(item(&format!("item{i}"), 1, "1")).unwrap();
        }
        assert!(store.is_full());
        let before = store.clone();

        let err = store.add(item("extra", 1, "1")).unwrap_err();
        assert_eq!(err, DomainError::CapacityExceeded { capacity: 10 });
        assert_eq!(store, before);
    }

    #[test]
    fn remove_compacts_the_list() {
        let mut store = InventoryStore::new();
        for name in ["A", "B", "C"] {
            store.add(item(name, 1, "1")).unwrap();
        }

        let removed = store.remove(2).unwrap();
        assert_eq!(removed.name().as_str(), "B");
        assert_eq!(names(&store), vec!["A", "C"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_first_and_last_positions() {
        let mut store = InventoryStore::new();
        for name in ["A", "B", "C"] {
            store.add(item(name, 1, "1")).unwrap();
        }
        store.remove(3).unwrap();
        store.remove(1).unwrap();
        assert_eq!(names(&store), vec!["B"]);
    }

    #[test]
    fn remove_rejects_out_of_range_positions() {
        let mut store = InventoryStore::new();
        store.add(item("A", 1, "1")).unwrap();
        let before = store.clone();

        assert_eq!(
            store.remove(0).unwrap_err(),
            DomainError::IndexOutOfRange { position: 0, len: 1 }
        );
        assert_eq!(
            store.remove(2).unwrap_err(),
            DomainError::IndexOutOfRange { position: 2, len: 1 }
        );
        assert_eq!(store, before);

        let mut empty = InventoryStore::new();
        assert!(empty.remove(1).is_err());
    }

    #[test]
    fn total_value_of_empty_store_is_zero() {
        assert_eq!(InventoryStore::new().total_value(), Money::ZERO);
    }

    #[test]
    fn total_value_sums_quantity_times_price() {
        let mut store = InventoryStore::new();
        store.add(item("A", 2, "3.50")).unwrap();
        store.add(item("B", 1, "10.00")).unwrap();

        assert_eq!(store.total_value(), Money::from_cents(1700));
        assert_eq!(store.total_value().to_string(), "17.00");
    }

    #[test]
    fn from_items_drops_overflow() {
        let items: Vec<Item> = (0..12).map(|i| item(&format!("i{i}"), 1, "1")).collect();
        let (store, dropped) = InventoryStore::from_items(items, DEFAULT_CAPACITY);

        assert_eq!(store.len(), 10);
        assert_eq!(dropped, 2);
        assert_eq!(names(&store).last(), Some(&"i9"));
    }

    #[test]
    fn list_of_empty_store_is_empty() {
        assert!(InventoryStore::new().list().is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(u32, u64),
            Remove(usize),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (1u32..=1000, 0u64..=1_000_000).prop_map(|(q, c)| Op::Add(q, c)),
                (0usize..=12).prop_map(Op::Remove),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: no sequence of adds and removes pushes the store past capacity,
            /// and a failed operation never changes it.
            #[test]
            fn size_never_exceeds_capacity(ops in prop::collection::vec(op(), 0..60)) {
                let mut store = InventoryStore::new();

                for (n, op) in ops.into_iter().enumerate() {
                    let before = store.clone();
                    let result = match op {
                        Op::Add(q, c) => store
                            .add(Item::new(
                                ItemName::new(format!("item{n}")).unwrap(),
                                Quantity::new(q).unwrap(),
                                Price::from_cents(c).unwrap(),
                            ))
                            .map(|_| ()),
                        Op::Remove(p) => store.remove(p).map(|_| ()),
                    };

                    prop_assert!(store.len() <= DEFAULT_CAPACITY);
                    if result.is_err() {
                        prop_assert_eq!(&store, &before);
                    }
                }
            }

            /// Property: total value equals the sum of each item's quantity × price.
            #[test]
            fn total_value_matches_manual_sum(
                lines in prop::collection::vec((1u32..=1000, 0u64..=1_000_000), 0..=10)
            ) {
                let mut store = InventoryStore::new();
                let mut expected = 0u64;
                for (n, (q, c)) in lines.iter().enumerate() {
                    store
                        .add(Item::new(
                            ItemName::new(format!("item{n}")).unwrap(),
                            Quantity::new(*q).unwrap(),
                            Price::from_cents(*c).unwrap(),
                        ))
                        .unwrap();
                    expected += u64::from(*q) * c;
                }
                prop_assert_eq!(store.total_value().cents(), expected);
            }
        }
    }
}
