// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container registry: named, ordered item sequences.
//!
//! [`ContainerRegistry`] maps container identifiers to ordered sequences of item
//! identifiers and answers "which container holds this item?". It enforces the
//! partition invariant (every item lives in exactly one container) at every
//! entry point that can add items, and otherwise clamps rather than rejects:
//! an insertion index past the end appends.
//!
//! ## Minimal example
//!
//! ```
//! use understory_reorder::ContainerRegistry;
//!
//! let mut registry =
//!     ContainerRegistry::from_containers([("todo", vec!['a', 'b', 'c']), ("done", vec![])])
//!         .unwrap();
//!
//! assert_eq!(registry.locate(&'b'), Some(&"todo"));
//!
//! // Move `a` to the end of its own column.
//! registry.move_within(&"todo", 0, 2).unwrap();
//! assert_eq!(registry.sequence_of(&"todo"), Some(&['b', 'c', 'a'][..]));
//!
//! // Out-of-range insertion indices are clamped.
//! registry.remove(&"todo", &'c');
//! assert_eq!(registry.insert_at(&"done", 'c', 99), Ok(0));
//! assert_eq!(registry.sequence_of(&"done"), Some(&['c'][..]));
//! ```

use alloc::vec::Vec;
use smallvec::SmallVec;

use crate::error::ReorderError;
use crate::target::Location;

/// Most boards have a handful of columns; keep those inline.
const INLINE_CONTAINERS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Container<C, I> {
    id: C,
    items: Vec<I>,
}

/// Ordered item sequences keyed by container identifier.
///
/// Containers keep their registration order, which is also the order of
/// [`ContainerRegistry::containers`]. Lookups are linear scans: item
/// identifiers only need `PartialEq`, and the expected sizes (a few containers,
/// tens to hundreds of items) make a scan cheaper than maintaining an index
/// that every move would have to patch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerRegistry<C, I> {
    containers: SmallVec<[Container<C, I>; INLINE_CONTAINERS]>,
}

impl<C, I> Default for ContainerRegistry<C, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, I> ContainerRegistry<C, I> {
    /// Creates a registry with no containers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            containers: SmallVec::new(),
        }
    }

    /// Returns the number of registered containers.
    #[must_use]
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Returns the total number of items across all containers.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.containers.iter().map(|c| c.items.len()).sum()
    }

    /// Returns the container identifiers in registration order.
    pub fn container_ids(&self) -> impl Iterator<Item = &C> + '_ {
        self.containers.iter().map(|c| &c.id)
    }

    /// Returns every container with its current sequence, in registration order.
    ///
    /// This is the snapshot a presentation layer renders from.
    pub fn containers(&self) -> impl Iterator<Item = (&C, &[I])> + '_ {
        self.containers.iter().map(|c| (&c.id, c.items.as_slice()))
    }
}

impl<C, I> ContainerRegistry<C, I>
where
    C: Clone + PartialEq,
    I: PartialEq,
{
    /// Builds a registry from `(container, items)` pairs.
    ///
    /// Fails with [`ReorderError::DuplicateContainer`] or
    /// [`ReorderError::DuplicateItem`] if the input breaks the partition
    /// invariant. Uniqueness is checked by scanning, so this is quadratic in
    /// the number of items; see `from_containers_hashed` (behind the
    /// `hashbrown` feature) for large inputs.
    pub fn from_containers<T, S>(containers: T) -> Result<Self, ReorderError<C, I>>
    where
        T: IntoIterator<Item = (C, S)>,
        S: IntoIterator<Item = I>,
    {
        let mut registry = Self::new();
        for (id, items) in containers {
            registry.insert_container(id, items)?;
        }
        Ok(registry)
    }

    /// Registers a new container holding `items`, appended after existing containers.
    ///
    /// On error the registry is left unchanged.
    pub fn insert_container<S>(&mut self, id: C, items: S) -> Result<(), ReorderError<C, I>>
    where
        S: IntoIterator<Item = I>,
    {
        if self.container(&id).is_some() {
            return Err(ReorderError::DuplicateContainer(id));
        }
        let mut accepted: Vec<I> = Vec::new();
        for item in items {
            if accepted.contains(&item) || self.contains(&item) {
                return Err(ReorderError::DuplicateItem(item));
            }
            accepted.push(item);
        }
        self.containers.push(Container {
            id,
            items: accepted,
        });
        Ok(())
    }

    /// Returns the container currently holding `item`, if any.
    ///
    /// `None` means the item is not tracked (any more); callers treat that as
    /// "nothing to do", not as a failure.
    #[must_use]
    pub fn locate(&self, item: &I) -> Option<&C> {
        self.containers
            .iter()
            .find(|c| c.items.contains(item))
            .map(|c| &c.id)
    }

    /// Returns the container and index currently holding `item`, if any.
    #[must_use]
    pub fn find(&self, item: &I) -> Option<Location<C>> {
        self.containers.iter().find_map(|c| {
            c.items
                .iter()
                .position(|i| i == item)
                .map(|index| Location::new(c.id.clone(), index))
        })
    }

    /// Returns `true` if any container holds `item`.
    #[must_use]
    pub fn contains(&self, item: &I) -> bool {
        self.locate(item).is_some()
    }

    /// Returns the index of `item` within `container`, if it is there.
    #[must_use]
    pub fn index_of(&self, container: &C, item: &I) -> Option<usize> {
        self.container(container)?
            .items
            .iter()
            .position(|i| i == item)
    }

    /// Returns the ordered sequence of `container`, or `None` if it is not registered.
    #[must_use]
    pub fn sequence_of(&self, container: &C) -> Option<&[I]> {
        self.container(container).map(|c| c.items.as_slice())
    }

    /// Returns `true` if `container` is registered and holds no items.
    ///
    /// Hosts typically render a "drop items here" placeholder in this case.
    #[must_use]
    pub fn is_container_empty(&self, container: &C) -> bool {
        self.sequence_of(container).is_some_and(<[I]>::is_empty)
    }

    /// Removes `item` from `container`, returning the index it occupied.
    ///
    /// Does nothing and returns `None` if the container is unknown or does not
    /// hold the item. The relative order of the remaining items is preserved.
    pub fn remove(&mut self, container: &C, item: &I) -> Option<usize> {
        let items = &mut self.container_mut(container)?.items;
        let index = items.iter().position(|i| i == item)?;
        items.remove(index);
        Some(index)
    }

    /// Inserts `item` into `container` at `index`, clamped to `[0, len]`.
    ///
    /// Returns the index actually used. The index is never rejected; only an
    /// unknown container or an item that is already tracked (anywhere) fails.
    pub fn insert_at(
        &mut self,
        container: &C,
        item: I,
        index: usize,
    ) -> Result<usize, ReorderError<C, I>> {
        if self.contains(&item) {
            return Err(ReorderError::DuplicateItem(item));
        }
        let Some(target) = self.container_mut(container) else {
            return Err(ReorderError::UnknownContainer(container.clone()));
        };
        let index = index.min(target.items.len());
        target.items.insert(index, item);
        Ok(index)
    }

    /// Inserts `item` into `container` at exactly `index`.
    ///
    /// This is the unclamped form of [`ContainerRegistry::insert_at`] for
    /// callers that validate their own indices; an index past the end fails
    /// with [`ReorderError::InvalidIndex`] and leaves the registry unchanged.
    pub fn insert_at_exact(
        &mut self,
        container: &C,
        item: I,
        index: usize,
    ) -> Result<(), ReorderError<C, I>> {
        let len = self
            .sequence_of(container)
            .map(<[I]>::len)
            .ok_or_else(|| ReorderError::UnknownContainer(container.clone()))?;
        if index > len {
            return Err(ReorderError::InvalidIndex { index, len });
        }
        self.insert_at(container, item, index).map(|_| ())
    }

    /// Moves the element at `from` so that it ends up at `to`.
    ///
    /// `to` is interpreted against the sequence with the element removed
    /// ("move", not "swap") and is clamped to the last slot. Returns `Ok(false)`
    /// when nothing moved, which includes `from == to`. An out-of-range `from`
    /// fails with [`ReorderError::InvalidIndex`].
    pub fn move_within(
        &mut self,
        container: &C,
        from: usize,
        to: usize,
    ) -> Result<bool, ReorderError<C, I>> {
        let Some(target) = self.container_mut(container) else {
            return Err(ReorderError::UnknownContainer(container.clone()));
        };
        let len = target.items.len();
        if from >= len {
            return Err(ReorderError::InvalidIndex { index: from, len });
        }
        let to = to.min(len - 1);
        if from == to {
            return Ok(false);
        }
        // A move is a rotation of the span between the two slots.
        if from < to {
            target.items[from..=to].rotate_left(1);
        } else {
            target.items[to..=from].rotate_right(1);
        }
        Ok(true)
    }

    /// Moves `item` from wherever it is into `container` at `index`.
    ///
    /// `index` is clamped to the destination length after `item` has been
    /// removed, so within a single container this matches
    /// [`ContainerRegistry::move_within`]. Returns the item's new location.
    ///
    /// Fails with [`ReorderError::OrphanedItem`] if no container holds the item
    /// and with [`ReorderError::UnknownContainer`] if the destination is not
    /// registered; in both cases nothing changes.
    pub fn move_to(
        &mut self,
        item: &I,
        container: &C,
        index: usize,
    ) -> Result<Location<C>, ReorderError<C, I>>
    where
        I: Clone,
    {
        let Some(dest) = self.position_of_container(container) else {
            return Err(ReorderError::UnknownContainer(container.clone()));
        };
        let Some((source, from)) = self.containers.iter().enumerate().find_map(|(slot, c)| {
            c.items.iter().position(|i| i == item).map(|at| (slot, at))
        }) else {
            return Err(ReorderError::OrphanedItem(item.clone()));
        };
        let moved = self.containers[source].items.remove(from);
        let items = &mut self.containers[dest].items;
        let index = index.min(items.len());
        items.insert(index, moved);
        Ok(Location::new(container.clone(), index))
    }

    fn container(&self, id: &C) -> Option<&Container<C, I>> {
        self.containers.iter().find(|c| &c.id == id)
    }

    fn container_mut(&mut self, id: &C) -> Option<&mut Container<C, I>> {
        self.containers.iter_mut().find(|c| &c.id == id)
    }

    fn position_of_container(&self, id: &C) -> Option<usize> {
        self.containers.iter().position(|c| &c.id == id)
    }
}

#[cfg(feature = "hashbrown")]
impl<C, I> ContainerRegistry<C, I>
where
    C: Clone + Eq + core::hash::Hash,
    I: Clone + Eq + core::hash::Hash,
{
    /// Builds a registry from `(container, items)` pairs, validating uniqueness by hashing.
    ///
    /// Behaves like [`ContainerRegistry::from_containers`] but checks the
    /// partition invariant in linear time, which matters when seeding a registry
    /// with thousands of items. The first repeated identifier is reported.
    pub fn from_containers_hashed<T, S>(containers: T) -> Result<Self, ReorderError<C, I>>
    where
        T: IntoIterator<Item = (C, S)>,
        S: IntoIterator<Item = I>,
    {
        let mut registry = Self::new();
        for (id, items) in containers {
            registry.containers.push(Container {
                id,
                items: items.into_iter().collect(),
            });
        }
        registry.check_unique_hashed()?;
        Ok(registry)
    }

    fn check_unique_hashed(&self) -> Result<(), ReorderError<C, I>> {
        use hashbrown::HashSet;

        let mut seen_containers = HashSet::with_capacity(self.containers.len());
        for container in &self.containers {
            if !seen_containers.insert(&container.id) {
                return Err(ReorderError::DuplicateContainer(container.id.clone()));
            }
        }

        let mut seen_items = HashSet::with_capacity(self.item_count());
        for item in self.containers.iter().flat_map(|c| c.items.iter()) {
            if !seen_items.insert(item) {
                return Err(ReorderError::DuplicateItem(item.clone()));
            }
        }
        Ok(())
    }
}
