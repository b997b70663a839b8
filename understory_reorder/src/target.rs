// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover targets and the positions they resolve to.

/// What the pointer (or keyboard cursor) is currently over.
///
/// Proximity ranking and hit testing happen in the host; by the time a target
/// reaches this crate it has already been reduced to one of these cases.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HoverTarget<C, I> {
    /// Over a specific item.
    Item(I),
    /// Over a container but not over any of its items (for example an empty
    /// column or the padding below the last item).
    Container(C),
    /// Over nothing droppable.
    #[default]
    None,
}

impl<C, I> HoverTarget<C, I> {
    /// Returns `true` for [`HoverTarget::None`].
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Converts an optional item into a hover target.
    #[must_use]
    pub fn from_item(item: Option<I>) -> Self {
        item.map_or(Self::None, Self::Item)
    }
}

/// Where an item currently sits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location<C> {
    /// Container holding the item.
    pub container: C,
    /// Index of the item within that container.
    pub index: usize,
}

impl<C> Location<C> {
    /// Creates a location.
    #[must_use]
    pub const fn new(container: C, index: usize) -> Self {
        Self { container, index }
    }
}

/// A resolved drop target.
///
/// When `container` is the container the active item already sits in,
/// `index` is the destination of a move (computed against the sequence with
/// the active item removed). Otherwise it is the insertion index in the
/// destination container.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement<C> {
    /// Destination container.
    pub container: C,
    /// Destination index.
    pub index: usize,
}

impl<C> Placement<C> {
    /// Creates a placement.
    #[must_use]
    pub const fn new(container: C, index: usize) -> Self {
        Self { container, index }
    }
}
