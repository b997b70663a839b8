// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement resolution: map a hover target to a destination slot.
//!
//! [`resolve`] is pure. It reads the registry, never mutates it, and returns the
//! same answer for the same registry state and inputs, so it is safe to call on
//! every pointer move.
//!
//! Index rules:
//!
//! - Hovering an item: the hovered item's current index, in whichever
//!   container holds it. Within the active item's own container this is a
//!   move destination, so the active item lands exactly in the hovered slot
//!   and the items in between shift by one. Hovering the active item itself
//!   yields its own index, which is a no-op.
//! - Hovering another container directly: that container's length (append).
//! - Hovering the active item's own container directly: its last slot.
//! - Hovering nothing, an unknown container or an untracked item:
//!   [`Resolution::Unresolved`].
//!
//! ## Minimal example
//!
//! ```
//! use understory_reorder::{ContainerRegistry, HoverTarget, Placement, Resolution, resolve};
//!
//! let registry =
//!     ContainerRegistry::from_containers([("a", vec![1, 2, 3]), ("b", vec![4, 5])]).unwrap();
//!
//! // Dragging 2 over 5 targets 5's slot in `b`.
//! let target = resolve(&registry, &2, &HoverTarget::Item(5)).unwrap();
//! assert_eq!(target, Resolution::Target(Placement::new("b", 1)));
//!
//! // Dragging over empty space resolves to nothing.
//! let target = resolve(&registry, &2, &HoverTarget::None).unwrap();
//! assert_eq!(target, Resolution::Unresolved);
//! ```

use crate::error::ReorderError;
use crate::registry::ContainerRegistry;
use crate::target::{HoverTarget, Placement};

/// Outcome of resolving a hover target.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Resolution<C> {
    /// The hover maps to a concrete destination.
    Target(Placement<C>),
    /// Nothing actionable under the pointer; leave the sequences alone.
    Unresolved,
}

impl<C> Resolution<C> {
    /// Returns the placement, if resolved.
    #[must_use]
    pub fn placement(&self) -> Option<&Placement<C>> {
        match self {
            Self::Target(placement) => Some(placement),
            Self::Unresolved => None,
        }
    }

    /// Consumes the resolution, returning the placement if resolved.
    #[must_use]
    pub fn into_placement(self) -> Option<Placement<C>> {
        match self {
            Self::Target(placement) => Some(placement),
            Self::Unresolved => None,
        }
    }

    /// Returns `true` if the hover mapped to a destination.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Target(_))
    }
}

/// Resolves where `active` would go if dropped on `hover`.
///
/// Fails with [`ReorderError::OrphanedItem`] if `active` is not held by any
/// container. Every other failure to map the hover is reported as
/// [`Resolution::Unresolved`]. Cost is linear in the total number of items.
pub fn resolve<C, I>(
    registry: &ContainerRegistry<C, I>,
    active: &I,
    hover: &HoverTarget<C, I>,
) -> Result<Resolution<C>, ReorderError<C, I>>
where
    C: Clone + PartialEq,
    I: Clone + PartialEq,
{
    let Some(home) = registry.locate(active) else {
        return Err(ReorderError::OrphanedItem(active.clone()));
    };

    let placement = match hover {
        HoverTarget::None => return Ok(Resolution::Unresolved),
        HoverTarget::Item(item) => match registry.find(item) {
            Some(over) => Placement::new(over.container, over.index),
            None => return Ok(Resolution::Unresolved),
        },
        HoverTarget::Container(container) => match registry.sequence_of(container) {
            // The active item is part of its own container, so its last slot is `len - 1`.
            Some(items) if container == home => {
                Placement::new(container.clone(), items.len().saturating_sub(1))
            }
            Some(items) => Placement::new(container.clone(), items.len()),
            None => return Ok(Resolution::Unresolved),
        },
    };
    Ok(Resolution::Target(placement))
}

/// Returns the container a hover target is over, if it maps to one.
///
/// Hosts use this to highlight the container under the pointer; it does not
/// depend on which item is being dragged.
#[must_use]
pub fn hover_container<C, I>(
    registry: &ContainerRegistry<C, I>,
    hover: &HoverTarget<C, I>,
) -> Option<C>
where
    C: Clone + PartialEq,
    I: PartialEq,
{
    match hover {
        HoverTarget::Item(item) => registry.locate(item).cloned(),
        HoverTarget::Container(container) => {
            registry.sequence_of(container).map(|_| container.clone())
        }
        HoverTarget::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn board() -> ContainerRegistry<&'static str, char> {
        ContainerRegistry::from_containers([
            ("a", vec!['a', 'b', 'c']),
            ("b", vec!['d', 'e']),
            ("empty", vec![]),
        ])
        .unwrap()
    }

    fn target(container: &'static str, index: usize) -> Resolution<&'static str> {
        Resolution::Target(Placement::new(container, index))
    }

    #[test]
    fn orphaned_active_item_is_an_error() {
        let registry = board();
        assert_eq!(
            resolve(&registry, &'z', &HoverTarget::Item('a')),
            Err(ReorderError::OrphanedItem('z'))
        );
        // Checked before the hover, even when the hover would be unresolved.
        assert_eq!(
            resolve(&registry, &'z', &HoverTarget::None),
            Err(ReorderError::OrphanedItem('z'))
        );
    }

    #[test]
    fn unresolvable_hovers() {
        let registry = board();
        assert_eq!(
            resolve(&registry, &'a', &HoverTarget::None),
            Ok(Resolution::Unresolved)
        );
        assert_eq!(
            resolve(&registry, &'a', &HoverTarget::Item('z')),
            Ok(Resolution::Unresolved)
        );
        assert_eq!(
            resolve(&registry, &'a', &HoverTarget::Container("nope")),
            Ok(Resolution::Unresolved)
        );
    }

    #[test]
    fn same_container_item_targets_its_slot() {
        let registry = board();
        assert_eq!(resolve(&registry, &'a', &HoverTarget::Item('c')), Ok(target("a", 2)));
        assert_eq!(resolve(&registry, &'c', &HoverTarget::Item('a')), Ok(target("a", 0)));
    }

    #[test]
    fn hovering_self_is_idempotent() {
        let registry = board();
        assert_eq!(resolve(&registry, &'b', &HoverTarget::Item('b')), Ok(target("a", 1)));
    }

    #[test]
    fn other_container_item_targets_its_slot() {
        let registry = board();
        assert_eq!(resolve(&registry, &'b', &HoverTarget::Item('e')), Ok(target("b", 1)));
        assert_eq!(resolve(&registry, &'b', &HoverTarget::Item('d')), Ok(target("b", 0)));
    }

    #[test]
    fn container_targets_append() {
        let registry = board();
        assert_eq!(
            resolve(&registry, &'b', &HoverTarget::Container("b")),
            Ok(target("b", 2))
        );
        assert_eq!(
            resolve(&registry, &'b', &HoverTarget::Container("empty")),
            Ok(target("empty", 0))
        );
        // Own container: the last slot, i.e. move to the end.
        assert_eq!(
            resolve(&registry, &'a', &HoverTarget::Container("a")),
            Ok(target("a", 2))
        );
    }

    #[test]
    fn resolve_does_not_mutate() {
        let registry = board();
        let before = registry.clone();
        let _ = resolve(&registry, &'a', &HoverTarget::Item('e'));
        let _ = resolve(&registry, &'a', &HoverTarget::Container("empty"));
        assert_eq!(registry, before);
    }

    #[test]
    fn hover_container_follows_the_pointer() {
        let registry = board();
        assert_eq!(hover_container(&registry, &HoverTarget::Item('e')), Some("b"));
        assert_eq!(
            hover_container(&registry, &HoverTarget::Container("empty")),
            Some("empty")
        );
        assert_eq!(hover_container(&registry, &HoverTarget::Container("nope")), None);
        assert_eq!(hover_container(&registry, &HoverTarget::Item('z')), None);
        assert_eq!(hover_container(&registry, &HoverTarget::None), None);
    }

    #[test]
    fn resolution_helpers() {
        let resolved = target("a", 1);
        assert!(resolved.is_resolved());
        assert_eq!(resolved.placement(), Some(&Placement::new("a", 1)));
        assert_eq!(resolved.into_placement(), Some(Placement::new("a", 1)));

        let unresolved = Resolution::<&str>::Unresolved;
        assert!(!unresolved.is_resolved());
        assert_eq!(unresolved.placement(), None);
    }
}
