// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error taxonomy for registry mutation and session start.
//!
//! A hover target that cannot be mapped to a container is deliberately *not*
//! an error: it is reported as [`Resolution::Unresolved`](crate::Resolution::Unresolved)
//! and simply means "no visual change this frame".

use core::fmt;

/// Errors raised by the registry and by [`ReorderCoordinator::start`](crate::ReorderCoordinator::start).
///
/// None of these are fatal to the host: the worst case is that a session is
/// never entered, or that a direct registry call leaves the sequences untouched.
#[derive(Clone, PartialEq, Eq)]
pub enum ReorderError<C, I> {
    /// The item is not held by any container.
    ///
    /// Raised when a session is started for an untracked item; the coordinator
    /// stays idle.
    OrphanedItem(I),
    /// The container identifier is not registered.
    UnknownContainer(C),
    /// The item is already held by a container.
    ///
    /// Inserting it again would break the "one item, one container" partition.
    DuplicateItem(I),
    /// A container with this identifier is already registered.
    DuplicateContainer(C),
    /// An index outside `[0, len]` reached an unclamped path.
    ///
    /// The clamping entry points never produce this; only
    /// [`ContainerRegistry::insert_at_exact`](crate::ContainerRegistry::insert_at_exact)
    /// and an out-of-range `from` in
    /// [`ContainerRegistry::move_within`](crate::ContainerRegistry::move_within) do.
    InvalidIndex {
        /// The offending index.
        index: usize,
        /// Length of the sequence the index was checked against.
        len: usize,
    },
}

impl<C: fmt::Debug, I: fmt::Debug> fmt::Debug for ReorderError<C, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrphanedItem(item) => write!(f, "OrphanedItem({item:?})"),
            Self::UnknownContainer(container) => write!(f, "UnknownContainer({container:?})"),
            Self::DuplicateItem(item) => write!(f, "DuplicateItem({item:?})"),
            Self::DuplicateContainer(container) => write!(f, "DuplicateContainer({container:?})"),
            Self::InvalidIndex { index, len } => {
                write!(f, "InvalidIndex {{ index: {index}, len: {len} }}")
            }
        }
    }
}

impl<C: fmt::Debug, I: fmt::Debug> fmt::Display for ReorderError<C, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrphanedItem(item) => {
                write!(f, "item {item:?} is not held by any container")
            }
            Self::UnknownContainer(container) => {
                write!(f, "container {container:?} is not registered")
            }
            Self::DuplicateItem(item) => {
                write!(f, "item {item:?} is already held by a container")
            }
            Self::DuplicateContainer(container) => {
                write!(f, "container {container:?} is already registered")
            }
            Self::InvalidIndex { index, len } => {
                write!(f, "index {index} is out of range for a sequence of length {len}")
            }
        }
    }
}

impl<C: fmt::Debug, I: fmt::Debug> core::error::Error for ReorderError<C, I> {}
