// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reorder --heading-base-level=0

//! Understory Reorder: drag-to-reorder state for ordered lists.
//!
//! This crate handles the _bookkeeping_ of dragging items between ordered
//! lists, such as the columns of a kanban board or a pair of "available" and
//! "selected" lists. Given a set of named sequences and a stream of drag events,
//! it computes the live preview order while the drag is in progress and the
//! final placement when it ends, moving the item across containers if needed.
//!
//! It does **not** know about pixels, hit testing, animation or any particular
//! input system. Hosts are responsible for:
//!
//! - Deciding what the pointer (or keyboard cursor) is over, and reducing that to
//!   a [`HoverTarget`]: an item, a container, or nothing.
//! - Feeding start/move/end/cancel events to a [`ReorderCoordinator`].
//! - Re-rendering from [`ReorderCoordinator::registry`] when
//!   [`ReorderCoordinator::revision`] changes.
//!
//! The pieces, from the bottom up:
//!
//! - [`ContainerRegistry`]: container identifiers mapped to ordered item
//!   sequences, with the "every item lives in exactly one container" invariant
//!   enforced on insertion and clamping (not rejecting) insertion indices.
//! - [`resolve`]: a pure function mapping an active item and a hover target to a
//!   destination [`Placement`].
//! - [`ReorderCoordinator`]: the idle/dragging state machine that applies
//!   resolved placements as live previews, commits on release, and rolls back
//!   on cancel.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_reorder::{
//!     ContainerRegistry, HoverTarget, InteractionEvent, ReorderCoordinator,
//! };
//!
//! let registry = ContainerRegistry::from_containers([
//!     ("todo", vec!["write docs", "fix bug", "review"]),
//!     ("done", vec![]),
//! ])
//! .unwrap();
//! let mut board = ReorderCoordinator::new(registry);
//!
//! // Drag "fix bug" into the empty "done" column.
//! board.handle(InteractionEvent::Start { active: "fix bug" }).unwrap();
//! board
//!     .handle(InteractionEvent::Move { hover: HoverTarget::Container("done") })
//!     .unwrap();
//! assert_eq!(board.over_container(), Some(&"done"));
//! board
//!     .handle(InteractionEvent::End { hover: HoverTarget::Container("done") })
//!     .unwrap();
//!
//! assert_eq!(board.sequence_of(&"todo"), Some(&["write docs", "review"][..]));
//! assert_eq!(board.sequence_of(&"done"), Some(&["fix bug"][..]));
//! ```
//!
//! ## Cancelling
//!
//! Live previews are speculative. Cancelling restores the dragged item to the
//! exact container and index it was picked up from:
//!
//! ```rust
//! use understory_reorder::{ContainerRegistry, HoverTarget, ReorderCoordinator};
//!
//! let registry =
//!     ContainerRegistry::from_containers([("a", vec![1, 2, 3]), ("b", vec![4, 5])]).unwrap();
//! let mut board = ReorderCoordinator::new(registry);
//!
//! board.start(2).unwrap();
//! board.drag_over(HoverTarget::Item(5));
//! assert_eq!(board.sequence_of(&"b"), Some(&[4, 2, 5][..]));
//!
//! board.cancel();
//! assert_eq!(board.sequence_of(&"a"), Some(&[1, 2, 3][..]));
//! assert_eq!(board.sequence_of(&"b"), Some(&[4, 5][..]));
//! ```
//!
//! ## Policies
//!
//! [`ReorderConfig`] selects what a release over nothing does
//! ([`ReleasePolicy`]) and whether same-container moves are previewed live
//! ([`PreviewMode`]).
//!
//! ## Features
//!
//! - `hashbrown`: linear-time uniqueness validation in
//!   `ContainerRegistry::from_containers_hashed`.
//! - `tracing`: emit `tracing` events for session start, preview, commit and rollback.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod coordinator;
pub mod error;
pub mod event;
pub mod registry;
pub mod resolve;
pub mod target;

pub use config::{PreviewMode, ReleasePolicy, ReorderConfig};
pub use coordinator::ReorderCoordinator;
pub use error::ReorderError;
pub use event::{DragOutcome, InteractionEvent};
pub use registry::ContainerRegistry;
pub use resolve::{Resolution, hover_container, resolve};
pub use target::{HoverTarget, Location, Placement};
