// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder coordinator: the drag session state machine.
//!
//! [`ReorderCoordinator`] owns a [`ContainerRegistry`] and at most one drag
//! session. It is idle until [`start`](ReorderCoordinator::start), applies live
//! previews on [`drag_over`](ReorderCoordinator::drag_over), and returns to idle
//! on [`end`](ReorderCoordinator::end) or [`cancel`](ReorderCoordinator::cancel).
//!
//! ## Usage
//!
//! 1) Build the coordinator from the initial sequences.
//! 2) Feed it the host's drag events, either through the individual methods or
//!    through [`ReorderCoordinator::handle`].
//! 3) After each event, re-render from [`ReorderCoordinator::registry`]. The
//!    [`revision`](ReorderCoordinator::revision) counter only moves when a
//!    sequence actually changed, so hosts can skip redundant work.
//!
//! ## Session rules
//!
//! - The origin (container *and* index) is captured at start. Cancel restores
//!   it exactly, undoing every live preview of the session.
//! - A hover that the live sequences already reflect is not applied again, so
//!   repeated move events over the same target are free and a release over
//!   that target commits the preview as-is.
//! - A release over a different target resolves it against the current state
//!   and applies it, which also corrects previews that were skipped
//!   ([`PreviewMode::CrossContainerOnly`]) or never delivered.
//! - A release over nothing follows the configured [`ReleasePolicy`].
//!
//! ## Minimal example
//!
//! ```
//! use understory_reorder::{
//!     ContainerRegistry, DragOutcome, HoverTarget, Location, ReorderCoordinator,
//! };
//!
//! let registry =
//!     ContainerRegistry::from_containers([("a", vec!['a', 'b', 'c']), ("b", vec!['d', 'e'])])
//!         .unwrap();
//! let mut board = ReorderCoordinator::new(registry);
//!
//! board.start('b').unwrap();
//! assert_eq!(board.active(), Some(&'b'));
//!
//! // Hovering `e` previews `b` in its slot.
//! board.drag_over(HoverTarget::Item('e'));
//! assert_eq!(board.sequence_of(&"b"), Some(&['d', 'b', 'e'][..]));
//!
//! // Releasing over the same target commits the preview.
//! let outcome = board.end(HoverTarget::Item('e'));
//! assert_eq!(outcome, DragOutcome::Committed { location: Location::new("b", 1) });
//! assert_eq!(board.sequence_of(&"a"), Some(&['a', 'c'][..]));
//! assert!(!board.is_dragging());
//! ```

use core::fmt::Debug;

use crate::config::{PreviewMode, ReleasePolicy, ReorderConfig};
use crate::error::ReorderError;
use crate::event::{DragOutcome, InteractionEvent};
use crate::registry::ContainerRegistry;
use crate::resolve::{hover_container, resolve};
use crate::target::{HoverTarget, Location};

#[derive(Clone, Debug)]
struct Session<C, I> {
    active: I,
    origin: Location<C>,
    /// Hover whose placement the live sequences currently reflect.
    applied: Option<HoverTarget<C, I>>,
    /// Container under the pointer, for highlighting.
    over: Option<C>,
}

/// Result of trying to place the active item for one hover.
enum Step<C> {
    Moved(Location<C>),
    Unmoved(Location<C>),
    /// Same-container target held back by [`PreviewMode::CrossContainerOnly`].
    Deferred,
    Unresolved,
    /// The active item is no longer tracked.
    Lost,
}

/// Drives drag-to-reorder sessions over a [`ContainerRegistry`].
#[derive(Clone, Debug)]
pub struct ReorderCoordinator<C, I> {
    registry: ContainerRegistry<C, I>,
    config: ReorderConfig,
    session: Option<Session<C, I>>,
    revision: u64,
}

impl<C, I> ReorderCoordinator<C, I> {
    /// Creates an idle coordinator with the default configuration.
    #[must_use]
    pub fn new(registry: ContainerRegistry<C, I>) -> Self {
        Self::with_config(registry, ReorderConfig::default())
    }

    /// Creates an idle coordinator with `config`.
    #[must_use]
    pub fn with_config(registry: ContainerRegistry<C, I>, config: ReorderConfig) -> Self {
        Self {
            registry,
            config,
            session: None,
            revision: 0,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> ReorderConfig {
        self.config
    }

    /// Replaces the configuration. Takes effect from the next event.
    pub fn set_config(&mut self, config: ReorderConfig) {
        self.config = config;
    }

    /// Returns the registry, including any live preview placement.
    #[must_use]
    pub fn registry(&self) -> &ContainerRegistry<C, I> {
        &self.registry
    }

    /// Returns the item being dragged, if a session is active.
    ///
    /// Hosts render their drag overlay from this.
    #[must_use]
    pub fn active(&self) -> Option<&I> {
        self.session.as_ref().map(|s| &s.active)
    }

    /// Returns where the active item was picked up, if a session is active.
    #[must_use]
    pub fn origin(&self) -> Option<&Location<C>> {
        self.session.as_ref().map(|s| &s.origin)
    }

    /// Returns the container under the pointer during a session, if any.
    #[must_use]
    pub fn over_container(&self) -> Option<&C> {
        self.session.as_ref().and_then(|s| s.over.as_ref())
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Returns a counter that is bumped whenever a sequence changes.
    ///
    /// No-op events leave it unchanged, so comparing revisions is a cheap way
    /// to decide whether to re-render.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<C, I> ReorderCoordinator<C, I>
where
    C: Clone + PartialEq + Debug,
    I: Clone + PartialEq + Debug,
{
    /// Returns the ordered sequence of `container`, including live previews.
    #[must_use]
    pub fn sequence_of(&self, container: &C) -> Option<&[I]> {
        self.registry.sequence_of(container)
    }

    /// Returns every container with its current sequence.
    pub fn containers(&self) -> impl Iterator<Item = (&C, &[I])> + '_ {
        self.registry.containers()
    }

    /// Returns mutable access to the registry while idle.
    ///
    /// Returns `None` during a session: the coordinator is the only writer
    /// until the session ends. The revision is bumped, since the caller may
    /// change any sequence.
    pub fn registry_mut(&mut self) -> Option<&mut ContainerRegistry<C, I>> {
        if self.session.is_some() {
            return None;
        }
        self.bump_revision();
        Some(&mut self.registry)
    }

    /// Rolls back any active session and returns the registry.
    #[must_use]
    pub fn into_registry(mut self) -> ContainerRegistry<C, I> {
        self.reset();
        self.registry
    }

    /// Applies one interaction event.
    ///
    /// Only [`InteractionEvent::Start`] can fail, see [`ReorderCoordinator::start`].
    pub fn handle(
        &mut self,
        event: InteractionEvent<C, I>,
    ) -> Result<DragOutcome<C>, ReorderError<C, I>> {
        match event {
            InteractionEvent::Start { active } => self.start(active),
            InteractionEvent::Move { hover } => Ok(self.drag_over(hover)),
            InteractionEvent::End { hover } => Ok(self.end(hover)),
            InteractionEvent::Cancel => Ok(self.cancel()),
        }
    }

    /// Starts a session dragging `active`.
    ///
    /// Fails with [`ReorderError::OrphanedItem`] if no container holds
    /// `active`; the coordinator then stays idle. A session that is still
    /// active is rolled back first.
    pub fn start(&mut self, active: I) -> Result<DragOutcome<C>, ReorderError<C, I>> {
        if self.session.is_some() {
            #[cfg(feature = "tracing")]
            tracing::debug!("drag started while a session was active; rolling it back");
            self.reset();
        }

        let Some(origin) = self.registry.find(&active) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(active = ?active, "drag start ignored: item is not tracked");
            return Err(ReorderError::OrphanedItem(active));
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            active = ?active,
            container = ?origin.container,
            index = origin.index,
            "drag started"
        );
        self.session = Some(Session {
            active,
            origin: origin.clone(),
            applied: None,
            over: None,
        });
        Ok(DragOutcome::Started { origin })
    }

    /// Applies a pointer move over `hover`.
    ///
    /// Resolves the hover and, if it maps to a new slot, moves the active item
    /// there as a live preview. Unresolved hovers change nothing.
    pub fn drag_over(&mut self, hover: HoverTarget<C, I>) -> DragOutcome<C> {
        let over = hover_container(&self.registry, &hover);
        let Some(session) = self.session.as_mut() else {
            return DragOutcome::Ignored;
        };
        session.over = over;
        if session.applied.as_ref() == Some(&hover) {
            return DragOutcome::Unchanged;
        }

        let active = session.active.clone();
        match self.place(&active, &hover, true) {
            Step::Moved(location) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    active = ?active,
                    container = ?location.container,
                    index = location.index,
                    "live preview"
                );
                self.mark_applied(hover);
                DragOutcome::Previewed { location }
            }
            Step::Unmoved(_) => {
                self.mark_applied(hover);
                DragOutcome::Unchanged
            }
            Step::Deferred | Step::Unresolved => DragOutcome::Unchanged,
            Step::Lost => self.abandon(),
        }
    }

    /// Ends the session with the pointer released over `hover`.
    pub fn end(&mut self, hover: HoverTarget<C, I>) -> DragOutcome<C> {
        let Some(session) = self.session.take() else {
            return DragOutcome::Ignored;
        };

        let step = if session.applied.as_ref() == Some(&hover) {
            match self.registry.find(&session.active) {
                Some(location) => Step::Unmoved(location),
                None => Step::Lost,
            }
        } else {
            self.place(&session.active, &hover, false)
        };

        match step {
            Step::Moved(location) | Step::Unmoved(location) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    active = ?session.active,
                    container = ?location.container,
                    index = location.index,
                    "drag committed"
                );
                DragOutcome::Committed { location }
            }
            Step::Deferred | Step::Unresolved => match self.config.release {
                ReleasePolicy::KeepLivePlacement => match self.registry.find(&session.active) {
                    Some(location) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(
                            active = ?session.active,
                            container = ?location.container,
                            index = location.index,
                            "drag released over nothing; keeping live placement"
                        );
                        DragOutcome::Committed { location }
                    }
                    None => DragOutcome::Ignored,
                },
                ReleasePolicy::RevertToOrigin => self.restore(session),
            },
            Step::Lost => DragOutcome::Ignored,
        }
    }

    /// Cancels the session, restoring the active item to its origin.
    pub fn cancel(&mut self) -> DragOutcome<C> {
        match self.session.take() {
            Some(session) => self.restore(session),
            None => DragOutcome::Ignored,
        }
    }

    /// Drops any active session, rolling back its live previews.
    pub fn reset(&mut self) {
        if let Some(session) = self.session.take() {
            let _ = self.restore(session);
        }
    }

    /// Resolves `hover` for `active` and applies it to the registry.
    ///
    /// `previewing` distinguishes intermediate moves (which honor
    /// [`PreviewMode`]) from the final release (which always applies).
    fn place(&mut self, active: &I, hover: &HoverTarget<C, I>, previewing: bool) -> Step<C> {
        let placement = match resolve(&self.registry, active, hover) {
            Ok(resolution) => match resolution.into_placement() {
                Some(placement) => placement,
                None => return Step::Unresolved,
            },
            Err(_) => return Step::Lost,
        };
        let Some(current) = self.registry.find(active) else {
            return Step::Lost;
        };

        if placement.container != current.container {
            return match self
                .registry
                .move_to(active, &placement.container, placement.index)
            {
                Ok(location) => {
                    self.bump_revision();
                    Step::Moved(location)
                }
                Err(_) => Step::Lost,
            };
        }

        if previewing && self.config.preview == PreviewMode::CrossContainerOnly {
            return Step::Deferred;
        }
        match self
            .registry
            .move_within(&current.container, current.index, placement.index)
        {
            Ok(true) => {
                self.bump_revision();
                match self.registry.find(active) {
                    Some(location) => Step::Moved(location),
                    None => Step::Lost,
                }
            }
            Ok(false) => Step::Unmoved(current),
            Err(_) => Step::Lost,
        }
    }

    /// Puts the session's active item back at its origin.
    fn restore(&mut self, session: Session<C, I>) -> DragOutcome<C> {
        let Session { active, origin, .. } = session;
        if self.registry.find(&active).as_ref() == Some(&origin) {
            #[cfg(feature = "tracing")]
            tracing::debug!(active = ?active, "drag reverted; already at origin");
            return DragOutcome::Reverted { location: origin };
        }
        match self.registry.move_to(&active, &origin.container, origin.index) {
            Ok(location) => {
                self.bump_revision();
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    active = ?active,
                    container = ?location.container,
                    index = location.index,
                    "drag reverted to origin"
                );
                DragOutcome::Reverted { location }
            }
            Err(_) => DragOutcome::Ignored,
        }
    }

    fn mark_applied(&mut self, hover: HoverTarget<C, I>) {
        if let Some(session) = self.session.as_mut() {
            session.applied = Some(hover);
        }
    }

    /// Ends a session whose active item disappeared from the registry.
    fn abandon(&mut self) -> DragOutcome<C> {
        #[cfg(feature = "tracing")]
        if let Some(session) = &self.session {
            tracing::warn!(active = ?session.active, "active item vanished; ending drag");
        }
        self.session = None;
        DragOutcome::Ignored
    }
}
