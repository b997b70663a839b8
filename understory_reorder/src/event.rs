// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction events fed to the coordinator and the outcomes it reports.

use crate::target::{HoverTarget, Location};

/// One input event from the host's pointer or keyboard handling.
///
/// Events are delivered one at a time; each is fully processed before the next.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum InteractionEvent<C, I> {
    /// A drag gesture picked up `active`.
    Start {
        /// The item being dragged.
        active: I,
    },
    /// The pointer moved; `hover` is what it is over now.
    Move {
        /// Current hover target.
        hover: HoverTarget<C, I>,
    },
    /// The gesture was released over `hover`.
    End {
        /// Hover target at release.
        hover: HoverTarget<C, I>,
    },
    /// The gesture was cancelled (for example with Escape).
    Cancel,
}

/// What a single event did.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragOutcome<C> {
    /// A session started with the item at `origin`.
    Started {
        /// Where the item was picked up.
        origin: Location<C>,
    },
    /// A live preview moved the item.
    Previewed {
        /// The item's new provisional location.
        location: Location<C>,
    },
    /// The event was handled but the sequences did not change.
    Unchanged,
    /// The session ended with the item at `location`.
    Committed {
        /// Final location.
        location: Location<C>,
    },
    /// The session ended by restoring the item to its origin.
    Reverted {
        /// The restored location (the origin).
        location: Location<C>,
    },
    /// There was no session to apply the event to, or it could no longer be
    /// continued; the sequences are unchanged.
    Ignored,
}

impl<C> DragOutcome<C> {
    /// Returns `true` if this outcome ended a session.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Committed { .. } | Self::Reverted { .. })
    }

    /// Returns the location reported by this outcome, if any.
    #[must_use]
    pub fn location(&self) -> Option<&Location<C>> {
        match self {
            Self::Started { origin: location }
            | Self::Previewed { location }
            | Self::Committed { location }
            | Self::Reverted { location } => Some(location),
            Self::Unchanged | Self::Ignored => None,
        }
    }
}
