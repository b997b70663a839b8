// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinator policies.

/// What happens when a drag is released over nothing droppable.
///
/// UIs disagree here, so it is a policy rather than a rule.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReleasePolicy {
    /// Keep the item wherever the last live preview placed it.
    ///
    /// This is the default: once the user has watched the item move into a new
    /// slot, snapping it back after release is surprising.
    #[default]
    KeepLivePlacement,
    /// Roll back to the position the item had when the drag started, exactly
    /// as a cancel would.
    RevertToOrigin,
}

/// Which hover changes mutate the sequences while a drag is in progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PreviewMode {
    /// Every resolved hover is applied immediately, within and across containers.
    #[default]
    Live,
    /// Only moves into another container are applied while dragging.
    ///
    /// Reordering within the current container is left to the host (typically
    /// as a visual transform) and applied when the drag ends.
    CrossContainerOnly,
}

/// Configuration for a [`ReorderCoordinator`](crate::ReorderCoordinator).
///
/// ```
/// use understory_reorder::{PreviewMode, ReleasePolicy, ReorderConfig};
///
/// let config = ReorderConfig::new()
///     .with_release(ReleasePolicy::RevertToOrigin)
///     .with_preview(PreviewMode::CrossContainerOnly);
/// assert_eq!(config.release, ReleasePolicy::RevertToOrigin);
/// assert_ne!(config, ReorderConfig::default());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReorderConfig {
    /// Behavior when a drag ends over nothing droppable.
    pub release: ReleasePolicy,
    /// Which hover changes are previewed live.
    pub preview: PreviewMode,
}

impl ReorderConfig {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            release: ReleasePolicy::KeepLivePlacement,
            preview: PreviewMode::Live,
        }
    }

    /// Sets the release policy.
    #[must_use]
    pub const fn with_release(mut self, release: ReleasePolicy) -> Self {
        self.release = release;
        self
    }

    /// Sets the preview mode.
    #[must_use]
    pub const fn with_preview(mut self, preview: PreviewMode) -> Self {
        self.preview = preview;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_matches_default() {
        assert_eq!(ReorderConfig::new(), ReorderConfig::default());
    }
}
