// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests: random drag event streams never break the partition.

use proptest::prelude::*;
use understory_reorder::{
    ContainerRegistry, HoverTarget, InteractionEvent, PreviewMode, ReleasePolicy, ReorderConfig,
    ReorderCoordinator,
};

const CONTAINERS: [u8; 3] = [0, 1, 2];
const ITEMS: u32 = 8;

type Board = ReorderCoordinator<u8, u32>;

// ── Strategy helpers ──────────────────────────────────────────────────

/// Deals `ITEMS` items into the three containers in order.
fn arb_board() -> impl Strategy<Value = ContainerRegistry<u8, u32>> {
    proptest::collection::vec(0_u8..3, ITEMS as usize).prop_map(|assignment| {
        let mut columns: [Vec<u32>; 3] = Default::default();
        for (item, column) in (0..ITEMS).zip(assignment) {
            columns[usize::from(column)].push(item);
        }
        let [a, b, c] = columns;
        ContainerRegistry::from_containers([(0, a), (1, b), (2, c)]).unwrap()
    })
}

/// Hover targets include untracked items (`ITEMS..ITEMS + 2`) and an unknown container (7).
fn arb_hover() -> impl Strategy<Value = HoverTarget<u8, u32>> {
    prop_oneof![
        (0..ITEMS + 2).prop_map(HoverTarget::Item),
        prop_oneof![Just(0_u8), Just(1), Just(2), Just(7)].prop_map(HoverTarget::Container),
        Just(HoverTarget::None),
    ]
}

fn arb_event() -> impl Strategy<Value = InteractionEvent<u8, u32>> {
    prop_oneof![
        1 => (0..ITEMS + 1).prop_map(|active| InteractionEvent::Start { active }),
        6 => arb_hover().prop_map(|hover| InteractionEvent::Move { hover }),
        2 => arb_hover().prop_map(|hover| InteractionEvent::End { hover }),
        1 => Just(InteractionEvent::Cancel),
    ]
}

fn arb_config() -> impl Strategy<Value = ReorderConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(revert, cross_only)| {
        ReorderConfig::new()
            .with_release(if revert {
                ReleasePolicy::RevertToOrigin
            } else {
                ReleasePolicy::KeepLivePlacement
            })
            .with_preview(if cross_only {
                PreviewMode::CrossContainerOnly
            } else {
                PreviewMode::Live
            })
    })
}

fn sorted_items(board: &Board) -> Vec<u32> {
    let mut items: Vec<u32> = board
        .containers()
        .flat_map(|(_, items)| items.iter().copied())
        .collect();
    items.sort_unstable();
    items
}

fn snapshot(board: &Board) -> Vec<Vec<u32>> {
    CONTAINERS
        .iter()
        .map(|c| board.sequence_of(c).unwrap().to_vec())
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Partition: every item is held exactly once, after every event
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn partition_holds_after_every_event(
        registry in arb_board(),
        config in arb_config(),
        events in proptest::collection::vec(arb_event(), 0..40),
    ) {
        let expected: Vec<u32> = (0..ITEMS).collect();
        let mut board = ReorderCoordinator::with_config(registry, config);
        for event in events {
            let _ = board.handle(event);
            prop_assert_eq!(sorted_items(&board), expected.clone());
        }
        board.reset();
        prop_assert_eq!(sorted_items(&board), expected);
        prop_assert!(!board.is_dragging());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Rollback: cancel restores the state from before the session
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cancel_restores_pre_session_state(
        registry in arb_board(),
        config in arb_config(),
        active in 0..ITEMS,
        hovers in proptest::collection::vec(arb_hover(), 0..20),
    ) {
        let mut board = ReorderCoordinator::with_config(registry, config);
        let before = snapshot(&board);
        board.start(active).unwrap();
        for hover in hovers {
            let _ = board.drag_over(hover);
        }
        let _ = board.cancel();
        prop_assert_eq!(snapshot(&board), before);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Stability: only the active item changes position relative to others
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn other_items_keep_their_relative_order(
        registry in arb_board(),
        config in arb_config(),
        active in 0..ITEMS,
        hovers in proptest::collection::vec(arb_hover(), 0..20),
        release in arb_hover(),
    ) {
        let mut board = ReorderCoordinator::with_config(registry, config);
        let without_active = |board: &Board| -> Vec<Vec<u32>> {
            snapshot(board)
                .into_iter()
                .map(|column| column.into_iter().filter(|&i| i != active).collect())
                .collect()
        };
        let before = without_active(&board);
        board.start(active).unwrap();
        for hover in hovers {
            let _ = board.drag_over(hover);
        }
        let _ = board.end(release);
        prop_assert_eq!(without_active(&board), before);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. move_within(c, i, i) is the identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn move_within_same_index_is_identity(registry in arb_board()) {
        let mut registry = registry;
        let before = registry.clone();
        for container in CONTAINERS {
            let len = registry.sequence_of(&container).unwrap().len();
            for i in 0..len {
                prop_assert_eq!(registry.move_within(&container, i, i), Ok(false));
            }
        }
        prop_assert_eq!(registry, before);
    }
}
