// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Kanban reordering, driven from the keyboard.
//!
//! A host without a pointer walks a cursor over the board and reduces each
//! cursor position to a `HoverTarget`, exactly as a pointer host would after
//! hit testing. Session logs come from the `tracing` feature.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example kanban`

use tracing_subscriber::EnvFilter;
use understory_reorder::{
    ContainerRegistry, DragOutcome, HoverTarget, InteractionEvent, ReorderCoordinator,
};

type Board = ReorderCoordinator<&'static str, &'static str>;

fn print_board(board: &Board, label: &str) {
    println!("-- {label} (revision {})", board.revision());
    for (column, items) in board.containers() {
        let marker = if board.over_container() == Some(column) {
            "*"
        } else {
            " "
        };
        if items.is_empty() {
            println!("{marker} {column:>6}: (drop items here)");
        } else {
            println!("{marker} {column:>6}: {}", items.join(", "));
        }
    }
    if let Some(active) = board.active() {
        println!("  dragging: {active}");
    }
}

fn run(board: &mut Board, label: &str, events: Vec<InteractionEvent<&'static str, &'static str>>) {
    println!("\n== {label}");
    for event in events {
        let name = format!("{event:?}");
        match board.handle(event) {
            Ok(DragOutcome::Unchanged | DragOutcome::Ignored) => {}
            Ok(outcome) => print_board(board, &format!("{name} -> {outcome:?}")),
            Err(err) => println!("-- {name} failed: {err}"),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = ContainerRegistry::from_containers([
        ("todo", vec!["design", "build", "ship"]),
        ("doing", vec!["triage"]),
        ("done", vec![]),
    ])
    .expect("column items are unique");
    let mut board = ReorderCoordinator::new(registry);
    print_board(&board, "initial");

    // Pick up "build", arrow right into "doing" above "triage", then into the
    // empty "done" column, and drop there.
    run(
        &mut board,
        "move build to done",
        vec![
            InteractionEvent::Start { active: "build" },
            InteractionEvent::Move {
                hover: HoverTarget::Item("triage"),
            },
            InteractionEvent::Move {
                hover: HoverTarget::Container("done"),
            },
            InteractionEvent::End {
                hover: HoverTarget::Container("done"),
            },
        ],
    );

    // Reorder within a column: "ship" to the top of "todo".
    run(
        &mut board,
        "ship first",
        vec![
            InteractionEvent::Start { active: "ship" },
            InteractionEvent::Move {
                hover: HoverTarget::Item("design"),
            },
            InteractionEvent::End {
                hover: HoverTarget::Item("design"),
            },
        ],
    );

    // Escape halfway through: everything snaps back.
    run(
        &mut board,
        "cancelled drag",
        vec![
            InteractionEvent::Start { active: "triage" },
            InteractionEvent::Move {
                hover: HoverTarget::Item("build"),
            },
            InteractionEvent::Cancel,
        ],
    );

    // Picking up something that is not on the board never starts a session.
    run(
        &mut board,
        "unknown item",
        vec![InteractionEvent::Start { active: "ghost" }],
    );
}
