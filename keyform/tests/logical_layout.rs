// Copyright 2026 the Keyform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end conversions of whole layouts.

use keyform::{
    ClusterStrategy, Direction, Key, LogicalPos, PhysicalKey, Thresholds, compute_logical,
    find_neighbors, is_trusted, physical_to_logical, physical_to_logical_with, resolve_all,
};

fn row_of(xs: &[f64], y: f64) -> Vec<Key> {
    xs.iter().map(|&x| Key::new(x, y)).collect()
}

fn cols(keys: &[Key]) -> Vec<u32> {
    keys.iter().map(|k| k.col).collect()
}

fn rows(keys: &[Key]) -> Vec<u32> {
    keys.iter().map(|k| k.row).collect()
}

#[test]
fn unit_square_scenario() {
    let mut keys = vec![Key::new(0.0, 0.0), Key::new(1.0, 0.0), Key::new(0.0, 1.0)];
    physical_to_logical(&mut keys);
    assert_eq!(cols(&keys), [0, 1, 0]);
    assert_eq!(rows(&keys), [0, 0, 1]);
    assert_eq!(
        keys.iter().map(|k| (k.x, k.y)).collect::<Vec<_>>(),
        [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)],
        "already sorted input keeps its order"
    );
}

#[test]
fn empty_layout() {
    let mut keys: Vec<Key> = vec![];
    let layout = physical_to_logical(&mut keys);
    assert!(keys.is_empty());
    assert_eq!(layout.rows, 0);
    assert_eq!(layout.cols, 0);
}

#[test]
fn contiguous_grid_matches_positions() {
    // Shuffled 4x3 block.
    let mut keys = vec![];
    for &(x, y) in &[
        (3, 2),
        (0, 0),
        (2, 1),
        (1, 2),
        (3, 0),
        (0, 2),
        (1, 0),
        (2, 2),
        (0, 1),
        (3, 1),
        (1, 1),
        (2, 0),
    ] {
        keys.push(Key::new(f64::from(x), f64::from(y)));
    }
    let layout = physical_to_logical(&mut keys);
    assert_eq!(layout.strategy, ClusterStrategy::StandardGrid);
    assert_eq!((layout.rows, layout.cols), (3, 4));
    for key in &keys {
        assert_eq!(f64::from(key.col), key.x, "col of {key:?}");
        assert_eq!(f64::from(key.row), key.y, "row of {key:?}");
    }
    let order: Vec<LogicalPos> = keys.iter().map(Key::logical).collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);
}

#[test]
fn wide_split_reserves_an_empty_column() {
    // Centers 2.5 and 5.5 are 3U apart.
    let mut keys = row_of(&[0.0, 1.0, 2.0, 5.0, 6.0, 7.0], 0.0);
    let layout = physical_to_logical(&mut keys);
    assert_eq!(cols(&keys), [0, 1, 2, 4, 5, 6]);
    assert_eq!(layout.cols, 7);
}

#[test]
fn one_unit_split_needs_a_lower_gap_threshold() {
    // Centers 2.5 and 4.5 are 2U apart, under the default 2.5U.
    let mut keys = row_of(&[0.0, 1.0, 2.0, 4.0, 5.0, 6.0], 0.0);
    physical_to_logical(&mut keys);
    assert_eq!(cols(&keys), [0, 1, 2, 3, 4, 5]);

    let tight = Thresholds {
        gap_threshold: 1.0,
        ..Thresholds::default()
    };
    physical_to_logical_with(&mut keys, &tight);
    assert_eq!(cols(&keys), [0, 1, 2, 4, 5, 6]);
}

#[test]
fn vertical_gap_reserves_an_empty_row() {
    let mut keys = vec![Key::new(0.0, 0.0), Key::new(0.0, 1.0), Key::new(0.0, 4.0)];
    let layout = physical_to_logical(&mut keys);
    assert_eq!(rows(&keys), [0, 1, 3]);
    assert_eq!(layout.rows, 4);
}

#[test]
fn spacebar_takes_its_center_column() {
    let mut keys = row_of(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], 0.0);
    keys.push(Key::new(0.0, 1.0));
    // 6U spacebar starting at x=1: center 4.0.
    keys.push(Key::new(1.0, 1.0).with_size(6.0, 1.0));
    keys.push(Key::new(7.0, 1.0));
    physical_to_logical(&mut keys);

    let bottom: Vec<(f64, u32)> = keys
        .iter()
        .filter(|k| k.row == 1)
        .map(|k| (k.x, k.col))
        .collect();
    assert_eq!(bottom, [(0.0, 0), (1.0, 4), (7.0, 7)]);
    // The key whose origin matches the spacebar origin keeps its own column.
    let top_one = keys.iter().find(|k| k.row == 0 && k.x == 1.0).unwrap();
    assert_eq!(top_one.col, 1);
}

#[test]
fn tall_key_takes_its_center_row() {
    let mut keys = vec![
        // 3U tall key from y=0: center 1.5.
        Key::new(0.0, 0.0).with_size(1.0, 3.0),
        Key::new(1.0, 0.0),
        Key::new(1.0, 1.0),
        Key::new(1.0, 2.0),
    ];
    let layout = physical_to_logical(&mut keys);
    assert_eq!(layout.strategy, ClusterStrategy::StandardGrid);
    assert_eq!((layout.rows, layout.cols), (3, 2));

    let tall = keys.iter().find(|k| k.h == 3.0).unwrap();
    assert_eq!((tall.row, tall.col), (1, 0));
    let top = keys.iter().find(|k| k.x == 1.0 && k.y == 0.0).unwrap();
    assert_eq!((top.row, top.col), (0, 1));
    assert_eq!(rows(&keys), [0, 1, 1, 2]);
}

#[test]
fn opposite_facing_keys_do_not_share_a_row() {
    // The second key is turned half around its own center, so each key
    // sees the other as its right-hand neighbor.
    let mut keys = vec![
        Key::new(0.5, 0.0),
        Key::new(1.5, 0.0).with_rotation(180.0).with_origin(2.0, 0.5),
    ];
    let geometry = resolve_all(&keys);
    let table = find_neighbors(&geometry, &Thresholds::default());
    assert_eq!(table[0].index(Direction::Right), Some(1));
    assert_eq!(table[1].index(Direction::Right), Some(0));
    assert!(!is_trusted(&table, 0, Direction::Right));
    assert!(!is_trusted(&table, 1, Direction::Right));

    let layout = physical_to_logical(&mut keys);
    assert_eq!(layout.strategy, ClusterStrategy::Neighbor);
    assert_ne!(keys[0].row, keys[1].row);
    assert_eq!(layout.rows, 2);
}

#[test]
fn slightly_rotated_key_joins_its_row() {
    let mut keys = vec![
        Key::new(0.25, 0.0),
        Key::new(1.25, 0.0),
        Key::new(2.25, 0.0).with_rotation(10.0),
    ];
    let layout = physical_to_logical(&mut keys);
    assert_eq!(layout.strategy, ClusterStrategy::Neighbor);
    assert_eq!(rows(&keys), [0, 0, 0]);
    assert_eq!(cols(&keys), [0, 1, 2]);
}

#[test]
fn steeply_rotated_key_bypasses_alignment_check() {
    // Pivot at the key's own center so it stays at (1.6, 1.1).
    let rotated = Key::new(1.1, 0.6).with_rotation(75.0).with_origin(1.6, 1.1);
    let mut keys = vec![Key::new(0.0, 0.0), rotated];
    physical_to_logical(&mut keys);
    // 0.6U apart vertically, but the rotated key is trusted as stacked.
    assert_eq!(rows(&keys), [0, 0]);
    assert_eq!(cols(&keys), [0, 1]);

    // The same offset between two unrotated keys splits the row.
    let mut keys = vec![Key::new(0.0, 0.0), Key::new(1.1, 0.6)];
    physical_to_logical(&mut keys);
    assert_eq!(rows(&keys), [0, 1]);
    assert_eq!(cols(&keys), [0, 1]);
}

fn column_staggered() -> Vec<Key> {
    let stagger = [0.0, -0.25, -0.5, -0.25];
    let mut keys = vec![];
    for row in 0..3 {
        for (col, offset) in stagger.iter().enumerate() {
            keys.push(Key::new(col as f64, f64::from(row) + offset));
        }
    }
    keys
}

#[test]
fn column_stagger_keeps_rows_and_columns() {
    let mut keys = column_staggered();
    let layout = physical_to_logical(&mut keys);
    assert_eq!(layout.strategy, ClusterStrategy::Neighbor);
    assert_eq!((layout.rows, layout.cols), (3, 4));
    for key in &keys {
        assert_eq!(f64::from(key.col), key.x, "col of {key:?}");
        assert_eq!(f64::from(key.row), (key.y + 0.5).floor(), "row of {key:?}");
    }
}

#[test]
fn conversion_is_idempotent() {
    let mut keys = column_staggered();
    physical_to_logical(&mut keys);
    let first = keys.clone();

    // Scribble over the outputs; they must not feed back in.
    for key in &mut keys {
        key.row = 99;
        key.col = 42;
    }
    physical_to_logical(&mut keys);
    assert_eq!(keys, first);
}

#[test]
fn input_order_does_not_change_assignment() {
    let keys = column_staggered();
    let forward = compute_logical(&keys);

    let reversed: Vec<Key> = keys.iter().rev().copied().collect();
    let backward = compute_logical(&reversed);
    let mut backward_positions = backward.positions;
    backward_positions.reverse();
    assert_eq!(forward.positions, backward_positions);
}

#[test]
fn duplicate_positions_still_get_a_slot() {
    let mut keys = vec![Key::new(0.5, 0.0), Key::new(0.5, 0.0), Key::new(1.5, 0.0)];
    let layout = physical_to_logical(&mut keys);
    assert_eq!(layout.positions.len(), 3);
    // The stacked duplicate is not anyone's neighbor, so it ends up in a
    // cluster of its own on both axes rather than colliding.
    let mut seen: Vec<LogicalPos> = keys.iter().map(Key::logical).collect();
    seen.dedup();
    assert_eq!(seen.len(), 3);
    assert_eq!(layout.cols, 3);
}

/// A caller-owned key type with extra data.
#[derive(Debug)]
struct LabeledKey {
    label: &'static str,
    left: f64,
    top: f64,
    pos: Option<LogicalPos>,
}

impl PhysicalKey for LabeledKey {
    fn x(&self) -> f64 {
        self.left
    }
    fn y(&self) -> f64 {
        self.top
    }
    fn w(&self) -> f64 {
        1.0
    }
    fn h(&self) -> f64 {
        1.0
    }
    fn r(&self) -> f64 {
        0.0
    }
    fn rx(&self) -> Option<f64> {
        None
    }
    fn ry(&self) -> Option<f64> {
        None
    }
    fn set_logical(&mut self, pos: LogicalPos) {
        self.pos = Some(pos);
    }
}

#[test]
fn custom_key_types_are_sorted_in_place() {
    let key = |label, left, top| LabeledKey {
        label,
        left,
        top,
        pos: None,
    };
    let mut keys = vec![key("S", 1.0, 1.0), key("A", 0.0, 1.0), key("W", 1.0, 0.0)];
    physical_to_logical(&mut keys);
    let labels: Vec<_> = keys.iter().map(|k| k.label).collect();
    assert_eq!(labels, ["W", "A", "S"]);
    assert_eq!(keys[0].pos, Some(LogicalPos::new(0, 1)));
    assert_eq!(keys[1].pos, Some(LogicalPos::new(1, 0)));
    assert_eq!(keys[2].pos, Some(LogicalPos::new(1, 1)));
}
