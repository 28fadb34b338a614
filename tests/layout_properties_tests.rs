//! Layout invariants checked through the public API over a spread of
//! table shapes and option combinations.

use paperplot::array::ArrayInput;
use paperplot::layout::{LayoutOptions, layout, layout_data};
use paperplot::table::Table;

const EPS: f64 = 1e-9;

/// Deterministic table with mixed signs so stacking is non-trivial.
fn table(groups: usize, entries: usize) -> Table {
    let rows: Vec<Vec<f64>> = (0..groups)
        .map(|g| {
            (0..entries)
                .map(|e| {
                    let v = ((g * 7 + e * 3) % 11) as f64 - 2.0;
                    v * 0.5
                })
                .collect()
        })
        .collect();
    Table::from_rows(&rows).unwrap()
}

fn shapes() -> impl Iterator<Item = (usize, usize)> {
    (1..=5).flat_map(|g| (1..=4).map(move |e| (g, e)))
}

#[test]
fn stacked_heights_sum_to_row_sums() {
    for (g, e) in shapes() {
        let table = table(g, e);
        let result = layout(&table, &LayoutOptions::stacked()).unwrap();

        for (group, sum) in table.row_sums().into_iter().enumerate() {
            let total: f64 = result.group_rects(group).map(|r| r.height).sum();
            assert!((total - sum).abs() < EPS, "shape {g}x{e}, group {group}");
        }
    }
}

#[test]
fn stacked_bottoms_are_prefix_sums() {
    for (g, e) in shapes() {
        let table = table(g, e);
        let result = layout(&table, &LayoutOptions::stacked()).unwrap();

        for group in 0..g {
            let mut running = 0.0;
            for (entry, rect) in result.group_rects(group).enumerate() {
                assert!((rect.bottom - running).abs() < EPS, "shape {g}x{e}, g{group} e{entry}");
                running += table.value(group, entry);
            }
        }
    }
}

#[test]
fn stacked_bars_share_one_column_per_group() {
    let xticks = [0.0, 2.5, 3.0, 10.0];
    let options = LayoutOptions::stacked().with_xticks(xticks).with_width(0.6);
    let result = layout(&table(4, 3), &options).unwrap();

    for (group, x) in xticks.iter().enumerate() {
        for rect in result.group_rects(group) {
            assert!((rect.center_x() - x).abs() < EPS);
            assert!((rect.width - 0.6).abs() < EPS);
        }
    }
}

#[test]
fn clustered_full_width_slots_are_contiguous() {
    for (g, e) in shapes() {
        let result = layout(&table(g, e), &LayoutOptions::clustered()).unwrap();

        for group in 0..g {
            let rects: Vec<_> = result.group_rects(group).collect();
            let x = result.xticks()[group];
            assert!((rects[0].left - (x - 0.4)).abs() < EPS);
            assert!((rects[e - 1].right() - (x + 0.4)).abs() < EPS);
            for pair in rects.windows(2) {
                assert!((pair[0].right() - pair[1].left).abs() < EPS);
            }
            assert!(rects.iter().all(|r| r.bottom == 0.0));
        }
    }
}

#[test]
fn clustered_shrink_keeps_bars_centered_in_slots() {
    for shrink in [0.25, 0.5, 0.8, 1.0] {
        let options = LayoutOptions::clustered().with_cluster_shrink(shrink);
        let result = layout(&table(3, 4), &options).unwrap();
        let slot = 0.8 / 4.0;

        for group in 0..3 {
            let x = result.xticks()[group];
            for (entry, rect) in result.group_rects(group).enumerate() {
                let slot_center = x - 0.4 + slot * (entry as f64 + 0.5);
                assert!((rect.center_x() - slot_center).abs() < EPS);
                assert!((rect.width - slot * shrink).abs() < EPS);
            }
        }
    }
}

#[test]
fn layout_is_idempotent() {
    let data: ArrayInput = vec![vec![1.0, 3.0], vec![2.0, 4.0], vec![3.5, 1.5]].into();
    let options = LayoutOptions::clustered().with_cluster_shrink(0.7);
    assert_eq!(
        layout_data(&data, &options).unwrap(),
        layout_data(&data, &options).unwrap()
    );
}

#[test]
fn single_cell_table() {
    let result = layout(&table(1, 1), &LayoutOptions::clustered()).unwrap();
    let rect = result.rect(0, 0);
    assert!((rect.left + 0.4).abs() < EPS);
    assert!((rect.width - 0.8).abs() < EPS);
    assert_eq!(result.xlim(), [-1.0, 1.0]);
}
