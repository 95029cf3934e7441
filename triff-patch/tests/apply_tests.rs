use std::collections::VecDeque;

use facet_testhelpers::test;
use triff::{Diff, DiffConfig, Difference, Differentiate, diff, diff_eq};
use triff_patch::{BinaryDiff, apply, patched, reduce};

#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Language(&'static str),
    Barcode(&'static str),
}

impl Differentiate for Cell {
    fn difference(&self, other: &Self) -> Difference {
        match (self, other) {
            (Cell::Language(a), Cell::Language(b)) | (Cell::Barcode(a), Cell::Barcode(b)) => {
                if a == b {
                    Difference::Nothing
                } else {
                    Difference::Some
                }
            }
            _ => Difference::Entire,
        }
    }
}

#[test]
fn reduced_scenario_rebuilds_the_target() {
    use Cell::{Barcode, Language};

    let before = vec![
        Language("en"),
        Language("fr"),
        Language("ge"),
        Barcode("1011"),
    ];
    let after = vec![
        Barcode("1011"),
        Language("en"),
        Language("jp"),
        Language("kr"),
        Language("fr"),
        Language("zh"),
    ];

    // Kept pairs that are only related keep their left content, so the result
    // lines up with `after` without being equal to it.
    let config = DiffConfig::new().find_moves(false);
    let diffs = diff(&before, &after, &config).unwrap();
    let ops = reduce(diffs.iter().map(Diff::cloned));
    assert_eq!(
        ops,
        vec![
            BinaryDiff::Remove { index: 3 },
            BinaryDiff::Add {
                element: Barcode("1011"),
                at_index: 0
            },
            BinaryDiff::Add {
                element: Language("en"),
                at_index: 1
            },
            BinaryDiff::Add {
                element: Language("zh"),
                at_index: 5
            },
        ]
    );

    let rebuilt = patched(&before, ops).unwrap();
    assert_eq!(
        rebuilt,
        vec![
            Barcode("1011"),
            Language("en"),
            Language("en"),
            Language("fr"),
            Language("ge"),
            Language("zh"),
        ]
    );
    for (got, want) in rebuilt.iter().zip(&after) {
        assert_ne!(got.difference(want), Difference::Entire);
    }
}

#[test]
fn moves_round_trip_through_a_deque() {
    let before: VecDeque<char> = "abcdef".chars().collect();
    let after: VecDeque<char> = "fabxde".chars().collect();

    let diffs = diff_eq(&before, &after, &DiffConfig::default()).unwrap();
    assert!(diffs.iter().any(|d| matches!(d, Diff::Moved { .. })));

    let mut target = before.clone();
    apply(&mut target, reduce(diffs.iter().map(Diff::cloned))).unwrap();
    assert_eq!(target, after);
}

#[test]
fn borrowed_ops_can_be_cloned_for_application() {
    let before = vec![1, 2, 3];
    let after = vec![3, 1, 2];

    let diffs = diff_eq(&before, &after, &DiffConfig::default()).unwrap();
    let borrowed: Vec<BinaryDiff<&i32>> = reduce(diffs);
    assert_eq!(
        borrowed,
        vec![
            BinaryDiff::Remove { index: 2 },
            BinaryDiff::Add {
                element: &3,
                at_index: 0
            },
        ]
    );

    let result = patched(&before, borrowed.iter().map(BinaryDiff::cloned)).unwrap();
    assert_eq!(result, after);
}

#[test]
fn empty_diff_is_a_no_op() {
    let items = vec!["same"];
    let diffs = diff_eq(&items, &items, &DiffConfig::default()).unwrap();
    let ops = reduce(diffs.iter().map(Diff::cloned));
    assert!(ops.is_empty());
    assert_eq!(patched(&items, ops).unwrap(), items);
}
