// Integration tests for the step-sequence generators

use sortscope::snapshot::Snapshot;
use sortscope::sorting::{bubble, merge, quick, Algorithm};

fn collect(algorithm: Algorithm, input: &[i64]) -> Vec<Snapshot> {
    algorithm.steps(input).collect()
}

fn described(snapshots: &[Snapshot], prefix: &str) -> usize {
    snapshots
        .iter()
        .filter(|s| s.description.as_deref().is_some_and(|d| d.starts_with(prefix)))
        .count()
}

#[test]
fn test_empty_input_yields_only_terminal() {
    for algorithm in Algorithm::ALL {
        let snapshots = collect(algorithm, &[]);
        assert_eq!(snapshots.len(), 1, "{} emitted extra steps", algorithm);
        let last = &snapshots[0];
        assert!(last.done);
        assert_eq!(last.progress_percent, 100);
        assert!(last.values.is_empty());
        assert_eq!(last.focus, None);
        assert_eq!(last.compare_target, None);
    }
}

#[test]
fn test_bubble_sort_three_elements() {
    let snapshots: Vec<Snapshot> = bubble::steps(&[3, 1, 2]).collect();

    let first = &snapshots[0];
    assert_eq!(first.focus, Some(0));
    assert_eq!(first.compare_target, Some(1));
    assert_eq!(first.values, vec![3, 1, 2]);
    assert_eq!(first.sorted_boundary, Some(3));
    assert_eq!(first.progress_percent, 0);
    assert_eq!(first.description.as_deref(), Some("Comparing 3 and 1"));

    let swap = &snapshots[1];
    assert_eq!(swap.values, vec![1, 3, 2]);
    assert_eq!(swap.focus, Some(0));
    assert_eq!(swap.compare_target, Some(1));
    assert_eq!(swap.description.as_deref(), Some("Swapping 3 and 1"));

    let last = snapshots.last().expect("no snapshots");
    assert!(last.done);
    assert_eq!(last.values, vec![1, 2, 3]);
    assert_eq!(last.sorted_boundary, Some(0));
    assert_eq!(last.progress_percent, 100);
}

#[test]
fn test_bubble_sort_full_trace_on_sorted_input() {
    // No early exit: every pass still compares every unsorted pair
    let snapshots: Vec<Snapshot> = bubble::steps(&[1, 2, 3, 4]).collect();
    assert_eq!(described(&snapshots, "Comparing"), 3 + 2 + 1);
    assert_eq!(described(&snapshots, "Swapping"), 0);
    assert_eq!(snapshots.len(), 7);

    // Second pass reports one element finalized
    let second_pass = &snapshots[3];
    assert_eq!(second_pass.sorted_boundary, Some(3));
    assert_eq!(second_pass.progress_percent, 25);
}

#[test]
fn test_single_element_traces() {
    let bubble_steps = collect(Algorithm::Bubble, &[7]);
    assert_eq!(bubble_steps.len(), 1);

    let quick_steps = collect(Algorithm::Quick, &[7]);
    assert_eq!(quick_steps.len(), 2);
    assert_eq!(quick_steps[0].focus, Some(0));
    assert_eq!(quick_steps[0].pivot_index, Some(0));
    assert!(quick_steps[0].progress_percent < 100);
    assert!(quick_steps[1].done);
}

#[test]
fn test_quicksort_first_partition() {
    let input = [5, 3, 8, 4, 2];
    let snapshots: Vec<Snapshot> = quick::steps(&input).collect();

    let announce = &snapshots[0];
    assert_eq!(announce.range_low(), Some(0));
    assert_eq!(announce.range_high(), Some(4));
    assert_eq!(announce.pivot_index, None);

    let first_compare = snapshots
        .iter()
        .find(|s| s.pivot_index.is_some())
        .expect("no partition snapshot");
    assert_eq!(first_compare.pivot_index, Some(4));
    assert_eq!(first_compare.focus, Some(0));
    assert_eq!(first_compare.boundary_index, None);

    let placed = snapshots
        .iter()
        .find(|s| {
            s.description
                .as_deref()
                .is_some_and(|d| d.starts_with("Placing pivot"))
        })
        .expect("no pivot placement");
    let boundary = placed.boundary_index.expect("pivot placement without boundary");
    let high = placed.range_high().expect("pivot placement without range");
    let pivot = placed.values[boundary];
    assert_eq!(pivot, 2);
    assert!(placed.values[..boundary].iter().all(|&v| v <= pivot));
    assert!(placed.values[boundary + 1..=high].iter().all(|&v| v > pivot));

    let last = snapshots.last().expect("no snapshots");
    assert_eq!(last.values, vec![2, 3, 4, 5, 8]);
}

#[test]
fn test_quicksort_boundary_steps() {
    // [1, 3, 2]: 1 <= 2 moves the boundary, 3 does not
    let snapshots: Vec<Snapshot> = quick::steps(&[1, 3, 2]).collect();
    let descriptions: Vec<&str> = snapshots
        .iter()
        .filter_map(|s| s.description.as_deref())
        .collect();
    assert_eq!(descriptions[0], "Sorting index 0 - index 2");
    assert!(descriptions[1].starts_with("Comparing 1 <= pivot 2"));
    assert!(descriptions[2].starts_with("Incrementing boundary"));
    assert!(descriptions[3].starts_with("Swapping"));
    assert!(descriptions[4].starts_with("Comparing 3 <= pivot 2"));
    assert!(descriptions[5].starts_with("Placing pivot"));

    let swap = &snapshots[3];
    assert_eq!(swap.compare_target, Some(0));
    assert_eq!(swap.boundary_index, Some(0));
    assert_eq!(snapshots[5].values, vec![1, 2, 3]);
    assert_eq!(snapshots[5].boundary_index, Some(1));
}

#[test]
fn test_quicksort_visits_left_range_first() {
    // Pivot 3 lands in the middle, leaving [0, 1] and [3, 4]
    let snapshots = collect(Algorithm::Quick, &[5, 1, 4, 2, 3]);
    let ranges: Vec<(usize, usize)> = snapshots
        .iter()
        .filter(|s| {
            s.description
                .as_deref()
                .is_some_and(|d| d.starts_with("Sorting index"))
        })
        .filter_map(|s| Some((s.range_low()?, s.range_high()?)))
        .collect();
    assert_eq!(ranges, vec![(0, 4), (0, 1), (3, 4)]);
}

#[test]
fn test_merge_sort_two_elements() {
    let snapshots: Vec<Snapshot> = merge::steps(&[4, 2]).collect();

    assert_eq!(described(&snapshots, "Splitting"), 1);
    assert_eq!(described(&snapshots, "Merging"), 1);
    assert_eq!(described(&snapshots, "Comparing"), 1);
    assert_eq!(described(&snapshots, "Placed"), 2);

    let split = &snapshots[0];
    assert_eq!(
        split.description.as_deref(),
        Some("Splitting [0..1] into left [0..0] and right [1..1]")
    );
    assert_eq!(split.boundary_index, Some(0));

    let compare = snapshots
        .iter()
        .find(|s| s.description.as_deref() == Some("Comparing 4 and 2"))
        .expect("no comparison");
    assert_eq!(compare.focus, Some(0));
    assert_eq!(compare.compare_target, Some(1));

    let merged = snapshots
        .iter()
        .find(|s| {
            s.description
                .as_deref()
                .is_some_and(|d| d.starts_with("Merged segment"))
        })
        .expect("no merged segment");
    assert_eq!(merged.values, vec![2, 4]);
    assert_eq!(
        merged.description.as_deref(),
        Some("Merged segment [0..1] => [2, 4]")
    );

    let last = snapshots.last().expect("no snapshots");
    assert!(last.done);
    assert_eq!(last.values, vec![2, 4]);
}

#[test]
fn test_merge_sort_is_stable_on_ties() {
    // With equal keys the left element is placed first
    let snapshots = collect(Algorithm::Merge, &[1, 1]);
    let placed: Vec<usize> = snapshots
        .iter()
        .filter(|s| {
            s.description
                .as_deref()
                .is_some_and(|d| d.starts_with("Placed"))
        })
        .filter_map(|s| s.focus)
        .collect();
    assert_eq!(placed, vec![0, 1]);
    assert!(snapshots
        .iter()
        .any(|s| s.description.as_deref() == Some("Merging: [1] and [1]")));
}

#[test]
fn test_merge_sort_writes_back_in_one_step() {
    let snapshots = collect(Algorithm::Merge, &[3, 1, 2]);
    // Placement snapshots never touch the working array
    for pair in snapshots.windows(2) {
        let next = &pair[1];
        if next
            .description
            .as_deref()
            .is_some_and(|d| d.starts_with("Placed"))
        {
            assert_eq!(pair[0].values, next.values);
        }
    }
    assert_eq!(snapshots.last().map(|s| s.values.clone()), Some(vec![1, 2, 3]));
}

#[test]
fn test_generators_are_restartable() {
    let input = vec![9, 4, 7, 1, 8];
    for algorithm in Algorithm::ALL {
        let first = collect(algorithm, &input);
        let second = collect(algorithm, &input);
        assert_eq!(first, second);
    }
    assert_eq!(input, vec![9, 4, 7, 1, 8]);
}

#[test]
fn test_iterator_is_fused_after_terminal() {
    let mut steps = Algorithm::Quick.steps(&[2, 1]);
    while steps.next().is_some() {}
    assert!(steps.next().is_none());
    assert!(steps.next().is_none());
}
