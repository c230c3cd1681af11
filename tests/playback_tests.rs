// Integration tests for the playback controller

use sortscope::playback::{Controller, PlaybackConfig, PlaybackState, DEFAULT_LIST_LENGTH};
use sortscope::sorting::Algorithm;
use std::time::{Duration, Instant};

fn controller(algorithm: Algorithm, values: &[i64]) -> Controller {
    Controller::with_seed(algorithm, values.to_vec(), PlaybackConfig::default(), 42)
}

fn sorted(values: &[i64]) -> Vec<i64> {
    let mut v = values.to_vec();
    v.sort_unstable();
    v
}

fn run_to_end(c: &mut Controller) {
    while !c.is_complete() {
        c.step();
    }
}

#[test]
fn test_new_controller_is_idle() {
    let c = controller(Algorithm::Bubble, &[3, 1, 2]);
    assert_eq!(c.state(), PlaybackState::Idle);
    assert_eq!(c.cursor(), None);
    assert!(c.current().is_none());
    assert!(!c.can_step_back());
    assert_eq!(c.progress(), 0);
    assert_eq!(c.values(), &[3, 1, 2]);
}

#[test]
fn test_step_pulls_one_snapshot() {
    let mut c = controller(Algorithm::Bubble, &[3, 1, 2]);
    c.step();
    assert_eq!(c.state(), PlaybackState::Paused);
    assert_eq!(c.cursor(), Some(0));
    assert_eq!(c.history_len(), 1);
    let first = c.current().expect("no current snapshot");
    assert_eq!(first.focus, Some(0));
    assert_eq!(first.compare_target, Some(1));

    c.step();
    assert_eq!(c.values(), &[1, 3, 2]);
    assert!(c.can_step_back());
}

#[test]
fn test_manual_step_from_idle_pauses() {
    let mut c = controller(Algorithm::Bubble, &[3, 1, 2]);
    c.step();
    c.stop();
    assert_eq!(c.state(), PlaybackState::Paused);
    assert!(!c.has_pending_tick());

    // Starting afterwards resumes the same run
    c.start_at(Instant::now());
    assert_eq!(c.state(), PlaybackState::Running);
    assert_eq!(c.history_len(), 2);
    assert_eq!(c.cursor(), Some(1));
}

#[test]
fn test_manual_step_to_terminal_completes() {
    let mut c = controller(Algorithm::Bubble, &[7]);
    c.step();
    assert_eq!(c.state(), PlaybackState::Complete);
    assert!(c.current().is_some_and(|s| s.done));
}

#[test]
fn test_step_back_then_step_replays() {
    let mut c = controller(Algorithm::Quick, &[5, 3, 8, 4, 2]);
    for _ in 0..6 {
        c.step();
    }
    let before = c.current().cloned();
    let len = c.history_len();

    c.step_back();
    assert_eq!(c.cursor(), Some(4));
    c.step();

    assert_eq!(c.current().cloned(), before);
    assert_eq!(c.history_len(), len);
}

#[test]
fn test_step_back_never_passes_first_snapshot() {
    let mut c = controller(Algorithm::Merge, &[4, 2]);
    c.step_back();
    assert_eq!(c.cursor(), None);

    c.step();
    c.step_back();
    assert_eq!(c.cursor(), Some(0));
    assert!(!c.can_step_back());
}

#[test]
fn test_rewind_does_not_truncate_history() {
    let mut c = controller(Algorithm::Bubble, &[4, 3, 2, 1]);
    for _ in 0..5 {
        c.step();
    }
    for _ in 0..3 {
        c.step_back();
    }
    assert_eq!(c.cursor(), Some(1));
    assert_eq!(c.history_len(), 5);

    // Replays buffered snapshots before pulling new ones
    c.step();
    c.step();
    c.step();
    assert_eq!(c.history_len(), 5);
    c.step();
    assert_eq!(c.history_len(), 6);
}

#[test]
fn test_running_to_completion() {
    let input = [9, 4, 7, 1, 8, 2];
    for algorithm in Algorithm::ALL {
        let mut c = controller(algorithm, &input);
        run_to_end(&mut c);
        let last = c.current().expect("no terminal snapshot");
        assert!(last.done);
        assert_eq!(last.values, sorted(&input));
        assert_eq!(c.progress(), 100);
        assert_eq!(c.state(), PlaybackState::Complete);

        // Nothing left to step through
        let len = c.history_len();
        c.step();
        assert_eq!(c.history_len(), len);
        assert!(c.is_complete());
    }
}

#[test]
fn test_step_back_from_complete_pauses() {
    let mut c = controller(Algorithm::Bubble, &[2, 1]);
    run_to_end(&mut c);
    let len = c.history_len();

    c.step_back();
    assert_eq!(c.state(), PlaybackState::Paused);
    assert!(!c.current().expect("no snapshot").done);

    c.step();
    assert_eq!(c.state(), PlaybackState::Complete);
    assert_eq!(c.history_len(), len);
}

#[test]
fn test_start_schedules_auto_advance() {
    let mut c = controller(Algorithm::Bubble, &[3, 1, 2]);
    let t0 = Instant::now();
    c.start_at(t0);

    assert_eq!(c.state(), PlaybackState::Running);
    assert!(c.is_playing());
    assert_eq!(c.cursor(), Some(0));
    assert_eq!(c.next_tick_due(), Some(t0 + Duration::from_millis(250)));

    // Not due yet
    assert!(!c.tick(t0 + Duration::from_millis(100)));
    assert_eq!(c.cursor(), Some(0));

    let t1 = t0 + Duration::from_millis(250);
    assert!(c.tick(t1));
    assert_eq!(c.cursor(), Some(1));
    assert_eq!(c.next_tick_due(), Some(t1 + Duration::from_millis(250)));
}

#[test]
fn test_auto_advance_runs_to_completion() {
    let mut c = controller(Algorithm::Merge, &[5, 2, 9, 1]);
    let mut now = Instant::now();
    c.start_at(now);
    while c.is_playing() {
        now += c.speed();
        c.tick(now);
    }
    assert!(c.is_complete());
    assert!(!c.has_pending_tick());
    assert_eq!(c.values(), &[1, 2, 5, 9]);
}

#[test]
fn test_step_cancels_pending_tick() {
    let mut c = controller(Algorithm::Bubble, &[3, 1, 2]);
    let t0 = Instant::now();
    c.start_at(t0);
    c.step();

    assert!(!c.has_pending_tick());
    assert_eq!(c.state(), PlaybackState::Paused);
    assert_eq!(c.cursor(), Some(1));

    // The cancelled tick never fires
    assert!(!c.tick(t0 + Duration::from_secs(10)));
    assert_eq!(c.cursor(), Some(1));
}

#[test]
fn test_stop_keeps_history_and_resumes() {
    let mut c = controller(Algorithm::Quick, &[5, 3, 8, 4, 2]);
    let t0 = Instant::now();
    c.start_at(t0);
    c.tick(t0 + Duration::from_secs(1));
    c.stop();

    assert_eq!(c.state(), PlaybackState::Paused);
    assert!(!c.has_pending_tick());
    assert_eq!(c.history_len(), 2);

    c.start_at(t0 + Duration::from_secs(2));
    assert_eq!(c.state(), PlaybackState::Running);
    assert_eq!(c.history_len(), 3);
    assert_eq!(c.cursor(), Some(2));
}

#[test]
fn test_start_after_completion_reshuffles() {
    let input = [6, 2, 9, 4, 1, 7, 3];
    let mut c = controller(Algorithm::Bubble, &input);
    run_to_end(&mut c);

    c.start_at(Instant::now());
    assert_eq!(c.state(), PlaybackState::Running);
    assert_eq!(c.history_len(), 1);
    assert_eq!(c.cursor(), Some(0));
    assert_eq!(sorted(c.values()), sorted(&input));
}

#[test]
fn test_set_speed_applies_to_next_schedule() {
    let mut c = controller(Algorithm::Bubble, &[3, 1, 2, 5, 4]);
    let t0 = Instant::now();
    c.start_at(t0);
    c.set_speed(1000);

    // The pending tick keeps its original deadline
    let due = t0 + Duration::from_millis(250);
    assert_eq!(c.next_tick_due(), Some(due));
    assert!(c.tick(due));
    assert_eq!(c.next_tick_due(), Some(due + Duration::from_millis(1000)));
}

#[test]
fn test_reset_discards_run_and_preserves_values() {
    let input = [8, 2, 4, 7, 1, 3, 9, 6, 5];
    let mut c = controller(Algorithm::Merge, &input);
    for _ in 0..10 {
        c.step();
    }
    c.reset();

    assert_eq!(c.state(), PlaybackState::Idle);
    assert_eq!(c.history_len(), 0);
    assert_eq!(c.cursor(), None);
    assert!(c.recent_descriptions().is_empty());
    assert_eq!(sorted(c.values()), sorted(&input));
}

#[test]
fn test_reset_of_empty_list_generates_default() {
    let mut c = controller(Algorithm::Bubble, &[]);
    c.reset();
    assert_eq!(c.values().len(), DEFAULT_LIST_LENGTH);
}

#[test]
fn test_empty_list_is_a_no_op() {
    let mut c = controller(Algorithm::Quick, &[3, 1]);
    c.set_list_length(0);
    assert!(c.values().is_empty());

    c.start_at(Instant::now());
    assert_eq!(c.state(), PlaybackState::Idle);
    assert!(!c.has_pending_tick());
    c.step();
    assert_eq!(c.history_len(), 0);
    assert!(c.current().is_none());
}

#[test]
fn test_set_list_length_regenerates() {
    let mut c = controller(Algorithm::Bubble, &[3, 1, 2]);
    c.step();
    c.set_list_length(12);
    assert_eq!(c.values().len(), 12);
    assert_eq!(c.history_len(), 0);
    assert_eq!(c.state(), PlaybackState::Idle);
    assert!(c.values().iter().all(|v| (0..100).contains(v)));
}

#[test]
fn test_set_algorithm_keeps_values() {
    let mut c = controller(Algorithm::Bubble, &[3, 1, 2]);
    c.step();
    c.step();
    let shown = c.values().to_vec();
    c.set_algorithm(Algorithm::Merge);
    assert_eq!(c.algorithm(), Algorithm::Merge);
    assert_eq!(c.history_len(), 0);
    assert_eq!(c.values(), shown.as_slice());

    c.step();
    let first = c.current().expect("no snapshot");
    assert!(first
        .description
        .as_deref()
        .is_some_and(|d| d.starts_with("Splitting")));
}

#[test]
fn test_recent_descriptions_follow_cursor() {
    let mut c = controller(Algorithm::Bubble, &[5, 4, 3, 2, 1]);
    for _ in 0..8 {
        c.step();
    }
    let expected: Vec<String> = (3..8)
        .filter_map(|i| c.history().get(i).and_then(|s| s.description.clone()))
        .collect();
    assert_eq!(c.recent_descriptions(), expected.as_slice());

    c.step_back();
    c.step_back();
    let expected: Vec<String> = (1..6)
        .filter_map(|i| c.history().get(i).and_then(|s| s.description.clone()))
        .collect();
    assert_eq!(c.recent_descriptions(), expected.as_slice());
}
