use std::time::{Duration, Instant};

use roster_lib::Column;
use roster_tui::event::{ClickTracker, DOUBLE_CLICK_WINDOW};
use roster_tui::layout::Target;

fn cell(row_index: usize) -> Target {
    Target::Cell {
        row_index,
        column: Column::Name,
    }
}

// ============================================================================
// Double-Click Detection
// ============================================================================

#[test]
fn test_two_quick_clicks_on_same_target_are_a_double() {
    let mut clicks = ClickTracker::new();
    let start = Instant::now();

    assert!(!clicks.observe(cell(0), start));
    assert!(clicks.observe(cell(0), start + Duration::from_millis(150)));
}

#[test]
fn test_slow_second_click_is_single() {
    let mut clicks = ClickTracker::new();
    let start = Instant::now();

    assert!(!clicks.observe(cell(0), start));
    assert!(!clicks.observe(cell(0), start + DOUBLE_CLICK_WINDOW + Duration::from_millis(1)));
}

#[test]
fn test_different_targets_do_not_pair() {
    let mut clicks = ClickTracker::new();
    let start = Instant::now();

    assert!(!clicks.observe(cell(0), start));
    assert!(!clicks.observe(cell(1), start + Duration::from_millis(100)));
    // The second click re-arms its own target.
    assert!(clicks.observe(cell(1), start + Duration::from_millis(200)));
}

#[test]
fn test_third_click_starts_over() {
    let mut clicks = ClickTracker::new();
    let start = Instant::now();

    assert!(!clicks.observe(cell(0), start));
    assert!(clicks.observe(cell(0), start + Duration::from_millis(100)));
    // After a double fires the slot resets; a third click is single.
    assert!(!clicks.observe(cell(0), start + Duration::from_millis(200)));
}
