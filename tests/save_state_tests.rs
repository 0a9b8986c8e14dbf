//! Save-state hysteresis tests.

mod common;

use common::TestGrid;
use gridpurge::{EVICTION_BATCH_LOW_WATER, PurgeConfig, SaveStateController};

fn config() -> PurgeConfig {
    PurgeConfig::default().save_high_water_mark(200)
}

fn tick(controller: &mut SaveStateController, grid: &mut TestGrid, config: &PurgeConfig) {
    controller.observe_backlog(&*grid, config);
    controller.update_save_state(grid, false, config);
}

#[test]
fn small_backlog_disables_saving() {
    let config = config();
    let mut controller = SaveStateController::new();
    let mut grid = TestGrid::new();
    grid.backlog = EVICTION_BATCH_LOW_WATER - 1;

    tick(&mut controller, &mut grid, &config);
    assert!(grid.saving_disabled);
}

#[test]
fn large_backlog_defers_disabling() {
    // The storage only unloads a bounded batch per tick; with more than a
    // batch still queued, disabling save now would be premature.
    let config = config();
    let mut controller = SaveStateController::new();
    let mut grid = TestGrid::new();
    grid.backlog = EVICTION_BATCH_LOW_WATER;

    tick(&mut controller, &mut grid, &config);
    assert!(!grid.saving_disabled);

    // Backlog drains below the mark: next tick disables.
    grid.backlog = 40;
    tick(&mut controller, &mut grid, &config);
    assert!(grid.saving_disabled);
}

#[test]
fn disabled_state_holds_until_high_water_mark() {
    let config = config();
    let mut controller = SaveStateController::new();
    let mut grid = TestGrid::new();
    grid.backlog = 0;

    tick(&mut controller, &mut grid, &config);
    assert!(grid.saving_disabled);

    // Backlog rises above the low-water mark but stays below the high-water
    // mark: no oscillation, saving stays disabled.
    for backlog in [120, 150, 199, 150, 120] {
        grid.backlog = backlog;
        tick(&mut controller, &mut grid, &config);
        assert!(grid.saving_disabled, "backlog {backlog}");
    }

    // Crossing the high-water mark re-enables.
    grid.backlog = 200;
    tick(&mut controller, &mut grid, &config);
    assert!(!grid.saving_disabled);
}

#[test]
fn backup_in_progress_suppresses_all_transitions() {
    let config = config();
    let mut controller = SaveStateController::new();
    let mut grid = TestGrid::new();

    // Disable would be due, but a backup is running.
    grid.backlog = 0;
    controller.observe_backlog(&grid, &config);
    controller.update_save_state(&mut grid, true, &config);
    assert!(!grid.saving_disabled);

    // Re-enable would be due, but a backup is running.
    grid.saving_disabled = true;
    grid.backlog = 500;
    controller.observe_backlog(&grid, &config);
    controller.update_save_state(&mut grid, true, &config);
    assert!(grid.saving_disabled);
}

#[test]
fn externally_disabled_grid_is_not_sampled() {
    let config = config();
    let mut controller = SaveStateController::new();
    let mut grid = TestGrid::new();

    // The grid arrives save-disabled from outside; the latch must not arm.
    grid.saving_disabled = true;
    grid.backlog = 0;
    controller.observe_backlog(&grid, &config);

    // The external party re-enables saving; with no armed latch, the
    // controller leaves it alone.
    grid.saving_disabled = false;
    controller.update_save_state(&mut grid, false, &config);
    assert!(!grid.saving_disabled);
}

#[test]
fn auto_save_handling_off_is_inert() {
    let config = PurgeConfig::default().auto_save_handling(false);
    let mut controller = SaveStateController::new();
    let mut grid = TestGrid::new();
    grid.backlog = 0;

    tick(&mut controller, &mut grid, &config);
    assert!(!grid.saving_disabled);

    grid.saving_disabled = true;
    grid.backlog = 10_000;
    tick(&mut controller, &mut grid, &config);
    assert!(grid.saving_disabled);
}

#[test]
fn transition_uses_latch_from_tick_start() {
    let config = config();
    let mut controller = SaveStateController::new();
    let mut grid = TestGrid::new();

    // Backlog is large at tick start, so the latch stays unarmed even
    // though the backlog collapses before tick end.
    grid.backlog = 5_000;
    controller.observe_backlog(&grid, &config);
    grid.backlog = 0;
    controller.update_save_state(&mut grid, false, &config);
    assert!(!grid.saving_disabled);
}
