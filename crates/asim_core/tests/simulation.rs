//! End-to-end checks of the public sequencer API.

use std::time::Duration;

use asim_core::models::{run_duration, SCRIPT};
use asim_core::{Simulation, SimulationStatus, StartOutcome};

#[tokio::test(start_paused = true)]
async fn one_start_runs_the_whole_script() {
    let sim = Simulation::new();
    assert_eq!(sim.status(), SimulationStatus::Idle);
    assert!(sim.log().is_empty());

    let started = tokio::time::Instant::now();
    assert_eq!(sim.start().await, StartOutcome::Completed);
    assert_eq!(started.elapsed(), run_duration());

    assert_eq!(sim.status(), SimulationStatus::Done);
    let log = sim.log();
    assert_eq!(log.len(), 6);
    assert!(log[5].ends_with("Attack simulation completed."));
}

#[tokio::test(start_paused = true)]
async fn double_start_yields_one_script_worth_of_entries() {
    let sim = Simulation::new();
    let mut rx = sim.subscribe();

    let first = sim.spawn_start();
    rx.wait_for(|snap| snap.status.is_running()).await.unwrap();
    let second = sim.spawn_start();

    assert_eq!(second.await.unwrap(), StartOutcome::AlreadyRunning);
    assert_eq!(first.await.unwrap(), StartOutcome::Completed);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(sim.log().len(), 6);
    assert_eq!(sim.status(), SimulationStatus::Done);
}

#[tokio::test(start_paused = true)]
async fn every_observed_log_is_a_prefix_of_the_script() {
    let sim = Simulation::new();
    let mut rx = sim.subscribe();
    let run = sim.spawn_start();

    loop {
        if rx.changed().await.is_err() {
            break;
        }
        let snap = rx.borrow_and_update().clone();
        assert!(snap.entries.len() <= SCRIPT.len());
        for (entry, step) in snap.entries.iter().zip(SCRIPT.iter()) {
            assert_eq!(entry.message, step.message);
        }
        if snap.status == SimulationStatus::Done {
            break;
        }
    }

    run.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn timestamps_are_non_decreasing() {
    let sim = Simulation::new();
    sim.start().await;

    let entries = sim.entries();
    assert!(entries
        .windows(2)
        .all(|pair| pair[0].timestamp <= pair[1].timestamp));
    for (entry, line) in entries.iter().zip(sim.log()) {
        assert_eq!(entry.render(), line);
    }
}

#[tokio::test(start_paused = true)]
async fn clones_share_one_session() {
    let sim = Simulation::new();
    let view = sim.clone();

    sim.start().await;
    assert_eq!(view.status(), SimulationStatus::Done);
    assert_eq!(view.snapshot().lines(), sim.log());
}
