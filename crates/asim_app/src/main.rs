//! Attack Simulation Demo - terminal entry point
//!
//! This binary is the rendering collaborator for `asim_core`. It handles:
//! - Configuration loading
//! - Application-level logging initialization (stderr)
//! - Drawing the control and log panels on every change
//! - Turning Enter presses into `start` requests

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

use asim_core::config::{default_config_path, ConfigManager, PanelSettings};
use asim_core::logging::init_tracing;
use asim_core::{Simulation, Snapshot};

mod panel;

use panel::render_panel;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (needed for the log level)
    let config_path = default_config_path();
    let mut config_manager = ConfigManager::new(&config_path);

    if let Err(e) = config_manager.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    init_tracing(config_manager.settings().logging.level);

    tracing::info!("Attack simulation demo starting");
    tracing::info!("Config: {}", config_manager.path().display());
    tracing::info!("Core version: {}", asim_core::version());

    let sim = Simulation::new();
    let renderer = tokio::spawn(render_loop(
        sim.subscribe(),
        config_manager.settings().panel.clone(),
    ));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut quit = false;
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "q" | "quit" => {
                quit = true;
                break;
            }
            "" => {
                if sim.status().can_start() {
                    // The run reports through the watch channel; the handle is not needed.
                    drop(sim.spawn_start());
                } else {
                    tracing::debug!("Trigger disabled while a run is in flight");
                }
            }
            other => tracing::debug!(input = other, "Ignoring unknown input"),
        }
    }

    if quit {
        renderer.abort();
    } else {
        // Input closed: let an in-flight run finish and the last frame draw.
        let snapshot = sim.settled().await;
        tracing::info!(
            status = %snapshot.status,
            entries = snapshot.entries.len(),
            "Input closed"
        );
        drop(sim);
        if let Err(e) = renderer.await {
            tracing::warn!("Renderer task failed: {}", e);
        }
    }

    tracing::info!("Attack simulation demo exiting");
    Ok(())
}

/// Redraw the panels whenever the simulation publishes a change.
async fn render_loop(mut rx: watch::Receiver<Snapshot>, settings: PanelSettings) {
    let initial = rx.borrow_and_update().clone();
    draw(&initial, &settings);

    while rx.changed().await.is_ok() {
        let snapshot = rx.borrow_and_update().clone();
        draw(&snapshot, &settings);
    }
}

fn draw(snapshot: &Snapshot, settings: &PanelSettings) {
    let text = render_panel(snapshot, settings);
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.flush())
    {
        tracing::warn!("Failed to draw panel: {}", e);
    }
}
