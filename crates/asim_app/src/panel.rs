//! Text rendering of the control panel and the log panel.

use std::fmt::Write as _;

use asim_core::config::PanelSettings;
use asim_core::Snapshot;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const RULE: &str = "----------------------------------------";

/// Render both panels for `snapshot`.
pub fn render_panel(snapshot: &Snapshot, settings: &PanelSettings) -> String {
    let mut out = String::new();

    if settings.clear_screen {
        out.push_str(CLEAR_SCREEN);
    }

    let _ = writeln!(out, "{}", settings.title);
    let _ = writeln!(out, "{RULE}");

    let _ = writeln!(out, "[!] Attack Control Panel");
    if settings.show_banner {
        let _ = writeln!(
            out,
            "    Launch a simulated cyber attack demonstration. No real systems are harmed."
        );
    }
    let trigger = snapshot.status.trigger_label();
    if snapshot.status.is_running() {
        let _ = writeln!(out, "    < {trigger} > [disabled]");
    } else {
        let _ = writeln!(out, "    < {trigger} > press Enter (q to quit)");
    }
    let _ = writeln!(out, "{RULE}");

    let _ = writeln!(out, "[>_] Simulation Logs");
    for line in snapshot.lines() {
        let _ = writeln!(out, "    {line}");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use asim_core::{LogEntry, SimulationStatus};

    fn plain() -> PanelSettings {
        PanelSettings {
            clear_screen: false,
            ..PanelSettings::default()
        }
    }

    #[test]
    fn idle_panel_offers_start() {
        let text = render_panel(&Snapshot::default(), &plain());
        assert!(text.starts_with("Cyber Attack Simulation UI\n"));
        assert!(text.contains("< Start Simulation > press Enter"));
        assert!(text.contains("No real systems are harmed."));
        assert!(text.trim_end().ends_with("Simulation Logs"));
    }

    #[test]
    fn running_panel_disables_trigger() {
        let snapshot = Snapshot {
            status: SimulationStatus::Running,
            entries: vec![LogEntry::now("Initializing attack simulation...")],
        };
        let text = render_panel(&snapshot, &plain());
        assert!(text.contains("< Simulating... > [disabled]"));
        assert!(text.contains("] Initializing attack simulation..."));
    }

    #[test]
    fn log_lines_keep_append_order() {
        let snapshot = Snapshot {
            status: SimulationStatus::Done,
            entries: vec![LogEntry::now("first"), LogEntry::now("second")],
        };
        let text = render_panel(&snapshot, &plain());
        let first = text.find("] first").unwrap();
        let second = text.find("] second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn clear_and_banner_follow_settings() {
        let settings = PanelSettings {
            show_banner: false,
            ..PanelSettings::default()
        };
        let text = render_panel(&Snapshot::default(), &settings);
        assert!(text.starts_with(CLEAR_SCREEN));
        assert!(!text.contains("No real systems"));
    }
}
