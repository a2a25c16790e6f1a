//! Application state and navigation logic.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use crate::auth::AuthGate;
use crate::data::{gallery, scorecard, FinancialPlan, History, KpiCard, MediaItem, Perspective};
use crate::sim::{SeededRandom, SimTicker, TelemetrySession, ThreadRandom, UniformSource};
use crate::source::{TelemetrySnapshot, TelemetrySource};
use crate::ui::Theme;

/// The current view/tab in the TUI.
///
/// Media detail is shown as an overlay on the Gallery view (controlled by
/// `App::show_media_overlay`) rather than as a separate view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Live sensors, event log, and the executive KPI row.
    Dashboard,
    /// Detailed budget breakdown tables.
    Budget,
    /// Balanced-scorecard KPI grid.
    Scorecard,
    /// Digital-twin media gallery.
    Gallery,
}

impl View {
    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::Dashboard => View::Budget,
            View::Budget => View::Scorecard,
            View::Scorecard => View::Gallery,
            View::Gallery => View::Dashboard,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        match self {
            View::Dashboard => View::Gallery,
            View::Budget => View::Dashboard,
            View::Scorecard => View::Budget,
            View::Gallery => View::Scorecard,
        }
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Budget => "Budget",
            View::Scorecard => "Scorecard",
            View::Gallery => "Gallery",
        }
    }
}

/// A mounted simulation feed: the polled source plus the timer handle.
///
/// Dropping this aborts the tick task, so every way of leaving the
/// dashboard (navigation, logout, quit) cancels the timer.
struct SimFeed {
    source: Box<dyn TelemetrySource>,
    _ticker: Option<SimTicker>,
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub auth: AuthGate,
    pub current_view: View,
    pub show_help: bool,
    pub show_media_overlay: bool,
    /// Executive toggle: current scenario vs. optimized IoT scenario.
    pub optimized: bool,

    // Simulation feed (only while the dashboard view is mounted)
    feed: Option<SimFeed>,
    pub telemetry: Option<TelemetrySnapshot>,
    pub history: History,

    // Hardcoded pitch datasets
    pub plan: FinancialPlan,
    pub scorecard: Vec<(Perspective, Vec<KpiCard>)>,
    pub gallery: Vec<MediaItem>,
    pub selected_media_index: usize,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,

    seed: Option<u64>,
}

impl App {
    /// Create a new App behind the given login gate.
    ///
    /// `seed` pins the simulation randomness for reproducible demo runs.
    pub fn new(auth: AuthGate, theme: Theme, seed: Option<u64>) -> Self {
        let signed_in = auth.is_signed_in();
        let mut app = Self {
            running: true,
            auth,
            current_view: View::Dashboard,
            show_help: false,
            show_media_overlay: false,
            optimized: false,
            feed: None,
            telemetry: None,
            history: History::new(),
            plan: FinancialPlan::standard(),
            scorecard: scorecard(),
            gallery: gallery(),
            selected_media_index: 0,
            theme,
            status_message: None,
            seed,
        };
        if signed_in {
            app.start_session();
        }
        app
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < std::time::Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Poll the pending login and the telemetry feed.
    ///
    /// Called once per draw-loop iteration; both polls are non-blocking.
    pub fn refresh(&mut self) {
        if self.auth.poll() {
            self.start_session();
        }
        if let Some(feed) = &mut self.feed {
            if let Some(snapshot) = feed.source.poll() {
                self.history.record(&snapshot.reading);
                self.telemetry = Some(snapshot);
            }
        }
    }

    /// Mount the dashboard: fresh session, fresh history, timer started.
    fn start_session(&mut self) {
        let rng: Box<dyn UniformSource + Send> = match self.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom),
        };
        let (ticker, source) = SimTicker::spawn(TelemetrySession::new(rng));
        self.history.clear();
        self.telemetry = None;
        self.feed = Some(SimFeed { source: Box::new(source), _ticker: Some(ticker) });
    }

    /// Unmount the dashboard. Dropping the feed aborts the tick task.
    fn stop_session(&mut self) {
        self.feed = None;
        self.telemetry = None;
        self.history.clear();
    }

    /// Whether a simulation timer is currently mounted.
    pub fn sim_running(&self) -> bool {
        self.feed.is_some()
    }

    /// Attach an external snapshot source instead of the live ticker.
    ///
    /// Used by tests and replay tooling; the source is polled exactly like
    /// the live one.
    pub fn attach_source(&mut self, source: Box<dyn TelemetrySource>) {
        self.feed = Some(SimFeed { source, _ticker: None });
    }

    /// Description of the mounted feed, for the status bar.
    pub fn source_description(&self) -> Option<&str> {
        self.feed.as_ref().map(|feed| feed.source.description())
    }

    /// Switch to a specific view.
    ///
    /// The simulation only runs while the dashboard view is mounted:
    /// leaving it tears the timer down, and returning mounts a fresh
    /// session, seed reading and seed log entry included.
    pub fn set_view(&mut self, view: View) {
        if view == self.current_view {
            return;
        }
        let was_dashboard = self.current_view == View::Dashboard;
        self.current_view = view;
        self.show_media_overlay = false;

        if was_dashboard {
            self.stop_session();
        }
        if view == View::Dashboard {
            self.start_session();
        }
    }

    /// Switch to the next view (Dashboard → Budget → Scorecard → Gallery).
    pub fn next_view(&mut self) {
        self.set_view(self.current_view.next());
    }

    /// Switch to the previous view.
    pub fn prev_view(&mut self) {
        self.set_view(self.current_view.prev());
    }

    /// Navigate back: close overlays first, then return to the dashboard.
    pub fn go_back(&mut self) {
        if self.show_media_overlay {
            self.show_media_overlay = false;
            return;
        }
        if self.current_view != View::Dashboard {
            self.set_view(View::Dashboard);
        }
    }

    /// Close the session and return to the login screen.
    pub fn log_out(&mut self) {
        self.stop_session();
        self.show_help = false;
        self.show_media_overlay = false;
        self.optimized = false;
        self.current_view = View::Dashboard;
        self.auth.sign_out();
    }

    /// Flip between the current and the optimized budget scenario.
    pub fn toggle_optimized(&mut self) {
        self.optimized = !self.optimized;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Move the gallery selection down by one item.
    pub fn select_next(&mut self) {
        let max = self.gallery.len().saturating_sub(1);
        self.selected_media_index = (self.selected_media_index + 1).min(max);
    }

    /// Move the gallery selection up by one item.
    pub fn select_prev(&mut self) {
        self.selected_media_index = self.selected_media_index.saturating_sub(1);
    }

    /// The currently selected gallery item.
    pub fn selected_media(&self) -> Option<&MediaItem> {
        self.gallery.get(self.selected_media_index)
    }

    /// Open the media detail overlay for the selected item.
    pub fn enter_media_detail(&mut self) {
        if self.current_view == View::Gallery && !self.gallery.is_empty() {
            self.show_media_overlay = true;
        }
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export current state to a JSON file.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        use std::io::Write;

        let mut export = serde_json::Map::new();

        if let Some(ref telemetry) = self.telemetry {
            export.insert("telemetry".to_string(), serde_json::to_value(telemetry)?);
            export.insert(
                "vibration_alert".to_string(),
                serde_json::json!(telemetry.reading.vibration_alert()),
            );
        }

        let mut budget = serde_json::Map::new();
        budget.insert(
            "total_current".to_string(),
            serde_json::json!(self.plan.total_current()),
        );
        budget.insert(
            "total_projected".to_string(),
            serde_json::json!(self.plan.total_projected()),
        );
        budget.insert(
            "total_savings".to_string(),
            serde_json::json!(self.plan.total_savings()),
        );
        budget.insert(
            "reduction_pct".to_string(),
            serde_json::json!(self.plan.reduction_pct()),
        );

        let lines: Vec<serde_json::Value> = self
            .plan
            .lines
            .iter()
            .map(|line| {
                serde_json::json!({
                    "category": line.category,
                    "current": line.current,
                    "projected": line.projected,
                    "variation": line.variation(),
                })
            })
            .collect();
        budget.insert("lines".to_string(), serde_json::Value::Array(lines));
        export.insert("budget".to_string(), serde_json::Value::Object(budget));

        let json = serde_json::to_string_pretty(&serde_json::Value::Object(export))?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::sim::{LogEntry, SensorReading};

    #[derive(Debug)]
    struct StubSource {
        queued: Vec<TelemetrySnapshot>,
    }

    impl TelemetrySource for StubSource {
        fn poll(&mut self) -> Option<TelemetrySnapshot> {
            self.queued.pop()
        }

        fn description(&self) -> &str {
            "stub"
        }
    }

    fn snapshot(vibration: f64) -> TelemetrySnapshot {
        TelemetrySnapshot {
            reading: SensorReading { vibration, gas_level: 20 },
            log: vec![LogEntry { time: "10:00:00".to_string(), message: "boot".to_string() }],
            ticks: 1,
        }
    }

    fn signed_out_app() -> App {
        App::new(
            AuthGate::with_delay(Credentials::default(), std::time::Duration::ZERO),
            Theme::dark(),
            None,
        )
    }

    #[test]
    fn test_view_cycling_round_trips() {
        let mut view = View::Dashboard;
        for _ in 0..4 {
            view = view.next();
        }
        assert_eq!(view, View::Dashboard);
        assert_eq!(View::Budget.prev(), View::Dashboard);
    }

    #[tokio::test]
    async fn test_session_mounts_only_on_dashboard() {
        let creds = Credentials::default();
        let mut app = App::new(AuthGate::pre_authorized(creds), Theme::dark(), Some(1));
        assert!(app.sim_running());

        app.set_view(View::Budget);
        assert!(!app.sim_running(), "leaving the dashboard cancels the timer");
        assert!(app.telemetry.is_none());

        app.set_view(View::Dashboard);
        assert!(app.sim_running(), "returning mounts a fresh session");
    }

    #[tokio::test]
    async fn test_log_out_tears_down_the_session() {
        let mut app = App::new(AuthGate::pre_authorized(Credentials::default()), Theme::dark(), None);
        app.log_out();
        assert!(!app.sim_running());
        assert!(!app.auth.is_signed_in());
        assert_eq!(app.current_view, View::Dashboard);
    }

    #[test]
    fn test_refresh_records_polled_snapshots() {
        let mut app = signed_out_app();
        app.attach_source(Box::new(StubSource { queued: vec![snapshot(3.2)] }));

        app.refresh();
        assert_eq!(app.telemetry.as_ref().unwrap().reading.vibration, 3.2);
        assert_eq!(app.history.len(), 1);

        // Nothing new queued: state stays put.
        app.refresh();
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn test_gallery_selection_is_clamped() {
        let mut app = signed_out_app();
        for _ in 0..20 {
            app.select_next();
        }
        assert_eq!(app.selected_media_index, app.gallery.len() - 1);
        for _ in 0..20 {
            app.select_prev();
        }
        assert_eq!(app.selected_media_index, 0);
    }

    #[test]
    fn test_media_overlay_requires_gallery_view() {
        let mut app = signed_out_app();
        app.enter_media_detail();
        assert!(!app.show_media_overlay);

        app.current_view = View::Gallery;
        app.enter_media_detail();
        assert!(app.show_media_overlay);

        app.go_back();
        assert!(!app.show_media_overlay);
        assert_eq!(app.current_view, View::Gallery);
    }

    #[test]
    fn test_export_state_writes_budget_summary() {
        let mut app = signed_out_app();
        app.attach_source(Box::new(StubSource { queued: vec![snapshot(4.5)] }));
        app.refresh();

        let file = tempfile::NamedTempFile::new().unwrap();
        app.export_state(file.path()).unwrap();

        let exported: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(exported["budget"]["total_savings"], 348_515);
        assert_eq!(exported["vibration_alert"], true);
        assert_eq!(exported["telemetry"]["reading"]["gas_level"], 20);
    }
}
