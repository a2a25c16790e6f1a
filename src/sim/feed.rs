//! Append-only, capacity-bounded operational event feed.
//!
//! Each tick has a fixed chance of emitting one message from a small
//! catalog; some templates quote the vibration value committed on the
//! same tick (a snapshot, never a live reference). Once the feed is at
//! capacity the oldest entries are evicted first.

use std::collections::VecDeque;

use serde::Serialize;

use super::rng::UniformSource;
use super::telemetry::SensorReading;

/// Maximum number of entries the feed retains.
pub const FEED_CAPACITY: usize = 7;
/// A tick emits an event when its probability draw strictly exceeds this.
pub const EVENT_THRESHOLD: f64 = 0.7;

/// Number of templates in the message catalog.
const CATALOG_LEN: usize = 6;

/// Messages with this prefix get the alarm style in the log widget.
const ALERT_PREFIX: &str = "Alert:";

/// One timestamped feed entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Wall-clock display time captured at creation.
    pub time: String,
    pub message: String,
}

impl LogEntry {
    /// Create an entry stamped with the current local time.
    pub fn now(message: String) -> Self {
        Self { time: display_time(), message }
    }

    /// Alert-class entries are highlighted by the rendering layer.
    pub fn is_alert(&self) -> bool {
        self.message.starts_with(ALERT_PREFIX)
    }
}

/// Local wall-clock time formatted for the log column.
fn display_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// The fixed message catalog. Index 0 interpolates the current vibration.
fn catalog_message(index: usize, reading: &SensorReading) -> String {
    match index {
        0 => format!("Sensor S-402: vibration normal ({} mm/s)", reading.vibration),
        1 => "Tunnel N2: air quality stable".to_string(),
        2 => "IoT gateway: packet received (12 ms)".to_string(),
        3 => "Alert: tunnel B temperature rising".to_string(),
        4 => "Sync: financial figures refreshed".to_string(),
        _ => "SAG mill: running at nominal power".to_string(),
    }
}

/// Insertion-ordered feed with FIFO eviction at capacity.
#[derive(Debug, Clone, Default)]
pub struct EventFeed {
    entries: VecDeque<LogEntry>,
}

impl EventFeed {
    pub fn new() -> Self {
        Self { entries: VecDeque::with_capacity(FEED_CAPACITY + 1) }
    }

    /// A feed pre-populated with the session-start entry.
    pub fn seeded() -> Self {
        let mut feed = Self::new();
        feed.push(LogEntry::now("System started - secure link established".to_string()));
        feed
    }

    /// Append an entry, evicting from the front once over capacity.
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > FEED_CAPACITY {
            self.entries.pop_front();
        }
    }

    /// Per-tick transition.
    ///
    /// Consumes one probability draw and, on the emitting branch, one
    /// catalog-index draw. Returns whether an entry was appended; on the
    /// idle branch the feed is left untouched.
    pub fn maybe_record(&mut self, reading: &SensorReading, rng: &mut dyn UniformSource) -> bool {
        if rng.next_uniform() <= EVENT_THRESHOLD {
            return false;
        }
        let index = ((rng.next_uniform() * CATALOG_LEN as f64) as usize).min(CATALOG_LEN - 1);
        self.push(LogEntry::now(catalog_message(index, reading)));
        true
    }

    /// Current contents, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Owned copy of the contents, oldest first. Used for snapshots.
    pub fn to_vec(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRandom;

    fn entry(n: usize) -> LogEntry {
        LogEntry { time: format!("10:00:{:02}", n), message: format!("event {}", n) }
    }

    #[test]
    fn test_capacity_and_insertion_order() {
        let mut feed = EventFeed::new();
        for n in 0..20 {
            feed.push(entry(n));
            assert!(feed.len() <= FEED_CAPACITY);
        }
        let messages: Vec<&str> = feed.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["event 13", "event 14", "event 15", "event 16", "event 17", "event 18", "event 19"]
        );
    }

    #[test]
    fn test_fifo_eviction_law() {
        // An append at capacity yields tail(old, 6) + [new].
        let mut feed = EventFeed::new();
        for n in 0..FEED_CAPACITY {
            feed.push(entry(n));
        }
        let mut expected: Vec<LogEntry> = feed.to_vec()[1..].to_vec();
        let newest = entry(99);
        expected.push(newest.clone());

        feed.push(newest);
        assert_eq!(feed.to_vec(), expected);
    }

    #[test]
    fn test_idle_draw_leaves_feed_untouched() {
        let mut feed = EventFeed::new();
        feed.push(entry(0));
        let before = feed.to_vec();

        // 0.7 itself does not cross the strict threshold.
        let mut rng = ScriptedRandom::new(vec![0.7]);
        let appended = feed.maybe_record(&SensorReading::seed(), &mut rng);

        assert!(!appended);
        assert_eq!(feed.to_vec(), before);
    }

    #[test]
    fn test_emitting_draw_appends_selected_template() {
        let mut feed = EventFeed::new();
        let reading = SensorReading { vibration: 3.8, gas_level: 22 };

        // 0.95 crosses the threshold; 0.0 selects template 0.
        let mut rng = ScriptedRandom::new(vec![0.95, 0.0]);
        let appended = feed.maybe_record(&reading, &mut rng);

        assert!(appended);
        assert_eq!(feed.len(), 1);
        let entry = feed.entries().next().unwrap();
        assert_eq!(entry.message, "Sensor S-402: vibration normal (3.8 mm/s)");
        assert!(!entry.is_alert());
    }

    #[test]
    fn test_index_draw_is_clamped_to_catalog() {
        let mut feed = EventFeed::new();
        // A draw of exactly 1.0 must still select the last template.
        let mut rng = ScriptedRandom::new(vec![0.95, 1.0]);
        feed.maybe_record(&SensorReading::seed(), &mut rng);
        assert_eq!(
            feed.entries().next().unwrap().message,
            "SAG mill: running at nominal power"
        );
    }

    #[test]
    fn test_alert_classification() {
        let reading = SensorReading::seed();
        let mut rng = ScriptedRandom::new(vec![0.95, 0.6]);
        let mut feed = EventFeed::new();
        feed.maybe_record(&reading, &mut rng);
        let entry = feed.entries().next().unwrap();
        assert_eq!(entry.message, "Alert: tunnel B temperature rising");
        assert!(entry.is_alert());
    }
}
