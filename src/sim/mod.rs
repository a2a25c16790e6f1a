//! The simulated telemetry core.
//!
//! This is the one piece of the dashboard that behaves like a system
//! rather than a brochure: a bounded random walk over two sensor channels
//! and a capacity-bounded event feed, both advanced by a single 2-second
//! tick while the dashboard view is mounted.
//!
//! ## Submodules
//!
//! - [`rng`]: injectable uniform-draw capability (live, seeded, scripted)
//! - [`telemetry`]: the [`SensorReading`] walk and its range invariants
//! - [`feed`]: the [`EventFeed`] with FIFO eviction at capacity
//! - [`session`]: [`TelemetrySession`] owning both, one `tick` at a time
//! - [`ticker`]: [`SimTicker`], the scoped repeating timer driving a session
//!
//! ## Tick pipeline
//!
//! ```text
//! SimTicker (tokio task, every 2s)
//!        │
//!        ▼
//! TelemetrySession::tick()
//!        ├──▶ SensorReading::advance()   (commit new reading)
//!        ├──▶ EventFeed::maybe_record()  (30% of ticks, quotes new reading)
//!        └──▶ on_tick listeners          (snapshot → watch channel → TUI)
//! ```

pub mod feed;
pub mod rng;
pub mod session;
pub mod telemetry;
pub mod ticker;

pub use feed::{EventFeed, LogEntry, EVENT_THRESHOLD, FEED_CAPACITY};
pub use rng::{ScriptedRandom, SeededRandom, ThreadRandom, UniformSource};
pub use session::{TelemetrySession, TICK_PERIOD};
pub use telemetry::{SensorReading, GAS_RANGE, VIBRATION_ALERT, VIBRATION_RANGE};
pub use ticker::SimTicker;
