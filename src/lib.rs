// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # orewatch
//!
//! An executive TUI dashboard for a mining-division IoT modernization
//! pitch. Every figure on screen is either a hardcoded literal or
//! client-side pseudo-random simulation: there is no backend, no real
//! sensor ingestion, and no persistence. The one live-feeling piece is the
//! telemetry core - a bounded random walk over two sensor channels plus a
//! capacity-bounded event feed, advanced by a single 2-second timer while
//! the dashboard view is mounted.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌──────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal │ │
//! │  │ (state) │    │(datasets)│    │(render) │    │          │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └──────────┘ │
//! │       │ poll                                                 │
//! │       ▼                                                      │
//! │  ┌─────────┐  watch channel  ┌──────────────────────────┐   │
//! │  │ source  │◀────────────────│ sim (session + ticker)   │   │
//! │  └─────────┘                 └──────────────────────────┘   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: application state, view navigation, session lifecycle
//! - **[`auth`]**: the mock login gate (a pitch prop, not security)
//! - **[`sim`]**: the telemetry core - readings, feed, session, timer
//! - **[`source`]**: snapshot delivery ([`TelemetrySource`] trait)
//! - **[`data`]**: hardcoded pitch datasets and their derived figures
//! - **[`ui`]**: terminal rendering using ratatui
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Open the dashboard behind the login gate
//! orewatch
//!
//! # Reproducible demo run, straight to the dashboard
//! orewatch --skip-login --seed 7
//!
//! # Dump the pitch figures and exit
//! orewatch --export pitch.json
//! ```
//!
//! ### Driving the simulation directly
//!
//! ```
//! use orewatch::sim::{ScriptedRandom, TelemetrySession};
//!
//! // Draw order per tick: vibration, gas, event probability[, catalog index]
//! let rng = ScriptedRandom::new(vec![0.9, 0.75, 0.4]);
//! let mut session = TelemetrySession::new(Box::new(rng));
//!
//! let snapshot = session.tick();
//! assert_eq!(snapshot.reading.vibration, 2.7);
//! assert_eq!(snapshot.log.len(), 1); // 0.4 stays under the event threshold
//! ```
//!
//! ### On the live timer
//!
//! ```no_run
//! use orewatch::sim::{SimTicker, TelemetrySession, ThreadRandom};
//! use orewatch::source::TelemetrySource;
//!
//! # tokio_test::block_on(async {
//! let session = TelemetrySession::new(Box::new(ThreadRandom));
//! let (ticker, mut source) = SimTicker::spawn(session);
//! // ... poll `source` from the view layer ...
//! drop(ticker); // dropping the handle cancels the timer
//! # });
//! ```

pub mod app;
pub mod auth;
pub mod data;
pub mod events;
pub mod sim;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, View};
pub use auth::{AuthGate, Credentials};
pub use data::{FinancialPlan, History};
pub use sim::{
    EventFeed, LogEntry, ScriptedRandom, SeededRandom, SensorReading, SimTicker,
    TelemetrySession, ThreadRandom, UniformSource,
};
pub use source::{ChannelSource, TelemetrySnapshot, TelemetrySource};
pub use ui::Theme;
