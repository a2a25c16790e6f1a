//! Terminal rendering using ratatui.
//!
//! One file per view, plus the shared chrome ([`common`]) and the color
//! [`theme`]. Rendering is pure: every function reads [`crate::app::App`]
//! and draws into a frame, mutating nothing.

pub mod budget;
pub mod common;
pub mod dashboard;
pub mod gallery;
pub mod login;
pub mod scorecard;
pub mod theme;

pub use theme::Theme;
