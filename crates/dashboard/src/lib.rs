//! Dashboard session orchestration.
//!
//! Owns the mutable dashboard state (form draft, model registry, metrics
//! snapshot, prediction lifecycle), runs the startup loads, drives the
//! scoring workflow, and derives chart-ready view data for rendering.

pub mod config;
pub mod render;
pub mod session;

pub use config::DashboardConfig;
pub use session::{DashboardSession, DashboardState};
