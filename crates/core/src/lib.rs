//! Domain types and pure view-data transforms for the churn dashboard.
//!
//! This crate contains no I/O; all data is passed in by the caller.  The
//! HTTP client lives in `churnboard-client` and the stateful session in
//! `churnboard-dashboard`.

pub mod customer;
pub mod metrics;
pub mod prediction;
pub mod registry;
pub mod view;
