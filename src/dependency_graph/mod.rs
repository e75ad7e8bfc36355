//! Core dependency-graph domain: descriptor types, identity resolution,
//! the atomic graph and its aggregated views.
//!
//! Everything here is pure: no I/O, no shared state.
pub mod domain;
pub mod services;
