//! MedAssist Client library.
//!
//! This module re-exports the core components for testing and extension.

pub mod api;
pub mod app;
pub mod backend;
pub mod config;
pub mod format;
pub mod logging;
pub mod protocol;
pub mod state;
pub mod ui;
pub mod validation;
