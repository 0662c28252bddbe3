//! Application module structure for MedAssistApp
//!
//! - `core`: MedAssistApp struct and initialization
//! - `events`: Event processing from the backend
//! - `update`: Main update loop and dialog orchestration

pub mod core;
pub mod events;
pub mod update;

pub use core::MedAssistApp;
