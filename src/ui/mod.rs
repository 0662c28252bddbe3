//! UI rendering modules for the assistant client.
//!
//! All egui-based rendering code, organized by component:
//! - `toolbar`: top toolbar with server and session controls
//! - `chat`: transcript rendering
//! - `input`: message input panel
//! - `predictor`: disease predictor dialog
//! - `toasts`: floating status messages
//! - `theme`: color schemes and styling utilities

pub mod chat;
pub mod input;
pub mod predictor;
pub mod theme;
pub mod toasts;
pub mod toolbar;
