// crates/frameforge-core/src/lib.rs
//
// Toolkit-free state and operations for the FrameForge control panel.
// No egui and no threads. frameforge-ui renders this state and frameforge-worker
// drives the simulated pipeline timers.
//
// To add a new panel action:
//   1. Add a variant to commands::ControlCommand
//   2. Add the operation to controller::Controller
//   3. Add one match arm in frameforge-ui/src/app.rs

pub mod commands;
pub mod controller;
pub mod error;
pub mod form;
pub mod helpers;
pub mod log;
pub mod picker;
pub mod pipeline;
pub mod settings;
pub mod status;
pub mod tabs;

pub use controller::Controller;
pub use error::ControlError;
