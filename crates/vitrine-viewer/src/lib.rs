//! Vitrine Viewer - Model viewing engine
//!
//! Orchestrates asset loading, camera fitting, and the time-of-day
//! orientation applied to the displayed model. The host rendering surface
//! drives a [`Viewer`] through `select_asset`, `set_time_of_day`, and a
//! per-frame `tick`.

mod config;
mod framing;
mod state;
mod viewer;

pub use config::ViewerConfig;
pub use framing::{frame, CameraFrame};
pub use state::{RequestId, ViewerState};
pub use viewer::Viewer;
