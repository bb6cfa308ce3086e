//! Application shell for the mountain backdrop: window lifecycle, event
//! handling, and the render loop.

pub mod window;

pub use window::{BackdropApp, run, window_attributes_from_config};
