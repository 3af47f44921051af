//! Utility modules: persistence, frame pacing, logging.

pub mod frame_clock;
pub mod logging;
pub mod persistence;
