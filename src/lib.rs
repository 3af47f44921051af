//! VIP Dino - terminal side-scrolling runner.
//!
//! This module exposes the game logic for testing and external use.

pub mod assets;
pub mod audio;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod session;
pub mod ui;
pub mod utils;
