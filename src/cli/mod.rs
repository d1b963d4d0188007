//! CLI module for pomobeep.
//!
//! This module provides the command-line interface:
//! - `commands`: Argument definitions using clap derive
//! - `display`: Output formatting and display logic

pub mod commands;
pub mod display;

pub use commands::{Cli, SoundChoice};
pub use display::Display;
