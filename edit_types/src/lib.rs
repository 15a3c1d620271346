#![no_std]

//! # Edit Types
//!
//! Fundamental mode and key types for the Vigil editor front end.
//!
//! ## Philosophy
//!
//! - **Closed enumerations**: every editor mode is a variant; consumers
//!   match exhaustively, with no silent default arm
//! - **Sub-state lives with its mode**: only the Normal case carries the
//!   flags that are observable in Normal mode
//! - **Plain data**: types here are `Copy`, serializable, and carry no
//!   behavior beyond accessors
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A key-binding or keymap layer
//! - A command grammar (the runner owns that)
//! - Terminal or platform input handling

extern crate alloc;

pub mod command;
pub mod key;
pub mod mode;

pub use command::{CommandOrigin, RunResult, VISUAL_RANGE_SEED};
pub use key::CommandKey;
pub use mode::{Mode, NormalState};
