//! # Connect Four
//!
//! Rules engine and turn-by-turn state for Connect Four, with a terminal
//! front end built on Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, session state machine
//! - [`ui`] — Terminal UI and headless driver
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
