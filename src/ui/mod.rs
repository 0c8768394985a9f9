//! Presentation layers: a terminal UI and a line-oriented headless driver.
//! Both forward column picks to a [`GameSession`](crate::game::GameSession)
//! and render the outcome; neither holds game rules of its own.

mod app;
mod game_view;
mod headless;

pub use app::{describe, App};
pub use headless::run_headless;
