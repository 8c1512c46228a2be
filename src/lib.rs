//! # Connect Four
//!
//! A two-player Connect Four game. The rules engine reports every state change as a
//! serializable event, and a terminal UI built with Ratatui renders those events.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board engine, players, game state, turn controller
//! - [`ui`] — Terminal UI: event-driven render model and game view
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File-backed `tracing` subscriber
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
