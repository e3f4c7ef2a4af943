//! Core types: RNG, word banks, configuration.
//!
//! This module contains the building blocks the rest of the engine leans on.
//! Sessions configure behavior via `GameConfig` rather than modifying the
//! engine itself.

pub mod bank;
pub mod config;
pub mod rng;

pub use bank::{WordBank, WordEntry, STOCK_DEFINITION};
pub use config::{GameConfig, UndoPolicy};
pub use rng::GameRng;
