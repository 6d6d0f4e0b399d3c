//! Warboard - Turn-Based Strategy Board Simulator
//!
//! Reads a command script, applies one command per turn to a sparse board
//! of factions, units and buildings, and writes a transcript of every turn.

pub mod board;
pub mod core;
pub mod engine;
pub mod entity;
pub mod registry;
pub mod script;
pub mod transcript;
