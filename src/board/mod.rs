//! Sparse spatial index over factions, buildings and units

pub mod grid;
pub mod render;
pub mod terrain;

pub use grid::{Board, Cell, Placement, PutOutcome, UnitSlot, UNIT_SLOTS};
pub use terrain::{Terrain, TerrainMap};
