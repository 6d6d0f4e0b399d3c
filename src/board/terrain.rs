//! Terrain grid consulted when units collect resources

use ahash::AHashMap;
use serde::Serialize;

use crate::core::types::{Coord, Dice};

/// Terrain class of a board tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    /// Richest yield
    Plains,
    Forest,
    /// Poorest yield
    Mountain,
}

impl Terrain {
    /// Map a d10 roll to terrain: 0-5 plains, 6-8 forest, 9 mountain
    pub fn from_roll(roll: i32) -> Self {
        match roll {
            i32::MIN..=5 => Terrain::Plains,
            6..=8 => Terrain::Forest,
            _ => Terrain::Mountain,
        }
    }
}

/// Terrain over the board's nominal dimensions
///
/// Tiles are settled on first lookup and kept, so the header's dimensions
/// never drive an allocation.
#[derive(Debug, Clone)]
pub struct TerrainMap {
    rows: i32,
    cols: i32,
    /// Terrain every tile takes; `None` rolls a d10 per tile
    fill: Option<Terrain>,
    tiles: AHashMap<Coord, Terrain>,
}

impl TerrainMap {
    /// Tiles rolled from the dice the first time they are looked up
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
            fill: None,
            tiles: AHashMap::new(),
        }
    }

    /// Every tile set to `terrain`
    pub fn uniform(rows: i32, cols: i32, terrain: Terrain) -> Self {
        Self {
            fill: Some(terrain),
            ..Self::new(rows, cols)
        }
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn contains(&self, at: Coord) -> bool {
        (0..self.rows).contains(&at.x) && (0..self.cols).contains(&at.y)
    }

    /// Terrain already settled at `at`, without rolling
    pub fn get(&self, at: Coord) -> Option<Terrain> {
        if !self.contains(at) {
            return None;
        }
        self.tiles.get(&at).copied().or(self.fill)
    }

    /// Terrain at `at`, rolling it on first lookup. `None` outside the grid.
    pub fn tile<D: Dice + ?Sized>(&mut self, at: Coord, dice: &mut D) -> Option<Terrain> {
        if !self.contains(at) {
            return None;
        }
        if let Some(terrain) = self.fill {
            return Some(terrain);
        }
        let terrain = *self
            .tiles
            .entry(at)
            .or_insert_with(|| Terrain::from_roll(dice.roll(10)));
        Some(terrain)
    }

    /// Tiles rolled so far
    pub fn rolled(&self) -> usize {
        self.tiles.len()
    }
}
