//! Board cells and the put / get / remove primitives
//!
//! Cells are created lazily on first occupancy. Putting into an existing
//! cell only fills empty slots, so nothing is ever overwritten; callers
//! that need to change an occupied slot remove the whole cell and put back
//! what they want to keep.

use ahash::AHashMap;

use crate::core::types::Coord;
use crate::entity::BuildingKey;

/// Units a single cell can hold
pub const UNIT_SLOTS: usize = 3;

/// One of the unit slots of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitSlot {
    Primary,
    Secondary,
    Tertiary,
}

impl UnitSlot {
    pub const ALL: [UnitSlot; UNIT_SLOTS] =
        [UnitSlot::Primary, UnitSlot::Secondary, UnitSlot::Tertiary];

    #[inline]
    fn index(self) -> usize {
        match self {
            UnitSlot::Primary => 0,
            UnitSlot::Secondary => 1,
            UnitSlot::Tertiary => 2,
        }
    }
}

/// Occupants of one board coordinate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    faction: Option<String>,
    building: Option<BuildingKey>,
    units: [Option<String>; UNIT_SLOTS],
}

impl Cell {
    pub fn faction(&self) -> Option<&str> {
        self.faction.as_deref()
    }

    pub fn building(&self) -> Option<&BuildingKey> {
        self.building.as_ref()
    }

    pub fn unit(&self, slot: UnitSlot) -> Option<&str> {
        self.units[slot.index()].as_deref()
    }

    /// Occupied unit slots in slot order
    pub fn units(&self) -> impl Iterator<Item = &str> + '_ {
        self.units.iter().flatten().map(String::as_str)
    }

    pub fn unit_count(&self) -> usize {
        self.units.iter().filter(|u| u.is_some()).count()
    }

    pub fn has_free_unit_slot(&self) -> bool {
        self.units.iter().any(Option::is_none)
    }

    pub fn holds_unit(&self, name: &str) -> bool {
        self.units().any(|u| u == name)
    }

    pub fn is_empty(&self) -> bool {
        self.faction.is_none() && self.building.is_none() && self.unit_count() == 0
    }

    /// Split into `(faction, building, units)`
    pub fn into_parts(self) -> (Option<String>, Option<BuildingKey>, [Option<String>; UNIT_SLOTS]) {
        (self.faction, self.building, self.units)
    }

    fn merge(&mut self, placement: Placement) -> PutOutcome {
        let mut outcome = PutOutcome::default();

        if let Some(faction) = placement.faction {
            if self.faction.is_none() {
                self.faction = Some(faction);
                outcome.faction = true;
            }
        }

        if let Some(building) = placement.building {
            if self.building.is_none() {
                self.building = Some(building);
                outcome.building = true;
            }
        }

        if let Some(unit) = placement.unit {
            if let Some(slot) = self.units.iter_mut().find(|slot| slot.is_none()) {
                *slot = Some(unit);
                outcome.unit = true;
            }
        }

        outcome
    }
}

/// Occupants to put into a cell; absent fields leave the cell untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    pub unit: Option<String>,
    pub building: Option<BuildingKey>,
    pub faction: Option<String>,
}

impl Placement {
    pub fn unit(name: impl Into<String>) -> Self {
        Self {
            unit: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn building(key: BuildingKey) -> Self {
        Self {
            building: Some(key),
            ..Self::default()
        }
    }

    pub fn faction(name: impl Into<String>) -> Self {
        Self {
            faction: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.unit.is_none() && self.building.is_none() && self.faction.is_none()
    }
}

/// Which parts of a [`Placement`] were stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PutOutcome {
    pub unit: bool,
    pub building: bool,
    pub faction: bool,
}

/// Sparse map from coordinates to cells
///
/// Dimensions only bound rendering; any coordinate can hold a cell.
#[derive(Debug, Clone, Default)]
pub struct Board {
    rows: i32,
    cols: i32,
    cells: AHashMap<Coord, Cell>,
}

impl Board {
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            cells: AHashMap::new(),
        }
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of cells currently allocated
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    /// Merge a placement into the cell at `at`, creating the cell if needed
    pub fn put(&mut self, at: Coord, placement: Placement) -> PutOutcome {
        if placement.is_empty() {
            return PutOutcome::default();
        }
        self.cells.entry(at).or_default().merge(placement)
    }

    pub fn cell(&self, at: Coord) -> Option<&Cell> {
        self.cells.get(&at)
    }

    pub fn faction_at(&self, at: Coord) -> Option<&str> {
        self.cell(at).and_then(Cell::faction)
    }

    pub fn building_at(&self, at: Coord) -> Option<&BuildingKey> {
        self.cell(at).and_then(Cell::building)
    }

    pub fn unit_at(&self, at: Coord, slot: UnitSlot) -> Option<&str> {
        self.cell(at).and_then(|cell| cell.unit(slot))
    }

    /// True if a unit could be put at `at` without being dropped
    pub fn has_room_for_unit(&self, at: Coord) -> bool {
        self.cell(at).map_or(true, Cell::has_free_unit_slot)
    }

    /// Delete the whole cell at `at`, returning what it held
    pub fn remove(&mut self, at: Coord) -> Option<Cell> {
        self.cells.remove(&at)
    }
}
