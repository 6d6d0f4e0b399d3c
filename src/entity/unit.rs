//! Units and the unit-to-faction naming rule

use serde::Serialize;

use crate::board::Terrain;
use crate::core::types::Coord;

/// Kind of unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitType {
    Soldier,
    Explorer,
}

impl UnitType {
    /// Decode a script type code. 1 is a soldier; every other code is an explorer.
    pub fn from_code(code: i32) -> Self {
        if code == 1 {
            UnitType::Soldier
        } else {
            UnitType::Explorer
        }
    }

    /// Power the owning faction gains when this unit is positioned
    pub fn power_bonus(self) -> i32 {
        match self {
            UnitType::Soldier => 25,
            UnitType::Explorer => 10,
        }
    }

    /// Exclusive upper bound of this unit's combat roll
    pub fn attack_die(self) -> i32 {
        match self {
            UnitType::Soldier => 10,
            UnitType::Explorer => 6,
        }
    }

    /// Resources gathered by one collection on the given terrain
    pub fn collection_yield(self, terrain: Terrain) -> i32 {
        match (self, terrain) {
            (UnitType::Soldier, Terrain::Plains) => 30,
            (UnitType::Soldier, Terrain::Forest) => 20,
            (UnitType::Soldier, Terrain::Mountain) => 10,
            (UnitType::Explorer, Terrain::Plains) => 50,
            (UnitType::Explorer, Terrain::Forest) => 40,
            (UnitType::Explorer, Terrain::Mountain) => 30,
        }
    }
}

/// A unit on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unit {
    pub name: String,
    pub kind: UnitType,
    /// Must match the cell the board lists this unit under
    pub position: Coord,
}

impl Unit {
    pub fn new(name: impl Into<String>, kind: UnitType, position: Coord) -> Self {
        Self {
            name: name.into(),
            kind,
            position,
        }
    }

    /// Name of the faction this unit belongs to, see [`owning_faction_name`]
    pub fn owning_faction(&self) -> Option<String> {
        owning_faction_name(&self.name)
    }
}

/// Faction owning a unit: `"F"` followed by the first character of the unit's name.
///
/// Units carry no back-reference to their faction; scripts name units so
/// that `U1` belongs to `FU`, `1a` belongs to `F1`, and so on.
pub fn owning_faction_name(unit_name: &str) -> Option<String> {
    unit_name.chars().next().map(|initial| format!("F{initial}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_codes() {
        assert_eq!(UnitType::from_code(1), UnitType::Soldier);
        assert_eq!(UnitType::from_code(2), UnitType::Explorer);
        assert_eq!(UnitType::from_code(7), UnitType::Explorer);
    }

    #[test]
    fn test_rule_table() {
        assert_eq!(UnitType::Soldier.power_bonus(), 25);
        assert_eq!(UnitType::Explorer.power_bonus(), 10);
        assert_eq!(UnitType::Soldier.attack_die(), 10);
        assert_eq!(UnitType::Explorer.attack_die(), 6);
    }

    #[test]
    fn test_collection_yields() {
        let soldier: Vec<i32> = [Terrain::Plains, Terrain::Forest, Terrain::Mountain]
            .into_iter()
            .map(|t| UnitType::Soldier.collection_yield(t))
            .collect();
        let explorer: Vec<i32> = [Terrain::Plains, Terrain::Forest, Terrain::Mountain]
            .into_iter()
            .map(|t| UnitType::Explorer.collection_yield(t))
            .collect();
        assert_eq!(soldier, vec![30, 20, 10]);
        assert_eq!(explorer, vec![50, 40, 30]);
    }

    #[test]
    fn test_owning_faction_name() {
        assert_eq!(owning_faction_name("1a"), Some("F1".to_string()));
        assert_eq!(owning_faction_name("U1"), Some("FU".to_string()));
        assert_eq!(owning_faction_name(""), None);

        let unit = Unit::new("2b", UnitType::Soldier, Coord::new(0, 0));
        assert_eq!(unit.owning_faction().as_deref(), Some("F2"));
    }
}
