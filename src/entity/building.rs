//! Buildings and their construction table

use serde::Serialize;

use crate::core::types::Coord;

/// Type of building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildingType {
    ResourceBuilding,
    TrainingCamp,
    ResearchLab,
}

impl BuildingType {
    /// Decode a script type code: 1 and 2 name their types, every other code is a research lab.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => BuildingType::ResourceBuilding,
            2 => BuildingType::TrainingCamp,
            _ => BuildingType::ResearchLab,
        }
    }

    /// Resources spent by the owning faction
    pub fn cost(self) -> i32 {
        match self {
            BuildingType::ResourceBuilding => 10,
            BuildingType::TrainingCamp => 30,
            BuildingType::ResearchLab => 20,
        }
    }

    /// Power gained by the owning faction
    pub fn power_yield(self) -> i32 {
        match self {
            BuildingType::ResourceBuilding => 10,
            BuildingType::TrainingCamp => 30,
            BuildingType::ResearchLab => 20,
        }
    }
}

/// Identity of a building: where it stands and who owns it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BuildingKey {
    pub position: Coord,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Building {
    pub position: Coord,
    pub owner: String,
    pub kind: BuildingType,
}

impl Building {
    pub fn new(position: Coord, owner: impl Into<String>, kind: BuildingType) -> Self {
        Self {
            position,
            owner: owner.into(),
            kind,
        }
    }

    pub fn key(&self) -> BuildingKey {
        BuildingKey {
            position: self.position,
            owner: self.owner.clone(),
        }
    }
}
