//! Game entities: factions, units and buildings

pub mod building;
pub mod faction;
pub mod unit;

pub use building::{Building, BuildingKey, BuildingType};
pub use faction::{Alliance, Faction};
pub use unit::{owning_faction_name, Unit, UnitType};
