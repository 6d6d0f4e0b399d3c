//! Transcript events

use std::fmt;

use serde::Serialize;

use crate::board::Terrain;
use crate::core::types::Coord;
use crate::entity::{BuildingType, Faction, UnitType};
use crate::script::{ActionKind, OutcomeKind};

/// Name and holdings of a faction at one point of the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactionStatus {
    pub name: String,
    pub resources: i32,
    pub power: i32,
}

impl FactionStatus {
    pub fn score(&self) -> i64 {
        i64::from(self.power) + i64::from(self.resources)
    }
}

impl From<&Faction> for FactionStatus {
    fn from(faction: &Faction) -> Self {
        Self {
            name: faction.name.clone(),
            resources: faction.resources,
            power: faction.power,
        }
    }
}

/// Why an action left the game state untouched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    FactionNotFound { name: String },
    UnitNotFound { name: String },
    DuplicateFaction { name: String },
    DuplicateUnit { name: String },
    /// `pos` form does not match the remaining faction budget
    PlacementOutOfTurn,
    CellFull { at: Coord },
    OffMap { at: Coord },
    SelfCombat,
    SelfAlliance,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::FactionNotFound { name } => write!(f, "faction {name} not found"),
            SkipReason::UnitNotFound { name } => write!(f, "unit {name} not found"),
            SkipReason::DuplicateFaction { name } => {
                write!(f, "faction {name} is already positioned")
            }
            SkipReason::DuplicateUnit { name } => write!(f, "unit {name} is already positioned"),
            SkipReason::PlacementOutOfTurn => {
                f.write_str("placement does not match the faction budget")
            }
            SkipReason::CellFull { at } => write!(f, "cell {at} has no free unit slot"),
            SkipReason::OffMap { at } => write!(f, "{at} lies outside the terrain grid"),
            SkipReason::SelfCombat => f.write_str("a unit cannot fight itself"),
            SkipReason::SelfAlliance => f.write_str("a faction cannot ally with itself"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatOutcome {
    AttackerWon,
    DefenderWon,
    Draw,
}

/// Resources moved back by a defense
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recovery {
    pub attacker: FactionStatus,
    pub defender: FactionStatus,
    pub amount: i32,
}

/// One entry of the run transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    AllianceFormed {
        faction: String,
        ally: String,
        faction_power: i32,
        ally_power: i32,
    },
    AttackMade {
        attacker: FactionStatus,
        defender: FactionStatus,
        stolen: i32,
    },
    CombatResolved {
        attacker: String,
        defender: String,
        attacker_roll: i32,
        defender_roll: i32,
        outcome: CombatOutcome,
        /// Unit taken off the board, `None` on a draw
        removed: Option<String>,
    },
    FactionPlaced {
        faction: FactionStatus,
        at: Coord,
        /// The cell already held another faction marker
        marked: bool,
    },
    UnitPlaced {
        unit: String,
        kind: UnitType,
        at: Coord,
    },
    FactionReinforced {
        faction: String,
        gain: i32,
        power: i32,
    },
    UnitMoved {
        unit: String,
        from: Coord,
        to: Coord,
    },
    ResourcesCollected {
        unit: String,
        faction: String,
        terrain: Terrain,
        amount: i32,
        resources: i32,
    },
    BuildingConstructed {
        faction: String,
        kind: BuildingType,
        at: Coord,
        cost: i32,
        power_gain: i32,
        resources: i32,
        power: i32,
    },
    DefenseMounted {
        defender: String,
        /// `None` when the defender was not the last faction attacked
        recovered: Option<Recovery>,
    },
    PowerEarned {
        faction: String,
        amount: i32,
        power: i32,
    },
    OutcomeDeclared {
        actor: String,
        outcome: OutcomeKind,
        opponent: String,
    },
    ActionSkipped {
        action: ActionKind,
        actor: String,
        reason: SkipReason,
    },
    CommandIgnored {
        actor: String,
        keyword: String,
    },
    BoardSnapshot {
        rendered: String,
    },
    TurnEnded {
        turn: u32,
        /// Newest faction first
        factions: Vec<FactionStatus>,
    },
    Victory {
        winner: Option<FactionStatus>,
    },
}
