//! Parsed script commands

use std::fmt;

use serde::Serialize;

use crate::core::types::Coord;
use crate::entity::{BuildingType, UnitType};

/// Declared result of an engagement (`vence` / `perde`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Victory,
    Defeat,
}

/// One command of the script
///
/// `actor` fields hold the first token of the command line: a faction name
/// for faction actions, a unit name for unit actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    Alliance { faction: String, ally: String },
    Attack { attacker: String, defender: String },
    Combat { attacker: String, defender: String },
    PositionFaction { faction: String, at: Coord },
    PositionUnit { unit: String, kind: UnitType, at: Coord },
    Move { unit: String, to: Coord },
    Collect { unit: String },
    Build { faction: String, kind: BuildingType, at: Coord },
    Defend { faction: String },
    Earn { faction: String, amount: i32 },
    Outcome { actor: String, outcome: OutcomeKind, opponent: String },
    Unknown { actor: String, keyword: String },
}

impl Command {
    /// First token of the command line
    pub fn actor(&self) -> &str {
        match self {
            Command::Alliance { faction, .. }
            | Command::PositionFaction { faction, .. }
            | Command::Build { faction, .. }
            | Command::Defend { faction }
            | Command::Earn { faction, .. } => faction,
            Command::Attack { attacker, .. } | Command::Combat { attacker, .. } => attacker,
            Command::PositionUnit { unit, .. }
            | Command::Move { unit, .. }
            | Command::Collect { unit } => unit,
            Command::Outcome { actor, .. } | Command::Unknown { actor, .. } => actor,
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Command::Alliance { .. } => ActionKind::Alliance,
            Command::Attack { .. } => ActionKind::Attack,
            Command::Combat { .. } => ActionKind::Combat,
            Command::PositionFaction { .. } => ActionKind::PositionFaction,
            Command::PositionUnit { .. } => ActionKind::PositionUnit,
            Command::Move { .. } => ActionKind::Move,
            Command::Collect { .. } => ActionKind::Collect,
            Command::Build { .. } => ActionKind::Build,
            Command::Defend { .. } => ActionKind::Defend,
            Command::Earn { .. } => ActionKind::Earn,
            Command::Outcome { .. } => ActionKind::Outcome,
            Command::Unknown { .. } => ActionKind::Unknown,
        }
    }
}

/// Action a command performs, without its arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Alliance,
    Attack,
    Combat,
    PositionFaction,
    PositionUnit,
    Move,
    Collect,
    Build,
    Defend,
    Earn,
    Outcome,
    Unknown,
}

impl ActionKind {
    /// Script keyword introducing the action
    pub fn keyword(self) -> &'static str {
        match self {
            ActionKind::Alliance => "alianca",
            ActionKind::Attack => "ataca",
            ActionKind::Combat => "combate",
            ActionKind::PositionFaction | ActionKind::PositionUnit => "pos",
            ActionKind::Move => "move",
            ActionKind::Collect => "coleta",
            ActionKind::Build => "constroi",
            ActionKind::Defend => "defende",
            ActionKind::Earn => "ganha",
            ActionKind::Outcome => "vence/perde",
            ActionKind::Unknown => "?",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActionKind::Alliance => "alliance",
            ActionKind::Attack => "attack",
            ActionKind::Combat => "combat",
            ActionKind::PositionFaction => "faction placement",
            ActionKind::PositionUnit => "unit placement",
            ActionKind::Move => "move",
            ActionKind::Collect => "collection",
            ActionKind::Build => "construction",
            ActionKind::Defend => "defense",
            ActionKind::Earn => "power gain",
            ActionKind::Outcome => "outcome",
            ActionKind::Unknown => "unknown action",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_and_kind() {
        let command = Command::Move {
            unit: "1a".into(),
            to: Coord::new(3, 4),
        };
        assert_eq!(command.actor(), "1a");
        assert_eq!(command.kind(), ActionKind::Move);
        assert_eq!(command.kind().keyword(), "move");
    }

    #[test]
    fn test_command_serialization() {
        let command = Command::Earn {
            faction: "F1".into(),
            amount: 5,
        };
        let json = serde_json::to_string(&command).unwrap();
        assert_eq!(json, r#"{"action":"earn","faction":"F1","amount":5}"#);
    }
}
