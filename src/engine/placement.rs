//! Positioning factions and units, and moving units
//!
//! A unit's stored position and the board slot holding its name always
//! agree. Relocation clears the old cell, puts back everything except the
//! moving unit, then puts the unit at its destination.

use crate::board::{Board, Placement};
use crate::core::error::Result;
use crate::core::types::{Coord, Dice};
use crate::engine::state::Engine;
use crate::entity::{owning_faction_name, Faction, Unit, UnitType};
use crate::script::ActionKind;
use crate::transcript::{Event, FactionStatus, SkipReason, TranscriptSink};

/// Take `unit` out of the cell at `at`, keeping every other occupant
///
/// Returns false if the cell did not hold the unit.
pub fn evict_unit(board: &mut Board, at: Coord, unit: &str) -> bool {
    let Some(cell) = board.remove(at) else {
        return false;
    };
    let held = cell.holds_unit(unit);
    let (faction, building, units) = cell.into_parts();

    board.put(
        at,
        Placement {
            unit: None,
            building,
            faction,
        },
    );
    for survivor in units.into_iter().flatten().filter(|u| u != unit) {
        board.put(at, Placement::unit(survivor));
    }

    held
}

impl<D: Dice> Engine<D> {
    pub(super) fn position_faction(
        &mut self,
        name: &str,
        at: Coord,
        sink: &mut dyn TranscriptSink,
    ) -> Result<()> {
        if self.placement_budget == 0 {
            let reason = SkipReason::PlacementOutOfTurn;
            return self.skip(sink, ActionKind::PositionFaction, name, reason);
        }
        self.placement_budget -= 1;

        if self.factions.contains(name) {
            return self.skip(
                sink,
                ActionKind::PositionFaction,
                name,
                SkipReason::DuplicateFaction { name: name.to_string() },
            );
        }

        let (resources, power) = (self.config.starting_resources, self.config.starting_power);
        let faction = Faction::new(name, resources, power);
        let status = FactionStatus::from(&faction);
        let stored = self.board.put(at, Placement::faction(name));
        self.factions.insert(name.to_string(), faction);

        sink.record(&Event::FactionPlaced {
            faction: status,
            at,
            marked: !stored.faction,
        })?;
        self.snapshot(sink)
    }

    pub(super) fn position_unit(
        &mut self,
        name: &str,
        kind: UnitType,
        at: Coord,
        sink: &mut dyn TranscriptSink,
    ) -> Result<()> {
        if self.placement_budget > 0 {
            return self.skip(sink, ActionKind::PositionUnit, name, SkipReason::PlacementOutOfTurn);
        }
        if self.units.contains(name) {
            return self.skip(
                sink,
                ActionKind::PositionUnit,
                name,
                SkipReason::DuplicateUnit { name: name.to_string() },
            );
        }
        if !self.board.has_room_for_unit(at) {
            return self.skip(sink, ActionKind::PositionUnit, name, SkipReason::CellFull { at });
        }

        self.board.put(at, Placement::unit(name));
        self.units.insert(name.to_string(), Unit::new(name, kind, at));
        sink.record(&Event::UnitPlaced {
            unit: name.to_string(),
            kind,
            at,
        })?;

        let owner = owning_faction_name(name).unwrap_or_default();
        let gain = kind.power_bonus();
        match self.factions.get_mut(owner.as_str()) {
            Some(faction) => {
                faction.power = faction.power.saturating_add(gain);
                let power = faction.power;
                sink.record(&Event::FactionReinforced {
                    faction: owner,
                    gain,
                    power,
                })?;
            }
            None => {
                let reason = SkipReason::FactionNotFound { name: owner };
                self.skip(sink, ActionKind::PositionUnit, name, reason)?;
            }
        }

        self.snapshot(sink)
    }

    pub(super) fn move_unit(
        &mut self,
        name: &str,
        to: Coord,
        sink: &mut dyn TranscriptSink,
    ) -> Result<()> {
        let Some(from) = self.units.get(name).map(|u| u.position) else {
            return self.skip(
                sink,
                ActionKind::Move,
                name,
                SkipReason::UnitNotFound { name: name.to_string() },
            );
        };
        if from != to && !self.board.has_room_for_unit(to) {
            return self.skip(sink, ActionKind::Move, name, SkipReason::CellFull { at: to });
        }

        evict_unit(&mut self.board, from, name);
        self.board.put(to, Placement::unit(name));
        if let Some(unit) = self.units.get_mut(name) {
            unit.position = to;
        }

        sink.record(&Event::UnitMoved {
            unit: name.to_string(),
            from,
            to,
        })?;
        self.snapshot(sink)
    }
}
