//! Resource collection, construction and power gains

use crate::board::Placement;
use crate::core::error::Result;
use crate::core::types::{Coord, Dice};
use crate::engine::state::Engine;
use crate::entity::{owning_faction_name, Building, BuildingType};
use crate::script::ActionKind;
use crate::transcript::{Event, SkipReason, TranscriptSink};

impl<D: Dice> Engine<D> {
    /// Credit the unit's faction with the yield of the tile it stands on
    pub(super) fn collect(&mut self, unit: &str, sink: &mut dyn TranscriptSink) -> Result<()> {
        let Some((kind, at)) = self.units.get(unit).map(|u| (u.kind, u.position)) else {
            return self.skip(
                sink,
                ActionKind::Collect,
                unit,
                SkipReason::UnitNotFound { name: unit.to_string() },
            );
        };
        let owner = owning_faction_name(unit).unwrap_or_default();
        let Some(faction) = self.factions.get_mut(owner.as_str()) else {
            return self.skip(
                sink,
                ActionKind::Collect,
                unit,
                SkipReason::FactionNotFound { name: owner },
            );
        };
        let Some(terrain) = self.terrain.tile(at, &mut self.dice) else {
            return self.skip(sink, ActionKind::Collect, unit, SkipReason::OffMap { at });
        };

        let amount = kind.collection_yield(terrain);
        faction.resources = faction.resources.saturating_add(amount);
        let resources = faction.resources;

        sink.record(&Event::ResourcesCollected {
            unit: unit.to_string(),
            faction: owner,
            terrain,
            amount,
            resources,
        })
    }

    pub(super) fn build(
        &mut self,
        faction: &str,
        kind: BuildingType,
        at: Coord,
        sink: &mut dyn TranscriptSink,
    ) -> Result<()> {
        let Some(owner) = self.factions.get_mut(faction) else {
            return self.skip(
                sink,
                ActionKind::Build,
                faction,
                SkipReason::FactionNotFound { name: faction.to_string() },
            );
        };
        let (cost, power_gain) = (kind.cost(), kind.power_yield());
        owner.resources = owner.resources.saturating_sub(cost);
        owner.power = owner.power.saturating_add(power_gain);
        let (resources, power) = (owner.resources, owner.power);

        let building = Building::new(at, faction, kind);
        self.board.put(at, Placement::building(building.key()));
        self.buildings.insert(building.key(), building);

        sink.record(&Event::BuildingConstructed {
            faction: faction.to_string(),
            kind,
            at,
            cost,
            power_gain,
            resources,
            power,
        })?;
        self.snapshot(sink)
    }

    pub(super) fn earn(
        &mut self,
        faction: &str,
        amount: i32,
        sink: &mut dyn TranscriptSink,
    ) -> Result<()> {
        let Some(f) = self.factions.get_mut(faction) else {
            return self.skip(
                sink,
                ActionKind::Earn,
                faction,
                SkipReason::FactionNotFound { name: faction.to_string() },
            );
        };
        f.power = f.power.saturating_add(amount);
        let power = f.power;

        sink.record(&Event::PowerEarned {
            faction: faction.to_string(),
            amount,
            power,
        })
    }
}
