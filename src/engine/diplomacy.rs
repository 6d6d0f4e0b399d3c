//! Faction-level actions: alliance, attack, defense

use crate::core::error::Result;
use crate::core::types::Dice;
use crate::engine::state::{AttackRecord, Engine};
use crate::script::ActionKind;
use crate::transcript::{Event, FactionStatus, Recovery, SkipReason, TranscriptSink};

impl<D: Dice> Engine<D> {
    /// Reciprocal alliance; both sides end with the sum of their powers
    pub(super) fn form_alliance(
        &mut self,
        faction: &str,
        ally: &str,
        sink: &mut dyn TranscriptSink,
    ) -> Result<()> {
        if let Some(missing) = self.first_missing([faction, ally]) {
            return self.skip(
                sink,
                ActionKind::Alliance,
                faction,
                SkipReason::FactionNotFound { name: missing.to_string() },
            );
        }
        if faction == ally {
            return self.skip(sink, ActionKind::Alliance, faction, SkipReason::SelfAlliance);
        }

        let pre_faction = self.factions.get(faction).map_or(0, |f| f.power);
        let pre_ally = self.factions.get(ally).map_or(0, |f| f.power);
        let merged = pre_faction.saturating_add(pre_ally);

        for (side, other) in [(faction, ally), (ally, faction)] {
            if let Some(f) = self.factions.get_mut(side) {
                f.add_alliance(other);
                f.power = merged;
            }
        }

        sink.record(&Event::AllianceFormed {
            faction: faction.to_string(),
            ally: ally.to_string(),
            faction_power: merged,
            ally_power: merged,
        })
    }

    /// Steal a random amount of resources and remember it for `defende`
    pub(super) fn attack(
        &mut self,
        attacker: &str,
        defender: &str,
        sink: &mut dyn TranscriptSink,
    ) -> Result<()> {
        if let Some(missing) = self.first_missing([attacker, defender]) {
            return self.skip(
                sink,
                ActionKind::Attack,
                attacker,
                SkipReason::FactionNotFound { name: missing.to_string() },
            );
        }

        let stolen = self.dice.roll(self.config.attack_loot_ceiling);
        self.shift_resources(attacker, defender, stolen);
        self.last_attack = Some(AttackRecord {
            attacker: attacker.to_string(),
            defender: defender.to_string(),
            amount: stolen,
        });

        sink.record(&Event::AttackMade {
            attacker: self.status(attacker),
            defender: self.status(defender),
            stolen,
        })
    }

    /// Undo the last attack if `faction` was its victim
    pub(super) fn defend(&mut self, faction: &str, sink: &mut dyn TranscriptSink) -> Result<()> {
        if !self.factions.contains(faction) {
            return self.skip(
                sink,
                ActionKind::Defend,
                faction,
                SkipReason::FactionNotFound { name: faction.to_string() },
            );
        }

        let record = match self.last_attack.take() {
            Some(record) if record.defender == faction => record,
            other => {
                self.last_attack = other;
                return sink.record(&Event::DefenseMounted {
                    defender: faction.to_string(),
                    recovered: None,
                });
            }
        };

        if !self.factions.contains(record.attacker.as_str()) {
            let name = record.attacker.clone();
            self.last_attack = Some(record);
            let reason = SkipReason::FactionNotFound { name };
            return self.skip(sink, ActionKind::Defend, faction, reason);
        }

        self.shift_resources(faction, &record.attacker, record.amount);

        sink.record(&Event::DefenseMounted {
            defender: faction.to_string(),
            recovered: Some(Recovery {
                attacker: self.status(&record.attacker),
                defender: self.status(faction),
                amount: record.amount,
            }),
        })
    }

    fn first_missing<'n>(&self, names: [&'n str; 2]) -> Option<&'n str> {
        names.into_iter().find(|name| !self.factions.contains(*name))
    }

    /// Move `amount` resources from `from` to `to`
    fn shift_resources(&mut self, to: &str, from: &str, amount: i32) {
        if let Some(f) = self.factions.get_mut(to) {
            f.resources = f.resources.saturating_add(amount);
        }
        if let Some(f) = self.factions.get_mut(from) {
            f.resources = f.resources.saturating_sub(amount);
        }
    }

    pub(super) fn status(&self, name: &str) -> FactionStatus {
        self.factions
            .get(name)
            .map(FactionStatus::from)
            .unwrap_or_else(|| FactionStatus {
                name: name.to_string(),
                resources: 0,
                power: 0,
            })
    }
}
