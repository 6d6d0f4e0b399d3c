//! Unit combat
//!
//! Each side rolls its type's attack die; the higher roll wins and the loser
//! leaves both the board and the unit registry. Equal rolls change nothing.

use crate::core::error::Result;
use crate::core::types::Dice;
use crate::engine::placement::evict_unit;
use crate::engine::state::Engine;
use crate::script::ActionKind;
use crate::transcript::{CombatOutcome, Event, SkipReason, TranscriptSink};

pub fn resolve(attacker_roll: i32, defender_roll: i32) -> CombatOutcome {
    match attacker_roll.cmp(&defender_roll) {
        std::cmp::Ordering::Greater => CombatOutcome::AttackerWon,
        std::cmp::Ordering::Less => CombatOutcome::DefenderWon,
        std::cmp::Ordering::Equal => CombatOutcome::Draw,
    }
}

impl<D: Dice> Engine<D> {
    pub(super) fn combat(
        &mut self,
        attacker: &str,
        defender: &str,
        sink: &mut dyn TranscriptSink,
    ) -> Result<()> {
        let (Some(a), Some(d)) = (self.units.get(attacker), self.units.get(defender)) else {
            let missing = if self.units.contains(attacker) { defender } else { attacker };
            return self.skip(
                sink,
                ActionKind::Combat,
                attacker,
                SkipReason::UnitNotFound { name: missing.to_string() },
            );
        };
        if attacker == defender {
            return self.skip(sink, ActionKind::Combat, attacker, SkipReason::SelfCombat);
        }
        let (attacker_die, defender_die) = (a.kind.attack_die(), d.kind.attack_die());

        let attacker_roll = self.dice.roll(attacker_die);
        let defender_roll = self.dice.roll(defender_die);
        let outcome = resolve(attacker_roll, defender_roll);

        let loser = match outcome {
            CombatOutcome::AttackerWon => Some(defender),
            CombatOutcome::DefenderWon => Some(attacker),
            CombatOutcome::Draw => None,
        };
        if let Some(loser) = loser {
            if let Some(unit) = self.units.remove(loser) {
                evict_unit(&mut self.board, unit.position, loser);
            }
        }

        sink.record(&Event::CombatResolved {
            attacker: attacker.to_string(),
            defender: defender.to_string(),
            attacker_roll,
            defender_roll,
            outcome,
            removed: loser.map(str::to_string),
        })?;
        self.snapshot(sink)
    }
}
