//! Engine state and the per-command turn loop

use tracing::{debug, info, warn};

use crate::board::{Board, TerrainMap};
use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::Dice;
use crate::engine::scoring::select_winner;
use crate::registry::{BuildingRegistry, FactionRegistry, UnitRegistry};
use crate::script::{ActionKind, Command, Header, ScriptError, ScriptReader};
use crate::transcript::{Event, FactionStatus, SkipReason, TranscriptSink};

/// The most recent attack, kept so the victim can answer it with `defende`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackRecord {
    pub attacker: String,
    pub defender: String,
    pub amount: i32,
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Commands processed
    pub turns: u32,
    pub winner: Option<FactionStatus>,
    /// Set when an unreadable command ended the script early
    pub halted_by: Option<ScriptError>,
}

/// Owns the board and registries for one run and applies commands to them
pub struct Engine<D: Dice> {
    pub(super) config: SimulationConfig,
    pub(super) board: Board,
    pub(super) terrain: TerrainMap,
    pub(super) factions: FactionRegistry,
    pub(super) units: UnitRegistry,
    pub(super) buildings: BuildingRegistry,
    /// Factions still to be positioned; while non-zero `pos` places factions
    pub(super) placement_budget: u32,
    pub(super) last_attack: Option<AttackRecord>,
    pub(super) dice: D,
    pub(super) turn: u32,
}

impl<D: Dice> Engine<D> {
    /// Build an engine for the board described by `header`
    ///
    /// Terrain tiles are rolled from `dice` the first time a unit collects on them.
    pub fn new(config: SimulationConfig, header: &Header, dice: D) -> Self {
        let terrain = TerrainMap::new(header.rows, header.cols);
        Self::with_terrain(config, header, terrain, dice)
    }

    /// Build an engine on a prepared terrain grid
    pub fn with_terrain(
        config: SimulationConfig,
        header: &Header,
        terrain: TerrainMap,
        dice: D,
    ) -> Self {
        Self {
            config,
            board: Board::new(header.rows, header.cols),
            terrain,
            factions: FactionRegistry::new(),
            units: UnitRegistry::new(),
            buildings: BuildingRegistry::new(),
            placement_budget: u32::try_from(header.faction_count).unwrap_or(0),
            last_attack: None,
            dice,
            turn: 0,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn terrain(&self) -> &TerrainMap {
        &self.terrain
    }

    pub fn factions(&self) -> &FactionRegistry {
        &self.factions
    }

    pub fn units(&self) -> &UnitRegistry {
        &self.units
    }

    pub fn buildings(&self) -> &BuildingRegistry {
        &self.buildings
    }

    pub fn placement_budget(&self) -> u32 {
        self.placement_budget
    }

    pub fn last_attack(&self) -> Option<&AttackRecord> {
        self.last_attack.as_ref()
    }

    /// Turns played so far
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Apply one command and close its turn with a faction summary
    pub fn apply(&mut self, command: &Command, sink: &mut dyn TranscriptSink) -> Result<()> {
        self.turn += 1;
        debug!(
            turn = self.turn,
            actor = command.actor(),
            action = %command.kind(),
            "applying command"
        );

        match command {
            Command::Alliance { faction, ally } => self.form_alliance(faction, ally, sink)?,
            Command::Attack { attacker, defender } => self.attack(attacker, defender, sink)?,
            Command::Combat { attacker, defender } => self.combat(attacker, defender, sink)?,
            Command::PositionFaction { faction, at } => self.position_faction(faction, *at, sink)?,
            Command::PositionUnit { unit, kind, at } => self.position_unit(unit, *kind, *at, sink)?,
            Command::Move { unit, to } => self.move_unit(unit, *to, sink)?,
            Command::Collect { unit } => self.collect(unit, sink)?,
            Command::Build { faction, kind, at } => self.build(faction, *kind, *at, sink)?,
            Command::Defend { faction } => self.defend(faction, sink)?,
            Command::Earn { faction, amount } => self.earn(faction, *amount, sink)?,
            Command::Outcome {
                actor,
                outcome,
                opponent,
            } => sink.record(&Event::OutcomeDeclared {
                actor: actor.clone(),
                outcome: *outcome,
                opponent: opponent.clone(),
            })?,
            Command::Unknown { actor, keyword } => {
                debug!(actor = %actor, keyword = %keyword, "ignoring unknown action");
                sink.record(&Event::CommandIgnored {
                    actor: actor.clone(),
                    keyword: keyword.clone(),
                })?
            }
        }

        sink.record(&Event::TurnEnded {
            turn: self.turn,
            factions: self.factions.values().map(FactionStatus::from).collect(),
        })
    }

    /// Read and apply commands until the script ends, then announce the winner
    ///
    /// An unreadable command stops the loop; the state built so far still
    /// decides the winner.
    pub fn run(
        &mut self,
        reader: &mut ScriptReader<'_>,
        sink: &mut dyn TranscriptSink,
    ) -> Result<RunOutcome> {
        let halted_by = loop {
            match reader.next_command(self.placement_budget > 0) {
                Ok(Some(command)) => self.apply(&command, sink)?,
                Ok(None) => break None,
                Err(error) => {
                    warn!(turn = self.turn, %error, "script ended early");
                    break Some(error);
                }
            }
        };

        let winner = self.finish(sink)?;
        Ok(RunOutcome {
            turns: self.turn,
            winner,
            halted_by,
        })
    }

    /// Record the winner and flush the sink
    pub fn finish(&mut self, sink: &mut dyn TranscriptSink) -> Result<Option<FactionStatus>> {
        let winner = select_winner(self.factions.values()).map(FactionStatus::from);
        debug!(
            cells = self.board.occupied_cells(),
            tiles_rolled = self.terrain.rolled(),
            "final board"
        );
        match &winner {
            Some(w) => info!(
                winner = %w.name,
                power = w.power,
                resources = w.resources,
                score = w.score(),
                "simulation finished"
            ),
            None => info!("simulation finished without factions"),
        }
        sink.record(&Event::Victory { winner: winner.clone() })?;
        sink.flush()?;
        Ok(winner)
    }

    pub(super) fn skip(
        &self,
        sink: &mut dyn TranscriptSink,
        action: ActionKind,
        actor: &str,
        reason: SkipReason,
    ) -> Result<()> {
        warn!(
            turn = self.turn,
            %action,
            keyword = action.keyword(),
            actor,
            %reason,
            "action skipped"
        );
        sink.record(&Event::ActionSkipped {
            action,
            actor: actor.to_string(),
            reason,
        })
    }

    pub(super) fn snapshot(&self, sink: &mut dyn TranscriptSink) -> Result<()> {
        if !self.config.board_snapshots {
            return Ok(());
        }
        let area = i64::from(self.board.rows().max(0)) * i64::from(self.board.cols().max(0));
        if area > i64::from(self.config.snapshot_cell_limit) {
            debug!(area, limit = self.config.snapshot_cell_limit, "board too large to render");
            return Ok(());
        }
        sink.record(&Event::BoardSnapshot {
            rendered: self.board.render(),
        })
    }
}
