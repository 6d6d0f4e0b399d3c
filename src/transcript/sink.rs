//! Transcript sinks
//!
//! The engine hands every event to a [`TranscriptSink`]. Sinks decide the
//! presentation: readable text blocks, one JSON object per line, or an
//! in-memory list.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::error::Result;
use crate::transcript::event::{CombatOutcome, Event, FactionStatus};

pub trait TranscriptSink {
    fn record(&mut self, event: &Event) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Keeps every event in order
#[derive(Debug, Default)]
pub struct MemoryTranscript {
    events: Vec<Event>,
}

impl MemoryTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl TranscriptSink for MemoryTranscript {
    fn record(&mut self, event: &Event) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}

/// Newline-delimited JSON, one event per line
pub struct JsonTranscript<W: Write> {
    out: W,
}

impl<W: Write> JsonTranscript<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TranscriptSink for JsonTranscript<W> {
    fn record(&mut self, event: &Event) -> Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Human-readable blocks, one per event
pub struct TextTranscript<W: Write> {
    out: W,
}

impl<W: Write> TextTranscript<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn holdings(&mut self, faction: &FactionStatus) -> io::Result<()> {
        writeln!(
            self.out,
            "{} now holds {} resources and {} power.",
            faction.name, faction.resources, faction.power
        )
    }

    fn write_event(&mut self, event: &Event) -> io::Result<()> {
        match event {
            Event::AllianceFormed {
                faction,
                ally,
                faction_power,
                ally_power,
            } => {
                writeln!(self.out, "=== Alliance formed ===")?;
                writeln!(self.out, "Faction {faction} and faction {ally} are now allied.")?;
                writeln!(self.out, "{faction} now has {faction_power} power.")?;
                writeln!(self.out, "{ally} now has {ally_power} power.")?;
            }
            Event::AttackMade {
                attacker,
                defender,
                stolen,
            } => {
                writeln!(self.out, "=== Attack ===")?;
                writeln!(
                    self.out,
                    "Faction {} attacked faction {}.",
                    attacker.name, defender.name
                )?;
                writeln!(self.out, "Resources stolen: {stolen}.")?;
                writeln!(self.out, "{} now has {} resources.", attacker.name, attacker.resources)?;
                writeln!(self.out, "{} now has {} resources.", defender.name, defender.resources)?;
            }
            Event::CombatResolved {
                attacker,
                defender,
                attacker_roll,
                defender_roll,
                outcome,
                removed,
            } => {
                writeln!(self.out, "=== Combat ===")?;
                writeln!(
                    self.out,
                    "Unit {attacker} rolled {attacker_roll}, \
                     unit {defender} rolled {defender_roll}."
                )?;
                match outcome {
                    CombatOutcome::AttackerWon => writeln!(self.out, "{attacker} won the combat.")?,
                    CombatOutcome::DefenderWon => writeln!(self.out, "{defender} won the combat.")?,
                    CombatOutcome::Draw => writeln!(self.out, "The combat ended in a draw.")?,
                }
                if let Some(unit) = removed {
                    writeln!(self.out, "Unit {unit} was removed from the board.")?;
                }
            }
            Event::FactionPlaced { faction, at, marked } => {
                writeln!(self.out, "=== Faction positioned ===")?;
                writeln!(self.out, "Faction {} positioned at {at}.", faction.name)?;
                if *marked {
                    writeln!(self.out, "The cell already carried another faction marker.")?;
                }
                self.holdings(faction)?;
            }
            Event::UnitPlaced { unit, kind, at } => {
                writeln!(self.out, "=== Unit positioned ===")?;
                writeln!(self.out, "Unit {unit} ({kind:?}) positioned at {at}.")?;
            }
            Event::FactionReinforced { faction, gain, power } => {
                writeln!(self.out, "{faction} gained {gain} power and now has {power} power.")?;
            }
            Event::UnitMoved { unit, from, to } => {
                writeln!(self.out, "=== Unit moved ===")?;
                writeln!(self.out, "Unit {unit} moved from {from} to {to}.")?;
            }
            Event::ResourcesCollected {
                unit,
                faction,
                terrain,
                amount,
                resources,
            } => {
                writeln!(self.out, "=== Resources collected ===")?;
                writeln!(
                    self.out,
                    "Unit {unit} collected {amount} resources on {terrain:?} terrain."
                )?;
                writeln!(self.out, "{faction} now has {resources} resources.")?;
            }
            Event::BuildingConstructed {
                faction,
                kind,
                at,
                cost,
                power_gain,
                resources,
                power,
            } => {
                writeln!(self.out, "=== Building constructed ===")?;
                writeln!(self.out, "Faction {faction} built {kind:?} at {at}.")?;
                writeln!(self.out, "Cost {cost} resources, gained {power_gain} power.")?;
                writeln!(self.out, "{faction} now holds {resources} resources and {power} power.")?;
            }
            Event::DefenseMounted { defender, recovered } => {
                writeln!(self.out, "=== Defense ===")?;
                match recovered {
                    Some(recovery) => {
                        writeln!(
                            self.out,
                            "Faction {defender} recovered {} resources from {}.",
                            recovery.amount, recovery.attacker.name
                        )?;
                        for side in [&recovery.defender, &recovery.attacker] {
                            let (name, resources) = (&side.name, side.resources);
                            writeln!(self.out, "{name} now has {resources} resources.")?;
                        }
                    }
                    None => writeln!(self.out, "Faction {defender} has no attack to answer.")?,
                }
            }
            Event::PowerEarned { faction, amount, power } => {
                writeln!(self.out, "=== Power gained ===")?;
                writeln!(
                    self.out,
                    "Faction {faction} gained {amount} power and now has {power} power."
                )?;
            }
            Event::OutcomeDeclared {
                actor,
                outcome,
                opponent,
            } => {
                writeln!(self.out, "=== Outcome declared ===")?;
                writeln!(self.out, "{actor} declared {outcome:?} against {opponent}.")?;
            }
            Event::ActionSkipped { action, actor, reason } => {
                writeln!(self.out, "Error: {action} by {actor} skipped: {reason}.")?;
            }
            Event::CommandIgnored { actor, keyword } => {
                writeln!(self.out, "Ignored unknown action `{keyword}` from {actor}.")?;
            }
            Event::BoardSnapshot { rendered } => {
                write!(self.out, "{rendered}")?;
            }
            Event::TurnEnded { turn, factions } => {
                writeln!(self.out, "=== End of turn {turn} ===")?;
                for faction in factions {
                    writeln!(
                        self.out,
                        "Faction {}: resources = {}, power = {}",
                        faction.name, faction.resources, faction.power
                    )?;
                }
            }
            Event::Victory { winner } => {
                writeln!(self.out, "=== Result ===")?;
                match winner {
                    Some(winner) => writeln!(
                        self.out,
                        "Faction {} wins with {} power and {} resources.",
                        winner.name, winner.power, winner.resources
                    )?,
                    None => writeln!(self.out, "No faction took part; there is no winner.")?,
                }
            }
        }
        writeln!(self.out)
    }
}

impl<W: Write> TranscriptSink for TextTranscript<W> {
    fn record(&mut self, event: &Event) -> Result<()> {
        self.write_event(event)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Transcript presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranscriptFormat {
    #[default]
    Text,
    Json,
}

/// Open a sink writing to `path`, or to stdout when `path` is `-`
///
/// An existing file is truncated.
pub fn open_sink(path: &Path, format: TranscriptFormat) -> Result<Box<dyn TranscriptSink>> {
    let out: Box<dyn Write> = if path.as_os_str() == "-" {
        Box::new(io::stdout().lock())
    } else {
        Box::new(BufWriter::new(File::create(path)?))
    };

    Ok(match format {
        TranscriptFormat::Text => Box::new(TextTranscript::new(out)),
        TranscriptFormat::Json => Box::new(JsonTranscript::new(out)),
    })
}
