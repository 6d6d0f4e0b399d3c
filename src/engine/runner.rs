//! Whole-run entry points

use std::fs;
use std::path::Path;

use tracing::info;

use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::SeededDice;
use crate::engine::state::{Engine, RunOutcome};
use crate::script::ScriptReader;
use crate::transcript::{open_sink, TranscriptFormat, TranscriptSink};

/// Run a whole script
///
/// The dice are seeded once from `config.seed`, or from entropy when no seed
/// is set. A header that does not parse fails the run before any event is
/// recorded.
pub fn simulate(
    script: &str,
    config: &SimulationConfig,
    sink: &mut dyn TranscriptSink,
) -> Result<RunOutcome> {
    config.validate()?;

    let mut reader = ScriptReader::new(script);
    let header = reader.header()?;

    let dice = match config.seed {
        Some(seed) => SeededDice::new(seed),
        None => SeededDice::from_entropy(),
    };
    info!(
        rows = header.rows,
        cols = header.cols,
        factions = header.faction_count,
        seed = dice.seed(),
        "starting simulation"
    );

    let mut engine = Engine::new(config.clone(), &header, dice);
    engine.run(&mut reader, sink)
}

/// Read `input`, run it, and write the transcript to `output`
///
/// `output` is only created once the header has parsed.
pub fn simulate_file(
    input: &Path,
    output: &Path,
    format: TranscriptFormat,
    config: &SimulationConfig,
) -> Result<RunOutcome> {
    let script = fs::read_to_string(input)?;
    ScriptReader::new(&script).header()?;

    let mut sink = open_sink(output, format)?;
    simulate(&script, config, sink.as_mut())
}
