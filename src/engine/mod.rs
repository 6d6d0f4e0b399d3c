//! Turn-action engine
//!
//! One command is one turn. Handlers validate before they mutate: a
//! rejected action leaves the board and registries exactly as they were and
//! is reported as a skipped action in the transcript.

pub mod combat;
pub mod diplomacy;
pub mod economy;
pub mod placement;
pub mod runner;
pub mod scoring;
pub mod state;

pub use combat::resolve;
pub use placement::evict_unit;
pub use runner::{simulate, simulate_file};
pub use scoring::select_winner;
pub use state::{AttackRecord, Engine, RunOutcome};
