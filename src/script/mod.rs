//! Command script reading
//!
//! A script is one whitespace-delimited token stream: the board
//! dimensions, the number of factions to position, then commands of the
//! form `ACTOR ACTION args...` until end of input or the `FIM` sentinel.

pub mod command;
pub mod error;
pub mod reader;
pub mod tokens;

pub use command::{ActionKind, Command, OutcomeKind};
pub use error::ScriptError;
pub use reader::{Header, ScriptReader, END_SENTINEL};
pub use tokens::Tokens;
