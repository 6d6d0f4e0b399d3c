//! Script reader: header plus one command at a time
//!
//! The shape of `pos` depends on game state: while factions remain to be
//! positioned it takes `x y`, afterwards `type x y`. The caller tells the
//! reader which form to expect on every call.

use crate::core::error::{Result, SimError};
use crate::core::types::Coord;
use crate::entity::{BuildingType, UnitType};
use crate::script::command::{Command, OutcomeKind};
use crate::script::error::ScriptError;
use crate::script::tokens::Tokens;

/// Actor name that ends the script
pub const END_SENTINEL: &str = "FIM";

/// Most integer arguments skipped after `ataca` or an unknown keyword
const MAX_TRAILING_PARAMS: usize = 6;

const ACTION_KEYWORDS: &[&str] = &[
    "alianca", "ataca", "combate", "pos", "move", "coleta", "constroi", "defende", "ganha",
    "vence", "perde",
];

fn is_action_keyword(token: &str) -> bool {
    ACTION_KEYWORDS.contains(&token)
}

/// Script header: board dimensions and the number of factions to position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub rows: i32,
    pub cols: i32,
    pub faction_count: i32,
}

pub struct ScriptReader<'a> {
    tokens: Tokens<'a>,
}

impl<'a> ScriptReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: Tokens::new(input),
        }
    }

    /// Read `rows cols factionCount`
    pub fn header(&mut self) -> Result<Header> {
        let header_field =
            |field: &'static str| move |source| SimError::MalformedHeader { field, source };

        let rows = self.tokens.int("rows").map_err(header_field("dimensions"))?;
        let cols = self.tokens.int("columns").map_err(header_field("dimensions"))?;
        let faction_count = self
            .tokens
            .int("faction count")
            .map_err(header_field("faction count"))?;

        Ok(Header {
            rows,
            cols,
            faction_count,
        })
    }

    /// Read the next command
    ///
    /// Returns `Ok(None)` at end of input or at the [`END_SENTINEL`] actor.
    /// `faction_placement` selects the two-argument form of `pos`.
    pub fn next_command(
        &mut self,
        faction_placement: bool,
    ) -> std::result::Result<Option<Command>, ScriptError> {
        let Some(actor) = self.tokens.next_token() else {
            return Ok(None);
        };
        if actor == END_SENTINEL {
            return Ok(None);
        }
        let actor = actor.to_string();
        let keyword = self.tokens.word("action")?;

        let t = &mut self.tokens;
        let command = match keyword {
            "alianca" => Command::Alliance {
                faction: actor,
                ally: t.word("ally faction")?.to_string(),
            },
            "ataca" => {
                let defender = t.word("defending faction")?.to_string();
                t.skip_integers(MAX_TRAILING_PARAMS, is_action_keyword);
                Command::Attack {
                    attacker: actor,
                    defender,
                }
            }
            "combate" => {
                t.int("attacker value")?;
                let defender = t.word("enemy unit")?.to_string();
                t.int("enemy value")?;
                Command::Combat {
                    attacker: actor,
                    defender,
                }
            }
            "pos" if faction_placement => Command::PositionFaction {
                faction: actor,
                at: read_coord(t)?,
            },
            "pos" => {
                let kind = UnitType::from_code(t.int("unit type")?);
                Command::PositionUnit {
                    unit: actor,
                    kind,
                    at: read_coord(t)?,
                }
            }
            "move" => {
                t.int("move tag")?;
                Command::Move {
                    unit: actor,
                    to: read_coord(t)?,
                }
            }
            "coleta" => {
                t.int("collect x")?;
                t.int("collect y")?;
                Command::Collect { unit: actor }
            }
            "constroi" => {
                let kind = BuildingType::from_code(t.int("building type")?);
                t.int("building tag")?;
                Command::Build {
                    faction: actor,
                    kind,
                    at: read_coord(t)?,
                }
            }
            "defende" => {
                t.int("defend x")?;
                t.int("defend y")?;
                Command::Defend { faction: actor }
            }
            "ganha" => Command::Earn {
                faction: actor,
                amount: t.int("power amount")?,
            },
            "vence" | "perde" => {
                let outcome = if keyword == "vence" {
                    OutcomeKind::Victory
                } else {
                    OutcomeKind::Defeat
                };
                t.int("own value")?;
                let opponent = t.word("opponent")?.to_string();
                t.int("opponent value")?;
                Command::Outcome {
                    actor,
                    outcome,
                    opponent,
                }
            }
            other => {
                t.skip_integers(MAX_TRAILING_PARAMS, is_action_keyword);
                Command::Unknown {
                    actor,
                    keyword: other.to_string(),
                }
            }
        };

        Ok(Some(command))
    }
}

fn read_coord(tokens: &mut Tokens<'_>) -> std::result::Result<Coord, ScriptError> {
    let x = tokens.int("x")?;
    let y = tokens.int("y")?;
    Ok(Coord::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        let mut reader = ScriptReader::new("5 6\n2\n");
        let header = reader.header().unwrap();
        assert_eq!(
            header,
            Header {
                rows: 5,
                cols: 6,
                faction_count: 2
            }
        );
        assert_eq!(reader.next_command(true), Ok(None));
    }

    #[test]
    fn test_numeric_actor_after_attack_is_kept() {
        let mut reader = ScriptReader::new("F1 ataca F2 7\n12 move 1 2 2\nF1 ataca F2 1 2\n");
        assert_eq!(
            reader.next_command(false),
            Ok(Some(Command::Attack {
                attacker: "F1".into(),
                defender: "F2".into()
            }))
        );
        assert_eq!(
            reader.next_command(false),
            Ok(Some(Command::Move {
                unit: "12".into(),
                to: Coord::new(2, 2)
            }))
        );
        assert!(matches!(reader.next_command(false), Ok(Some(Command::Attack { .. }))));
        assert_eq!(reader.next_command(false), Ok(None));
    }

    #[test]
    fn test_malformed_header() {
        let mut reader = ScriptReader::new("5 x 1");
        assert!(matches!(
            reader.header(),
            Err(SimError::MalformedHeader {
                field: "dimensions",
                ..
            })
        ));

        let mut reader = ScriptReader::new("5 5");
        assert!(matches!(
            reader.header(),
            Err(SimError::MalformedHeader {
                field: "faction count",
                ..
            })
        ));
    }

    #[test]
    fn test_pos_depends_on_placement_mode() {
        let mut reader = ScriptReader::new("F1 pos 0 0\n1a pos 1 2 3\n");
        assert_eq!(
            reader.next_command(true),
            Ok(Some(Command::PositionFaction {
                faction: "F1".into(),
                at: Coord::new(0, 0)
            }))
        );
        assert_eq!(
            reader.next_command(false),
            Ok(Some(Command::PositionUnit {
                unit: "1a".into(),
                kind: UnitType::Soldier,
                at: Coord::new(2, 3)
            }))
        );
    }

    #[test]
    fn test_every_action_form() {
        let script = "\
            F1 alianca F2\n\
            F1 ataca F2 3 4\n\
            1a combate 1 2b 2\n\
            1a move 1 4 4\n\
            1a coleta 0 0\n\
            F1 constroi 2 0 3 3\n\
            F2 defende 0 0\n\
            F1 ganha 15\n\
            1a vence 1 2b 2\n\
            2b perde 2 1a 1\n";
        let mut reader = ScriptReader::new(script);
        let mut commands = Vec::new();
        while let Some(command) = reader.next_command(false).unwrap() {
            commands.push(command);
        }

        assert_eq!(
            commands,
            vec![
                Command::Alliance {
                    faction: "F1".into(),
                    ally: "F2".into()
                },
                Command::Attack {
                    attacker: "F1".into(),
                    defender: "F2".into()
                },
                Command::Combat {
                    attacker: "1a".into(),
                    defender: "2b".into()
                },
                Command::Move {
                    unit: "1a".into(),
                    to: Coord::new(4, 4)
                },
                Command::Collect { unit: "1a".into() },
                Command::Build {
                    faction: "F1".into(),
                    kind: BuildingType::TrainingCamp,
                    at: Coord::new(3, 3)
                },
                Command::Defend {
                    faction: "F2".into()
                },
                Command::Earn {
                    faction: "F1".into(),
                    amount: 15
                },
                Command::Outcome {
                    actor: "1a".into(),
                    outcome: OutcomeKind::Victory,
                    opponent: "2b".into()
                },
                Command::Outcome {
                    actor: "2b".into(),
                    outcome: OutcomeKind::Defeat,
                    opponent: "1a".into()
                },
            ]
        );
    }

    #[test]
    fn test_unknown_action_skips_its_integers() {
        let mut reader = ScriptReader::new("F1 dance 1 2 3 F1 ganha 5");
        assert_eq!(
            reader.next_command(false),
            Ok(Some(Command::Unknown {
                actor: "F1".into(),
                keyword: "dance".into()
            }))
        );
        assert_eq!(
            reader.next_command(false),
            Ok(Some(Command::Earn {
                faction: "F1".into(),
                amount: 5
            }))
        );
    }

    #[test]
    fn test_sentinel_ends_script() {
        let mut reader = ScriptReader::new("FIM\nF1 ganha 5");
        assert_eq!(reader.next_command(false), Ok(None));
    }

    #[test]
    fn test_truncated_command_is_an_error() {
        let mut reader = ScriptReader::new("F1 ganha");
        assert_eq!(
            reader.next_command(false),
            Err(ScriptError::MissingToken {
                expected: "power amount"
            })
        );

        let mut reader = ScriptReader::new("F1");
        assert_eq!(
            reader.next_command(false),
            Err(ScriptError::MissingToken { expected: "action" })
        );
    }

    #[test]
    fn test_non_integer_argument_is_an_error() {
        let mut reader = ScriptReader::new("1a move 1 north 4");
        assert!(matches!(
            reader.next_command(false),
            Err(ScriptError::InvalidInteger { field: "x", .. })
        ));
    }
}
