//! Script reader integration tests

use warboard::core::error::SimError;
use warboard::core::types::Coord;
use warboard::entity::{BuildingType, UnitType};
use warboard::script::{Command, Header, ScriptError, ScriptReader};

/// Read every command, switching `pos` form after `budget` factions
fn read_all(script: &str) -> (Header, Vec<Command>, Option<ScriptError>) {
    let mut reader = ScriptReader::new(script);
    let header = reader.header().unwrap();
    let mut budget = header.faction_count;
    let mut commands = Vec::new();
    loop {
        match reader.next_command(budget > 0) {
            Ok(Some(command)) => {
                if matches!(command, Command::PositionFaction { .. }) {
                    budget -= 1;
                }
                commands.push(command);
            }
            Ok(None) => return (header, commands, None),
            Err(e) => return (header, commands, Some(e)),
        }
    }
}

#[test]
fn test_full_script() {
    let script = "\
        6 6\n\
        2\n\
        F1 pos 0 0\n\
        F2 pos 5 5\n\
        1a pos 1 1 1\n\
        2b pos 7 4 4\n\
        1a move 1 2 2\n\
        F1 constroi 9 0 2 2\n\
        FIM\n\
        F1 ganha 1000\n";
    let (header, commands, error) = read_all(script);

    assert_eq!(
        header,
        Header {
            rows: 6,
            cols: 6,
            faction_count: 2
        }
    );
    assert!(error.is_none());
    assert_eq!(commands.len(), 6);
    assert_eq!(
        commands[3],
        Command::PositionUnit {
            unit: "2b".into(),
            kind: UnitType::Explorer,
            at: Coord::new(4, 4)
        }
    );
    assert_eq!(
        commands[5],
        Command::Build {
            faction: "F1".into(),
            kind: BuildingType::ResearchLab,
            at: Coord::new(2, 2)
        }
    );
}

#[test]
fn test_tokens_ignore_line_layout() {
    let (_, commands, _) = read_all("2 2 1 F1\npos\n0\n1 F1 ganha\t4");
    assert_eq!(
        commands,
        vec![
            Command::PositionFaction {
                faction: "F1".into(),
                at: Coord::new(0, 1)
            },
            Command::Earn {
                faction: "F1".into(),
                amount: 4
            },
        ]
    );
}

#[test]
fn test_attack_with_trailing_values() {
    let (_, commands, _) = read_all("2 2 0\nF1 ataca F2 10 20\nF2 ataca F1\n");
    assert_eq!(commands.len(), 2);
    assert!(matches!(&commands[1], Command::Attack { attacker, .. } if attacker == "F2"));
}

#[test]
fn test_negative_coordinates_are_read() {
    let (_, commands, _) = read_all("2 2 1\nF1 pos -1 -3\n");
    assert_eq!(
        commands[0],
        Command::PositionFaction {
            faction: "F1".into(),
            at: Coord::new(-1, -3)
        }
    );
}

#[test]
fn test_read_stops_at_bad_command() {
    let (_, commands, error) = read_all("2 2 0\nF1 ganha 3\n1a combate x 2b 1\nF1 ganha 3\n");
    assert_eq!(commands.len(), 1);
    assert_eq!(
        error,
        Some(ScriptError::InvalidInteger {
            field: "attacker value",
            token: "x".into()
        })
    );
}

#[test]
fn test_header_errors() {
    for script in ["", "5", "5 5", "a b c", "5 5 many"] {
        let mut reader = ScriptReader::new(script);
        assert!(
            matches!(reader.header(), Err(SimError::MalformedHeader { .. })),
            "script {script:?} should fail"
        );
    }
}
