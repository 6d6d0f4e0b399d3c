//! Property-based tests for the board and alliance merge.

use proptest::prelude::*;

use warboard::board::{Board, Placement, UnitSlot};
use warboard::core::config::SimulationConfig;
use warboard::core::types::{Coord, FixedDice};
use warboard::engine::Engine;
use warboard::entity::BuildingKey;
use warboard::script::{Command, Header};
use warboard::transcript::MemoryTranscript;

fn coord() -> impl Strategy<Value = Coord> {
    (-20i32..20, -20i32..20).prop_map(|(x, y)| Coord::new(x, y))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The first value put into an empty slot is what the slot reads back,
    /// and later puts never overwrite it.
    #[test]
    fn prop_put_get_first_wins(
        at in coord(),
        factions in prop::collection::vec("[A-Z][0-9]", 1..5),
        units in prop::collection::vec("[a-z]{2}", 0..6),
    ) {
        let mut board = Board::new(10, 10);
        for name in &factions {
            board.put(at, Placement::faction(name.clone()));
        }
        for name in &units {
            board.put(at, Placement::unit(name.clone()));
        }

        prop_assert_eq!(board.faction_at(at), Some(factions[0].as_str()));
        prop_assert!(board.building_at(at).is_none());
        for (i, slot) in UnitSlot::ALL.into_iter().enumerate() {
            prop_assert_eq!(board.unit_at(at, slot), units.get(i).map(String::as_str));
        }
    }

    /// Putting into one cell never changes another.
    #[test]
    fn prop_cells_are_independent(a in coord(), b in coord(), owner in "F[0-9]") {
        prop_assume!(a != b);
        let mut board = Board::new(10, 10);
        board.put(a, Placement::faction(owner.clone()));
        board.put(b, Placement::building(BuildingKey { position: b, owner: owner.clone() }));

        prop_assert_eq!(board.faction_at(a), Some(owner.as_str()));
        prop_assert!(board.building_at(a).is_none());
        prop_assert!(board.faction_at(b).is_none());
    }

    /// After remove, every slot of that coordinate reads absent.
    #[test]
    fn prop_remove_clears_all_slots(
        at in coord(),
        units in prop::collection::vec("[a-z]{2}", 0..4),
    ) {
        let mut board = Board::new(10, 10);
        board.put(at, Placement {
            unit: None,
            building: Some(BuildingKey { position: at, owner: "F1".into() }),
            faction: Some("F1".into()),
        });
        for name in &units {
            board.put(at, Placement::unit(name.clone()));
        }

        board.remove(at);
        prop_assert!(board.cell(at).is_none());
        prop_assert!(board.faction_at(at).is_none());
        prop_assert!(board.building_at(at).is_none());
        for slot in UnitSlot::ALL {
            prop_assert!(board.unit_at(at, slot).is_none());
        }
    }

    /// Both allies end with the sum of their powers before the alliance.
    #[test]
    fn prop_alliance_sums_power(gain_a in -1000i32..1000, gain_b in -1000i32..1000) {
        let header = Header { rows: 3, cols: 3, faction_count: 2 };
        let mut engine = Engine::new(SimulationConfig::default(), &header, FixedDice::zeros());
        let mut sink = MemoryTranscript::new();
        let commands = [
            Command::PositionFaction { faction: "A".into(), at: Coord::new(0, 0) },
            Command::PositionFaction { faction: "B".into(), at: Coord::new(1, 1) },
            Command::Earn { faction: "A".into(), amount: gain_a },
            Command::Earn { faction: "B".into(), amount: gain_b },
            Command::Alliance { faction: "A".into(), ally: "B".into() },
        ];
        for command in &commands {
            engine.apply(command, &mut sink).unwrap();
        }

        let expected = 200 + gain_a + gain_b;
        prop_assert_eq!(engine.factions().get("A").unwrap().power, expected);
        prop_assert_eq!(engine.factions().get("B").unwrap().power, expected);
    }
}
