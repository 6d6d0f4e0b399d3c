//! Text snapshot of the board
//!
//! Each cell renders as a three character code: faction marker, unit
//! count, building marker. `F` marks a faction, `U`/`2`/`3` count units,
//! `B` marks a building; absent parts are blanks. So `F2B` is a faction
//! marker, two units and a building, and `  B` is a lone building.

use crate::board::grid::{Board, Cell};
use crate::core::types::Coord;

const CELL_WIDTH: usize = 6;
const MAX_PREALLOCATION: usize = 1 << 20;

/// Three character code for a cell, `"   "` when the cell is absent
pub fn cell_code(cell: Option<&Cell>) -> String {
    let Some(cell) = cell else {
        return "   ".to_string();
    };

    let faction = if cell.faction().is_some() { 'F' } else { ' ' };
    let units = match cell.unit_count() {
        0 => ' ',
        1 => 'U',
        2 => '2',
        _ => '3',
    };
    let building = if cell.building().is_some() { 'B' } else { ' ' };

    [faction, units, building].iter().collect()
}

impl Board {
    /// Render rows `0..rows` and columns `0..cols` as a grid
    pub fn render(&self) -> String {
        let rows = self.rows().max(0);
        let cols = self.cols().max(0);
        let width = CELL_WIDTH * cols as usize + 1;

        let capacity = (width + 1).saturating_mul(2 * rows as usize + 1);
        let mut out = String::with_capacity(capacity.min(MAX_PREALLOCATION));
        out.push_str(&"_".repeat(width));
        out.push('\n');

        for x in 0..rows {
            for y in 0..cols {
                out.push_str("|  ");
                out.push_str(&cell_code(self.cell(Coord::new(x, y))));
            }
            out.push_str("|\n");

            out.push('|');
            for _ in 0..cols {
                out.push_str("_____|");
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::grid::Placement;
    use crate::entity::BuildingKey;

    fn building(x: i32, y: i32) -> Placement {
        Placement::building(BuildingKey {
            position: Coord::new(x, y),
            owner: "F1".into(),
        })
    }

    #[test]
    fn test_cell_codes() {
        let mut board = Board::new(1, 1);
        let at = Coord::new(0, 0);
        assert_eq!(cell_code(board.cell(at)), "   ");

        board.put(at, Placement::faction("F1"));
        assert_eq!(cell_code(board.cell(at)), "F  ");

        board.put(at, Placement::unit("a"));
        assert_eq!(cell_code(board.cell(at)), "FU ");

        board.put(at, building(0, 0));
        assert_eq!(cell_code(board.cell(at)), "FUB");

        board.put(at, Placement::unit("b"));
        board.put(at, Placement::unit("c"));
        assert_eq!(cell_code(board.cell(at)), "F3B");
    }

    #[test]
    fn test_units_only_codes() {
        let mut board = Board::new(1, 2);
        board.put(Coord::new(0, 0), Placement::unit("a"));
        board.put(Coord::new(0, 1), Placement::unit("b"));
        board.put(Coord::new(0, 1), Placement::unit("c"));
        assert_eq!(cell_code(board.cell(Coord::new(0, 0))), " U ");
        assert_eq!(cell_code(board.cell(Coord::new(0, 1))), " 2 ");
    }

    #[test]
    fn test_render_layout() {
        let mut board = Board::new(2, 2);
        board.put(Coord::new(0, 1), Placement::faction("F1"));
        board.put(Coord::new(1, 0), building(1, 0));

        let rendered = board.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "_____________");
        assert_eq!(lines[1], "|     |  F  |");
        assert_eq!(lines[2], "|_____|_____|");
        assert_eq!(lines[3], "|    B|     |");
        assert_eq!(lines[4], "|_____|_____|");
    }

    #[test]
    fn test_render_ignores_cells_outside_bounds() {
        let mut board = Board::new(1, 1);
        board.put(Coord::new(5, 5), Placement::faction("F1"));
        assert!(!board.render().contains('F'));
    }
}
