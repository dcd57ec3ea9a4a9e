//! Text rendering of the board.

use noughts_engine::Board;

/// Formats the board as a grid with row and column headers.
///
/// ```text
///
///     0   1   2
///   -------------
/// 0 | X |   | O |
///   -------------
/// ...
/// ```
pub fn render_board(board: &Board) -> String {
    let rule = "  -------------\n";
    let mut out = String::from("\n    0   1   2\n");
    for (r, row) in board.rows().enumerate() {
        out.push_str(rule);
        out.push_str(&format!("{r} |"));
        for cell in row {
            out.push_str(&format!(" {} |", cell.symbol()));
        }
        out.push('\n');
    }
    out.push_str(rule);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_engine::RoundEngine;

    #[test]
    fn test_empty_board() {
        let text = render_board(&Board::new());
        assert!(text.contains("0 |   |   |   |"));
        assert!(text.contains("2 |   |   |   |"));
        assert_eq!(text.matches("-------------").count(), 4);
    }

    #[test]
    fn test_marks_shown() {
        let mut engine = RoundEngine::seeded(3);
        engine.attempt_move(0, 0).unwrap();
        engine.attempt_move(2, 2).unwrap();

        let text = render_board(engine.board());
        assert!(text.contains("0 | X |   |   |"));
        assert!(text.contains("2 |   |   | O |"));
    }
}
