#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use rand::Rng;

use crate::{
    board::{Board, CellView, Visibility},
    common::Coord,
    game::{Game, ShotReport},
    player::Player,
};

/// Parse `A5`-style input (column letter, 1-based row) for a `size`×`size` board.
pub fn parse_coord(input: &str, size: usize) -> Result<Coord, String> {
    let input = input.trim();
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= size {
        return Err(format!("Column '{}' out of bounds", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number", row_str))?;
    if row == 0 || row > size {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, size));
    }
    Ok(Coord::new(row - 1, col))
}

/// Column letter, or `?` past `Z`.
fn column_label(col: usize) -> char {
    u8::try_from(col)
        .ok()
        .filter(|&c| c < 26)
        .map_or('?', |c| (b'A' + c) as char)
}

/// Draw `board` as text. Concealed boards never show unhit ships.
pub fn render_board(board: &Board, visibility: Visibility) -> String {
    let mut out = String::from("   ");
    for c in 0..board.size() {
        out.push(' ');
        out.push(column_label(c));
    }
    out.push('\n');
    for r in 0..board.size() {
        out.push_str(&format!("{:2} ", r + 1));
        for c in 0..board.size() {
            let ch = match board.view(Coord::new(r, c), visibility) {
                Some(CellView::Hit) => 'X',
                Some(CellView::Miss) => 'o',
                Some(CellView::Ship(_)) => 'S',
                Some(CellView::Water) | None => '.',
            };
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Display the opponent board (top) and the player's board (bottom).
pub fn print_player_view(game: &Game) {
    println!("Opponent board:");
    print!("{}", render_board(game.ai_board(), Visibility::Conceal));
    println!("\nYour board:");
    print!("{}", render_board(game.player_board(), Visibility::Reveal));
    println!("Legend: S=Ship  X=Hit  o=Miss  .=Water");
}

/// Human player reading coordinates from a line-oriented reader.
pub struct CliPlayer<B> {
    input: B,
}

impl CliPlayer<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<B: BufRead> CliPlayer<B> {
    pub fn new(input: B) -> Self {
        Self { input }
    }
}

impl<B: BufRead> Player for CliPlayer<B> {
    fn select_target<R: Rng + ?Sized>(&mut self, _rng: &mut R, opponent: &Board) -> Option<Coord> {
        loop {
            print!("Enter target (e.g. B7, 'q' to quit): ");
            io::stdout().flush().ok()?;
            let mut line = String::new();
            if self.input.read_line(&mut line).ok()? == 0 {
                return None;
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return None;
            }
            match parse_coord(line, opponent.size()) {
                Ok(coord) if opponent.cell_is_targetable(coord) => return Some(coord),
                Ok(coord) => println!("{} has already been fired upon", coord),
                Err(e) => println!("{}", e),
            }
        }
    }

    fn handle_shot_result<R: Rng + ?Sized>(&mut self, report: &ShotReport, _rng: &mut R) {
        println!("You fired at {} -> {:?}", report.coord, report.outcome);
        if let Some(kind) = report.sunk {
            println!("You sank the {}!", kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn parses_letter_then_row() {
        assert_eq!(parse_coord("A1", 10), Ok(Coord::new(0, 0)));
        assert_eq!(parse_coord("j10", 10), Ok(Coord::new(9, 9)));
        assert_eq!(parse_coord(" c4 ", 10), Ok(Coord::new(3, 2)));
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(parse_coord("K1", 10).is_err());
        assert!(parse_coord("A0", 10).is_err());
        assert!(parse_coord("A11", 10).is_err());
        assert!(parse_coord("5A", 10).is_err());
        assert!(parse_coord("A", 10).is_err());
    }

    #[test]
    fn concealed_render_hides_ships() {
        let mut board = Board::new(3);
        board
            .place(
                crate::ship::ShipKind::Destroyer,
                Coord::new(0, 0),
                crate::ship::Orientation::Horizontal,
            )
            .unwrap();
        board.resolve_shot(Coord::new(0, 0)).unwrap();
        board.resolve_shot(Coord::new(2, 2)).unwrap();
        let shown = render_board(&board, Visibility::Reveal);
        let hidden = render_board(&board, Visibility::Conceal);
        assert_eq!(shown, "    A B C\n 1  X S .\n 2  . . .\n 3  . . o\n");
        assert_eq!(hidden, "    A B C\n 1  X . .\n 2  . . .\n 3  . . o\n");
    }

    #[test]
    fn wide_board_header_stays_printable() {
        let header = render_board(&Board::new(28), Visibility::Reveal)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string();
        assert!(header.ends_with(" Y Z ? ?"), "header: {header:?}");
        assert!(header.chars().all(|c| c == ' ' || c == '?' || c.is_ascii_uppercase()));
    }

    #[test]
    fn cli_player_skips_bad_lines_and_resolved_cells() {
        let mut board = Board::new(10);
        board.resolve_shot(Coord::new(0, 0)).unwrap();
        let input = std::io::Cursor::new("zz\nA1\nB2\n");
        let mut player = CliPlayer::new(input);
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(player.select_target(&mut rng, &board), Some(Coord::new(1, 1)));
        assert_eq!(player.select_target(&mut rng, &board), None);
    }
}
