use rand::{seq::SliceRandom, Rng};

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::{Error, Result, CELLS, SIZE};

/// A mark placed on the board by one of the two players
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other mark, there are exactly two
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    X,
    O,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::X => 'X',
            Cell::O => 'O',
            Cell::Empty => '-',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            '-' | '.' => Some(Cell::Empty),
            _ => None,
        }
    }

    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    XWin,
    OWin,
    Draw,
}

impl GameState {
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => GameState::XWin,
            Player::O => GameState::OWin,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameState::XWin => Some(Player::X),
            GameState::OWin => Some(Player::O),
            GameState::Playing | GameState::Draw => None,
        }
    }

    pub fn is_over(self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

/// The 8 lines that win the game, in the order they are checked:
/// rows top to bottom, columns left to right, then both diagonals
pub const WINNING_LINES: [[usize; SIZE]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 board, cells are stored left-to-right, top-to-bottom
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    fn check_index(index: usize) -> Result<usize> {
        if index < CELLS {
            Ok(index)
        } else {
            Err(Error::OutOfRangeCell { index })
        }
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Result<Cell> {
        Ok(self.cells[Self::check_index(index)?])
    }

    pub fn is_cell_free(&self, index: usize) -> Result<bool> {
        Ok(self.cell(index)?.is_empty())
    }

    /// Places `player`'s mark on an empty cell
    ///
    /// Returns `Ok(false)` without touching the board if the cell is already taken.
    pub fn set_cell(&mut self, index: usize, player: Player) -> Result<bool> {
        let index = Self::check_index(index)?;
        if !self.cells[index].is_empty() {
            return Ok(false);
        }
        self.cells[index] = player.into();
        Ok(true)
    }

    /// Resets a cell to empty, whatever it held
    pub fn clear_cell(&mut self, index: usize) -> Result<()> {
        let index = Self::check_index(index)?;
        self.cells[index] = Cell::Empty;
        Ok(())
    }

    /// Places a speculative mark that is removed again when the returned guard drops
    ///
    /// The cell must be free.
    pub(crate) fn play_trial(&mut self, index: usize, player: Player) -> TrialMove<'_> {
        debug_assert!(self.cells[index].is_empty(), "trial move on occupied cell {}", index);
        self.cells[index] = player.into();
        TrialMove { board: self, index }
    }

    pub fn state(&self) -> GameState {
        for &[a, b, c] in WINNING_LINES.iter() {
            let cell = self.cells[a];
            if cell == self.cells[b] && cell == self.cells[c] {
                if let Some(player) = cell.player() {
                    return GameState::win_for(player);
                }
            }
        }

        if self.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        }
    }

    /// Indices of the empty cells in ascending order
    pub fn free_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn num_moves(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Picks a free cell uniformly at random, `None` on a full board
    pub fn random_free_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        self.free_cells().choose(rng).copied()
    }

    pub fn render(&self) -> String {
        self.cells
            .chunks(SIZE)
            .map(|row| {
                let row: Vec<String> = row.iter().map(|cell| cell.to_char().to_string()).collect();
                format!(" {}", row.join(" | "))
            })
            .collect::<Vec<_>>()
            .join("\n-----------\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Parses 9 cells written as `X`, `O` and `-` (or `.`),
/// ignoring whitespace, `/` and `|` between them
impl FromStr for Board {
    type Err = Error;

    fn from_str(layout: &str) -> Result<Self> {
        let mut cells = Vec::with_capacity(CELLS);
        for character in layout
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
        {
            let cell = Cell::from_char(character).ok_or(Error::InvalidCellCharacter {
                character,
                position: cells.len(),
            })?;
            cells.push(cell);
        }

        if cells.len() != CELLS {
            return Err(Error::InvalidBoardLength {
                expected: CELLS,
                got: cells.len(),
            });
        }

        let mut board = Self::new();
        board.cells.copy_from_slice(&cells);
        Ok(board)
    }
}

/// A speculative move, undone when dropped
pub(crate) struct TrialMove<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = Cell::Empty;
    }
}
