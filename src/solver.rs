//! An agent to solve the game of Tic-Tac-Toe

use rand::{seq::SliceRandom, Rng};

use crate::{
    board::{Board, GameState, Player},
    Error, Result, DRAW_SCORE, LOSS_SCORE, WIN_SCORE,
};

/// An agent to solve Tic-Tac-Toe positions for one side
///
/// # Notes
/// This agent searches the whole game tree below a position without pruning,
/// which is cheap enough on a 3x3 board, and plays a move with the best
/// worst-case outcome.
///
/// # Position Scoring
/// Scores are always from the point of view of the solver's own mark:
/// a position it has won scores [`WIN_SCORE`], a drawn position [`DRAW_SCORE`]
/// and a lost one [`LOSS_SCORE`]. No other score is ever produced, a win is a
/// win however many moves it takes.
#[derive(Copy, Clone, Debug)]
pub struct Solver {
    player: Player,
    opponent: Player,
}

impl Solver {
    /// Creates a new `Solver` playing `player`
    pub fn new(player: Player) -> Self {
        Self {
            player,
            opponent: player.opponent(),
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn opponent(&self) -> Player {
        self.opponent
    }

    /// Performs game tree search
    ///
    /// Returns the score of the position with `to_move` about to play
    /// (see [Position Scoring]). The board is left exactly as it was found.
    ///
    /// [Position Scoring]: #position-scoring
    pub fn evaluate(&self, board: &mut Board, to_move: Player) -> i32 {
        match board.state() {
            GameState::Draw => return DRAW_SCORE,
            GameState::Playing => {}
            state => {
                return if state.winner() == Some(self.player) {
                    WIN_SCORE
                } else {
                    LOSS_SCORE
                }
            }
        }

        // we maximise on our own turns and the opponent minimises on theirs,
        // each starting from their own worst case
        let maximising = to_move == self.player;
        let mut best_score = if maximising { LOSS_SCORE } else { WIN_SCORE };

        for cell in board.free_cells() {
            let mut trial = board.play_trial(cell, to_move);
            let score = self.evaluate(&mut trial, to_move.opponent());

            best_score = if maximising {
                best_score.max(score)
            } else {
                best_score.min(score)
            };
        }

        best_score
    }

    /// Scores every free cell as the next move for `to_move`
    ///
    /// Returns `(cell, score)` pairs in ascending cell order.
    pub fn move_scores(&self, board: &mut Board, to_move: Player) -> Result<Vec<(usize, i32)>> {
        let free_cells = board.free_cells();
        if free_cells.is_empty() {
            return Err(Error::EmptyCandidateSet);
        }

        Ok(free_cells
            .into_iter()
            .map(|cell| {
                let mut trial = board.play_trial(cell, to_move);
                (cell, self.evaluate(&mut trial, to_move.opponent()))
            })
            .collect())
    }

    /// The cells sharing the best score, if that score is at least a draw
    ///
    /// An empty result means every move loses against perfect play.
    pub fn candidates(&self, board: &mut Board, to_move: Player) -> Result<Vec<usize>> {
        let scores = self.move_scores(board, to_move)?;
        Ok(Self::best_cells(&scores))
    }

    fn best_cells(scores: &[(usize, i32)]) -> Vec<usize> {
        let best_score = match scores.iter().map(|&(_, score)| score).max() {
            Some(score) if score >= DRAW_SCORE => score,
            _ => return Vec::new(),
        };

        scores
            .iter()
            .filter(|&&(_, score)| score == best_score)
            .map(|&(cell, _)| cell)
            .collect()
    }

    /// Chooses a move for `to_move`
    ///
    /// Picks uniformly among the [candidates](Self::candidates), or among all
    /// free cells when every move loses.
    pub fn best_move<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        to_move: Player,
        rng: &mut R,
    ) -> Result<usize> {
        let scores = self.move_scores(board, to_move)?;
        let candidates = Self::best_cells(&scores);

        let pool = if candidates.is_empty() {
            scores.iter().map(|&(cell, _)| cell).collect()
        } else {
            candidates
        };
        let best_move = *pool.choose(rng).ok_or(Error::EmptyCandidateSet)?;

        log!(
            "{} to move, scores {:?}, choosing {} from {:?}",
            to_move,
            scores,
            best_move,
            pool
        );
        Ok(best_move)
    }
}
