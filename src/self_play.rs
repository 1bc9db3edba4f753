//! Engine-vs-engine games
//!
//! Two solvers playing each other from the empty board must always draw,
//! so self-play doubles as a check on the search.

use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;

use crate::{
    board::{Board, GameState, Player},
    rng::GameRng,
    solver::Solver,
    Error, Result,
};

/// The moves of one finished game and how it ended
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub state: GameState,
}

/// Results of a batch of self-play games
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct SelfPlaySummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl SelfPlaySummary {
    fn record(mut self, state: GameState) -> Self {
        self.games += 1;
        match state {
            GameState::XWin => self.x_wins += 1,
            GameState::OWin => self.o_wins += 1,
            GameState::Draw | GameState::Playing => self.draws += 1,
        }
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            games: self.games + other.games,
            x_wins: self.x_wins + other.x_wins,
            o_wins: self.o_wins + other.o_wins,
            draws: self.draws + other.draws,
        }
    }
}

/// Plays one game to the end, X moving first
///
/// With `random_opening` X's first move is a random free cell instead of a
/// searched one, which is also much quicker than searching the empty board.
pub fn play_game<R: Rng + ?Sized>(
    x_solver: &Solver,
    o_solver: &Solver,
    random_opening: bool,
    rng: &mut R,
) -> Result<GameRecord> {
    let mut board = Board::new();
    let mut moves = Vec::new();
    let mut to_move = Player::X;

    while !board.state().is_over() {
        let next_move = if random_opening && moves.is_empty() {
            board.random_free_cell(rng).ok_or(Error::EmptyCandidateSet)?
        } else {
            let solver = match to_move {
                Player::X => x_solver,
                Player::O => o_solver,
            };
            solver.best_move(&mut board, to_move, rng)?
        };

        board.set_cell(next_move, to_move)?;
        moves.push(next_move);
        to_move = to_move.opponent();
    }

    log!("game over after {:?}: {:?}", moves, board.state());
    Ok(GameRecord {
        moves,
        state: board.state(),
    })
}

/// Plays `games` independent games in parallel
///
/// Every game gets its own board and its own fork of the seeded rng, so a
/// seed always reproduces the same batch.
pub fn self_play(games: usize, seed: u64, random_opening: bool) -> Result<SelfPlaySummary> {
    let x_solver = Solver::new(Player::X);
    let o_solver = Solver::new(Player::O);

    let mut rng = GameRng::new(seed);
    let game_rngs: Vec<GameRng> = (0..games).map(|_| rng.fork()).collect();

    let progress = ProgressBar::new(games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Self-play: {bar:40.cyan/blue} {pos}/{len} games ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let summary = game_rngs
        .into_par_iter()
        .map(|mut game_rng| {
            let record = play_game(&x_solver, &o_solver, random_opening, &mut game_rng);
            progress.inc(1);
            record.map(|record| SelfPlaySummary::default().record(record.state))
        })
        .try_reduce(SelfPlaySummary::default, |a, b| Ok(a.merge(b)))?;

    progress.finish();
    Ok(summary)
}
