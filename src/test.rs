#[cfg(test)]
pub mod test {
    use anyhow::Result;

    use crate::{
        board::{Board, Cell, GameState, Player},
        rng::GameRng,
        solver::Solver,
        Error, DRAW_SCORE, LOSS_SCORE, WIN_SCORE,
    };

    #[test]
    pub fn free_cells() -> Result<()> {
        assert_eq!(Board::new().free_cells(), (0..9).collect::<Vec<_>>());

        let full: Board = "XOX XOO OXX".parse()?;
        assert!(full.free_cells().is_empty());
        assert!(full.is_full());

        let board: Board = "X-- -O- --X".parse()?;
        assert_eq!(board.free_cells(), vec![1, 2, 3, 5, 6, 7]);
        assert_eq!(board.num_moves(), 3);
        Ok(())
    }

    #[test]
    pub fn full_board_draw() -> Result<()> {
        let board: Board = "XOX XOO OXX".parse()?;
        assert_eq!(board.state(), GameState::Draw);
        assert_eq!(board.state(), board.state());
        assert_eq!(board.state().winner(), None);
        assert!(board.state().is_over());
        Ok(())
    }

    #[test]
    pub fn ongoing_and_won_states() -> Result<()> {
        assert_eq!(Board::new().state(), GameState::Playing);

        let board: Board = "XXX OO- ---".parse()?;
        assert_eq!(board.state(), GameState::XWin);

        // a win on the last cell is a win, not a draw
        let board: Board = "XOX OXO OXX".parse()?;
        assert_eq!(board.state(), GameState::XWin);
        Ok(())
    }

    #[test]
    pub fn set_and_clear_round_trip() -> Result<()> {
        for layout in &["---------", "X-- -O- --X", "XO- OX- ---"] {
            let mut board: Board = layout.parse()?;
            let rendered = board.render();
            for cell in board.free_cells() {
                for &player in &[Player::X, Player::O] {
                    assert!(board.set_cell(cell, player)?);
                    assert_eq!(board.cell(cell)?, Cell::from(player));
                    board.clear_cell(cell)?;
                    assert_eq!(board.render(), rendered);
                }
            }
        }
        Ok(())
    }

    #[test]
    pub fn occupied_cell_is_refused() -> Result<()> {
        let mut board = Board::new();
        assert!(board.set_cell(4, Player::X)?);
        assert!(!board.set_cell(4, Player::O)?);
        assert_eq!(board.cell(4)?, Cell::X);
        assert!(!board.is_cell_free(4)?);
        Ok(())
    }

    #[test]
    pub fn out_of_range_cells() -> Result<()> {
        let mut board = Board::new();
        assert_eq!(
            board.set_cell(9, Player::X),
            Err(Error::OutOfRangeCell { index: 9 })
        );
        assert_eq!(board.clear_cell(42), Err(Error::OutOfRangeCell { index: 42 }));
        assert_eq!(board.cell(9), Err(Error::OutOfRangeCell { index: 9 }));
        assert_eq!(board, Board::new());
        Ok(())
    }

    #[test]
    pub fn parse_errors() {
        assert_eq!(
            "XO-".parse::<Board>(),
            Err(Error::InvalidBoardLength {
                expected: 9,
                got: 3
            })
        );
        assert_eq!(
            "XO- -Z- ---".parse::<Board>(),
            Err(Error::InvalidCellCharacter {
                character: 'Z',
                position: 4
            })
        );
        assert!("X|O|-/-|-|-/-|-|-".parse::<Board>().is_ok());
    }

    #[test]
    pub fn render_layout() -> Result<()> {
        let board: Board = "XO- --- --X".parse()?;
        assert_eq!(
            board.render(),
            " X | O | -\n-----------\n - | - | -\n-----------\n - | - | X"
        );
        assert_eq!(board.to_string(), board.render());
        Ok(())
    }

    #[test]
    pub fn terminal_scores() -> Result<()> {
        let x_solver = Solver::new(Player::X);
        let o_solver = Solver::new(Player::O);

        let mut won: Board = "XXX OO- ---".parse()?;
        assert_eq!(x_solver.evaluate(&mut won, Player::O), WIN_SCORE);
        assert_eq!(o_solver.evaluate(&mut won, Player::O), LOSS_SCORE);

        let mut drawn: Board = "XOX XOO OXX".parse()?;
        assert_eq!(x_solver.evaluate(&mut drawn, Player::X), DRAW_SCORE);
        assert_eq!(o_solver.evaluate(&mut drawn, Player::X), DRAW_SCORE);
        Ok(())
    }

    #[test]
    pub fn forced_win() -> Result<()> {
        let mut board: Board = "XX- OO- ---".parse()?;
        let before = board.clone();

        // O completing its row wins, anything but 2 or 5 lets X complete its own
        let o_solver = Solver::new(Player::O);
        let scores = o_solver.move_scores(&mut board, Player::O)?;
        assert!(scores.contains(&(5, WIN_SCORE)));
        for cell in &[6, 7, 8] {
            assert!(scores.contains(&(*cell, LOSS_SCORE)));
        }
        assert!(o_solver.candidates(&mut board, Player::O)?.contains(&5));

        // direct evaluation of the winning cell
        assert!(board.set_cell(5, Player::O)?);
        assert_eq!(o_solver.evaluate(&mut board, Player::X), WIN_SCORE);
        board.clear_cell(5)?;

        // with X to move, completing the top row is the only winning move
        let x_solver = Solver::new(Player::X);
        assert_eq!(x_solver.candidates(&mut board, Player::X)?, vec![2]);
        let mut rng = GameRng::new(0);
        for _ in 0..10 {
            assert_eq!(x_solver.best_move(&mut board, Player::X, &mut rng)?, 2);
        }

        assert_eq!(board, before);
        Ok(())
    }

    #[test]
    pub fn forced_block() -> Result<()> {
        let mut board: Board = "XX- -O- ---".parse()?;
        let solver = Solver::new(Player::O);

        let scores = solver.move_scores(&mut board, Player::O)?;
        for &(cell, score) in &scores {
            if cell != 2 {
                assert_eq!(score, LOSS_SCORE, "cell {} should lose", cell);
            }
        }
        assert_eq!(solver.candidates(&mut board, Player::O)?, vec![2]);
        Ok(())
    }

    #[test]
    pub fn lost_position_falls_back_to_any_free_cell() -> Result<()> {
        // X threatens both the top row and the left column
        let mut board: Board = "XX- -O- X-O".parse()?;
        let solver = Solver::new(Player::O);

        assert!(solver
            .move_scores(&mut board, Player::O)?
            .iter()
            .all(|&(_, score)| score == LOSS_SCORE));
        assert!(solver.candidates(&mut board, Player::O)?.is_empty());

        let mut rng = GameRng::new(11);
        let free_cells = board.free_cells();
        for _ in 0..20 {
            let cell = solver.best_move(&mut board, Player::O, &mut rng)?;
            assert!(free_cells.contains(&cell));
        }
        Ok(())
    }

    #[test]
    pub fn no_free_cells() -> Result<()> {
        let mut board: Board = "XOX XOO OXX".parse()?;
        let solver = Solver::new(Player::X);
        let mut rng = GameRng::new(0);

        assert_eq!(
            solver.best_move(&mut board, Player::X, &mut rng),
            Err(Error::EmptyCandidateSet)
        );
        assert_eq!(
            solver.candidates(&mut board, Player::X),
            Err(Error::EmptyCandidateSet)
        );
        assert_eq!(board.random_free_cell(&mut rng), None);
        Ok(())
    }

    #[test]
    pub fn seeded_choice_repeats() -> Result<()> {
        // every reply to a corner opening keeps the draw except the edges
        let mut board: Board = "X-- --- ---".parse()?;
        let solver = Solver::new(Player::O);
        let candidates = solver.candidates(&mut board, Player::O)?;
        assert_eq!(candidates, vec![4]);

        let mut empty = Board::new();
        let x_solver = Solver::new(Player::X);
        let openings = x_solver.candidates(&mut empty, Player::X)?;
        assert_eq!(openings, (0..9).collect::<Vec<_>>());

        let picks = |seed| -> Result<Vec<usize>> {
            let mut rng = GameRng::new(seed);
            let mut board = "X-- -O- ---".parse::<Board>()?;
            let picks = (0..5)
                .map(|_| x_solver.best_move(&mut board, Player::X, &mut rng))
                .collect::<Result<Vec<_>, Error>>()?;
            Ok(picks)
        };
        assert_eq!(picks(5)?, picks(5)?);
        Ok(())
    }
}
