use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};

use tictactoe_ai::{
    board::{Board, GameState, Player},
    logger::init_logger,
    rng::GameRng,
    self_play::self_play,
    solver::Solver,
};

mod terminal;

#[derive(Parser)]
#[command(name = "tictactoe", version, about = "Play Tic-Tac-Toe against a perfect opponent")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the computer (the default)
    Play(PlayArgs),

    /// Let the engine play against itself
    Selfplay(SelfPlayArgs),
}

#[derive(Args, Default)]
struct PlayArgs {
    /// Mark to play as, X always moves first
    #[arg(long, value_parser = parse_player)]
    mark: Option<Player>,

    /// Seed for the computer's choice between equally good moves
    #[arg(long)]
    seed: Option<u64>,

    /// Log the search results of every computer move
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Args)]
struct SelfPlayArgs {
    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: usize,

    #[arg(long)]
    seed: Option<u64>,

    /// Open every game with a random move for X
    #[arg(long)]
    random_opening: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn parse_player(mark: &str) -> Result<Player, String> {
    match mark {
        "X" | "x" => Ok(Player::X),
        "O" | "o" => Ok(Player::O),
        _ => Err(format!("unknown mark '{}', expected X or O", mark)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Commands::Play(PlayArgs::default())) {
        Commands::Play(args) => play(args),
        Commands::Selfplay(args) => run_self_play(args),
    }
}

fn play(args: PlayArgs) -> Result<()> {
    if args.verbose {
        init_logger(Some("play".to_string()));
    }

    println!("Tic Tac Toe");
    println!("-----------");

    let human = match args.mark {
        Some(mark) => mark,
        None => loop {
            match parse_player(&terminal::prompt("Do you want to be X or O? ")?) {
                Ok(mark) => break mark,
                Err(err) => println!("{}", err),
            }
        },
    };
    let cpu = Solver::new(human.opponent());
    let mut rng = args.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);
    tictactoe_ai::log!("human plays {}, seed {}", human, rng.seed());

    let mut board = Board::new();
    let mut to_move = Player::X;

    // the computer opens with a random cell, every opening draws anyway
    if cpu.player() == Player::X {
        let opening = board
            .random_free_cell(&mut rng)
            .ok_or_else(|| anyhow!("no free cell to open with"))?;
        board.set_cell(opening, cpu.player())?;
        println!("Cpu played: {}", opening);
        to_move = human;
    }

    // game loop
    while board.state() == GameState::Playing {
        terminal::display(&board)?;

        if to_move == human {
            let input = terminal::prompt("Enter cell: ")?;
            let cell = match input.parse::<usize>() {
                Err(_) => {
                    println!("Invalid number: {}", input);
                    continue;
                }
                Ok(cell) => cell,
            };
            match board.set_cell(cell, human) {
                Ok(true) => {}
                Ok(false) => {
                    println!("Cell {} is already taken", cell);
                    continue;
                }
                Err(err) => {
                    println!("{}", err);
                    continue;
                }
            }
        } else {
            println!("Cpu is thinking...");
            let cell = cpu.best_move(&mut board, cpu.player(), &mut rng)?;
            board.set_cell(cell, cpu.player())?;
            println!("Cpu played: {}", cell);
        }
        to_move = to_move.opponent();
    }

    terminal::display(&board)?;
    println!("GAME OVER");
    match board.state().winner() {
        Some(winner) => println!("Winner is {}", winner),
        None => println!("Draw!"),
    }
    Ok(())
}

fn run_self_play(args: SelfPlayArgs) -> Result<()> {
    if args.verbose {
        init_logger(Some("selfplay".to_string()));
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    println!("Playing {} games with seed {}", args.games, seed);

    let summary = self_play(args.games, seed, args.random_opening)?;
    println!(
        "X wins: {}, O wins: {}, draws: {} ({} games)",
        summary.x_wins, summary.o_wins, summary.draws, summary.games
    );
    Ok(())
}
