use anyhow::{bail, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdin, stdout, Write};

use tictactoe_ai::{
    board::{Board, Cell},
    SIZE,
};

/// Draws the board in colour, empty cells show their index so the
/// player knows what to type
pub fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    for (row_index, row) in board.cells().chunks(SIZE).enumerate() {
        if row_index > 0 {
            stdout.queue(PrintStyledContent(style("\n---+---+---\n")))?;
        }
        for (column, cell) in row.iter().enumerate() {
            let index = row_index * SIZE + column;
            let content = match cell {
                Cell::Empty => index.to_string(),
                _ => cell.to_char().to_string(),
            };
            stdout.queue(PrintStyledContent(
                style(format!(" {} ", content))
                    .attribute(if cell.is_empty() {
                        Attribute::Dim
                    } else {
                        Attribute::Bold
                    })
                    .with(match cell {
                        Cell::X => Color::Red,
                        Cell::O => Color::Yellow,
                        Cell::Empty => Color::DarkGrey,
                    }),
            ))?;
            if column + 1 < SIZE {
                stdout.queue(PrintStyledContent(style("|")))?;
            }
        }
    }
    stdout.queue(PrintStyledContent(style("\n\n")))?;
    stdout.flush()?;
    Ok(())
}

/// Prints `prompt` and reads one trimmed line from stdin
pub fn prompt(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    stdout().flush()?;

    let mut buffer = String::new();
    if stdin().read_line(&mut buffer)? == 0 {
        bail!("input closed");
    }
    Ok(buffer.trim().to_string())
}
