//! Human player reading moves from a text stream.

use hexversi_core::{Color, CubeCoord, GameAction, GameState, Player, TextView};
use std::io::{BufRead, Write};
use tracing::warn;

/// A parsed line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(CubeCoord),
    Pass,
    Quit,
}

/// Parse `q r`, `q r s`, `pass` or `quit`.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim().to_ascii_lowercase();
    match line.as_str() {
        "pass" | "p" => return Ok(Command::Pass),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let numbers: Vec<i32> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<i32>().map_err(|_| format!("'{}' is not a number", part)))
        .collect::<Result<_, _>>()?;

    match numbers.as_slice() {
        [q, r] => Ok(Command::Play(CubeCoord::axial(*q, *r))),
        [q, r, s] => CubeCoord::new(*q, *r, *s)
            .map(Command::Play)
            .map_err(|e| e.to_string()),
        _ => Err("expected 'q r', 'q r s', 'pass' or 'quit'".to_string()),
    }
}

/// A player who types moves
pub struct HumanPlayer<R, W> {
    color: Color,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(color: Color, input: R, output: W) -> Self {
        Self { color, input, output }
    }

    fn prompt(&mut self, game: &GameState) -> std::io::Result<Option<GameAction>> {
        let legal = game.legal_moves(self.color);
        writeln!(self.output, "\n{}\n", TextView::new(game.board()))?;
        let listed: Vec<String> = legal.iter().map(|c| c.to_string()).collect();
        writeln!(self.output, "{} to move. Legal moves: {}", self.color, listed.join(" "))?;

        loop {
            write!(self.output, "{}> ", self.color)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match parse_command(&line) {
                Ok(Command::Play(coord)) if legal.contains(&coord) => {
                    return Ok(Some(GameAction::Move(coord)))
                }
                Ok(Command::Play(coord)) => {
                    writeln!(self.output, "{} is not a legal move", coord)?;
                }
                Ok(Command::Pass) => return Ok(Some(GameAction::Pass)),
                Ok(Command::Quit) => return Ok(None),
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn color(&self) -> Color {
        self.color
    }

    fn choose_action(&mut self, game: &GameState) -> Option<GameAction> {
        match self.prompt(game) {
            Ok(action) => action,
            Err(e) => {
                warn!("Lost input for {}: {}", self.color, e);
                None
            }
        }
    }
}
