use std::str::SplitWhitespace;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::warn;

use chess_base::{
    chess::*,
    error::BoardResult,
    game::{ChessGame, ClickOutcome},
};

#[macro_export]
macro_rules! send {
    ($($arg:tt)*) => {{
        use std::io::{self, Write};
        println!($($arg)*);
        let _ = io::stdout().flush();
    }};
}

pub struct Cli {
    game: ChessGame,
}

fn report(outcome: ClickOutcome) {
    match outcome {
        ClickOutcome::Selected {
            source,
            destinations,
        } => send!("selected {} ({destinations} moves)", square_name(source)),
        ClickOutcome::Deselected => send!("deselected"),
        ClickOutcome::Moved(mov) => send!("moved {}", mov.to_uci()),
        ClickOutcome::Ignored => send!("ignored"),
    }
}

impl Cli {
    pub fn new(game: ChessGame) -> Cli {
        Cli { game }
    }

    /// return true if is `quit` command
    fn execute_commands(&mut self, tokens: &mut SplitWhitespace) -> bool {
        match tokens.next() {
            Some("click") => {
                if let Some(square) = self.square_argument(tokens) {
                    report(self.game.click(square));
                }
            }
            Some("drop") => {
                if let Some(square) = self.square_argument(tokens) {
                    report(self.game.drop_on(square));
                }
            }
            Some("moves") => {
                if let Some(square) = self.square_argument(tokens) {
                    let moves: Vec<String> = self
                        .game
                        .valid_moves(square)
                        .iter()
                        .map(|mov| mov.to_uci())
                        .collect();
                    send!("moves {}", moves.join(" "));
                }
            }
            Some("state") => send!("{}", self.game.state_string()),
            Some("setstate") => match tokens.next() {
                Some(state) => {
                    if let Err(e) = self.game.set_state_string(state) {
                        send!("info string state error {e}");
                    }
                }
                None => send!("info string missing state"),
            },
            Some("fen") => {
                let fen = tokens.collect::<Vec<&str>>().join(" ");
                if let Err(e) = self.game.load_fen(&fen) {
                    send!("info string fen error {e}");
                }
            }
            Some("board") => send!("{}", self.game.grid().render()),
            Some("turn") => send!(
                "turn {:?} move {}",
                self.game.turn().side_to_move(),
                self.game.turn().move_number()
            ),
            Some("history") => {
                let history: Vec<String> =
                    self.game.turn().history().iter().map(|m| m.to_uci()).collect();
                send!("history {}", history.join(" "));
            }
            Some("reset") => self.game.set_up_board(),
            Some("stop") => self.game.stop_game(),
            Some("quit") => return true,
            None => {}
            _ => send!("info string unknown command"),
        };

        false
    }

    fn square_argument(&self, tokens: &mut SplitWhitespace) -> Option<Square> {
        let parsed: BoardResult<Square> = match tokens.next() {
            Some(name) => parse_square(name),
            None => {
                send!("info string missing square");
                return None;
            }
        };

        match parsed {
            Ok(square) => Some(square),
            Err(e) => {
                send!("info string {e}");
                None
            }
        }
    }

    /// Plays up to `plies` random moves through the click interface. Stops early if the side
    /// to move has nothing to move.
    pub fn autoplay(&mut self, plies: usize, seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);

        for _ in 0..plies {
            let movable = self.game.movable_squares();
            if movable.is_empty() {
                warn!("no movable piece for {:?}", self.game.turn().side_to_move());
                break;
            }

            let source = movable[rng.random_range(0..movable.len())];
            self.game.click(source);

            let targets: Vec<Square> = self.game.grid().highlighted().ones_iter().collect();
            if targets.is_empty() {
                break;
            }
            let target = targets[rng.random_range(0..targets.len())];
            report(self.game.click(target));
        }

        send!("{}", self.game.grid().render());
        send!("{}", self.game.state_string());
    }

    pub fn cli_loop(&mut self) {
        let stdin = std::io::stdin();
        let mut input = String::new();

        loop {
            input.clear();
            match stdin.read_line(&mut input) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            if self.execute_commands(&mut input.split_whitespace()) {
                break;
            }
        }
    }
}
