use std::io::{self, BufRead, Write};
use tictactoe_common::tictactoe::{Difficulty, GameState, Outcome, Player, choose_move};
use tictactoe_common::{SessionRng, log, log_debug};

use crate::config::PlayMode;
use crate::input::{is_yes, parse_difficulty, parse_mode, parse_move, parse_side};
use crate::render::{symbol, write_board, write_instructions, write_summary, write_winning_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub mode: PlayMode,
    pub human: Player,
    pub difficulty: Difficulty,
}

impl GameSettings {
    fn is_bot_turn(&self, current: Player) -> bool {
        self.mode == PlayMode::VsBot && current != self.human
    }
}

enum Flow {
    Continue,
    InputClosed,
}

/// Console game loop. Reads answers line by line from `input` and writes
/// every prompt and board to `output`.
pub struct Session<R: BufRead, W: Write> {
    input: R,
    output: W,
    defaults: GameSettings,
    prompt_setup: bool,
    rng: SessionRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        input: R,
        output: W,
        defaults: GameSettings,
        prompt_setup: bool,
        rng: SessionRng,
    ) -> Self {
        Self {
            input,
            output,
            defaults,
            prompt_setup,
            rng,
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> io::Result<()> {
        write_instructions(&mut self.output)?;

        loop {
            let settings = if self.prompt_setup {
                match self.configure()? {
                    Some(settings) => settings,
                    None => return self.input_closed(),
                }
            } else {
                self.defaults
            };

            if let Flow::InputClosed = self.play_game(settings)? {
                return self.input_closed();
            }

            write!(self.output, "\nPlay again? (y/n): ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return self.input_closed();
            };
            if !is_yes(&line) {
                writeln!(self.output, "Thanks for playing!")?;
                return Ok(());
            }
            writeln!(self.output)?;
        }
    }

    fn input_closed(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nInput closed. Exiting.")?;
        log!("input closed");
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Setup menu. Blank or unknown answers keep the defaults.
    fn configure(&mut self) -> io::Result<Option<GameSettings>> {
        let mut settings = self.defaults;

        writeln!(self.output, "Play Mode:")?;
        writeln!(self.output, "  1) Human vs Bot")?;
        writeln!(self.output, "  2) Human vs Human")?;
        let default_mode = match settings.mode {
            PlayMode::VsBot => 1,
            PlayMode::VsHuman => 2,
        };
        let prompt = format!("Choose (1/2) [default {}]: ", default_mode);
        let Some(line) = self.ask(&prompt)? else {
            return Ok(None);
        };
        settings.mode = parse_mode(&line, settings.mode);

        if settings.mode == PlayMode::VsBot {
            let prompt = format!(
                "Choose your symbol X or O [default {}]: ",
                symbol(settings.human)
            );
            let Some(line) = self.ask(&prompt)? else {
                return Ok(None);
            };
            settings.human = parse_side(&line, settings.human);

            writeln!(self.output, "Bot difficulty:")?;
            writeln!(self.output, "  1) Easy (random)")?;
            writeln!(self.output, "  2) Hard (unbeatable)")?;
            let default_difficulty = match settings.difficulty {
                Difficulty::Easy => 1,
                Difficulty::Hard => 2,
            };
            let prompt = format!("Choose (1/2) [default {}]: ", default_difficulty);
            let Some(line) = self.ask(&prompt)? else {
                return Ok(None);
            };
            settings.difficulty = parse_difficulty(&line, settings.difficulty);
        }

        write_summary(&mut self.output, settings.mode, settings.human, settings.difficulty)?;
        Ok(Some(settings))
    }

    fn play_game(&mut self, settings: GameSettings) -> io::Result<Flow> {
        let mut game = GameState::new();
        log_debug!("new game: {:?}", settings);

        loop {
            write_board(&mut self.output, game.board())?;

            match game.outcome() {
                Outcome::InProgress => {}
                Outcome::Draw => {
                    writeln!(self.output, "It's a draw!")?;
                    log!("game over: draw");
                    return Ok(Flow::Continue);
                }
                outcome => {
                    if let Some(winner) = outcome.winner() {
                        writeln!(self.output, "Player {} wins!", symbol(winner))?;
                        log!("game over: {} wins", symbol(winner));
                    }
                    if let Some(line) = game.winning_line() {
                        write_winning_line(&mut self.output, &line)?;
                    }
                    return Ok(Flow::Continue);
                }
            }

            let current = game.current();
            if settings.is_bot_turn(current) {
                self.bot_turn(&mut game, settings.difficulty)?;
                continue;
            }

            let prompt = format!("Player {}, enter your move: ", symbol(current));
            let Some(line) = self.ask(&prompt)? else {
                return Ok(Flow::InputClosed);
            };

            let Some(pos) = parse_move(&line) else {
                writeln!(
                    self.output,
                    "Invalid input. Use 1-9 or 'row col' (e.g., 2 3). Try again."
                )?;
                continue;
            };

            if let Err(err) = game.play(pos) {
                log_debug!("rejected move from {}: {}", symbol(current), err);
                writeln!(self.output, "That cell is not available. Choose another.")?;
            }
        }
    }

    fn bot_turn(&mut self, game: &mut GameState, difficulty: Difficulty) -> io::Result<()> {
        let bot = game.current();
        let pos = choose_move(game.board_mut(), bot, bot.opponent(), difficulty, &mut self.rng)
            .and_then(|pos| game.play(pos).map(|_| pos))
            .map_err(io::Error::other)?;

        writeln!(self.output, "Bot plays at {} {}", pos.row + 1, pos.col + 1)?;
        Ok(())
    }
}
