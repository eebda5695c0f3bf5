//! Turn loop: runs rounds of one game between two players at one console.

use crate::console::Console;
use crate::games::{Narration, Token, Verdict};
use anyhow::{Context, Result};
use tracing::{debug, info, instrument, warn};

/// What happens after a round ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    NewRound,
    End,
}

/// One play-through: a board and whose turn it is.
#[derive(Debug)]
struct Round<B> {
    board: B,
    to_move: Token,
    moves: usize,
}

impl<B> Round<B> {
    /// X always opens a fresh round.
    fn new(board: B) -> Self {
        Self {
            board,
            to_move: Token::X,
            moves: 0,
        }
    }
}

/// Drives rounds of `G` over console `C` until the players stop.
#[derive(Debug)]
pub struct Session<G, C> {
    game: G,
    console: C,
}

impl<G: Narration, C: Console> Session<G, C> {
    /// Creates a session; nothing is printed until [`Session::run`].
    pub fn new(game: G, console: C) -> Self {
        Self { game, console }
    }

    /// Returns the console, e.g. to inspect a captured transcript.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Plays rounds until a rematch is declined or input runs out.
    ///
    /// Returns the verdict of every round that reached a win or draw, in order.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Vec<Verdict>> {
        info!("Starting session");
        self.say(self.game.opening())?;

        let mut verdicts = Vec::new();
        loop {
            let Some(verdict) = self.play_round()? else {
                warn!("Input closed mid-round, ending session");
                break;
            };
            verdicts.push(verdict);

            if self.ask_rematch()? == Control::End {
                self.say(self.game.farewell())?;
                break;
            }
        }

        info!(rounds = verdicts.len(), "Session finished");
        Ok(verdicts)
    }

    /// Plays one round to its verdict, or `None` if input ran out first.
    #[instrument(skip(self))]
    fn play_round(&mut self) -> Result<Option<Verdict>> {
        let mut round = Round::new(self.game.new_board());
        info!("Starting round");
        self.say(self.game.round_start(&round.board))?;

        loop {
            let token = round.to_move;
            self.say(self.game.turn_start(&round.board, token))?;

            let Some(mv) = self.next_move(&round.board, token)? else {
                return Ok(None);
            };
            self.game
                .place(&mut round.board, mv, token)
                .context("validated move could not be placed")?;
            round.moves += 1;
            debug!(?mv, %token, moves = round.moves, "Move applied");
            self.say(self.game.accepted(mv, &round.board))?;

            let verdict = self.game.is_over(&round.board, token);
            if verdict.is_over() {
                info!(?verdict, moves = round.moves, "Round over");
                self.say(self.game.round_over(verdict, &round.board))?;
                return Ok(Some(verdict));
            }
            round.to_move = token.opponent();
        }
    }

    /// Prompts until `token` enters a legal move, or `None` at end of input.
    fn next_move(&mut self, board: &G::Board, token: Token) -> Result<Option<G::Move>> {
        loop {
            self.say(self.game.move_prompt(board, token))?;
            let Some(line) = self.listen()? else {
                return Ok(None);
            };
            match self.game.read_move(board, line.trim()) {
                Ok(mv) => return Ok(Some(mv)),
                Err(rejection) => {
                    debug!(%rejection, %token, "Move rejected");
                    self.say(self.game.rejected(&rejection))?;
                }
            }
        }
    }

    /// Only `y` or `Y` starts another round; anything else, EOF included, ends.
    fn ask_rematch(&mut self) -> Result<Control> {
        self.say(self.game.rematch_prompt())?;
        let answer = self.listen()?;
        let control = match answer.as_deref().map(str::trim) {
            Some(reply) if reply.eq_ignore_ascii_case("y") => Control::NewRound,
            _ => Control::End,
        };
        debug!(?answer, ?control, "Rematch answered");
        Ok(control)
    }

    fn say(&mut self, text: String) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.console
            .write(&text)
            .context("failed to write to console")
    }

    fn listen(&mut self) -> Result<Option<String>> {
        self.console
            .read_line()
            .context("failed to read from console")
    }
}
