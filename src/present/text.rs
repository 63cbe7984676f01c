//! Line-oriented presenter for terminals and logs.

use std::io::{self, Write};

use super::messages::{self, Cue, PROMPT};
use super::presenter::Presenter;
use crate::core::{GameState, Move, RoundOutcome};

/// Writes results as plain text lines to any `Write`.
///
/// Write failures are logged and otherwise ignored: a presenter cannot
/// affect the game.
#[derive(Debug)]
pub struct TextPresenter<W> {
    out: W,
    bell: bool,
}

impl<W: Write> TextPresenter<W> {
    /// Create a presenter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, bell: false }
    }

    /// Ring the terminal bell on win/lose cues.
    pub fn with_bell(mut self, bell: bool) -> Self {
        self.bell = bell;
        self
    }

    /// Mutably borrow the underlying writer, e.g. to interleave prompts.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, lines: &[String], cue: Option<Cue>) {
        if let Err(err) = self.try_emit(lines, cue) {
            log::warn!("presenter output failed: {err}");
        }
    }

    fn try_emit(&mut self, lines: &[String], cue: Option<Cue>) -> io::Result<()> {
        if self.bell && matches!(cue, Some(Cue::Win | Cue::Lose)) {
            self.out.write_all(b"\x07")?;
        }
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    fn status(state: &GameState) -> String {
        format!(
            "{} | Round {}",
            messages::score_line(state),
            messages::round_counter(state)
        )
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn show_round_result(&mut self, player: Move, computer: Move, outcome: RoundOutcome, state: &GameState) {
        let lines = [
            messages::round_message(outcome).to_string(),
            messages::round_details(player, computer),
            Self::status(state),
        ];
        self.emit(&lines, Some(Cue::for_outcome(outcome)));
    }

    fn show_game_over(&mut self, outcome: RoundOutcome, state: &GameState) {
        let lines = [messages::final_message(outcome, state)];
        self.emit(&lines, Some(Cue::for_outcome(outcome)));
    }

    fn show_reset(&mut self, state: &GameState) {
        let lines = [Self::status(state), PROMPT.to_string()];
        self.emit(&lines, Some(Cue::Click));
    }

    fn show_ready(&mut self, _state: &GameState) {
        self.emit(&[PROMPT.to_string()], None);
    }
}
