//! Player-facing texts and feedback cues.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Move, RoundOutcome};

/// Prompt shown at the start of every game.
pub const PROMPT: &str = "Make your move!";

/// Kind of sound/animation feedback for an outcome.
///
/// Presenters decide how (or whether) to render a cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    Win,
    Lose,
    Click,
}

impl Cue {
    /// Cue for an outcome; draws get the neutral click.
    #[must_use]
    pub fn for_outcome(outcome: RoundOutcome) -> Self {
        match outcome {
            RoundOutcome::PlayerWins => Cue::Win,
            RoundOutcome::ComputerWins => Cue::Lose,
            RoundOutcome::Draw => Cue::Click,
        }
    }
}

/// Headline for a single round.
#[must_use]
pub fn round_message(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::PlayerWins => "You win this round!",
        RoundOutcome::ComputerWins => "You lose this round.",
        RoundOutcome::Draw => "It's a draw.",
    }
}

/// Which moves were played.
#[must_use]
pub fn round_details(player: Move, computer: Move) -> String {
    format!("You chose {player}. Computer chose {computer}.")
}

/// Round counter, e.g. `2 / 5`.
#[must_use]
pub fn round_counter(state: &GameState) -> String {
    format!("{} / {}", state.rounds_played, state.max_rounds)
}

/// Score line, e.g. `You 2 - 1 Computer`.
#[must_use]
pub fn score_line(state: &GameState) -> String {
    format!("You {} - {} Computer", state.player_score, state.computer_score)
}

/// Final verdict, scores always listed player first.
#[must_use]
pub fn final_message(outcome: RoundOutcome, state: &GameState) -> String {
    let (p, c) = (state.player_score, state.computer_score);
    match outcome {
        RoundOutcome::PlayerWins => format!("You won the game {p} to {c}!"),
        RoundOutcome::ComputerWins => format!("You lost the game {p} to {c}."),
        RoundOutcome::Draw => format!("The game is a draw {p} to {c}."),
    }
}
