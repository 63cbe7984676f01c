//! Presenter trait and a recording implementation.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Move, RoundOutcome};

/// Renders engine results.
///
/// Called synchronously by the UI layer after each engine call. Purely
/// observational: nothing a presenter does feeds back into game state.
pub trait Presenter {
    /// A round was played.
    fn show_round_result(&mut self, player: Move, computer: Move, outcome: RoundOutcome, state: &GameState);

    /// The final round's display delay elapsed; show the aggregate result.
    fn show_game_over(&mut self, outcome: RoundOutcome, state: &GameState);

    /// The game was reset for another play.
    fn show_reset(&mut self, state: &GameState);

    /// Input re-opened after a round's display delay.
    fn show_ready(&mut self, _state: &GameState) {}
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn show_round_result(&mut self, player: Move, computer: Move, outcome: RoundOutcome, state: &GameState) {
        (**self).show_round_result(player, computer, outcome, state);
    }

    fn show_game_over(&mut self, outcome: RoundOutcome, state: &GameState) {
        (**self).show_game_over(outcome, state);
    }

    fn show_reset(&mut self, state: &GameState) {
        (**self).show_reset(state);
    }

    fn show_ready(&mut self, state: &GameState) {
        (**self).show_ready(state);
    }
}

/// One presenter call, as recorded by `EventLog`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresenterEvent {
    RoundResult {
        player: Move,
        computer: Move,
        outcome: RoundOutcome,
        state: GameState,
    },
    GameOver {
        outcome: RoundOutcome,
        state: GameState,
    },
    Reset {
        state: GameState,
    },
    Ready {
        state: GameState,
    },
}

/// Presenter that records every call in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<PresenterEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[PresenterEvent] {
        &self.events
    }

    /// The most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&PresenterEvent> {
        self.events.last()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Presenter for EventLog {
    fn show_round_result(&mut self, player: Move, computer: Move, outcome: RoundOutcome, state: &GameState) {
        self.events.push(PresenterEvent::RoundResult {
            player,
            computer,
            outcome,
            state: *state,
        });
    }

    fn show_game_over(&mut self, outcome: RoundOutcome, state: &GameState) {
        self.events.push(PresenterEvent::GameOver { outcome, state: *state });
    }

    fn show_reset(&mut self, state: &GameState) {
        self.events.push(PresenterEvent::Reset { state: *state });
    }

    fn show_ready(&mut self, state: &GameState) {
        self.events.push(PresenterEvent::Ready { state: *state });
    }
}
