//! Session: the UI-layer controller around one `RoundEngine`.
//!
//! ## Round lifecycle
//!
//! 1. `submit` while the gate is open plays a round, shows the result and
//!    closes the gate.
//! 2. After a non-final round, `tick` at or past `now + round_delay`
//!    re-opens the gate and calls `show_ready`.
//! 3. After the final round the gate stays closed; `tick` at or past
//!    `now + game_over_delay` calls `show_game_over`.
//! 4. `play_again` cancels any pending timer, resets, and re-opens.
//!
//! The engine is never called while the gate is closed.

use std::time::Instant;

use super::gate::InputGate;
use super::stats::SessionStats;
use crate::core::{GameConfig, GameError, GameState, Move, RoundOutcome};
use crate::present::Presenter;
use crate::rules::{MoveSource, RoundEngine, RoundReport};

/// What `submit` did with a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The round was played.
    Played(RoundReport),
    /// Input was disabled; the move was dropped.
    Ignored,
}

/// A timer that fired during `tick`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Input re-opened for the next round.
    Ready,
    /// The final result was shown.
    GameOver(RoundOutcome),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending {
    Reopen(Instant),
    GameOver(Instant),
}

impl Pending {
    fn due(self) -> Instant {
        match self {
            Pending::Reopen(at) | Pending::GameOver(at) => at,
        }
    }
}

/// Drives one engine and one presenter.
pub struct Session<S: MoveSource, P: Presenter> {
    engine: RoundEngine<S>,
    presenter: P,
    gate: InputGate,
    pending: Option<Pending>,
    stats: SessionStats,
}

impl<S: MoveSource, P: Presenter> Session<S, P> {
    /// Start a session with the given configuration.
    ///
    /// Shows the initial (zeroed) state through `show_reset`.
    pub fn new(config: GameConfig, source: S, presenter: P) -> Result<Self, GameError> {
        let engine = RoundEngine::with_config(config, source)?;
        Ok(Self::from_engine(engine, presenter))
    }

    /// Wrap an existing engine, possibly mid-game.
    pub fn from_engine(engine: RoundEngine<S>, presenter: P) -> Self {
        let mut session = Self {
            engine,
            presenter,
            gate: InputGate::Open,
            pending: None,
            stats: SessionStats::new(),
        };
        let state = session.engine.state();
        session.presenter.show_reset(&state);
        if state.is_over() {
            session.gate.close();
            if let Some(result) = state.final_result() {
                session.presenter.show_game_over(result, &state);
            }
        }
        session
    }

    /// Offer a player move arriving at `now`.
    ///
    /// Moves arriving while input is disabled are dropped, not queued.
    pub fn submit(&mut self, player_move: Move, now: Instant) -> Result<Dispatch, GameError> {
        // A reopen that came due without a tick still counts.
        if matches!(self.pending, Some(Pending::Reopen(at)) if now >= at) {
            self.tick(now);
        }
        if !self.gate.is_open(now) || self.engine.is_game_over() {
            log::debug!("input disabled, ignoring {player_move}");
            return Ok(Dispatch::Ignored);
        }

        let report = self.engine.play_round(player_move)?;
        self.stats.record_round(player_move);
        self.presenter.show_round_result(
            report.player_move,
            report.computer_move,
            report.outcome,
            &report.state,
        );

        let config = self.engine.config();
        if report.state.is_over() {
            self.gate.close();
            self.pending = Some(Pending::GameOver(now + config.game_over_delay()));
            self.stats.record_game(self.engine.final_result()?);
        } else {
            let reopen = now + config.round_delay();
            self.gate.close_until(reopen);
            self.pending = Some(Pending::Reopen(reopen));
        }

        Ok(Dispatch::Played(report))
    }

    /// Fire the pending timer if it is due at `now`.
    pub fn tick(&mut self, now: Instant) -> Option<SessionEvent> {
        let pending = self.pending?;
        if now < pending.due() {
            return None;
        }
        self.pending = None;

        let state = self.engine.state();
        match pending {
            Pending::Reopen(_) => {
                self.gate.open();
                self.presenter.show_ready(&state);
                Some(SessionEvent::Ready)
            }
            Pending::GameOver(_) => {
                let result = self.engine.final_result().ok()?;
                self.presenter.show_game_over(result, &state);
                Some(SessionEvent::GameOver(result))
            }
        }
    }

    /// When the next `tick` will do something.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(Pending::due)
    }

    /// Check if a move arriving at `now` would be played.
    #[must_use]
    pub fn accepts_input(&self, now: Instant) -> bool {
        self.gate.is_open(now) && !self.engine.is_game_over()
    }

    /// Start a new game. Cancels any pending timer. Always succeeds.
    pub fn play_again(&mut self) -> GameState {
        if self.pending.take().is_some() {
            log::debug!("cancelled pending display timer");
        }
        let state = self.engine.reset();
        self.gate.open();
        self.presenter.show_reset(&state);
        state
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.engine.state()
    }

    /// The wrapped engine.
    #[must_use]
    pub fn engine(&self) -> &RoundEngine<S> {
        &self.engine
    }

    /// The presenter.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presenter.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Session-wide statistics.
    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Tear down, returning the engine and presenter.
    pub fn into_parts(self) -> (RoundEngine<S>, P) {
        (self.engine, self.presenter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present::{EventLog, PresenterEvent};
    use crate::rules::ScriptedMoves;
    use std::time::Duration;

    fn session(computer: Move) -> Session<ScriptedMoves, EventLog> {
        Session::new(GameConfig::default(), ScriptedMoves::always(computer), EventLog::new()).unwrap()
    }

    #[test]
    fn test_new_session_shows_reset() {
        let session = session(Move::Rock);
        assert_eq!(
            session.presenter().events(),
            &[PresenterEvent::Reset { state: GameState::new(5) }]
        );
        assert!(session.accepts_input(Instant::now()));
    }

    #[test]
    fn test_input_ignored_during_round_delay() {
        let mut session = session(Move::Scissors);
        let t0 = Instant::now();

        assert!(matches!(session.submit(Move::Rock, t0).unwrap(), Dispatch::Played(_)));
        let mid = t0 + Duration::from_millis(450);
        assert_eq!(session.submit(Move::Rock, mid).unwrap(), Dispatch::Ignored);
        assert_eq!(session.state().rounds_played, 1);
        assert_eq!(session.engine().source().consumed(), 1);
    }

    #[test]
    fn test_tick_reopens_after_delay() {
        let mut session = session(Move::Scissors);
        let t0 = Instant::now();
        session.submit(Move::Rock, t0).unwrap();

        assert_eq!(session.next_deadline(), Some(t0 + Duration::from_millis(900)));
        assert_eq!(session.tick(t0 + Duration::from_millis(100)), None);
        assert_eq!(session.tick(t0 + Duration::from_millis(900)), Some(SessionEvent::Ready));
        assert!(matches!(session.presenter().last(), Some(PresenterEvent::Ready { .. })));
        assert!(session.accepts_input(t0 + Duration::from_millis(900)));
        assert_eq!(session.next_deadline(), None);
    }

    #[test]
    fn test_submit_after_delay_without_tick() {
        let mut session = session(Move::Scissors);
        let t0 = Instant::now();
        session.submit(Move::Rock, t0).unwrap();

        let later = t0 + Duration::from_secs(1);
        assert!(matches!(session.submit(Move::Rock, later).unwrap(), Dispatch::Played(_)));

        // reset, result, ready, result
        assert_eq!(session.presenter().len(), 4);
        assert!(matches!(session.presenter().events()[2], PresenterEvent::Ready { .. }));
    }

    #[test]
    fn test_final_round_schedules_game_over() {
        let mut session = session(Move::Scissors);
        let mut now = Instant::now();

        for _ in 0..5 {
            session.submit(Move::Rock, now).unwrap();
            now += Duration::from_millis(900);
            session.tick(now);
        }

        let events = session.presenter().events();
        assert!(matches!(
            events.last(),
            Some(PresenterEvent::GameOver { outcome: RoundOutcome::PlayerWins, .. })
        ));
        assert!(!session.accepts_input(now + Duration::from_secs(60)));
        assert_eq!(session.submit(Move::Rock, now).unwrap(), Dispatch::Ignored);
        assert_eq!(session.stats().player_wins, 1);
    }

    #[test]
    fn test_game_over_waits_for_delay() {
        let config = GameConfig::default().with_max_rounds(1);
        let mut session = Session::new(config, ScriptedMoves::always(Move::Rock), EventLog::new()).unwrap();
        let t0 = Instant::now();

        session.submit(Move::Paper, t0).unwrap();

        assert_eq!(session.tick(t0 + Duration::from_millis(799)), None);
        assert_eq!(
            session.tick(t0 + Duration::from_millis(800)),
            Some(SessionEvent::GameOver(RoundOutcome::PlayerWins))
        );
        assert_eq!(session.tick(t0 + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_play_again_cancels_pending_game_over() {
        let config = GameConfig::default().with_max_rounds(1);
        let mut session = Session::new(config, ScriptedMoves::always(Move::Rock), EventLog::new()).unwrap();
        let t0 = Instant::now();
        session.submit(Move::Paper, t0).unwrap();

        let state = session.play_again();

        assert_eq!(state, GameState::new(1));
        assert_eq!(session.next_deadline(), None);
        assert_eq!(session.tick(t0 + Duration::from_secs(5)), None);
        assert!(matches!(session.presenter().last(), Some(PresenterEvent::Reset { .. })));
        // the cancelled display does not uncount the finished game
        assert_eq!(session.stats().games_completed, 1);

        assert!(matches!(session.submit(Move::Rock, t0).unwrap(), Dispatch::Played(_)));
        assert_eq!(session.stats().games_completed, 2);
    }

    #[test]
    fn test_play_again_mid_delay_starts_fresh_timer() {
        let mut session = session(Move::Rock);
        let t0 = Instant::now();
        session.submit(Move::Paper, t0).unwrap();

        session.play_again();
        let t1 = t0 + Duration::from_millis(100);
        assert!(matches!(session.submit(Move::Paper, t1).unwrap(), Dispatch::Played(_)));

        // the old 900 ms deadline must not re-open the new round early
        assert_eq!(session.tick(t0 + Duration::from_millis(900)), None);
        assert!(!session.accepts_input(t0 + Duration::from_millis(900)));
        assert_eq!(session.next_deadline(), Some(t1 + Duration::from_millis(900)));
        assert_eq!(session.tick(t1 + Duration::from_millis(900)), Some(SessionEvent::Ready));
    }

    #[test]
    fn test_zero_delays() {
        let config = GameConfig::default().without_delays();
        let mut session = Session::new(config, ScriptedMoves::always(Move::Paper), EventLog::new()).unwrap();
        let now = Instant::now();

        for _ in 0..5 {
            assert!(matches!(session.submit(Move::Rock, now).unwrap(), Dispatch::Played(_)));
        }
        assert_eq!(
            session.tick(now),
            Some(SessionEvent::GameOver(RoundOutcome::ComputerWins))
        );
    }

    #[test]
    fn test_from_finished_engine() {
        let mut engine = RoundEngine::with_source(ScriptedMoves::always(Move::Rock));
        for _ in 0..5 {
            engine.play_round(Move::Rock).unwrap();
        }

        let mut session = Session::from_engine(engine, EventLog::new());

        assert!(matches!(
            session.presenter().last(),
            Some(PresenterEvent::GameOver { outcome: RoundOutcome::Draw, .. })
        ));
        assert_eq!(session.submit(Move::Rock, Instant::now()).unwrap(), Dispatch::Ignored);
    }
}
