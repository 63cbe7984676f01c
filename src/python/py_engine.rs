//! Engine bindings for Python.

use pyo3::prelude::*;

use crate::core::{GameConfig, Move};
use crate::rules::{RoundEngine, SeededMoves};

use super::py_core::{outcome_name, parse_move, to_py_err, PyGameState, PyRoundReport};

/// Python wrapper for RoundEngine.
///
/// Computer moves come from a seeded stream; omit `seed` for a fresh
/// OS-chosen one.
#[pyclass(name = "RoundEngine")]
pub struct PyRoundEngine {
    engine: RoundEngine<SeededMoves>,
}

#[pymethods]
impl PyRoundEngine {
    /// Create a new engine.
    ///
    /// # Arguments
    /// - max_rounds: Rounds per game (default 5)
    /// - seed: RNG seed for reproducible computer moves
    #[new]
    #[pyo3(signature = (max_rounds = crate::core::MAX_ROUNDS, seed = None))]
    fn new(max_rounds: u32, seed: Option<u64>) -> PyResult<Self> {
        let source = match seed {
            Some(seed) => SeededMoves::new(seed),
            None => SeededMoves::from_entropy(),
        };
        let config = GameConfig::default().with_max_rounds(max_rounds);
        let engine = RoundEngine::with_config(config, source).map_err(to_py_err)?;
        Ok(Self { engine })
    }

    /// Play one round with "rock", "paper" or "scissors".
    ///
    /// Raises RuntimeError once the game is over.
    fn play_round(&mut self, player_move: &str) -> PyResult<PyRoundReport> {
        let mv: Move = parse_move(player_move)?;
        self.engine
            .play_round(mv)
            .map(PyRoundReport)
            .map_err(to_py_err)
    }

    fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    /// "player", "computer" or "draw". Raises RuntimeError mid-game.
    fn final_result(&self) -> PyResult<&'static str> {
        self.engine.final_result().map(outcome_name).map_err(to_py_err)
    }

    fn reset(&mut self) -> PyGameState {
        PyGameState(self.engine.reset())
    }

    #[getter]
    fn state(&self) -> PyGameState {
        PyGameState(self.engine.state())
    }

    /// Seed of the computer's move stream, for replaying a game.
    #[getter]
    fn seed(&self) -> u64 {
        self.engine.source().seed()
    }

    fn __repr__(&self) -> String {
        format!("RoundEngine({})", self.engine.state())
    }
}
