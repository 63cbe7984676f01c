//! Value type bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{GameError, GameState, Move, RoundOutcome};
use crate::rules::RoundReport;

/// Python name of an outcome.
pub(crate) fn outcome_name(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::PlayerWins => "player",
        RoundOutcome::ComputerWins => "computer",
        RoundOutcome::Draw => "draw",
    }
}

/// Parse a Python move string.
pub(crate) fn parse_move(text: &str) -> PyResult<Move> {
    text.parse::<Move>()
        .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
}

/// Map engine errors onto Python exceptions.
pub(crate) fn to_py_err(err: GameError) -> PyErr {
    match err {
        GameError::GameAlreadyOver | GameError::GameNotOver => {
            PyErr::new::<PyRuntimeError, _>(err.to_string())
        }
        other => PyErr::new::<PyValueError, _>(other.to_string()),
    }
}

/// Python wrapper for GameState.
#[pyclass(name = "GameState")]
#[derive(Clone, Debug)]
pub struct PyGameState(pub GameState);

#[pymethods]
impl PyGameState {
    #[getter]
    fn player_score(&self) -> u32 {
        self.0.player_score
    }

    #[getter]
    fn computer_score(&self) -> u32 {
        self.0.computer_score
    }

    #[getter]
    fn rounds_played(&self) -> u32 {
        self.0.rounds_played
    }

    #[getter]
    fn max_rounds(&self) -> u32 {
        self.0.max_rounds
    }

    /// Encode as bytes for checkpointing.
    fn to_bytes(&self) -> PyResult<Vec<u8>> {
        self.0.to_bytes().map_err(to_py_err)
    }

    /// Decode bytes produced by `to_bytes`.
    #[staticmethod]
    fn from_bytes(data: Vec<u8>) -> PyResult<Self> {
        GameState::from_bytes(&data).map(Self).map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "GameState(player_score={}, computer_score={}, rounds_played={}, max_rounds={})",
            self.0.player_score, self.0.computer_score, self.0.rounds_played, self.0.max_rounds
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for RoundReport.
#[pyclass(name = "RoundReport")]
#[derive(Clone, Debug)]
pub struct PyRoundReport(pub RoundReport);

#[pymethods]
impl PyRoundReport {
    #[getter]
    fn player_move(&self) -> &'static str {
        self.0.player_move.name()
    }

    #[getter]
    fn computer_move(&self) -> &'static str {
        self.0.computer_move.name()
    }

    /// "player", "computer" or "draw".
    #[getter]
    fn outcome(&self) -> &'static str {
        outcome_name(self.0.outcome)
    }

    #[getter]
    fn state(&self) -> PyGameState {
        PyGameState(self.0.state)
    }

    fn __repr__(&self) -> String {
        format!(
            "RoundReport({} vs {}: {})",
            self.0.player_move,
            self.0.computer_move,
            outcome_name(self.0.outcome)
        )
    }
}
