//! Python bindings for the rust-rps round engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_rps as rps
//!
//! engine = rps.RoundEngine(seed=42)
//! while not engine.is_game_over():
//!     report = engine.play_round("rock")
//!     print(report.computer_move, report.outcome, report.state)
//!
//! print(engine.final_result())   # "player", "computer" or "draw"
//! engine.reset()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// rust-rps: a five-round Rock-Paper-Scissors engine.
#[pymodule]
fn rust_rps(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameState>()?;
    m.add_class::<PyRoundReport>()?;
    m.add_class::<PyRoundEngine>()?;
    m.add("MAX_ROUNDS", crate::core::MAX_ROUNDS)?;
    Ok(())
}
