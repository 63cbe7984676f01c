//! Computer move sources.
//!
//! The engine never calls a random function directly. It asks a
//! `MoveSource` for each computer move, so tests and replays can swap in a
//! seeded or scripted source.

use rand::Rng;
use smallvec::SmallVec;

use crate::core::{GameRng, GameRngState, Move};

/// Supplies the computer's move for each round.
pub trait MoveSource {
    /// Pick the computer's next move.
    fn next_move(&mut self) -> Move;
}

impl<S: MoveSource + ?Sized> MoveSource for &mut S {
    fn next_move(&mut self) -> Move {
        (**self).next_move()
    }
}

impl<S: MoveSource + ?Sized> MoveSource for Box<S> {
    fn next_move(&mut self) -> Move {
        (**self).next_move()
    }
}

/// Uniform moves from the thread-local RNG. Not reproducible.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomMoves;

impl MoveSource for RandomMoves {
    fn next_move(&mut self) -> Move {
        let index = rand::thread_rng().gen_range(0..Move::COUNT);
        Move::ALL[index]
    }
}

/// Uniform moves from a seeded `GameRng`.
///
/// Same seed, same sequence of computer moves.
#[derive(Clone, Debug)]
pub struct SeededMoves {
    rng: GameRng,
}

impl SeededMoves {
    /// Create a source with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a source with an OS-chosen seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Resume a source from a checkpoint.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }

    /// The seed this source started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Capture the current position in the stream.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl MoveSource for SeededMoves {
    fn next_move(&mut self) -> Move {
        Move::ALL[self.rng.gen_index(Move::COUNT)]
    }
}

/// Cycles through a fixed, non-empty sequence of moves.
#[derive(Clone, Debug)]
pub struct ScriptedMoves {
    script: SmallVec<[Move; 8]>,
    cursor: usize,
}

impl ScriptedMoves {
    /// Create a source that replays `moves` in order, wrapping around.
    ///
    /// Returns `None` if `moves` is empty.
    #[must_use]
    pub fn new(moves: &[Move]) -> Option<Self> {
        if moves.is_empty() {
            return None;
        }
        Some(Self {
            script: SmallVec::from_slice(moves),
            cursor: 0,
        })
    }

    /// A source that always plays `mv`.
    #[must_use]
    pub fn always(mv: Move) -> Self {
        Self {
            script: SmallVec::from_slice(&[mv]),
            cursor: 0,
        }
    }

    /// Moves handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self) -> Move {
        let mv = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        mv
    }
}
