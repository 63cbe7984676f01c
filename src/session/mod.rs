//! UI-layer session control.
//!
//! The engine knows nothing about timers. A `Session` owns the input gate,
//! the display delays between rounds, presenter dispatch and play-again,
//! and keeps statistics across games.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use rust_rps::core::{GameConfig, Move};
//! use rust_rps::present::EventLog;
//! use rust_rps::rules::ScriptedMoves;
//! use rust_rps::session::{Dispatch, Session};
//!
//! let mut session = Session::new(
//!     GameConfig::default(),
//!     ScriptedMoves::always(Move::Scissors),
//!     EventLog::new(),
//! ).unwrap();
//!
//! let t0 = Instant::now();
//! assert!(matches!(session.submit(Move::Rock, t0).unwrap(), Dispatch::Played(_)));
//! // Clicks during the display delay are dropped.
//! assert_eq!(session.submit(Move::Rock, t0).unwrap(), Dispatch::Ignored);
//! session.tick(t0 + Duration::from_millis(900));
//! assert!(session.accepts_input(t0 + Duration::from_millis(900)));
//! ```

pub mod controller;
pub mod gate;
pub mod stats;

pub use controller::{Dispatch, Session, SessionEvent};
pub use gate::InputGate;
pub use stats::SessionStats;
