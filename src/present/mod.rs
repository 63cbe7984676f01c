//! Presentation: the `Presenter` seam and ready-made presenters.
//!
//! Rendering, sound and animation all live behind `Presenter`. Nothing here
//! touches game state.

pub mod messages;
pub mod presenter;
pub mod text;

pub use messages::Cue;
pub use presenter::{EventLog, Presenter, PresenterEvent};
pub use text::TextPresenter;
