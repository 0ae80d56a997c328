//! Domain model types (pure, no I/O).

pub mod candidate;
pub mod error;
pub mod screen_action;
pub mod time;

pub use candidate::Candidate;
pub use error::{AppError, FetchError, SourceError, TimeParseError};
pub use screen_action::ScreenAction;
pub use time::{Clock, ClockMode, FixedClock, Period, SystemClock, TimeValue, WheelState};
