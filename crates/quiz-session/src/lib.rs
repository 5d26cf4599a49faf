//! # quiz-session
//!
//! The quiz play engine: a once-per-run shuffle, the session state machine,
//! scoring, integrity monitoring, and an async driver that serializes user
//! commands, timer ticks, and violations through one event queue.

pub mod answer;
pub mod driver;
pub mod monitor;
pub mod scoring;
pub mod session;
pub mod shuffle;
pub mod transition;
pub mod view;

#[cfg(test)]
mod test_support;

pub use answer::AnswerSlot;
pub use driver::{DriverClosed, SessionDriver, SessionUpdate};
pub use monitor::{IntegritySource, SignalHub, Subscription, ViolationHandler};
pub use scoring::{Grade, Score};
pub use session::QuizSession;
pub use shuffle::ShuffledQuiz;
pub use transition::{Notice, Transition};
pub use view::{OptionView, ResultView, SessionView};
