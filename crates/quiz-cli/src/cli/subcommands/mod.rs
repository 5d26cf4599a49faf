pub mod admin;
pub mod quiz;

pub use admin::AdminCommands;
pub use quiz::QuizCommands;
