pub mod admin;
pub mod dispatch;
pub mod list;
pub mod play;
pub mod quiz;
pub mod results;
pub mod show;
