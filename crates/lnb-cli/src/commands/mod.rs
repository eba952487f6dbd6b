pub mod command;
pub mod parse;
pub mod points;
pub mod progress;
