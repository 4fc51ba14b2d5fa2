pub mod board;
pub mod client;
pub mod item;
pub mod theme;
pub mod ui;
