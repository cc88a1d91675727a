pub mod args;
pub mod logging;
pub mod menu;
pub mod print;
