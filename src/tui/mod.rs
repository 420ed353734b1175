//! Terminal front end: the list renderer collaborating with the picker
//! core. All widget semantics live in the core; this module only draws
//! rows and translates key presses into picker events.

pub mod app;
pub mod colors;
pub mod list;
pub mod ui;

pub use app::TuiApp;
