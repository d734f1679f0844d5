//! Terminal presentation: setup, styling, and widgets.

pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
