//! UI components mounted by the shell.
//!
//! The panels are self-contained: the shell places them and passes nothing.
//! Only `header` receives shell state.

pub mod button;
pub mod chat_panel;
pub mod header;
pub mod icons;
pub mod market_regime;
pub mod portfolio;
pub mod signal_board;
