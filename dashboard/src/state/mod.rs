//! Shell-owned client state.
//!
//! DESIGN
//! ======
//! State is split by concern so components depend on small focused models.
//! `theme` is the only state the shell owns across panels; `chat` is local to
//! the conversation panel.

pub mod chat;
pub mod theme;
