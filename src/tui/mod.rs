//! TUI module: Terminal User Interface using Ratatui.
//!
//! A single screen: title, horizontal domain selector, the selected
//! domain's form beside its reference notes, and an inline result banner.

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::MedicalTheme;
