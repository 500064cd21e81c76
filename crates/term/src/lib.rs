//! Terminal scorecard module.
//!
//! This is the presentation layer for a game: it never scores anything itself.
//! [`Scorecard`] turns frames plus already-computed score entries into text
//! lines, and [`ConsoleRenderer`] writes those lines to a terminal (with
//! crossterm colors) or to any other writer.
//!
//! Goals:
//! - Keep `core` free of formatting concerns
//! - Keep table layout pure so it can be tested without a terminal
//! - Allow plain output when stdout is not a color terminal

pub mod marks;
pub mod renderer;
pub mod scorecard;
pub mod style;

pub use tenpin_core as core;
pub use tenpin_types as types;

pub use marks::{frame_marks, roll_mark};
pub use renderer::{encode_into, ConsoleRenderer};
pub use scorecard::{center_text, LineKind, Scorecard, ScorecardLine};
pub use style::{LineStyle, Rgb};
