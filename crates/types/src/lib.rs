//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable in any
//! context (core scoring, terminal rendering, JSON output).
//!
//! # Lane Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PIN_COUNT` | 10 | Pins racked at the start of a frame |
//! | `FRAME_COUNT` | 10 | Frames in one game |
//! | `MAX_ROLLS_PER_FRAME` | 2 | Roll limit for frames 1-9 |
//! | `TENTH_FRAME_MAX_ROLLS` | 3 | Roll limit for the tenth frame (with bonus roll) |
//! | `MAX_ROLLS_PER_GAME` | 21 | Nine open frames plus a tenth with a bonus roll |
//! | `PERFECT_SCORE` | 300 | Twelve consecutive strikes |
//!
//! # Examples
//!
//! ```
//! use tenpin_types::{ScoreEntry, FRAME_COUNT, PIN_COUNT};
//!
//! let entry = ScoreEntry::scored(1, 30);
//! assert_eq!(entry.frame_score, Some(30));
//! assert!(!ScoreEntry::pending(2).is_scored());
//!
//! assert_eq!(FRAME_COUNT, 10);
//! assert_eq!(PIN_COUNT, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Pins standing at the start of every frame (and every fresh rack in the tenth).
pub const PIN_COUNT: u8 = 10;

/// Number of frames in a game.
pub const FRAME_COUNT: usize = 10;

/// Roll limit for frames 1-9.
pub const MAX_ROLLS_PER_FRAME: usize = 2;

/// Roll limit for the tenth frame, including the bonus roll.
pub const TENTH_FRAME_MAX_ROLLS: usize = 3;

/// Upper bound on rolls in a single game.
pub const MAX_ROLLS_PER_GAME: usize = (FRAME_COUNT - 1) * MAX_ROLLS_PER_FRAME + TENTH_FRAME_MAX_ROLLS;

/// Highest achievable score.
pub const PERFECT_SCORE: u32 = 300;

/// One row of score output.
///
/// `frame_score` is the cumulative total through this frame, or `None` while it
/// cannot be determined yet (frame unfinished, or its bonus rolls not thrown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub frame_number: u8,
    pub frame_score: Option<u32>,
}

impl ScoreEntry {
    pub const fn scored(frame_number: u8, total: u32) -> Self {
        Self {
            frame_number,
            frame_score: Some(total),
        }
    }

    pub const fn pending(frame_number: u8) -> Self {
        Self {
            frame_number,
            frame_score: None,
        }
    }

    pub fn is_scored(&self) -> bool {
        self.frame_score.is_some()
    }
}

/// Opening shape of a completed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    Strike,
    Spare,
    Open,
}

impl FrameKind {
    /// Number of rolls from the frame's own opening that are credited to it.
    pub fn own_rolls(self) -> usize {
        match self {
            FrameKind::Strike => 1,
            FrameKind::Spare | FrameKind::Open => 2,
        }
    }

    /// Number of following rolls added as bonus.
    pub fn bonus_rolls(self) -> usize {
        match self {
            FrameKind::Strike => 2,
            FrameKind::Spare => 1,
            FrameKind::Open => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FrameKind::Strike => "strike",
            FrameKind::Spare => "spare",
            FrameKind::Open => "open",
        }
    }
}
