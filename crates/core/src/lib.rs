//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of ten-pin bowling: which rolls a frame
//! accepts, when a frame is complete, and how cumulative scores are settled.
//! It has **no dependencies** on terminal output, argument parsing, or I/O.
//!
//! # Module Structure
//!
//! - [`frame`]: one frame's rolls, roll legality, strike/spare classification
//! - [`score`]: cumulative scoring with strike/spare lookahead
//! - [`game`]: ten frames plus the active-frame cursor used while playing
//!
//! # Game Rules
//!
//! - **Frames 1-9**: up to two rolls, pinfall may not exceed 10; a strike ends
//!   the frame after one roll
//! - **Tenth frame**: a strike or spare in the first two rolls earns a third
//! - **Strike**: 10 plus the next two rolls thrown
//! - **Spare**: 10 plus the next roll thrown
//! - **Open frame**: pins knocked down
//!
//! Scores are cumulative. A frame whose score cannot be settled yet is reported
//! as `None`, and scoring stops there.
//!
//! # Example
//!
//! ```
//! use tenpin_core::Game;
//!
//! let mut game = Game::new();
//! game.roll_all([10, 7, 3, 9, 0]).unwrap();
//!
//! let totals: Vec<Option<u32>> = game.scores().iter().map(|e| e.frame_score).collect();
//! // Frame 4 has not been started, so scoring stops there.
//! assert_eq!(totals, vec![Some(20), Some(39), Some(48), None]);
//! assert_eq!(game.score(), 48);
//! ```

pub mod frame;
pub mod game;
pub mod score;

pub use tenpin_types as types;

// Re-export commonly used types for convenience
pub use frame::Frame;
pub use game::{Game, RollError};
pub use score::{compute_score, final_score, is_final};
pub use types::{FrameKind, ScoreEntry};
