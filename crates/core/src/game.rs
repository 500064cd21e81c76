//! Game module - ten frames and the active-frame cursor
//!
//! Rolls go to the active frame. The cursor moves on when that frame completes
//! and stays on the tenth frame once reached. Rolling after the tenth frame is
//! complete is a caller bug and is reported as [`RollError::GameComplete`].

use derive_more::{Display, Error};
use tracing::debug;

use crate::frame::Frame;
use crate::score::{compute_score, final_score};
use crate::types::{ScoreEntry, FRAME_COUNT};

/// Roll submitted to a game that cannot take it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RollError {
    #[display("game is complete; no further rolls are accepted")]
    GameComplete,
}

impl RollError {
    pub fn code(self) -> &'static str {
        match self {
            RollError::GameComplete => "game_complete",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            RollError::GameComplete => "roll submitted after the tenth frame was complete",
        }
    }
}

/// A single-player game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    frames: [Frame; FRAME_COUNT],
    current: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a game with frames 1-10 ready and empty.
    pub fn new() -> Self {
        Self {
            frames: std::array::from_fn(|i| Frame::new(i as u8 + 1)),
            current: 0,
        }
    }

    /// Index (0-9) of the frame that receives the next roll.
    pub fn current_frame_index(&self) -> usize {
        self.current
    }

    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.current]
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn is_complete(&self) -> bool {
        self.current == FRAME_COUNT - 1 && self.frames[self.current].is_complete()
    }

    /// Submit a roll to the active frame.
    ///
    /// `Ok(false)` means the frame rejected the pin count and nothing changed.
    pub fn roll(&mut self, pins: i32) -> Result<bool, RollError> {
        if self.is_complete() {
            return Err(RollError::GameComplete);
        }

        let frame = &mut self.frames[self.current];
        if !frame.add_roll(pins) {
            return Ok(false);
        }

        if frame.is_complete() && self.current < FRAME_COUNT - 1 {
            self.current += 1;
            debug!(frame = self.current + 1, "advanced to next frame");
        }
        Ok(true)
    }

    /// Submit a sequence of rolls, stopping at the first error.
    ///
    /// Returns how many rolls were accepted.
    pub fn roll_all<I>(&mut self, rolls: I) -> Result<usize, RollError>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut accepted = 0;
        for pins in rolls {
            if self.roll(pins)? {
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    /// Running score per frame (see [`compute_score`]).
    pub fn scores(&self) -> Vec<ScoreEntry> {
        compute_score(&self.frames)
    }

    /// Current game total.
    pub fn score(&self) -> u32 {
        final_score(&self.scores())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_frames_are_numbered() {
        let game = Game::new();
        let numbers: Vec<u8> = game.frames().iter().map(Frame::number).collect();
        assert_eq!(numbers, (1..=10).collect::<Vec<u8>>());
        assert_eq!(game.current_frame_index(), 0);
        assert!(!game.is_complete());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_strike_advances_frame() {
        let mut game = Game::new();
        assert_eq!(game.roll(10), Ok(true));
        assert_eq!(game.current_frame_index(), 1);
        assert_eq!(game.roll(3), Ok(true));
        assert_eq!(game.current_frame_index(), 1);
        assert_eq!(game.roll(4), Ok(true));
        assert_eq!(game.current_frame_index(), 2);
    }

    #[test]
    fn test_rejected_roll_keeps_frame() {
        let mut game = Game::new();
        assert_eq!(game.roll(8), Ok(true));
        assert_eq!(game.roll(5), Ok(false));
        assert_eq!(game.roll(-3), Ok(false));
        assert_eq!(game.current_frame_index(), 0);
        assert_eq!(game.current_frame().rolls(), &[8]);
    }

    #[test]
    fn test_roll_after_completion_errors() {
        let mut game = Game::new();
        assert_eq!(game.roll_all(std::iter::repeat(10).take(12)), Ok(12));
        assert!(game.is_complete());
        assert_eq!(game.current_frame_index(), 9);
        assert_eq!(game.roll(0), Err(RollError::GameComplete));
        assert_eq!(game.score(), 300);
    }

    #[test]
    fn test_roll_all_stops_at_error() {
        let mut game = Game::new();
        let result = game.roll_all(std::iter::repeat(0).take(25));
        assert_eq!(result, Err(RollError::GameComplete));
        assert!(game.is_complete());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_roll_error_text() {
        assert_eq!(RollError::GameComplete.code(), "game_complete");
        assert_eq!(
            RollError::GameComplete.to_string(),
            "game is complete; no further rolls are accepted"
        );
    }
}
