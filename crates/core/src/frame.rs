//! Frame module - one frame's rolls and the rules for accepting them
//!
//! Frames 1-9 hold at most two rolls whose pinfall may not exceed the rack.
//! The tenth frame re-racks after a strike or spare and grants a third (bonus)
//! roll when its opening two rolls clear the deck.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::types::{FrameKind, FRAME_COUNT, PIN_COUNT, TENTH_FRAME_MAX_ROLLS};

/// A single frame of a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    number: u8,
    rolls: ArrayVec<u8, TENTH_FRAME_MAX_ROLLS>,
}

impl Frame {
    /// Create an empty frame with its ordinal number (1-10).
    pub fn new(number: u8) -> Self {
        Self {
            number,
            rolls: ArrayVec::new(),
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// Rolls recorded so far, in the order they were thrown.
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    pub fn is_tenth(&self) -> bool {
        self.number as usize == FRAME_COUNT
    }

    /// True when the first roll knocked down every pin.
    pub fn is_strike(&self) -> bool {
        self.rolls.first() == Some(&PIN_COUNT)
    }

    /// True when the first two rolls (without a strike) knocked down every pin.
    pub fn is_spare(&self) -> bool {
        match self.rolls.as_slice() {
            [first, second, ..] => *first != PIN_COUNT && first + second == PIN_COUNT,
            _ => false,
        }
    }

    /// Record the next roll.
    ///
    /// Returns `false` (and leaves the frame untouched) when the pin count is
    /// outside `0..=10` or the frame cannot take another roll of that size.
    pub fn add_roll(&mut self, pins: i32) -> bool {
        let Some(pins) = u8::try_from(pins).ok().filter(|&p| p <= PIN_COUNT) else {
            debug!(frame = self.number, pins, "roll out of range");
            return false;
        };

        let accepted = if self.is_tenth() {
            self.accepts_tenth(pins)
        } else {
            self.accepts_normal(pins)
        };

        if accepted {
            self.rolls.push(pins);
        } else {
            debug!(frame = self.number, pins, rolls = ?self.rolls(), "roll rejected");
        }
        accepted
    }

    fn accepts_normal(&self, pins: u8) -> bool {
        match self.rolls.as_slice() {
            [] => true,
            [first] => first + pins <= PIN_COUNT,
            _ => false,
        }
    }

    fn accepts_tenth(&self, pins: u8) -> bool {
        match self.rolls.as_slice() {
            [] => true,
            [first] => *first == PIN_COUNT || first + pins <= PIN_COUNT,
            [_, _] => self.earned_bonus_roll(),
            _ => false,
        }
    }

    /// Tenth frame only: the opening two rolls were a strike or summed to ten.
    fn earned_bonus_roll(&self) -> bool {
        match self.rolls.as_slice() {
            [first, second, ..] => *first == PIN_COUNT || first + second == PIN_COUNT,
            _ => false,
        }
    }

    /// True when the frame will accept no further rolls under normal play.
    pub fn is_complete(&self) -> bool {
        if self.is_tenth() {
            return match self.rolls.len() {
                0 | 1 => false,
                n if self.earned_bonus_roll() => n == TENTH_FRAME_MAX_ROLLS,
                n => n == 2,
            };
        }

        self.is_strike() || self.rolls.len() == 2
    }

    /// Opening shape of a completed frame, `None` while still in play.
    pub fn kind(&self) -> Option<FrameKind> {
        if !self.is_complete() {
            return None;
        }
        Some(if self.is_strike() {
            FrameKind::Strike
        } else if self.is_spare() {
            FrameKind::Spare
        } else {
            FrameKind::Open
        })
    }

    /// Pins standing for the next throw under lane rules.
    ///
    /// Returns 0 once the frame is complete. In the tenth frame the rack is
    /// reset after a strike or after a spare.
    pub fn pins_standing(&self) -> u8 {
        if self.is_complete() {
            return 0;
        }
        match self.rolls.as_slice() {
            [] => PIN_COUNT,
            [first] if *first == PIN_COUNT => PIN_COUNT,
            [first] => PIN_COUNT - first,
            [first, second] if *first == PIN_COUNT && *second != PIN_COUNT => {
                PIN_COUNT - second
            }
            _ => PIN_COUNT,
        }
    }
}
