//! Conventional scorecard marks for a frame's rolls.
//!
//! `X` strike, `/` spare, `-` gutter, digits otherwise. In the tenth frame the
//! rack is reset after every cleared deck, so `X X X` and `7 / X` read naturally.

use crate::core::Frame;
use crate::types::PIN_COUNT;

/// Mark for a single roll.
///
/// `standing` is the pin count before the roll and `first_ball` is true when
/// the roll is thrown at a full rack.
pub fn roll_mark(pins: u8, standing: u8, first_ball: bool) -> char {
    if first_ball && pins == PIN_COUNT {
        'X'
    } else if !first_ball && pins >= standing {
        '/'
    } else if pins == 0 {
        '-'
    } else {
        char::from_digit(pins as u32, 10).unwrap_or('?')
    }
}

/// Space-separated marks for every roll recorded in `frame`.
pub fn frame_marks(frame: &Frame) -> String {
    let mut standing = PIN_COUNT;
    let mut first_ball = true;
    let mut out = String::with_capacity(frame.rolls().len() * 2);

    for &pins in frame.rolls() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push(roll_mark(pins, standing, first_ball));

        if first_ball && pins != PIN_COUNT {
            first_ball = false;
            standing -= pins;
        } else {
            first_ball = true;
            standing = PIN_COUNT;
        }
    }
    out
}
