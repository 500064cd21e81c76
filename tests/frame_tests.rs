//! Frame tests - roll legality and completion rules

use tenpin::core::Frame;
use tenpin::types::FrameKind;

fn frame_with(number: u8, rolls: &[i32]) -> Frame {
    let mut frame = Frame::new(number);
    for &pins in rolls {
        frame.add_roll(pins);
    }
    frame
}

#[test]
fn test_any_legal_pair_completes_frames_one_to_nine() {
    for number in 1..=9u8 {
        for a in 0..=10 {
            for b in 0..=(10 - a) {
                let mut frame = Frame::new(number);
                assert!(frame.add_roll(a), "frame {} first roll {}", number, a);
                if a == 10 {
                    // A strike ends the frame; the only "second roll" left is a zero.
                    assert!(frame.is_complete());
                    continue;
                }
                assert!(!frame.is_complete());
                assert!(frame.add_roll(b), "frame {} rolls {} {}", number, a, b);
                assert!(frame.is_complete());
                for c in 0..=10 {
                    assert!(!frame.add_roll(c), "third roll accepted: {} {} {}", a, b, c);
                }
                assert_eq!(frame.rolls(), &[a as u8, b as u8]);
            }
        }
    }
}

#[test]
fn test_illegal_second_roll_leaves_frame_untouched() {
    for a in 1..=9 {
        let mut frame = frame_with(4, &[a]);
        assert!(!frame.add_roll(11 - a));
        assert_eq!(frame.rolls(), &[a as u8]);
        assert!(!frame.is_complete());
    }
}

#[test]
fn test_tenth_frame_three_strikes() {
    let mut frame = Frame::new(10);
    assert!(frame.add_roll(10));
    assert!(frame.add_roll(10));
    assert!(!frame.is_complete());
    assert!(frame.add_roll(10));
    assert!(frame.is_complete());
}

#[test]
fn test_tenth_frame_never_takes_a_fourth_roll() {
    for rolls in [[10, 10, 10], [7, 3, 5], [10, 2, 8], [0, 10, 0]] {
        let mut frame = frame_with(10, &rolls);
        assert!(frame.is_complete(), "{:?}", rolls);
        assert!(!frame.add_roll(0));
        assert_eq!(frame.rolls().len(), 3);
    }
}

#[test]
fn test_tenth_frame_open_completes_after_two() {
    let mut frame = frame_with(10, &[4, 5]);
    assert!(frame.is_complete());
    assert!(!frame.add_roll(3));
}

#[test]
fn test_classification_ignores_bonus_rolls() {
    assert_eq!(frame_with(10, &[10, 3, 7]).kind(), Some(FrameKind::Strike));
    assert_eq!(frame_with(10, &[3, 7, 10]).kind(), Some(FrameKind::Spare));
    assert!(!frame_with(10, &[3, 7, 10]).is_strike());
}

#[test]
fn test_rolls_accessor_is_read_only_view() {
    let frame = frame_with(1, &[3, 4]);
    let mut copy = frame.rolls().to_vec();
    copy.push(9);
    assert_eq!(frame.rolls(), &[3, 4]);
}
