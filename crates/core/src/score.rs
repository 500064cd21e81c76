//! Scoring module - cumulative ten-pin scores with strike/spare lookahead
//!
//! All frames' rolls are read as one continuous stream, so a strike or spare
//! draws its bonus from whatever rolls follow it, across frame boundaries.
//! Scoring stops at the first frame whose score cannot be settled yet: that
//! frame is reported as `None` and nothing after it is emitted.

use tracing::trace;

use crate::frame::Frame;
use crate::types::{FrameKind, ScoreEntry, FRAME_COUNT, PIN_COUNT};

/// Compute the running score for each frame.
///
/// Only the first ten frames are ever visited. The frames are not modified and
/// a fresh vector is returned on every call.
pub fn compute_score(frames: &[Frame]) -> Vec<ScoreEntry> {
    let stream: Vec<u8> = frames
        .iter()
        .flat_map(|frame| frame.rolls().iter().copied())
        .collect();
    let roll = |i: usize| stream.get(i).copied().map(u32::from);

    let mut entries = Vec::with_capacity(frames.len().min(FRAME_COUNT));
    let mut cursor = 0usize;
    let mut total = 0u32;

    for frame in frames.iter().take(FRAME_COUNT) {
        let Some(kind) = frame.kind() else {
            entries.push(ScoreEntry::pending(frame.number()));
            break;
        };

        let points = match kind {
            FrameKind::Strike => roll(cursor + 1)
                .zip(roll(cursor + 2))
                .map(|(a, b)| u32::from(PIN_COUNT) + a + b),
            FrameKind::Spare => roll(cursor + 2).map(|bonus| u32::from(PIN_COUNT) + bonus),
            FrameKind::Open => roll(cursor).zip(roll(cursor + 1)).map(|(a, b)| a + b),
        };

        let Some(points) = points else {
            trace!(frame = frame.number(), kind = kind.as_str(), "bonus rolls not thrown yet");
            entries.push(ScoreEntry::pending(frame.number()));
            break;
        };

        total += points;
        cursor += kind.own_rolls();
        trace!(frame = frame.number(), kind = kind.as_str(), points, total, "frame scored");
        entries.push(ScoreEntry::scored(frame.number(), total));
    }

    entries
}

/// Reduce score entries to a single game total.
///
/// Entries are cumulative, so this is the last settled total (0 if none).
pub fn final_score(entries: &[ScoreEntry]) -> u32 {
    entries
        .iter()
        .rev()
        .find_map(|entry| entry.frame_score)
        .unwrap_or(0)
}

/// True when every frame of a full game has a settled score.
pub fn is_final(entries: &[ScoreEntry]) -> bool {
    entries.len() == FRAME_COUNT && entries.iter().all(ScoreEntry::is_scored)
}
