//! Scorecard: maps frames and score entries into printable lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt;

use crate::core::{final_score, is_final, Frame};
use crate::marks::frame_marks;
use crate::types::ScoreEntry;

const FRAME_COL: usize = 7;
const MARKS_COL: usize = 9;
const SCORE_COL: usize = 10;
const LABEL_COL: usize = FRAME_COL + 1 + MARKS_COL;
const INNER_WIDTH: usize = LABEL_COL + 1 + SCORE_COL;

/// What a scorecard line shows, used by renderers to pick a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Separator,
    Header,
    Frame { pending: bool },
    Total { complete: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorecardLine {
    pub kind: LineKind,
    pub text: String,
}

/// A rendered scorecard table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scorecard {
    lines: Vec<ScorecardLine>,
    total: u32,
    complete: bool,
}

impl Scorecard {
    /// Build the table for `entries`, looking up roll marks in `frames`.
    ///
    /// One row is emitted per score entry; frames past the first unsettled one
    /// do not appear.
    pub fn build(frames: &[Frame], entries: &[ScoreEntry]) -> Self {
        let total = final_score(entries);
        let complete = is_final(entries);
        let mut lines = Vec::with_capacity(entries.len() * 2 + 6);

        lines.push(separator());
        lines.push(ScorecardLine {
            kind: LineKind::Header,
            text: row3("frame", "rolls", "score"),
        });
        lines.push(separator());

        for entry in entries {
            let marks = frames
                .iter()
                .find(|f| f.number() == entry.frame_number)
                .map(frame_marks)
                .unwrap_or_default();
            let score = entry
                .frame_score
                .map(|s| s.to_string())
                .unwrap_or_default();

            lines.push(ScorecardLine {
                kind: LineKind::Frame {
                    pending: entry.frame_score.is_none(),
                },
                text: row3(&entry.frame_number.to_string(), &marks, &score),
            });
        }

        lines.push(separator());
        lines.push(ScorecardLine {
            kind: LineKind::Total { complete },
            text: format!(
                "|{}|{}|",
                center_text("Final Score", LABEL_COL),
                center_text(&total.to_string(), SCORE_COL)
            ),
        });
        lines.push(separator());

        Self {
            lines,
            total,
            complete,
        }
    }

    pub fn lines(&self) -> &[ScorecardLine] {
        &self.lines
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// True when all ten frames are settled.
    pub fn complete(&self) -> bool {
        self.complete
    }
}

impl fmt::Display for Scorecard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(&line.text)?;
        }
        Ok(())
    }
}

fn separator() -> ScorecardLine {
    ScorecardLine {
        kind: LineKind::Separator,
        text: format!("|{}|", "-".repeat(INNER_WIDTH)),
    }
}

fn row3(frame: &str, marks: &str, score: &str) -> String {
    format!(
        "|{}|{}|{}|",
        center_text(frame, FRAME_COL),
        center_text(marks, MARKS_COL),
        center_text(score, SCORE_COL)
    )
}

/// Center `text` in a field of `width` columns.
///
/// Odd padding puts the extra space on the right. Text wider than the field is
/// returned unpadded.
pub fn center_text(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let pad = width.saturating_sub(len);
    let left = pad / 2;
    let right = pad - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
