//! ConsoleRenderer: writes a scorecard to a terminal or any other writer.
//!
//! Styling is optional so the same output path works for pipes and files.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::scorecard::{LineKind, Scorecard};
use crate::style::{LineStyle, Rgb};

pub struct ConsoleRenderer<W: Write> {
    out: W,
    color: bool,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Print a heading line above a scorecard.
    pub fn draw_title(&mut self, title: &str) -> Result<()> {
        let style = LineStyle::new(Rgb::new(120, 180, 255)).bold();
        self.write_line(title, style)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn draw(&mut self, card: &Scorecard) -> Result<()> {
        for line in card.lines() {
            self.write_line(&line.text, style_for(line.kind))?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Write a blank separator line between scorecards.
    pub fn blank(&mut self) -> Result<()> {
        self.out.queue(Print("\n"))?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, text: &str, style: LineStyle) -> Result<()> {
        if self.color {
            apply_style_into(&mut self.out, style)?;
            self.out.queue(Print(text))?;
            self.out.queue(ResetColor)?;
            self.out.queue(SetAttribute(Attribute::Reset))?;
        } else {
            self.out.queue(Print(text))?;
        }
        self.out.queue(Print("\n"))?;
        Ok(())
    }
}

/// Encode a full scorecard into `out`.
///
/// This builds the same byte stream as [`ConsoleRenderer::draw`] without
/// touching stdout.
pub fn encode_into(card: &Scorecard, color: bool, out: &mut Vec<u8>) -> Result<()> {
    let mut renderer = ConsoleRenderer::new(out, color);
    renderer.draw(card)
}

fn style_for(kind: LineKind) -> LineStyle {
    match kind {
        LineKind::Separator => LineStyle::new(Rgb::new(80, 80, 90)),
        LineKind::Header => LineStyle::new(Rgb::new(200, 200, 200)).bold(),
        LineKind::Frame { pending: false } => LineStyle::default(),
        LineKind::Frame { pending: true } => LineStyle::new(Rgb::new(140, 140, 140)).dim(),
        LineKind::Total { complete: true } => LineStyle::new(Rgb::new(120, 220, 120)).bold(),
        LineKind::Total { complete: false } => LineStyle::new(Rgb::new(230, 200, 90)).bold(),
    }
}

fn apply_style_into<W: Write>(out: &mut W, style: LineStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
