//! Color and attribute types for scorecard lines.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-line styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    pub fg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bold: false,
            dim: false,
        }
    }
}

impl LineStyle {
    pub const fn new(fg: Rgb) -> Self {
        Self {
            fg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}
