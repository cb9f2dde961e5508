use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Drag rectangle in canvas space (already multiplied by the view scale).
///
/// Corners are kept in drag order: `x1` may exceed `x2` and `y1` may exceed
/// `y2`. Whoever consumes the rectangle decides how to treat that.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SelectionRect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl SelectionRect {
    /// All-zero rectangle meaning "nothing selected".
    pub const UNSET: Self = Self {
        x1: 0.0,
        y1: 0.0,
        x2: 0.0,
        y2: 0.0,
    };

    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn at_point(x: f32, y: f32) -> Self {
        Self::new(x, y, x, y)
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }

    /// Signed extent, negative when the drag went leftwards.
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }
}

impl fmt::Display for SelectionRect {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{},{},{},{}",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseRectError {
    #[error("expected four comma-separated values `x1,y1,x2,y2`, found {0}")]
    WrongArity(usize),

    #[error("invalid coordinate `{0}`")]
    InvalidNumber(String),
}

impl FromStr for SelectionRect {
    type Err = ParseRectError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let parts = raw.split(',').map(str::trim).collect::<Vec<_>>();
        if parts.len() != 4 {
            return Err(ParseRectError::WrongArity(parts.len()));
        }
        let mut values = [0.0_f32; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f32>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| ParseRectError::InvalidNumber((*part).to_string()))?;
        }
        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }
}
