//! Core value types for box layout.

use std::fmt;

use slotmap::Key;

slotmap::new_key_type! {
    /// Handle to a box record in a slot map.
    ///
    /// Keys carry a slot version, so a handle to a removed box never resolves
    /// to a box later stored in the same slot.
    pub struct Entity;
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.data())
    }
}

/// Axis along which a box arranges and grows its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Horizontal main axis (x, width)
    #[default]
    Row,
    /// Vertical main axis (y, height)
    Col,
}

impl Direction {
    /// The perpendicular direction.
    pub const fn cross(self) -> Self {
        match self {
            Direction::Row => Direction::Col,
            Direction::Col => Direction::Row,
        }
    }
}

/// Margins on all four sides, in integer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    pub left: u32,
    pub bottom: u32,
    pub right: u32,
    pub top: u32,
}

impl Margins {
    pub const ZERO: Margins = Margins::uniform(0);

    pub const fn new(left: u32, bottom: u32, right: u32, top: u32) -> Self {
        Self { left, bottom, right, top }
    }

    /// Same margin on every side.
    pub const fn uniform(value: u32) -> Self {
        Self {
            left: value,
            bottom: value,
            right: value,
            top: value,
        }
    }

    /// Create symmetric margins.
    pub const fn symmetric(horizontal: u32, vertical: u32) -> Self {
        Self {
            left: horizontal,
            bottom: vertical,
            right: horizontal,
            top: vertical,
        }
    }

    /// Total horizontal margin. Widened so no pair of sides overflows.
    pub const fn horizontal(&self) -> u64 {
        self.left as u64 + self.right as u64
    }

    /// Total vertical margin.
    pub const fn vertical(&self) -> u64 {
        self.bottom as u64 + self.top as u64
    }
}

/// A width/height pair in integer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub const ZERO: PixelSize = PixelSize::new(0, 0);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<(u32, u32)> for PixelSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}
