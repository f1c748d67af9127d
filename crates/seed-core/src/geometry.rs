//! Clip-space geometry and the pixel/clip viewport transform.
//!
//! Layout results live in normalized clip coordinates: the viewport interior
//! spans `[-1, 1]` on both axes with `y` pointing up. Margins and minimum sizes
//! are authored in integer pixels and converted with the viewport scale
//! `(2 / width, 2 / height)`.

use glam::Vec2;

use crate::errors::ViewportError;
use crate::types::{Direction, Margins, PixelSize};

/// Axis-aligned rectangle in clip coordinates.
///
/// `(x, y)` is the min corner (left, bottom).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    /// The full viewport interior.
    pub const CLIP: Rect = Rect::new(-1.0, -1.0, 2.0, 2.0);

    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rect from min corner and size vectors.
    pub fn from_vecs(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    /// Right edge (x + w).
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Top edge (y + h).
    pub fn top(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    /// Check if a point is inside the rect (edges inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.top()
    }

    /// Expand by margins converted with `scale`.
    pub fn outset(&self, margins: Margins, scale: Vec2) -> Rect {
        Rect::new(
            self.x - scale.x * margins.left as f32,
            self.y - scale.y * margins.bottom as f32,
            self.w + scale.x * margins.horizontal() as f32,
            self.h + scale.y * margins.vertical() as f32,
        )
    }

    /// Shrink by margins converted with `scale`. Sizes clamp at zero.
    pub fn inset(&self, margins: Margins, scale: Vec2) -> Rect {
        Rect::new(
            self.x + scale.x * margins.left as f32,
            self.y + scale.y * margins.bottom as f32,
            (self.w - scale.x * margins.horizontal() as f32).max(0.0),
            (self.h - scale.y * margins.vertical() as f32).max(0.0),
        )
    }

    /// Min coordinate along `axis`.
    pub fn origin(&self, axis: Direction) -> f32 {
        match axis {
            Direction::Row => self.x,
            Direction::Col => self.y,
        }
    }

    /// Length along `axis`.
    pub fn extent(&self, axis: Direction) -> f32 {
        match axis {
            Direction::Row => self.w,
            Direction::Col => self.h,
        }
    }

    /// Overwrite the origin and length along `axis`.
    pub fn set_span(&mut self, axis: Direction, origin: f32, extent: f32) {
        match axis {
            Direction::Row => {
                self.x = origin;
                self.w = extent;
            }
            Direction::Col => {
                self.y = origin;
                self.h = extent;
            }
        }
    }
}

impl Direction {
    /// Component of `v` along this axis.
    pub fn pick(self, v: Vec2) -> f32 {
        match self {
            Direction::Row => v.x,
            Direction::Col => v.y,
        }
    }

    /// Build a vector from main- and cross-axis components.
    pub fn compose(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Direction::Row => Vec2::new(main, cross),
            Direction::Col => Vec2::new(cross, main),
        }
    }
}

/// Pixel size of the render target and its pixel-to-clip scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    size: PixelSize,
    scale: Vec2,
}

impl Viewport {
    /// Create a viewport. Both dimensions must be positive.
    pub fn new(size: PixelSize) -> Result<Self, ViewportError> {
        if size.is_empty() {
            return Err(ViewportError::Empty {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self {
            size,
            scale: Vec2::new(2.0 / size.width as f32, 2.0 / size.height as f32),
        })
    }

    pub fn size(&self) -> PixelSize {
        self.size
    }

    /// Clip units per pixel, `(sx, sy)`.
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Convert a pixel size to clip units.
    pub fn to_clip(&self, size: PixelSize) -> Vec2 {
        Vec2::new(size.width as f32, size.height as f32) * self.scale
    }

    /// Total horizontal and vertical margin in clip units.
    pub fn margin_extent(&self, margins: Margins) -> Vec2 {
        Vec2::new(margins.horizontal() as f32, margins.vertical() as f32) * self.scale
    }

    pub fn pad_outward(&self, rect: Rect, margins: Margins) -> Rect {
        rect.outset(margins, self.scale)
    }

    pub fn pad_inward(&self, rect: Rect, margins: Margins) -> Rect {
        rect.inset(margins, self.scale)
    }

    /// Map a top-left-origin pixel position (window input) to clip space.
    pub fn pixel_to_clip(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x * self.scale.x - 1.0, 1.0 - point.y * self.scale.y)
    }

    /// Map a clip-space rect to a top-left-origin pixel rect.
    pub fn clip_to_pixels(&self, rect: Rect) -> Rect {
        Rect::new(
            (rect.x + 1.0) / self.scale.x,
            (1.0 - rect.top()) / self.scale.y,
            rect.w / self.scale.x,
            rect.h / self.scale.y,
        )
    }
}
