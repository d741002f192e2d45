//! Block geometry
//!
//! A block is an axis-aligned rectangle: `x` is its horizontal center, `y` its
//! bottom edge. Y grows upward, so a block's top is `y + height`.

use serde::{Deserialize, Serialize};

use crate::consts::COLOR_CYCLE;

/// An immutable block value (placed or airborne)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Horizontal center
    pub x: f32,
    /// Bottom edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// 0 is the foundation
    pub level: u32,
}

impl Block {
    pub fn new(x: f32, y: f32, width: f32, height: f32, level: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            level,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Palette slot for renderers
    #[inline]
    pub fn color_index(&self) -> u32 {
        self.level % COLOR_CYCLE
    }

    /// True when nothing survived trimming
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0
    }

    /// Same block moved to a new center
    pub fn with_x(self, x: f32) -> Self {
        Self { x, ..self }
    }
}
