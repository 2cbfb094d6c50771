//! Arena geometry and axis-aligned rectangles
//!
//! Screen-space coordinates: origin at the top-left corner, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{MIN_ARENA_HEIGHT, MIN_ARENA_WIDTH};

/// The fixed playing field, sized from the viewport once per session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    /// Create an arena from viewport dimensions (clamped to the minimum playable size)
    pub fn new(width: f32, height: f32) -> Self {
        let clamped_w = if width.is_finite() { width.max(MIN_ARENA_WIDTH) } else { MIN_ARENA_WIDTH };
        let clamped_h = if height.is_finite() { height.max(MIN_ARENA_HEIGHT) } else { MIN_ARENA_HEIGHT };
        if clamped_w != width || clamped_h != height {
            log::warn!(
                "Viewport {}x{} below minimum, using {}x{}",
                width,
                height,
                clamped_w,
                clamped_h
            );
        }
        Self {
            width: clamped_w,
            height: clamped_h,
        }
    }

    /// Center of the arena
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a circle lies fully inside the arena (edges inclusive)
    pub fn contains_circle(&self, center: Vec2, radius: f32) -> bool {
        center.x >= radius
            && center.x <= self.width - radius
            && center.y >= radius
            && center.y <= self.height - radius
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Open-interval containment: a point on any edge is outside
    #[inline]
    pub fn contains_open(&self, point: Vec2) -> bool {
        point.x > self.x && point.x < self.right() && point.y > self.y && point.y < self.bottom()
    }
}
