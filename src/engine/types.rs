//! Geometry values exchanged with the engine

use serde::Deserialize;

/// A frame in the root view's coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized rect at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Shrink the rect by the given insets
    pub fn inset_by(&self, insets: Insets) -> Rect {
        Rect::new(
            self.x + insets.leading,
            self.y + insets.top,
            self.width - insets.leading - insets.trailing,
            self.height - insets.top - insets.bottom,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Distances from each edge of a view to its safe area
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub top: f64,
    pub leading: f64,
    pub bottom: f64,
    pub trailing: f64,
}

impl Insets {
    pub fn new(top: f64, leading: f64, bottom: f64, trailing: f64) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}
