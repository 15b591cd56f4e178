//! Color and screen-space geometry types.

use bytemuck::{Pod, Zeroable};
use glam::Vec4;
use serde::{Deserialize, Serialize};

/// RGBA color with f32 components in the 0.0-1.0 range.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[repr(C)]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
    /// Alpha component (1.0 = opaque)
    pub a: f32,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque red
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque green
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    /// Opaque blue
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a color from RGBA components.
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    #[must_use]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with a replaced alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<Vec4> for Color {
    #[inline]
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Color> for Vec4 {
    #[inline]
    fn from(c: Color) -> Self {
        Self::new(c.r, c.g, c.b, c.a)
    }
}

/// Screen-space rectangle in pixel coordinates.
///
/// The origin is the top-left corner of the screen; `top < bottom` for a
/// non-empty rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[repr(C)]
pub struct Rect {
    /// Left edge in pixels
    pub left: f32,
    /// Top edge in pixels
    pub top: f32,
    /// Right edge in pixels
    pub right: f32,
    /// Bottom edge in pixels
    pub bottom: f32,
}

impl Rect {
    /// Create a rectangle from its four edges.
    #[inline]
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from a top-left position and a size.
    #[inline]
    #[must_use]
    pub const fn from_pos_size(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + w,
            bottom: y + h,
        }
    }

    /// Width of the rectangle in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height of the rectangle in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn color_from_rgb_is_opaque() {
        let c = Color::from_rgb(0.2, 0.4, 0.6);
        assert_relative_eq!(c.a, 1.0);
        assert_relative_eq!(c.with_alpha(0.5).a, 0.5);
    }

    #[test]
    fn color_vec4_round_trip() {
        let c = Color::new(0.1, 0.2, 0.3, 0.4);
        let v: Vec4 = c.into();
        assert_eq!(Color::from(v), c);
    }

    #[test]
    fn rect_from_pos_size() {
        let r = Rect::from_pos_size(10.0, 20.0, 30.0, 40.0);
        assert_relative_eq!(r.right, 40.0);
        assert_relative_eq!(r.bottom, 60.0);
        assert_relative_eq!(r.width(), 30.0);
        assert_relative_eq!(r.height(), 40.0);
    }
}
