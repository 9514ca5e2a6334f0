use bytemuck::{Pod, Zeroable};

use crate::Argb;

/// A color in the linear sRGB color space with an alpha component.
///
/// Values are stored as `f32`s, typically in the range `[0.0, 1.0]`. Scheme
/// colors are produced as [`Argb`]; convert to `Color` when blending overlays
/// or handing colors to a GPU.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    /// Linear red.
    pub r: f32,
    /// Linear green.
    pub g: f32,
    /// Linear blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `Color` from three `f32` values (red, green, blue).
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Draws `overlay` over `self` with `overlay_alpha` opacity.
    ///
    /// `overlay_alpha` is clamped to `[0.0, 1.0]`.
    pub fn blend_over(self, overlay: Color, overlay_alpha: f32) -> Color {
        let alpha = overlay_alpha.clamp(0.0, 1.0);
        Color::new(
            overlay.r * alpha + self.r * (1.0 - alpha),
            overlay.g * alpha + self.g * (1.0 - alpha),
            overlay.b * alpha + self.b * (1.0 - alpha),
            overlay.a * alpha + self.a * (1.0 - alpha),
        )
    }

    /// Converts the color to an array of `[f32; 4]`.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Views a run of colors as raw bytes, four native-endian `f32`s per
    /// color, ready for a GPU buffer upload.
    pub fn slice_as_bytes(colors: &[Color]) -> &[u8] {
        bytemuck::cast_slice(colors)
    }

    /// Encodes the color as 8-bit sRGB, rounding each channel.
    pub fn to_argb(self) -> Argb {
        let encode = |v: f32| (linear_to_srgb_channel(v) * 255.0 + 0.5) as u32;
        let a = (self.a.clamp(0.0, 1.0) * 255.0 + 0.5) as u32;
        Argb(a << 24 | encode(self.r) << 16 | encode(self.g) << 8 | encode(self.b))
    }
}

/// The default color is fully transparent.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<Argb> for Color {
    fn from(argb: Argb) -> Self {
        let decode = |v: u8| srgb_to_linear_channel(v as f32 / 255.0);
        Color::new(
            decode(argb.red()),
            decode(argb.green()),
            decode(argb.blue()),
            argb.alpha() as f32 / 255.0,
        )
    }
}

impl From<Color> for Argb {
    fn from(color: Color) -> Self {
        color.to_argb()
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

fn linear_to_srgb_channel(v: f32) -> f32 {
    let v = v.clamp(0.0, 1.0);
    if v <= 0.003_130_8 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

fn srgb_to_linear_channel(v: f32) -> f32 {
    let v = v.clamp(0.0, 1.0);
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_round_trip() {
        for argb in [Argb::BLACK, Argb::WHITE, Argb(0xFF67_50A4), Argb(0x80B3_261E)] {
            assert_eq!(Color::from(argb).to_argb(), argb);
        }
    }

    #[test]
    fn test_blend_over_extremes() {
        let base = Color::BLACK;
        let overlay = Color::WHITE;
        assert_eq!(base.blend_over(overlay, 0.0), base);
        assert_eq!(base.blend_over(overlay, 1.0), overlay);
        assert_eq!(base.blend_over(overlay, 2.0), overlay);
        let half = base.blend_over(overlay, 0.5);
        assert_eq!(half, Color::new(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn test_slice_as_bytes() {
        let colors = [Color::new(0.25, 0.5, 0.75, 1.0), Color::WHITE];
        let bytes = Color::slice_as_bytes(&colors);
        assert_eq!(bytes.len(), 2 * std::mem::size_of::<Color>());
        assert_eq!(bytes.len(), 32);
        assert_eq!(&bytes[4..8], &0.5f32.to_ne_bytes());
        let back: &[Color] = bytemuck::cast_slice(bytes);
        assert_eq!(back, &colors);
        assert!(Color::slice_as_bytes(&[]).is_empty());
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(Color::WHITE.with_alpha(0.25).a, 0.25);
    }
}
