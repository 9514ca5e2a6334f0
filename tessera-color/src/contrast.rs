//! WCAG contrast ratios between tones and colors.

use crate::{
    Argb,
    utils::{xyz_from_argb, y_from_lstar},
};

/// Contrast ratio of two relative luminances, `[1, 21]`.
pub fn ratio_of_ys(y1: f64, y2: f64) -> f64 {
    let lighter = y1.max(y2);
    let darker = y1.min(y2);
    (lighter + 5.0) / (darker + 5.0)
}

/// Contrast ratio of two tones.
pub fn ratio_of_tones(tone_a: f64, tone_b: f64) -> f64 {
    let tone_a = tone_a.clamp(0.0, 100.0);
    let tone_b = tone_b.clamp(0.0, 100.0);
    ratio_of_ys(y_from_lstar(tone_a), y_from_lstar(tone_b))
}

/// Contrast ratio of two colors.
pub fn ratio_of_argb(a: Argb, b: Argb) -> f64 {
    ratio_of_ys(xyz_from_argb(a)[1], xyz_from_argb(b)[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_on_white_is_maximal() {
        assert!((ratio_of_argb(Argb::BLACK, Argb::WHITE) - 21.0).abs() < 1e-6);
        assert!((ratio_of_tones(0.0, 100.0) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_is_symmetric() {
        assert_eq!(ratio_of_tones(40.0, 100.0), ratio_of_tones(100.0, 40.0));
        assert_eq!(ratio_of_tones(50.0, 50.0), 1.0);
    }

    #[test]
    fn test_material_on_color_tones() {
        // Tone pairs used by role/on-role slots.
        assert!(ratio_of_tones(40.0, 100.0) >= 4.5);
        assert!(ratio_of_tones(80.0, 20.0) >= 4.5);
        assert!(ratio_of_tones(90.0, 10.0) >= 7.0);
    }
}
