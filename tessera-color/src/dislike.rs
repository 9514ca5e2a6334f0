//! Dark yellow-greens read as bile or mold; lighten them.

use crate::Hct;

/// Whether `hct` falls in the disliked dark yellow-green region.
pub fn is_disliked(hct: Hct) -> bool {
    let hue_passes = (90.0..=111.0).contains(&hct.hue().round());
    let chroma_passes = hct.chroma().round() > 16.0;
    let tone_passes = hct.tone().round() < 65.0;
    hue_passes && chroma_passes && tone_passes
}

/// Lifts a disliked color to tone 70, keeping hue and chroma.
pub fn fix_if_disliked(hct: Hct) -> Hct {
    if is_disliked(hct) {
        Hct::from(hct.hue(), hct.chroma(), 70.0)
    } else {
        hct
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Argb;

    #[test]
    fn test_dark_yellow_green_is_lifted() {
        let bile = Hct::from(100.0, 40.0, 40.0);
        assert!(is_disliked(bile));
        let fixed = fix_if_disliked(bile);
        assert!(!is_disliked(fixed));
        assert!((fixed.tone() - 70.0).abs() < 0.5);
        assert_eq!(fixed.to_argb(), Argb(0xFFBE_AB4E));
    }

    #[test]
    fn test_other_colors_are_kept() {
        for argb in [0xFF67_50A4u32, 0xFFB3_261E, 0xFF38_6A20] {
            let hct = Hct::from_argb(Argb(argb));
            assert_eq!(fix_if_disliked(hct), hct);
        }
        // Light or muted yellow-greens pass.
        assert!(!is_disliked(Hct::from(100.0, 40.0, 80.0)));
        assert!(!is_disliked(Hct::from(100.0, 10.0, 40.0)));
    }
}
