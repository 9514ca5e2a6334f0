//! Material 3 type scale.
//!
//! Fifteen static styles, independent of the key color.

use serde::Serialize;

use crate::Dp;

/// Numeric font weight, 100 to 900.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// 400.
    pub const REGULAR: FontWeight = FontWeight(400);
    /// 500.
    pub const MEDIUM: FontWeight = FontWeight(500);
    /// 700.
    pub const BOLD: FontWeight = FontWeight(700);
}

/// Text style values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font size in density-independent pixels (dp).
    pub font_size: Dp,
    /// Line height in density-independent pixels (dp).
    pub line_height: Dp,
    /// Tracking in dp; negative tightens.
    pub letter_spacing: Dp,
    /// Weight.
    pub font_weight: FontWeight,
}

impl TextStyle {
    const fn new(font_size: f64, line_height: f64, letter_spacing: f64, weight: u16) -> Self {
        Self {
            font_size: Dp(font_size),
            line_height: Dp(line_height),
            letter_spacing: Dp(letter_spacing),
            font_weight: FontWeight(weight),
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        MaterialTypography::DEFAULT.body_large
    }
}

/// Names of the fifteen type scale entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeScale {
    /// Large display text.
    DisplayLarge,
    /// Medium display text.
    DisplayMedium,
    /// Small display text.
    DisplaySmall,
    /// Large headline text.
    HeadlineLarge,
    /// Medium headline text.
    HeadlineMedium,
    /// Small headline text.
    HeadlineSmall,
    /// Large title text.
    TitleLarge,
    /// Medium title text.
    TitleMedium,
    /// Small title text.
    TitleSmall,
    /// Large body text.
    BodyLarge,
    /// Medium body text.
    BodyMedium,
    /// Small body text.
    BodySmall,
    /// Large label text.
    LabelLarge,
    /// Medium label text.
    LabelMedium,
    /// Small label text.
    LabelSmall,
}

impl TypeScale {
    /// Largest first.
    pub const ALL: [TypeScale; 15] = [
        TypeScale::DisplayLarge,
        TypeScale::DisplayMedium,
        TypeScale::DisplaySmall,
        TypeScale::HeadlineLarge,
        TypeScale::HeadlineMedium,
        TypeScale::HeadlineSmall,
        TypeScale::TitleLarge,
        TypeScale::TitleMedium,
        TypeScale::TitleSmall,
        TypeScale::BodyLarge,
        TypeScale::BodyMedium,
        TypeScale::BodySmall,
        TypeScale::LabelLarge,
        TypeScale::LabelMedium,
        TypeScale::LabelSmall,
    ];

    /// Token name, e.g. `titleMedium`.
    pub const fn name(self) -> &'static str {
        match self {
            TypeScale::DisplayLarge => "displayLarge",
            TypeScale::DisplayMedium => "displayMedium",
            TypeScale::DisplaySmall => "displaySmall",
            TypeScale::HeadlineLarge => "headlineLarge",
            TypeScale::HeadlineMedium => "headlineMedium",
            TypeScale::HeadlineSmall => "headlineSmall",
            TypeScale::TitleLarge => "titleLarge",
            TypeScale::TitleMedium => "titleMedium",
            TypeScale::TitleSmall => "titleSmall",
            TypeScale::BodyLarge => "bodyLarge",
            TypeScale::BodyMedium => "bodyMedium",
            TypeScale::BodySmall => "bodySmall",
            TypeScale::LabelLarge => "labelLarge",
            TypeScale::LabelMedium => "labelMedium",
            TypeScale::LabelSmall => "labelSmall",
        }
    }

    /// Whether the style belongs to the heading family (display, headline
    /// and title groups).
    pub const fn is_heading(self) -> bool {
        (self as usize) < 9
    }

    /// Size key within its group: `large`, `medium` or `small`.
    pub const fn size_key(self) -> &'static str {
        match self as usize % 3 {
            0 => "large",
            1 => "medium",
            _ => "small",
        }
    }
}

/// Material 3 typography scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialTypography {
    /// Large display text.
    pub display_large: TextStyle,
    /// Medium display text.
    pub display_medium: TextStyle,
    /// Small display text.
    pub display_small: TextStyle,
    /// Large headline text.
    pub headline_large: TextStyle,
    /// Medium headline text.
    pub headline_medium: TextStyle,
    /// Small headline text.
    pub headline_small: TextStyle,
    /// Large title text.
    pub title_large: TextStyle,
    /// Medium title text.
    pub title_medium: TextStyle,
    /// Small title text.
    pub title_small: TextStyle,
    /// Large body text.
    pub body_large: TextStyle,
    /// Medium body text.
    pub body_medium: TextStyle,
    /// Small body text.
    pub body_small: TextStyle,
    /// Large label text.
    pub label_large: TextStyle,
    /// Medium label text.
    pub label_medium: TextStyle,
    /// Small label text.
    pub label_small: TextStyle,
}

impl MaterialTypography {
    /// The baseline Material 3 scale.
    pub const DEFAULT: MaterialTypography = MaterialTypography {
        display_large: TextStyle::new(57.0, 64.0, -0.25, 400),
        display_medium: TextStyle::new(45.0, 52.0, 0.0, 400),
        display_small: TextStyle::new(36.0, 44.0, 0.0, 400),
        headline_large: TextStyle::new(32.0, 40.0, 0.0, 400),
        headline_medium: TextStyle::new(28.0, 36.0, 0.0, 400),
        headline_small: TextStyle::new(24.0, 32.0, 0.0, 400),
        title_large: TextStyle::new(22.0, 28.0, 0.0, 400),
        title_medium: TextStyle::new(16.0, 24.0, 0.15, 500),
        title_small: TextStyle::new(14.0, 20.0, 0.1, 500),
        body_large: TextStyle::new(16.0, 24.0, 0.5, 400),
        body_medium: TextStyle::new(14.0, 20.0, 0.25, 400),
        body_small: TextStyle::new(12.0, 16.0, 0.4, 400),
        label_large: TextStyle::new(14.0, 20.0, 0.1, 500),
        label_medium: TextStyle::new(12.0, 16.0, 0.5, 500),
        label_small: TextStyle::new(11.0, 16.0, 0.5, 500),
    };

    /// The style for `scale`.
    pub fn get(&self, scale: TypeScale) -> TextStyle {
        match scale {
            TypeScale::DisplayLarge => self.display_large,
            TypeScale::DisplayMedium => self.display_medium,
            TypeScale::DisplaySmall => self.display_small,
            TypeScale::HeadlineLarge => self.headline_large,
            TypeScale::HeadlineMedium => self.headline_medium,
            TypeScale::HeadlineSmall => self.headline_small,
            TypeScale::TitleLarge => self.title_large,
            TypeScale::TitleMedium => self.title_medium,
            TypeScale::TitleSmall => self.title_small,
            TypeScale::BodyLarge => self.body_large,
            TypeScale::BodyMedium => self.body_medium,
            TypeScale::BodySmall => self.body_small,
            TypeScale::LabelLarge => self.label_large,
            TypeScale::LabelMedium => self.label_medium,
            TypeScale::LabelSmall => self.label_small,
        }
    }
}

impl Default for MaterialTypography {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_shrinks_within_groups() {
        let typography = MaterialTypography::default();
        for group in TypeScale::ALL.chunks(3) {
            let sizes: Vec<_> = group.iter().map(|&s| typography.get(s).font_size).collect();
            assert!(sizes[0] > sizes[1] && sizes[1] > sizes[2], "{group:?}");
        }
    }

    #[test]
    fn test_line_height_covers_font_size() {
        let typography = MaterialTypography::default();
        for scale in TypeScale::ALL {
            let style = typography.get(scale);
            assert!(style.line_height >= style.font_size, "{scale:?}");
        }
    }

    #[test]
    fn test_size_keys() {
        assert_eq!(TypeScale::DisplayLarge.size_key(), "large");
        assert_eq!(TypeScale::TitleMedium.size_key(), "medium");
        assert_eq!(TypeScale::LabelSmall.size_key(), "small");
        assert_eq!(TextStyle::default().font_size, Dp(16.0));
    }
}
