//! Color temperature and analogous colors.
//!
//! Warm colors sit near orange, cool colors near blue. Walking the hue wheel
//! in equal temperature steps gives analogous colors that feel evenly spaced,
//! which a fixed hue rotation does not.

use crate::{
    Hct,
    utils::{lab_from_argb, sanitize_degrees},
};

/// Temperatures of every whole hue at one chroma and tone.
#[derive(Debug, Clone)]
pub struct TemperatureCache {
    input: Hct,
    hcts_by_hue: Vec<Hct>,
    coldest: f64,
    warmest: f64,
}

impl TemperatureCache {
    /// Samples hues 0 to 360 at the chroma and tone of `input`.
    pub fn new(input: Hct) -> Self {
        let hcts_by_hue: Vec<Hct> = (0..=360)
            .map(|hue| Hct::from(hue as f64, input.chroma(), input.tone()))
            .collect();
        let (coldest, warmest) = hcts_by_hue
            .iter()
            .chain(std::iter::once(&input))
            .map(|hct| raw_temperature(*hct))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| {
                (lo.min(t), hi.max(t))
            });
        Self {
            input,
            hcts_by_hue,
            coldest,
            warmest,
        }
    }

    /// Temperature of `hct` scaled so the coldest sampled hue is 0 and the
    /// warmest is 1.
    pub fn relative_temperature(&self, hct: Hct) -> f64 {
        let range = self.warmest - self.coldest;
        if range == 0.0 {
            return 0.5;
        }
        (raw_temperature(hct) - self.coldest) / range
    }

    /// `count` analogous colors centered on the input, picked from the hue
    /// wheel split into `divisions` equal temperature steps.
    ///
    /// The input is at index `(count - 1) / 2`.
    pub fn analogous(&self, count: usize, divisions: usize) -> Vec<Hct> {
        let start_hue = (self.input.hue().round() as usize) % 360;
        let start = self.hcts_by_hue[start_hue];
        let at = |offset: usize| self.hcts_by_hue[(start_hue + offset) % 360];

        let mut last = self.relative_temperature(start);
        let mut absolute_total = 0.0;
        for offset in 0..360 {
            let temp = self.relative_temperature(at(offset));
            absolute_total += (temp - last).abs();
            last = temp;
        }

        let step = absolute_total / divisions as f64;
        let mut all = vec![start];
        let mut total = 0.0;
        let mut last = self.relative_temperature(start);
        let mut offset = 1;
        while all.len() < divisions {
            let hct = at(offset);
            let temp = self.relative_temperature(hct);
            total += (temp - last).abs();

            let mut satisfied = total >= all.len() as f64 * step;
            let mut index_addend = 1;
            while satisfied && all.len() < divisions {
                all.push(hct);
                satisfied = total >= (all.len() + index_addend) as f64 * step;
                index_addend += 1;
            }
            last = temp;
            offset += 1;
            if offset > 360 {
                all.resize(divisions, hct);
                break;
            }
        }

        let before = count.saturating_sub(1) / 2;
        let after = count.saturating_sub(before + 1);
        let len = all.len();
        let mut answers: Vec<Hct> = (1..=before)
            .rev()
            .map(|i| all[(len - i % len) % len])
            .collect();
        answers.push(self.input);
        answers.extend((1..=after).map(|i| all[i % len]));
        answers
    }
}

/// Unscaled warmth of a color: chroma in L*a*b* weighted by how close its
/// hue is to orange.
pub fn raw_temperature(hct: Hct) -> f64 {
    let [_, a, b] = lab_from_argb(hct.to_argb());
    let hue = sanitize_degrees(b.atan2(a).to_degrees());
    let chroma = a.hypot(b);
    -0.5 + 0.02 * chroma.powf(1.07) * sanitize_degrees(hue - 50.0).to_radians().cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Argb;

    #[test]
    fn test_orange_is_warmer_than_blue() {
        let orange = Hct::from_argb(Argb(0xFFFF_8000));
        let blue = Hct::from_argb(Argb(0xFF00_40FF));
        assert!(raw_temperature(orange) > raw_temperature(blue));
    }

    #[test]
    fn test_relative_temperature_range() {
        let cache = TemperatureCache::new(Hct::from_argb(Argb(0xFF67_50A4)));
        for hue in (0..360).step_by(15) {
            let relative = cache.relative_temperature(Hct::from(hue as f64, 40.0, 40.0));
            assert!(relative.is_finite());
        }
        let gray = TemperatureCache::new(Hct::from_argb(Argb(0xFF80_8080)));
        assert!((0.0..=1.0).contains(&gray.relative_temperature(gray.input)));
    }

    #[test]
    fn test_analogous_centers_on_input() {
        let input = Hct::from_argb(Argb(0xFF67_50A4));
        let analogous = TemperatureCache::new(input).analogous(3, 6);
        assert_eq!(analogous.len(), 3);
        assert_eq!(analogous[1], input);
        let tertiary = analogous[2];
        assert!((tertiary.hue() - 346.94).abs() < 0.5, "{}", tertiary.hue());
        assert_eq!(tertiary.to_argb(), Argb(0xFF92_4274));
    }
}
