//! CAM16 color appearance model.
//!
//! HCT takes its hue and chroma from CAM16 evaluated under
//! [`ViewingConditions::standard`]: a D65 white point, an adapting luminance
//! of 200/π times the Y of L* 50, a mid-gray background and an average
//! surround.

use std::{f64::consts::PI, sync::OnceLock};

use crate::{
    Argb,
    utils::{WHITE_POINT_D65, matrix_multiply, signum, xyz_from_argb, y_from_lstar},
};

pub(crate) const XYZ_TO_CAM16RGB: [[f64; 3]; 3] = [
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
];

static STANDARD: OnceLock<ViewingConditions> = OnceLock::new();

/// Environment parameters that CAM16 perception depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewingConditions {
    /// Background luminance relative to the white point.
    pub n: f64,
    /// Achromatic response of the white point.
    pub aw: f64,
    /// Brightness induction factor.
    pub nbb: f64,
    /// Chromatic induction factor.
    pub ncb: f64,
    /// Exponential nonlinearity from the surround.
    pub c: f64,
    /// Chromatic induction from the surround.
    pub nc: f64,
    /// Per-channel discounting of the illuminant.
    pub rgb_d: [f64; 3],
    /// Luminance-level adaptation factor.
    pub fl: f64,
    /// `fl.powf(0.25)`.
    pub fl_root: f64,
    /// Base exponential nonlinearity.
    pub z: f64,
}

impl ViewingConditions {
    /// Builds viewing conditions.
    ///
    /// `surround` ranges from 0 (dark) through 1 (dim) to 2 (average).
    pub fn new(
        white_point: [f64; 3],
        adapting_luminance: f64,
        background_lstar: f64,
        surround: f64,
        discounting_illuminant: bool,
    ) -> Self {
        let background_lstar = background_lstar.max(0.1);
        let [r_w, g_w, b_w] = matrix_multiply(white_point, &XYZ_TO_CAM16RGB);

        let f = 0.8 + surround / 10.0;
        let c = if f >= 0.9 {
            lerp(0.59, 0.69, (f - 0.9) * 10.0)
        } else {
            lerp(0.525, 0.59, (f - 0.8) * 10.0)
        };
        let d = if discounting_illuminant {
            1.0
        } else {
            f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp())
        };
        let d = d.clamp(0.0, 1.0);
        let nc = f;
        let rgb_d = [
            d * (100.0 / r_w) + 1.0 - d,
            d * (100.0 / g_w) + 1.0 - d,
            d * (100.0 / b_w) + 1.0 - d,
        ];

        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let k4f = 1.0 - k4;
        let fl = k4 * adapting_luminance + 0.1 * k4f * k4f * (5.0 * adapting_luminance).cbrt();
        let n = y_from_lstar(background_lstar) / white_point[1];
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;

        let white = [r_w, g_w, b_w];
        let adapted = [0, 1, 2].map(|i| {
            let factor = (fl * rgb_d[i] * white[i] / 100.0).powf(0.42);
            400.0 * factor / (factor + 27.13)
        });
        let aw = (2.0 * adapted[0] + adapted[1] + 0.05 * adapted[2]) * nbb;

        Self {
            n,
            aw,
            nbb,
            ncb,
            c,
            nc,
            rgb_d,
            fl,
            fl_root: fl.powf(0.25),
            z,
        }
    }

    /// The conditions HCT is defined under.
    pub fn standard() -> &'static ViewingConditions {
        STANDARD.get_or_init(|| {
            ViewingConditions::new(
                WHITE_POINT_D65,
                200.0 / PI * y_from_lstar(50.0) / 100.0,
                50.0,
                2.0,
                false,
            )
        })
    }
}

fn lerp(start: f64, stop: f64, amount: f64) -> f64 {
    (1.0 - amount) * start + amount * stop
}

/// A color described by CAM16 appearance correlates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cam16 {
    /// Hue angle in degrees, `[0, 360)`.
    pub hue: f64,
    /// Colorfulness relative to a similarly lit white.
    pub chroma: f64,
    /// Lightness.
    pub j: f64,
    /// Brightness.
    pub q: f64,
    /// Absolute colorfulness.
    pub m: f64,
    /// Saturation.
    pub s: f64,
    /// CAM16-UCS J*.
    pub jstar: f64,
    /// CAM16-UCS a*.
    pub astar: f64,
    /// CAM16-UCS b*.
    pub bstar: f64,
}

impl Cam16 {
    /// Appearance of `argb` under the standard viewing conditions.
    pub fn from_argb(argb: Argb) -> Self {
        Self::from_xyz_in(xyz_from_argb(argb), ViewingConditions::standard())
    }

    /// Appearance of a D65 XYZ color under `vc`.
    pub fn from_xyz_in(xyz: [f64; 3], vc: &ViewingConditions) -> Self {
        let cone = matrix_multiply(xyz, &XYZ_TO_CAM16RGB);
        let [r_a, g_a, b_a] = [0, 1, 2].map(|i| {
            let discounted = vc.rgb_d[i] * cone[i];
            let factor = (vc.fl * discounted.abs() / 100.0).powf(0.42);
            signum(discounted) * 400.0 * factor / (factor + 27.13)
        });

        // Redness-greenness and yellowness-blueness.
        let a = (11.0 * r_a + -12.0 * g_a + b_a) / 11.0;
        let b = (r_a + g_a - 2.0 * b_a) / 9.0;
        let u = (20.0 * r_a + 20.0 * g_a + 21.0 * b_a) / 20.0;
        let p2 = (40.0 * r_a + 20.0 * g_a + b_a) / 20.0;

        let atan_degrees = b.atan2(a).to_degrees();
        let hue = if atan_degrees < 0.0 {
            atan_degrees + 360.0
        } else if atan_degrees >= 360.0 {
            atan_degrees - 360.0
        } else {
            atan_degrees
        };
        let hue_radians = hue.to_radians();

        let ac = p2 * vc.nbb;
        let j = 100.0 * (ac / vc.aw).powf(vc.c * vc.z);
        let q = 4.0 / vc.c * (j / 100.0).sqrt() * (vc.aw + 4.0) * vc.fl_root;

        let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
        let e_hue = 0.25 * ((hue_prime.to_radians() + 2.0).cos() + 3.8);
        let p1 = 50000.0 / 13.0 * e_hue * vc.nc * vc.ncb;
        let t = p1 * a.hypot(b) / (u + 0.305);
        let alpha = (1.64 - 0.29f64.powf(vc.n)).powf(0.73) * t.powf(0.9);
        let chroma = alpha * (j / 100.0).sqrt();
        let m = chroma * vc.fl_root;
        let s = 50.0 * ((alpha * vc.c) / (vc.aw + 4.0)).sqrt();

        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = 1.0 / 0.0228 * (0.0228 * m).ln_1p();

        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar: mstar * hue_radians.cos(),
            bstar: mstar * hue_radians.sin(),
        }
    }

    /// Perceptual distance in CAM16-UCS.
    pub fn distance(&self, other: &Cam16) -> f64 {
        let d_j = self.jstar - other.jstar;
        let d_a = self.astar - other.astar;
        let d_b = self.bstar - other.bstar;
        let d_e_prime = (d_j * d_j + d_a * d_a + d_b * d_b).sqrt();
        1.41 * d_e_prime.powf(0.63)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_standard_viewing_conditions() {
        let vc = ViewingConditions::standard();
        assert_close(vc.n, 0.184186518512, 1e-9);
        assert_close(vc.aw, 29.980997194447, 1e-9);
        assert_close(vc.nbb, 1.016919180445, 1e-9);
        assert_close(vc.c, 0.69, 1e-12);
        assert_close(vc.fl, 0.388481453780, 1e-9);
        assert_close(vc.z, 1.909169568483, 1e-9);
    }

    #[test]
    fn test_primaries() {
        let red = Cam16::from_argb(Argb(0xFFFF_0000));
        assert_close(red.hue, 27.408, 1e-3);
        assert_close(red.chroma, 113.358, 1e-3);

        let green = Cam16::from_argb(Argb(0xFF00_FF00));
        assert_close(green.hue, 142.140, 1e-3);
        assert_close(green.chroma, 108.410, 1e-3);

        let blue = Cam16::from_argb(Argb(0xFF00_00FF));
        assert_close(blue.hue, 282.788, 1e-3);
        assert_close(blue.chroma, 87.231, 1e-3);
    }

    #[test]
    fn test_black_is_achromatic() {
        let black = Cam16::from_argb(Argb::BLACK);
        assert_eq!(black.j, 0.0);
        assert_eq!(black.chroma, 0.0);
    }

    #[test]
    fn test_distance() {
        let red = Cam16::from_argb(Argb(0xFFFF_0000));
        let blue = Cam16::from_argb(Argb(0xFF00_00FF));
        assert_eq!(red.distance(&red), 0.0);
        assert!(red.distance(&blue) > 10.0);
        assert_eq!(red.distance(&blue), blue.distance(&red));
    }
}
