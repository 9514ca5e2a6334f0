//! Color-space helpers shared by CAM16, HCT and contrast math.
//!
//! Linear RGB components are expressed in `[0, 100]`, XYZ uses a D65 white
//! point with Y in `[0, 100]`, and L* is CIE lightness in `[0, 100]`.

use crate::Argb;

pub(crate) const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.41233895, 0.35762064, 0.18051042],
    [0.2126, 0.7152, 0.0722],
    [0.01932141, 0.11916382, 0.95034478],
];

pub(crate) const WHITE_POINT_D65: [f64; 3] = [95.047, 100.0, 108.883];

/// Converts an 8-bit sRGB component into linear RGB in `[0, 100]`.
pub fn linearized(component: u8) -> f64 {
    linearized_f64(component as f64)
}

/// Same as [`linearized`] for a fractional component in `[0, 255]`.
pub(crate) fn linearized_f64(component: f64) -> f64 {
    let normalized = component / 255.0;
    if normalized <= 0.040449936 {
        normalized / 12.92 * 100.0
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
    }
}

/// Converts a linear RGB component in `[0, 100]` into a fractional sRGB
/// component in `[0, 255]`, without rounding or clamping.
pub(crate) fn true_delinearized(component: f64) -> f64 {
    let normalized = component / 100.0;
    let delinearized = if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        1.055 * normalized.powf(1.0 / 2.4) - 0.055
    };
    delinearized * 255.0
}

/// Converts a linear RGB component in `[0, 100]` into an 8-bit sRGB component.
pub fn delinearized(component: f64) -> u8 {
    // Half-up rounding keeps results stable across platforms.
    (true_delinearized(component) + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Packs linear RGB components into an opaque [`Argb`].
pub fn argb_from_linrgb(linrgb: [f64; 3]) -> Argb {
    Argb::from_rgb(
        delinearized(linrgb[0]),
        delinearized(linrgb[1]),
        delinearized(linrgb[2]),
    )
}

/// Converts a color into D65 XYZ.
pub fn xyz_from_argb(argb: Argb) -> [f64; 3] {
    matrix_multiply(
        [
            linearized(argb.red()),
            linearized(argb.green()),
            linearized(argb.blue()),
        ],
        &SRGB_TO_XYZ,
    )
}

/// Converts a color into CIE L*a*b* under D65.
pub fn lab_from_argb(argb: Argb) -> [f64; 3] {
    let [x, y, z] = xyz_from_argb(argb);
    let fx = lab_f(x / WHITE_POINT_D65[0]);
    let fy = lab_f(y / WHITE_POINT_D65[1]);
    let fz = lab_f(z / WHITE_POINT_D65[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Relative luminance Y for an L* value.
pub fn y_from_lstar(lstar: f64) -> f64 {
    100.0 * lab_invf((lstar + 16.0) / 116.0)
}

/// L* for a relative luminance Y.
pub fn lstar_from_y(y: f64) -> f64 {
    116.0 * lab_f(y / 100.0) - 16.0
}

/// L* of a color, which is also its HCT tone.
pub fn lstar_from_argb(argb: Argb) -> f64 {
    lstar_from_y(xyz_from_argb(argb)[1])
}

/// The gray with the given L*.
pub fn argb_from_lstar(lstar: f64) -> Argb {
    let component = delinearized(y_from_lstar(lstar));
    Argb::from_rgb(component, component, component)
}

fn lab_f(t: f64) -> f64 {
    let e = 216.0 / 24389.0;
    let kappa = 24389.0 / 27.0;
    if t > e {
        t.cbrt()
    } else {
        (kappa * t + 16.0) / 116.0
    }
}

fn lab_invf(ft: f64) -> f64 {
    let e = 216.0 / 24389.0;
    let kappa = 24389.0 / 27.0;
    let ft3 = ft * ft * ft;
    if ft3 > e {
        ft3
    } else {
        (116.0 * ft - 16.0) / kappa
    }
}

pub(crate) fn matrix_multiply(row: [f64; 3], matrix: &[[f64; 3]; 3]) -> [f64; 3] {
    [
        row[0] * matrix[0][0] + row[1] * matrix[0][1] + row[2] * matrix[0][2],
        row[0] * matrix[1][0] + row[1] * matrix[1][1] + row[2] * matrix[1][2],
        row[0] * matrix[2][0] + row[1] * matrix[2][1] + row[2] * matrix[2][2],
    ]
}

/// Wraps an angle into `[0, 360)`.
pub fn sanitize_degrees(degrees: f64) -> f64 {
    let degrees = degrees % 360.0;
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// Sign of `x`, with `signum(0.0) == 0.0` unlike [`f64::signum`].
pub(crate) fn signum(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else if x == 0.0 {
        0.0
    } else {
        1.0
    }
}
