//! Inverse HCT: finds the sRGB color closest to a requested hue, chroma and
//! tone.
//!
//! Tone fixes relative luminance Y, so the search runs on the plane of
//! constant Y inside the linear RGB cube. When the requested chroma is
//! reachable, Newton iteration on CAM16 J lands on it directly. Otherwise the
//! hue line is bisected against the cube boundary to find the most chromatic
//! in-gamut color of that hue.

use std::f64::consts::PI;

use crate::{
    Argb,
    cam16::ViewingConditions,
    utils::{
        argb_from_linrgb, argb_from_lstar, linearized_f64, matrix_multiply, sanitize_degrees,
        signum, true_delinearized, y_from_lstar,
    },
};

/// Linear RGB `[0, 100]` to the illuminant-discounted, luminance-scaled cone
/// responses of the standard viewing conditions.
const SCALED_DISCOUNT_FROM_LINRGB: [[f64; 3]; 3] = [
    [
        0.001200833568784504,
        0.002389694492170889,
        0.0002795742885861124,
    ],
    [
        0.0005891086651375999,
        0.0029785502573438758,
        0.0003270666104008398,
    ],
    [
        0.00010146692491640572,
        0.0005364214359186694,
        0.0032979401770712076,
    ],
];

const LINRGB_FROM_SCALED_DISCOUNT: [[f64; 3]; 3] = [
    [1373.2198709594231, -1100.4251190754821, -7.278681089101213],
    [-271.815969077903, 559.6580465940733, -32.46047482791194],
    [1.9622899599665666, -57.173814538844006, 308.7233197812385],
];

const Y_FROM_LINRGB: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Marks a cube vertex that does not lie on the constant-Y plane.
const NO_VERTEX: [f64; 3] = [-1.0, -1.0, -1.0];

/// Solves for the color with the given hue, chroma and tone.
///
/// Chroma is reduced as far as needed to stay within sRGB; hue and tone are
/// kept.
pub fn solve_to_argb(hue_degrees: f64, chroma: f64, lstar: f64) -> Argb {
    if chroma < 0.0001 || lstar < 0.0001 || lstar > 99.9999 {
        return argb_from_lstar(lstar);
    }
    let hue_radians = sanitize_degrees(hue_degrees) / 180.0 * PI;
    let y = y_from_lstar(lstar);
    if let Some(exact) = find_result_by_j(hue_radians, chroma, y) {
        return exact;
    }
    argb_from_linrgb(bisect_to_limit(y, hue_radians))
}

fn sanitize_radians(angle: f64) -> f64 {
    (angle + PI * 8.0) % (PI * 2.0)
}

fn chromatic_adaptation(component: f64) -> f64 {
    let af = component.abs().powf(0.42);
    signum(component) * 400.0 * af / (af + 27.13)
}

fn inverse_chromatic_adaptation(adapted: f64) -> f64 {
    let adapted_abs = adapted.abs();
    let base = (27.13 * adapted_abs / (400.0 - adapted_abs)).max(0.0);
    signum(adapted) * base.powf(1.0 / 0.42)
}

/// CAM16 hue, in radians, of a linear RGB color.
fn hue_of(linrgb: [f64; 3]) -> f64 {
    let scaled_discount = matrix_multiply(linrgb, &SCALED_DISCOUNT_FROM_LINRGB);
    let r_a = chromatic_adaptation(scaled_discount[0]);
    let g_a = chromatic_adaptation(scaled_discount[1]);
    let b_a = chromatic_adaptation(scaled_discount[2]);
    let a = (11.0 * r_a + -12.0 * g_a + b_a) / 11.0;
    let b = (r_a + g_a - 2.0 * b_a) / 9.0;
    b.atan2(a)
}

fn are_in_cyclic_order(a: f64, b: f64, c: f64) -> bool {
    sanitize_radians(b - a) < sanitize_radians(c - a)
}

/// Fraction of the way from `source` to `target` that `mid` sits at.
fn intercept(source: f64, mid: f64, target: f64) -> f64 {
    (mid - source) / (target - source)
}

fn lerp_point(source: [f64; 3], t: f64, target: [f64; 3]) -> [f64; 3] {
    [
        source[0] + (target[0] - source[0]) * t,
        source[1] + (target[1] - source[1]) * t,
        source[2] + (target[2] - source[2]) * t,
    ]
}

fn set_coordinate(source: [f64; 3], coordinate: f64, target: [f64; 3], axis: usize) -> [f64; 3] {
    let t = intercept(source[axis], coordinate, target[axis]);
    lerp_point(source, t, target)
}

fn is_bounded(x: f64) -> bool {
    (0.0..=100.0).contains(&x)
}

/// The `n`th of the 12 cube edges, intersected with the plane of constant
/// `y`. Returns [`NO_VERTEX`] when the edge misses the plane.
fn nth_vertex(y: f64, n: usize) -> [f64; 3] {
    let [k_r, k_g, k_b] = Y_FROM_LINRGB;
    let coord_a = if n % 4 <= 1 { 0.0 } else { 100.0 };
    let coord_b = if n % 2 == 0 { 0.0 } else { 100.0 };
    if n < 4 {
        let (g, b) = (coord_a, coord_b);
        let r = (y - g * k_g - b * k_b) / k_r;
        if is_bounded(r) { [r, g, b] } else { NO_VERTEX }
    } else if n < 8 {
        let (b, r) = (coord_a, coord_b);
        let g = (y - r * k_r - b * k_b) / k_g;
        if is_bounded(g) { [r, g, b] } else { NO_VERTEX }
    } else {
        let (r, g) = (coord_a, coord_b);
        let b = (y - r * k_r - g * k_g) / k_b;
        if is_bounded(b) { [r, g, b] } else { NO_VERTEX }
    }
}

/// Finds the polygon edge of the constant-Y slice whose endpoints bracket
/// `target_hue`.
fn bisect_to_segment(y: f64, target_hue: f64) -> ([f64; 3], [f64; 3]) {
    let mut left = NO_VERTEX;
    let mut right = NO_VERTEX;
    let mut left_hue = 0.0;
    let mut right_hue = 0.0;
    let mut initialized = false;
    let mut uncut = true;
    for n in 0..12 {
        let mid = nth_vertex(y, n);
        if mid[0] < 0.0 {
            continue;
        }
        let mid_hue = hue_of(mid);
        if !initialized {
            left = mid;
            right = mid;
            left_hue = mid_hue;
            right_hue = mid_hue;
            initialized = true;
            continue;
        }
        if uncut || are_in_cyclic_order(left_hue, mid_hue, right_hue) {
            uncut = false;
            if are_in_cyclic_order(left_hue, target_hue, mid_hue) {
                right = mid;
                right_hue = mid_hue;
            } else {
                left = mid;
                left_hue = mid_hue;
            }
        }
    }
    (left, right)
}

fn midpoint(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0, (a[2] + b[2]) / 2.0]
}

fn critical_plane_below(x: f64) -> i32 {
    (x - 0.5).floor() as i32
}

fn critical_plane_above(x: f64) -> i32 {
    (x - 0.5).ceil() as i32
}

/// Linear RGB value halfway between 8-bit sRGB codes `plane` and `plane + 1`.
fn critical_plane(plane: i32) -> f64 {
    linearized_f64(plane as f64 + 0.5)
}

/// Narrows the bracketing segment down to neighbouring 8-bit planes along
/// each axis and returns its midpoint.
fn bisect_to_limit(y: f64, target_hue: f64) -> [f64; 3] {
    let (mut left, mut right) = bisect_to_segment(y, target_hue);
    let mut left_hue = hue_of(left);
    for axis in 0..3 {
        if left[axis] == right[axis] {
            continue;
        }
        let (mut l_plane, mut r_plane) = if left[axis] < right[axis] {
            (
                critical_plane_below(true_delinearized(left[axis])),
                critical_plane_above(true_delinearized(right[axis])),
            )
        } else {
            (
                critical_plane_above(true_delinearized(left[axis])),
                critical_plane_below(true_delinearized(right[axis])),
            )
        };
        for _ in 0..8 {
            if (r_plane - l_plane).abs() <= 1 {
                break;
            }
            let m_plane = ((l_plane + r_plane) as f64 / 2.0).floor() as i32;
            let mid = set_coordinate(left, critical_plane(m_plane), right, axis);
            let mid_hue = hue_of(mid);
            if are_in_cyclic_order(left_hue, target_hue, mid_hue) {
                right = mid;
                r_plane = m_plane;
            } else {
                left = mid;
                left_hue = mid_hue;
                l_plane = m_plane;
            }
        }
    }
    midpoint(left, right)
}

/// Newton iteration on J with CAM16 inlined. `None` when the result leaves
/// the sRGB cube.
fn find_result_by_j(hue_radians: f64, chroma: f64, y: f64) -> Option<Argb> {
    let vc = ViewingConditions::standard();
    let mut j = y.sqrt() * 11.0;

    let t_inner_coeff = 1.0 / (1.64 - 0.29f64.powf(vc.n)).powf(0.73);
    let e_hue = 0.25 * ((hue_radians + 2.0).cos() + 3.8);
    let p1 = e_hue * (50000.0 / 13.0) * vc.nc * vc.ncb;
    let h_sin = hue_radians.sin();
    let h_cos = hue_radians.cos();

    for round in 0..5 {
        let j_normalized = j / 100.0;
        let alpha = if chroma == 0.0 || j == 0.0 {
            0.0
        } else {
            chroma / j_normalized.sqrt()
        };
        let t = (alpha * t_inner_coeff).powf(1.0 / 0.9);
        let ac = vc.aw * j_normalized.powf(1.0 / vc.c / vc.z);
        let p2 = ac / vc.nbb;
        let gamma = 23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;
        let r_a = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let g_a = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let b_a = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;
        let linrgb = matrix_multiply(
            [
                inverse_chromatic_adaptation(r_a),
                inverse_chromatic_adaptation(g_a),
                inverse_chromatic_adaptation(b_a),
            ],
            &LINRGB_FROM_SCALED_DISCOUNT,
        );
        if linrgb.iter().any(|&c| c < 0.0) {
            return None;
        }
        let [k_r, k_g, k_b] = Y_FROM_LINRGB;
        let fnj = k_r * linrgb[0] + k_g * linrgb[1] + k_b * linrgb[2];
        if fnj <= 0.0 {
            return None;
        }
        if round == 4 || (fnj - y).abs() < 0.002 {
            if linrgb.iter().any(|&c| c > 100.01) {
                return None;
            }
            return Some(argb_from_linrgb(linrgb));
        }
        // 2 * fn(j) / j approximates fn'(j).
        j -= (fnj - y) * j / (2.0 * fnj);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::lstar_from_argb;

    #[test]
    fn test_gray_shortcut() {
        assert_eq!(solve_to_argb(120.0, 0.0, 50.0), argb_from_lstar(50.0));
        assert_eq!(solve_to_argb(120.0, 40.0, 0.0), Argb::BLACK);
        assert_eq!(solve_to_argb(120.0, 40.0, 100.0), Argb::WHITE);
    }

    #[test]
    fn test_critical_planes() {
        assert!((critical_plane(0) - 0.015176349177441876).abs() < 1e-15);
        assert!((critical_plane(254) - 99.55452497210776).abs() < 1e-9);
    }

    #[test]
    fn test_known_solutions() {
        let hue = 298.980997210704;
        assert_eq!(solve_to_argb(hue, 36.0, 40.0), Argb(0xFF65_558F));
        assert_eq!(solve_to_argb(hue, 36.0, 80.0), Argb(0xFFCF_BDFE));
        assert_eq!(solve_to_argb(25.0, 84.0, 40.0), Argb(0xFFBA_1A1A));
    }

    #[test]
    fn test_tone_is_preserved_when_chroma_is_clipped() {
        // Chroma 200 is outside sRGB for every hue, forcing the bisection path.
        for hue in (0..360).step_by(15) {
            for tone in [20.0, 50.0, 80.0] {
                let argb = solve_to_argb(hue as f64, 200.0, tone);
                let actual = lstar_from_argb(argb);
                assert!((actual - tone).abs() < 1.0, "hue {hue} tone {tone} -> {actual}");
            }
        }
    }
}
