use super::{clip, multiply};
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(rgb: &[u8; 3]) -> [Float; 3] {
    let [r, g, b] = *rgb;
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert a unit-range coordinate to its 8-bit representation.
///
/// This is the one place where RGB coordinates get rounded. Rounding is half
/// away from zero. The result is clamped again after rounding, since a
/// coordinate a hair above 1.0 would otherwise wrap around.
#[inline]
pub(crate) fn to_8bit(value: Float) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert a gamma-corrected sRGB coordinate to linear sRGB.
///
/// The breakpoint 0.04045 belongs to this direction only. Its counterpart for
/// the opposite direction is 0.0031308, i.e., 0.04045 / 12.92.
#[inline]
pub fn linearize(value: Float) -> Float {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear sRGB coordinate to gamma-corrected sRGB.
#[inline]
pub fn delinearize(value: Float) -> Float {
    if value <= 0.0031308 {
        value * 12.92
    } else {
        value.powf(1.0 / 2.4).mul_add(1.055, -0.055)
    }
}

/// Convert coordinates from gamma-corrected RGB to linear RGB. This is a
/// one-hop, direct conversion.
fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    [linearize(value[0]), linearize(value[1]), linearize(value[2])]
}

/// Convert coordinates from linear RGB to gamma-corrected RGB. This is a
/// one-hop, direct conversion.
fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    [
        delinearize(value[0]),
        delinearize(value[1]),
        delinearize(value[2]),
    ]
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

/// Convert linear sRGB in unit range to XYZ with Y in `0..=100`. This is a
/// one-hop, direct conversion.
fn linear_srgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [x, y, z] = multiply(&LINEAR_SRGB_TO_XYZ, value);
    [x * 100.0, y * 100.0, z * 100.0]
}

/// Convert XYZ with Y in `0..=100` to linear sRGB in unit range. The result is
/// *not* clipped. This is a one-hop, direct conversion.
pub(crate) fn xyz_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [x, y, z] = *value;
    multiply(&XYZ_TO_LINEAR_SRGB, &[x / 100.0, y / 100.0, z / 100.0])
}

// --------------------------------------------------------------------------------------------------------------------

/// The CIE standard illuminant D65, i.e., the reference white for CIELAB.
pub const D65_WHITE: [Float; 3] = [95.047, 100.0, 108.883];

/// The breakpoint between the cube root and the linear segment, (6/29)³.
const LAB_EPSILON: Float = 216.0 / 24389.0;

/// The slope of the linear segment scaled by 116, (29/3)³.
const LAB_KAPPA: Float = 24389.0 / 27.0;

/// Compress a white-normalized tristimulus value.
#[inline]
fn lab_f(t: Float) -> Float {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA.mul_add(t, 16.0) / 116.0
    }
}

/// Expand a compressed value back into a white-normalized tristimulus value.
#[inline]
fn lab_f_inverse(t: Float) -> Float {
    let cubed = t * t * t;
    if cubed > LAB_EPSILON {
        cubed
    } else {
        (116.0 * t - 16.0) / LAB_KAPPA
    }
}

/// Convert coordinates for XYZ to CIELAB. This is a one-hop, direct conversion.
#[allow(non_snake_case)]
pub(crate) fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    let [X, Y, Z] = *value;
    let [Xn, Yn, Zn] = D65_WHITE;

    let fx = lab_f(X / Xn);
    let fy = lab_f(Y / Yn);
    let fz = lab_f(Z / Zn);

    [
        116.0 * fy - 16.0,
        500.0 * (fx - fy),
        200.0 * (fy - fz),
    ]
}

/// Convert coordinates for CIELAB to XYZ. This is a one-hop, direct conversion.
#[allow(non_snake_case)]
pub(crate) fn lab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *value;
    let [Xn, Yn, Zn] = D65_WHITE;

    let fy = (L + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    [
        Xn * lab_f_inverse(fx),
        Yn * lab_f_inverse(fy),
        Zn * lab_f_inverse(fz),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 24-bit sRGB to XYZ. This is a two-hop conversion.
pub(crate) fn rgb255_to_xyz(value: &[u8; 3]) -> [Float; 3] {
    let linear_srgb = rgb_to_linear_rgb(&from_24bit(value));
    linear_srgb_to_xyz(&linear_srgb)
}

/// Convert XYZ to 24-bit sRGB. This is a two-hop conversion.
///
/// Colors outside the sRGB gamut are clipped in linear sRGB, before gamma
/// correction. The returned flag reports whether clipping happened.
pub(crate) fn xyz_to_rgb255(value: &[Float; 3]) -> ([u8; 3], bool) {
    let (linear_srgb, clipped) = clip(&xyz_to_linear_srgb(value));
    let [r, g, b] = linear_rgb_to_rgb(&linear_srgb);
    ([to_8bit(r), to_8bit(g), to_8bit(b)], clipped)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 24-bit sRGB to HSL with hue in degrees and saturation as well as
/// lightness in percent.
pub(crate) fn rgb255_to_hsl(value: &[u8; 3]) -> [Float; 3] {
    let [r, g, b] = from_24bit(value);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    // Gray has neither hue nor saturation. Without this branch, both divisions
    // below would be by zero.
    if value[0] == value[1] && value[1] == value[2] {
        return [0.0, 0.0, lightness * 100.0];
    }

    let delta = max - min;
    let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());

    let sextant = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let hue = (sextant * 60.0).rem_euclid(360.0);
    [hue, saturation * 100.0, lightness * 100.0]
}

/// Determine one RGB coordinate for HSL. The offset `t` is the hue in unit
/// range, shifted by a third of a rotation for red and blue.
#[inline]
fn hue_to_channel(p: Float, q: Float, t: Float) -> Float {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        (q - p).mul_add(6.0 * t, p)
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p)
    } else {
        p
    }
}

/// Convert HSL to 24-bit sRGB.
///
/// The hue may have any magnitude and is reduced to one rotation first.
/// Saturation and lightness outside `0..=100` do not fail, though the result
/// is clamped to the sRGB gamut.
pub(crate) fn hsl_to_rgb255(value: &[Float; 3]) -> [u8; 3] {
    let [h, s, l] = *value;
    let hue = h.rem_euclid(360.0) / 360.0;
    let saturation = s / 100.0;
    let lightness = l / 100.0;

    if saturation == 0.0 {
        let level = to_8bit(lightness);
        return [level, level, level];
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    [
        to_8bit(hue_to_channel(p, q, hue + 1.0 / 3.0).clamp(0.0, 1.0)),
        to_8bit(hue_to_channel(p, q, hue).clamp(0.0, 1.0)),
        to_8bit(hue_to_channel(p, q, hue - 1.0 / 3.0).clamp(0.0, 1.0)),
    ]
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::*;
    use crate::core::{assert_same_coordinates, FloatExt};
    use crate::Float;

    /// The slack for results that should be exact but for floating point
    /// residue, 1e-12 for `f64` and 1e-4 for `f32`.
    const SLACK: Float = 1.0 / <Float as FloatExt>::ROUNDING_FACTOR;

    #[test]
    fn test_gamma_breakpoints() {
        // Below the breakpoint, both directions are linear.
        assert_eq!(linearize(0.04), 0.04 / 12.92);
        assert_eq!(delinearize(0.003), 0.003 * 12.92);

        // Right at the breakpoint, both directions agree on the linear segment.
        assert_eq!(linearize(0.04045), 0.04045 / 12.92);
        assert_eq!(delinearize(0.0031308), 0.0031308 * 12.92);

        let encoded = 0.02;
        assert!((delinearize(linearize(encoded)) - encoded).abs() < SLACK);
        let linear = 0.002;
        assert!((linearize(delinearize(linear)) - linear).abs() < SLACK);

        // Between 0.0031308 and 0.04045, encoded values are linear whereas
        // linear values take the power curve.
        assert_eq!(linearize(0.01), 0.01 / 12.92);
        assert!((delinearize(0.01) - 0.09985).abs() < 1e-5);

        // Both curves are continuous at their breakpoints.
        assert!((linearize(0.04045) - linearize(0.04045 + 1e-12)).abs() < 1e-6);
        assert!((delinearize(0.0031308) - delinearize(0.0031308 + 1e-12)).abs() < 1e-6);
    }

    #[test]
    fn test_matrices() {
        // The luminance row sums to one.
        let [_, luminance, _] = LINEAR_SRGB_TO_XYZ;
        let sum: Float = luminance.iter().sum();
        assert!((sum - 1.0).abs() < 1e-3);

        // The two matrices are inverses of each other.
        for (index, column) in [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
            .iter()
            .enumerate()
        {
            let xyz = multiply(&LINEAR_SRGB_TO_XYZ, column);
            let identity = multiply(&XYZ_TO_LINEAR_SRGB, &xyz);
            for (row, value) in identity.iter().enumerate() {
                let expected = if row == index { 1.0 } else { 0.0 };
                assert!(
                    (value - expected).abs() < SLACK,
                    "identity[{}][{}] is {}",
                    row,
                    index,
                    value
                );
            }
        }
    }

    #[test]
    fn test_xyz() {
        assert_same_coordinates!(&rgb255_to_xyz(&[0, 0, 0]), &[0.0, 0.0, 0.0]);
        #[cfg(feature = "f64")]
        assert_same_coordinates!(
            &rgb255_to_xyz(&[255, 255, 255]),
            &[95.04559270516717, 100.0, 108.90577507598784]
        );

        assert_eq!(xyz_to_rgb255(&[0.0, 0.0, 0.0]), ([0, 0, 0], false));
        assert_eq!(
            xyz_to_rgb255(&[95.04559270516717, 100.0, 108.90577507598784]),
            ([255, 255, 255], false)
        );

        // D65 as used for CIELAB is a hair off sRGB's white point.
        assert_eq!(xyz_to_rgb255(&D65_WHITE).0, [255, 255, 255]);

        let blue = rgb255_to_xyz(&[0x4e, 0xa6, 0xff]);
        assert_eq!(xyz_to_rgb255(&blue), ([0x4e, 0xa6, 0xff], false));
    }

    #[test]
    fn test_clipping() {
        assert!(xyz_to_rgb255(&[0.0, 0.0, 200.0]).1);

        let (rgb, clipped) = xyz_to_rgb255(&[0.0, 0.0, 200.0]);
        assert!(clipped);
        assert_eq!(rgb[0], 0);
        assert_eq!(rgb[2], 255);

        // Imaginary colors do not crash the conversion.
        let (rgb, clipped) = xyz_to_rgb255(&[-50.0, 250.0, -10.0]);
        assert!(clipped);
        assert_eq!(rgb[1], 255);
    }

    #[test]
    fn test_lab() {
        assert_same_coordinates!(&xyz_to_lab(&D65_WHITE), &[100.0, 0.0, 0.0]);
        assert_same_coordinates!(&xyz_to_lab(&[0.0, 0.0, 0.0]), &[0.0, 0.0, 0.0]);
        assert_same_coordinates!(&lab_to_xyz(&[100.0, 0.0, 0.0]), &D65_WHITE);
        assert_same_coordinates!(&lab_to_xyz(&[0.0, 0.0, 0.0]), &[0.0, 0.0, 0.0]);

        // Both segments are continuous at the breakpoint.
        let below = lab_f(LAB_EPSILON);
        let above = lab_f(LAB_EPSILON + 1e-15);
        assert!((below - above).abs() < SLACK);
        assert!((below - 6.0 / 29.0).abs() < SLACK);

        // Dark colors take the linear segment in both directions.
        for y in [0.0, 0.1, 0.5, 0.8] {
            let lab = xyz_to_lab(&[y, y, y]);
            assert!(lab[0] < 8.0);
            let xyz = lab_to_xyz(&lab);
            assert!((xyz[1] - y).abs() < SLACK, "{} vs {}", xyz[1], y);
        }

        // Red has a well-known CIELAB value.
        let red = xyz_to_lab(&rgb255_to_xyz(&[255, 0, 0]));
        assert!((red[0] - 53.24).abs() < 0.01);
        assert!((red[1] - 80.09).abs() < 0.05);
        assert!((red[2] - 67.20).abs() < 0.05);
    }

    #[test]
    fn test_hsl() {
        let [h, s, l] = rgb255_to_hsl(&[78, 166, 255]);
        assert!((h - 210.17).abs() < 0.01, "hue is {}", h);
        assert!((s - 100.0).abs() < 0.01, "saturation is {}", s);
        assert!((l - 65.29).abs() < 0.01, "lightness is {}", l);

        assert_same_coordinates!(&rgb255_to_hsl(&[255, 0, 0]), &[0.0, 100.0, 50.0]);
        assert_same_coordinates!(&rgb255_to_hsl(&[0, 255, 0]), &[120.0, 100.0, 50.0]);
        assert_same_coordinates!(&rgb255_to_hsl(&[0, 0, 255]), &[240.0, 100.0, 50.0]);
        assert_same_coordinates!(&rgb255_to_hsl(&[255, 0, 255]), &[300.0, 100.0, 50.0]);

        // Red with a touch of blue wraps around to just below 360.
        let [h, _, _] = rgb255_to_hsl(&[255, 0, 1]);
        assert!(359.0 < h && h < 360.0);

        assert_eq!(hsl_to_rgb255(&[0.0, 100.0, 50.0]), [255, 0, 0]);
        assert_eq!(hsl_to_rgb255(&[120.0, 100.0, 50.0]), [0, 255, 0]);
        assert_eq!(hsl_to_rgb255(&[240.0, 100.0, 50.0]), [0, 0, 255]);
        assert_eq!(hsl_to_rgb255(&[480.0, 100.0, 50.0]), [0, 255, 0]);
        assert_eq!(hsl_to_rgb255(&[-120.0, 100.0, 50.0]), [0, 0, 255]);
    }

    #[test]
    fn test_achromatic() {
        for level in 0..=255_u8 {
            let [h, s, l] = rgb255_to_hsl(&[level, level, level]);
            assert_eq!(h, 0.0);
            assert_eq!(s, 0.0);
            assert_eq!(hsl_to_rgb255(&[h, s, l]), [level, level, level]);
        }

        for hue in [0.0, 42.0, 180.0, 359.9, 720.0, -90.0] {
            for lightness in [0.0, 12.5, 50.0, 65.3, 100.0] {
                let level = (lightness / 100.0 * 255.0 as Float).round() as u8;
                assert_eq!(
                    hsl_to_rgb255(&[hue, 0.0, lightness]),
                    [level, level, level]
                );
            }
        }
    }

    #[test]
    fn test_out_of_convention_hsl() {
        assert_eq!(hsl_to_rgb255(&[0.0, 0.0, 150.0]), [255, 255, 255]);
        assert_eq!(hsl_to_rgb255(&[0.0, 0.0, -20.0]), [0, 0, 0]);
        assert_eq!(hsl_to_rgb255(&[0.0, 250.0, 50.0])[0], 255);
        let _ = hsl_to_rgb255(&[90.0, -40.0, 120.0]);
    }
}
