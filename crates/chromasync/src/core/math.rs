use crate::Float;

/// An extension trait for floating point numbers.
///
/// This trait pre-computes the constants that depend on the floating point
/// representation, i.e., the rounding factor for equality comparisons and the
/// tolerance for gamut tests.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;

    /// The slack granted to linear RGB coordinates before they count as out of
    /// gamut.
    ///
    /// Converting an in-gamut color to XYZ and back does not reproduce the
    /// original coordinates bit for bit. White, for example, comes back as
    /// `1.0000000000000002`. That residue must not be mistaken for a color
    /// outside the sRGB gamut.
    const GAMUT_TOLERANCE: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
    const GAMUT_TOLERANCE: f64 = 1e-9;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
    const GAMUT_TOLERANCE: f32 = 1e-5;
}

// ----------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
pub(crate) fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

#[cfg(test)]
mod test {
    use super::multiply;
    use crate::Float;

    #[test]
    fn test_multiply() {
        #[rustfmt::skip]
        let matrix: [[Float; 3]; 3] = [
            [1.0, 2.0, 3.0],
            [0.0, 1.0, 0.0],
            [-1.0, 0.0, 0.5],
        ];

        assert_eq!(multiply(&matrix, &[1.0, 1.0, 1.0]), [6.0, 1.0, -0.5]);
        assert_eq!(multiply(&matrix, &[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(multiply(&matrix, &[2.0, 0.0, 4.0]), [14.0, 0.0, 0.0]);
    }
}
