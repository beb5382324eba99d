use crate::core::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two coordinate arrays are the same.
///
/// This macro normalizes the coordinates with [`to_eq_coordinates`], treating
/// none of them as hue, and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the coordinates below each other at the beginning of
/// subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($cs1:expr , $cs2:expr $(,)?) => {
        let (cs1, cs2) = ($cs1, $cs2);
        let bits1 = $crate::core::to_eq_coordinates(cs1, false);
        let bits2 = $crate::core::to_eq_coordinates(cs2, false);
        assert_eq!(
            bits1, bits2,
            "color coordinates differ:\n{:?}\n{:?}",
            cs1, cs2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;

// --------------------------------------------------------------------------------------------------------------------

/// Normalize coordinates for equality testing and hashing.
///
/// If `has_hue` is set, the first coordinate is an angle in degrees. It is
/// reduced to a single rotation and scaled to unit range before rounding, so
/// that 0º and 360º compare equal.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_eq_coordinates(coordinates: &[Float; 3], has_hue: bool) -> [Bits; 3] {
    let [mut c1, c2, c3] = *coordinates;

    if has_hue && !c1.is_nan() {
        c1 = c1.rem_euclid(360.0) / 360.0;
        // A hue a hair below 360º rounds up to a full rotation.
        if c1 >= 1.0 - 1.0 / <Float as FloatExt>::ROUNDING_FACTOR {
            c1 = 0.0;
        }
    }

    [to_eq_bits(c1), to_eq_bits(c2), to_eq_bits(c3)]
}

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

#[cfg(test)]
mod test {
    use super::{to_eq_bits, to_eq_coordinates};
    use crate::Float;

    #[test]
    fn test_eq_bits() {
        assert_eq!(to_eq_bits(-0.0), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(Float::NAN), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(0.1 + 0.2), to_eq_bits(0.3));
        assert_ne!(to_eq_bits(0.3), to_eq_bits(0.31));
    }

    #[test]
    fn test_eq_coordinates() {
        assert_eq!(
            to_eq_coordinates(&[360.0, 50.0, 50.0], true),
            to_eq_coordinates(&[0.0, 50.0, 50.0], true)
        );
        assert_eq!(
            to_eq_coordinates(&[-90.0, 50.0, 50.0], true),
            to_eq_coordinates(&[270.0, 50.0, 50.0], true)
        );
        assert_ne!(
            to_eq_coordinates(&[360.0, 50.0, 50.0], false),
            to_eq_coordinates(&[0.0, 50.0, 50.0], false)
        );
    }
}
