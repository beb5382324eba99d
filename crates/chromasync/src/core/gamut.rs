use super::FloatExt;
use crate::Float;

/// Determine whether the linear sRGB coordinate is in gamut, i.e., within unit
/// range give or take floating point residue.
#[inline]
fn coordinate_in_gamut(value: Float) -> bool {
    let tolerance = <Float as FloatExt>::GAMUT_TOLERANCE;
    -tolerance <= value && value <= 1.0 + tolerance
}

/// Determine whether the linear sRGB coordinates are in gamut.
pub(crate) fn in_gamut(coordinates: &[Float; 3]) -> bool {
    coordinates.iter().all(|c| coordinate_in_gamut(*c))
}

/// Clip the linear sRGB coordinates to the sRGB gamut.
///
/// This function clamps each coordinate to unit range and reports whether any
/// coordinate was out of gamut. Coordinates within
/// [`GAMUT_TOLERANCE`](FloatExt::GAMUT_TOLERANCE) of the boundary are clamped
/// too, but do not count as clipped. Clipping never fails; the result always is
/// the nearest in-gamut color along each axis.
pub(crate) fn clip(coordinates: &[Float; 3]) -> ([Float; 3], bool) {
    let [r, g, b] = *coordinates;
    (
        [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)],
        !in_gamut(coordinates),
    )
}
