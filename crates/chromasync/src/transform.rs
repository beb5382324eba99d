//! The pure color transforms.
//!
//! Each function in this module converts between two of the representations.
//! They are stateless and total over finite coordinates, i.e., they never fail
//! and never panic. The same conversions are also available as methods and
//! `From` implementations on [`Rgb`], [`Xyz`], [`Lab`], and [`Hsl`]. With the
//! `pyffi` feature enabled, they are module functions in Python.
//!
//! The sRGB gamma curve is exposed per coordinate as [`linearize`] and
//! [`delinearize`](crate::delinearize).

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::{Float, Hsl, Lab, Rgb, Xyz};

/// Convert 24-bit sRGB to CIE XYZ.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn rgb255_to_xyz(rgb: Rgb) -> Xyz {
    rgb.to_xyz()
}

/// Convert CIE XYZ to 24-bit sRGB, clipping if necessary.
///
/// The flag reports whether clipping was necessary, i.e., whether the color is
/// outside the sRGB gamut. The result always is the nearest in-gamut color.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn xyz_to_rgb255(xyz: Xyz) -> (Rgb, bool) {
    xyz.to_rgb()
}

/// Convert CIE XYZ to linear sRGB without clipping.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn xyz_to_linear_rgb(xyz: Xyz) -> [Float; 3] {
    xyz.to_linear_srgb()
}

/// Convert CIE XYZ to CIE L*a*b*.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    xyz.to_lab()
}

/// Convert CIE L*a*b* to CIE XYZ.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    lab.to_xyz()
}

/// Convert 24-bit sRGB to HSL.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn rgb255_to_hsl(rgb: Rgb) -> Hsl {
    rgb.to_hsl()
}

/// Convert HSL to 24-bit sRGB.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hsl_to_rgb255(hsl: Hsl) -> Rgb {
    hsl.to_rgb()
}

/// Convert a gamma-corrected sRGB coordinate to linear sRGB.
///
/// This function wraps [`crate::linearize`] for Python.
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "linearize")]
pub fn py_linearize(value: Float) -> Float {
    crate::linearize(value)
}

/// Convert a linear sRGB coordinate to gamma-corrected sRGB.
///
/// This function wraps [`crate::delinearize`] for Python.
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "delinearize")]
pub fn py_delinearize(value: Float) -> Float {
    crate::delinearize(value)
}

pub use crate::core::{delinearize, linearize};
