//! # Chromasync
//!
//! Chromasync keeps one color consistent across four interchangeable
//! representations, 24-bit sRGB, CIE XYZ, CIE L\*a\*b\*, and HSL, while any
//! one of them is being edited.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enable the `pyffi` feature for a version that also covers Python
integration."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. Items that are only available in Python are decorated with <i
class=python-only>Python only!</i>."
)]
//!
//!
//! ## 1. Overview
//!
//! Chromasync's main abstractions are:
//!
//!   * The **value types** [`Rgb`], [`Xyz`], [`Lab`], and [`Hsl`] for the four
//!     representations. [`Rgb`] has `u8` coordinates and is the canonical
//!     display representation. The other three have [`Float`] coordinates.
//!   * The [`transform`] module's **pure conversions** between them. They are
//!     also available as methods and `From` implementations on the value
//!     types. Converting to sRGB from CIE XYZ or CIE L\*a\*b\* may require
//!     clipping. That never fails, but it is reported.
//!   * [`ColorState`] combines **one color in all four representations** with
//!     a flag indicating whether the sRGB representation had to be clipped.
//!   * [`Session`] is the **consistency controller**. It owns the current
//!     color state, applies [`Edit`]s to one representation by deriving the
//!     other three from it, and notifies [`Observer`]s of every change.
//!     Edits arriving while an edit is being applied are rejected or queued,
//!     depending on the session's [`Options`](opt::Options).
//!
//!
//! ## 2. Example
//!
//! ```
//! # use chromasync::{ColorState, Hsl, Lab, Session, Xyz};
//! let session = Session::from_hex("#4EA6FF")?;
//! session.subscribe(|state: &ColorState| {
//!     println!("{} / {:#} / clipped: {}", state.rgb(), state.rgb(), state.clipped());
//! });
//!
//! // Editing HSL preserves the edited HSL value exactly.
//! session.apply_edit(Hsl::new(120.0, 100.0, 25.0))?;
//! assert_eq!(session.state().to_hex(), "#008000");
//! assert_eq!(session.state().hsl().coordinates(), [120.0, 100.0, 25.0]);
//!
//! // A very saturated violet is outside the sRGB gamut.
//! session.apply_edit(Xyz::new(0.0, 0.0, 200.0))?;
//! assert!(session.state().clipped());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//!
//! ## 3. Numerics
//!
//! The sRGB gamma curve switches between linear segment and power curve at
//! 0.04045 for linearization and at 0.0031308 for the inverse. The matrices
//! between linear sRGB and CIE XYZ are exact inverses of each other. CIE
//! L\*a\*b\* uses the exact rational constants ε = 216/24389 and κ = 24389/27
//! with the D65 reference white [`D65_WHITE`]. Converting to 24-bit sRGB
//! rounds half away from zero exactly once, as the very last step.
//!
//!
//! ## 4. Feature Flags
//!
//!   * `f64` (default) selects `f64` as [`Float`]; without it, [`Float`] is
//!     `f32`.
//!   * `pyffi` enables the `chromasync.color` Python extension module.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod object;
pub mod opt;
mod session;
pub mod transform;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{delinearize, linearize, D65_WHITE};
pub use object::{ColorState, Hsl, Lab, Rgb, Xyz};
pub use session::{Edit, Observer, Outcome, Phase, Representation, Session};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
#[cfg(feature = "pyffi")]
use pyo3::types::PyDict;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn color(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let modcolor_name = m.name()?;
    let modcolor_name = modcolor_name.to_str()?;
    let modtransform_name = format!("{}.transform", modcolor_name);

    // -------------------------------------------------------------------------- color
    m.add_class::<ColorState>()?;
    m.add_class::<Hsl>()?;
    m.add_class::<Lab>()?;
    m.add_class::<Representation>()?;
    m.add_class::<Rgb>()?;
    m.add_class::<Session>()?;
    m.add_class::<Xyz>()?;
    m.add("D65_WHITE", D65_WHITE)?;

    // ---------------------------------------------------------------- color.transform
    let modtransform = PyModule::new(m.py(), "transform")?;
    modtransform.add("__package__", modcolor_name)?;
    modtransform.add_function(wrap_pyfunction!(transform::py_delinearize, &modtransform)?)?;
    modtransform.add_function(wrap_pyfunction!(transform::hsl_to_rgb255, &modtransform)?)?;
    modtransform.add_function(wrap_pyfunction!(transform::lab_to_xyz, &modtransform)?)?;
    modtransform.add_function(wrap_pyfunction!(transform::py_linearize, &modtransform)?)?;
    modtransform.add_function(wrap_pyfunction!(transform::rgb255_to_hsl, &modtransform)?)?;
    modtransform.add_function(wrap_pyfunction!(transform::rgb255_to_xyz, &modtransform)?)?;
    modtransform.add_function(wrap_pyfunction!(transform::xyz_to_lab, &modtransform)?)?;
    modtransform.add_function(wrap_pyfunction!(
        transform::xyz_to_linear_rgb,
        &modtransform
    )?)?;
    modtransform.add_function(wrap_pyfunction!(transform::xyz_to_rgb255, &modtransform)?)?;
    m.add_submodule(&modtransform)?;

    // Only change __name__ attribute after submodule has been added.
    modtransform.setattr("__name__", &modtransform_name)?;

    // -------------------------------------------------------------------- sys.modules
    let py_modules: Bound<'_, PyDict> = PyModule::import(m.py(), "sys")?
        .getattr("modules")?
        .downcast_into()?;
    py_modules.set_item(&modtransform_name, modtransform)?;

    Ok(())
}
