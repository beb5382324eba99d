mod conversion;
mod equality;
mod gamut;
mod math;
mod string;

// conversion
pub use conversion::{delinearize, linearize, D65_WHITE};
pub(crate) use conversion::{
    hsl_to_rgb255, lab_to_xyz, rgb255_to_hsl, rgb255_to_xyz, xyz_to_lab, xyz_to_linear_srgb,
    xyz_to_rgb255,
};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_coordinates;

// gamut
pub(crate) use gamut::{clip, in_gamut};

// math
pub(crate) use math::{multiply, FloatExt};

// string
pub(crate) use string::{format_coordinates, format_decimal, format_hex, parse_hex};
