use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    format_coordinates, format_decimal, format_hex, hsl_to_rgb255, in_gamut, lab_to_xyz,
    parse_hex, rgb255_to_hsl, rgb255_to_xyz, to_eq_coordinates, xyz_to_lab, xyz_to_linear_srgb,
    xyz_to_rgb255,
};
use crate::error::ColorFormatError;
use crate::Float;

// ====================================================================================================================
// Rgb
// ====================================================================================================================

/// A 24-bit sRGB color.
///
/// This is the canonical display representation. Its coordinates are the red,
/// green, and blue channels on the 0–255 scale. Its display is the uppercase
/// hashed hexadecimal notation, e.g., `#4EA6FF`, and its alternate display
/// (`{:#}`) is the comma-separated decimal notation, e.g., `78, 166, 255`.
///
/// ```
/// # use chromasync::Rgb;
/// # use std::str::FromStr;
/// let blue = Rgb::from_str("#4ea6ff")?;
/// assert_eq!(blue, Rgb::new(78, 166, 255));
/// assert_eq!(format!("{}", blue), "#4EA6FF");
/// assert_eq!(format!("{:#}", blue), "78, 166, 255");
/// # Ok::<(), chromasync::error::ColorFormatError>(())
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "chromasync.color")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

#[cfg_attr(feature = "pyffi", pymethods)]
impl Rgb {
    /// Create a new 24-bit sRGB color from its coordinates.
    #[cfg(feature = "pyffi")]
    #[new]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Create a new 24-bit sRGB color from its coordinates.
    #[cfg(not(feature = "pyffi"))]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse a color in hexadecimal notation. <i class=python-only>Python
    /// only!</i>
    ///
    /// This method implements the same functionality as [`Rgb as
    /// FromStr`](struct.Rgb.html#impl-FromStr-for-Rgb) and is available in
    /// Python only.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Rgb, ColorFormatError> {
        Rgb::from_str(s)
    }

    /// Get the red coordinate.
    pub const fn r(&self) -> u8 {
        self.0[0]
    }

    /// Get the green coordinate.
    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    /// Get the blue coordinate.
    pub const fn b(&self) -> u8 {
        self.0[2]
    }

    /// Get all three coordinates.
    pub const fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    /// Format this color in uppercase hashed hexadecimal notation.
    pub fn to_hex(&self) -> String {
        format!("{}", self)
    }

    /// Format this color as comma-separated decimal coordinates.
    pub fn to_decimal(&self) -> String {
        format!("{:#}", self)
    }

    /// Convert this color to CIE XYZ.
    pub fn to_xyz(&self) -> Xyz {
        Xyz(rgb255_to_xyz(&self.0))
    }

    /// Convert this color to CIE L*a*b*.
    pub fn to_lab(&self) -> Lab {
        Lab(xyz_to_lab(&rgb255_to_xyz(&self.0)))
    }

    /// Convert this color to HSL.
    pub fn to_hsl(&self) -> Hsl {
        Hsl(rgb255_to_hsl(&self.0))
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("Rgb({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }

    /// Convert this color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl FromStr for Rgb {
    type Err = ColorFormatError;

    /// Parse three or six hexadecimal digits, optionally preceded by `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Rgb)
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Rgb(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl From<Hsl> for Rgb {
    fn from(value: Hsl) -> Self {
        value.to_rgb()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            format_decimal(&self.0, f)
        } else {
            format_hex(&self.0, f)
        }
    }
}

// ====================================================================================================================
// Xyz
// ====================================================================================================================

/// A color in CIE XYZ with the D65 standard illuminant.
///
/// Y is scaled to `0..=100`. In-gamut sRGB colors have X in about `0..=95` and
/// Z in about `0..=109`. Coordinates outside these ranges are valid and
/// describe colors that sRGB cannot display, including imaginary colors.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "chromasync.color")
)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Xyz([Float; 3]);

#[cfg_attr(feature = "pyffi", pymethods)]
impl Xyz {
    /// Create a new XYZ color from its coordinates.
    #[cfg(feature = "pyffi")]
    #[new]
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self([x, y, z])
    }

    /// Create a new XYZ color from its coordinates.
    #[cfg(not(feature = "pyffi"))]
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self([x, y, z])
    }

    /// Get the X coordinate.
    pub const fn x(&self) -> Float {
        self.0[0]
    }

    /// Get the Y coordinate, i.e., the luminance.
    pub const fn y(&self) -> Float {
        self.0[1]
    }

    /// Get the Z coordinate.
    pub const fn z(&self) -> Float {
        self.0[2]
    }

    /// Get all three coordinates.
    pub const fn coordinates(&self) -> [Float; 3] {
        self.0
    }

    /// Convert this color to linear sRGB without clipping.
    ///
    /// Coordinates in unit range describe colors inside the sRGB gamut. All
    /// other coordinates describe colors outside of it.
    pub fn to_linear_srgb(&self) -> [Float; 3] {
        xyz_to_linear_srgb(&self.0)
    }

    /// Determine whether this color is inside the sRGB gamut.
    pub fn in_gamut(&self) -> bool {
        in_gamut(&xyz_to_linear_srgb(&self.0))
    }

    /// Convert this color to 24-bit sRGB.
    ///
    /// If the color is outside the sRGB gamut, this method clips it in linear
    /// sRGB and returns the nearest in-gamut color. The flag reports whether
    /// clipping was necessary.
    pub fn to_rgb(&self) -> (Rgb, bool) {
        let (rgb, clipped) = xyz_to_rgb255(&self.0);
        (Rgb(rgb), clipped)
    }

    /// Convert this color to CIE L*a*b*.
    pub fn to_lab(&self) -> Lab {
        Lab(xyz_to_lab(&self.0))
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("Xyz({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }

    /// Convert this color to its human-readable representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

// ====================================================================================================================
// Lab
// ====================================================================================================================

/// A color in CIE L*a*b* relative to the D65 reference white.
///
/// Lightness L nominally ranges `0..=100`. The a and b coordinates have no set
/// limits, though user interfaces typically restrict them to `-128..=127`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "chromasync.color")
)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Lab([Float; 3]);

#[cfg_attr(feature = "pyffi", pymethods)]
impl Lab {
    /// Create a new CIE L*a*b* color from its coordinates.
    #[cfg(feature = "pyffi")]
    #[new]
    pub const fn new(l: Float, a: Float, b: Float) -> Self {
        Self([l, a, b])
    }

    /// Create a new CIE L*a*b* color from its coordinates.
    #[cfg(not(feature = "pyffi"))]
    pub const fn new(l: Float, a: Float, b: Float) -> Self {
        Self([l, a, b])
    }

    /// Get the lightness L.
    pub const fn l(&self) -> Float {
        self.0[0]
    }

    /// Get the green/red coordinate a.
    pub const fn a(&self) -> Float {
        self.0[1]
    }

    /// Get the blue/yellow coordinate b.
    pub const fn b(&self) -> Float {
        self.0[2]
    }

    /// Get all three coordinates.
    pub const fn coordinates(&self) -> [Float; 3] {
        self.0
    }

    /// Convert this color to CIE XYZ.
    pub fn to_xyz(&self) -> Xyz {
        Xyz(lab_to_xyz(&self.0))
    }

    /// Convert this color to 24-bit sRGB, clipping if necessary.
    pub fn to_rgb(&self) -> (Rgb, bool) {
        self.to_xyz().to_rgb()
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("Lab({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }

    /// Convert this color to its human-readable representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

// ====================================================================================================================
// Hsl
// ====================================================================================================================

/// A color in HSL.
///
/// The hue H is an angle in degrees and wraps around, i.e., 360º and 0º are the
/// same hue. Saturation S and lightness L are percentages in `0..=100`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "chromasync.color")
)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Hsl([Float; 3]);

#[cfg_attr(feature = "pyffi", pymethods)]
impl Hsl {
    /// Create a new HSL color from its coordinates.
    #[cfg(feature = "pyffi")]
    #[new]
    pub const fn new(h: Float, s: Float, l: Float) -> Self {
        Self([h, s, l])
    }

    /// Create a new HSL color from its coordinates.
    #[cfg(not(feature = "pyffi"))]
    pub const fn new(h: Float, s: Float, l: Float) -> Self {
        Self([h, s, l])
    }

    /// Get the hue in degrees.
    pub const fn h(&self) -> Float {
        self.0[0]
    }

    /// Get the saturation in percent.
    pub const fn s(&self) -> Float {
        self.0[1]
    }

    /// Get the lightness in percent.
    pub const fn l(&self) -> Float {
        self.0[2]
    }

    /// Get all three coordinates.
    pub const fn coordinates(&self) -> [Float; 3] {
        self.0
    }

    /// Convert this color to 24-bit sRGB.
    ///
    /// HSL is a cylindrical view of sRGB, so the result never needs clipping.
    pub fn to_rgb(&self) -> Rgb {
        Rgb(hsl_to_rgb255(&self.0))
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("Hsl({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }

    /// Convert this color to its human-readable representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

// --------------------------------------------------------------------------------------------------------------------

macro_rules! impl_float_color {
    ($name:ident, $has_hue:expr) => {
        impl AsRef<[Float; 3]> for $name {
            fn as_ref(&self) -> &[Float; 3] {
                &self.0
            }
        }

        impl std::ops::Index<usize> for $name {
            type Output = Float;

            /// Access the coordinate with the given index.
            ///
            /// # Panics
            ///
            /// This method panics if `2 < index`.
            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl From<[Float; 3]> for $name {
            fn from(value: [Float; 3]) -> Self {
                $name(value)
            }
        }

        impl From<$name> for [Float; 3] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                to_eq_coordinates(&self.0, $has_hue).hash(state);
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                to_eq_coordinates(&self.0, $has_hue) == to_eq_coordinates(&other.0, $has_hue)
            }
        }

        impl Eq for $name {}

        impl std::fmt::Display for $name {
            /// Format the coordinates separated by commas, with the formatter's
            /// precision or 3 digits past the decimal.
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                format_coordinates(&self.0, f)
            }
        }
    };
}

impl_float_color!(Xyz, false);
impl_float_color!(Lab, false);
impl_float_color!(Hsl, true);

impl From<Rgb> for Xyz {
    fn from(value: Rgb) -> Self {
        value.to_xyz()
    }
}

impl From<Lab> for Xyz {
    fn from(value: Lab) -> Self {
        value.to_xyz()
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        value.to_lab()
    }
}

impl From<Rgb> for Lab {
    fn from(value: Rgb) -> Self {
        value.to_lab()
    }
}

impl From<Rgb> for Hsl {
    fn from(value: Rgb) -> Self {
        value.to_hsl()
    }
}

// ====================================================================================================================
// ColorState
// ====================================================================================================================

/// One color in all four representations.
///
/// A color state combines a 24-bit sRGB color with the same color in CIE XYZ,
/// CIE L*a*b*, and HSL, plus a flag indicating whether the sRGB color is a
/// clipped approximation. The four representations are always derived from a
/// single source of truth, which is preserved exactly. Only the other three
/// representations are computed, and they are consistent with each other within
/// rounding error.
///
/// The constructors implement the dependency table between representations.
/// Each one starts from its source and derives every other representation
/// along a path that never revisits the source:
///
/// | Source | XYZ           | Lab          | sRGB (clipped?)    | HSL       |
/// | ------ | ------------- | ------------ | ------------------ | --------- |
/// | sRGB   | from sRGB     | from XYZ     | —                  | from sRGB |
/// | XYZ    | —             | from XYZ     | from XYZ (maybe)   | from sRGB |
/// | Lab    | from Lab      | —            | from XYZ (maybe)   | from sRGB |
/// | HSL    | from sRGB     | from XYZ     | from HSL (never)   | —         |
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "chromasync.color")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorState {
    rgb: Rgb,
    xyz: Xyz,
    lab: Lab,
    hsl: Hsl,
    clipped: bool,
}

impl ColorState {
    /// Synchronize all representations with the given sRGB color.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let xyz = rgb.to_xyz();
        Self {
            rgb,
            xyz,
            lab: xyz.to_lab(),
            hsl: rgb.to_hsl(),
            clipped: false,
        }
    }

    /// Synchronize all representations with the given XYZ color.
    pub fn from_xyz(xyz: Xyz) -> Self {
        let (rgb, clipped) = xyz.to_rgb();
        Self {
            rgb,
            xyz,
            lab: xyz.to_lab(),
            hsl: rgb.to_hsl(),
            clipped,
        }
    }

    /// Synchronize all representations with the given CIE L*a*b* color.
    pub fn from_lab(lab: Lab) -> Self {
        let xyz = lab.to_xyz();
        let (rgb, clipped) = xyz.to_rgb();
        Self {
            rgb,
            xyz,
            lab,
            hsl: rgb.to_hsl(),
            clipped,
        }
    }

    /// Synchronize all representations with the given HSL color.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let rgb = hsl.to_rgb();
        let xyz = rgb.to_xyz();
        Self {
            rgb,
            xyz,
            lab: xyz.to_lab(),
            hsl,
            clipped: false,
        }
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorState {
    /// Get the sRGB representation.
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Get the CIE XYZ representation.
    pub const fn xyz(&self) -> Xyz {
        self.xyz
    }

    /// Get the CIE L*a*b* representation.
    pub const fn lab(&self) -> Lab {
        self.lab
    }

    /// Get the HSL representation.
    pub const fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// Determine whether the sRGB representation had to be clipped.
    ///
    /// Only XYZ and CIE L*a*b* can describe colors outside the sRGB gamut. So
    /// this flag can only be set after editing one of them.
    pub const fn clipped(&self) -> bool {
        self.clipped
    }

    /// Format the sRGB representation in uppercase hashed hexadecimal
    /// notation.
    pub fn to_hex(&self) -> String {
        self.rgb.to_hex()
    }

    /// Format the sRGB representation as comma-separated decimal coordinates.
    pub fn to_decimal(&self) -> String {
        self.rgb.to_decimal()
    }

    /// Convert this color state to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl From<Rgb> for ColorState {
    fn from(value: Rgb) -> Self {
        Self::from_rgb(value)
    }
}

impl From<Xyz> for ColorState {
    fn from(value: Xyz) -> Self {
        Self::from_xyz(value)
    }
}

impl From<Lab> for ColorState {
    fn from(value: Lab) -> Self {
        Self::from_lab(value)
    }
}

impl From<Hsl> for ColorState {
    fn from(value: Hsl) -> Self {
        Self::from_hsl(value)
    }
}

#[cfg(test)]
mod test {
    use super::{ColorState, Hsl, Lab, Rgb, Xyz};
    use crate::error::ColorFormatError;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn test_rgb_strings() -> Result<(), ColorFormatError> {
        let blue = Rgb::from_str("#4ea6ff")?;
        assert_eq!(blue, Rgb::new(0x4e, 0xa6, 0xff));
        assert_eq!(blue.to_hex(), "#4EA6FF");
        assert_eq!(blue.to_decimal(), "78, 166, 255");
        assert_eq!(Rgb::new(0, 7, 16).to_hex(), "#000710");
        assert_eq!(Rgb::from_str("abc")?, Rgb::new(0xaa, 0xbb, 0xcc));
        assert!(Rgb::from_str("#abcd").is_err());
        Ok(())
    }

    #[test]
    fn test_float_display() {
        let xyz = Xyz::new(23.0, 52.6, 18.22);
        assert_eq!(format!("{}", xyz), "23.000, 52.600, 18.220");
        assert_eq!(format!("{:.1}", xyz), "23.0, 52.6, 18.2");
        assert_eq!(
            format!("{}", Hsl::new(210.16949, 100.0, 65.29412)),
            "210.169, 100.000, 65.294"
        );
    }

    #[test]
    fn test_equality() {
        assert_eq!(Hsl::new(0.0, 50.0, 50.0), Hsl::new(360.0, 50.0, 50.0));
        assert_eq!(Hsl::new(-90.0, 50.0, 50.0), Hsl::new(270.0, 50.0, 50.0));
        assert_ne!(Lab::new(0.0, 50.0, 50.0), Lab::new(360.0, 50.0, 50.0));
        assert_eq!(Xyz::new(0.1 + 0.2, 0.0, -0.0), Xyz::new(0.3, 0.0, 0.0));

        let mut set = HashSet::new();
        set.insert(Hsl::new(0.0, 50.0, 50.0));
        assert!(set.contains(&Hsl::new(720.0, 50.0, 50.0)));
    }

    #[test]
    fn test_conversions() {
        let blue = Rgb::new(78, 166, 255);
        let xyz = Xyz::from(blue);
        assert_eq!(xyz.to_rgb(), (blue, false));
        assert!(xyz.in_gamut());
        assert_eq!(Lab::from(xyz), blue.to_lab());
        assert_eq!(Xyz::from(Lab::from(xyz)).to_rgb(), (blue, false));
        assert_eq!(Rgb::from(Hsl::from(blue)), blue);

        let violet = Xyz::new(0.0, 0.0, 200.0);
        assert!(!violet.in_gamut());
        assert!(violet.to_rgb().1);
        assert!(violet.to_linear_srgb()[0] < 0.0);
    }

    #[test]
    fn test_color_state() {
        let blue = Rgb::new(78, 166, 255);
        let state = ColorState::from(blue);
        assert_eq!(state.rgb(), blue);
        assert!(!state.clipped());
        assert_eq!(state.to_hex(), "#4EA6FF");

        // Each source is preserved exactly and the rest agrees with it.
        let xyz = Xyz::new(23.0, 52.6, 18.22);
        let from_xyz = ColorState::from_xyz(xyz);
        assert_eq!(from_xyz.xyz().coordinates(), [23.0, 52.6, 18.22]);
        assert_eq!(from_xyz.lab(), xyz.to_lab());
        assert_eq!(from_xyz.hsl(), from_xyz.rgb().to_hsl());

        let lab = Lab::new(50.0, 100.0, -120.0);
        let from_lab = ColorState::from_lab(lab);
        assert_eq!(from_lab.lab().coordinates(), [50.0, 100.0, -120.0]);
        assert!(from_lab.clipped());
        assert_eq!(from_lab.hsl(), from_lab.rgb().to_hsl());

        let hsl = Hsl::new(400.0, 80.0, 30.0);
        let from_hsl = ColorState::from_hsl(hsl);
        assert_eq!(from_hsl.hsl().coordinates(), [400.0, 80.0, 30.0]);
        assert!(!from_hsl.clipped());
        assert_eq!(from_hsl.xyz(), from_hsl.rgb().to_xyz());
    }
}
