//! Utility module with chromasync's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyRuntimeError, exceptions::PyValueError, prelude::*};

use crate::Representation;

/// An erroneous hexadecimal color.
///
/// Colors in hashed hexadecimal notation have three or six hexadecimal digits,
/// optionally preceded by a `#`. For example, `#4ea6ff`, `4EA6FF`, and `#fff`
/// are all well-formed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    UnexpectedCharacters,

    /// A color format that has a malformed hexadecimal number as coordinate.
    /// For example, `#efg` has a malformed third coordinate.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnexpectedCharacters => {
                f.write_str("hex color should have 3 or 6 ASCII digits, optionally after `#`")
            }
            MalformedHex => {
                f.write_str("hex color coordinates should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An edit that the session refused to apply.
///
/// Either way, the session's color state remains exactly as it was before the
/// edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditError {
    /// The edit has a coordinate that is not a finite number. The coordinate
    /// index is zero-based.
    OutOfDomain {
        representation: Representation,
        coordinate: usize,
    },

    /// The edit arrived while the session was still synchronizing another edit
    /// and the session is configured to reject such edits.
    Reentrant,
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::OutOfDomain {
                representation,
                coordinate,
            } => write!(
                f,
                "{} coordinate #{} should be a finite number but is not",
                representation,
                coordinate + 1
            ),
            Self::Reentrant => {
                f.write_str("edit arrived while another edit was still being synchronized")
            }
        }
    }
}

impl std::error::Error for EditError {}

#[cfg(feature = "pyffi")]
impl From<EditError> for PyErr {
    fn from(value: EditError) -> Self {
        match value {
            EditError::OutOfDomain { .. } => PyValueError::new_err(value.to_string()),
            EditError::Reentrant => PyRuntimeError::new_err(value.to_string()),
        }
    }
}
