//! Helper module with the options for color synchronization sessions.
//!
//! This module provides the options for a [`Session`](crate::Session) and the
//! corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use chromasync::opt::{Options, Reentrancy};
//! # use chromasync::Rgb;
//! let options = Options::builder()
//!     .seed(Rgb::new(0, 0, 0))
//!     .reentrancy(Reentrancy::Queue)
//!     .build();
//!
//! assert_eq!(options.seed(), Rgb::new(0, 0, 0));
//! assert_eq!(options.reentrancy(), Reentrancy::Queue);
//! ```

use crate::Rgb;

/// The diagnostic logging volume.
///
/// The volume caps which records a session passes on to the [`log`] facade.
/// The session never installs a logger itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Volume {
    /// Emit no records.
    #[default]
    Silent,
    /// Emit debug records for edits, including rejected and deferred ones.
    Regular,
    /// Also emit trace records with every synchronized color state.
    Detailed,
}

impl Volume {
    /// Determine whether records at the given level should be emitted.
    pub(crate) fn admits(&self, level: log::Level) -> bool {
        match self {
            Self::Silent => false,
            Self::Regular => level <= log::Level::Debug,
            Self::Detailed => true,
        }
    }
}

/// The policy for edits that arrive while a session is synchronizing.
///
/// Such edits typically originate from an observer that writes synchronized
/// values back into input widgets, which then report a change of their own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reentrancy {
    /// Reject the edit with [`EditError::Reentrant`](crate::error::EditError)
    /// and leave the color state untouched.
    #[default]
    Reject,
    /// Queue the edit and apply it after the current edit, including its
    /// propagation to observers, has completed. Queued edits are applied in
    /// arrival order.
    Queue,
}

/// The seed color of the original color picker.
pub const DEFAULT_SEED: Rgb = Rgb::new(0x4e, 0xa6, 0xff);

#[derive(Clone, Debug)]
struct OptionData {
    seed: Rgb,
    reentrancy: Reentrancy,
    volume: Volume,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            seed: DEFAULT_SEED,
            reentrancy: Reentrancy::Reject,
            volume: Volume::Silent,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the seed color.
    pub fn seed(&mut self, seed: Rgb) -> &mut Self {
        self.0.seed = seed;
        self
    }

    /// Set the re-entrancy policy.
    pub fn reentrancy(&mut self, reentrancy: Reentrancy) -> &mut Self {
        self.0.reentrancy = reentrancy;
        self
    }

    /// Set the volume.
    pub fn volume(&mut self, volume: Volume) -> &mut Self {
        self.0.volume = volume;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but with regular debugging output
    /// enabled.
    pub fn with_log() -> Options {
        Self::builder().volume(Volume::Regular).build()
    }

    /// Instantiate the default options but with detailed debugging output
    /// enabled.
    pub fn with_detailed_log() -> Options {
        Self::builder().volume(Volume::Detailed).build()
    }

    /// Get the seed color.
    pub fn seed(&self) -> Rgb {
        self.0.seed
    }

    /// Get the re-entrancy policy.
    pub fn reentrancy(&self) -> Reentrancy {
        self.0.reentrancy
    }

    /// Get the volume.
    pub fn volume(&self) -> Volume {
        self.0.volume
    }
}

#[cfg(test)]
mod test {
    use super::{Options, Reentrancy, Volume, DEFAULT_SEED};
    use log::Level;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.seed(), DEFAULT_SEED);
        assert_eq!(options.seed().to_hex(), "#4EA6FF");
        assert_eq!(options.reentrancy(), Reentrancy::Reject);
        assert_eq!(options.volume(), Volume::Silent);
        assert_eq!(Options::with_log().volume(), Volume::Regular);
    }

    #[test]
    fn test_volume() {
        assert!(!Volume::Silent.admits(Level::Error));
        assert!(Volume::Regular.admits(Level::Debug));
        assert!(!Volume::Regular.admits(Level::Trace));
        assert!(Volume::Detailed.admits(Level::Trace));
    }
}
