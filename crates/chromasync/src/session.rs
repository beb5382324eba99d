//! The consistency controller keeping four color representations in sync.
//!
//! A [`Session`] owns the single authoritative [`ColorState`]. Each accepted
//! [`Edit`] names one representation as the source of truth, replaces the
//! color state wholesale with the source and the three representations derived
//! from it, and then notifies all [`Observer`]s. While that happens, the
//! session is [`Phase::Updating`] and further edits are either rejected or
//! queued, depending on the session's [`Reentrancy`] policy. They are never
//! interleaved with the running edit.
//!
//!
//! # Example
//!
//! ```
//! # use chromasync::{Lab, Outcome, Session};
//! # use std::sync::{Arc, Mutex};
//! let session = Session::from_hex("#4ea6ff")?;
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! session.subscribe(move |state: &chromasync::ColorState| {
//!     sink.lock().unwrap().push(state.to_hex());
//! });
//!
//! let outcome = session.apply_edit(Lab::new(50.0, 100.0, -120.0))?;
//! let Outcome::Applied(state) = outcome else { panic!("edit was deferred") };
//! assert!(state.clipped());
//! assert_eq!(seen.lock().unwrap().len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use log::Level;

use crate::error::{ColorFormatError, EditError};
use crate::opt::{Options, Reentrancy};
use crate::{ColorState, Float, Hsl, Lab, Rgb, Xyz};

/// The four color representations.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "chromasync.color")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Representation {
    Rgb,
    Xyz,
    Lab,
    Hsl,
}

impl Representation {
    /// Get this representation's human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "sRGB",
            Self::Xyz => "CIE XYZ",
            Self::Lab => "CIE L*a*b*",
            Self::Hsl => "HSL",
        }
    }
}

impl std::fmt::Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

/// An edit of one color representation.
///
/// The edit carries the representation's complete new value, which becomes
/// the source of truth for the next color state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    Rgb(Rgb),
    Xyz(Xyz),
    Lab(Lab),
    Hsl(Hsl),
}

impl Edit {
    /// Get the edited representation.
    pub const fn representation(&self) -> Representation {
        match self {
            Self::Rgb(_) => Representation::Rgb,
            Self::Xyz(_) => Representation::Xyz,
            Self::Lab(_) => Representation::Lab,
            Self::Hsl(_) => Representation::Hsl,
        }
    }

    /// Validate this edit.
    ///
    /// 24-bit colors are valid by construction. The other representations
    /// accept any finite coordinates, including out-of-convention ones.
    pub fn validate(&self) -> Result<(), EditError> {
        let coordinates: &[Float; 3] = match self {
            Self::Rgb(_) => return Ok(()),
            Self::Xyz(xyz) => xyz.as_ref(),
            Self::Lab(lab) => lab.as_ref(),
            Self::Hsl(hsl) => hsl.as_ref(),
        };

        match coordinates.iter().position(|c| !c.is_finite()) {
            Some(coordinate) => Err(EditError::OutOfDomain {
                representation: self.representation(),
                coordinate,
            }),
            None => Ok(()),
        }
    }

    /// Compute the color state with this edit as source of truth.
    pub fn synchronize(&self) -> ColorState {
        match *self {
            Self::Rgb(rgb) => ColorState::from_rgb(rgb),
            Self::Xyz(xyz) => ColorState::from_xyz(xyz),
            Self::Lab(lab) => ColorState::from_lab(lab),
            Self::Hsl(hsl) => ColorState::from_hsl(hsl),
        }
    }
}

impl From<Rgb> for Edit {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<Xyz> for Edit {
    fn from(value: Xyz) -> Self {
        Self::Xyz(value)
    }
}

impl From<Lab> for Edit {
    fn from(value: Lab) -> Self {
        Self::Lab(value)
    }
}

impl From<Hsl> for Edit {
    fn from(value: Hsl) -> Self {
        Self::Hsl(value)
    }
}

/// The outcome of an accepted edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The edit has been applied and all observers have been notified. The
    /// color state is the one resulting from this edit. Edits queued while it
    /// was being applied have been applied as well by the time the caller sees
    /// this outcome.
    Applied(ColorState),
    /// The edit arrived while another edit was being applied and has been
    /// queued. It will be applied before the session returns to idle, unless
    /// an observer panics first, which discards all queued edits.
    Deferred,
    /// The edit arrived while another edit was being applied but would result
    /// in the same color state as the edit it would follow. It has been
    /// dropped. Observers that write synchronized values back into the
    /// session receive this outcome once the values have settled.
    Coalesced,
}

/// A session's phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Phase {
    Idle = 0,
    Updating = 1,
}

impl Phase {
    const fn from_u8(value: u8) -> Self {
        if value == Self::Updating as u8 {
            Self::Updating
        } else {
            Self::Idle
        }
    }
}

/// An observer of color state changes.
///
/// Observers are notified in registration order, after the new color state
/// has been installed and without any of the session's locks held. Any
/// `Fn(&ColorState) + Send + Sync` closure is an observer.
pub trait Observer: Send + Sync {
    /// Handle the new color state.
    fn on_change(&self, state: &ColorState);
}

impl<F> Observer for F
where
    F: Fn(&ColorState) + Send + Sync,
{
    fn on_change(&self, state: &ColorState) {
        self(state)
    }
}

// ====================================================================================================================

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Reset an updating session to idle should an observer panic.
///
/// Queued edits are discarded, since they were issued relative to a state
/// that has been superseded by the time the next edit arrives.
struct UpdateGuard<'a>(&'a Session);

impl Drop for UpdateGuard<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let mut queue = lock(&self.0.queue);
            if !queue.is_empty() && self.0.is_audible(Level::Debug) {
                log::debug!("discarding {} queued edits after panic", queue.len());
            }
            queue.clear();
            self.0.phase.store(Phase::Idle as u8, Ordering::Release);
        }
    }
}

/// A color synchronization session.
///
/// The session is the one writer of its color state. It is `Send` and `Sync`,
/// so the same session can be shared between threads, e.g., by wrapping it in
/// an [`Arc`]. Edits are serialized by an atomic compare-and-set on the
/// session's phase. The edit that wins the compare-and-set also applies all
/// edits queued in the meantime.
#[cfg_attr(feature = "pyffi", pyclass(frozen, module = "chromasync.color"))]
pub struct Session {
    options: Options,
    phase: AtomicU8,
    state: RwLock<ColorState>,
    observers: Mutex<Vec<Arc<dyn Observer>>>,
    queue: Mutex<VecDeque<Edit>>,
}

impl Session {
    /// Create a new session with the default options but the given seed
    /// color.
    pub fn new(seed: Rgb) -> Self {
        Self::with_options(Options::builder().seed(seed).build())
    }

    /// Create a new session with the given options.
    ///
    /// The initial color state is derived from the seed color with sRGB as
    /// the source of truth.
    pub fn with_options(options: Options) -> Self {
        let state = ColorState::from_rgb(options.seed());
        let session = Self {
            options,
            phase: AtomicU8::new(Phase::Idle as u8),
            state: RwLock::new(state),
            observers: Mutex::new(Vec::new()),
            queue: Mutex::new(VecDeque::new()),
        };

        if session.is_audible(Level::Debug) {
            log::debug!("seeded color session with {}", state.rgb());
        }
        session
    }

    /// Create a new session seeded with the color in hexadecimal notation.
    pub fn from_hex(s: &str) -> Result<Self, ColorFormatError> {
        Ok(Self::new(s.parse()?))
    }

    /// Get this session's options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get this session's phase.
    pub fn phase(&self) -> Phase {
        Phase::from_u8(self.phase.load(Ordering::Acquire))
    }

    /// Get a snapshot of the current color state.
    pub fn state(&self) -> ColorState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register an observer.
    ///
    /// An observer registered while an edit is being propagated is first
    /// notified for the next edit.
    pub fn subscribe<O>(&self, observer: O)
    where
        O: Observer + 'static,
    {
        lock(&self.observers).push(Arc::new(observer));
    }

    /// Reset the color state to the seed color.
    pub fn reset(&self) -> Result<Outcome, EditError> {
        self.apply_edit(Edit::Rgb(self.options.seed()))
    }

    /// Apply the edit.
    ///
    /// If the edit has a coordinate that is not finite, this method fails with
    /// [`EditError::OutOfDomain`]. If the session is already updating and
    /// configured to [`Reentrancy::Reject`], this method fails with
    /// [`EditError::Reentrant`]. Either way, the color state remains
    /// unchanged. If the session is configured to [`Reentrancy::Queue`]
    /// instead, this method queues the edit and returns
    /// [`Outcome::Deferred`]. If the queued edit would not change the color
    /// state it follows, i.e., the current state or the state resulting from
    /// the last queued edit, this method drops the edit and returns
    /// [`Outcome::Coalesced`].
    ///
    /// Otherwise, this method replaces the color state with one derived from
    /// the edit, notifies all observers, applies queued edits, and returns
    /// [`Outcome::Applied`] with the state resulting from this edit.
    pub fn apply_edit(&self, edit: impl Into<Edit>) -> Result<Outcome, EditError> {
        let edit = edit.into();
        if let Err(error) = edit.validate() {
            if self.is_audible(Level::Debug) {
                log::debug!("rejected edit {:?}: {}", edit, error);
            }
            return Err(error);
        }

        if self.try_enter() {
            return Ok(Outcome::Applied(self.run(edit)));
        }

        match self.options.reentrancy() {
            Reentrancy::Reject => {
                if self.is_audible(Level::Debug) {
                    log::debug!("rejected re-entrant edit {:?}", edit);
                }
                Err(EditError::Reentrant)
            }
            Reentrancy::Queue => {
                let mut queue = lock(&self.queue);
                // The drainer marks the session idle only while holding the
                // queue lock, so it may have done so since the last attempt.
                if self.try_enter() {
                    drop(queue);
                    return Ok(Outcome::Applied(self.run(edit)));
                }

                // Writing back a synchronized value must settle rather than
                // loop, so an edit that changes nothing is dropped.
                let pending = match queue.back() {
                    Some(last) => last.synchronize(),
                    None => self.state(),
                };
                if edit.synchronize() == pending {
                    if self.is_audible(Level::Debug) {
                        log::debug!("coalesced re-entrant edit {:?}", edit);
                    }
                    return Ok(Outcome::Coalesced);
                }

                if self.is_audible(Level::Debug) {
                    log::debug!("deferred re-entrant edit {:?}", edit);
                }
                queue.push_back(edit);
                Ok(Outcome::Deferred)
            }
        }
    }

    fn try_enter(&self) -> bool {
        self.phase
            .compare_exchange(
                Phase::Idle as u8,
                Phase::Updating as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Apply the edit and then all queued edits before returning to idle. The
    /// caller must have entered the updating phase.
    fn run(&self, edit: Edit) -> ColorState {
        let guard = UpdateGuard(self);
        let state = self.synchronize(edit);

        loop {
            let next = {
                let mut queue = lock(&self.queue);
                match queue.pop_front() {
                    Some(next) => next,
                    None => {
                        self.phase.store(Phase::Idle as u8, Ordering::Release);
                        break;
                    }
                }
            };
            self.synchronize(next);
        }

        drop(guard);
        state
    }

    fn synchronize(&self, edit: Edit) -> ColorState {
        let state = edit.synchronize();
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = state;

        if self.is_audible(Level::Debug) {
            log::debug!(
                "applied {} edit, now {}{}",
                edit.representation(),
                state.rgb(),
                if state.clipped() { " (clipped)" } else { "" }
            );
        }
        if self.is_audible(Level::Trace) {
            log::trace!(
                "xyz {} / lab {} / hsl {}",
                state.xyz(),
                state.lab(),
                state.hsl()
            );
        }

        let observers = lock(&self.observers).clone();
        for observer in observers.iter() {
            observer.on_change(&state);
        }

        state
    }

    fn is_audible(&self, level: Level) -> bool {
        self.options.volume().admits(level)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_options(Options::default())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("options", &self.options)
            .field("phase", &self.phase())
            .field("state", &self.state())
            .field("observers", &lock(&self.observers).len())
            .finish()
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Session {
    /// Create a new session seeded with the given color or, if omitted,
    /// `#4EA6FF`.
    #[new]
    #[pyo3(signature = (seed=None))]
    pub fn py_new(seed: Option<Rgb>) -> Self {
        Self::new(seed.unwrap_or(crate::opt::DEFAULT_SEED))
    }

    /// Get the current color state.
    #[pyo3(name = "state")]
    pub fn py_state(&self) -> ColorState {
        self.state()
    }

    /// Determine whether the session is updating.
    pub fn is_updating(&self) -> bool {
        self.phase() == Phase::Updating
    }

    /// Reset the color state to the seed color.
    #[pyo3(name = "reset")]
    pub fn py_reset(&self) -> PyResult<Option<ColorState>> {
        Ok(self.reset()?.into())
    }

    /// Edit the sRGB representation.
    pub fn edit_rgb(&self, rgb: Rgb) -> PyResult<Option<ColorState>> {
        Ok(self.apply_edit(rgb)?.into())
    }

    /// Edit the CIE XYZ representation.
    pub fn edit_xyz(&self, xyz: Xyz) -> PyResult<Option<ColorState>> {
        Ok(self.apply_edit(xyz)?.into())
    }

    /// Edit the CIE L*a*b* representation.
    pub fn edit_lab(&self, lab: Lab) -> PyResult<Option<ColorState>> {
        Ok(self.apply_edit(lab)?.into())
    }

    /// Edit the HSL representation.
    pub fn edit_hsl(&self, hsl: Hsl) -> PyResult<Option<ColorState>> {
        Ok(self.apply_edit(hsl)?.into())
    }

    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl From<Outcome> for Option<ColorState> {
    fn from(value: Outcome) -> Self {
        match value {
            Outcome::Applied(state) => Some(state),
            Outcome::Deferred | Outcome::Coalesced => None,
        }
    }
}
