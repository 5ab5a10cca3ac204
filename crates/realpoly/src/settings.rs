//! Tolerance settings.
//!
//! Comparisons and formatting read a tolerance either from an explicit
//! [`Tolerance`] argument or from the process-wide [`GlobalSettings`]
//! reachable through [`Polynomial::app_settings`](crate::Polynomial::app_settings).

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{PolyError, Result};

/// Bit pattern of the smallest positive subnormal `f64`.
const DEFAULT_EPSILON_BITS: u64 = 1;

/// Default tolerance: the smallest positive representable `f64`.
pub const DEFAULT_EPSILON: f64 = 5e-324;

static GLOBAL: GlobalSettings = GlobalSettings::new();

/// A validated, non-negative absolute tolerance.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Creates a tolerance, rejecting negative and NaN values.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        (value >= 0.0).then_some(Self(value))
    }

    /// Snapshot of the current process-wide tolerance.
    #[must_use]
    pub fn global() -> Self {
        Self(GLOBAL.epsilon())
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true if `a` and `b` differ by no more than this tolerance.
    #[must_use]
    pub fn within(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.0
    }

    /// Returns true if `c` is numerically zero under this tolerance.
    #[must_use]
    pub fn is_negligible(self, c: f64) -> bool {
        c.abs() < self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(DEFAULT_EPSILON)
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = PolyError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value).ok_or(PolyError::InvalidTolerance(value))
    }
}

/// Plain settings value, as loaded by a host application.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppSettings {
    /// Accuracy of equality comparison between two coefficients.
    pub epsilon: f64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl AppSettings {
    /// Converts the settings into a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidTolerance`] if `epsilon` is negative or NaN.
    pub fn tolerance(&self) -> Result<Tolerance> {
        Tolerance::try_from(self.epsilon)
    }
}

/// The process-wide tolerance shared by all polynomials.
///
/// Reads and writes are single atomic operations with no further
/// synchronization; changing the value while comparisons run on other
/// threads gives an unspecified interleaving.
#[derive(Debug)]
pub struct GlobalSettings {
    epsilon_bits: AtomicU64,
}

impl GlobalSettings {
    /// Creates a standalone settings holder at the default tolerance.
    ///
    /// Polynomials only ever read the shared instance returned by
    /// [`Polynomial::app_settings`](crate::Polynomial::app_settings);
    /// standalone holders are for staging values before applying them.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            epsilon_bits: AtomicU64::new(DEFAULT_EPSILON_BITS),
        }
    }

    pub(crate) fn get() -> &'static Self {
        &GLOBAL
    }

    /// Current tolerance value.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        f64::from_bits(self.epsilon_bits.load(Ordering::Relaxed))
    }

    /// Replaces the tolerance value.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidTolerance`] if `epsilon` is negative or NaN;
    /// the stored value is left unchanged.
    pub fn set_epsilon(&self, epsilon: f64) -> Result<()> {
        let tolerance = Tolerance::try_from(epsilon)?;
        self.epsilon_bits
            .store(tolerance.value().to_bits(), Ordering::Relaxed);
        Ok(())
    }

    /// Applies a full settings value.
    ///
    /// # Errors
    ///
    /// See [`GlobalSettings::set_epsilon`].
    pub fn apply(&self, settings: &AppSettings) -> Result<()> {
        self.set_epsilon(settings.epsilon)
    }

    /// Copies the current state into a plain [`AppSettings`].
    #[must_use]
    pub fn snapshot(&self) -> AppSettings {
        AppSettings {
            epsilon: self.epsilon(),
        }
    }

    /// Restores the default tolerance.
    pub fn reset(&self) {
        self.epsilon_bits
            .store(DEFAULT_EPSILON_BITS, Ordering::Relaxed);
    }
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_smallest_positive_double() {
        assert_eq!(DEFAULT_EPSILON.to_bits(), DEFAULT_EPSILON_BITS);
        assert!(DEFAULT_EPSILON > 0.0);
        assert_eq!(DEFAULT_EPSILON / 2.0, 0.0);
        assert_eq!(AppSettings::default().epsilon, DEFAULT_EPSILON);
        assert_eq!(Tolerance::default().value(), DEFAULT_EPSILON);
        assert_eq!(GlobalSettings::default().epsilon(), DEFAULT_EPSILON);
    }

    #[test]
    fn test_tolerance_rejects_negative_and_nan() {
        assert!(Tolerance::new(-1e-9).is_none());
        assert!(Tolerance::new(f64::NAN).is_none());
        assert!(Tolerance::new(0.0).is_some());
        assert_eq!(
            Tolerance::try_from(-0.5),
            Err(PolyError::InvalidTolerance(-0.5))
        );
        assert!(AppSettings { epsilon: f64::NAN }.tolerance().is_err());
    }

    #[test]
    fn test_within_is_absolute() {
        let t = Tolerance::new(0.1).unwrap();
        assert!(t.within(1000.0, 1000.05));
        assert!(!t.within(1000.0, 1000.2));
        assert!(t.is_negligible(0.05));
        assert!(!t.is_negligible(-0.1));
    }

    #[test]
    fn test_local_settings_do_not_touch_global() {
        // A private instance, so the shared static stays untouched.
        let settings = GlobalSettings::new();
        settings.set_epsilon(1e-5).unwrap();
        assert_eq!(settings.epsilon(), 1e-5);

        assert!(settings.set_epsilon(-1.0).is_err());
        assert_eq!(settings.epsilon(), 1e-5);

        settings.apply(&AppSettings { epsilon: 0.25 }).unwrap();
        assert_eq!(settings.snapshot(), AppSettings { epsilon: 0.25 });

        settings.reset();
        assert_eq!(settings.epsilon(), DEFAULT_EPSILON);
    }
}
