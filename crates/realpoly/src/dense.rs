//! Dense univariate polynomials over `f64`.
//!
//! Coefficients are stored in ascending degree order and never change after
//! construction. Trailing zeros are kept, so the stored degree is the length
//! of the coefficient sequence minus one, not the highest non-zero power.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::{Operand, PolyError, Result};
use crate::settings::{GlobalSettings, Tolerance};

/// An immutable univariate polynomial with real coefficients.
///
/// `coeffs[i]` is the coefficient of `x^i`.
///
/// `Clone` is a shallow duplicate that shares the coefficient buffer with
/// the original; use [`Polynomial::deep_copy`] for an independent buffer.
/// Equality ([`PartialEq`]) compares coefficients within the process-wide
/// tolerance; [`Polynomial::approx_eq`] takes an explicit one.
#[derive(Clone, Debug)]
pub struct Polynomial {
    /// Coefficients in ascending degree order. Never empty.
    coeffs: Arc<[f64]>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients ordered from the constant term up.
    ///
    /// The slice is copied; later changes to it do not affect the polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::EmptyInput`] if `coeffs` is empty.
    pub fn new(coeffs: &[f64]) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(PolyError::EmptyInput);
        }
        Ok(Self {
            coeffs: Arc::from(coeffs),
        })
    }

    /// Creates a polynomial from coefficients that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NullOperand`] if `coeffs` is `None` and
    /// [`PolyError::EmptyInput`] if it is empty.
    pub fn from_option(coeffs: Option<&[f64]>) -> Result<Self> {
        let coeffs = coeffs.ok_or(PolyError::NullOperand {
            side: Operand::Coefficients,
        })?;
        Self::new(coeffs)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self {
            coeffs: Arc::from(vec![c]),
        }
    }

    /// The process-wide settings read by [`PartialEq`], [`Display`](fmt::Display)
    /// and [`Polynomial::equals`].
    #[must_use]
    pub fn app_settings() -> &'static GlobalSettings {
        GlobalSettings::get()
    }

    /// Returns the stored degree (`len - 1`).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the number of stored coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Always false: a polynomial holds at least one coefficient.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the coefficient of `x^index`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::IndexOutOfRange`] unless `0 <= index <= degree`.
    pub fn get(&self, index: isize) -> Result<f64> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.coeffs.get(i).copied())
            .ok_or(PolyError::IndexOutOfRange {
                index,
                degree: self.degree(),
            })
    }

    /// Returns an independent copy of the coefficients.
    #[must_use]
    pub fn coefficients(&self) -> Vec<f64> {
        self.coeffs.to_vec()
    }

    /// Borrows the coefficients.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.coeffs
    }

    /// Returns a duplicate with its own coefficient buffer.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        Self {
            coeffs: Arc::from(&*self.coeffs),
        }
    }

    /// Returns true if both polynomials use the same coefficient buffer.
    #[must_use]
    pub fn shares_storage(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.coeffs, &b.coeffs)
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    #[must_use]
    pub fn calculate_value(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Adds two polynomials.
    ///
    /// The result has `max(len)` coefficients; cancelled leading terms stay.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let (long, short) = if self.len() >= other.len() {
            (&self.coeffs, &other.coeffs)
        } else {
            (&other.coeffs, &self.coeffs)
        };

        let mut result = long.to_vec();
        for (r, c) in result.iter_mut().zip(short.iter()) {
            *r += c;
        }

        Self::from_vec(result)
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::from_vec(self.coeffs.iter().map(|c| -c).collect())
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook convolution).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let n = self.len();
        let m = other.len();
        let mut result = vec![0.0; n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] += a * b;
            }
        }

        Self::from_vec(result)
    }

    /// Multiplies every coefficient by a scalar.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        Self::from_vec(self.coeffs.iter().map(|x| x * c).collect())
    }

    /// Adds two possibly absent polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NullOperand`] naming the absent side.
    pub fn checked_add(lhs: Option<&Self>, rhs: Option<&Self>) -> Result<Self> {
        let (lhs, rhs) = require_operands(lhs, rhs)?;
        Ok(lhs.add(rhs))
    }

    /// Subtracts two possibly absent polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NullOperand`] naming the absent side.
    pub fn checked_sub(lhs: Option<&Self>, rhs: Option<&Self>) -> Result<Self> {
        let (lhs, rhs) = require_operands(lhs, rhs)?;
        Ok(lhs.sub(rhs))
    }

    /// Multiplies two possibly absent polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NullOperand`] naming the absent side.
    pub fn checked_mul(lhs: Option<&Self>, rhs: Option<&Self>) -> Result<Self> {
        let (lhs, rhs) = require_operands(lhs, rhs)?;
        Ok(lhs.mul(rhs))
    }

    /// Compares with an explicit tolerance.
    ///
    /// Equal iff both have the same stored degree and every coefficient pair
    /// differs by at most `tolerance`. Not transitive in general.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.len() == other.len()
            && self
                .coeffs
                .iter()
                .zip(other.coeffs.iter())
                .all(|(&a, &b)| tolerance.within(a, b))
    }

    /// Compares with a possibly absent polynomial under the global tolerance.
    ///
    /// An absent operand is never equal.
    #[must_use]
    pub fn equals(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|o| self.approx_eq(o, Tolerance::global()))
    }

    /// Compares with a value of any type; values that are not polynomials
    /// are never equal.
    #[must_use]
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|o| self.equals(Some(o)))
    }

    /// Renders the polynomial using an explicit tolerance.
    ///
    /// Terms run from the highest power down; terms whose coefficient is
    /// below the tolerance in magnitude are dropped, and an all-negligible
    /// polynomial renders as an empty string. Coefficients are written in
    /// full decimal form without an exponent, so very large or very small
    /// values produce long strings.
    #[must_use]
    pub fn format_with(&self, tolerance: Tolerance) -> String {
        let mut out = String::new();
        for (power, &c) in self.coeffs.iter().enumerate().rev() {
            if tolerance.is_negligible(c) {
                continue;
            }
            let term = match power {
                0 => format!("{c}"),
                1 => format!("{c}*x"),
                _ => format!("{c}*x^{power}"),
            };
            if !out.is_empty() && !term.starts_with('-') {
                out.push('+');
            }
            out.push_str(&term);
        }
        out
    }

    fn from_vec(coeffs: Vec<f64>) -> Self {
        debug_assert!(!coeffs.is_empty());
        Self {
            coeffs: Arc::from(coeffs),
        }
    }
}

fn require_operands<'a>(
    lhs: Option<&'a Polynomial>,
    rhs: Option<&'a Polynomial>,
) -> Result<(&'a Polynomial, &'a Polynomial)> {
    match (lhs, rhs) {
        (Some(l), Some(r)) => Ok((l, r)),
        (None, Some(_)) => Err(PolyError::NullOperand { side: Operand::Lhs }),
        (Some(_), None) => Err(PolyError::NullOperand { side: Operand::Rhs }),
        (None, None) => Err(PolyError::NullOperand {
            side: Operand::Both,
        }),
    }
}

impl TryFrom<Vec<f64>> for Polynomial {
    type Error = PolyError;

    fn try_from(coeffs: Vec<f64>) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(PolyError::EmptyInput);
        }
        Ok(Self::from_vec(coeffs))
    }
}

impl TryFrom<&[f64]> for Polynomial {
    type Error = PolyError;

    fn try_from(coeffs: &[f64]) -> Result<Self> {
        Self::new(coeffs)
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, Tolerance::global())
    }
}

// Tolerance-based equality cannot be captured by a per-coefficient hash,
// so only the stored length participates.
impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coeffs.len().hash(state);
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(Tolerance::global()))
    }
}

impl std::ops::Index<usize> for Polynomial {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coeffs[index]
    }
}

impl std::ops::Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::add(self, rhs)
    }
}

impl std::ops::Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        Polynomial::add(&self, &rhs)
    }
}

impl std::ops::Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::sub(self, rhs)
    }
}

impl std::ops::Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        Polynomial::sub(&self, &rhs)
    }
}

impl std::ops::Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::mul(self, rhs)
    }
}

impl std::ops::Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        Polynomial::mul(&self, &rhs)
    }
}

impl std::ops::Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}

impl std::ops::Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(&self)
    }
}
