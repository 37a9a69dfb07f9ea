/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::factor::gcf;
use crate::parse;
use anyhow::Error;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// A rational number held as a numerator over a denominator, reduced
/// to lowest terms on construction and after every operation. The
/// fields are f64s: they may transiently hold decimal values before
/// normalization shifts the decimal point out, and very large terms
/// lose precision rather than growing arbitrarily. Degenerate results
/// such as division by zero propagate as NaN rather than erroring.
///
/// The sign rides on whichever field carried it in; a negative
/// denominator is representable and is not moved to the numerator.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Fraction {
	numerator: f64,
	denominator: f64,

	/// Whether this fraction and everything derived from it reduces to
	/// lowest terms. Fixed at construction; when false, normalization
	/// is a pass-through.
	simplify: bool,
}

impl Fraction {
	pub fn new(numerator: f64, denominator: f64) -> Self {
		let mut out = Self {
			numerator,
			denominator,
			simplify: true,
		};
		out.normalize();
		out
	}

	/// As new, but keeps the terms exactly as given, skipping
	/// reduction here and in every operation derived from the result.
	pub fn unsimplified(numerator: f64, denominator: f64) -> Self {
		Self {
			numerator,
			denominator,
			simplify: false,
		}
	}

	/// A whole (or decimal) number over 1. Decimal input is shifted
	/// into integer terms by normalization, so 0.5 lands on 1/2.
	pub fn from_number(numerator: f64) -> Self {
		Self::new(numerator, 1.0)
	}

	/// Parses a fraction literal: "2/3", a mixed number "1 2/3", a
	/// decimal "1.5", or a whole number "7".
	pub fn from_str(input: &str) -> Result<Self, Error> {
		parse::parse(input)
	}

	/// Builds a fraction from two integer strings, using base-10
	/// integer-prefix semantics for each (parsing stops at the first
	/// non-digit). Decimal text is not accepted in this position.
	pub fn from_str_pair(
		numerator: &str,
		denominator: &str,
	) -> Result<Self, Error> {
		let n = parse::int_prefix(numerator)?;
		let d = parse::int_prefix(denominator)?;
		Ok(Self::new(n, d))
	}

	pub fn numerator(&self) -> f64 {
		self.numerator
	}

	pub fn denominator(&self) -> f64 {
		self.denominator
	}

	/// Reduces the fraction to its lowest integer terms, e.g. 4/16 to
	/// 1/4. Called once by every constructor and after every math op.
	/// Does nothing when simplification is off.
	///
	/// Non-integer fields are first coerced to integers by shifting
	/// the decimal point: the field is rounded to 9 places to shake
	/// out float noise, and both fields are multiplied by 10 to the
	/// power of its printed decimal digit count. The shift is driven
	/// by the digit count, not exact rational conversion, so a float
	/// third lands on 333333333/1000000000.
	fn normalize(&mut self) {
		if !self.simplify {
			return;
		}

		if is_decimal(self.denominator) {
			let scale = decimal_scale(self.denominator);
			self.denominator = (self.denominator * scale).round();
			self.numerator *= scale;
		}

		if is_decimal(self.numerator) {
			let scale = decimal_scale(self.numerator);
			self.numerator = (self.numerator * scale).round();
			self.denominator *= scale;
		}

		// gcf(0, 0) is 0, so a 0/0 fraction degenerates to NaN here
		let g = gcf(natural(self.numerator), natural(self.denominator));
		self.numerator /= g as f64;
		self.denominator /= g as f64;
	}

	/// Scales both terms by some factor, preserving the value.
	fn rescale(&mut self, factor: f64) {
		self.numerator *= factor;
		self.denominator *= factor;
	}

	pub fn add(&self, other: impl IntoFraction) -> Self {
		let mut a = *self;
		let mut b = other.into_fraction();

		// Cross-rescale both sides onto the common denominator
		let denominator = a.denominator;
		a.rescale(b.denominator);
		b.rescale(denominator);

		a.numerator += b.numerator;
		a.normalize();
		a
	}

	pub fn subtract(&self, other: impl IntoFraction) -> Self {
		let mut a = *self;
		let mut b = other.into_fraction();

		let denominator = a.denominator;
		a.rescale(b.denominator);
		b.rescale(denominator);

		a.numerator -= b.numerator;
		a.normalize();
		a
	}

	pub fn multiply(&self, other: impl IntoFraction) -> Self {
		let mut a = *self;
		let b = other.into_fraction();

		a.numerator *= b.numerator;
		a.denominator *= b.denominator;
		a.normalize();
		a
	}

	/// Multiplies by the reciprocal. A divisor with a zero numerator
	/// is not guarded; the result degenerates to a poisoned value.
	pub fn divide(&self, other: impl IntoFraction) -> Self {
		let mut a = *self;
		let b = other.into_fraction();

		a.numerator *= b.denominator;
		a.denominator *= b.numerator;
		a.normalize();
		a
	}

	/// Structural equality of normalized forms: both sides are reduced
	/// through a fresh simplifying pass, then the terms are compared
	/// exactly. This is not cross-multiplied value equality, so values
	/// that reduce to different terms under the decimal-shift rule in
	/// normalization can compare unequal despite being mathematically
	/// equal, and NaN-poisoned fractions never compare equal. See
	/// [`compare`] for the value-based ordering.
	pub fn equals(&self, other: impl IntoFraction) -> bool {
		let b = other.into_fraction();

		// A fresh construction re-normalizes regardless of either
		// side's simplify setting
		let a = Fraction::new(self.numerator, self.denominator);
		let b = Fraction::new(b.numerator, b.denominator);

		a.numerator == b.numerator && a.denominator == b.denominator
	}

	/// Mixed-number form, e.g. 5/3 renders as "1 2/3". A zero whole
	/// part and a zero remainder are each omitted; a fraction equal to
	/// zero renders as "0".
	pub fn to_mixed_string(&self) -> String {
		let whole = (self.numerator / self.denominator).floor();
		let numerator = self.numerator % self.denominator;

		let mut parts = vec![];
		if whole != 0.0 {
			parts.push(whole.to_string());
		}
		if numerator != 0.0 {
			parts.push(format!("{}/{}", numerator, self.denominator));
		}

		if parts.is_empty() {
			"0".to_string()
		} else {
			parts.join(" ")
		}
	}
}

/// Conversion into a Fraction at operator boundaries, so the math ops
/// accept plain numbers alongside fractions. String conversion is
/// fallible and therefore not implicit; parse strings up front with
/// [`Fraction::from_str`].
pub trait IntoFraction {
	fn into_fraction(self) -> Fraction;
}

impl IntoFraction for Fraction {
	fn into_fraction(self) -> Fraction {
		self
	}
}

impl IntoFraction for &Fraction {
	fn into_fraction(self) -> Fraction {
		*self
	}
}

impl IntoFraction for f64 {
	fn into_fraction(self) -> Fraction {
		Fraction::from_number(self)
	}
}

impl IntoFraction for i64 {
	fn into_fraction(self) -> Fraction {
		Fraction::from_number(self as f64)
	}
}

impl IntoFraction for i32 {
	fn into_fraction(self) -> Fraction {
		Fraction::from_number(self as f64)
	}
}

/// A value comparable as a floating-point ratio.
pub trait ToRatio {
	fn to_ratio(&self) -> f64;
}

impl ToRatio for Fraction {
	fn to_ratio(&self) -> f64 {
		self.numerator / self.denominator
	}
}

impl ToRatio for f64 {
	fn to_ratio(&self) -> f64 {
		*self
	}
}

impl ToRatio for i64 {
	fn to_ratio(&self) -> f64 {
		*self as f64
	}
}

impl ToRatio for i32 {
	fn to_ratio(&self) -> f64 {
		*self as f64
	}
}

/// Orders two fraction-like values by their floating-point ratios.
/// The comparison happens in f64 space and can lose precision for
/// large terms; it is deliberately not exact cross-multiplication,
/// and it is a different relation from [`Fraction::equals`], which
/// compares normalized terms structurally. Returns None when either
/// side is NaN-poisoned.
pub fn compare(a: &impl ToRatio, b: &impl ToRatio) -> Option<Ordering> {
	a.to_ratio().partial_cmp(&b.to_ratio())
}

/// Pretty-prints the improper form "numerator/denominator" over the
/// raw terms; integral f64s print without a decimal point.
impl fmt::Display for Fraction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.numerator, self.denominator)
	}
}

/// Does v hold a value with a fractional part to shift out? NaN and
/// infinities have none and are left for the gcf step to poison.
fn is_decimal(v: f64) -> bool {
	v.is_finite() && v.fract() != 0.0
}

/// 10 to the power of the decimal digit count of v once rounded to 9
/// places, per its printed form: 0.1 scales by 10, a float third
/// rounds to 0.333333333 and scales by 10^9.
fn decimal_scale(v: f64) -> f64 {
	let rounded = (v * 1e9).round() / 1e9;
	let printed = rounded.to_string();
	let places = printed.split('.').nth(1).map_or(0, str::len);
	10f64.powi(places as i32)
}

/// Integer magnitude of a term for factoring. NaN maps to 0 and the
/// gcf zero conventions take it from there; magnitudes beyond u64
/// saturate, consistent with the fixed-width backing.
fn natural(v: f64) -> u64 {
	v.abs().trunc() as u64
}

// -----------------
// -- BOILERPLATE --
// -----------------

impl Add for Fraction {
	type Output = Self;

	fn add(self, rhs: Self) -> Self::Output {
		Fraction::add(&self, rhs)
	}
}

impl Add<f64> for Fraction {
	type Output = Self;

	fn add(self, rhs: f64) -> Self::Output {
		Fraction::add(&self, rhs)
	}
}

impl Sub for Fraction {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self::Output {
		self.subtract(rhs)
	}
}

impl Sub<f64> for Fraction {
	type Output = Self;

	fn sub(self, rhs: f64) -> Self::Output {
		self.subtract(rhs)
	}
}

impl Mul for Fraction {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self::Output {
		self.multiply(rhs)
	}
}

impl Mul<f64> for Fraction {
	type Output = Self;

	fn mul(self, rhs: f64) -> Self::Output {
		self.multiply(rhs)
	}
}

impl Div for Fraction {
	type Output = Self;

	fn div(self, rhs: Self) -> Self::Output {
		self.divide(rhs)
	}
}

impl Div<f64> for Fraction {
	type Output = Self;

	fn div(self, rhs: f64) -> Self::Output {
		self.divide(rhs)
	}
}
