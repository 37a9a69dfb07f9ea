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
use fraq::{compare, gcf, Fraction};
use std::cmp::Ordering;

/// Adding a/b and c/d lands on the same reduced terms as constructing
/// (ad + cb)/bd directly.
#[test]
fn test_addition_matches_cross_multiplied_construction() {
	let cases = [(1, 2, 1, 3), (3, 4, 5, 6), (2, 7, 9, 5), (1, 6, 1, 6)];

	for (a, b, c, d) in cases {
		let (a, b, c, d) = (a as f64, b as f64, c as f64, d as f64);
		let sum = Fraction::new(a, b).add(Fraction::new(c, d));
		let direct = Fraction::new(a * d + c * b, b * d);
		assert!(
			sum.equals(direct),
			"{}/{} + {}/{} reduced to {}, expected {}",
			a,
			b,
			c,
			d,
			sum,
			direct
		);
	}
}

/// Reduction is a fixpoint: reconstructing from already-reduced terms
/// changes nothing.
#[test]
fn test_normalization_is_idempotent() {
	for (n, d) in [(4, 16), (14, 28), (5, 3), (0, 5), (-9, 12)] {
		let f = Fraction::new(n as f64, d as f64);
		let again = Fraction::new(f.numerator(), f.denominator());
		assert_eq!(again.numerator(), f.numerator());
		assert_eq!(again.denominator(), f.denominator());
	}
}

/// A fraction survives a trip through its improper string form.
#[test]
fn test_string_round_trip() {
	for (n, d) in [(5, 3), (1, 2), (7, 1), (22, 7)] {
		let f = Fraction::new(n as f64, d as f64);
		let back = Fraction::from_str(&f.to_string()).unwrap();
		assert!(back.equals(f), "{} did not round-trip", f);
	}
}

#[test]
fn test_gcf_of_reducible_integers() {
	assert_eq!(gcf(12, 18), 6);
}

#[test]
fn test_mixed_number_parses_to_improper_form() {
	let f = Fraction::from_str("1 2/3").unwrap();
	assert_eq!(f.to_string(), "5/3");
	assert_eq!(f.to_mixed_string(), "1 2/3");
}

#[test]
fn test_construction_reduces() {
	assert_eq!(Fraction::new(4.0, 16.0).to_string(), "1/4");
}

#[test]
fn test_equality_of_reducible_fractions() {
	assert!(Fraction::new(1.0, 2.0).equals(Fraction::new(2.0, 4.0)));
}

#[test]
fn test_comparison() {
	let third = Fraction::new(1.0, 3.0);
	let half = Fraction::new(1.0, 2.0);
	let two_quarters = Fraction::new(2.0, 4.0);

	assert_eq!(compare(&third, &half), Some(Ordering::Less));
	assert_eq!(compare(&half, &two_quarters), Some(Ordering::Equal));
}

#[test]
fn test_multiplication_reduces() {
	let product = Fraction::new(3.0, 4.0).multiply(Fraction::new(2.0, 3.0));
	assert_eq!(product.to_string(), "1/2");
}

#[test]
fn test_division_by_reciprocal() {
	let quotient = Fraction::new(1.0, 2.0).divide(Fraction::new(1.0, 4.0));
	assert_eq!(quotient.to_string(), "2/1");
}

/// Decimal text converts through the decimal-shift rule, not exact
/// rational conversion.
#[test]
fn test_decimal_strings() {
	assert_eq!(Fraction::from_str("0.5").unwrap().to_string(), "1/2");
	assert_eq!(Fraction::from_str("1.25").unwrap().to_string(), "5/4");
	assert_eq!(Fraction::from_str("0.1").unwrap().to_string(), "1/10");
}

#[test]
fn test_parse_failures_are_explicit() {
	for input in ["", "x/y", "one half", "1 2", "2/"] {
		assert!(
			Fraction::from_str(input).is_err(),
			"expected a parse error for {:?}",
			input
		);
	}
}
