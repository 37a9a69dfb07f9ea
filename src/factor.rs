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

/// Ordered prime factors of n, found by trial division from 2 upward.
/// Duplicates are retained, e.g. 12 -> [2, 2, 3]. Factoring is defined
/// for natural numbers only; 0 and 1 have no prime factorization and
/// yield an empty sequence.
pub fn prime_factors(n: u64) -> Vec<u64> {
	if n <= 1 {
		return vec![];
	}

	let mut num = n;
	let mut factors = vec![];
	let mut factor = 2;

	while factor * factor <= num {
		if num % factor == 0 {
			factors.push(factor);
			num /= factor;
		} else {
			factor += 1;
		}
	}

	// Whatever survives trial division past sqrt is itself prime
	if num != 1 {
		factors.push(num);
	}

	factors
}

/// Greatest common factor of a and b: the prime factorizations of both
/// are intersected factor by factor (each shared factor consumes one
/// occurrence on each side) and the shared factors are multiplied
/// together. No shared factors means a gcf of 1.
///
/// Zero has no factorization, so gcf(0, x) is 1 by the same no-common-
/// factor convention, except gcf(0, 0) which is 0 so that a degenerate
/// 0/0 fraction stays degenerate instead of reducing.
pub fn gcf(a: u64, b: u64) -> u64 {
	if a == 0 && b == 0 {
		return 0;
	}
	if a == 0 || b == 0 {
		return 1;
	}

	let fa = prime_factors(a);
	let mut fb = prime_factors(b);

	let mut product = 1;
	for factor in fa {
		if let Some(i) = fb.iter().position(|&f| f == factor) {
			product *= factor;
			fb.remove(i);
		}
	}

	product
}
