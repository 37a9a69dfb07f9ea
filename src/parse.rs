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
use crate::fraction::Fraction;
use anyhow::{bail, Error};
use regex::Regex;
use std::sync::LazyLock;

static INT_PREFIX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[+-]?\d+").unwrap());

static FLOAT_PREFIX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)").unwrap());

/// Parses the fraction literal grammar. The literal is split on the
/// first space into parts a and b:
///
/// - a integral and b containing a slash is a mixed number like
///   "1 2/3", evaluated as the whole part plus the fractional part;
/// - a alone containing a slash is a plain fraction like "2/3";
/// - a alone containing a dot is a decimal like "1.5", converted by
///   the decimal-shift path in normalization;
/// - a alone otherwise is a whole number over 1.
///
/// Anything else is a parse error, as is any component that yields no
/// number. Leading digits followed by junk parse as just the digits,
/// mirroring base-10 integer-prefix semantics.
pub(crate) fn parse(input: &str) -> Result<Fraction, Error> {
	let trimmed = input.trim();
	if trimmed.is_empty() {
		bail!("Empty fraction literal");
	}

	let mut halves = trimmed.splitn(2, ' ');
	let a = halves.next().unwrap_or_default();
	let b = halves.next();

	match b {
		Some(b) => {
			let whole_is_integral = a
				.parse::<f64>()
				.map(|v| v.fract() == 0.0)
				.unwrap_or(false);

			if !whole_is_integral || !b.contains('/') {
				bail!("Unrecognized fraction literal ({})", input);
			}

			// Mixed number: the whole part plus the fractional part
			Ok(parse(a)?.add(parse(b)?))
		},
		None => parse_single(a),
	}
}

/// The single-part grammar: "A/B", "A.B", or a whole number "A".
fn parse_single(a: &str) -> Result<Fraction, Error> {
	if a.contains('/') {
		let mut parts = a.splitn(2, '/');
		let n = component(parts.next().unwrap_or_default())?;
		let d = component(parts.next().unwrap_or_default())?;
		Ok(Fraction::new(n, d))
	} else if a.contains('.') {
		match FLOAT_PREFIX.find(a) {
			Some(m) => {
				// The regex guarantees a parseable float prefix
				Ok(Fraction::from_number(m.as_str().parse()?))
			},
			None => bail!("Invalid decimal literal ({})", a),
		}
	} else {
		Ok(Fraction::from_number(int_prefix(a)?))
	}
}

/// Base-10 integer-prefix parse: consumes an optional sign and leading
/// digits, ignoring anything after them. No leading digits at all is
/// an error.
pub(crate) fn int_prefix(s: &str) -> Result<f64, Error> {
	match INT_PREFIX.find(s.trim_start()) {
		Some(m) => Ok(m.as_str().parse()?),
		None => bail!("Invalid integer literal ({})", s),
	}
}

/// One side of a slash literal, parsed strictly as a number. Decimal
/// components like "2.5/3" are allowed here; normalization shifts them
/// back out.
fn component(s: &str) -> Result<f64, Error> {
	match s.trim().parse::<f64>() {
		Ok(v) => Ok(v),
		Err(_) => bail!("Invalid fraction component ({})", s),
	}
}
