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

//! Fraction arithmetic on fixed-width numbers: construction from
//! numeric and textual forms (including mixed numbers like "1 2/3"),
//! reduction to lowest terms, the four basic operations, and equality
//! and ordering comparisons.

pub mod factor;
pub mod fraction;
mod parse;

pub use factor::{gcf, prime_factors};
pub use fraction::{compare, Fraction, IntoFraction, ToRatio};
