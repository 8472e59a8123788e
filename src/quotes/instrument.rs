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
use std::fmt;

/// A single quoted security. Symbol and display name are fixed at
/// declaration; the two prices move independently afterward. A freshly
/// declared instrument is priced at its own cost basis.
#[derive(Clone, Debug, PartialEq)]
pub struct Instrument {
	symbol: String,
	name: String,

	/// Always in per-unit terms
	cost_basis: f64,
	current_price: f64,
}

impl Instrument {
	pub fn new(symbol: &str, name: &str, cost_basis: f64) -> Self {
		Self {
			symbol: symbol.to_string(),
			name: name.to_string(),
			cost_basis,
			current_price: cost_basis,
		}
	}

	pub fn symbol(&self) -> &str {
		&self.symbol
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn cost_basis(&self) -> f64 {
		self.cost_basis
	}

	pub fn current_price(&self) -> f64 {
		self.current_price
	}

	pub fn set_cost_basis(&mut self, cost_basis: f64) {
		self.cost_basis = cost_basis;
	}

	pub fn set_current_price(&mut self, current_price: f64) {
		self.current_price = current_price;
	}

	/// Fractional change from cost basis to current price. Plain IEEE 754
	/// division: a zero cost basis yields ±inf, or NaN when the current
	/// price is also zero. Never an error.
	pub fn change_percent(&self) -> f64 {
		(self.current_price - self.cost_basis) / self.cost_basis
	}
}

impl fmt::Display for Instrument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} Current Price: ${:.2}\n Gain/Loss: {:.2}%",
			self.name,
			self.current_price,
			self.change_percent() * 100.0
		)
	}
}
