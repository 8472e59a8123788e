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
use crate::quotes::instrument::Instrument;
use anyhow::{bail, Error};

/// The central data structure of this system that takes input from the
/// parser and assembles it into an ordered set of instruments. Price and
/// cost updates always apply to the most recently declared instrument,
/// so a tape reads top to bottom as a history of what happened.
///
/// Once assembled, the tape hands its instruments to a reporter.
pub struct Tape {
	instruments: Vec<Instrument>,

	/// Skip duplicate symbol validation
	lenient_mode: bool,

	allow_warnings: bool,
}

impl Tape {
	pub fn new(lenient: bool, warnings: bool) -> Self {
		Self {
			instruments: vec![],
			lenient_mode: lenient,
			allow_warnings: warnings,
		}
	}

	// -----------
	// -- INPUT --
	// -----------

	pub fn declare(&mut self, instrument: Instrument) -> Result<(), Error> {
		if !self.lenient_mode
			&& self
				.instruments
				.iter()
				.any(|i| i.symbol() == instrument.symbol())
		{
			bail!("Symbol {} declared twice", instrument.symbol())
		}

		if self.allow_warnings && instrument.cost_basis() == 0.0 {
			println!(
				"[{}] zero cost basis makes change undefined \
				(is this intentional?)",
				instrument.symbol()
			);
		}

		self.instruments.push(instrument);

		Ok(())
	}

	pub fn update_price(&mut self, price: f64) -> Result<(), Error> {
		match self.instruments.last_mut() {
			Some(instrument) => {
				instrument.set_current_price(price);
				Ok(())
			},
			None => bail!("Orphaned price update"),
		}
	}

	pub fn update_cost(&mut self, cost_basis: f64) -> Result<(), Error> {
		let instrument = match self.instruments.last_mut() {
			Some(instrument) => instrument,
			None => bail!("Orphaned cost update"),
		};

		instrument.set_cost_basis(cost_basis);

		if self.allow_warnings && cost_basis == 0.0 {
			println!(
				"[{}] zero cost basis makes change undefined \
				(is this intentional?)",
				instrument.symbol()
			);
		}

		Ok(())
	}

	// ------------
	// -- OUTPUT --
	// ------------

	/// Applies the symbol filter, if any, and returns the instruments in
	/// declaration order. Consumes this.
	pub fn take_instruments(self, filter: Option<&str>) -> Vec<Instrument> {
		match filter {
			Some(symbol) => self
				.instruments
				.into_iter()
				.filter(|i| i.symbol() == symbol)
				.collect(),
			None => self.instruments,
		}
	}
}
