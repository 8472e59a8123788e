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

/// Struct for handling and displaying an ordered list of instruments,
/// for reports
pub struct CardReporter {
	instruments: Vec<Instrument>,
}

impl CardReporter {
	pub fn new(instruments: Vec<Instrument>) -> Self {
		Self { instruments }
	}

	/// Prints the two-line summary card for each instrument, in tape
	/// order, separated by blank lines.
	pub fn print_cards(&self) {
		if self.instruments.is_empty() {
			println!("No matching quotes");
			return;
		}

		let cards: Vec<String> =
			self.instruments.iter().map(|i| i.to_string()).collect();

		println!("{}", cards.join("\n\n"));
	}

	/// Prints one line per instrument with its symbol and raw fractional
	/// change, full precision.
	pub fn print_changes(&self) {
		if self.instruments.is_empty() {
			println!("No matching quotes");
			return;
		}

		for instrument in &self.instruments {
			println!(
				"{} {}",
				instrument.symbol(),
				instrument.change_percent()
			);
		}
	}
}
