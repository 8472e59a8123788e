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
use crate::parsing::filesystem::Filesystem;
use crate::quotes::instrument::Instrument;
use crate::quotes::tape::Tape;
use anyhow::{anyhow, bail, Error};
use regex::Regex;
use std::fs::File;
use std::io;
use std::io::BufRead;

pub struct Parser {
	fs: Filesystem,
	term_regex: Regex,
}

impl Parser {
	pub fn new() -> Self {
		let re = Regex::new(r#""([^"]*)"|(\S+)"#).unwrap();
		Self {
			term_regex: re,
			fs: Filesystem::new(),
		}
	}

	/// Opens and parses the file at file_path into the passed Tape, in a
	/// single pass. The tape format is order-dependent, because price and
	/// cost lines apply to the most recent quote line, so included files
	/// splice in exactly where their include statement appears.
	pub fn parse(
		&mut self,
		file_path: &str,
		tape: &mut Tape,
	) -> Result<(), Error> {
		let file = self.fs.open(file_path)?;
		self.parse_file(file_path, &file, tape)
	}

	/// Include statements in the file may cause this to be called
	/// recursively, so it uses the Filesystem to keep track of files it's
	/// traversed before, and block circular inclusion.
	fn parse_file(
		&mut self,
		path: &str,
		file: &File,
		tape: &mut Tape,
	) -> Result<(), Error> {
		self.fs.declare_file(path)?;

		let reader = io::BufReader::new(file);

		for (i, line) in reader.lines().enumerate() {
			// Chop comments out
			let l = line?
				.trim()
				.split('#')
				.next()
				.unwrap_or_default()
				.trim()
				.to_string();

			// Skip blank lines
			if l.is_empty() {
				continue;
			}

			// Handle includes, which recursively parse when seen
			if l.starts_with("include") {
				let include: Vec<&str> = l.split_whitespace().collect();
				if include.len() != 2 {
					bail!("Invalid include (line {})", i + 1)
				}

				let file = self.fs.open(include[1])?;
				self.parse_file(include[1], &file, tape)?;
				continue;
			}

			// Keyword lines all have different numbers of terms; with the
			// below regex we split all by whitespace except terms surrounded
			// by quotations, which are for multi-word display names
			let parts = self.split_terms(&l);

			match parts[0].as_str() {
				"quote" if parts.len() == 4 => {
					let cost_basis = parts[3]
						.parse::<f64>()
						.map_err(|_| anyhow!("Invalid value (line {})", i + 1))?;

					tape.declare(Instrument::new(
						&parts[1],
						&parts[2],
						cost_basis,
					))
					.map_err(|e| anyhow!("{} (line {})", e, i + 1))?;
				},
				"price" if parts.len() == 2 => {
					let price = parts[1]
						.parse::<f64>()
						.map_err(|_| anyhow!("Invalid value (line {})", i + 1))?;

					tape.update_price(price)
						.map_err(|e| anyhow!("{} (line {})", e, i + 1))?;
				},
				"cost" if parts.len() == 2 => {
					let cost_basis = parts[1]
						.parse::<f64>()
						.map_err(|_| anyhow!("Invalid value (line {})", i + 1))?;

					tape.update_cost(cost_basis)
						.map_err(|e| anyhow!("{} (line {})", e, i + 1))?;
				},
				_ => bail!("Invalid line (line {}): {}", i + 1, l),
			}
		}

		Ok(())
	}

	fn split_terms(&self, input: &str) -> Vec<String> {
		self.term_regex
			.captures_iter(input)
			.map(|cap| {
				// Capture either the quoted group or the unquoted group
				cap.get(1).map_or_else(
					move || cap[2].to_string(),
					|m| m.as_str().to_string(),
				)
			})
			.collect()
	}
}
