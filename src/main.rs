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
use crate::reports::card_reporter::CardReporter;
use anyhow::{bail, Error};
use clap::{Parser, ValueEnum};
use quotes::tape::Tape;
use std::cmp::PartialEq;

mod config;
mod parsing;
mod quotes;
mod reports;

#[derive(Parser)]
#[command(name = "stoq", version = "1.0", about = "Plain text stock quote tool")]
struct Cli {
	// ----------------
	// -- POSITIONAL --
	// ----------------
	/// The command to execute
	command: Directive,

	/// Limits output to the given symbol
	#[arg(required = false)]
	term: Option<String>,

	// -----------
	// -- FLAGS --
	// -----------
	/// Specifies the input file
	#[arg(short)]
	file: Option<String>,

	/// Custom config file location (default: ~/.config/stoq/config.toml)
	#[arg(long)]
	config: Option<String>,

	/// Ignore directives designed to catch and correct bad input data
	#[arg(long)]
	lenient: bool,
}

#[derive(ValueEnum, Clone, PartialEq)]
enum Directive {
	Show,   // summary card per instrument
	Change, // raw fractional change per instrument

	Check, // find possible data integrity concerns
}

fn main() -> Result<(), Error> {
	let args = Cli::parse();

	let fs = Filesystem::new();

	let mut tape = Tape::new(args.lenient, args.command == Directive::Check);

	let file = match &args.file {
		Some(f) => f.clone(),
		None => {
			// Right now, only this fallback inspects config in any way, so we
			// don't bother to check for it or parse it until this point
			let config = fs.get_config(args.config.as_ref())?;
			match config.files.and_then(|f| f.default) {
				Some(f) => f,
				None => bail!("No input file specified"),
			}
		},
	};

	let mut parser = parsing::parser::Parser::new();
	parser.parse(&file, &mut tape)?;

	match args.command {
		Directive::Show => {
			let reporter = CardReporter::new(
				tape.take_instruments(args.term.as_deref()),
			);
			reporter.print_cards();
		},
		Directive::Change => {
			let reporter = CardReporter::new(
				tape.take_instruments(args.term.as_deref()),
			);
			reporter.print_changes();
		},
		Directive::Check => {
			// simple log; warnings occur dynamically throughout processing
			println!("Done");
		},
	}

	Ok(())
}
