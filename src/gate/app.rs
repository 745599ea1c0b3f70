// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashgate
// File: app.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use crate::gate::algorithm::Algorithm;
use crate::gate::error::GateError;
use crate::gate::pipeline::Gate;
use crate::gate::weak;
use clap::error::ErrorKind;
use clap::{crate_name, Arg, ArgAction, ArgMatches};
use clap_complete::{generate, Generator, Shell};
use colored::*;
use std::ffi::OsString;
use std::io::{self, Read, Write};

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

const ABOUT: &str = "Soak up standard input, and write to standard output if checksum matches the given argument.";

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Settings resolved from the command line.
#[derive(Debug, Clone)]
pub struct Options {
	pub algorithm: String,
	pub expected: Option<String>,
	pub quiet: bool,
	pub verbose: bool,
	pub max_bytes: Option<u64>,
}

impl Options {
	fn from_matches(m: &ArgMatches) -> Self {
		Options {
			algorithm: m
				.get_one::<String>("algorithm")
				.cloned()
				.unwrap_or_else(|| Algorithm::default().to_string()),
			expected: m.get_one::<String>("expected").cloned(),
			quiet: m.get_flag("quiet"),
			verbose: m.get_flag("verbose"),
			max_bytes: m.get_one::<u64>("max-bytes").copied(),
		}
	}

	/// Resolves the algorithm and the expected digest, in that order, before
	/// any input is touched. An empty digest counts as missing.
	pub fn into_gate(self) -> Result<Gate, GateError> {
		let algorithm = Algorithm::from_name(&self.algorithm)?;
		let expected = self
			.expected
			.filter(|expected| !expected.is_empty())
			.ok_or(GateError::Usage)?;
		Ok(Gate::new(algorithm, expected)
			.with_limit(self.max_bytes)
			.with_verbose(self.verbose))
	}
}

pub fn build_cli() -> clap::Command {
	clap::Command::new(crate_name!())
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.bin_name(crate_name!())
		.version(clap::crate_version!())
		.about(ABOUT)
		.arg(
			Arg::new("algorithm")
				.short('a')
				.long("algorithm")
				.value_name("HASH_ALGORITHM")
				.help(format!(
					"hash algorithms: {}",
					Algorithm::names().join(", ")
				))
				.default_value("sha256"),
		)
		.arg(
			Arg::new("quiet")
				.short('q')
				.long("quiet")
				.action(ArgAction::SetTrue)
				.help("quiet; don't output error message on hash mismatch"),
		)
		.arg(
			Arg::new("verbose")
				.short('v')
				.long("verbose")
				.action(ArgAction::SetTrue)
				.help("Report progress and weak-algorithm advisories on stderr"),
		)
		.arg(
			Arg::new("max-bytes")
				.long("max-bytes")
				.value_name("BYTES")
				.value_parser(clap::value_parser!(u64))
				.help("Refuse input larger than BYTES (default: unbounded)"),
		)
		.arg(
			Arg::new("completions")
				.long("completions")
				.value_name("SHELL")
				.value_parser(clap::value_parser!(Shell))
				.help("Print shell completions and exit"),
		)
		.arg(
			Arg::new("expected")
				.value_name("HASH_VALUE")
				.help("Expected lowercase hex digest of standard input"),
		)
}

fn print_completions<G: Generator>(gen: G, cmd: &mut clap::Command) {
	generate(
		gen,
		cmd,
		cmd.get_name().to_string(),
		&mut io::stdout(),
	);
}

fn print_usage() {
	let mut cmd = build_cli();
	eprintln!("{}", cmd.render_help());
}

/// Writes the diagnostic for `err` to stderr unless quiet mode hides it.
pub fn report(err: &GateError, quiet: bool) {
	if quiet && err.is_quietable() {
		return;
	}
	match err {
		GateError::Usage => print_usage(),
		_ => eprintln!("{} {}", "error:".red().bold(), err),
	}
}

/// Runs the full gate over the given streams and returns the process exit
/// status.
pub fn run_from<I, T, R, W>(args: I, input: R, output: W) -> i32
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
	R: Read,
	W: Write,
{
	let matches = match build_cli().try_get_matches_from(args) {
		Ok(matches) => matches,
		Err(err) => {
			let _ = err.print();
			return match err.kind() {
				ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
					EXIT_SUCCESS
				}
				_ => EXIT_FAILURE,
			};
		}
	};

	if let Some(shell) = matches.get_one::<Shell>("completions") {
		let mut cmd = build_cli();
		print_completions(*shell, &mut cmd);
		return EXIT_SUCCESS;
	}

	let options = Options::from_matches(&matches);
	let quiet = options.quiet;
	let gate = match options.into_gate() {
		Ok(gate) => gate,
		Err(err) => {
			report(&err, quiet);
			return err.exit_code();
		}
	};

	if gate.verbose {
		weak::emit_advisory(gate.algorithm);
	}

	match gate.run(input, output) {
		Ok(_) => EXIT_SUCCESS,
		Err(err) => {
			report(&err, quiet);
			err.exit_code()
		}
	}
}

pub fn run() -> i32 {
	let stdin = io::stdin();
	let stdout = io::stdout();
	run_from(std::env::args_os(), stdin.lock(), stdout.lock())
}

#[cfg(test)]
mod tests {
	use super::*;

	const HELLO_SHA256: &str =
		"2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

	/// Panics if the gate touches its input.
	struct UntouchableReader;

	impl Read for UntouchableReader {
		fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
			panic!("input must not be read");
		}
	}

	fn run_args(args: &[&str], input: &[u8]) -> (i32, Vec<u8>) {
		let mut out = Vec::new();
		let mut argv = vec!["hashgate"];
		argv.extend_from_slice(args);
		let code = run_from(argv, input, &mut out);
		(code, out)
	}

	#[test]
	fn cli_definition_is_consistent() {
		build_cli().debug_assert();
	}

	#[test]
	fn matching_digest_echoes_input() {
		let (code, out) = run_args(&[HELLO_SHA256], b"hello");
		assert_eq!(code, EXIT_SUCCESS);
		assert_eq!(out, b"hello");
	}

	#[test]
	fn mismatch_emits_nothing() {
		let (code, out) = run_args(&["-q", "deadbeef"], b"hello");
		assert_eq!(code, EXIT_FAILURE);
		assert!(out.is_empty());
	}

	#[test]
	fn algorithm_flag_is_case_insensitive() {
		let digest = Algorithm::Md5.hex_digest(b"hello");
		let (code, out) = run_args(&["-a", "MD5", &digest], b"hello");
		assert_eq!(code, EXIT_SUCCESS);
		assert_eq!(out, b"hello");
	}

	#[test]
	fn unsupported_algorithm_fails_before_reading() {
		let mut out = Vec::new();
		let code = run_from(
			["hashgate", "-a", "sha3", HELLO_SHA256],
			UntouchableReader,
			&mut out,
		);
		assert_eq!(code, EXIT_FAILURE);
		assert!(out.is_empty());
	}

	#[test]
	fn missing_expected_hash_fails_before_reading() {
		let mut out = Vec::new();
		let code = run_from(["hashgate"], UntouchableReader, &mut out);
		assert_eq!(code, EXIT_FAILURE);
		assert!(out.is_empty());
	}

	#[test]
	fn empty_expected_hash_fails_before_reading() {
		let mut out = Vec::new();
		let code = run_from(["hashgate", ""], UntouchableReader, &mut out);
		assert_eq!(code, EXIT_FAILURE);
		assert!(out.is_empty());
		let matches = build_cli()
			.try_get_matches_from(["hashgate", ""])
			.unwrap();
		assert!(matches!(
			Options::from_matches(&matches).into_gate(),
			Err(GateError::Usage)
		));
	}

	#[test]
	fn unknown_flag_exits_with_one() {
		let mut out = Vec::new();
		let code = run_from(
			["hashgate", "--bogus", HELLO_SHA256],
			UntouchableReader,
			&mut out,
		);
		assert_eq!(code, EXIT_FAILURE);
	}

	#[test]
	fn options_resolve_defaults() {
		let matches = build_cli()
			.try_get_matches_from(["hashgate", "abc"])
			.unwrap();
		let options = Options::from_matches(&matches);
		assert_eq!(options.algorithm, "sha256");
		assert_eq!(options.expected.as_deref(), Some("abc"));
		assert!(!options.quiet);
		assert!(!options.verbose);
		assert_eq!(options.max_bytes, None);
		let gate = options.into_gate().unwrap();
		assert_eq!(gate.algorithm, Algorithm::Sha256);
		assert_eq!(gate.expected, "abc");
	}

	#[test]
	fn max_bytes_is_enforced() {
		let (code, out) =
			run_args(&["--max-bytes", "4", HELLO_SHA256], b"hello");
		assert_eq!(code, EXIT_FAILURE);
		assert!(out.is_empty());
	}
}
