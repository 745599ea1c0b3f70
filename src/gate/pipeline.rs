// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashgate
// File: pipeline.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Capture, verify, and gated emission of a buffered payload.

use std::io::{self, Read, Write};

use colored::Colorize;

use super::algorithm::Algorithm;
use super::error::GateError;

/// Reads `reader` to end-of-stream. Nothing captured so far survives an
/// error.
pub fn capture<R: Read>(
	mut reader: R,
	limit: Option<u64>,
) -> Result<Vec<u8>, GateError> {
	let mut buffer = Vec::new();
	match limit {
		Some(limit) => {
			reader
				.by_ref()
				.take(limit.saturating_add(1))
				.read_to_end(&mut buffer)
				.map_err(GateError::Read)?;
			if buffer.len() as u64 > limit {
				return Err(GateError::InputTooLarge { limit });
			}
		}
		None => {
			reader.read_to_end(&mut buffer).map_err(GateError::Read)?;
		}
	}
	Ok(buffer)
}

/// Compares the lowercase hex digest of `buffer` against `expected`
/// verbatim. Case differences count as a mismatch.
pub fn verify(
	algorithm: Algorithm,
	buffer: &[u8],
	expected: &str,
) -> Result<String, GateError> {
	let computed = algorithm.hex_digest(buffer);
	if computed != expected {
		return Err(GateError::HashMismatch {
			algorithm,
			computed,
		});
	}
	Ok(computed)
}

/// Writes all of `buffer`, resuming after interrupted writes.
pub fn emit<W: Write>(
	mut writer: W,
	buffer: &[u8],
) -> Result<(), GateError> {
	let mut written = 0;
	while written < buffer.len() {
		match writer.write(&buffer[written..]) {
			Ok(0) => {
				return Err(GateError::Write(io::Error::new(
					io::ErrorKind::WriteZero,
					"failed to write whole buffer",
				)))
			}
			Ok(n) => written += n,
			Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
			Err(e) => return Err(GateError::Write(e)),
		}
	}
	loop {
		match writer.flush() {
			Ok(()) => return Ok(()),
			Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
			Err(e) => return Err(GateError::Write(e)),
		}
	}
}

/// A configured integrity check over one input stream.
#[derive(Debug, Clone)]
pub struct Gate {
	pub algorithm: Algorithm,
	pub expected: String,
	pub limit: Option<u64>,
	pub verbose: bool,
}

impl Gate {
	pub fn new(algorithm: Algorithm, expected: impl Into<String>) -> Self {
		Self {
			algorithm,
			expected: expected.into(),
			limit: None,
			verbose: false,
		}
	}

	pub fn with_limit(mut self, limit: Option<u64>) -> Self {
		self.limit = limit;
		self
	}

	pub fn with_verbose(mut self, verbose: bool) -> Self {
		self.verbose = verbose;
		self
	}

	/// Returns the number of bytes passed through on success.
	pub fn run<R: Read, W: Write>(
		&self,
		reader: R,
		writer: W,
	) -> Result<usize, GateError> {
		let buffer = capture(reader, self.limit)?;
		self.trace(&format!("read {} bytes", buffer.len()));
		if let Some(hint) = self.length_hint() {
			self.trace(&hint);
		}
		let computed = verify(self.algorithm, &buffer, &self.expected)?;
		self.trace(&format!("{} digest {} matched", self.algorithm, computed));
		emit(writer, &buffer)?;
		self.trace(&format!("wrote {} bytes", buffer.len()));
		Ok(buffer.len())
	}

	/// Notes an expected digest whose length cannot match the algorithm.
	pub fn length_hint(&self) -> Option<String> {
		let hex_len = self.algorithm.output_len() * 2;
		if self.expected.len() == hex_len {
			return None;
		}
		Some(format!(
			"expected digest has {} characters, {} digests have {}",
			self.expected.len(),
			self.algorithm,
			hex_len
		))
	}

	fn trace(&self, message: &str) {
		if self.verbose {
			eprintln!("{} {}", "info:".cyan(), message);
		}
	}
}
