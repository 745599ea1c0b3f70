// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashgate
// File: error.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Failure kinds of a gate run. Every variant is terminal and maps to exit
//! status 1.

use std::fmt;
use std::io;

use super::algorithm::Algorithm;

#[derive(Debug)]
pub enum GateError {
	/// The expected digest argument was not supplied.
	Usage,
	UnsupportedAlgorithm {
		name: String,
	},
	Read(io::Error),
	InputTooLarge {
		limit: u64,
	},
	HashMismatch {
		algorithm: Algorithm,
		computed: String,
	},
	Write(io::Error),
}

impl GateError {
	pub fn exit_code(&self) -> i32 {
		1
	}

	/// Whether `--quiet` silences this error on stderr.
	pub fn is_quietable(&self) -> bool {
		matches!(self, GateError::HashMismatch { .. })
	}
}

impl fmt::Display for GateError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GateError::Usage => {
				write!(f, "missing required argument EXPECTED_HASH")
			}
			GateError::UnsupportedAlgorithm { name } => write!(
				f,
				"unknown hash algorithm: {} (supported: {})",
				name,
				Algorithm::names().join(", ")
			),
			GateError::Read(source) => {
				write!(f, "failed to read standard input: {}", source)
			}
			GateError::InputTooLarge { limit } => write!(
				f,
				"input exceeds the configured limit of {} bytes",
				limit
			),
			GateError::HashMismatch {
				algorithm,
				computed,
			} => write!(
				f,
				"hash mismatch (input {} hash: {})",
				algorithm, computed
			),
			GateError::Write(source) => {
				write!(f, "failed to write standard output: {}", source)
			}
		}
	}
}

impl std::error::Error for GateError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			GateError::Read(source) | GateError::Write(source) => {
				Some(source)
			}
			_ => None,
		}
	}
}
